use crate::Pixels;
use crate::render::Frame;
use image::RgbImage;

/// The fixed square the player holds a gesture inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    x: Pixels,
    y: Pixels,
    side: Pixels,
}

impl Region {
    /// Square of `side` centered in a `width` x `height` frame. Frames
    /// smaller than the square shrink it to their shorter side.
    pub fn centered(width: Pixels, height: Pixels, side: Pixels) -> Self {
        let side = side.min(width).min(height);
        Self {
            x: (width - side) / 2,
            y: (height - side) / 2,
            side,
        }
    }
    pub fn within(frame: &Frame, side: Pixels) -> Self {
        Self::centered(frame.width(), frame.height(), side)
    }
    pub fn origin(&self) -> (Pixels, Pixels) {
        (self.x, self.y)
    }
    pub fn side(&self) -> Pixels {
        self.side
    }
    /// Owned copy of the region's pixels.
    pub fn extract(&self, frame: &Frame) -> RgbImage {
        image::imageops::crop_imm(frame, self.x, self.y, self.side, self.side).to_image()
    }
}

/// Channel order a classifier expects its input in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ColorOrder {
    #[default]
    Rgb,
    Bgr,
}

impl ColorOrder {
    /// Frames are RGB; reorder if the classifier wants otherwise.
    pub fn convert(&self, mut roi: RgbImage) -> RgbImage {
        if let Self::Bgr = self {
            for pixel in roi.pixels_mut() {
                pixel.0.swap(0, 2);
            }
        }
        roi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn centered_in_a_webcam_frame() {
        let region = Region::centered(640, 480, 280);
        assert!(region.origin() == (180, 100));
        assert!(region.side() == 280);
    }

    #[test]
    fn small_frames_shrink_the_region() {
        let region = Region::centered(200, 120, 280);
        assert!(region.side() == 120);
        assert!(region.origin() == (40, 0));
    }

    #[test]
    fn extracts_the_square() {
        let frame = Frame::from_fn(10, 8, |x, y| Rgb([x as u8, y as u8, 0]));
        let region = Region::centered(10, 8, 4);
        let roi = region.extract(&frame);
        assert!(roi.dimensions() == (4, 4));
        assert!(*roi.get_pixel(0, 0) == Rgb([3, 2, 0]));
        assert!(*roi.get_pixel(3, 3) == Rgb([6, 5, 0]));
    }

    #[test]
    fn bgr_swaps_red_and_blue() {
        let roi = RgbImage::from_pixel(2, 2, Rgb([1, 2, 3]));
        assert!(*ColorOrder::Bgr.convert(roi.clone()).get_pixel(1, 1) == Rgb([3, 2, 1]));
        assert!(ColorOrder::Rgb.convert(roi.clone()) == roi);
    }
}
