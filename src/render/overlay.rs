use super::Frame;
use super::Icon;

/// Composite `icon` onto `frame` with its top-left corner at (`x`, `y`).
///
/// All or nothing: if any part of the icon would land outside the frame the
/// frame is left untouched and `false` is returned. Translucent icons use
/// straight alpha, `a * icon + (1 - a) * frame` per channel; opaque icons
/// overwrite the region.
pub fn blend(frame: &mut Frame, icon: &Icon, x: i64, y: i64) -> bool {
    let fits = x >= 0
        && y >= 0
        && x + icon.width() as i64 <= frame.width() as i64
        && y + icon.height() as i64 <= frame.height() as i64;
    if !fits {
        return false;
    }
    match icon {
        Icon::Opaque(image) => image::imageops::replace(frame, image, x, y),
        Icon::Translucent(image) => {
            for (ix, iy, src) in image.enumerate_pixels() {
                let alpha = src[3] as f32 / 255.0;
                let dst = frame.get_pixel_mut(x as u32 + ix, y as u32 + iy);
                for c in 0..3 {
                    dst[c] = (alpha * src[c] as f32 + (1.0 - alpha) * dst[c] as f32) as u8;
                }
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use image::RgbImage;
    use image::Rgba;
    use image::RgbaImage;

    fn backdrop() -> Frame {
        Frame::from_fn(40, 30, |x, y| Rgb([x as u8 * 3, y as u8 * 5, 100]))
    }

    #[test]
    fn out_of_bounds_is_a_no_op() {
        let icon = Icon::Opaque(RgbImage::from_pixel(8, 8, Rgb([255, 0, 0])));
        for (x, y) in [(-1, 0), (0, -1), (33, 0), (0, 23), (40, 30), (-8, -8), (100, 100)] {
            let mut frame = backdrop();
            assert!(!blend(&mut frame, &icon, x, y));
            assert!(frame.as_raw() == backdrop().as_raw());
        }
    }

    #[test]
    fn flush_with_the_edge_fits() {
        let icon = Icon::Opaque(RgbImage::from_pixel(8, 8, Rgb([255, 0, 0])));
        let mut frame = backdrop();
        assert!(blend(&mut frame, &icon, 32, 22));
        assert!(*frame.get_pixel(39, 29) == Rgb([255, 0, 0]));
        assert!(*frame.get_pixel(31, 21) == *backdrop().get_pixel(31, 21));
    }

    #[test]
    fn opaque_overwrites() {
        let icon = Icon::Opaque(RgbImage::from_pixel(4, 4, Rgb([1, 2, 3])));
        let mut frame = backdrop();
        assert!(blend(&mut frame, &icon, 10, 10));
        for y in 10..14 {
            for x in 10..14 {
                assert!(*frame.get_pixel(x, y) == Rgb([1, 2, 3]));
            }
        }
        assert!(*frame.get_pixel(14, 10) == *backdrop().get_pixel(14, 10));
    }

    #[test]
    fn straight_alpha_per_channel() {
        let mut icon = RgbaImage::from_pixel(2, 1, Rgba([200, 100, 0, 255]));
        icon.put_pixel(1, 0, Rgba([200, 100, 0, 0]));
        let mut frame = Frame::from_pixel(4, 4, Rgb([100, 100, 100]));
        assert!(blend(&mut frame, &Icon::Translucent(icon), 0, 0));
        assert!(*frame.get_pixel(0, 0) == Rgb([200, 100, 0]));
        assert!(*frame.get_pixel(1, 0) == Rgb([100, 100, 100]));
    }

    #[test]
    fn partial_alpha_mixes() {
        let icon = RgbaImage::from_pixel(1, 1, Rgba([200, 0, 0, 128]));
        let mut frame = Frame::from_pixel(2, 2, Rgb([0, 100, 200]));
        assert!(blend(&mut frame, &Icon::Translucent(icon), 1, 1));
        // truncated, not rounded
        assert!(*frame.get_pixel(1, 1) == Rgb([100, 49, 99]));
        assert!(*frame.get_pixel(0, 0) == Rgb([0, 100, 200]));
    }
}
