use crate::Pixels;
use image::Rgb;
use image::RgbImage;

/// A single video frame, 8-bit RGB.
pub type Frame = RgbImage;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
pub const YELLOW: Rgb<u8> = Rgb([255, 255, 0]);
pub const RED: Rgb<u8> = Rgb([255, 0, 0]);

/// Rectangle outline grown inward from the given box, clipped to the frame.
pub fn outline(
    frame: &mut Frame,
    (x, y): (Pixels, Pixels),
    (w, h): (Pixels, Pixels),
    thickness: Pixels,
    color: Rgb<u8>,
) {
    let right = x.saturating_add(w).min(frame.width());
    let bottom = y.saturating_add(h).min(frame.height());
    let t = thickness.max(1);
    for py in y..bottom {
        for px in x..right {
            let edge = px < x + t || py < y + t || px + t >= x + w || py + t >= y + h;
            if edge {
                frame.put_pixel(px, py, color);
            }
        }
    }
}

/// Coverage-weighted paint of a single pixel, ignoring anything off-frame.
pub fn paint(frame: &mut Frame, x: i64, y: i64, color: Rgb<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= frame.width() as i64 || y >= frame.height() as i64 {
        return;
    }
    let a = coverage.clamp(0.0, 1.0);
    let dst = frame.get_pixel_mut(x as u32, y as u32);
    for c in 0..3 {
        dst[c] = (a * color[c] as f32 + (1.0 - a) * dst[c] as f32) as u8;
    }
}
