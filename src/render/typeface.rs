use super::Frame;
use super::paint;
use crate::Pixels;
use ab_glyph::Font;
use ab_glyph::FontArc;
use ab_glyph::GlyphId;
use ab_glyph::PxScale;
use ab_glyph::ScaleFont;
use ab_glyph::point;
use anyhow::Context;
use image::Rgb;
use std::path::Path;

/// DejaVu Sans Mono, shipped in the binary so text never depends on assets.
const BUNDLED: &[u8] = include_bytes!("../../assets/DejaVuSansMono.ttf");

/// Anti-aliased HUD text from a TrueType/OpenType font.
#[derive(Clone)]
pub struct Typeface {
    font: FontArc,
}

impl Typeface {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let bytes = std::fs::read(path).with_context(|| format!("read font {}", path.display()))?;
        let font =
            FontArc::try_from_vec(bytes).with_context(|| format!("parse font {}", path.display()))?;
        Ok(Self { font })
    }

    /// The font compiled into the crate.
    pub fn bundled() -> anyhow::Result<Self> {
        let font = FontArc::try_from_slice(BUNDLED).context("parse bundled font")?;
        Ok(Self { font })
    }

    /// `path` when given and readable, otherwise the bundled font.
    pub fn resolve(path: Option<&Path>) -> anyhow::Result<Self> {
        match path.map(Self::load) {
            Some(Ok(typeface)) => Ok(typeface),
            Some(Err(e)) => {
                log::warn!("falling back to bundled font: {:#}", e);
                Self::bundled()
            }
            None => Self::bundled(),
        }
    }

    /// Advance width and ascent of `text` at pixel height `px`.
    pub fn measure(&self, text: &str, px: f32) -> (Pixels, Pixels) {
        let scaled = self.font.as_scaled(PxScale::from(px));
        let width = self
            .layout(text, px)
            .last()
            .map(|(id, caret)| caret + scaled.h_advance(*id))
            .unwrap_or(0.0);
        (width.ceil() as Pixels, scaled.ascent().ceil() as Pixels)
    }

    /// Draw `text` with its baseline starting at (`x`, `baseline`).
    pub fn draw(&self, frame: &mut Frame, text: &str, x: i64, baseline: i64, px: f32, color: Rgb<u8>) {
        let scale = PxScale::from(px);
        for (id, caret) in self.layout(text, px) {
            let glyph = id.with_scale_and_position(scale, point(x as f32 + caret, baseline as f32));
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, coverage| {
                    let cx = bounds.min.x as i64 + gx as i64;
                    let cy = bounds.min.y as i64 + gy as i64;
                    paint(frame, cx, cy, color, coverage);
                });
            }
        }
    }

    /// Glyph ids paired with their kerned caret offsets.
    fn layout(&self, text: &str, px: f32) -> Vec<(GlyphId, f32)> {
        let scaled = self.font.as_scaled(PxScale::from(px));
        let mut caret = 0.0;
        let mut prior = None::<GlyphId>;
        let mut glyphs = Vec::with_capacity(text.len());
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = prior {
                caret += scaled.h_advance(prev) + scaled.kern(prev, id);
            }
            glyphs.push((id, caret));
            prior = Some(id);
        }
        glyphs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_font_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Typeface::load(&dir.path().join("absent.ttf")).is_err());
    }

    #[test]
    fn garbage_font_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        assert!(Typeface::load(&path).is_err());
    }

    #[test]
    fn unreadable_font_falls_back_to_bundled() {
        let dir = tempfile::tempdir().unwrap();
        let typeface = Typeface::resolve(Some(&dir.path().join("absent.ttf"))).unwrap();
        assert!(typeface.measure("YOU WIN", 64.0).0 > 0);
        assert!(Typeface::resolve(None).unwrap().measure("a", 22.0).0 > 0);
    }

    #[test]
    fn monospaced_advances_add_up() {
        let typeface = Typeface::bundled().unwrap();
        let (one, ascent) = typeface.measure("M", 22.0);
        let (ten, _) = typeface.measure("MMMMMMMMMM", 22.0);
        assert!(ascent > 0);
        assert!(ten >= 9 * one && ten <= 10 * one);
        assert!(typeface.measure("", 22.0).0 == 0);
    }

    #[test]
    fn draws_inside_the_frame_only() {
        let typeface = Typeface::bundled().unwrap();
        let mut frame = Frame::new(120, 40);
        typeface.draw(&mut frame, "Round 1/3", 10, 30, 22.0, Rgb([255, 255, 255]));
        let lit = frame.pixels().filter(|p| p[0] > 128).count();
        assert!(lit > 50);
        assert!(frame.enumerate_pixels().all(|(x, _, p)| x >= 8 || p[0] == 0));
        // entirely off-frame text is a no-op
        let mut blank = Frame::new(40, 40);
        typeface.draw(&mut blank, "DRAW", 200, -100, 64.0, Rgb([255, 255, 255]));
        assert!(blank.pixels().all(|p| p[0] == 0));
    }
}
