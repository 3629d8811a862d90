use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};
use egui::Pos2;
use image::Rgba;
use thiserror::Error;

use crate::surface::Surface;

/// Smallest font size the text tool will use
pub const MIN_FONT_SIZE: f32 = 12.0;

#[derive(Error, Debug)]
pub enum TextError {
    #[error("invalid font data: {0}")]
    InvalidFont(#[from] ab_glyph::InvalidFont),

    #[error("font {0:?} is not bundled")]
    MissingFont(String),
}

/// Font size for a given brush width
pub fn font_size_for_width(stroke_width: f32) -> f32 {
    (stroke_width * 4.0).max(MIN_FONT_SIZE)
}

/// The editor asking its host for a line of text at a point.
///
/// The host shows whatever input chrome it likes and answers with either
/// `Editor::commit_text` or `Editor::cancel_text`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextEntryRequest {
    pub position: Pos2,
    pub font_size: f32,
}

impl TextEntryRequest {
    pub fn new(position: Pos2, font_size: f32) -> Self {
        Self {
            position,
            font_size,
        }
    }
}

/// Rasterizes text into a surface using a TrueType/OpenType font
pub struct TextRenderer {
    font: FontVec,
}

impl std::fmt::Debug for TextRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextRenderer")
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl TextRenderer {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, TextError> {
        Ok(Self {
            font: FontVec::try_from_vec(data)?,
        })
    }

    /// Load the proportional font egui ships with
    pub fn egui_default() -> Result<Self, TextError> {
        const NAME: &str = "Ubuntu-Light";
        let definitions = egui::FontDefinitions::default();
        let data = definitions
            .font_data
            .get(NAME)
            .map(|data| data.font.to_vec())
            .ok_or_else(|| TextError::MissingFont(NAME.to_owned()))?;
        Self::from_bytes(data)
    }

    /// Height of one line of text at `size` pixels
    pub fn line_height(&self, size: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(size));
        scaled.height() + scaled.line_gap()
    }

    /// Draw `text` with its top-left corner at `origin`. Lines split on `\n`.
    pub fn render(&self, surface: &mut Surface, origin: Pos2, text: &str, size: f32, color: Rgba<u8>) {
        let scale = PxScale::from(size);
        let scaled = self.font.as_scaled(scale);
        let line_height = self.line_height(size);

        for (row, line) in text.lines().enumerate() {
            let baseline = origin.y + scaled.ascent() + row as f32 * line_height;
            let mut caret = origin.x;
            let mut prev: Option<GlyphId> = None;

            for ch in line.chars() {
                let id = self.font.glyph_id(ch);
                if let Some(prev) = prev {
                    caret += scaled.kern(prev, id);
                }
                let glyph = id.with_scale_and_position(scale, point(caret, baseline));
                caret += scaled.h_advance(id);
                prev = Some(id);

                let Some(outlined) = self.font.outline_glyph(glyph) else {
                    continue;
                };
                let bounds = outlined.px_bounds();
                outlined.draw(|x, y, coverage| {
                    surface.blend_pixel(
                        bounds.min.x as i64 + i64::from(x),
                        bounds.min.y as i64 + i64::from(y),
                        color,
                        coverage,
                    );
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_size_grows_with_width() {
        assert_eq!(font_size_for_width(1.0), MIN_FONT_SIZE);
        assert_eq!(font_size_for_width(5.0), 20.0);
    }

    #[test]
    fn test_garbage_font_is_rejected() {
        assert!(TextRenderer::from_bytes(vec![0, 1, 2, 3]).is_err());
    }

    #[test]
    fn test_render_marks_pixels() {
        let renderer = TextRenderer::egui_default().unwrap();
        let mut surface = Surface::new(120, 60, egui::Color32::WHITE);
        let before = surface.snapshot();
        renderer.render(&mut surface, Pos2::new(4.0, 4.0), "Hi", 24.0, Rgba([0, 0, 0, 255]));
        assert!(!surface.matches(&before));
        assert!(renderer.line_height(24.0) > 0.0);
    }
}
