use egui::Pos2;
use image::Rgba;

use crate::raster::{PaintOp, Shape};
use crate::style::Style;

/// One freehand segment from the previously sampled point to `current`.
///
/// Called on every pointer move, so consecutive segments form a connected
/// polyline. Fill mode does not apply to freehand strokes.
pub fn brush_segment(previous: Pos2, current: Pos2, style: &Style) -> PaintOp {
    PaintOp::stroked(
        Shape::Segment {
            from: previous,
            to: current,
        },
        style.pixel(),
        style.stroke_width,
    )
}

/// Same as [`brush_segment`] but painted with the surface background color
pub fn eraser_segment(previous: Pos2, current: Pos2, style: &Style, background: Rgba<u8>) -> PaintOp {
    PaintOp {
        color: background,
        ..brush_segment(previous, current, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Color32, pos2};

    #[test]
    fn test_brush_uses_style() {
        let style = Style::default()
            .with_color(Color32::from_rgb(1, 2, 3))
            .with_stroke_width(9.0);
        let op = brush_segment(pos2(0.0, 0.0), pos2(4.0, 4.0), &style);
        assert_eq!(op.color, Rgba([1, 2, 3, 255]));
        assert_eq!(op.width, 9.0);
        assert!(!op.filled);
    }

    #[test]
    fn test_eraser_ignores_style_color() {
        let style = Style::default().with_color(Color32::RED);
        let bg = Rgba([10, 20, 30, 255]);
        let op = eraser_segment(pos2(0.0, 0.0), pos2(4.0, 4.0), &style, bg);
        assert_eq!(op.color, bg);
        assert_eq!(op.width, style.stroke_width);
    }
}
