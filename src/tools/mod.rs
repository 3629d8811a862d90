use egui::Pos2;
use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::raster::PaintOp;
use crate::style::Style;

mod brush;
mod shapes;

pub use brush::{brush_segment, eraser_segment};
pub use shapes::{circle, line, normalized_rect, rectangle, triangle, triangle_vertices};

/// Every tool the editor offers.
///
/// Brush and eraser are continuous (ink accumulates on every move), the shape
/// tools are previewed until release, and eyedropper/text act on a single click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Brush,
    Eraser,
    Rectangle,
    Circle,
    Triangle,
    Line,
    Eyedropper,
    Text,
}

impl ToolKind {
    pub const ALL: [ToolKind; 8] = [
        ToolKind::Brush,
        ToolKind::Eraser,
        ToolKind::Rectangle,
        ToolKind::Circle,
        ToolKind::Triangle,
        ToolKind::Line,
        ToolKind::Eyedropper,
        ToolKind::Text,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Brush => "Brush",
            Self::Eraser => "Eraser",
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Triangle => "Triangle",
            Self::Line => "Line",
            Self::Eyedropper => "Eyedropper",
            Self::Text => "Text",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Brush => "🖌",
            Self::Eraser => "⌫",
            Self::Rectangle => "⬜",
            Self::Circle => "⭕",
            Self::Triangle => "△",
            Self::Line => "╱",
            Self::Eyedropper => "💧",
            Self::Text => "A",
        }
    }

    /// Tools whose segments go straight onto the live surface
    pub fn is_continuous(self) -> bool {
        matches!(self, Self::Brush | Self::Eraser)
    }

    /// Tools drawn as a discardable preview frame until the pointer is released
    pub fn is_preview(self) -> bool {
        matches!(
            self,
            Self::Rectangle | Self::Circle | Self::Triangle | Self::Line
        )
    }

    /// The primitive to show for a pointer at `current`.
    ///
    /// For continuous tools `from` is the previously sampled point; for shape
    /// tools it is the anchor. Single-click tools produce nothing, and neither
    /// does a shape with no extent (pointer released where it was pressed).
    pub fn frame(self, from: Pos2, current: Pos2, style: &Style, background: Rgba<u8>) -> Option<PaintOp> {
        if self.is_preview() && from == current {
            return None;
        }
        match self {
            Self::Brush => Some(brush_segment(from, current, style)),
            Self::Eraser => Some(eraser_segment(from, current, style, background)),
            Self::Rectangle => Some(rectangle(from, current, style)),
            Self::Circle => Some(circle(from, current, style)),
            Self::Triangle => Some(triangle(from, current, style)),
            Self::Line => Some(line(from, current, style)),
            Self::Eyedropper | Self::Text => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_categories_are_disjoint() {
        for tool in ToolKind::ALL {
            assert!(!(tool.is_continuous() && tool.is_preview()), "{tool:?}");
        }
        assert!(!ToolKind::Eyedropper.is_continuous() && !ToolKind::Eyedropper.is_preview());
        assert!(!ToolKind::Text.is_continuous() && !ToolKind::Text.is_preview());
    }

    #[test]
    fn test_single_click_tools_have_no_frame() {
        let style = Style::default();
        let bg = Rgba([255, 255, 255, 255]);
        let p = Pos2::new(1.0, 1.0);
        assert!(ToolKind::Eyedropper.frame(p, p, &style, bg).is_none());
        assert!(ToolKind::Text.frame(p, p, &style, bg).is_none());
        assert!(ToolKind::Brush.frame(p, p, &style, bg).is_some());
    }

    #[test]
    fn test_shapes_without_extent_have_no_frame() {
        let style = Style::default();
        let bg = Rgba([255, 255, 255, 255]);
        let p = Pos2::new(30.0, 30.0);
        for tool in [ToolKind::Rectangle, ToolKind::Circle, ToolKind::Triangle, ToolKind::Line] {
            assert!(tool.frame(p, p, &style, bg).is_none(), "{tool:?}");
            assert!(tool.frame(p, p + egui::vec2(0.0, 4.0), &style, bg).is_some(), "{tool:?}");
        }
    }
}
