use egui::{Pos2, Rect, Vec2};

use crate::raster::{PaintOp, Shape};
use crate::style::Style;

/// Box with corners at `anchor` and `current`, with non-negative width and
/// height whichever way the pointer was dragged
pub fn normalized_rect(anchor: Pos2, current: Pos2) -> Rect {
    let min = Pos2::new(anchor.x.min(current.x), anchor.y.min(current.y));
    let size = Vec2::new((anchor.x - current.x).abs(), (anchor.y - current.y).abs());
    Rect::from_min_size(min, size)
}

/// Apex at `anchor`, one base corner at `current` and the other mirrored
/// across the vertical line through the apex
pub fn triangle_vertices(anchor: Pos2, current: Pos2) -> [Pos2; 3] {
    [
        anchor,
        current,
        Pos2::new(2.0 * anchor.x - current.x, current.y),
    ]
}

pub fn rectangle(anchor: Pos2, current: Pos2, style: &Style) -> PaintOp {
    shape_op(Shape::Rect(normalized_rect(anchor, current)), style)
}

/// Circle centered on the anchor, radius = distance to the pointer
pub fn circle(anchor: Pos2, current: Pos2, style: &Style) -> PaintOp {
    let radius = anchor.distance(current);
    shape_op(
        Shape::Ellipse {
            center: anchor,
            radii: Vec2::splat(radius),
        },
        style,
    )
}

pub fn triangle(anchor: Pos2, current: Pos2, style: &Style) -> PaintOp {
    shape_op(Shape::Triangle(triangle_vertices(anchor, current)), style)
}

/// A line is always stroked
pub fn line(anchor: Pos2, current: Pos2, style: &Style) -> PaintOp {
    PaintOp::stroked(
        Shape::Segment {
            from: anchor,
            to: current,
        },
        style.pixel(),
        style.stroke_width,
    )
}

fn shape_op(shape: Shape, style: &Style) -> PaintOp {
    if style.fill_mode.is_filled() {
        PaintOp::filled(shape, style.pixel())
    } else {
        PaintOp::stroked(shape, style.pixel(), style.stroke_width)
    }
}
