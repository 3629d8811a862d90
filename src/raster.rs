//! Software rasterization of the drawing primitives onto an RGBA buffer.
//!
//! Coverage is sampled once at each pixel center, so edges are hard and the
//! result is deterministic. Everything outside the buffer is clipped.

use egui::{Pos2, Rect, Vec2};
use image::{Rgba, RgbaImage};

/// Geometry of a single drawing primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Straight segment with round caps
    Segment { from: Pos2, to: Pos2 },
    /// Axis-aligned box, already normalized
    Rect(Rect),
    /// Ellipse given by its center and per-axis radii
    Ellipse { center: Pos2, radii: Vec2 },
    Triangle([Pos2; 3]),
}

/// A primitive plus the paint parameters it is applied with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintOp {
    pub shape: Shape,
    pub color: Rgba<u8>,
    pub width: f32,
    pub filled: bool,
}

impl PaintOp {
    pub fn stroked(shape: Shape, color: Rgba<u8>, width: f32) -> Self {
        Self {
            shape,
            color,
            width,
            filled: false,
        }
    }

    pub fn filled(shape: Shape, color: Rgba<u8>) -> Self {
        Self {
            shape,
            color,
            width: 0.0,
            filled: true,
        }
    }
}

/// Apply `op` to `image`, alpha-blending the color over existing pixels.
pub fn paint(image: &mut RgbaImage, op: &PaintOp) {
    let half = (op.width * 0.5).max(0.5);
    match op.shape {
        Shape::Segment { from, to } => paint_segment(image, from, to, half, op.color),
        Shape::Rect(rect) => {
            if op.filled {
                fill_region(image, rect, op.color, |p| rect_contains(rect, p));
            } else {
                let outer = rect.expand(half);
                let inner = rect.shrink(half);
                fill_region(image, outer, op.color, |p| {
                    rect_contains(outer, p) && !rect_contains(inner, p)
                });
            }
        }
        Shape::Ellipse { center, radii } => {
            if radii.x <= 0.0 || radii.y <= 0.0 {
                return;
            }
            if op.filled {
                let bounds = Rect::from_center_size(center, radii * 2.0);
                fill_region(image, bounds, op.color, |p| in_ellipse(center, radii, p));
            } else {
                let outer = radii + Vec2::splat(half);
                let inner = radii - Vec2::splat(half);
                let bounds = Rect::from_center_size(center, outer * 2.0);
                fill_region(image, bounds, op.color, |p| {
                    in_ellipse(center, outer, p)
                        && (inner.x <= 0.0 || inner.y <= 0.0 || !in_ellipse(center, inner, p))
                });
            }
        }
        Shape::Triangle(points) => {
            if op.filled {
                let bounds = Rect::from_points(&points);
                fill_region(image, bounds, op.color, |p| in_triangle(points, p));
            } else {
                for i in 0..3 {
                    paint_segment(image, points[i], points[(i + 1) % 3], half, op.color);
                }
            }
        }
    }
}

fn paint_segment(image: &mut RgbaImage, from: Pos2, to: Pos2, half: f32, color: Rgba<u8>) {
    let bounds = Rect::from_two_pos(from, to).expand(half);
    fill_region(image, bounds, color, |p| {
        distance_to_segment(p, from, to) <= half
    });
}

/// Blend every pixel in `bounds` whose center satisfies `inside`.
fn fill_region(
    image: &mut RgbaImage,
    bounds: Rect,
    color: Rgba<u8>,
    inside: impl Fn(Pos2) -> bool,
) {
    let Some((x0, y0, x1, y1)) = clip(image, bounds) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
            if inside(center) {
                blend(image.get_pixel_mut(x, y), color, 1.0);
            }
        }
    }
}

/// Pixel range covering `bounds`, intersected with the image. `None` when empty.
fn clip(image: &RgbaImage, bounds: Rect) -> Option<(u32, u32, u32, u32)> {
    if !bounds.is_finite() {
        return None;
    }
    let (w, h) = (image.width() as f32, image.height() as f32);
    let x0 = bounds.min.x.floor().clamp(0.0, w) as u32;
    let y0 = bounds.min.y.floor().clamp(0.0, h) as u32;
    let x1 = bounds.max.x.ceil().clamp(0.0, w) as u32;
    let y1 = bounds.max.y.ceil().clamp(0.0, h) as u32;
    (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
}

/// Blend a single pixel with partial `coverage` in 0..=1. Out-of-bounds is ignored.
pub fn blend_at(image: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= i64::from(image.width()) || y >= i64::from(image.height()) {
        return;
    }
    blend(image.get_pixel_mut(x as u32, y as u32), color, coverage);
}

/// Source-over compositing with straight alpha.
pub fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>, coverage: f32) {
    let src_a = f32::from(src[3]) / 255.0 * coverage.clamp(0.0, 1.0);
    if src_a <= 0.0 {
        return;
    }
    if src_a >= 1.0 {
        *dst = src;
        return;
    }
    let dst_a = f32::from(dst[3]) / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    for i in 0..3 {
        let s = f32::from(src[i]);
        let d = f32::from(dst[i]);
        let c = (s * src_a + d * dst_a * (1.0 - src_a)) / out_a;
        dst[i] = c.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}

fn rect_contains(rect: Rect, p: Pos2) -> bool {
    p.x >= rect.min.x && p.x < rect.max.x && p.y >= rect.min.y && p.y < rect.max.y
}

fn in_ellipse(center: Pos2, radii: Vec2, p: Pos2) -> bool {
    let d = p - center;
    (d.x / radii.x).powi(2) + (d.y / radii.y).powi(2) <= 1.0
}

fn in_triangle([a, b, c]: [Pos2; 3], p: Pos2) -> bool {
    let edge = |u: Pos2, v: Pos2| (v.x - u.x) * (p.y - u.y) - (v.y - u.y) * (p.x - u.x);
    let (d0, d1, d2) = (edge(a, b), edge(b, c), edge(c, a));
    let has_neg = d0 < 0.0 || d1 < 0.0 || d2 < 0.0;
    let has_pos = d0 > 0.0 || d1 > 0.0 || d2 > 0.0;
    !(has_neg && has_pos)
}

/// Distance from `point` to the segment `start..end`
pub fn distance_to_segment(point: Pos2, start: Pos2, end: Pos2) -> f32 {
    let line = end - start;
    let len_sq = line.length_sq();
    if len_sq == 0.0 {
        return (point - start).length();
    }
    let t = ((point - start).dot(line) / len_sq).clamp(0.0, 1.0);
    (point - (start + line * t)).length()
}
