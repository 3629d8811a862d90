use std::sync::Arc;

use egui::Color32;
use image::{Rgba, RgbaImage};

use crate::raster::{self, PaintOp};
use crate::style::to_pixel;

/// Immutable full copy of the surface pixels at one instant.
///
/// Cloning is cheap; the pixel data is shared.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot(Arc<RgbaImage>);

impl Snapshot {
    pub fn image(&self) -> &RgbaImage {
        &self.0
    }

    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    /// True when both snapshots share the same allocation
    pub fn ptr_eq(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// The single mutable pixel buffer holding the artwork
#[derive(Debug, Clone)]
pub struct Surface {
    pixels: RgbaImage,
    background: Rgba<u8>,
}

impl Surface {
    /// Create a surface filled with `background`
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        let background = to_pixel(background);
        Self {
            pixels: RgbaImage::from_pixel(width, height, background),
            background,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn background(&self) -> Rgba<u8> {
        self.background
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Apply a drawing primitive directly onto the buffer
    pub fn paint(&mut self, op: &PaintOp) {
        raster::paint(&mut self.pixels, op);
    }

    /// Blend one pixel with partial coverage; used for glyph rendering
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Rgba<u8>, coverage: f32) {
        raster::blend_at(&mut self.pixels, x, y, color, coverage);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        (x < self.width() && y < self.height()).then(|| *self.pixels.get_pixel(x, y))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot(Arc::new(self.pixels.clone()))
    }

    /// Overwrite the buffer with `snapshot`. A snapshot of a different size
    /// replaces the buffer wholesale.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        if snapshot.width() == self.width() && snapshot.height() == self.height() {
            self.pixels.copy_from_slice(snapshot.image().as_raw());
        } else {
            self.pixels = snapshot.image().clone();
        }
    }

    /// Fill the whole buffer with `background`, which also becomes the eraser color
    pub fn clear(&mut self, background: Color32) {
        self.background = to_pixel(background);
        let bg = self.background;
        self.pixels.pixels_mut().for_each(|p| *p = bg);
    }

    /// Matches pixel for pixel
    pub fn matches(&self, snapshot: &Snapshot) -> bool {
        &self.pixels == snapshot.image()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Shape;
    use egui::{pos2, Rect};

    #[test]
    fn test_new_surface_is_background() {
        let surface = Surface::new(8, 4, Color32::WHITE);
        assert_eq!(surface.width(), 8);
        assert_eq!(surface.height(), 4);
        assert!(surface.image().pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
        assert_eq!(surface.pixel(8, 0), None);
    }

    #[test]
    fn test_snapshot_restore_round_trip() {
        let mut surface = Surface::new(16, 16, Color32::WHITE);
        let before = surface.snapshot();

        let rect = Rect::from_min_max(pos2(2.0, 2.0), pos2(10.0, 10.0));
        surface.paint(&PaintOp::filled(Shape::Rect(rect), Rgba([0, 0, 0, 255])));
        assert!(!surface.matches(&before));

        surface.restore(&before);
        assert!(surface.matches(&before));
    }

    #[test]
    fn test_snapshot_is_immutable_copy() {
        let mut surface = Surface::new(4, 4, Color32::WHITE);
        let snap = surface.snapshot();
        surface.clear(Color32::BLACK);
        assert_eq!(*snap.image().get_pixel(0, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(surface.background(), Rgba([0, 0, 0, 255]));
    }
}
