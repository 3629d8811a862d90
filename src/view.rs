use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::raster;

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 3.0;
pub const ZOOM_STEP: f32 = 0.2;

/// Translucent gray used for grid lines
pub const GRID_COLOR: Rgba<u8> = Rgba([128, 128, 128, 90]);

/// Rendering-time parameters. Never part of the stored pixels or the history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewTransform {
    pub zoom: f32,
    pub grid_visible: bool,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            grid_visible: false,
        }
    }
}

impl ViewTransform {
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    /// Clamp into range and snap to a tenth so repeated steps don't drift
    pub fn set_zoom(&mut self, zoom: f32) {
        let zoom = if zoom.is_finite() { zoom } else { 1.0 };
        self.zoom = ((zoom * 10.0).round() / 10.0).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn toggle_grid(&mut self) -> bool {
        self.grid_visible = !self.grid_visible;
        self.grid_visible
    }

    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }
}

/// Overlay one-pixel grid lines every `spacing` pixels
pub fn draw_grid(image: &mut RgbaImage, spacing: u32) {
    if spacing == 0 {
        return;
    }
    let (width, height) = image.dimensions();
    for y in 0..height {
        for x in 0..width {
            if x % spacing == 0 || y % spacing == 0 {
                raster::blend(image.get_pixel_mut(x, y), GRID_COLOR, 1.0);
            }
        }
    }
}
