use egui::Color32;
use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

pub const MIN_STROKE_WIDTH: f32 = 1.0;
pub const MAX_STROKE_WIDTH: f32 = 30.0;

/// Swatches offered by the tools panel
pub const PALETTE: [Color32; 6] = [
    Color32::WHITE,
    Color32::BLACK,
    Color32::from_rgb(0xe0, 0x2e, 0x2e),
    Color32::from_rgb(0x6d, 0xd1, 0x5b),
    Color32::from_rgb(0x4a, 0x98, 0xf7),
    Color32::from_rgb(0xf5, 0xc5, 0x42),
];

/// Whether shapes are painted as solid regions or as outlines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillMode {
    Filled,
    #[default]
    Outlined,
}

impl FillMode {
    pub fn is_filled(self) -> bool {
        matches!(self, Self::Filled)
    }
}

/// The current drawing style. Read on every paint call, never part of history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub color: Color32,
    pub stroke_width: f32,
    pub fill_mode: FillMode,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            stroke_width: 5.0,
            fill_mode: FillMode::Outlined,
        }
    }
}

impl Style {
    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = clamp_width(width);
        self
    }

    pub fn with_fill_mode(mut self, fill_mode: FillMode) -> Self {
        self.fill_mode = fill_mode;
        self
    }

    /// The style color as a straight-alpha pixel
    pub fn pixel(&self) -> Rgba<u8> {
        to_pixel(self.color)
    }
}

/// Clamp a slider value into the supported width range. NaN falls back to the minimum.
pub fn clamp_width(width: f32) -> f32 {
    if width.is_nan() {
        MIN_STROKE_WIDTH
    } else {
        width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)
    }
}

pub fn to_pixel(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}

pub fn from_pixel(pixel: Rgba<u8>) -> Color32 {
    let [r, g, b, a] = pixel.0;
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Parse a CSS-style color: `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(..)`, `rgba(..)`
/// or one of a handful of named colors.
pub fn parse_color(input: &str) -> Result<Color32, ConfigError> {
    let s = input.trim().to_ascii_lowercase();
    let invalid = || ConfigError::InvalidColor(input.to_owned());

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(invalid);
    }

    if let Some(body) = s
        .strip_prefix("rgba(")
        .or_else(|| s.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_functional(body).ok_or_else(invalid);
    }

    named_color(&s).ok_or_else(invalid)
}

fn parse_hex(hex: &str) -> Option<Color32> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (slot, c) in rgb.iter_mut().zip(hex.chars()) {
                let v = c.to_digit(16)? as u8;
                *slot = v * 17;
            }
            Some(Color32::from_rgb(rgb[0], rgb[1], rgb[2]))
        }
        6 => Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color32::from_rgba_unmultiplied(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            channel(6)?,
        )),
        _ => None,
    }
}

fn parse_functional(body: &str) -> Option<Color32> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let rgb = |i: usize| parts.get(i)?.parse::<u8>().ok();
    match parts.len() {
        3 => Some(Color32::from_rgb(rgb(0)?, rgb(1)?, rgb(2)?)),
        4 => {
            // alpha is a 0..=1 fraction like the computed style strings
            let alpha: f32 = parts[3].parse().ok()?;
            if !(0.0..=1.0).contains(&alpha) {
                return None;
            }
            let a = (alpha * 255.0).round() as u8;
            Some(Color32::from_rgba_unmultiplied(rgb(0)?, rgb(1)?, rgb(2)?, a))
        }
        _ => None,
    }
}

fn named_color(name: &str) -> Option<Color32> {
    let color = match name {
        "black" => Color32::BLACK,
        "white" => Color32::WHITE,
        "red" => Color32::from_rgb(255, 0, 0),
        "green" => Color32::from_rgb(0, 128, 0),
        "blue" => Color32::from_rgb(0, 0, 255),
        "yellow" => Color32::from_rgb(255, 255, 0),
        "orange" => Color32::from_rgb(255, 165, 0),
        "purple" => Color32::from_rgb(128, 0, 128),
        "gray" | "grey" => Color32::from_rgb(128, 128, 128),
        "pink" => Color32::from_rgb(255, 192, 203),
        "brown" => Color32::from_rgb(165, 42, 42),
        "cyan" => Color32::from_rgb(0, 255, 255),
        "magenta" => Color32::from_rgb(255, 0, 255),
        _ => return None,
    };
    Some(color)
}
