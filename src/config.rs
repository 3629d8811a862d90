use std::fs;
use std::path::{Path, PathBuf};

use egui::Color32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::command::MAX_HISTORY;
use crate::style::{FillMode, Style, parse_color};

/// Environment variable naming an alternative config file
pub const CONFIG_ENV: &str = "SKETCHPAD_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "sketchpad.json";

/// Errors that can occur while loading or saving the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Startup settings for the editor. Unknown or missing fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Any color `parse_color` accepts
    pub background: String,
    pub history_capacity: usize,
    /// Initial brush color, any color `parse_color` accepts
    pub color: String,
    pub stroke_width: f32,
    pub fill_mode: FillMode,
    pub grid_spacing: u32,
    /// Prefix of exported file names
    pub export_prefix: String,
    /// Font file for the text tool; egui's bundled font when unset
    pub font: Option<PathBuf>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            background: "#fff".to_owned(),
            history_capacity: MAX_HISTORY,
            color: "#000".to_owned(),
            stroke_width: 5.0,
            fill_mode: FillMode::Outlined,
            grid_spacing: 20,
            export_prefix: "sketchpad".to_owned(),
            font: None,
        }
    }
}

impl SketchConfig {
    /// Read a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `$SKETCHPAD_CONFIG` or `sketchpad.json` in the working directory
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(&Self::default_path())
    }

    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Reject values the editor cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::InvalidValue(format!(
                "canvas size must be non-zero, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::InvalidValue(
                "history_capacity must be at least 1".to_owned(),
            ));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(ConfigError::InvalidValue(format!(
                "stroke_width must be positive, got {}",
                self.stroke_width
            )));
        }
        self.background_color()?;
        self.style()?;
        Ok(())
    }

    pub fn background_color(&self) -> Result<Color32, ConfigError> {
        parse_color(&self.background)
    }

    /// The style the editor starts with
    pub fn style(&self) -> Result<Style, ConfigError> {
        Ok(Style::default()
            .with_color(parse_color(&self.color)?)
            .with_stroke_width(self.stroke_width)
            .with_fill_mode(self.fill_mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SketchConfig::from_json(r##"{ "canvas_width": 320, "color": "red" }"##).unwrap();
        assert_eq!(config.canvas_width, 320);
        assert_eq!(config.canvas_height, 600);
        assert_eq!(config.history_capacity, MAX_HISTORY);
        assert!(config.font.is_none());
        assert_eq!(config.style().unwrap().color, Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            SketchConfig::from_json(r#"{ "canvas_height": 0 }"#),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(matches!(
            SketchConfig::from_json(r#"{ "history_capacity": 0 }"#),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(matches!(
            SketchConfig::from_json(r#"{ "background": "nope" }"#),
            Err(ConfigError::InvalidColor(_))
        ));
        assert!(matches!(
            SketchConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("sketchpad-config-that-does-not-exist.json");
        let config = SketchConfig::load(&path).unwrap();
        assert_eq!(config, SketchConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("sketchpad-config-{}.json", std::process::id()));
        let config = SketchConfig {
            grid_spacing: 32,
            export_prefix: "doodle".to_owned(),
            ..SketchConfig::default()
        };
        config.save(&path).unwrap();
        let loaded = SketchConfig::load(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }
}
