use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::style::FillMode;
use crate::tools::ToolKind;

/// Discrete actions the toolbar and keyboard shortcuts invoke on the editor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Change the active tool
    SetTool(ToolKind),

    SetColor(Color32),

    /// Change the stroke width; clamped to the supported range
    SetStrokeWidth(f32),

    SetFillMode(FillMode),

    Undo,

    Redo,

    /// Fill the surface with the background color and record it in history
    Clear,

    ToggleGrid,

    ZoomIn,

    ZoomOut,
}

impl Command {
    /// Short label for logs and the history panel
    pub fn label(&self) -> &'static str {
        match self {
            Command::SetTool(_) => "Set Tool",
            Command::SetColor(_) => "Set Color",
            Command::SetStrokeWidth(_) => "Set Width",
            Command::SetFillMode(_) => "Set Fill",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::Clear => "Clear",
            Command::ToggleGrid => "Toggle Grid",
            Command::ZoomIn => "Zoom In",
            Command::ZoomOut => "Zoom Out",
        }
    }

    /// True for commands that may add or move through history entries
    pub fn touches_history(&self) -> bool {
        matches!(self, Command::Undo | Command::Redo | Command::Clear)
    }
}
