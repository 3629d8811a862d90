use egui::{Key, Modifiers};

use crate::command::Command;
use crate::tools::ToolKind;

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shortcut {
    /// Run an editor command directly
    Command(Command),
    /// Clear, but only after the user confirms
    RequestClear,
    Save,
    /// Abandon the stroke in progress
    CancelStroke,
}

/// Map a key press to a shortcut, if it has one
pub fn shortcut_for(key: Key, modifiers: Modifiers) -> Option<Shortcut> {
    if modifiers.command {
        return match key {
            Key::Z if modifiers.shift => Some(Shortcut::Command(Command::Redo)),
            Key::Z => Some(Shortcut::Command(Command::Undo)),
            Key::Y => Some(Shortcut::Command(Command::Redo)),
            Key::S => Some(Shortcut::Save),
            _ => None,
        };
    }

    let tool = |tool| Some(Shortcut::Command(Command::SetTool(tool)));
    match key {
        Key::B => tool(ToolKind::Brush),
        Key::E => tool(ToolKind::Eraser),
        Key::R => tool(ToolKind::Rectangle),
        Key::C => tool(ToolKind::Circle),
        Key::T => tool(ToolKind::Triangle),
        Key::L => tool(ToolKind::Line),
        Key::I => tool(ToolKind::Eyedropper),
        Key::X => tool(ToolKind::Text),
        Key::G => Some(Shortcut::Command(Command::ToggleGrid)),
        Key::Plus | Key::Equals => Some(Shortcut::Command(Command::ZoomIn)),
        Key::Minus => Some(Shortcut::Command(Command::ZoomOut)),
        Key::Delete => Some(Shortcut::RequestClear),
        Key::Escape => Some(Shortcut::CancelStroke),
        _ => None,
    }
}
