//! The interaction state machine of the editor.
//!
//! ```text
//!            pointer-down (brush, shapes)
//!   ┌──────┐ ─────────────────────────► ┌──────────┐
//!   │      │ ◄───────────────────────── │ Drawing  │
//!   │ Idle │   pointer-up / leave       └──────────┘
//!   │      │ ─────────────────────────► ┌──────────────┐
//!   └──────┘ ◄───────────────────────── │ EnteringText │
//!              pointer-down (text)      └──────────────┘
//!              confirm / cancel
//! ```
//!
//! Drawing and text entry never transition into each other directly; both
//! return to `Idle` first.

use crate::stroke::StrokeSession;
use crate::text::TextEntryRequest;

#[derive(Debug, Clone, Default)]
pub enum EditorState {
    /// No active operation
    #[default]
    Idle,
    /// A stroke session is in progress
    Drawing(StrokeSession),
    /// Waiting for the text-entry collaborator to confirm or cancel
    EnteringText(TextEntryRequest),
}

impl EditorState {
    /// Validates whether a transition to the new state is allowed
    pub fn can_transition_to(&self, new_state: &EditorState) -> bool {
        match (self, new_state) {
            (EditorState::Idle, _) => true,
            (EditorState::Drawing(_), EditorState::Idle) => true,
            (EditorState::EnteringText(_), EditorState::Idle) => true,
            _ => false,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EditorState::Idle => "Idle",
            EditorState::Drawing(_) => "Drawing",
            EditorState::EnteringText(_) => "EnteringText",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, EditorState::Drawing(_))
    }

    pub fn is_entering_text(&self) -> bool {
        matches!(self, EditorState::EnteringText(_))
    }

    pub fn stroke(&self) -> Option<&StrokeSession> {
        match self {
            EditorState::Drawing(session) => Some(session),
            _ => None,
        }
    }

    pub fn stroke_mut(&mut self) -> Option<&mut StrokeSession> {
        match self {
            EditorState::Drawing(session) => Some(session),
            _ => None,
        }
    }

    pub fn text_request(&self) -> Option<&TextEntryRequest> {
        match self {
            EditorState::EnteringText(request) => Some(request),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_text_and_drawing_do_not_chain() {
        let text = EditorState::EnteringText(TextEntryRequest::new(pos2(0.0, 0.0), 12.0));
        assert!(text.can_transition_to(&EditorState::Idle));
        assert!(!text.can_transition_to(&text.clone()));
        assert!(EditorState::Idle.can_transition_to(&text));
    }
}
