use crate::editor::Editor;
use crate::text::TextEntryRequest;

use super::InputEvent;

/// Forward a pointer event to the editor. Returns a text-entry request when
/// the event opened one.
pub fn route_event(event: &InputEvent, editor: &mut Editor) -> Option<TextEntryRequest> {
    match *event {
        InputEvent::PointerDown { position } => editor.pointer_down(position),
        InputEvent::PointerMove { position } => {
            editor.pointer_move(position);
            None
        }
        InputEvent::PointerUp { position } => {
            editor.pointer_up(position);
            None
        }
        InputEvent::PointerLeave => {
            editor.pointer_leave();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolKind;
    use egui::{Color32, pos2};

    #[test]
    fn test_routing_a_drag_commits_once() {
        let mut editor = Editor::new(32, 32, Color32::WHITE);
        editor.set_tool(ToolKind::Line);
        for event in [
            InputEvent::PointerDown { position: pos2(1.0, 1.0) },
            InputEvent::PointerMove { position: pos2(20.0, 20.0) },
            InputEvent::PointerUp { position: pos2(20.0, 20.0) },
            InputEvent::PointerLeave,
        ] {
            route_event(&event, &mut editor);
        }
        assert_eq!(editor.history().len(), 2);
    }

    #[test]
    fn test_text_tool_returns_request() {
        let mut editor = Editor::new(32, 32, Color32::WHITE);
        editor.set_tool(ToolKind::Text);
        let request = route_event(&InputEvent::PointerDown { position: pos2(4.0, 5.0) }, &mut editor);
        assert_eq!(request.map(|r| r.position), Some(pos2(4.0, 5.0)));
    }
}
