use egui::{PointerButton, Pos2, Rect, Response};

mod router;
mod shortcuts;

pub use router::route_event;
pub use shortcuts::{Shortcut, shortcut_for};

/// Pointer input in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the surface
    PointerDown { position: Pos2 },
    /// Pointer moved over the surface (with or without a button held)
    PointerMove { position: Pos2 },
    /// Primary button released
    PointerUp { position: Pos2 },
    /// Pointer left the surface
    PointerLeave,
}

/// Turns egui's per-frame pointer state into our `InputEvent`s
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a screen position to surface coordinates for a surface drawn at `origin`
    pub fn to_surface(origin: Pos2, screen: Pos2) -> Pos2 {
        Pos2::new(screen.x - origin.x, screen.y - origin.y)
    }

    /// Events for this frame. `surface_rect` is where the surface is on screen;
    /// `response` is the canvas widget's response.
    pub fn process_input(&mut self, response: &Response, surface_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let origin = surface_rect.min;

        let hover = response
            .hover_pos()
            .filter(|pos| surface_rect.contains(*pos));

        let (pressed, released, interact_pos) = response.ctx.input(|i| {
            (
                i.pointer.button_pressed(PointerButton::Primary),
                i.pointer.button_released(PointerButton::Primary),
                i.pointer.interact_pos(),
            )
        });

        match hover {
            Some(pos) => {
                if pressed {
                    events.push(InputEvent::PointerDown {
                        position: Self::to_surface(origin, pos),
                    });
                } else if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove {
                        position: Self::to_surface(origin, pos),
                    });
                }
                if released {
                    events.push(InputEvent::PointerUp {
                        position: Self::to_surface(origin, pos),
                    });
                }
                self.last_pointer_pos = Some(pos);
            }
            None => {
                if self.last_pointer_pos.take().is_some() {
                    events.push(InputEvent::PointerLeave);
                } else if released {
                    if let Some(pos) = interact_pos {
                        events.push(InputEvent::PointerUp {
                            position: Self::to_surface(origin, pos),
                        });
                    }
                }
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_surface_offsets_by_origin() {
        let pos = InputHandler::to_surface(Pos2::new(100.0, 50.0), Pos2::new(110.0, 75.0));
        assert_eq!(pos, Pos2::new(10.0, 25.0));
    }
}
