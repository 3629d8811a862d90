use thiserror::Error;

use super::EditorState;

/// Errors that can occur during state transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateTransitionError {
    /// The requested state transition is not allowed from the current state
    #[error("cannot transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
}

/// Holds the editor state and only lets it change along valid edges.
#[derive(Debug, Clone, Default)]
pub struct StateMachine {
    state: EditorState,
}

impl StateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to transition to a new state.
    ///
    /// # Errors
    ///
    /// Returns `StateTransitionError::InvalidTransition` if the requested
    /// transition is not allowed from the current state.
    pub fn transition_to(&mut self, new_state: EditorState) -> Result<(), StateTransitionError> {
        if !self.state.can_transition_to(&new_state) {
            return Err(StateTransitionError::InvalidTransition {
                from: self.state.name(),
                to: new_state.name(),
            });
        }
        log::debug!("editor state {} -> {}", self.state.name(), new_state.name());
        self.state = new_state;
        Ok(())
    }

    /// Return to idle, handing back whatever state was active
    pub fn take(&mut self) -> EditorState {
        let old = std::mem::take(&mut self.state);
        if !old.is_idle() {
            log::debug!("editor state {} -> Idle", old.name());
        }
        old
    }

    pub fn current(&self) -> &EditorState {
        &self.state
    }

    pub fn current_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::TextEntryRequest;
    use egui::pos2;

    #[test]
    fn test_invalid_transition_is_rejected() {
        let mut machine = StateMachine::new();
        let request = TextEntryRequest::new(pos2(3.0, 4.0), 20.0);
        machine
            .transition_to(EditorState::EnteringText(request.clone()))
            .unwrap();

        let err = machine
            .transition_to(EditorState::EnteringText(request))
            .unwrap_err();
        assert_eq!(
            err,
            StateTransitionError::InvalidTransition {
                from: "EnteringText",
                to: "EnteringText"
            }
        );
        assert!(machine.current().is_entering_text());
    }

    #[test]
    fn test_take_returns_to_idle() {
        let mut machine = StateMachine::new();
        machine
            .transition_to(EditorState::EnteringText(TextEntryRequest::new(pos2(0.0, 0.0), 12.0)))
            .unwrap();
        let old = machine.take();
        assert!(old.is_entering_text());
        assert!(machine.current().is_idle());
    }
}
