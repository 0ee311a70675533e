//! UI events and the reducer that applies them.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{GameError, GameErrorKind, GameState, MoveOutcome, Position};

/// An input event from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiEvent {
    /// A board square was clicked (index 0-8).
    SquareClicked(usize),
    /// A move-list entry was clicked.
    HistoryStepClicked(usize),
}

impl GameState {
    /// Applies one UI event in place.
    ///
    /// Returns the move outcome for square clicks, `None` for jumps.
    ///
    /// # Errors
    ///
    /// [`GameErrorKind::InvalidSquare`] for a square index above 8 and
    /// [`GameErrorKind::OutOfRange`] for a jump past the end of history.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: UiEvent) -> Result<Option<MoveOutcome>, GameError> {
        match event {
            UiEvent::SquareClicked(index) => {
                let position = Position::from_index(index)
                    .ok_or_else(|| GameError::new(GameErrorKind::InvalidSquare(index)))?;
                let outcome = self.apply_move(position);
                debug!(?outcome, "Square click handled");
                Ok(Some(outcome))
            }
            UiEvent::HistoryStepClicked(step) => {
                self.jump_to(step)?;
                Ok(None)
            }
        }
    }
}

/// Returns the state that results from applying `event` to `state`.
///
/// `state` itself is never modified.
///
/// # Errors
///
/// Same as [`GameState::dispatch`].
pub fn reduce(state: &GameState, event: UiEvent) -> Result<GameState, GameError> {
    let mut next = state.clone();
    next.dispatch(event)?;
    Ok(next)
}
