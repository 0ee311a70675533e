//! The game state machine.
//!
//! A [`GameState`] is the history of snapshots plus a step pointer. Whose
//! turn it is, the winner and the move list are all derived from those two
//! fields on demand; see [`GameState::view`].

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::invariants::{InvariantSet, InvariantViolation, SingleCellDelta, StartsEmpty, StepInBounds};
use crate::rules::check_winner;
use crate::{
    Board, GameError, GameErrorKind, History, Mark, Move, MoveOutcome, Position, Rejection, Square,
};

/// Authoritative game state: snapshot history and the current step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameState {
    history: History,
    step: usize,
}

impl GameState {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the snapshot history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the current step pointer.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the snapshot at the current step.
    pub fn current_board(&self) -> &Board {
        &self.history.snapshots()[self.step]
    }

    /// Mark that plays next from the current step.
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.step)
    }

    /// Winner on the current snapshot.
    pub fn winner(&self) -> Option<Mark> {
        check_winner(self.current_board())
    }

    /// Places the next mark at `position`.
    ///
    /// Ignored when the current snapshot already has a winner or the square
    /// is taken. Otherwise history after the current step is discarded, the
    /// new snapshot is appended and the step pointer moves to it.
    #[instrument(skip(self), fields(step = self.step, len = self.history.len()))]
    pub fn apply_move(&mut self, position: Position) -> MoveOutcome {
        let current = self.current_board();

        if let Some(winner) = check_winner(current) {
            debug!(%winner, "Move ignored, game already won");
            return MoveOutcome::Rejected(Rejection::GameWon(winner));
        }

        if !current.is_empty(position) {
            debug!(%position, "Move ignored, square occupied");
            return MoveOutcome::Rejected(Rejection::SquareOccupied(position));
        }

        let mark = self.next_mark();
        let mut next = current.clone();
        next.set(position, Square::Occupied(mark));

        self.history.fork(self.step, next);
        self.step = self.history.last_step();

        debug_assert_eq!(self.check_invariants(), Ok(()));

        let placed = Move::new(mark, position);
        match self.winner() {
            Some(winner) => info!(%placed, %winner, step = self.step, "Move wins the game"),
            None => debug!(%placed, step = self.step, "Move placed"),
        }
        MoveOutcome::Placed(placed)
    }

    /// Moves the step pointer to `step` without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::OutOfRange`] if `step` is not a history index;
    /// the step pointer is left unchanged.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        let len = self.history.len();
        if step >= len {
            return Err(GameError::new(GameErrorKind::OutOfRange { step, len }));
        }
        self.step = step;
        debug!(step, "Jumped");
        Ok(())
    }

    /// Checks every state invariant.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        <(StepInBounds, StartsEmpty, SingleCellDelta) as InvariantSet<GameState>>::check_all(self)
    }
}
