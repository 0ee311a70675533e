//! First-class action types for tic-tac-toe.
//!
//! A move is the event between two adjacent history snapshots. Rejections
//! are outcomes, not errors: clicking a filled square or playing on after a
//! win simply does nothing.

use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::{Mark, Position};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The current snapshot already has a winner.
    #[display("{_0} has already won")]
    GameWon(Mark),
    /// The square is already taken.
    #[display("{_0} is already occupied")]
    SquareOccupied(Position),
}

/// Result of [`GameState::apply_move`](crate::GameState::apply_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was accepted and appended to history.
    Placed(Move),
    /// The move was ignored; state is unchanged.
    Rejected(Rejection),
}

impl MoveOutcome {
    /// True if the move changed the game.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed(_))
    }
}
