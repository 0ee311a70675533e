//! Snapshot history.

use serde::Serialize;
use tracing::{instrument, trace};

use crate::{Board, Move, Position};

/// Ordered, never-empty list of board snapshots.
///
/// Index 0 is the empty board; index `n` is the board after move `n`.
/// Only [`History::fork`] changes the list, and it never edits a stored snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    snapshots: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Number of snapshots (moves + 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: history is never empty.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the newest snapshot.
    pub fn last_step(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Snapshot at `step`.
    pub fn get(&self, step: usize) -> Option<&Board> {
        self.snapshots.get(step)
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Drops every snapshot after `step` and appends `next`.
    ///
    /// `step` must be in bounds.
    #[instrument(skip(self, next), fields(len = self.snapshots.len()))]
    pub(crate) fn fork(&mut self, step: usize, next: Board) {
        debug_assert!(step < self.snapshots.len());
        let dropped = self.snapshots.len() - (step + 1);
        if dropped > 0 {
            trace!(dropped, "Truncating future snapshots");
        }
        self.snapshots.truncate(step + 1);
        self.snapshots.push(next);
    }

    /// The move that produced snapshot `step`, recovered by diffing it with
    /// the one before. `None` for step 0 or out of range.
    pub fn move_at(&self, step: usize) -> Option<Move> {
        let before = self.snapshots.get(step.checked_sub(1)?)?;
        let after = self.snapshots.get(step)?;
        Position::ALL.into_iter().find_map(|pos| {
            match (before.get(pos).mark(), after.get(pos).mark()) {
                (None, Some(mark)) => Some(Move::new(mark, pos)),
                _ => None,
            }
        })
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
