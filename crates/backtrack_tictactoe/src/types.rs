//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// A player's symbol.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Cross (moves first).
    #[display("X")]
    Cross,
    /// Nought (moves second).
    #[display("O")]
    Nought,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Cross => Mark::Nought,
            Mark::Nought => Mark::Cross,
        }
    }

    /// Returns the mark that plays from the given step.
    ///
    /// Step 0 is the empty board, so Cross plays on even steps.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 {
            Mark::Cross
        } else {
            Mark::Nought
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark on this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards stored in a [`History`](crate::History) are snapshots and are
/// never modified after they are appended.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Formats the board as a human-readable grid, blank for empty squares.
    pub fn display(&self) -> String {
        let rows: Vec<String> = self
            .squares
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|sq| match sq.mark() {
                        Some(mark) => format!(" {} ", mark),
                        None => "   ".to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        rows.join("\n---+---+---\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_alternates_by_step() {
        assert_eq!(Mark::for_step(0), Mark::Cross);
        assert_eq!(Mark::for_step(1), Mark::Nought);
        assert_eq!(Mark::for_step(6), Mark::Cross);
        assert_eq!(Mark::Cross.opponent(), Mark::Nought);
    }

    #[test]
    fn test_mark_display() {
        assert_eq!(Mark::Cross.to_string(), "X");
        assert_eq!(Mark::Nought.to_string(), "O");
    }

    #[test]
    fn test_board_display_blank_cells() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::Cross));
        board.set(Position::Center, Square::Occupied(Mark::Nought));
        assert_eq!(
            board.display(),
            " X |   |   \n---+---+---\n   | O |   \n---+---+---\n   |   |   "
        );
        assert_eq!(board.occupied(), 2);
    }
}
