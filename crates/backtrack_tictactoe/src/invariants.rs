//! First-class invariants for the game state.
//!
//! Invariants are logical properties that must hold after every operation.
//! [`GameState::apply_move`](crate::GameState::apply_move) asserts them in
//! debug builds and tests check them directly.

use crate::{Board, GameState, Mark, Position};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

/// Invariant: the step pointer indexes an existing snapshot.
pub struct StepInBounds;

impl Invariant<GameState> for StepInBounds {
    fn holds(state: &GameState) -> bool {
        state.step() < state.history().len()
    }

    fn description() -> &'static str {
        "Step pointer is within history"
    }
}

/// Invariant: history begins with the empty board.
pub struct StartsEmpty;

impl Invariant<GameState> for StartsEmpty {
    fn holds(state: &GameState) -> bool {
        state.history().get(0) == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

/// Invariant: each snapshot adds exactly one mark to the one before it,
/// and that mark alternates starting with Cross.
pub struct SingleCellDelta;

impl SingleCellDelta {
    fn pair_holds(step: usize, before: &Board, after: &Board) -> bool {
        let mut changed = Position::ALL
            .into_iter()
            .filter(|&pos| before.get(pos) != after.get(pos));
        match (changed.next(), changed.next()) {
            (Some(pos), None) => {
                before.is_empty(pos) && after.get(pos).mark() == Some(Mark::for_step(step))
            }
            _ => false,
        }
    }
}

impl Invariant<GameState> for SingleCellDelta {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| Self::pair_holds(step, &pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Adjacent snapshots differ by one alternating mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_new_game_holds() {
        assert_eq!(GameState::new().check_invariants(), Ok(()));
    }

    #[test]
    fn test_played_game_holds() {
        let mut game = GameState::new();
        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            game.apply_move(pos);
        }
        assert!(SingleCellDelta::holds(&game));
        assert!(StepInBounds::holds(&game));
        assert!(StartsEmpty::holds(&game));
    }

    #[test]
    fn test_pair_rejects_two_changes() {
        let before = Board::new();
        let mut after = Board::new();
        after.set(Position::TopLeft, Square::Occupied(Mark::Cross));
        after.set(Position::Center, Square::Occupied(Mark::Nought));
        assert!(!SingleCellDelta::pair_holds(0, &before, &after));
    }

    #[test]
    fn test_pair_rejects_wrong_mark() {
        let before = Board::new();
        let mut after = Board::new();
        after.set(Position::TopLeft, Square::Occupied(Mark::Nought));
        assert!(!SingleCellDelta::pair_holds(0, &before, &after));
        assert!(SingleCellDelta::pair_holds(1, &before, &after));
    }

    #[test]
    fn test_pair_rejects_overwrite() {
        let mut before = Board::new();
        before.set(Position::TopLeft, Square::Occupied(Mark::Cross));
        let mut after = Board::new();
        after.set(Position::TopLeft, Square::Occupied(Mark::Nought));
        assert!(!SingleCellDelta::pair_holds(1, &before, &after));
    }
}
