//! Render projection derived from a [`GameState`].
//!
//! Nothing here is stored; a [`View`] is rebuilt after every event.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::rules::{is_draw, winning_line};
use crate::{Board, GameState, Mark, Move};

/// How a full board with no winner is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawPolicy {
    /// Keep showing the next player, as if the game could continue.
    #[default]
    Ignore,
    /// Report [`Status::Draw`].
    Announce,
}

/// Status line shown above the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A mark has three in a row.
    #[display("Winner: {_0}")]
    Winner(Mark),
    /// The game is open and this mark plays next.
    #[display("Next player: {_0}")]
    NextPlayer(Mark),
    /// Full board, no winner. Only produced under [`DrawPolicy::Announce`].
    #[display("Draw")]
    Draw,
}

/// One entry in the move list, bound to a jump to `step`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDescriptor {
    /// History index this entry jumps to.
    pub step: usize,
    /// Button label.
    pub label: String,
    /// The move that produced this step (`None` for the game start).
    pub placed: Option<Move>,
    /// Whether this is the step currently displayed.
    pub current: bool,
}

impl MoveDescriptor {
    /// Label for the entry at `step`.
    pub fn label_for(step: usize) -> String {
        if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    /// Current step pointer.
    pub step: usize,
    /// Snapshot at the current step.
    pub board: Board,
    /// Mark to play next; meaningful only while there is no winner.
    pub next_mark: Mark,
    /// Winner on the current snapshot.
    pub winner: Option<Mark>,
    /// The line that won, for highlighting.
    pub winning_line: Option<[crate::Position; 3]>,
    /// Full board with no winner.
    pub drawn: bool,
    /// One descriptor per history entry.
    pub moves: Vec<MoveDescriptor>,
}

impl View {
    /// Status line under the given draw policy.
    pub fn status(&self, policy: DrawPolicy) -> Status {
        match (self.winner, policy) {
            (Some(mark), _) => Status::Winner(mark),
            (None, DrawPolicy::Announce) if self.drawn => Status::Draw,
            (None, _) => Status::NextPlayer(self.next_mark),
        }
    }
}

impl GameState {
    /// Projects the state into a [`View`].
    #[instrument(skip(self), fields(step = self.step()))]
    pub fn view(&self) -> View {
        let board = self.current_board().clone();
        let history = self.history();
        let moves = (0..history.len())
            .map(|step| MoveDescriptor {
                step,
                label: MoveDescriptor::label_for(step),
                placed: history.move_at(step),
                current: step == self.step(),
            })
            .collect();

        View {
            step: self.step(),
            next_mark: self.next_mark(),
            winner: self.winner(),
            winning_line: winning_line(&board),
            drawn: is_draw(&board),
            board,
            moves,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn played(indices: &[usize]) -> GameState {
        let mut game = GameState::new();
        for &i in indices {
            game.apply_move(Position::ALL[i]);
        }
        game
    }

    #[test]
    fn test_initial_view() {
        let view = GameState::new().view();
        assert_eq!(view.status(DrawPolicy::Ignore).to_string(), "Next player: X");
        assert_eq!(view.moves.len(), 1);
        assert_eq!(view.moves[0].label, "Go to game start");
        assert!(view.moves[0].current);
    }

    #[test]
    fn test_move_list_labels() {
        let view = played(&[0, 4, 8]).view();
        let labels: Vec<_> = view.moves.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Go to game start", "Go to move #1", "Go to move #2", "Go to move #3"]
        );
        assert_eq!(view.moves[2].placed, Some(Move::new(Mark::Nought, Position::Center)));
    }

    #[test]
    fn test_winner_status() {
        let view = played(&[0, 4, 1, 7, 2]).view();
        assert_eq!(view.status(DrawPolicy::Ignore).to_string(), "Winner: X");
        assert_eq!(
            view.winning_line,
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_drawn_board_status_depends_on_policy() {
        // X O X / X O O / O X X
        let view = played(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).view();
        assert_eq!(view.winner, None);
        assert!(view.drawn);
        assert_eq!(view.status(DrawPolicy::Ignore), Status::NextPlayer(Mark::Nought));
        assert_eq!(view.status(DrawPolicy::Announce), Status::Draw);
    }

    #[test]
    fn test_current_flag_follows_jump() {
        let mut game = played(&[0, 4]);
        game.jump_to(1).unwrap();
        let view = game.view();
        let current: Vec<_> = view.moves.iter().filter(|m| m.current).map(|m| m.step).collect();
        assert_eq!(current, [1]);
        assert_eq!(view.board.occupied(), 1);
    }
}
