//! Backtrack tic-tac-toe - game logic with snapshot history.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Square`], [`Board`], [`Position`]
//! - **Rules**: pure win and draw evaluation over a single board
//! - **History**: never-empty list of immutable board snapshots
//! - **State machine**: [`GameState`] = history + step pointer, with
//!   [`GameState::apply_move`] and [`GameState::jump_to`]
//! - **View**: [`View`], the render projection recomputed after every event
//!
//! # Example
//!
//! ```
//! use backtrack_tictactoe::{DrawPolicy, GameState, UiEvent};
//!
//! let mut game = GameState::new();
//! for index in [0, 4, 1, 7, 2] {
//!     game.dispatch(UiEvent::SquareClicked(index)).unwrap();
//! }
//! assert_eq!(game.view().status(DrawPolicy::Ignore).to_string(), "Winner: X");
//!
//! // Fork from an earlier step
//! game.dispatch(UiEvent::HistoryStepClicked(2)).unwrap();
//! game.dispatch(UiEvent::SquareClicked(8)).unwrap();
//! assert_eq!(game.history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod event;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{Move, MoveOutcome, Rejection};
pub use error::{GameError, GameErrorKind};
pub use event::{UiEvent, reduce};
pub use game::GameState;
pub use history::History;
pub use position::Position;
pub use types::{Board, Mark, Square};
pub use view::{DrawPolicy, MoveDescriptor, Status, View};
