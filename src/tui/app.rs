//! Application state and key handling.

use backtrack_tictactoe::{DrawPolicy, GameState, MoveOutcome, Position, UiEvent, View};
use crossterm::event::{KeyCode, KeyEvent};
use tracing::{debug, instrument, warn};

use super::input::{digit_square, move_cursor};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 board.
    Board,
    /// The move list.
    Moves,
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Redraw and keep reading input.
    Continue,
    /// Restore the terminal and exit.
    Quit,
}

/// Main application state.
///
/// Owns the one [`GameState`]; everything drawn is taken from
/// [`App::view`].
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected: usize,
    draw_policy: DrawPolicy,
    message: Option<String>,
}

impl App {
    /// Creates a new application with an empty board.
    #[instrument]
    pub fn new(draw_policy: DrawPolicy) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            draw_policy,
            message: None,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Current projection of the game.
    pub fn view(&self) -> View {
        self.game.view()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted move-list entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Draw policy for the status line.
    pub fn draw_policy(&self) -> DrawPolicy {
        self.draw_policy
    }

    /// Feedback from the last ignored click, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
            }
            KeyCode::Char('u') => {
                if let Some(step) = self.game.step().checked_sub(1) {
                    self.send(UiEvent::HistoryStepClicked(step));
                }
            }
            KeyCode::Char('r') => {
                let step = self.game.step() + 1;
                if step < self.game.history().len() {
                    self.send(UiEvent::HistoryStepClicked(step));
                }
            }
            KeyCode::Char(c) if digit_square(c).is_some() => {
                if let Some(index) = digit_square(c) {
                    if let Some(pos) = Position::from_index(index) {
                        self.cursor = pos;
                    }
                    self.send(UiEvent::SquareClicked(index));
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::Moves => self.handle_moves_key(code),
            },
        }
        AppAction::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.send(UiEvent::SquareClicked(self.cursor.index()));
            }
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        let last = self.game.history().len() - 1;
        match code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = last,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.send(UiEvent::HistoryStepClicked(self.selected));
            }
            _ => {}
        }
    }

    /// Dispatches an event to the game and syncs the move-list selection.
    fn send(&mut self, event: UiEvent) {
        self.message = None;
        match self.game.dispatch(event) {
            Ok(Some(MoveOutcome::Rejected(reason))) => {
                debug!(%reason, "Click ignored");
                self.message = Some(reason.to_string());
            }
            Ok(_) => {}
            // Keys only produce in-range events; log rather than crash if that changes.
            Err(e) => warn!(error = %e, "Event failed"),
        }
        self.selected = self.game.step();
    }
}
