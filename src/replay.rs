//! Non-interactive replay of a click script.
//!
//! A script is a list of tokens separated by whitespace or commas: a square
//! index `0`-`8` is a square click and `@k` is a click on move-list entry `k`.

use backtrack_tictactoe::{DrawPolicy, GameState, MoveOutcome, UiEvent, View};
use derive_more::{Display, Error};
use tracing::{info, instrument, warn};

/// A token in a replay script that is neither a square nor a jump.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized replay token {:?} at position {}", token, index)]
pub struct ScriptError {
    /// The offending token.
    pub token: String,
    /// Zero-based token index.
    pub index: usize,
}

/// Parses a replay script into UI events.
///
/// Square indices are not range-checked here; the state machine rejects
/// them with its own error.
#[instrument]
pub fn parse_script(script: &str) -> Result<Vec<UiEvent>, ScriptError> {
    script
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .enumerate()
        .map(|(index, token)| {
            let error = || ScriptError {
                token: token.to_string(),
                index,
            };
            match token.strip_prefix('@') {
                Some(step) => step
                    .parse()
                    .map(UiEvent::HistoryStepClicked)
                    .map_err(|_| error()),
                None => token.parse().map(UiEvent::SquareClicked).map_err(|_| error()),
            }
        })
        .collect()
}

/// Applies every event in order to a fresh game.
///
/// Rejected moves are logged and skipped over, the same as an ignored click.
#[instrument(skip(events), fields(events = events.len()))]
pub fn run(events: &[UiEvent]) -> anyhow::Result<GameState> {
    let mut game = GameState::new();
    for (i, event) in events.iter().enumerate() {
        if let Some(MoveOutcome::Rejected(reason)) = game.dispatch(*event)? {
            warn!(event = i, %reason, "Click ignored");
        }
    }
    info!(step = game.step(), len = game.history().len(), "Replay finished");
    Ok(game)
}

/// Renders a view as plain text: board, status line, move list.
pub fn render_text(view: &View, policy: DrawPolicy) -> String {
    let mut out = view.board.display();
    out.push_str("\n\n");
    out.push_str(&view.status(policy).to_string());
    out.push('\n');
    for entry in &view.moves {
        let marker = if entry.current { '>' } else { ' ' };
        out.push_str(&format!("{} {}. {}", marker, entry.step, entry.label));
        if let Some(placed) = entry.placed {
            out.push_str(&format!(" ({})", placed));
        }
        out.push('\n');
    }
    out
}
