//! Backtrack - two-player tic-tac-toe with move history.
//!
//! The game logic lives in [`backtrack_tictactoe`]; this crate adds the
//! application around it.
//!
//! # Architecture
//!
//! - **Config**: optional `backtrack.toml`
//! - **Replay**: apply a script of clicks and print the result
//! - **TUI**: interactive ratatui frontend
//!
//! # Example
//!
//! ```
//! use backtrack::{parse_script, render_text, run_replay};
//! use backtrack_tictactoe::DrawPolicy;
//!
//! # fn example() -> anyhow::Result<()> {
//! let events = parse_script("0 4 1 7 2")?;
//! let game = run_replay(&events)?;
//! assert!(render_text(&game.view(), DrawPolicy::Ignore).contains("Winner: X"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod replay;
mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};

// Crate-level exports - Replay
pub use replay::{ScriptError, parse_script, render_text, run as run_replay};

// Crate-level exports - Terminal UI
pub use tui::{App, AppAction, Focus, run_tui};
