//! Command-line interface for backtrack.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Backtrack - two-player tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "backtrack")]
#[command(about = "Two-player tic-tac-toe with move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./backtrack.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Report a full board with no winner as a draw
    #[arg(long, global = true)]
    pub announce_draws: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply a script of clicks and print the final board
    Replay {
        /// Square indices 0-8 and jumps `@k`, separated by spaces or commas
        script: String,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}
