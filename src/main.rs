//! Backtrack - unified CLI
//!
//! Interactive terminal play or non-interactive replay.

#![warn(missing_docs)]

mod cli;

use std::sync::Arc;

use anyhow::{Context, Result};
use backtrack::{AppConfig, parse_script, render_text, run_replay, run_tui};
use backtrack_tictactoe::DrawPolicy;
use clap::Parser;
use cli::{Cli, Command};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if cli.announce_draws {
        config = config.with_draw_policy(DrawPolicy::Announce);
    }

    match cli.command {
        Command::Play => play(&config),
        Command::Replay { script, json } => replay(&config, &script, json),
    }
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Run the terminal UI, logging to a file so output does not corrupt the screen.
fn play(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    debug!(?config, "Configuration resolved");
    run_tui(config)
}

/// Apply a click script and print the final view.
fn replay(config: &AppConfig, script: &str, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .init();

    info!(script, "Replaying");
    let events = parse_script(script)?;
    let game = run_replay(&events)?;
    let view = game.view();

    let policy = *config.draw_policy();
    if json {
        let out = serde_json::json!({
            "status": view.status(policy).to_string(),
            "view": view,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", render_text(&view, policy));
    }
    Ok(())
}
