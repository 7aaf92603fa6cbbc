//! Tic-tac-toe in the terminal.
//!
//! Two humans share the keyboard, or one human plays X against a computer
//! that picks random squares.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod simulate;
mod sound;
mod theme;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::TuiConfig;
use std::path::Path;
use tictactoe_engine::GameRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file (RUST_LOG)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    let config = TuiConfig::load(&cli.config)?.with_seed(cli.seed);

    match cli.command.unwrap_or_default() {
        Command::Play => tui::run(config),
        Command::Simulate { games } => run_simulation(games, &config),
    }
}

/// Sends logs to a file so they don't interfere with the TUI.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_simulation(games: u32, config: &TuiConfig) -> Result<()> {
    let seed = (*config.seed()).unwrap_or_else(|| GameRng::from_entropy().seed());
    info!(games, seed, "Running simulation");
    let report = simulate::simulate(games, seed)?;
    println!("seed {}: {}", seed, report);
    Ok(())
}
