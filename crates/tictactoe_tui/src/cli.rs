//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-mode tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a friend or a random computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Seed for the computer opponent (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// File that receives log output (the terminal is owned by the UI)
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    #[default]
    Play,

    /// Play random-vs-random games headlessly and print the tally
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "1000")]
        games: u32,
    },
}
