//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe - drive the rules engine from the command line
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Apply moves to a tic-tac-toe board and print its snapshot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply moves, then print the board and its snapshot
    Play {
        /// Rules config (TOML). Defaults apply when omitted.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Snapshot to resume from, as a JSON array of 12 integers
        #[arg(long)]
        snapshot: Option<String>,

        /// Moves as ROW,COL pairs (0-2; other values are ignored by the board)
        #[arg(allow_hyphen_values = true)]
        moves: Vec<String>,
    },

    /// Print the board encoded by a snapshot
    Decode {
        /// Rules config (TOML). Defaults apply when omitted.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Snapshot as a JSON array of 12 integers
        snapshot: String,
    },
}
