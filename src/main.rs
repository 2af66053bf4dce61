//! Tictactoe - command-line driver for the rules engine.
//!
//! Applies moves to a board (optionally resumed from a snapshot) and prints
//! the result. Storing snapshots is left to the caller.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tictactoe_rules::{Board, GameState, RulesConfig, Snapshot};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            snapshot,
            moves,
        } => run_play(config.as_deref(), snapshot.as_deref(), &moves),
        Command::Decode { config, snapshot } => run_decode(config.as_deref(), &snapshot),
    }
}

/// Apply moves and print the outcome of each
#[instrument(skip(moves), fields(move_count = moves.len()))]
fn run_play(config: Option<&Path>, snapshot: Option<&str>, moves: &[String]) -> Result<()> {
    let config = load_config(config)?;
    let mut board = match snapshot {
        Some(raw) => decode_board(raw, config)?,
        None => Board::with_config(config),
    };

    for raw in moves {
        let (row, col) = parse_move(raw)?;
        let outcome = board.play(row, col);
        println!("({row}, {col}): {outcome}");
    }

    print_board(&board);
    let encoded = serde_json::to_string(&board.snapshot())?;
    println!("snapshot: {encoded}");
    info!(state = ?board.state(), winner = ?board.winner(), "Done");
    Ok(())
}

/// Print a stored board
#[instrument]
fn run_decode(config: Option<&Path>, snapshot: &str) -> Result<()> {
    let board = decode_board(snapshot, load_config(config)?)?;
    print_board(&board);
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<RulesConfig> {
    match path {
        Some(path) => Ok(RulesConfig::from_file(path)?),
        None => Ok(RulesConfig::default()),
    }
}

fn decode_board(raw: &str, config: RulesConfig) -> Result<Board> {
    let values: Vec<i32> =
        serde_json::from_str(raw).context("Snapshot must be a JSON array of integers")?;
    let snapshot = Snapshot::from_slice(&values)?;
    debug!(values = ?snapshot.as_slice(), "Resuming from snapshot");
    Ok(Board::from_snapshot_with(&snapshot, config)?)
}

/// Parse a `ROW,COL` pair. Range checking is the board's job.
fn parse_move(raw: &str) -> Result<(i32, i32)> {
    let Some((row, col)) = raw.split_once(',') else {
        bail!("Move '{}' is not a ROW,COL pair", raw);
    };
    let row = row
        .trim()
        .parse()
        .with_context(|| format!("Bad row in move '{}'", raw))?;
    let col = col
        .trim()
        .parse()
        .with_context(|| format!("Bad column in move '{}'", raw))?;
    Ok((row, col))
}

fn print_board(board: &Board) {
    print!("{board}");
    match (board.state(), board.winner()) {
        (GameState::InProgress, _) => println!("{} to move", board.current_turn()),
        (GameState::Finished, Some(winner)) => println!("{winner} wins"),
        (GameState::Finished, None) => println!("draw"),
    }
}
