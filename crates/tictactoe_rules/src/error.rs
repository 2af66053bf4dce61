//! Error types for the rules engine.
//!
//! Gameplay misuse is not an error: rejected moves come back as a
//! [`MarkOutcome`](crate::MarkOutcome). These types cover direct cell
//! access, snapshot decoding, and configuration loading.

use derive_more::{Display, Error};
use tracing::instrument;

/// Cell coordinates outside the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cell ({row}, {col}) is outside the 3x3 board")]
pub struct CellOutOfRange {
    /// Requested row.
    pub row: i32,
    /// Requested column.
    pub col: i32,
}

/// Error that can occur when decoding a snapshot into a board.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SnapshotError {
    /// The integer sequence has the wrong number of values.
    #[display("Snapshot must hold {expected} integers, got {actual}")]
    WrongLength {
        /// Required length.
        expected: usize,
        /// Length received.
        actual: usize,
    },

    /// A cell code names neither an empty cell nor a player.
    #[display("Unknown cell code {code} at index {index}")]
    UnknownCell {
        /// Row-major cell index.
        index: usize,
        /// Offending code.
        code: i32,
    },

    /// A player field holds an id that names no player.
    #[display("Unknown player id {code} for {field}")]
    UnknownPlayer {
        /// Snapshot field being decoded.
        field: &'static str,
        /// Offending id.
        code: i32,
    },

    /// The state code is neither in-progress nor finished.
    #[display("Unknown game state code {}", _0)]
    UnknownState(i32),

    /// The current-turn field is empty.
    #[display("Snapshot has no current turn")]
    MissingTurn,

    /// A winner is recorded but the game is still in progress.
    #[display("Snapshot records a winner for a game in progress")]
    WinnerInProgress,

    /// The cells contradict the recorded winner, state, or turn.
    #[display("Inconsistent snapshot: {reason}")]
    Inconsistent {
        /// What does not add up.
        reason: &'static str,
    },
}

impl std::error::Error for SnapshotError {}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
