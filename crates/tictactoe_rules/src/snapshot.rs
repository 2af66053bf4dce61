//! Portable integer snapshot of a board.
//!
//! Layout, in order:
//! 1. nine cell codes, row-major (0 = empty, 1 = X, 2 = O);
//! 2. winner (0 = none, else player id);
//! 3. state (0 = in progress, 1 = finished);
//! 4. current turn (player id).
//!
//! Writing the integers somewhere is the caller's business; `Snapshot`
//! derives serde as a plain array for collaborators that want it.

use crate::board::Board;
use crate::config::RulesConfig;
use crate::error::SnapshotError;
use crate::rules::{is_full, line_holders};
use crate::types::{Cell, GameState, NO_PLAYER, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of integers in a snapshot.
pub const SNAPSHOT_LEN: usize = 12;

const WINNER: usize = 9;
const STATE: usize = 10;
const TURN: usize = 11;

/// Encoded board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot([i32; SNAPSHOT_LEN]);

impl Snapshot {
    /// Wraps an already-ordered integer sequence.
    pub fn new(values: [i32; SNAPSHOT_LEN]) -> Self {
        Self(values)
    }

    /// Copies a snapshot out of a slice, checking its length.
    pub fn from_slice(values: &[i32]) -> Result<Self, SnapshotError> {
        <[i32; SNAPSHOT_LEN]>::try_from(values)
            .map(Self)
            .map_err(|_| SnapshotError::WrongLength {
                expected: SNAPSHOT_LEN,
                actual: values.len(),
            })
    }

    /// The integers in write order.
    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    /// Consumes the snapshot, returning the integers.
    pub fn into_inner(self) -> [i32; SNAPSHOT_LEN] {
        self.0
    }
}

fn decode_player(field: &'static str, code: i32) -> Result<Player, SnapshotError> {
    Player::from_id(code).ok_or(SnapshotError::UnknownPlayer { field, code })
}

fn inconsistent(reason: &'static str) -> SnapshotError {
    SnapshotError::Inconsistent { reason }
}

/// Checks the decoded fields against the lines on the grid.
///
/// A game stops at its first completed line, so only the winner may hold
/// one, and the winner is still the player to move. A finished game with
/// no winner needs a full board.
fn check_consistency(
    cells: &[Cell; 9],
    winner: Option<Player>,
    state: GameState,
    current_turn: Player,
) -> Result<(), SnapshotError> {
    let holders: Vec<Player> = line_holders(cells).collect();

    match winner {
        Some(winner) => {
            if !holders.contains(&winner) {
                return Err(inconsistent("winner holds no complete line"));
            }
            if holders.iter().any(|holder| *holder != winner) {
                return Err(inconsistent("both players hold a complete line"));
            }
            if current_turn != winner {
                return Err(inconsistent("winner is not the player who moved last"));
            }
        }
        None if !holders.is_empty() => {
            return Err(inconsistent("complete line without a recorded winner"));
        }
        None if state == GameState::Finished && !is_full(cells) => {
            return Err(inconsistent("draw recorded with empty cells"));
        }
        None => {}
    }
    Ok(())
}

impl Board {
    /// Encodes the board. The rules configuration is not included.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Snapshot {
        let mut values = [NO_PLAYER; SNAPSHOT_LEN];
        for (slot, cell) in values.iter_mut().zip(self.cells.iter()) {
            *slot = cell.id();
        }
        values[WINNER] = self.winner.map_or(NO_PLAYER, Player::id);
        values[STATE] = self.state.code();
        values[TURN] = self.current_turn.id();
        Snapshot(values)
    }

    /// Restores a board under the default rules.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, SnapshotError> {
        Self::from_snapshot_with(snapshot, RulesConfig::default())
    }

    /// Restores a board under the given rules.
    ///
    /// # Errors
    ///
    /// Fails on unknown cell, player, or state codes, on an empty current
    /// turn, on a winner recorded for a game still in progress, and on
    /// cells that contradict the recorded winner, state, or turn.
    #[instrument(skip(snapshot), fields(values = ?snapshot.as_slice()))]
    pub fn from_snapshot_with(
        snapshot: &Snapshot,
        config: RulesConfig,
    ) -> Result<Self, SnapshotError> {
        let values = &snapshot.0;

        let mut cells = [Cell::Empty; 9];
        for (index, (cell, &code)) in cells.iter_mut().zip(values.iter()).enumerate() {
            *cell = Cell::from_id(code).ok_or(SnapshotError::UnknownCell { index, code })?;
        }

        let winner = match values[WINNER] {
            NO_PLAYER => None,
            code => Some(decode_player("winner", code)?),
        };
        let state =
            GameState::from_code(values[STATE]).ok_or(SnapshotError::UnknownState(values[STATE]))?;
        let current_turn = match values[TURN] {
            NO_PLAYER => return Err(SnapshotError::MissingTurn),
            code => decode_player("current turn", code)?,
        };

        if winner.is_some() && state == GameState::InProgress {
            return Err(SnapshotError::WinnerInProgress);
        }
        check_consistency(&cells, winner, state, current_turn)?;

        debug!(?state, ?winner, %current_turn, "Snapshot decoded");
        Ok(Self {
            cells,
            current_turn,
            winner,
            state,
            config,
        })
    }
}
