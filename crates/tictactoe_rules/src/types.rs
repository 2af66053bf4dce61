//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Snapshot code for "no player" (empty cell, no winner).
pub const NO_PLAYER: i32 = 0;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Stable integer id used in snapshots.
    pub fn id(self) -> i32 {
        match self {
            Player::X => 1,
            Player::O => 2,
        }
    }

    /// Looks up a player by snapshot id.
    ///
    /// Returns `None` for [`NO_PLAYER`] and for any id that names no player.
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(Player::X),
            2 => Some(Player::O),
            _ => None,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupant, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Snapshot code: [`NO_PLAYER`] for empty, otherwise the occupant's id.
    pub fn id(self) -> i32 {
        self.player().map_or(NO_PLAYER, Player::id)
    }

    /// Decodes a snapshot cell code. Returns `None` for unknown codes.
    pub fn from_id(id: i32) -> Option<Self> {
        if id == NO_PLAYER {
            Some(Cell::Empty)
        } else {
            Player::from_id(id).map(Cell::Occupied)
        }
    }

    /// Single-character rendering used by the board display.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}

/// Whether moves are still accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameState {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended, by a win or a finalized draw.
    Finished,
}

impl GameState {
    /// Snapshot code (0 = in progress, 1 = finished).
    pub fn code(self) -> i32 {
        match self {
            GameState::InProgress => 0,
            GameState::Finished => 1,
        }
    }

    /// Decodes a snapshot state code.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(GameState::InProgress),
            1 => Some(GameState::Finished),
            _ => None,
        }
    }
}
