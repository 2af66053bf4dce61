//! Tic-tac-toe rules engine.
//!
//! A [`Board`] tracks the 3x3 grid, whose turn it is, and whether the game
//! has been won or drawn. Moves go through [`Board::mark`] (or
//! [`Board::play`] for a detailed [`MarkOutcome`]); invalid input is a
//! no-op, never a panic. Boards encode to a twelve-integer [`Snapshot`]
//! so an embedding application can persist a game and restore it later.
//!
//! ```
//! use tictactoe_rules::{Board, GameState, Player};
//!
//! let mut board = Board::new();
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     board.mark(row, col);
//! }
//! assert_eq!(board.winner(), Some(Player::X));
//! assert_eq!(board.state(), GameState::Finished);
//!
//! let restored = Board::from_snapshot(&board.snapshot()).unwrap();
//! assert_eq!(restored, board);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod error;
mod outcome;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use board::Board;
pub use config::{DrawPolicy, RulesConfig};
pub use error::{CellOutOfRange, ConfigError, SnapshotError};
pub use outcome::MarkOutcome;
pub use position::{Position, SIZE};
pub use snapshot::{SNAPSHOT_LEN, Snapshot};
pub use types::{Cell, GameState, NO_PLAYER, Player};
