//! Result of a mark attempt.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// What a call to [`Board::play`](crate::Board::play) did.
///
/// Rejections are ordinary outcomes, not errors: stray clicks on a
/// finished game or an occupied cell are expected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MarkOutcome {
    /// The mark was placed by this player.
    #[display("{} moved", _0)]
    Moved(Player),

    /// The cell already holds this player's mark; nothing changed.
    #[display("cell already held by {}", _0)]
    Occupied(Player),

    /// The game is finished; nothing changed.
    #[display("game is over")]
    GameOver,

    /// The coordinates are off the board; nothing changed.
    #[display("out of range")]
    OutOfRange,
}

impl MarkOutcome {
    /// The player reported to callers of [`Board::mark`](crate::Board::mark).
    ///
    /// The mover for an applied move, the occupant for an occupied cell,
    /// `None` otherwise.
    pub fn player(self) -> Option<Player> {
        match self {
            MarkOutcome::Moved(player) | MarkOutcome::Occupied(player) => Some(player),
            MarkOutcome::GameOver | MarkOutcome::OutOfRange => None,
        }
    }

    /// Checks whether the board changed.
    pub fn is_applied(self) -> bool {
        matches!(self, MarkOutcome::Moved(_))
    }
}
