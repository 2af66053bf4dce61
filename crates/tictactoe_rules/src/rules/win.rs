//! Win detection logic for tic-tac-toe.

use crate::position::{Position, SIZE};
use crate::types::{Cell, Player};
use tracing::instrument;

/// Every winning line on the board.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `player`, having just played at `pos`, holds a full line.
///
/// Only lines through `pos` can have been completed by the move, so this
/// looks at the row, the column, and whichever diagonals `pos` lies on.
#[instrument(skip(cells))]
pub fn is_winning_move(cells: &[Cell; 9], player: Player, pos: Position) -> bool {
    let held = |row: usize, col: usize| cells[row * SIZE + col] == Cell::Occupied(player);
    let (row, col) = (pos.row(), pos.col());

    (0..SIZE).all(|i| held(row, i))
        || (0..SIZE).all(|i| held(i, col))
        || (row == col && (0..SIZE).all(|i| held(i, i)))
        || (row + col == SIZE - 1 && (0..SIZE).all(|i| held(i, SIZE - 1 - i)))
}

/// Returns the player holding each complete line, one entry per line.
///
/// Full-board scan, for checking a stored grid rather than a single move.
pub fn line_holders(cells: &[Cell; 9]) -> impl Iterator<Item = Player> + '_ {
    LINES.iter().filter_map(|[a, b, c]| {
        let cell = cells[a.to_index()];
        (cell == cells[b.to_index()] && cell == cells[c.to_index()])
            .then(|| cell.player())
            .flatten()
    })
}
