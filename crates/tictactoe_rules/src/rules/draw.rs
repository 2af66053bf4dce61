//! Draw detection logic for tic-tac-toe.

use crate::types::Cell;

/// Checks if the board is full (all cells occupied).
///
/// A full board after a non-winning move is a draw.
pub fn is_full(cells: &[Cell; 9]) -> bool {
    cells.iter().all(|cell| !cell.is_empty())
}
