//! Game rules for tic-tac-toe.
//!
//! Pure functions over the cell grid, kept apart from board storage so
//! the board only decides when to call them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, is_winning_move, line_holders};
