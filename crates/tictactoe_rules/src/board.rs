//! The board state machine.

use crate::config::{DrawPolicy, RulesConfig};
use crate::error::CellOutOfRange;
use crate::outcome::MarkOutcome;
use crate::position::{Position, SIZE};
use crate::rules::{is_full, is_winning_move};
use crate::types::{Cell, GameState, Player};
use tracing::{debug, info, instrument};

/// 3x3 tic-tac-toe board with turn tracking and win detection.
///
/// The only mutations are [`Board::restart`] and [`Board::play`] (or its
/// thin wrapper [`Board::mark`]). Once the game is finished no cell
/// changes and the turn stops flipping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Cells in row-major order (0-8).
    pub(crate) cells: [Cell; 9],
    pub(crate) current_turn: Player,
    pub(crate) winner: Option<Player>,
    pub(crate) state: GameState,
    pub(crate) config: RulesConfig,
}

impl Board {
    /// Creates a new game with the default rules.
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Creates a new game with the given rules.
    #[instrument]
    pub fn with_config(config: RulesConfig) -> Self {
        Self {
            cells: [Cell::Empty; 9],
            current_turn: Player::X,
            winner: None,
            state: GameState::InProgress,
            config,
        }
    }

    /// Clears the board and win status; X moves first.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.cells = [Cell::Empty; 9];
        self.winner = None;
        self.current_turn = Player::X;
        self.state = GameState::InProgress;
        debug!("Board restarted");
    }

    /// Marks the cell for the player whose turn it is.
    ///
    /// Returns the player that moved. Rejected moves never panic:
    /// an occupied cell returns its occupant, while a finished game or
    /// off-board coordinates return `None`. See [`Board::play`] for an
    /// outcome that tells every case apart.
    pub fn mark(&mut self, row: i32, col: i32) -> Option<Player> {
        self.play(row, col).player()
    }

    /// Attempts to place the current player's mark at `(row, col)`.
    ///
    /// Checks, in order: the game is in progress, the coordinates are on
    /// the board, the cell is empty. On a finished game an occupied cell
    /// still reports its occupant.
    #[instrument(skip(self), fields(turn = %self.current_turn, state = ?self.state))]
    pub fn play(&mut self, row: i32, col: i32) -> MarkOutcome {
        let pos = Position::from_coords(row, col);
        let occupant = pos.and_then(|p| self.cells[p.to_index()].player());

        if self.state == GameState::Finished {
            debug!("Game is over, ignoring move");
            return occupant.map_or(MarkOutcome::GameOver, MarkOutcome::Occupied);
        }

        let Some(pos) = pos else {
            debug!("Coordinates off the board, ignoring move");
            return MarkOutcome::OutOfRange;
        };

        if let Some(occupant) = occupant {
            debug!(%occupant, "Cell already occupied, ignoring move");
            return MarkOutcome::Occupied(occupant);
        }

        let mover = self.current_turn;
        self.cells[pos.to_index()] = mover.into();

        if is_winning_move(&self.cells, mover, pos) {
            self.state = GameState::Finished;
            self.winner = Some(mover);
            info!(winner = %mover, position = %pos, "Winning move");
        } else if is_full(&self.cells) && self.config.draw_policy() == &DrawPolicy::Finalize {
            self.state = GameState::Finished;
            info!(position = %pos, "Board full with no winner, game drawn");
        } else {
            self.current_turn = mover.opponent();
        }

        MarkOutcome::Moved(mover)
    }

    /// Returns the occupant of `(row, col)`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`CellOutOfRange`] unless both coordinates are in `0..=2`.
    pub fn value_at_cell(&self, row: i32, col: i32) -> Result<Option<Player>, CellOutOfRange> {
        Position::from_coords(row, col)
            .map(|pos| self.cells[pos.to_index()].player())
            .ok_or(CellOutOfRange { row, col })
    }

    /// Returns the winner. `None` both while playing and after a draw;
    /// consult [`Board::state`] to tell those apart.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player whose move is next.
    ///
    /// Only meaningful while the game is in progress.
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    /// Checks whether moves are no longer accepted.
    pub fn is_finished(&self) -> bool {
        self.state == GameState::Finished
    }

    /// Checks whether the game finished without a winner.
    pub fn is_draw(&self) -> bool {
        self.is_finished() && self.winner.is_none()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the rules in force.
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(SIZE).enumerate() {
            if row > 0 {
                writeln!(f, "-+-+-")?;
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
