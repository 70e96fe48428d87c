//! The 3x3 grid and placement legality.

use super::action::MoveError;
use super::snapshot::Snapshot;
use super::{Cell, Position, Token};
use tracing::{debug, instrument};

/// Number of rows on the board.
pub const BOARD_ROWS: usize = 3;

/// Number of columns on the board.
pub const BOARD_COLUMNS: usize = 3;

/// Live board storage.
///
/// Knows nothing about turns or players; it only guarantees that every
/// position holds exactly one cell and that a cell is written at most
/// once between resets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_COLUMNS]; BOARD_ROWS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: empty_grid(),
        }
    }

    /// Discards every token and rebuilds the grid.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting board");
        self.cells = empty_grid();
    }

    /// `(rows, columns)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (BOARD_ROWS, BOARD_COLUMNS)
    }

    /// Copy of the cell at `(row, column)`, if on the board.
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.cells.get(row)?.get(column).copied()
    }

    /// True when `(row, column)` is on the board and unclaimed.
    pub fn is_empty_at(&self, row: usize, column: usize) -> bool {
        self.cell(row, column).is_some_and(|cell| cell.is_empty())
    }

    /// Checks bounds and occupancy without touching the board.
    pub fn check_placement(&self, row: usize, column: usize) -> Result<(), MoveError> {
        let cell = self
            .cell(row, column)
            .ok_or(MoveError::OutOfBounds { row, column })?;
        if !cell.is_empty() {
            return Err(MoveError::CellOccupied { row, column });
        }
        Ok(())
    }

    /// Writes `token` to `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] or [`MoveError::CellOccupied`];
    /// the board is unchanged on error.
    #[instrument(skip(self))]
    pub fn place_token(&mut self, row: usize, column: usize, token: Token) -> Result<(), MoveError> {
        self.check_placement(row, column)?;
        self.cells[row][column].claim(token);
        debug!(%token, row, column, "Token placed");
        Ok(())
    }

    /// Parses `symbol` as a token, then places it.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidToken`] for anything other than `"X"`
    /// or `"O"`, otherwise the same errors as [`Board::place_token`].
    #[instrument(skip(self))]
    pub fn place_symbol(&mut self, row: usize, column: usize, symbol: &str) -> Result<(), MoveError> {
        let token = symbol
            .parse::<Token>()
            .map_err(|_| MoveError::InvalidToken(symbol.to_string()))?;
        self.place_token(row, column, token)
    }

    /// Fresh copy of every cell.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.cells)
    }

    /// Unclaimed positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_empty())
            .map(Cell::position)
    }

    /// Number of claimed cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.snapshot().fmt(f)
    }
}

fn empty_grid() -> [[Cell; BOARD_COLUMNS]; BOARD_ROWS] {
    std::array::from_fn(|row| std::array::from_fn(|column| Cell::empty(Position::new(row, column))))
}
