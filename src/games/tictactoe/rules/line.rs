//! The rows, columns and diagonals a player can complete.

use super::super::board::{BOARD_COLUMNS, BOARD_ROWS};
use super::super::Position;
use serde::{Deserialize, Serialize};

/// Cells needed in a row to win.
pub const LINE_LENGTH: usize = BOARD_ROWS;

/// A line of [`LINE_LENGTH`] cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Horizontal line at the given row.
    Row(usize),
    /// Vertical line at the given column.
    Column(usize),
    /// Top-left to bottom-right, `(i, i)`.
    Diagonal,
    /// Top-right to bottom-left, `(i, n - 1 - i)`.
    AntiDiagonal,
}

impl Line {
    /// Every line on the board: rows, then columns, then both diagonals.
    pub fn all() -> impl Iterator<Item = Line> {
        (0..BOARD_ROWS)
            .map(Line::Row)
            .chain((0..BOARD_COLUMNS).map(Line::Column))
            .chain([Line::Diagonal, Line::AntiDiagonal])
    }

    /// Positions covered by this line, in order.
    pub fn positions(self) -> [Position; LINE_LENGTH] {
        std::array::from_fn(|i| match self {
            Line::Row(row) => Position::new(row, i),
            Line::Column(column) => Position::new(i, column),
            Line::Diagonal => Position::new(i, i),
            Line::AntiDiagonal => Position::new(i, LINE_LENGTH - 1 - i),
        })
    }

    /// True when `position` lies on this line.
    pub fn contains(self, position: Position) -> bool {
        self.positions().contains(&position)
    }
}
