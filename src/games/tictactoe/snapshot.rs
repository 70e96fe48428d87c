//! Point-in-time copies of the board.

use super::board::{BOARD_COLUMNS, BOARD_ROWS};
use super::{Cell, Position, Token};
use serde::{Deserialize, Serialize};

/// Immutable copy of every cell on the board.
///
/// Owns its cells outright, so nothing done to a snapshot reaches the
/// board it was taken from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    cells: [[Cell; BOARD_COLUMNS]; BOARD_ROWS],
}

impl Snapshot {
    pub(super) fn new(cells: [[Cell; BOARD_COLUMNS]; BOARD_ROWS]) -> Self {
        Self { cells }
    }

    /// Builds a snapshot from a grid of tokens, positions filled in row-major.
    pub fn from_tokens(tokens: [[Option<Token>; BOARD_COLUMNS]; BOARD_ROWS]) -> Self {
        Self::new(std::array::from_fn(|row| {
            std::array::from_fn(|column| Cell::new(Position::new(row, column), tokens[row][column]))
        }))
    }

    /// `(rows, columns)` of the board this was taken from.
    pub fn dimensions(&self) -> (usize, usize) {
        (BOARD_ROWS, BOARD_COLUMNS)
    }

    /// Token at `(row, column)`; `None` when empty or off the board.
    pub fn token(&self, row: usize, column: usize) -> Option<Token> {
        self.cell(row, column).and_then(Cell::token)
    }

    /// Cell at `(row, column)`, if on the board.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.cells.get(row)?.get(column)
    }

    /// The grid, row by row.
    pub fn rows(&self) -> &[[Cell; BOARD_COLUMNS]; BOARD_ROWS] {
        &self.cells
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Tokens only, without positions.
    pub fn tokens(&self) -> [[Option<Token>; BOARD_COLUMNS]; BOARD_ROWS] {
        self.cells.map(|row| row.map(|cell| cell.token()))
    }
}

impl std::fmt::Display for Snapshot {
    /// Renders `X|O|3` rows separated by `-+-+-`; empty cells show
    /// their 1-based index.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row_index, row) in self.cells.iter().enumerate() {
            for (column_index, cell) in row.iter().enumerate() {
                match (cell.token(), cell.position().to_index()) {
                    (Some(token), _) => write!(f, "{token}")?,
                    (None, Some(index)) => write!(f, "{}", index + 1)?,
                    (None, None) => write!(f, " ")?,
                }
                if column_index + 1 < BOARD_COLUMNS {
                    write!(f, "|")?;
                }
            }
            if row_index + 1 < BOARD_ROWS {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tokens_assigns_positions() {
        let snapshot = Snapshot::from_tokens([
            [Some(Token::X), None, None],
            [None, Some(Token::O), None],
            [None, None, None],
        ]);
        assert_eq!(snapshot.cell(1, 1).map(Cell::position), Some(Position::new(1, 1)));
        assert_eq!(snapshot.token(0, 0), Some(Token::X));
        assert_eq!(snapshot.token(1, 1), Some(Token::O));
        assert_eq!(snapshot.token(2, 2), None);
        assert_eq!(snapshot.token(3, 0), None);
    }

    #[test]
    fn test_tokens_drop_positions() {
        let grid = [
            [Some(Token::X), None, Some(Token::O)],
            [None, None, None],
            [None, Some(Token::X), None],
        ];
        let snapshot = Snapshot::from_tokens(grid);
        assert_eq!(snapshot.tokens(), grid);
        assert_eq!(snapshot.dimensions(), (BOARD_ROWS, BOARD_COLUMNS));
        assert_eq!(snapshot.rows().len(), BOARD_ROWS);
    }

    #[test]
    fn test_display() {
        let snapshot = Snapshot::from_tokens([
            [Some(Token::X), Some(Token::O), None],
            [None, Some(Token::X), None],
            [None, None, Some(Token::O)],
        ]);
        assert_eq!(snapshot.to_string(), "X|O|3\n-+-+-\n4|X|6\n-+-+-\n7|8|O");
    }

    #[test]
    fn test_serializes_tokens_and_positions() {
        let snapshot = Snapshot::from_tokens([[None; 3]; 3]);
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["cells"][2][1]["position"]["row"], 2);
        assert_eq!(json["cells"][2][1]["position"]["column"], 1);
        assert!(json["cells"][2][1]["token"].is_null());
    }
}
