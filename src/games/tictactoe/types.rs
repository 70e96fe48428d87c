//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark a player places on the board.
///
/// Parses from and prints as `"X"` / `"O"`.
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
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Token {
    /// Player A's mark (moves first).
    X,
    /// Player B's mark.
    O,
}

impl Token {
    /// Returns the opposing token.
    pub fn opponent(self) -> Self {
        match self {
            Token::X => Token::O,
            Token::O => Token::X,
        }
    }

    /// Index of the player that owns this token (0 for X, 1 for O).
    pub fn player_index(self) -> usize {
        match self {
            Token::X => 0,
            Token::O => 1,
        }
    }
}

/// A (row, column) coordinate on the board.
///
/// Coordinates are not bounds-checked here; the board rejects
/// anything outside its dimensions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new,
)]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    /// Row index, top to bottom.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index, left to right.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Human readable name of the square.
    #[instrument]
    pub fn label(&self) -> &'static str {
        match (self.row, self.column) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            (2, 2) => "Bottom-right",
            _ => "Off-board",
        }
    }

    /// Row-major index (0-8) into a 3x3 board, `None` when off the board.
    pub fn to_index(self) -> Option<usize> {
        (self.row < 3 && self.column < 3).then(|| self.row * 3 + self.column)
    }

    /// Creates a position from a row-major index, `None` past 8.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < 9).then(|| Self::new(index / 3, index % 3))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single square of the board.
///
/// The position is fixed when the board is built; the token is written
/// at most once until the board is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    position: Position,
    token: Option<Token>,
}

impl Cell {
    /// Creates a cell at `position` holding `token`.
    pub fn new(position: Position, token: Option<Token>) -> Self {
        Self { position, token }
    }

    /// Creates an empty cell.
    pub fn empty(position: Position) -> Self {
        Self::new(position, None)
    }

    /// Where this cell sits on the board.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Token held by the cell, if any.
    pub fn token(&self) -> Option<Token> {
        self.token
    }

    /// Returns true when no token has been placed here.
    pub fn is_empty(&self) -> bool {
        self.token.is_none()
    }

    pub(super) fn claim(&mut self, token: Token) {
        self.token = Some(token);
    }
}

/// One of the two participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    token: Token,
    winner: bool,
}

impl Player {
    /// Creates a player that has not won yet.
    pub fn new(name: impl Into<String>, token: Token) -> Self {
        Self {
            name: name.into(),
            token,
            winner: false,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's fixed mark.
    pub fn token(&self) -> Token {
        self.token
    }

    /// Whether the player won the current game.
    pub fn is_winner(&self) -> bool {
        self.winner
    }

    pub(super) fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub(super) fn set_winner(&mut self, winner: bool) {
        self.winner = winner;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_token_parses_exact_symbols() {
        assert_eq!(Token::from_str("X"), Ok(Token::X));
        assert_eq!(Token::from_str("O"), Ok(Token::O));
        assert!(Token::from_str("x").is_err());
        assert!(Token::from_str("").is_err());
        assert!(Token::from_str("Z").is_err());
    }

    #[test]
    fn test_token_opponent() {
        assert_eq!(Token::X.opponent(), Token::O);
        assert_eq!(Token::O.opponent(), Token::X);
        assert_eq!(Token::X.to_string(), "X");
    }

    #[test]
    fn test_position_index_round_trip() {
        assert_eq!(Position::new(0, 0).to_index(), Some(0));
        assert_eq!(Position::new(1, 1).to_index(), Some(4));
        assert_eq!(Position::from_index(7).and_then(Position::to_index), Some(7));
        assert_eq!(Position::from_index(8), Some(Position::new(2, 2)));
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_off_board_position_has_no_index() {
        assert_eq!(Position::new(3, 0).to_index(), None);
        assert_eq!(Position::new(0, 3).to_index(), None);
        assert_eq!(Position::new(usize::MAX, 0).to_index(), None);
        assert_eq!(Position::new(usize::MAX, usize::MAX).to_index(), None);
    }

    #[test]
    fn test_position_label() {
        assert_eq!(Position::new(1, 1).label(), "Center");
        assert_eq!(Position::new(2, 0).to_string(), "Bottom-left");
        assert_eq!(Position::new(3, 0).label(), "Off-board");
    }
}
