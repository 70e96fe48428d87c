//! Placements and the ways they can be refused.

use super::{Position, Token};
use serde::{Deserialize, Serialize};

/// An accepted move: a token written to a position.
///
/// The controller keeps these in order for the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Placement {
    /// Token that was placed.
    pub token: Token,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.token, self.position.label())
    }
}

/// Why a placement or round operation was refused.
///
/// Every variant is recoverable; the board and round state are left
/// exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveError {
    /// The token is neither X nor O.
    #[display("Token {:?} is not a player token", _0)]
    InvalidToken(String),

    /// Row or column falls outside the board.
    #[display("Position ({row}, {column}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// The cell already holds a token.
    #[display("Cell ({row}, {column}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// The game was won or drawn; start a new one first.
    #[display("Round is already over")]
    RoundAlreadyOver,

    /// Names may only change before the first move or after the round ends.
    #[display("Player names are locked while a round is in play")]
    NamesLocked,
}

impl std::error::Error for MoveError {}
