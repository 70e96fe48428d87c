//! Tic-tac-toe: board, rules and round controller.

mod action;
mod board;
mod controller;
mod snapshot;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{MoveError, Placement};
pub use board::{BOARD_COLUMNS, BOARD_ROWS, Board};
pub use controller::{
    DEFAULT_PLAYER_A, DEFAULT_PLAYER_B, Outcome, RoundController, RoundPhase, RoundResult,
};
pub use rules::Line;
pub use snapshot::Snapshot;
pub use types::{Cell, Player, Position, Token};
