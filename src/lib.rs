//! Tic-tac-toe rules engine.
//!
//! A small synchronous engine that any presentation layer can drive,
//! plus a terminal front end built on it.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid and placement legality
//! - **Rules**: pure win/draw/viability checks over a [`Snapshot`]
//! - **RoundController**: players, turn order and round outcome
//! - **TUI**: renders the board and forwards key presses
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{RoundController, RoundPhase, Token};
//!
//! let mut game = RoundController::with_names("Ada", "Grace");
//! for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     game.play_round(row, column);
//! }
//! assert_eq!(game.outcome().winner(), Some(Token::X));
//! assert_eq!(game.phase(), RoundPhase::RoundOver);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_COLUMNS, BOARD_ROWS, Board, Cell, DEFAULT_PLAYER_A, DEFAULT_PLAYER_B, Line, MoveError,
    Outcome, Placement, Player, Position, RoundController, RoundPhase, RoundResult, Snapshot,
    Token,
};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, ControllerInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, OutcomeConsistentInvariant,
};
pub use games::tictactoe::rules;

// Crate-level exports - Terminal UI
pub use tui::{App, InputAction, action_for, move_cursor, run_tui, status_line};
