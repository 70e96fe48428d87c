//! Monotonic board invariant: cells never change once claimed.

use super::super::{BOARD_COLUMNS, BOARD_ROWS, RoundController, Token};
use super::Invariant;

/// Invariant: the board is exactly the history replayed onto an empty grid.
///
/// Replaying fails if any placement lands off the grid or on a claimed
/// cell, and the result differs from the live board if anything was
/// overwritten or written outside the history.
pub struct MonotonicBoardInvariant;

impl Invariant<RoundController> for MonotonicBoardInvariant {
    fn holds(controller: &RoundController) -> bool {
        let mut replayed: [[Option<Token>; BOARD_COLUMNS]; BOARD_ROWS] = Default::default();
        for placement in controller.history() {
            let position = placement.position;
            match replayed
                .get_mut(position.row())
                .and_then(|row| row.get_mut(position.column()))
            {
                Some(slot) if slot.is_none() => *slot = Some(placement.token),
                _ => return false,
            }
        }
        replayed == controller.board_snapshot().tokens()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
