//! Outcome invariant: the flags agree with each other and with the board.

use super::super::{RoundController, rules};
use super::Invariant;

/// Invariant: at most one winner, never both won and drawn, and the
/// round is viable exactly when nothing has been decided.
///
/// The recorded outcome must also match what the rules say about the
/// live board.
pub struct OutcomeConsistentInvariant;

impl Invariant<RoundController> for OutcomeConsistentInvariant {
    fn holds(controller: &RoundController) -> bool {
        let outcome = controller.outcome();
        if outcome.player_a_won() && outcome.player_b_won() {
            return false;
        }
        if outcome.drawn() && outcome.winner().is_some() {
            return false;
        }
        if controller.is_viable() == outcome.is_decided() {
            return false;
        }

        let snapshot = controller.board_snapshot();
        let decided_by_board = rules::has_winner(&snapshot) || rules::has_draw(&snapshot);
        outcome.winner() == rules::winner(&snapshot) && outcome.is_decided() == decided_by_board
    }

    fn description() -> &'static str {
        "Outcome flags match the board"
    }
}
