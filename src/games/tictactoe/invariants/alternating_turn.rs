//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{RoundController, Token};
use super::Invariant;

/// Invariant: placements alternate starting with X.
///
/// While the round is in play the active token follows from the move
/// count. Once it is over the turn stays with whoever moved last.
pub struct AlternatingTurnInvariant;

impl Invariant<RoundController> for AlternatingTurnInvariant {
    fn holds(controller: &RoundController) -> bool {
        let history = controller.history();

        if history.first().is_some_and(|first| first.token != Token::X) {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].token == pair[1].token) {
            return false;
        }

        let expected = if controller.is_viable() {
            if history.len() % 2 == 0 { Token::X } else { Token::O }
        } else {
            match history.last() {
                Some(last) => last.token,
                None => return false,
            }
        };

        controller.active_player().token() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&RoundController::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut controller = RoundController::new();
        for (row, column) in [(0, 0), (1, 1), (0, 1), (2, 2), (2, 0)] {
            controller.play_round(row, column);
        }
        assert!(AlternatingTurnInvariant::holds(&controller));
        assert_eq!(controller.active_player().token(), Token::O);
    }

    #[test]
    fn test_finished_game_holds() {
        let mut controller = RoundController::new();
        for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            controller.play_round(row, column);
        }
        assert!(!controller.is_viable());
        assert!(AlternatingTurnInvariant::holds(&controller));
    }

    #[test]
    fn test_skipped_turn_violates() {
        let mut controller = RoundController::new();
        controller.play_round(0, 0);
        controller.state.active_player_index = 0;
        assert!(!AlternatingTurnInvariant::holds(&controller));
    }
}
