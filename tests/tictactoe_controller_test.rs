//! Tests for the round controller lifecycle.

use tictactoe_engine::{
    MoveError, Outcome, RoundController, RoundPhase, RoundResult, Token, rules,
};

fn play_all(game: &mut RoundController, moves: &[(usize, usize)]) -> Vec<RoundResult> {
    moves
        .iter()
        .map(|&(row, column)| game.play_round(row, column))
        .collect()
}

#[test]
fn test_row_win() {
    let mut game = RoundController::new();
    let results = play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    assert!(results.iter().all(RoundResult::accepted));
    let last = results.last().unwrap();
    assert_eq!(last.winner(), Some(Token::X));
    assert!(!last.viable());

    assert!(rules::has_winner(&game.board_snapshot()));
    assert!(game.players()[0].is_winner());
    assert!(game.outcome().player_a_won());
    assert!(!game.outcome().player_b_won());
    assert_eq!(game.phase(), RoundPhase::RoundOver);
}

#[test]
fn test_draw() {
    let mut game = RoundController::new();
    let results = play_all(
        &mut game,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );

    assert!(results.iter().all(RoundResult::accepted));
    let snapshot = game.board_snapshot();
    assert!(rules::has_draw(&snapshot));
    assert!(!rules::has_winner(&snapshot));
    assert!(results.last().unwrap().drawn());
    assert!(game.outcome().drawn());
    assert_eq!(game.outcome().winner(), None);
    assert_eq!(game.phase(), RoundPhase::RoundOver);
}

#[test]
fn test_illegal_reuse() {
    let mut game = RoundController::new();
    assert!(game.play_round(0, 0).accepted());
    let before = game.board_snapshot();

    let result = game.play_round(0, 0);
    assert_eq!(
        result.rejection(),
        Some(&MoveError::CellOccupied { row: 0, column: 0 })
    );
    assert_eq!(game.board_snapshot(), before);
    assert_eq!(game.active_player().token(), Token::O);
    assert_eq!(result.active_player(), Token::O);
    assert!(!game.last_placement_valid());
}

#[test]
fn test_move_after_game_over() {
    let mut game = RoundController::new();
    play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let before = game.board_snapshot();
    let history = game.history().to_vec();

    for (row, column) in [(2, 2), (2, 0), (9, 9)] {
        let result = game.play_round(row, column);
        assert_eq!(result.rejection(), Some(&MoveError::RoundAlreadyOver));
        assert_eq!(result.winner(), Some(Token::X));
    }
    assert_eq!(game.board_snapshot(), before);
    assert_eq!(game.history(), history.as_slice());
    assert!(game.last_placement_valid());
}

#[test]
fn test_new_game_round_trip() {
    let mut game = RoundController::new();
    play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    game.start_new_game();

    let snapshot = game.board_snapshot();
    assert_eq!(snapshot.cells().count(), 9);
    assert!(snapshot.cells().all(|cell| cell.token().is_none()));
    assert_eq!(game.outcome(), Outcome::default());
    assert!(!game.outcome().player_a_won());
    assert!(!game.outcome().player_b_won());
    assert!(!game.outcome().drawn());
    assert_eq!(game.active_player().token(), Token::X);
    assert_eq!(game.phase(), RoundPhase::AwaitingMove);
    assert!(game.play_round(2, 2).accepted());
}

#[test]
fn test_turns_alternate_strictly() {
    let mut game = RoundController::new();
    let moves = [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1), (2, 1)];
    for (count, &(row, column)) in moves.iter().enumerate() {
        let mover = if count % 2 == 0 { Token::X } else { Token::O };
        assert_eq!(game.active_player().token(), mover);

        // A refused move never flips the turn.
        assert!(!game.play_round(7, 7).accepted());
        assert_eq!(game.active_player().token(), mover);

        let result = game.play_round(row, column);
        assert!(result.accepted());
        assert_eq!(result.placed().unwrap().token, mover);
        if result.viable() {
            assert_eq!(result.active_player(), mover.opponent());
        }
    }
}

#[test]
fn test_cells_never_change_once_claimed() {
    let mut game = RoundController::new();
    let attempts = [(0, 0), (0, 0), (1, 1), (0, 0), (1, 1), (2, 0), (0, 0)];
    let mut claimed = Vec::new();

    for (row, column) in attempts {
        game.play_round(row, column);
        let snapshot = game.board_snapshot();
        for &(r, c, token) in &claimed {
            assert_eq!(snapshot.token(r, c), Some(token));
        }
        if let Some(placement) = game.history().last() {
            let entry = (placement.position.row(), placement.position.column(), placement.token);
            if !claimed.contains(&entry) {
                claimed.push(entry);
            }
        }
    }
    assert_eq!(claimed.len(), 3);
}

#[test]
fn test_independent_games() {
    let mut first = RoundController::with_names("Ada", "Grace");
    let mut second = RoundController::with_names("Alan", "Barbara");

    first.play_round(1, 1);
    assert_eq!(second.board_snapshot().token(1, 1), None);
    assert!(second.play_round(1, 1).accepted());
    assert_eq!(first.active_player().name(), "Grace");
    assert_eq!(second.active_player().name(), "Barbara");
}

#[test]
fn test_names_do_not_change_tokens() {
    let mut game = RoundController::new();
    game.set_player_names("Ada", "Grace").unwrap();
    assert_eq!(game.players()[0].token(), Token::X);
    assert_eq!(game.players()[1].token(), Token::O);
    assert_eq!(game.active_player().name(), "Ada");

    game.play_round(0, 0);
    assert_eq!(game.set_player_names("X", "Y"), Err(MoveError::NamesLocked));
}
