//! Application state and logic.

use crate::games::tictactoe::{MoveError, Position, RoundController, RoundResult};
use tracing::{debug, info, instrument};

use super::input::{InputAction, move_cursor};

/// Status text for the current state of a controller.
///
/// Precedence: draw, then a win, then a refused placement, then whose
/// turn it is.
pub fn status_line(controller: &RoundController) -> String {
    let outcome = controller.outcome();
    if outcome.drawn() {
        return "GAME OVER - DRAW".to_string();
    }
    if let Some(winner) = outcome.winner() {
        let name = controller.players()[winner.player_index()].name();
        return format!("{} ({}) wins!", name, winner);
    }
    if !controller.last_placement_valid() {
        return "INVALID PLACEMENT - PLEASE TRY AGAIN".to_string();
    }
    let active = controller.active_player();
    format!("{}'s turn ({})", active.name(), active.token())
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    controller: RoundController,
    cursor: Position,
    last_result: Option<RoundResult>,
    running: bool,
}

impl App {
    /// Creates an app around `controller` with the cursor in the center.
    pub fn new(controller: RoundController) -> Self {
        Self {
            controller,
            cursor: Position::new(1, 1),
            last_result: None,
            running: true,
        }
    }

    /// The game being played.
    pub fn controller(&self) -> &RoundController {
        &self.controller
    }

    /// Highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Result of the most recent placement attempt.
    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// False once the user asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Status text to show under the board.
    pub fn status_message(&self) -> String {
        match self.last_result.as_ref().and_then(RoundResult::rejection) {
            Some(MoveError::RoundAlreadyOver) => {
                format!("{} Press 'n' for a new game.", status_line(&self.controller))
            }
            _ => status_line(&self.controller),
        }
    }

    /// Applies one input action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: InputAction) {
        match action {
            InputAction::Cursor(key) => self.cursor = move_cursor(self.cursor, key),
            InputAction::PlaceAtCursor => self.place(self.cursor),
            InputAction::PlaceAt(position) => {
                self.cursor = position;
                self.place(position);
            }
            InputAction::NewGame => {
                self.controller.start_new_game();
                self.last_result = None;
            }
            InputAction::Quit => {
                info!("User quit");
                self.running = false;
            }
        }
    }

    fn place(&mut self, position: Position) {
        let result = self.controller.play_round(position.row(), position.column());
        debug!(?result, "Placement attempted");
        self.last_result = Some(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Token;
    use crossterm::event::KeyCode;

    #[test]
    fn test_status_reports_turn() {
        let app = App::new(RoundController::with_names("Ada", "Grace"));
        assert_eq!(app.status_message(), "Ada's turn (X)");
    }

    #[test]
    fn test_place_at_cursor() {
        let mut app = App::new(RoundController::new());
        app.handle(InputAction::Cursor(KeyCode::Up));
        app.handle(InputAction::PlaceAtCursor);
        let snapshot = app.controller().board_snapshot();
        assert_eq!(snapshot.token(0, 1), Some(Token::X));
        assert!(app.last_result().is_some_and(RoundResult::accepted));
    }

    #[test]
    fn test_invalid_placement_status() {
        let mut app = App::new(RoundController::with_names("Ada", "Grace"));
        app.handle(InputAction::PlaceAtCursor);
        app.handle(InputAction::PlaceAtCursor);
        assert_eq!(app.status_message(), "INVALID PLACEMENT - PLEASE TRY AGAIN");
        assert_eq!(app.controller().active_player().name(), "Grace");

        app.handle(InputAction::PlaceAt(Position::new(0, 0)));
        assert_eq!(app.status_message(), "Ada's turn (X)");
    }

    #[test]
    fn test_win_then_new_game() {
        let mut app = App::new(RoundController::with_names("Ada", "Grace"));
        for index in [0, 3, 1, 4, 2] {
            app.handle(InputAction::PlaceAt(Position::from_index(index).unwrap()));
        }
        assert_eq!(app.status_message(), "Ada (X) wins!");

        app.handle(InputAction::PlaceAt(Position::new(2, 2)));
        assert_eq!(app.status_message(), "Ada (X) wins! Press 'n' for a new game.");

        app.handle(InputAction::NewGame);
        assert_eq!(app.status_message(), "Ada's turn (X)");
        assert!(app.controller().history().is_empty());
    }

    #[test]
    fn test_draw_status() {
        let mut app = App::new(RoundController::with_names("Ada", "Grace"));
        for (row, column) in [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)] {
            app.handle(InputAction::PlaceAt(Position::new(row, column)));
        }
        assert!(app.controller().outcome().drawn());
        assert_eq!(status_line(app.controller()), "GAME OVER - DRAW");

        app.handle(InputAction::PlaceAtCursor);
        assert_eq!(app.status_message(), "GAME OVER - DRAW Press 'n' for a new game.");
    }

    #[test]
    fn test_quit_stops_app() {
        let mut app = App::new(RoundController::new());
        assert!(app.is_running());
        app.handle(InputAction::Quit);
        assert!(!app.is_running());
    }
}
