//! Key mapping for keyboard play.

use crate::games::tictactoe::{BOARD_COLUMNS, BOARD_ROWS, Position};
use crossterm::event::KeyCode;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Move the cursor with an arrow key.
    Cursor(KeyCode),
    /// Place a token under the cursor.
    PlaceAtCursor,
    /// Place a token at a keypad square (1-9, row-major).
    PlaceAt(Position),
    /// Clear the board and start over.
    NewGame,
    /// Leave the app.
    Quit,
}

/// Maps a key to an action, `None` for unbound keys.
pub fn action_for(key: KeyCode) -> Option<InputAction> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(InputAction::Cursor(key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(InputAction::PlaceAtCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(InputAction::PlaceAt),
        KeyCode::Char('n') | KeyCode::Char('r') => Some(InputAction::NewGame),
        KeyCode::Char('q') | KeyCode::Esc => Some(InputAction::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    match key {
        KeyCode::Up => Position::new(row.saturating_sub(1), column),
        KeyCode::Down => Position::new((row + 1).min(BOARD_ROWS - 1), column),
        KeyCode::Left => Position::new(row, column.saturating_sub(1)),
        KeyCode::Right => Position::new(row, (column + 1).min(BOARD_COLUMNS - 1)),
        _ => cursor,
    }
}
