//! Win detection logic for tic-tac-toe.

use super::super::{Snapshot, Token};
use super::line::Line;
use tracing::instrument;

/// Finds the first complete line and the token that completed it.
///
/// Lines are scanned rows first, then columns, then diagonals.
#[instrument(skip(snapshot))]
pub fn winning_line(snapshot: &Snapshot) -> Option<(Line, Token)> {
    Line::all().find_map(|line| {
        let [first, rest @ ..] = line.positions();
        let token = snapshot.token(first.row(), first.column())?;
        rest.iter()
            .all(|position| snapshot.token(position.row(), position.column()) == Some(token))
            .then_some((line, token))
    })
}

/// Returns the token holding a complete line, if any.
#[instrument(skip(snapshot))]
pub fn winner(snapshot: &Snapshot) -> Option<Token> {
    winning_line(snapshot).map(|(_, token)| token)
}

/// True iff some row, column or diagonal holds three identical tokens.
#[instrument(skip(snapshot))]
pub fn has_winner(snapshot: &Snapshot) -> bool {
    winning_line(snapshot).is_some()
}
