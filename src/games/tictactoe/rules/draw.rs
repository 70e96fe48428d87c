//! Draw detection logic for tic-tac-toe.

use super::super::Snapshot;
use tracing::instrument;

/// True iff every cell is occupied.
///
/// Says nothing about winners: a full board can also hold a winning
/// line, so callers check for a winner first.
#[instrument(skip(snapshot))]
pub fn has_draw(snapshot: &Snapshot) -> bool {
    snapshot.cells().all(|cell| !cell.is_empty())
}
