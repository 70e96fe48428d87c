//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Snapshot`](super::Snapshot). Nothing here
//! mutates a board or remembers anything between calls.

pub mod draw;
pub mod line;
pub mod win;

pub use draw::has_draw;
pub use line::{LINE_LENGTH, Line};
pub use win::{has_winner, winner, winning_line};

use super::Snapshot;
use tracing::instrument;

/// True iff play may continue: no winner and the board is not full.
#[instrument(skip(snapshot))]
pub fn is_viable(snapshot: &Snapshot) -> bool {
    !(has_winner(snapshot) || has_draw(snapshot))
}
