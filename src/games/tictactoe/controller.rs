//! Round orchestration: players, turns and outcome.
//!
//! The controller is the only thing that drives a [`Board`] during play.
//! Each call to [`RoundController::play_round`] places the active
//! player's token, classifies the resulting snapshot and either passes
//! the turn or ends the round.

use super::action::{MoveError, Placement};
use super::invariants::{ControllerInvariants, InvariantSet};
use super::{Board, Player, Position, Snapshot, Token, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Default name for the player holding X.
pub const DEFAULT_PLAYER_A: &str = "Player One";

/// Default name for the player holding O.
pub const DEFAULT_PLAYER_B: &str = "Player Two";

/// Where the round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// The active player may place a token.
    AwaitingMove,
    /// Won or drawn; only a new game resumes play.
    RoundOver,
}

/// Winner flags and the draw flag for the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Outcome {
    player_a_won: bool,
    player_b_won: bool,
    drawn: bool,
}

impl Outcome {
    /// Player A (X) completed a line.
    pub fn player_a_won(&self) -> bool {
        self.player_a_won
    }

    /// Player B (O) completed a line.
    pub fn player_b_won(&self) -> bool {
        self.player_b_won
    }

    /// The board filled up with no line.
    pub fn drawn(&self) -> bool {
        self.drawn
    }

    /// Token of the winning player, if any.
    pub fn winner(&self) -> Option<Token> {
        if self.player_a_won {
            Some(Token::X)
        } else if self.player_b_won {
            Some(Token::O)
        } else {
            None
        }
    }

    /// True once the game is won or drawn.
    pub fn is_decided(&self) -> bool {
        self.player_a_won || self.player_b_won || self.drawn
    }
}

/// Mutable per-game flags. Only the controller reads or writes these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct RoundState {
    pub(super) active_player_index: usize,
    pub(super) game_viable: bool,
    pub(super) game_drawn: bool,
    pub(super) last_placement_valid: bool,
}

impl RoundState {
    fn initial() -> Self {
        Self {
            active_player_index: 0,
            game_viable: true,
            game_drawn: false,
            last_placement_valid: true,
        }
    }
}

/// What happened on a call to [`RoundController::play_round`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    rejection: Option<MoveError>,
    placed: Option<Placement>,
    active_player: Token,
    winner: Option<Token>,
    drawn: bool,
    viable: bool,
}

impl RoundResult {
    /// True when the token was written to the board.
    pub fn accepted(&self) -> bool {
        self.rejection.is_none()
    }

    /// Why the move was refused, if it was.
    pub fn rejection(&self) -> Option<&MoveError> {
        self.rejection.as_ref()
    }

    /// The placement that was made, if accepted.
    pub fn placed(&self) -> Option<Placement> {
        self.placed
    }

    /// Token whose turn it is after this call. After a win this is still
    /// the winner, since the turn does not pass.
    pub fn active_player(&self) -> Token {
        self.active_player
    }

    /// Winner of the game, if decided.
    pub fn winner(&self) -> Option<Token> {
        self.winner
    }

    /// Whether the game ended in a draw.
    pub fn drawn(&self) -> bool {
        self.drawn
    }

    /// Whether further moves are allowed.
    pub fn viable(&self) -> bool {
        self.viable
    }
}

/// Drives one game at a time over its own board.
///
/// Independent controllers share nothing, so any number of games can run
/// side by side.
#[derive(Debug, Clone)]
pub struct RoundController {
    pub(super) board: Board,
    pub(super) players: [Player; 2],
    pub(super) state: RoundState,
    pub(super) history: Vec<Placement>,
}

impl RoundController {
    /// Creates a controller with the default player names.
    #[instrument]
    pub fn new() -> Self {
        Self::with_names(DEFAULT_PLAYER_A, DEFAULT_PLAYER_B)
    }

    /// Creates a controller with the given names for X and O.
    #[instrument(skip_all)]
    pub fn with_names(name_a: impl Into<String>, name_b: impl Into<String>) -> Self {
        let players = [Player::new(name_a, Token::X), Player::new(name_b, Token::O)];
        info!(
            player_a = players[0].name(),
            player_b = players[1].name(),
            "Starting new controller"
        );
        Self {
            board: Board::new(),
            players,
            state: RoundState::initial(),
            history: Vec::new(),
        }
    }

    /// Places the active player's token at `(row, column)`.
    ///
    /// A refused move leaves the board and the turn untouched; the same
    /// player tries again. Winner is checked before draw, so a final move
    /// that both fills the board and completes a line is a win.
    #[instrument(skip(self), fields(active = %self.active_player().token()))]
    pub fn play_round(&mut self, row: usize, column: usize) -> RoundResult {
        if !self.state.game_viable {
            warn!(row, column, "Rejected move: round is already over");
            return self.result(Some(MoveError::RoundAlreadyOver), None);
        }

        let token = self.active_player().token();
        if let Err(err) = self.board.place_token(row, column, token) {
            debug!(%err, "Invalid placement, same player retries");
            self.state.last_placement_valid = false;
            return self.result(Some(err), None);
        }

        self.state.last_placement_valid = true;
        let placement = Placement::new(token, Position::new(row, column));
        debug!(%placement, "Placement accepted");
        self.history.push(placement);

        let snapshot = self.board.snapshot();
        if rules::has_winner(&snapshot) {
            info!(%token, winner = self.active_player().name(), "Round won");
            self.players[self.state.active_player_index].set_winner(true);
        } else if rules::has_draw(&snapshot) {
            info!("Round drawn");
            self.state.game_drawn = true;
        } else {
            self.state.active_player_index = 1 - self.state.active_player_index;
            debug!(next = %self.active_player().token(), "Turn passes");
        }
        self.state.game_viable = rules::is_viable(&snapshot);

        if cfg!(debug_assertions) {
            let checked = ControllerInvariants::check_all(self);
            debug_assert!(checked.is_ok(), "Invariant violation: {checked:?}");
        }

        self.result(None, Some(placement))
    }

    /// Clears the board and outcome and hands the first move back to X.
    ///
    /// Player names are kept.
    #[instrument(skip(self))]
    pub fn start_new_game(&mut self) {
        info!("Starting new game");
        self.board.reset();
        for player in &mut self.players {
            player.set_winner(false);
        }
        self.history.clear();
        self.state = RoundState::initial();
    }

    /// Renames both players.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NamesLocked`] once the current game has a move
    /// on the board and is still in play.
    #[instrument(skip_all)]
    pub fn set_player_names(
        &mut self,
        name_a: impl Into<String>,
        name_b: impl Into<String>,
    ) -> Result<(), MoveError> {
        if self.state.game_viable && !self.history.is_empty() {
            warn!("Refusing rename mid-round");
            return Err(MoveError::NamesLocked);
        }
        self.players[0].rename(name_a);
        self.players[1].rename(name_b);
        debug!(
            player_a = self.players[0].name(),
            player_b = self.players[1].name(),
            "Players renamed"
        );
        Ok(())
    }

    /// Player whose turn it is (the winner, once a game is won).
    pub fn active_player(&self) -> &Player {
        &self.players[self.state.active_player_index]
    }

    /// Both players, X first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Winner flags and draw flag.
    pub fn outcome(&self) -> Outcome {
        Outcome {
            player_a_won: self.players[0].is_winner(),
            player_b_won: self.players[1].is_winner(),
            drawn: self.state.game_drawn,
        }
    }

    /// Whether the most recent placement attempt was legal.
    pub fn last_placement_valid(&self) -> bool {
        self.state.last_placement_valid
    }

    /// Whether moves are currently accepted.
    pub fn is_viable(&self) -> bool {
        self.state.game_viable
    }

    /// Current phase of the round.
    pub fn phase(&self) -> RoundPhase {
        if self.state.game_viable {
            RoundPhase::AwaitingMove
        } else {
            RoundPhase::RoundOver
        }
    }

    /// Fresh copy of the board.
    pub fn board_snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    /// Accepted placements of the current game, oldest first.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    fn result(&self, rejection: Option<MoveError>, placed: Option<Placement>) -> RoundResult {
        let outcome = self.outcome();
        RoundResult {
            rejection,
            placed,
            active_player: self.active_player().token(),
            winner: outcome.winner(),
            drawn: outcome.drawn(),
            viable: self.state.game_viable,
        }
    }
}

impl Default for RoundController {
    fn default() -> Self {
        Self::new()
    }
}
