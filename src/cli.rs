//! Command-line interface for the tictactoe binary.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::fmt::Write;
use std::path::PathBuf;
use tictactoe_engine::{GameConfig, Position, RoundController, status_line};
use tracing::{info, instrument, warn};

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Name for the player holding X
    #[arg(long)]
    pub player_a: Option<String>,

    /// Name for the player holding O
    #[arg(long)]
    pub player_b: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Play a move list without the UI and print the final board
    Show {
        /// Moves as "row,column" pairs separated by ';', e.g. "0,0;1,1;0,1"
        moves: String,
    },
}

/// Parses `"r,c;r,c;..."` into positions.
///
/// Bounds are not checked here; the board reports off-board moves.
pub fn parse_moves(moves: &str) -> Result<Vec<Position>> {
    moves
        .split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let Some((row, column)) = pair.split_once(',') else {
                bail!("Expected \"row,column\", got {:?}", pair);
            };
            let row = row
                .trim()
                .parse()
                .with_context(|| format!("Bad row in {:?}", pair))?;
            let column = column
                .trim()
                .parse()
                .with_context(|| format!("Bad column in {:?}", pair))?;
            Ok(Position::new(row, column))
        })
        .collect()
}

/// Plays `moves` in order and renders the refusals, final board and status.
///
/// Refused moves are reported and skipped, the same as in the UI.
#[instrument(skip(config))]
pub fn replay(config: &GameConfig, moves: &str) -> Result<String> {
    let mut controller =
        RoundController::with_names(config.player_a().as_str(), config.player_b().as_str());
    let mut out = String::new();

    for position in parse_moves(moves)? {
        let result = controller.play_round(position.row(), position.column());
        if let Some(reason) = result.rejection() {
            warn!(%reason, row = position.row(), column = position.column(), "Move refused");
            writeln!(out, "({}, {}) refused: {}", position.row(), position.column(), reason)?;
        }
    }

    info!(moves = controller.history().len(), "Replay finished");
    writeln!(out, "{}", controller.board_snapshot())?;
    writeln!(out)?;
    writeln!(out, "{}", status_line(&controller))?;
    Ok(out)
}
