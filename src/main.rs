//! Tic-tac-toe - unified CLI
//!
//! Plays in the terminal UI, or replays a move list headless.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, replay};
use tictactoe_engine::{GameConfig, run_tui};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = GameConfig::load(cli.config.as_deref())?;
    if let Some(name) = cli.player_a {
        config = config.with_player_a(name);
    }
    if let Some(name) = cli.player_b {
        config = config.with_player_b(name);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_file_tracing(&config)?;
            run_tui(&config)
        }
        Command::Show { moves } => {
            init_stderr_tracing(&config)?;
            print!("{}", replay(&config, &moves)?);
            Ok(())
        }
    }
}

fn env_filter(config: &GameConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(config.log_filter())?),
    }
}

/// Logs to a file so the UI owns the terminal.
fn init_file_tracing(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_tracing(config: &GameConfig) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}
