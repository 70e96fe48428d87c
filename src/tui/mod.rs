//! Terminal UI for tic-tac-toe.
//!
//! A thin presentation layer: it renders snapshots and status from a
//! [`RoundController`] and turns key presses into `(row, column)` moves.

mod app;
mod input;
mod ui;

pub use app::{App, status_line};
pub use input::{InputAction, action_for, move_cursor};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::config::GameConfig;
use crate::games::tictactoe::RoundController;

/// Runs the TUI until the user quits.
#[instrument(skip_all, fields(player_a = %config.player_a(), player_b = %config.player_b()))]
pub fn run_tui(config: &GameConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut terminal = restore_on_error(setup_terminal(), || {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)
    })?;

    let controller = RoundController::with_names(config.player_a().as_str(), config.player_b().as_str());
    let res = run_app(&mut terminal, App::new(controller));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Runs `restore` when `result` is an error, keeping the original error.
fn restore_on_error<T>(result: Result<T>, restore: impl FnOnce() -> io::Result<()>) -> Result<T> {
    if let Err(err) = &result {
        error!(error = ?err, "Terminal setup failed, restoring");
        if let Err(restore_err) = restore() {
            error!(error = ?restore_err, "Failed to restore terminal");
        }
    }
    result
}

/// Draw, wait for a key, apply it; repeat until quit.
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    while app.is_running() {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match action_for(key.code) {
                Some(action) => app.handle(action),
                None => debug!(code = ?key.code, "Unbound key"),
            }
        }
    }
    Ok(())
}
