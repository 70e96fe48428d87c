//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::games::tictactoe::{BOARD_COLUMNS, Line, Position, Snapshot, Token, rules};

use super::app::App;

const HELP: &str = "Arrows move · Enter/1-9 place · n new game · q quit";

/// Renders the whole screen for `app`.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Players
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_players(frame, chunks[1], app);

    let snapshot = app.controller().board_snapshot();
    let winning = rules::winning_line(&snapshot).map(|(line, _)| line);
    draw_board(frame, chunks[2], &snapshot, app.cursor(), winning);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_players(frame: &mut Frame, area: Rect, app: &App) {
    let active = app.controller().active_player().token();
    let spans: Vec<Span> = app
        .controller()
        .players()
        .iter()
        .map(|player| {
            let style = token_style(player.token());
            let style = if player.token() == active && app.controller().is_viable() {
                style.add_modifier(Modifier::REVERSED)
            } else {
                style
            };
            Span::styled(format!("  {} ({})  ", player.name(), player.token()), style)
        })
        .collect();

    let players = Paragraph::new(TextLine::from(spans)).alignment(Alignment::Center);
    frame.render_widget(players, area);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    cursor: Position,
    winning: Option<Line>,
) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row_index, cells) in snapshot.rows().iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(rows[row_index * 2]);

        for (column_index, cell) in cells.iter().enumerate() {
            let on_line = winning.is_some_and(|line| line.contains(cell.position()));
            draw_cell(frame, cols[column_index * 2], cell.token(), cell.position() == cursor, on_line);
            if column_index + 1 < BOARD_COLUMNS {
                draw_separator_vertical(frame, cols[column_index * 2 + 1]);
            }
        }

        if row_index * 2 + 1 < rows.len() {
            draw_separator(frame, rows[row_index * 2 + 1]);
        }
    }
}

fn token_style(token: Token) -> Style {
    match token {
        Token::X => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Token::O => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, token: Option<Token>, selected: bool, on_line: bool) {
    let (symbol, base_style) = match token {
        None => ("   ".to_string(), Style::default().fg(Color::DarkGray)),
        Some(token) => (format!(" {} ", token), token_style(token)),
    };

    let style = if selected {
        base_style.bg(Color::White).fg(Color::Black)
    } else if on_line {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(TextLine::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─────────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::RoundController;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_renders_names_and_status() {
        let app = App::new(RoundController::with_names("Ada", "Grace"));
        let screen = render(&app);
        assert!(screen.contains("Tic Tac Toe"));
        assert!(screen.contains("Ada (X)"));
        assert!(screen.contains("Grace (O)"));
        assert!(screen.contains("Ada's turn (X)"));
    }

    #[test]
    fn test_renders_placed_tokens() {
        let mut controller = RoundController::new();
        controller.play_round(0, 0);
        controller.play_round(2, 2);
        let screen = render(&App::new(controller));
        assert!(screen.contains(" X "));
        assert!(screen.contains(" O "));
    }
}
