//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use crate::theme::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Mark, Opponent, Phase, Position, Square};

/// Draws the whole screen for the current app state.
pub fn draw<O: Opponent>(frame: &mut Frame, app: &App<O>) {
    let palette = app.theme().palette();
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board or mode menu
            Constraint::Length(3), // Status
            Constraint::Length(1), // Score
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let help = if app.engine().phase() == Phase::AwaitingMode {
        draw_mode_menu(frame, chunks[1], &palette);
        "1: Two players | 2: Versus computer | T: Theme | Q: Quit"
    } else {
        draw_board(frame, chunks[1], app, &palette);
        "Arrows/1-9: Move | Enter: Place | R: Restart | N: New game | T: Theme | Q: Quit"
    };

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(palette.text))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let score = Paragraph::new(app.engine().score().to_string())
        .style(Style::default().fg(palette.accent))
        .alignment(Alignment::Center);
    frame.render_widget(score, chunks[3]);

    let help = Paragraph::new(help)
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_mode_menu(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled(
            "Choose a mode",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("[1]  Two players"),
        Line::from("[2]  Versus computer"),
    ];
    let menu = Paragraph::new(lines)
        .style(Style::default().fg(palette.text))
        .alignment(Alignment::Center);
    frame.render_widget(menu, center_rect(area, 30, 4));
}

fn draw_board<O: Opponent>(frame: &mut Frame, area: Rect, app: &App<O>, palette: &Palette) {
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

    for (row, cells) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], app, palette, cells);
        if row < 2 {
            let sep = Paragraph::new("────────────┼────────────┼────────────")
                .style(Style::default().fg(palette.muted));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row<O: Opponent>(
    frame: &mut Frame,
    area: Rect,
    app: &App<O>,
    palette: &Palette,
    positions: &[Position],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, &pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[col * 2], app, palette, pos);
        if col < 2 {
            let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(palette.muted));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell<O: Opponent>(
    frame: &mut Frame,
    area: Rect,
    app: &App<O>,
    palette: &Palette,
    pos: Position,
) {
    let (symbol, mut style) = match app.engine().board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(palette.muted),
        ),
        Square::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(palette.x).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(palette.o).add_modifier(Modifier::BOLD),
        ),
    };

    if app.winning_line().is_some_and(|line| line.contains(&pos)) {
        style = style.bg(palette.highlight);
    } else if pos == app.cursor() && app.engine().is_active() && !app.computer_pending() {
        style = style.bg(palette.cursor);
    }

    let cell = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(cell, area);
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
    use crate::config::TuiConfig;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Instant;
    use tictactoe_engine::GameEngine;

    fn rendered(app: &App<tictactoe_engine::RandomOpponent>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_mode_menu_rendered_before_selection() {
        let app = App::new(GameEngine::seeded(1), &TuiConfig::default());
        let screen = rendered(&app);
        assert!(screen.contains("Choose a mode"));
        assert!(screen.contains("Player X: 0 | Player O: 0"));
    }

    #[test]
    fn test_board_and_status_rendered_after_moves() {
        let mut app = App::new(GameEngine::seeded(1), &TuiConfig::default());
        let now = Instant::now();
        for c in ['1', '1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(c), now);
        }
        let screen = rendered(&app);
        assert!(screen.contains("X wins!"));
        assert!(screen.contains("Player X: 1 | Player O: 0"));
    }
}
