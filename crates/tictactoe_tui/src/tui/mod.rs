//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod ui;

use crate::config::TuiConfig;
use crate::sound::Bell;
use anyhow::Result;
use app::{App, Control};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};
use tictactoe_engine::{GameEngine, RandomOpponent};
use tracing::{error, info, instrument};

/// How long to wait for input before checking the computer's timer.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run(config: TuiConfig) -> Result<()> {
    let opponent = match config.seed() {
        Some(seed) => RandomOpponent::seeded(*seed),
        None => RandomOpponent::from_entropy(),
    };
    info!(seed = opponent.seed(), theme = %config.theme(), "Starting tic-tac-toe TUI");

    let mut app = App::new(GameEngine::new(opponent), &config);
    let mut bell = Bell::new(io::stdout(), *config.sound());

    let mut terminal = setup_terminal()?;

    let res = run_loop(&mut terminal, &mut app, &mut bell);

    restore_terminal(terminal.backend_mut())?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Enters raw mode and the alternate screen, undoing both if setup fails.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)))
        .map_err(|e| {
            if let Err(restore_err) = restore_terminal(&mut io::stdout()) {
                error!(error = %restore_err, "Failed to restore terminal");
            }
            e.into()
        })
}

fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen)
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<RandomOpponent>,
    bell: &mut Bell<Stdout>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;
        for cue in app.take_cues() {
            bell.play(cue);
        }

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code, Instant::now()) == Control::Quit
        {
            return Ok(());
        }

        app.tick(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_leaves_alternate_screen() {
        let mut out = Vec::new();
        restore_terminal(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[?1049l");
    }
}
