//! Application state and key handling.

use super::input::{digit_index, move_cursor};
use crate::config::TuiConfig;
use crate::sound::Cue;
use crate::theme::Theme;
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};
use tictactoe_engine::{
    COMPUTER_MARK, GameEngine, GameMode, Mark, Opponent, Outcome, Phase, Placement, Position,
    rules,
};
use tracing::{debug, info, warn};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
pub struct App<O: Opponent> {
    engine: GameEngine<O>,
    cursor: Position,
    status: String,
    theme: Theme,
    computer_delay: Duration,
    computer_due: Option<Instant>,
    winning_line: Option<[Position; 3]>,
    cues: Vec<Cue>,
}

impl<O: Opponent> App<O> {
    /// Creates the app on the mode selection screen.
    pub fn new(engine: GameEngine<O>, config: &TuiConfig) -> Self {
        Self {
            engine,
            cursor: Position::Center,
            status: String::new(),
            theme: *config.theme(),
            computer_delay: config.computer_delay(),
            computer_due: None,
            winning_line: None,
            cues: Vec::new(),
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine<O> {
        &self.engine
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Gets the active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Line to highlight after a win.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.winning_line
    }

    /// Returns true while a computer reply is scheduled.
    pub fn computer_pending(&self) -> bool {
        self.computer_due.is_some()
    }

    /// Drains the sound cues raised since the last call.
    pub fn take_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    /// Handles a key press at time `now`.
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Control::Quit;
            }
            KeyCode::Char('t') => {
                self.theme = self.theme.toggle();
                debug!(theme = %self.theme, "Theme toggled");
                return Control::Continue;
            }
            _ => {}
        }

        if self.engine.phase() == Phase::AwaitingMode {
            match key {
                KeyCode::Char('1') => self.select_mode(GameMode::HumanVsHuman),
                KeyCode::Char('2') => self.select_mode(GameMode::HumanVsComputer),
                _ => {}
            }
            return Control::Continue;
        }

        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor.to_index(), now),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('n') => self.change_mode(),
            other => {
                if let Some(index) = digit_index(other) {
                    self.place(index, now);
                } else {
                    self.cursor = move_cursor(self.cursor, other);
                }
            }
        }
        Control::Continue
    }

    /// Plays the scheduled computer reply once its delay has passed.
    pub fn tick(&mut self, now: Instant) {
        let Some(due) = self.computer_due else {
            return;
        };
        if now < due {
            return;
        }
        self.computer_due = None;
        match self.engine.computer_move() {
            Ok(placement) => self.show_placement(placement),
            Err(e) => warn!(error = %e, "Scheduled computer move failed"),
        }
    }

    fn select_mode(&mut self, mode: GameMode) {
        self.engine.new_session(mode);
        self.winning_line = None;
        self.cursor = Position::Center;
        self.status = self.turn_message();
    }

    fn place(&mut self, index: usize, now: Instant) {
        match self.engine.click_cell(index) {
            Ok(placement) => {
                self.cues.push(Cue::Click);
                self.show_placement(placement);
                if self.engine.awaiting_computer() {
                    debug!(delay = ?self.computer_delay, "Scheduling computer reply");
                    self.computer_due = Some(now + self.computer_delay);
                    self.status = "Computer is thinking...".to_string();
                }
            }
            Err(e) => debug!(index, error = %e, "Click ignored"),
        }
    }

    fn show_placement(&mut self, placement: Placement) {
        match placement.outcome {
            Outcome::Win(mark) => {
                self.cues.push(Cue::Win);
                self.winning_line = rules::winning_line(self.engine.board(), mark);
                self.status = format!("{} wins!", mark);
            }
            Outcome::Draw => {
                self.cues.push(Cue::Draw);
                self.status = "Draw!".to_string();
            }
            Outcome::Continue => self.status = self.turn_message(),
        }
    }

    fn restart(&mut self) {
        if let Err(e) = self.engine.reset() {
            warn!(error = %e, "Restart failed");
            return;
        }
        self.computer_due = None;
        self.winning_line = None;
        self.status = self.turn_message();
    }

    fn change_mode(&mut self) {
        self.engine.change_mode();
        self.computer_due = None;
        self.winning_line = None;
        self.status.clear();
    }

    fn turn_message(&self) -> String {
        let mark = self.engine.current_player();
        match self.engine.mode() {
            Some(GameMode::HumanVsComputer) if mark == COMPUTER_MARK => {
                "Computer is thinking...".to_string()
            }
            Some(GameMode::HumanVsComputer) => format!("Your turn ({})", Mark::X),
            _ => format!("Player {}'s turn", mark),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::RandomOpponent;

    fn app() -> App<RandomOpponent> {
        App::new(GameEngine::seeded(11), &TuiConfig::default())
    }

    fn press(app: &mut App<RandomOpponent>, keys: &[char], now: Instant) {
        for &c in keys {
            assert_eq!(app.handle_key(KeyCode::Char(c), now), Control::Continue);
        }
    }

    #[test]
    fn test_mode_selection_starts_session() {
        let mut app = app();
        let now = Instant::now();
        press(&mut app, &['5'], now);
        assert_eq!(app.engine().phase(), Phase::AwaitingMode);

        press(&mut app, &['1'], now);
        assert_eq!(app.engine().mode(), Some(GameMode::HumanVsHuman));
        assert_eq!(app.status(), "Player X's turn");
    }

    #[test]
    fn test_two_player_win_updates_status_and_cues() {
        let mut app = app();
        let now = Instant::now();
        press(&mut app, &['1', '1', '4', '2', '5', '3'], now);

        assert_eq!(app.status(), "X wins!");
        assert_eq!(app.engine().score().get(Mark::X), 1);
        assert_eq!(
            app.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        let cues = app.take_cues();
        assert_eq!(cues.iter().filter(|c| **c == Cue::Click).count(), 5);
        assert_eq!(cues.last(), Some(&Cue::Win));
        assert!(app.take_cues().is_empty());
    }

    #[test]
    fn test_cursor_and_enter_place_mark() {
        let mut app = app();
        let now = Instant::now();
        press(&mut app, &['1'], now);
        app.handle_key(KeyCode::Up, now);
        app.handle_key(KeyCode::Left, now);
        app.handle_key(KeyCode::Enter, now);
        assert_eq!(
            app.engine().board().get(Position::TopLeft),
            tictactoe_engine::Square::Occupied(Mark::X)
        );
    }

    #[test]
    fn test_computer_reply_waits_for_delay() {
        let mut app = app();
        let start = Instant::now();
        press(&mut app, &['2', '5'], start);
        assert!(app.computer_pending());
        assert_eq!(app.status(), "Computer is thinking...");

        // Clicks during the delay are rejected by the engine.
        press(&mut app, &['1'], start);
        assert_eq!(app.engine().history().len(), 1);

        app.tick(start + Duration::from_millis(100));
        assert_eq!(app.engine().history().len(), 1);

        app.tick(start + Duration::from_millis(500));
        assert!(!app.computer_pending());
        assert_eq!(app.engine().history().len(), 2);
        assert_eq!(app.engine().current_player(), Mark::X);
        assert_eq!(app.status(), "Your turn (X)");
    }

    #[test]
    fn test_restart_keeps_score_and_cancels_reply() {
        let mut app = app();
        let now = Instant::now();
        press(&mut app, &['1', '1', '4', '2', '5', '3', 'r'], now);
        assert_eq!(app.engine().score().get(Mark::X), 1);
        assert_eq!(app.engine().phase(), Phase::InProgress);
        assert_eq!(app.winning_line(), None);

        press(&mut app, &['n', '2', '5', 'r'], now);
        assert!(!app.computer_pending());
        assert_eq!(app.engine().score().get(Mark::X), 0);
        assert!(app.engine().history().is_empty());
    }

    #[test]
    fn test_new_game_returns_to_mode_selection() {
        let mut app = app();
        let now = Instant::now();
        press(&mut app, &['1', '5', 'n'], now);
        assert_eq!(app.engine().phase(), Phase::AwaitingMode);
        assert_eq!(app.status(), "");
    }

    #[test]
    fn test_theme_toggle_and_quit() {
        let mut app = app();
        let now = Instant::now();
        assert_eq!(app.theme(), Theme::Light);
        press(&mut app, &['t'], now);
        assert_eq!(app.theme(), Theme::Dark);
        assert_eq!(app.handle_key(KeyCode::Char('q'), now), Control::Quit);
    }
}
