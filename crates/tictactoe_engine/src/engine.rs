//! The tic-tac-toe session state machine.
//!
//! ```text
//! AwaitingMode --new_session--> InProgress --Continue--> InProgress
//!                               InProgress --Win/Draw--> Concluded
//!                               Concluded  --reset-----> InProgress
//! InProgress | Concluded --change_mode--> AwaitingMode
//! ```

use super::action::{Move, MoveError};
use super::opponent::{Opponent, RandomOpponent};
use super::phases::{COMPUTER_MARK, GameMode, Outcome, Phase};
use super::rules;
use super::score::Score;
use super::{Board, Mark, Position};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// An accepted move and what it led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
    /// What the move did to the game.
    pub outcome: Outcome,
    /// Score after the move.
    pub score: Score,
}

/// Read-only view of the engine for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Snapshot {
    /// The board.
    board: Board,
    /// Mark to move next (or the mark that ended the game).
    current_player: Mark,
    /// Lifecycle phase.
    phase: Phase,
    /// Chosen mode, if any.
    mode: Option<GameMode>,
    /// Session score.
    score: Score,
}

/// Owns all game state and evaluates the rules.
///
/// Every operation either applies fully or is rejected with a [`MoveError`]
/// and leaves the engine exactly as it was.
#[derive(Debug, Clone)]
pub struct GameEngine<O = RandomOpponent> {
    board: Board,
    current_player: Mark,
    phase: Phase,
    mode: Option<GameMode>,
    score: Score,
    history: Vec<Move>,
    opponent: O,
}

impl GameEngine<RandomOpponent> {
    /// Creates an engine whose computer opponent uses a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomOpponent::seeded(seed))
    }

    /// Creates an engine whose computer opponent is seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(RandomOpponent::from_entropy())
    }
}

impl<O: Opponent> GameEngine<O> {
    /// Creates an engine waiting for a mode to be chosen.
    pub fn new(opponent: O) -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            phase: Phase::AwaitingMode,
            mode: None,
            score: Score::default(),
            history: Vec::new(),
            opponent,
        }
    }

    /// Creates an engine resumed from an arbitrary position.
    ///
    /// The phase is `Concluded` if the board already has a winner or is
    /// full, `InProgress` otherwise. Score and history start empty.
    pub fn with_position(opponent: O, mode: GameMode, board: Board, to_move: Mark) -> Self {
        debug!(
            x = board.count(Mark::X),
            o = board.count(Mark::O),
            %to_move,
            "Resuming from position"
        );
        let phase = if rules::check_winner(&board).is_some() || rules::is_full(&board) {
            Phase::Concluded
        } else {
            Phase::InProgress
        };
        Self {
            board,
            current_player: to_move,
            phase,
            mode: Some(mode),
            score: Score::default(),
            history: Vec::new(),
            opponent,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose turn it is.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.phase == Phase::InProgress
    }

    /// Returns the chosen mode.
    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    /// Returns the session score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns the moves of the current game.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Captures the state needed to render the game.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            current_player: self.current_player,
            phase: self.phase,
            mode: self.mode,
            score: self.score,
        }
    }

    /// Chooses a mode, zeroes the score and starts a fresh game.
    #[instrument(skip(self))]
    pub fn new_session(&mut self, mode: GameMode) {
        info!(%mode, "Starting new session");
        self.mode = Some(mode);
        self.score = Score::default();
        self.start_game();
    }

    /// Starts a fresh game in the current mode, keeping the score.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoSession`] if no mode has been chosen.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn reset(&mut self) -> Result<(), MoveError> {
        if self.mode.is_none() {
            debug!("Reset ignored, no mode chosen");
            return Err(MoveError::NoSession);
        }
        info!(score = %self.score, "Restarting game");
        self.start_game();
        Ok(())
    }

    /// Returns to mode selection, discarding the board and score.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn change_mode(&mut self) {
        info!("Returning to mode selection");
        self.mode = None;
        self.score = Score::default();
        self.board.clear();
        self.history.clear();
        self.current_player = Mark::X;
        self.phase = Phase::AwaitingMode;
    }

    /// Places `actor` at `index` and evaluates the result.
    ///
    /// # Errors
    ///
    /// Rejects the move without changing state if no game is active, the
    /// index is out of range, `actor` is not the current player, or the
    /// square is occupied.
    #[instrument(skip(self), fields(current = %self.current_player))]
    pub fn apply_move(&mut self, index: usize, actor: Mark) -> Result<Placement, MoveError> {
        let position = self
            .check_move(index, actor)
            .inspect_err(|e| debug!(error = %e, "Move rejected"))?;

        self.board.place(position, actor)?;
        let mv = Move::new(actor, position);
        self.history.push(mv);

        let outcome = if self.check_win(actor) {
            self.phase = Phase::Concluded;
            self.score.record_win(actor);
            Outcome::Win(actor)
        } else if self.is_draw() {
            self.phase = Phase::Concluded;
            Outcome::Draw
        } else {
            self.current_player = actor.opponent();
            Outcome::Continue
        };

        debug!(%mv, ?outcome, "Move applied");
        if outcome.is_terminal() {
            info!(%outcome, score = %self.score, "Game concluded");
        }

        Ok(Placement {
            mark: actor,
            position,
            outcome,
            score: self.score,
        })
    }

    /// Human input: plays the current player's mark at `index`.
    ///
    /// # Errors
    ///
    /// Same as [`apply_move`](Self::apply_move), and additionally rejects
    /// clicks while the computer is to move.
    #[instrument(skip(self))]
    pub fn click_cell(&mut self, index: usize) -> Result<Placement, MoveError> {
        if self.awaiting_computer() {
            debug!("Click ignored while computer is to move");
            return Err(MoveError::WrongPlayer {
                expected: COMPUTER_MARK,
                actual: COMPUTER_MARK.opponent(),
            });
        }
        self.apply_move(index, self.current_player)
    }

    /// Lets the computer opponent play its mark.
    ///
    /// # Errors
    ///
    /// Rejects without changing state unless the mode is human-vs-computer,
    /// the game is active, and it is the computer's turn.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Result<Placement, MoveError> {
        self.check_computer_turn()
            .inspect_err(|e| warn!(error = %e, "Computer move requested out of contract"))?;
        let position = self
            .opponent
            .choose(&self.board)
            .ok_or(MoveError::NoEmptySquares)?;
        self.apply_move(position.to_index(), COMPUTER_MARK)
    }

    /// Returns true iff every square of some winning line holds `mark`.
    pub fn check_win(&self, mark: Mark) -> bool {
        rules::check_win(&self.board, mark)
    }

    /// Returns true iff every square is occupied.
    ///
    /// Only meaningful once a win has been ruled out.
    pub fn is_draw(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// Returns true if the computer should play next.
    pub fn awaiting_computer(&self) -> bool {
        self.is_active()
            && self.current_player == COMPUTER_MARK
            && self.mode.is_some_and(GameMode::has_computer)
    }

    fn start_game(&mut self) {
        self.board.clear();
        self.history.clear();
        self.current_player = Mark::X;
        self.phase = Phase::InProgress;
    }

    fn check_move(&self, index: usize, actor: Mark) -> Result<Position, MoveError> {
        match self.phase {
            Phase::AwaitingMode => return Err(MoveError::NoSession),
            Phase::Concluded => return Err(MoveError::GameOver),
            Phase::InProgress => {}
        }
        let position = Position::try_from(index)?;
        if actor != self.current_player {
            return Err(MoveError::WrongPlayer {
                expected: self.current_player,
                actual: actor,
            });
        }
        if !self.board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }
        Ok(position)
    }

    fn check_computer_turn(&self) -> Result<(), MoveError> {
        let mode = self.mode.ok_or(MoveError::NoSession)?;
        if !mode.has_computer() {
            return Err(MoveError::ComputerDisabled);
        }
        if !self.is_active() {
            return Err(MoveError::GameOver);
        }
        if self.current_player != COMPUTER_MARK {
            return Err(MoveError::NotComputerTurn);
        }
        Ok(())
    }
}
