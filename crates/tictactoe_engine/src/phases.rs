//! Session phases, game modes and move outcomes.

use super::Mark;
use serde::{Deserialize, Serialize};

/// The mark the computer plays in [`GameMode::HumanVsComputer`].
pub const COMPUTER_MARK: Mark = Mark::O;

/// Who is playing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum GameMode {
    /// Two humans share the board.
    #[strum(to_string = "Two players")]
    HumanVsHuman,
    /// A human plays X against the random computer playing O.
    #[strum(to_string = "Versus computer")]
    HumanVsComputer,
}

impl GameMode {
    /// Returns true if the computer opponent plays in this mode.
    pub fn has_computer(self) -> bool {
        matches!(self, GameMode::HumanVsComputer)
    }
}

/// Where the engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No mode chosen yet; moves are rejected.
    AwaitingMode,
    /// A game is being played.
    InProgress,
    /// The game was won or drawn; waiting for a restart.
    Concluded,
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The moving mark completed a line.
    Win(Mark),
    /// The board filled up with no line completed.
    Draw,
    /// Play passes to the other mark.
    Continue,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            Outcome::Draw | Outcome::Continue => None,
        }
    }

    /// Returns true if this outcome ends the game.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(mark) => write!(f, "{} wins!", mark),
            Outcome::Draw => write!(f, "Draw!"),
            Outcome::Continue => write!(f, "Game continues"),
        }
    }
}
