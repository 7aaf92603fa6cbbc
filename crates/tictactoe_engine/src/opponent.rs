//! Computer opponent policy.

use super::rng::GameRng;
use super::{Board, Position};
use tracing::debug;

/// Picks a square for the computer to play.
pub trait Opponent {
    /// Chooses an empty position, or `None` if the board is full.
    fn choose(&mut self, board: &Board) -> Option<Position>;
}

/// Plays a uniformly random empty square. Deliberately weak.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: GameRng,
}

impl RandomOpponent {
    /// Creates an opponent drawing from `rng`.
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Creates an opponent with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Creates an opponent seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy())
    }

    /// The seed this opponent's RNG started from.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Opponent for RandomOpponent {
    fn choose(&mut self, board: &Board) -> Option<Position> {
        let empty = board.empty_positions();
        let choice = self.rng.choose(&empty).copied();
        debug!(candidates = empty.len(), ?choice, "Random opponent chose");
        choice
    }
}
