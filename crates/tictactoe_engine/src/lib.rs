//! Tic-tac-toe game engine.
//!
//! A single [`GameEngine`] owns the board, turn, lifecycle phase, mode and
//! score. Presentation layers drive it with method calls and render from
//! the [`Placement`] and [`Snapshot`] values it returns.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameMode, Mark, Outcome};
//!
//! let mut engine = GameEngine::seeded(42);
//! engine.new_session(GameMode::HumanVsHuman);
//!
//! for index in [0, 3, 1, 4] {
//!     engine.click_cell(index).unwrap();
//! }
//! let placement = engine.click_cell(2).unwrap();
//! assert_eq!(placement.outcome, Outcome::Win(Mark::X));
//! assert_eq!(engine.score().get(Mark::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod opponent;
mod phases;
mod position;
mod rng;
mod score;
mod types;

pub mod rules;

pub use action::{Move, MoveError};
pub use engine::{GameEngine, Placement, Snapshot};
pub use opponent::{Opponent, RandomOpponent};
pub use phases::{COMPUTER_MARK, GameMode, Outcome, Phase};
pub use position::Position;
pub use rng::GameRng;
pub use score::Score;
pub use types::{Board, Mark, Square};
