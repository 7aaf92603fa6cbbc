//! Move and rejection types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. An attempted move either
//! produces a [`Placement`](crate::Placement) or a [`MoveError`] explaining
//! why the engine left its state untouched.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// The position where the mark is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Reason a move was rejected. A rejected move never changes engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// No mode has been chosen yet.
    #[display("No game in progress, choose a mode first")]
    NoSession,

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a square.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The mark attempting to move is not the one whose turn it is.
    #[display("It's {}'s turn, not {}'s", expected, actual)]
    WrongPlayer {
        /// Mark whose turn it is.
        expected: Mark,
        /// Mark that attempted the move.
        actual: Mark,
    },

    /// The computer opponent only plays in human-vs-computer mode.
    #[display("Computer opponent is not enabled in this mode")]
    ComputerDisabled,

    /// The computer was asked to move on the human's turn.
    #[display("It is not the computer's turn")]
    NotComputerTurn,

    /// The opponent found nowhere to play.
    #[display("No empty squares remain")]
    NoEmptySquares,
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display_names_square() {
        let mv = Move::new(Mark::O, Position::BottomRight);
        assert_eq!(mv.to_string(), "O -> Bottom-right");
    }
}
