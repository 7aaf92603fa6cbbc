//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use strum::IntoEnumIterator;
use tracing::instrument;

/// The 8 lines that win the game: 3 rows, 3 columns, 2 diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line held entirely by `mark`, if any.
pub fn winning_line(board: &Board, mark: Mark) -> Option<[Position; 3]> {
    WINNING_LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|&pos| board.get(pos) == Square::Occupied(mark)))
}

/// Checks whether `mark` holds all three squares of any winning line.
#[instrument(level = "trace", skip(board))]
pub fn check_win(board: &Board, mark: Mark) -> bool {
    winning_line(board, mark).is_some()
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark has three in a row, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    Mark::iter().find(|&mark| check_win(board, mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::X).unwrap();
        board.place(Position::TopCenter, Mark::X).unwrap();
        board.place(Position::TopRight, Mark::X).unwrap();
        assert_eq!(check_winner(&board), Some(Mark::X));
        assert_eq!(
            winning_line(&board, Mark::X),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.place(Position::TopRight, Mark::O).unwrap();
        board.place(Position::Center, Mark::O).unwrap();
        board.place(Position::BottomLeft, Mark::O).unwrap();
        assert!(check_win(&board, Mark::O));
        assert!(!check_win(&board, Mark::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::X).unwrap();
        board.place(Position::TopCenter, Mark::O).unwrap();
        board.place(Position::TopRight, Mark::X).unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
