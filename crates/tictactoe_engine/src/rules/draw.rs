//! Draw detection logic for tic-tac-toe.

use crate::{Board, Square};

/// Checks if the board is full (all squares occupied).
///
/// A full board is a draw only once a win has been ruled out, since the
/// move that fills the last square can also complete a line.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::win::check_winner;
    use crate::{Mark, Position};

    fn fill(board: &mut Board, marks: [Mark; 9]) {
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            board.place(pos, mark).unwrap();
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(Position::Center, Mark::X).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board_without_line() {
        use Mark::{O, X};
        let mut board = Board::new();
        fill(&mut board, [X, O, X, X, O, O, O, X, X]);
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_full_board_can_still_be_a_win() {
        use Mark::{O, X};
        let mut board = Board::new();
        fill(&mut board, [X, X, X, O, O, X, X, O, O]);
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), Some(X));
    }
}
