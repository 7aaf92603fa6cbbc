//! Property tests for engine invariants.

use proptest::prelude::*;
use tictactoe_engine::rules::check_winner;
use tictactoe_engine::{
    Board, GameEngine, GameMode, Mark, Outcome, Phase, Position, RandomOpponent,
};

fn full_board(cells: [bool; 9]) -> Board {
    let mut board = Board::new();
    for (pos, is_x) in Position::ALL.into_iter().zip(cells) {
        let mark = if is_x { Mark::X } else { Mark::O };
        board.place(pos, mark).expect("fresh board");
    }
    board
}

proptest! {
    #[test]
    fn rejected_clicks_never_change_state(clicks in prop::collection::vec(0usize..12, 0..40)) {
        let mut engine = GameEngine::seeded(0);
        engine.new_session(GameMode::HumanVsHuman);

        for index in clicks {
            let before = engine.snapshot();
            match engine.click_cell(index) {
                Ok(placement) => {
                    prop_assert_eq!(placement.mark, *before.current_player());
                    prop_assert_eq!(engine.history().len(), before.board().squares().len() - before.board().empty_positions().len() + 1);
                    match placement.outcome {
                        Outcome::Continue => {
                            prop_assert_eq!(engine.current_player(), placement.mark.opponent());
                        }
                        Outcome::Win(_) | Outcome::Draw => {
                            prop_assert_eq!(engine.phase(), Phase::Concluded);
                        }
                    }
                }
                Err(_) => prop_assert_eq!(engine.snapshot(), before),
            }

            let x = engine.board().count(Mark::X);
            let o = engine.board().count(Mark::O);
            prop_assert!(x == o || x == o + 1);
        }
    }

    #[test]
    fn computer_only_plays_empty_squares(seed in any::<u64>(), picks in prop::collection::vec(0usize..9, 1..9)) {
        let mut engine = GameEngine::new(RandomOpponent::seeded(seed));
        engine.new_session(GameMode::HumanVsComputer);

        for index in picks {
            if engine.click_cell(index).is_err() {
                continue;
            }
            if engine.awaiting_computer() {
                let before = engine.board().clone();
                let placement = engine.computer_move().expect("computer turn");
                prop_assert!(before.is_empty(placement.position));
                prop_assert_eq!(placement.mark, Mark::O);
            }
            prop_assert!(!engine.awaiting_computer());
        }
    }

    #[test]
    fn full_board_without_line_is_draw(cells in prop::array::uniform9(any::<bool>())) {
        let board = full_board(cells);
        let engine = GameEngine::with_position(
            RandomOpponent::seeded(0),
            GameMode::HumanVsHuman,
            board.clone(),
            Mark::X,
        );
        prop_assert!(engine.is_draw());
        if check_winner(&board).is_none() {
            prop_assert!(!engine.check_win(Mark::X));
            prop_assert!(!engine.check_win(Mark::O));
        }
    }
}
