//! Headless random-vs-random games.

use tictactoe_engine::{GameEngine, GameMode, Mark, MoveError, Opponent, RandomOpponent};
use tracing::{info, instrument};

/// Tally of a batch of simulated games.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimulationReport {
    /// Games played.
    pub games: u32,
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} draws",
            self.games, self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays `games` games in human-vs-computer mode with a random stand-in for the human.
///
/// The engine's computer plays O from `seed`; X draws from a second stream.
#[instrument]
pub fn simulate(games: u32, seed: u64) -> Result<SimulationReport, MoveError> {
    let mut engine = GameEngine::new(RandomOpponent::seeded(seed));
    let mut stand_in = RandomOpponent::seeded(seed.wrapping_add(1));
    engine.new_session(GameMode::HumanVsComputer);

    let mut report = SimulationReport {
        games,
        ..SimulationReport::default()
    };

    for _ in 0..games {
        loop {
            let placement = if engine.awaiting_computer() {
                engine.computer_move()?
            } else {
                let pos = stand_in
                    .choose(engine.board())
                    .ok_or(MoveError::NoEmptySquares)?;
                engine.click_cell(pos.to_index())?
            };
            if !placement.outcome.is_terminal() {
                continue;
            }
            match placement.outcome.winner() {
                Some(Mark::X) => report.x_wins += 1,
                Some(Mark::O) => report.o_wins += 1,
                None => report.draws += 1,
            }
            break;
        }
        engine.reset()?;
    }

    info!(%report, score = %engine.score(), "Simulation finished");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_accounts_for_every_game() {
        let report = simulate(200, 42).unwrap();
        assert_eq!(report.games, 200);
        assert_eq!(report.x_wins + report.o_wins + report.draws, 200);
    }

    #[test]
    fn test_same_seed_same_report() {
        assert_eq!(simulate(50, 7).unwrap(), simulate(50, 7).unwrap());
    }

    #[test]
    fn test_first_mover_advantage_shows_up() {
        let report = simulate(500, 1).unwrap();
        assert!(report.x_wins > report.o_wins);
    }

    #[test]
    fn test_zero_games() {
        assert_eq!(simulate(0, 3).unwrap(), SimulationReport::default());
    }
}
