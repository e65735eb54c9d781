//! Simulate command - random self-play through the session API

use anyhow::{Result, ensure};
use clap::Parser;
use rand::{Rng, SeedableRng, random, rngs::StdRng, seq::IndexedRandom};
use serde::Serialize;
use tracing::debug;

use crate::{
    cli::{
        config::{CommonConfig, SimulationConfig},
        output,
    },
    session::GameSession,
    tictactoe::{GameStatus, Player, legal_moves},
};

#[derive(Parser, Debug)]
#[command(about = "Play random games and report outcome statistics")]
pub struct SimulateArgs {
    /// Number of games
    #[arg(long, short = 'g', default_value_t = 1000)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Chance (0 <= p < 1) of jumping to an earlier move before each turn
    #[arg(long, default_value_t = 0.0)]
    pub rewind_rate: f64,
}

impl From<&SimulateArgs> for SimulationConfig {
    fn from(args: &SimulateArgs) -> Self {
        Self {
            games: args.games,
            seed: args.seed,
            rewind_rate: args.rewind_rate,
        }
    }
}

/// Aggregated outcome counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimulationSummary {
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub moves: usize,
    pub rewinds: usize,
}

impl SimulationSummary {
    fn record(&mut self, status: GameStatus) {
        self.games += 1;
        match status {
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

/// Play `config.games` random games to completion
pub fn simulate(config: &SimulationConfig) -> Result<SimulationSummary> {
    ensure!(
        (0.0..1.0).contains(&config.rewind_rate),
        "rewind rate must be in [0, 1), got {}",
        config.rewind_rate
    );

    let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(random));
    let mut summary = SimulationSummary::default();

    for game in 0..config.games {
        let mut session = GameSession::new();

        while !session.status().is_terminal() {
            if session.cursor() > 0 && rng.random_bool(config.rewind_rate) {
                let target = rng.random_range(0..session.cursor());
                session.jump_to_move(target)?;
                summary.rewinds += 1;
            }

            let moves = legal_moves(session.current());
            let Some(&cell) = moves.choose(&mut rng) else {
                break;
            };
            session.select_cell(cell)?;
            summary.moves += 1;
        }

        debug!(game, status = ?session.status(), "simulated game finished");
        summary.record(session.status());
    }

    Ok(summary)
}

pub fn execute(args: SimulateArgs, common: &CommonConfig) -> Result<()> {
    let summary = simulate(&SimulationConfig::from(&args))?;

    if common.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    output::print_section("Simulation Results");
    output::print_kv("Games", &summary.games.to_string());
    output::print_kv(
        "X wins",
        &format!("{} ({})", summary.x_wins, output::percent(summary.x_wins, summary.games)),
    );
    output::print_kv(
        "O wins",
        &format!("{} ({})", summary.o_wins, output::percent(summary.o_wins, summary.games)),
    );
    output::print_kv(
        "Draws",
        &format!("{} ({})", summary.draws, output::percent(summary.draws, summary.games)),
    );
    output::print_kv("Moves played", &summary.moves.to_string());
    output::print_kv("Rewinds", &summary.rewinds.to_string());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_game_finishes() {
        let config = SimulationConfig {
            games: 200,
            seed: Some(7),
            rewind_rate: 0.0,
        };
        let summary = simulate(&config).unwrap();
        assert_eq!(summary.games, 200);
        assert_eq!(summary.x_wins + summary.o_wins + summary.draws, 200);
        assert_eq!(summary.rewinds, 0);
        // Every game needs between 5 and 9 moves
        assert!(summary.moves >= 5 * 200 && summary.moves <= 9 * 200);
    }

    #[test]
    fn same_seed_same_summary() {
        let config = SimulationConfig {
            games: 50,
            seed: Some(42),
            rewind_rate: 0.3,
        };
        assert_eq!(simulate(&config).unwrap(), simulate(&config).unwrap());
    }

    #[test]
    fn rewinds_still_terminate() {
        let config = SimulationConfig {
            games: 50,
            seed: Some(3),
            rewind_rate: 0.5,
        };
        let summary = simulate(&config).unwrap();
        assert_eq!(summary.x_wins + summary.o_wins + summary.draws, 50);
        assert!(summary.rewinds > 0);
    }

    #[test]
    fn rejects_certain_rewind() {
        let config = SimulationConfig {
            games: 1,
            seed: Some(1),
            rewind_rate: 1.0,
        };
        assert!(simulate(&config).is_err());
    }
}
