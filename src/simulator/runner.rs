//! Headless runs of the day loop.

use super::config::SimConfig;
use super::report::{EndReason, RunResult, SimReport};
use super::strategy::StrategyPlayer;
use crate::core::game_loop::{Game, Phase};
use crate::error::{IslandError, Result};
use tracing::{debug, info};

/// Play one island to the end (or the day cap) with the configured strategy.
pub fn run_once(config: &SimConfig, seed: u64) -> Result<RunResult> {
    let mut game = Game::new(config.island.clone());
    let mut player = StrategyPlayer::new(config.strategy, seed);
    let mut submerged = false;
    let mut charts = 0u32;

    while game.phase() == Phase::Running && game.state().days_survived < config.max_days {
        let options = game.assessments();
        let choice = player
            .pick(&options)
            .ok_or_else(|| IslandError::NoMove(config.strategy.name()))?;
        let method = game.method_for(choice)?;

        let outcome = game.play_day(method);
        submerged = outcome.submerged;
        if outcome.report_due {
            charts += 1;
        }
        debug!(seed, day = game.state().days_survived, method = method.name, "sim day");
    }

    let ended_by = match game.phase() {
        Phase::Running => EndReason::MaxDays,
        Phase::GameOver if submerged => EndReason::Submerged,
        Phase::GameOver => EndReason::Drought,
    };
    if ended_by != EndReason::MaxDays {
        // The final chart at game over
        charts += 1;
    }

    let state = game.state();
    info!(seed, days = state.days_survived, ?ended_by, "run finished");

    Ok(RunResult {
        seed,
        days_survived: state.days_survived,
        final_emissions: state.carbon_emissions,
        final_water: state.water_supply,
        final_population: state.population,
        ended_by,
        charts,
        history: game.history().clone(),
    })
}

/// Run every configured seed and collect the results.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport> {
    let runs = (0..config.runs as u64)
        .map(|n| run_once(config, config.seed.wrapping_add(n)))
        .collect::<Result<Vec<_>>>()?;

    Ok(SimReport::new(config.strategy.name(), runs))
}
