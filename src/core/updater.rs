//! Daily state update.
//!
//! Applies the chosen plant to the island: water is produced, carbon is
//! released, islanders drink, and the survival rules are enforced.

use super::config::IslandConfig;
use super::methods::PowerMethod;
use super::state::{HistoryLog, SimulationState};
use tracing::{debug, info};

/// What happened during one day. Front ends turn this into notices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayOutcome {
    /// Islanders lost to water shortage, if any
    pub population_loss: Option<u32>,
    /// Emissions crossed the limit and the island went under
    pub submerged: bool,
    /// A history chart is due at the end of this day
    pub report_due: bool,
}

/// Advance the island by one day using `method`.
///
/// The history receives exactly one snapshot per call.
pub fn advance_day(
    state: &mut SimulationState,
    history: &mut HistoryLog,
    config: &IslandConfig,
    method: &PowerMethod,
) -> DayOutcome {
    let mut outcome = DayOutcome::default();

    state.water_supply = state
        .water_supply
        .saturating_add(method.water_yield(config.water_per_efficiency));
    state.carbon_emissions = state.carbon_emissions.saturating_add(method.emissions);
    state.days_survived += 1;

    let mut required_water = config.water_required(state.population);

    if state.water_supply < required_water {
        // Whoever the remaining water can't cover dies; the survivors drink it all
        let sustainable =
            (state.water_supply.max(0) / config.water_per_person.max(1)).min(state.population as i64) as u32;
        let loss = state.population - sustainable;
        state.population -= loss;
        required_water = state.water_supply;
        outcome.population_loss = Some(loss);
        info!(day = state.days_survived, loss, "water shortage");
    }

    state.water_supply -= required_water;

    if state.carbon_emissions > config.carbon_limit {
        state.population = 0;
        outcome.submerged = true;
        info!(
            day = state.days_survived,
            emissions = state.carbon_emissions,
            "island submerged"
        );
    }

    history.record(state);
    outcome.report_due = config.report_due(state.days_survived);

    debug!(
        day = state.days_survived,
        method = method.name,
        water = state.water_supply,
        population = state.population,
        emissions = state.carbon_emissions,
        "day complete"
    );

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::methods::find_method;

    fn method(name: &str) -> &'static PowerMethod {
        find_method(name).unwrap()
    }

    #[test]
    fn test_hydro_from_default_start() {
        let config = IslandConfig::default();
        let mut state = SimulationState::new(&config);
        let mut history = HistoryLog::new();

        let outcome = advance_day(&mut state, &mut history, &config, method("Hydro"));

        assert_eq!(state.water_supply, 1700);
        assert_eq!(state.carbon_emissions, 4);
        assert_eq!(state.days_survived, 1);
        assert_eq!(state.population, 100);
        assert_eq!(outcome, DayOutcome::default());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_resting_on_empty_reservoir_kills_everyone() {
        let config = IslandConfig::drought();
        let mut state = SimulationState::new(&config);
        let mut history = HistoryLog::new();

        let outcome = advance_day(&mut state, &mut history, &config, method("No Power Generation"));

        assert_eq!(outcome.population_loss, Some(100));
        assert!(!outcome.submerged);
        assert_eq!(state.population, 0);
        assert_eq!(state.water_supply, 0);
        assert_eq!(state.carbon_emissions, -20);
        assert!(!state.is_alive());
    }

    #[test]
    fn test_partial_shortage_keeps_sustainable_population() {
        let config = IslandConfig::drought();
        let mut state = SimulationState::new(&config);
        let mut history = HistoryLog::new();

        // Solar yields 180 liters: 90 islanders can drink
        let outcome = advance_day(&mut state, &mut history, &config, method("Solar"));

        assert_eq!(outcome.population_loss, Some(10));
        assert_eq!(state.population, 90);
        assert_eq!(state.water_supply, 0);
    }

    #[test]
    fn test_survivors_round_down() {
        let config = IslandConfig::default();
        let mut state = SimulationState {
            water_supply: 1,
            population: 400,
            carbon_emissions: 0,
            days_survived: 0,
        };
        let mut history = HistoryLog::new();

        // 551 liters for 400 islanders who need 800: floor(551 / 2) = 275 survive
        let outcome = advance_day(&mut state, &mut history, &config, method("Natural Gas"));
        assert_eq!(outcome.population_loss, Some(125));
        assert_eq!(state.population, 275);
        assert_eq!(state.water_supply, 0);
    }

    #[test]
    fn test_exceeding_limit_submerges() {
        let config = IslandConfig::default();
        let mut state = SimulationState {
            water_supply: 1000,
            population: 100,
            carbon_emissions: 9_500,
            days_survived: 12,
        };
        let mut history = HistoryLog::new();

        let outcome = advance_day(&mut state, &mut history, &config, method("Coal"));

        assert!(outcome.submerged);
        assert_eq!(outcome.population_loss, None);
        assert_eq!(state.population, 0);
        assert_eq!(state.carbon_emissions, 10_320);
        // Water is still consumed before the island goes under
        assert_eq!(state.water_supply, 1000 + 330 - 200);
    }

    #[test]
    fn test_exactly_at_limit_survives() {
        let config = IslandConfig::default();
        let mut state = SimulationState {
            water_supply: 1000,
            population: 100,
            carbon_emissions: 9_180,
            days_survived: 0,
        };
        let mut history = HistoryLog::new();

        let outcome = advance_day(&mut state, &mut history, &config, method("Coal"));
        assert_eq!(state.carbon_emissions, 10_000);
        assert!(!outcome.submerged);
        assert_eq!(state.population, 100);
    }

    #[test]
    fn test_report_due_every_tenth_day() {
        let config = IslandConfig::default();
        let mut state = SimulationState::new(&config);
        let mut history = HistoryLog::new();

        let due: Vec<u32> = (0..25)
            .filter_map(|_| {
                advance_day(&mut state, &mut history, &config, method("Hydro"))
                    .report_due
                    .then_some(state.days_survived)
            })
            .collect();

        assert_eq!(due, vec![10, 20]);
    }

    #[test]
    fn test_history_tracks_average_emissions() {
        let config = IslandConfig::default();
        let mut state = SimulationState::new(&config);
        let mut history = HistoryLog::new();

        advance_day(&mut state, &mut history, &config, method("Coal"));
        advance_day(&mut state, &mut history, &config, method("No Power Generation"));

        let entries = history.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].emissions_per_day, 820.0);
        assert_eq!(entries[1].emissions_per_day, 400.0);
        assert_eq!(entries[1].day, 2);
    }

    #[test]
    fn test_overfull_reservoir_saturates() {
        let config = IslandConfig::default().with_water(i64::MAX - 100);
        let mut state = SimulationState::new(&config);
        let mut history = HistoryLog::new();

        let outcome = advance_day(&mut state, &mut history, &config, method("Hydro"));

        assert_eq!(outcome.population_loss, None);
        assert_eq!(state.water_supply, i64::MAX - 200);
        assert_eq!(state.population, 100);
    }
}
