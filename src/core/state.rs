//! Island state and recorded history.

use super::config::IslandConfig;
use serde::{Deserialize, Serialize};

/// Everything that changes from day to day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationState {
    /// Liters in the reservoir
    pub water_supply: i64,
    pub population: u32,
    /// Cumulative carbon released, in grams
    pub carbon_emissions: i64,
    pub days_survived: u32,
}

impl SimulationState {
    /// Fresh island seeded from the config's starting conditions.
    pub fn new(config: &IslandConfig) -> Self {
        Self {
            water_supply: config.initial_water,
            population: config.initial_population,
            carbon_emissions: super::constants::INITIAL_CARBON_EMISSIONS,
            days_survived: 0,
        }
    }

    /// Running until everybody is gone.
    pub fn is_alive(&self) -> bool {
        self.population > 0
    }
}

/// One day's snapshot, recorded for the charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DaySnapshot {
    pub day: u32,
    /// Average grams released per day so far
    pub emissions_per_day: f64,
    pub water_supply: i64,
    pub population: u32,
}

/// Append-only record of every simulated day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<DaySnapshot>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state at the end of a day. Day 0 is never recorded.
    pub fn record(&mut self, state: &SimulationState) {
        let emissions_per_day = if state.days_survived > 0 {
            state.carbon_emissions as f64 / state.days_survived as f64
        } else {
            state.carbon_emissions as f64
        };
        self.entries.push(DaySnapshot {
            day: state.days_survived,
            emissions_per_day,
            water_supply: state.water_supply,
            population: state.population,
        });
    }

    pub fn entries(&self) -> &[DaySnapshot] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&DaySnapshot> {
        self.entries.last()
    }

    /// (day, emissions per day) points
    pub fn emissions_series(&self) -> Vec<(f64, f64)> {
        self.entries
            .iter()
            .map(|e| (e.day as f64, e.emissions_per_day))
            .collect()
    }

    /// (day, liters) points
    pub fn water_series(&self) -> Vec<(f64, f64)> {
        self.entries
            .iter()
            .map(|e| (e.day as f64, e.water_supply as f64))
            .collect()
    }

    /// (day, population) points
    pub fn population_series(&self) -> Vec<(f64, f64)> {
        self.entries
            .iter()
            .map(|e| (e.day as f64, e.population as f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_uses_config() {
        let state = SimulationState::new(&IslandConfig::default());
        assert_eq!(state.water_supply, 1000);
        assert_eq!(state.population, 100);
        assert_eq!(state.carbon_emissions, 0);
        assert_eq!(state.days_survived, 0);
        assert!(state.is_alive());
    }

    #[test]
    fn test_record_computes_average_emissions() {
        let mut history = HistoryLog::new();
        let state = SimulationState {
            water_supply: 40,
            population: 3,
            carbon_emissions: 90,
            days_survived: 4,
        };
        history.record(&state);

        let entry = history.last().unwrap();
        assert_eq!(entry.day, 4);
        assert!((entry.emissions_per_day - 22.5).abs() < f64::EPSILON);
        assert_eq!(entry.water_supply, 40);
        assert_eq!(entry.population, 3);
    }

    #[test]
    fn test_series_share_day_axis() {
        let mut history = HistoryLog::new();
        for day in 1..=3 {
            history.record(&SimulationState {
                water_supply: day as i64 * 100,
                population: 10,
                carbon_emissions: -20 * day as i64,
                days_survived: day,
            });
        }

        let days: Vec<f64> = history.water_series().iter().map(|p| p.0).collect();
        assert_eq!(days, vec![1.0, 2.0, 3.0]);
        assert_eq!(history.emissions_series()[2].1, -20.0);
        assert_eq!(history.population_series()[0].1, 10.0);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_empty_history() {
        let history = HistoryLog::new();
        assert!(history.is_empty());
        assert!(history.last().is_none());
        assert!(history.water_series().is_empty());
    }
}
