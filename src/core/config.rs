//! Island configuration.

use super::constants::*;

/// Tunable starting conditions and survival rules for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IslandConfig {
    /// Water in the reservoir on day 0 (liters)
    pub initial_water: i64,

    /// Islanders alive on day 0
    pub initial_population: u32,

    /// Liters each islander drinks per day
    pub water_per_person: i64,

    /// Cumulative emissions above which the island is submerged (grams)
    pub carbon_limit: i64,

    /// Liters of water produced per efficiency point of a plant
    pub water_per_efficiency: i64,

    /// Days between history charts
    pub report_interval: u32,
}

impl Default for IslandConfig {
    fn default() -> Self {
        Self {
            initial_water: INITIAL_WATER_SUPPLY,
            initial_population: INITIAL_POPULATION,
            water_per_person: MIN_DAILY_WATER_PER_PERSON,
            carbon_limit: CARBON_EMISSION_LIMIT,
            water_per_efficiency: WATER_PER_EFFICIENCY,
            report_interval: REPORT_INTERVAL_DAYS,
        }
    }
}

impl IslandConfig {
    /// A dry start: empty reservoir, default population
    pub fn drought() -> Self {
        Self {
            initial_water: 0,
            ..Default::default()
        }
    }

    /// Builder-style override of the starting water
    pub fn with_water(mut self, liters: i64) -> Self {
        self.initial_water = liters;
        self
    }

    /// Builder-style override of the starting population
    pub fn with_population(mut self, population: u32) -> Self {
        self.initial_population = population;
        self
    }

    /// Builder-style override of the carbon limit
    pub fn with_carbon_limit(mut self, grams: i64) -> Self {
        self.carbon_limit = grams;
        self
    }

    /// Daily water requirement for a given population.
    pub fn water_required(&self, population: u32) -> i64 {
        population as i64 * self.water_per_person
    }

    /// True when the day after `days_survived` will produce a chart.
    pub fn report_due_tomorrow(&self, days_survived: u32) -> bool {
        self.report_interval > 0 && days_survived % self.report_interval == self.report_interval - 1
    }

    /// True when `days_survived` lands on a chart day.
    pub fn report_due(&self, days_survived: u32) -> bool {
        self.report_interval > 0 && days_survived > 0 && days_survived % self.report_interval == 0
    }
}
