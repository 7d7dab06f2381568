//! Simulation configuration.

use super::strategy::Strategy;
use crate::core::config::IslandConfig;
use crate::core::constants::{SIM_DEFAULT_MAX_DAYS, SIM_DEFAULT_SEED};

/// Configuration for a batch of headless runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of runs; run `n` uses seed `seed + n`
    pub runs: u32,

    /// Seed of the first run
    pub seed: u64,

    /// Stop a run that is still alive after this many days
    pub max_days: u32,

    /// How methods are picked
    pub strategy: Strategy,

    /// Starting conditions shared by every run
    pub island: IslandConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            runs: 1,
            seed: SIM_DEFAULT_SEED,
            max_days: SIM_DEFAULT_MAX_DAYS,
            strategy: Strategy::Cautious,
            island: IslandConfig::default(),
        }
    }
}

impl SimConfig {
    /// Many seeded runs of the random strategy
    pub fn random_sweep(runs: u32) -> Self {
        Self {
            runs,
            strategy: Strategy::Random,
            ..Default::default()
        }
    }
}
