//! Simulation report generation.

use crate::core::state::HistoryLog;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// Everybody died of thirst
    Drought,
    /// Emissions crossed the limit
    Submerged,
    /// Still alive at the day cap
    MaxDays,
}

/// Outcome of a single run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub seed: u64,
    pub days_survived: u32,
    pub final_emissions: i64,
    pub final_water: i64,
    pub final_population: u32,
    pub ended_by: EndReason,
    /// Charts the interactive game would have shown
    pub charts: u32,
    pub history: HistoryLog,
}

/// Results of every run in a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimReport {
    pub strategy: String,
    pub runs: Vec<RunResult>,
}

impl SimReport {
    pub fn new(strategy: String, runs: Vec<RunResult>) -> Self {
        Self { strategy, runs }
    }

    /// Mean days survived across runs (0 when empty).
    pub fn avg_days(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        self.runs.iter().map(|r| r.days_survived as f64).sum::<f64>() / self.runs.len() as f64
    }

    pub fn count_ended_by(&self, reason: EndReason) -> usize {
        self.runs.iter().filter(|r| r.ended_by == reason).count()
    }

    /// Best run by days survived.
    pub fn longest(&self) -> Option<&RunResult> {
        self.runs.iter().max_by_key(|r| r.days_survived)
    }

    /// Human-readable summary, one line per run plus totals.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Strategy: {}", self.strategy);
        for run in &self.runs {
            let _ = writeln!(
                out,
                "  seed {:>6}: {:>5} days, {:>7} g CO2, {:>6} L water, ended by {:?}",
                run.seed, run.days_survived, run.final_emissions, run.final_water, run.ended_by
            );
        }
        let _ = writeln!(
            out,
            "Runs: {} | avg days {:.1} | drought {} | submerged {} | capped {}",
            self.runs.len(),
            self.avg_days(),
            self.count_ended_by(EndReason::Drought),
            self.count_ended_by(EndReason::Submerged),
            self.count_ended_by(EndReason::MaxDays),
        );
        out
    }
}
