//! Island state, rules and the day loop.

pub mod config;
pub mod constants;
pub mod game_loop;
pub mod methods;
pub mod safety;
pub mod state;
pub mod updater;

pub use config::IslandConfig;
pub use constants::*;
pub use game_loop::{Frontend, Game, Phase};
pub use methods::{find_method, PowerMethod, POWER_METHODS};
pub use safety::{MethodAssessment, Severity};
pub use state::{DaySnapshot, HistoryLog, SimulationState};
pub use updater::{advance_day, DayOutcome};
