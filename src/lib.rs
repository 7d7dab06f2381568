//! Carbon Isle - terminal island survival game library.
//!
//! The rules, the day loop and the front ends are exposed for the binaries,
//! the headless simulator and tests.

pub mod build_info;
pub mod core;
pub mod error;
pub mod input;
pub mod logging;
pub mod simulator;
pub mod ui;

pub use crate::core::{Game, IslandConfig, PowerMethod, SimulationState, POWER_METHODS};
pub use error::{IslandError, Result};
