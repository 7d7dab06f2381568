//! Headless simulator.
//!
//! Plays islands with an automatic strategy instead of a player, using the
//! same `Game` and updater as the interactive game.

mod config;
mod report;
mod runner;
mod strategy;

pub use config::SimConfig;
pub use report::{EndReason, RunResult, SimReport};
pub use runner::{run_once, run_simulation};
pub use strategy::{Strategy, StrategyPlayer};
