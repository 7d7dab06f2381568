//! The day loop shared by the interactive game and the headless simulator.
//!
//! `Game` owns the island. A `Frontend` shows it and supplies the player's
//! choices, so the same loop runs against a terminal, a strategy or a test
//! double.

use super::config::IslandConfig;
use super::methods::{PowerMethod, POWER_METHODS};
use super::safety::{assess_methods, MethodAssessment};
use super::state::{HistoryLog, SimulationState};
use super::updater::{advance_day, DayOutcome};
use crate::error::Result;
use crate::input::{ChoiceError, MethodChoice};
use tracing::info;

/// Where the game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// Presentation and input for the day loop.
pub trait Frontend {
    /// Show the day's status report.
    fn show_status(&mut self, state: &SimulationState, config: &IslandConfig) -> Result<()>;

    /// List the options and return the player's pick.
    ///
    /// `report_tomorrow` is set the day before a chart is due.
    fn choose_method(
        &mut self,
        options: &[MethodAssessment],
        report_tomorrow: bool,
    ) -> Result<MethodChoice>;

    /// Announce casualties or submersion after a day.
    fn show_outcome(&mut self, state: &SimulationState, outcome: &DayOutcome) -> Result<()>;

    /// Chart the recorded history.
    fn render_chart(&mut self, history: &HistoryLog) -> Result<()>;

    /// Final message once everybody is gone.
    fn game_over(&mut self, state: &SimulationState) -> Result<()>;
}

/// One island, from day 0 until its population reaches zero.
#[derive(Debug, Clone)]
pub struct Game {
    config: IslandConfig,
    state: SimulationState,
    history: HistoryLog,
    catalog: &'static [PowerMethod],
}

impl Game {
    pub fn new(config: IslandConfig) -> Self {
        Self::with_catalog(config, &POWER_METHODS)
    }

    pub fn with_catalog(config: IslandConfig, catalog: &'static [PowerMethod]) -> Self {
        let state = SimulationState::new(&config);
        Self {
            config,
            state,
            history: HistoryLog::new(),
            catalog,
        }
    }

    pub fn config(&self) -> &IslandConfig {
        &self.config
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn catalog(&self) -> &'static [PowerMethod] {
        self.catalog
    }

    pub fn phase(&self) -> Phase {
        if self.state.is_alive() {
            Phase::Running
        } else {
            Phase::GameOver
        }
    }

    /// Today's menu with safety hints, in catalog order.
    pub fn assessments(&self) -> Vec<MethodAssessment> {
        assess_methods(&self.state, &self.config, self.catalog)
    }

    /// Resolve a validated menu choice to its method.
    pub fn method_for(&self, choice: MethodChoice) -> std::result::Result<&'static PowerMethod, ChoiceError> {
        let catalog = self.catalog;
        catalog.get(choice.index()).ok_or(ChoiceError::OutOfRange {
            value: choice.number() as i64,
            count: catalog.len(),
        })
    }

    /// Play one day with the chosen method.
    pub fn play_day(&mut self, method: &PowerMethod) -> DayOutcome {
        advance_day(&mut self.state, &mut self.history, &self.config, method)
    }

    /// Run the loop until game over. Returns the number of days survived.
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> Result<u32> {
        info!(
            water = self.state.water_supply,
            population = self.state.population,
            "game started"
        );

        while self.phase() == Phase::Running {
            frontend.show_status(&self.state, &self.config)?;

            let options = self.assessments();
            let report_tomorrow = self.config.report_due_tomorrow(self.state.days_survived);
            let choice = frontend.choose_method(&options, report_tomorrow)?;
            let method = self.method_for(choice)?;

            let outcome = self.play_day(method);
            frontend.show_outcome(&self.state, &outcome)?;

            if outcome.report_due {
                frontend.render_chart(&self.history)?;
            }
        }

        info!(days = self.state.days_survived, "game over");
        frontend.game_over(&self.state)?;
        frontend.render_chart(&self.history)?;

        Ok(self.state.days_survived)
    }
}
