//! Line-oriented console front end.

use super::chart::{interactive_chart_available, show_history_chart};
use crate::core::config::IslandConfig;
use crate::core::game_loop::Frontend;
use crate::core::safety::{MethodAssessment, Severity};
use crate::core::state::{HistoryLog, SimulationState};
use crate::core::updater::DayOutcome;
use crate::error::Result;
use crate::input::{prompt_choice, MethodChoice};
use crossterm::cursor::MoveTo;
use crossterm::style::{StyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{BufRead, Write};

/// How the end-of-period history is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartMode {
    /// Full-screen ratatui charts, dismissed with a key press
    Interactive,
    /// One summary line in the console
    Text,
}

impl ChartMode {
    /// Interactive charts need a terminal; otherwise fall back to the text report.
    pub fn resolve(self, terminal: bool) -> ChartMode {
        match self {
            ChartMode::Interactive if terminal => ChartMode::Interactive,
            _ => ChartMode::Text,
        }
    }
}

/// Console presentation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleOptions {
    /// Clear the screen before each day's status
    pub clear_screen: bool,
    /// Use ANSI colours for safety tags
    pub color: bool,
    pub chart_mode: ChartMode,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            clear_screen: true,
            color: true,
            chart_mode: ChartMode::Interactive,
        }
    }
}

impl ConsoleOptions {
    /// Plain text only: no colours, no clearing, no full-screen charts.
    pub fn plain() -> Self {
        Self {
            clear_screen: false,
            color: false,
            chart_mode: ChartMode::Text,
        }
    }
}

/// Status report for the current day.
pub fn format_status(state: &SimulationState, config: &IslandConfig) -> String {
    format!(
        "Day: {}\n\
         Water Supply: {} liters\n\
         Population: {} (Need {} Water every day)\n\
         Carbon Emissions: {} grams\n\
         Carbon Emission Limit: {} grams\n",
        state.days_survived,
        state.water_supply,
        state.population,
        config.water_required(state.population),
        state.carbon_emissions,
        config.carbon_limit,
    )
}

/// Severity tag, coloured green/yellow/red when `color` is set.
pub fn severity_tag(severity: Severity, color: bool) -> String {
    if !color {
        return severity.label().to_string();
    }
    styled(severity).to_string()
}

fn styled(severity: Severity) -> StyledContent<&'static str> {
    match severity {
        Severity::Safe => severity.label().green(),
        Severity::Warning => severity.label().yellow(),
        Severity::Critical => severity.label().red(),
    }
}

/// One menu line for a method.
pub fn format_method_line(number: usize, assessment: &MethodAssessment, color: bool) -> String {
    format!(
        "{}. {} (Water Supply: {} liters, Carbon Emissions: {} grams) - Water Safety: {}, Carbon Safety: {}",
        number,
        assessment.method.name,
        assessment.water_yield,
        assessment.emissions,
        severity_tag(assessment.water_safety, color),
        severity_tag(assessment.carbon_safety, color),
    )
}

/// Text stand-in for the charts.
pub fn format_report(history: &HistoryLog) -> String {
    match history.last() {
        Some(last) => format!(
            "Report (day {}): {:.1} grams/day on average, {} liters of water, population {}",
            last.day, last.emissions_per_day, last.water_supply, last.population
        ),
        None => "Report: no days recorded".to_string(),
    }
}

/// Console front end reading choices from `reader` and writing to `writer`.
pub struct ConsoleFrontend<R, W> {
    reader: R,
    writer: W,
    options: ConsoleOptions,
}

impl<R: BufRead, W: Write> ConsoleFrontend<R, W> {
    pub fn new(reader: R, writer: W, options: ConsoleOptions) -> Self {
        Self {
            reader,
            writer,
            options,
        }
    }

    /// Give back the writer (used by tests to inspect output).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn clear(&mut self) -> Result<()> {
        self.writer
            .queue(Clear(ClearType::All))?
            .queue(MoveTo(0, 0))?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Frontend for ConsoleFrontend<R, W> {
    fn show_status(&mut self, state: &SimulationState, config: &IslandConfig) -> Result<()> {
        if self.options.clear_screen {
            self.clear()?;
        }
        writeln!(self.writer, "{}", format_status(state, config))?;
        Ok(())
    }

    fn choose_method(
        &mut self,
        options: &[MethodAssessment],
        report_tomorrow: bool,
    ) -> Result<MethodChoice> {
        writeln!(self.writer, "Choose a power generation method:")?;
        for (i, assessment) in options.iter().enumerate() {
            writeln!(
                self.writer,
                "{}",
                format_method_line(i + 1, assessment, self.options.color)
            )?;
        }

        if report_tomorrow {
            let notice = "The Report will be given tomorrow!";
            if self.options.color {
                writeln!(self.writer, "\n{}\n", notice.red())?;
            } else {
                writeln!(self.writer, "\n{}\n", notice)?;
            }
        }

        prompt_choice(&mut self.reader, &mut self.writer, options.len())
    }

    fn show_outcome(&mut self, _state: &SimulationState, outcome: &DayOutcome) -> Result<()> {
        if let Some(loss) = outcome.population_loss {
            writeln!(
                self.writer,
                "Due to water shortage, {} people have died.",
                loss
            )?;
        }
        if outcome.submerged {
            writeln!(
                self.writer,
                "The island has been submerged due to high carbon emissions. All people have died."
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn render_chart(&mut self, history: &HistoryLog) -> Result<()> {
        match self
            .options
            .chart_mode
            .resolve(interactive_chart_available())
        {
            ChartMode::Interactive => {
                self.writer.flush()?;
                show_history_chart(history)
            }
            ChartMode::Text => {
                writeln!(self.writer, "{}", format_report(history))?;
                Ok(())
            }
        }
    }

    fn game_over(&mut self, state: &SimulationState) -> Result<()> {
        writeln!(self.writer, "Game Over")?;
        writeln!(self.writer, "You survived for {} days.", state.days_survived)?;
        self.writer.flush()?;
        Ok(())
    }
}
