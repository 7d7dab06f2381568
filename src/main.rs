//! Carbon Isle - terminal island survival game.
//!
//! Each day pick how the island makes power. Plants filter water for the
//! islanders but release carbon; too little water and people die of thirst,
//! too much carbon and the sea takes the island.

use carbon_isle::build_info::BUILD_VERSION;
use carbon_isle::core::{Game, IslandConfig, MAX_INITIAL_WATER};
use carbon_isle::error::Result;
use carbon_isle::logging::init_logging;
use carbon_isle::ui::{ChartMode, ConsoleFrontend, ConsoleOptions};
use clap::Parser;
use std::io;

/// Keep the islanders alive as long as you can.
#[derive(Parser, Debug)]
#[command(name = "carbon-isle", version = BUILD_VERSION)]
struct Args {
    /// Starting water supply in liters
    #[arg(long, value_parser = clap::value_parser!(i64).range(..=MAX_INITIAL_WATER))]
    water: Option<i64>,

    /// Starting population
    #[arg(long)]
    population: Option<u32>,

    /// Carbon emission limit in grams
    #[arg(long)]
    carbon_limit: Option<i64>,

    /// Print a text report instead of opening the charts
    #[arg(long)]
    no_charts: bool,

    /// Keep previous days on screen
    #[arg(long)]
    no_clear: bool,

    /// Disable coloured safety tags
    #[arg(long)]
    no_color: bool,
}

impl Args {
    fn island_config(&self) -> IslandConfig {
        let mut config = IslandConfig::default();
        if let Some(water) = self.water {
            config = config.with_water(water);
        }
        if let Some(population) = self.population {
            config = config.with_population(population);
        }
        if let Some(limit) = self.carbon_limit {
            config = config.with_carbon_limit(limit);
        }
        config
    }

    fn console_options(&self) -> ConsoleOptions {
        ConsoleOptions {
            clear_screen: !self.no_clear,
            color: !self.no_color,
            chart_mode: if self.no_charts {
                ChartMode::Text
            } else {
                ChartMode::Interactive
            },
        }
    }
}

fn main() -> Result<()> {
    init_logging("carbon_isle=warn");
    let args = Args::parse();

    let stdin = io::stdin();
    let mut frontend = ConsoleFrontend::new(stdin.lock(), io::stdout(), args.console_options());
    let mut game = Game::new(args.island_config());

    game.run(&mut frontend)?;
    Ok(())
}
