//! Carbon Isle Headless Simulator
//!
//! Plays islands with an automatic strategy, no terminal UI, and prints a
//! summary (or JSON) of how long each island lasted.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]

use carbon_isle::build_info::BUILD_VERSION;
use carbon_isle::core::{IslandConfig, MAX_INITIAL_WATER, SIM_DEFAULT_MAX_DAYS, SIM_DEFAULT_SEED};
use carbon_isle::error::Result;
use carbon_isle::logging::init_logging;
use carbon_isle::simulator::{run_simulation, SimConfig, Strategy};
use clap::Parser;

/// Run automatic players against the island and report the results
#[derive(Parser, Debug)]
#[command(name = "simulator", version = BUILD_VERSION)]
struct Args {
    /// Strategy: "random", "cautious", or a power method name (e.g. "hydro")
    #[arg(long, default_value = "cautious")]
    strategy: String,

    /// Number of runs with incrementing seeds
    #[arg(long, default_value_t = 1)]
    runs: u32,

    /// RNG seed of the first run
    #[arg(long, default_value_t = SIM_DEFAULT_SEED)]
    seed: u64,

    /// Stop runs still alive after this many days
    #[arg(long, default_value_t = SIM_DEFAULT_MAX_DAYS)]
    max_days: u32,

    /// Starting water supply in liters
    #[arg(long, value_parser = clap::value_parser!(i64).range(..=MAX_INITIAL_WATER))]
    water: Option<i64>,

    /// Starting population
    #[arg(long)]
    population: Option<u32>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,

    /// Per-day event logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(if args.verbose {
        "carbon_isle=debug"
    } else {
        "carbon_isle=info"
    });

    if let Err(e) = run(&args) {
        eprintln!("Simulation failed: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let Some(strategy) = Strategy::parse(&args.strategy) else {
        eprintln!("Unknown strategy: {}", args.strategy);
        eprintln!("Use 'random', 'cautious', or a power method name.");
        std::process::exit(1);
    };

    let mut island = IslandConfig::default();
    if let Some(water) = args.water {
        island = island.with_water(water);
    }
    if let Some(population) = args.population {
        island = island.with_population(population);
    }

    let config = SimConfig {
        runs: args.runs,
        seed: args.seed,
        max_days: args.max_days,
        strategy,
        island,
    };

    let report = run_simulation(&config)?;

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "text" => print!("{}", report.summary()),
        other => {
            eprintln!("Unknown format: {other}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_flag_is_bounded() {
        assert!(Args::try_parse_from(["simulator", "--water", "1000000000"]).is_ok());
        assert!(Args::try_parse_from(["simulator", "--water", "1000000001"]).is_err());
    }
}
