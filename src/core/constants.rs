// Starting conditions
pub const INITIAL_WATER_SUPPLY: i64 = 1000; // liters
pub const INITIAL_POPULATION: u32 = 100;
pub const INITIAL_CARBON_EMISSIONS: i64 = 0; // grams

// Survival rules
pub const MIN_DAILY_WATER_PER_PERSON: i64 = 2; // liters
pub const CARBON_EMISSION_LIMIT: i64 = 10_000; // grams

// Liters of filtered water produced per point of plant efficiency
pub const WATER_PER_EFFICIENCY: i64 = 10;

// A history chart is shown every N days
pub const REPORT_INTERVAL_DAYS: u32 = 10;

// Largest --water accepted on the command line
pub const MAX_INITIAL_WATER: i64 = 1_000_000_000; // liters

// Simulator
pub const SIM_DEFAULT_MAX_DAYS: u32 = 10_000;
pub const SIM_DEFAULT_SEED: u64 = 42;
