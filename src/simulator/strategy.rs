//! Automatic players for the headless simulator.

use crate::core::methods::{find_method, PowerMethod};
use crate::core::safety::MethodAssessment;
use crate::input::MethodChoice;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// How an automatic player picks the day's method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Always the same method
    Fixed(&'static PowerMethod),
    /// Uniformly random, from a seeded RNG
    Random,
    /// Lowest-emission method whose hints are both safe
    Cautious,
}

impl Strategy {
    /// Parse `random`, `cautious`, or a method name (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "random" => Some(Strategy::Random),
            "cautious" => Some(Strategy::Cautious),
            other => find_method(other).map(Strategy::Fixed),
        }
    }

    pub fn name(&self) -> String {
        match self {
            Strategy::Fixed(method) => format!("fixed:{}", method.name),
            Strategy::Random => "random".to_string(),
            Strategy::Cautious => "cautious".to_string(),
        }
    }
}

/// A strategy bound to its RNG.
pub struct StrategyPlayer {
    strategy: Strategy,
    rng: ChaCha8Rng,
}

impl StrategyPlayer {
    pub fn new(strategy: Strategy, seed: u64) -> Self {
        Self {
            strategy,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Pick from today's menu. Returns `None` only for an empty menu or a
    /// fixed method that is not on it.
    pub fn pick(&mut self, options: &[MethodAssessment]) -> Option<MethodChoice> {
        if options.is_empty() {
            return None;
        }

        let index = match self.strategy {
            Strategy::Fixed(method) => options.iter().position(|o| o.method == method)?,
            Strategy::Random => self.rng.gen_range(0..options.len()),
            Strategy::Cautious => cautious_pick(options),
        };

        MethodChoice::from_one_based(index as i64 + 1, options.len()).ok()
    }
}

/// Safe options first, by lowest emissions then highest yield. With no safe
/// option, the least severe hints win.
fn cautious_pick(options: &[MethodAssessment]) -> usize {
    options
        .iter()
        .enumerate()
        .min_by_key(|(_, o)| {
            (
                o.carbon_safety.max(o.water_safety),
                o.carbon_safety,
                o.emissions,
                std::cmp::Reverse(o.water_yield),
            )
        })
        .map(|(i, _)| i)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::IslandConfig;
    use crate::core::methods::POWER_METHODS;
    use crate::core::safety::assess_methods;
    use crate::core::state::SimulationState;

    fn options(water: i64, emissions: i64) -> Vec<MethodAssessment> {
        let state = SimulationState {
            water_supply: water,
            population: 100,
            carbon_emissions: emissions,
            days_survived: 0,
        };
        assess_methods(&state, &IslandConfig::default(), &POWER_METHODS)
    }

    #[test]
    fn test_parse_strategies() {
        assert_eq!(Strategy::parse("Random"), Some(Strategy::Random));
        assert_eq!(Strategy::parse("cautious"), Some(Strategy::Cautious));
        assert_eq!(
            Strategy::parse("hydro"),
            Some(Strategy::Fixed(find_method("Hydro").unwrap()))
        );
        assert_eq!(Strategy::parse("fusion"), None);
        assert_eq!(Strategy::parse("wind").unwrap().name(), "fixed:Wind");
    }

    #[test]
    fn test_fixed_always_same() {
        let mut player = StrategyPlayer::new(Strategy::parse("Solar").unwrap(), 1);
        for _ in 0..5 {
            assert_eq!(player.pick(&options(1000, 0)).unwrap().number(), 4);
        }
    }

    #[test]
    fn test_random_is_reproducible() {
        let opts = options(1000, 0);
        let mut a = StrategyPlayer::new(Strategy::Random, 7);
        let mut b = StrategyPlayer::new(Strategy::Random, 7);
        let picks_a: Vec<_> = (0..20).map(|_| a.pick(&opts).unwrap()).collect();
        let picks_b: Vec<_> = (0..20).map(|_| b.pick(&opts).unwrap()).collect();
        assert_eq!(picks_a, picks_b);
        assert!(picks_a.iter().all(|c| c.index() < opts.len()));
    }

    #[test]
    fn test_cautious_rests_when_water_is_plenty() {
        let mut player = StrategyPlayer::new(Strategy::Cautious, 0);
        let pick = player.pick(&options(1000, 0)).unwrap();
        assert_eq!(POWER_METHODS[pick.index()].name, "No Power Generation");
    }

    #[test]
    fn test_cautious_prefers_hydro_when_dry() {
        let mut player = StrategyPlayer::new(Strategy::Cautious, 0);
        let pick = player.pick(&options(0, 0)).unwrap();
        assert_eq!(POWER_METHODS[pick.index()].name, "Hydro");
    }

    #[test]
    fn test_cautious_avoids_carbon_over_limit() {
        let mut player = StrategyPlayer::new(Strategy::Cautious, 0);
        // Every plant crosses the limit; resting empties the reservoir but keeps the island afloat
        let pick = player.pick(&options(0, 9_999)).unwrap();
        assert_eq!(POWER_METHODS[pick.index()].name, "No Power Generation");
    }

    #[test]
    fn test_empty_menu() {
        let mut player = StrategyPlayer::new(Strategy::Random, 0);
        assert!(player.pick(&[]).is_none());
    }
}
