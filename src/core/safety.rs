//! Safety hints shown next to each power method.

use super::config::IslandConfig;
use super::methods::PowerMethod;
use super::state::SimulationState;
/// How risky a choice is. Front ends decide how to render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Safe,
    /// Some islanders might die
    Warning,
    /// Everybody might die
    Critical,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Safe => "Safe",
            Severity::Warning => "Unsafe (Some people might die)",
            Severity::Critical => "Unsafe (All people might die)",
        }
    }
}

/// Projected effect of picking one method today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodAssessment {
    pub method: &'static PowerMethod,
    /// Liters the method would add
    pub water_yield: i64,
    /// Grams the method would add
    pub emissions: i64,
    pub water_safety: Severity,
    pub carbon_safety: Severity,
}

impl MethodAssessment {
    /// Both hints are green.
    pub fn is_safe(&self) -> bool {
        self.water_safety == Severity::Safe && self.carbon_safety == Severity::Safe
    }
}

/// Classify the reservoir after adding a method's yield.
pub fn water_safety(projected_water: i64, required_water: i64) -> Severity {
    if projected_water <= 0 {
        Severity::Critical
    } else if projected_water < required_water {
        Severity::Warning
    } else {
        Severity::Safe
    }
}

/// Classify cumulative emissions against the limit.
pub fn carbon_safety(projected_emissions: i64, limit: i64) -> Severity {
    if projected_emissions > limit {
        Severity::Critical
    } else {
        Severity::Safe
    }
}

/// Assess one method against the current state.
pub fn assess_method(
    state: &SimulationState,
    config: &IslandConfig,
    method: &'static PowerMethod,
) -> MethodAssessment {
    let water_yield = method.water_yield(config.water_per_efficiency);
    let projected_water = state.water_supply.saturating_add(water_yield);
    let required_water = config.water_required(state.population);

    MethodAssessment {
        method,
        water_yield,
        emissions: method.emissions,
        water_safety: water_safety(projected_water, required_water),
        carbon_safety: carbon_safety(
            state.carbon_emissions.saturating_add(method.emissions),
            config.carbon_limit,
        ),
    }
}

/// Assess every method in catalog order.
pub fn assess_methods(
    state: &SimulationState,
    config: &IslandConfig,
    catalog: &'static [PowerMethod],
) -> Vec<MethodAssessment> {
    catalog
        .iter()
        .map(|method| assess_method(state, config, method))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::methods::{find_method, POWER_METHODS};

    fn state(water: i64, population: u32, emissions: i64) -> SimulationState {
        SimulationState {
            water_supply: water,
            population,
            carbon_emissions: emissions,
            days_survived: 0,
        }
    }

    #[test]
    fn test_water_safety_thresholds() {
        assert_eq!(water_safety(0, 200), Severity::Critical);
        assert_eq!(water_safety(-5, 200), Severity::Critical);
        assert_eq!(water_safety(1, 200), Severity::Warning);
        assert_eq!(water_safety(199, 200), Severity::Warning);
        assert_eq!(water_safety(200, 200), Severity::Safe);
    }

    #[test]
    fn test_carbon_safety_is_strictly_above_limit() {
        assert_eq!(carbon_safety(10_000, 10_000), Severity::Safe);
        assert_eq!(carbon_safety(10_001, 10_000), Severity::Critical);
    }

    #[test]
    fn test_default_start_everything_safe() {
        let config = IslandConfig::default();
        let assessments = assess_methods(&state(1000, 100, 0), &config, &POWER_METHODS);
        assert_eq!(assessments.len(), POWER_METHODS.len());
        assert!(assessments.iter().all(|a| a.is_safe()));
        assert_eq!(assessments[5].water_yield, 900);
    }

    #[test]
    fn test_empty_reservoir_rest_is_critical() {
        let config = IslandConfig::default();
        let rest = find_method("No Power Generation").unwrap();
        let solar = find_method("Solar").unwrap();
        let s = state(0, 100, 0);

        assert_eq!(assess_method(&s, &config, rest).water_safety, Severity::Critical);
        // 180 liters for 100 people who need 200
        assert_eq!(assess_method(&s, &config, solar).water_safety, Severity::Warning);
    }

    #[test]
    fn test_near_limit_coal_is_critical() {
        let config = IslandConfig::default();
        let coal = find_method("Coal").unwrap();
        let rest = find_method("No Power Generation").unwrap();
        let s = state(1000, 100, 9_500);

        assert_eq!(assess_method(&s, &config, coal).carbon_safety, Severity::Critical);
        assert_eq!(assess_method(&s, &config, rest).carbon_safety, Severity::Safe);
    }

    #[test]
    fn test_severity_labels_and_order() {
        assert_eq!(Severity::Safe.label(), "Safe");
        assert!(Severity::Critical.label().contains("All"));
        assert!(Severity::Warning.label().contains("Some"));
        assert!(Severity::Safe < Severity::Warning && Severity::Warning < Severity::Critical);
    }

    #[test]
    fn test_huge_reservoir_does_not_overflow() {
        let config = IslandConfig::default();
        let s = state(i64::MAX, 100, 0);

        let assessments = assess_methods(&s, &config, &POWER_METHODS);
        assert_eq!(assessments.len(), POWER_METHODS.len());
        assert!(assessments.iter().all(|a| a.water_safety == Severity::Safe));
    }
}
