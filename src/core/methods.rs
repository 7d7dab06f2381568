//! Power generation catalog.
//!
//! Each plant type filters a fixed amount of water per day (efficiency × 10 liters)
//! and releases a fixed amount of carbon. Letting the island rest absorbs carbon.

/// A power generation option the player can pick for the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerMethod {
    /// Display name, unique within the catalog
    pub name: &'static str,
    /// Water yield multiplier
    pub efficiency: u32,
    /// Carbon released per day in grams (negative = absorbed)
    pub emissions: i64,
}

impl PowerMethod {
    /// Liters of water this method produces in one day.
    pub fn water_yield(&self, water_per_efficiency: i64) -> i64 {
        self.efficiency as i64 * water_per_efficiency
    }
}

/// All methods, in menu order.
pub static POWER_METHODS: [PowerMethod; 7] = [
    PowerMethod {
        name: "Coal",
        efficiency: 33,
        emissions: 820,
    },
    PowerMethod {
        name: "Natural Gas",
        efficiency: 55,
        emissions: 490,
    },
    PowerMethod {
        name: "Nuclear",
        efficiency: 35,
        emissions: 15,
    },
    PowerMethod {
        name: "Solar",
        efficiency: 18,
        emissions: 35,
    },
    PowerMethod {
        name: "Wind",
        efficiency: 38,
        emissions: 11,
    },
    PowerMethod {
        name: "Hydro",
        efficiency: 90,
        emissions: 4,
    },
    // Plants absorb CO2
    PowerMethod {
        name: "No Power Generation",
        efficiency: 0,
        emissions: -20,
    },
];

/// Find a method by name (case-insensitive).
pub fn find_method(name: &str) -> Option<&'static PowerMethod> {
    POWER_METHODS
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(name.trim()))
}
