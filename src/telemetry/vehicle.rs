//! # Vehicle Classes
//!
//! Compiled-in configuration for the two tracked vehicle classes.
//!
//! The dashboard tracks exactly two objects per launch, a booster and a
//! ship, distinguished by the first character of their simulator object
//! name. Propellant capacities and engine counts are fixed properties of
//! the vehicle class, not runtime configuration.

use serde::Serialize;

/// Booster maximum oxidizer (LOX) load in kilograms.
pub const BOOSTER_MAX_OXIDIZER_KG: f64 = 2_660_000.0;

/// Booster maximum fuel (CH4) load in kilograms.
pub const BOOSTER_MAX_FUEL_KG: f64 = 740_000.0;

/// Ship maximum oxidizer (LOX) load in kilograms.
pub const SHIP_MAX_OXIDIZER_KG: f64 = 1_174_000.0;

/// Ship maximum fuel (CH4) load in kilograms.
pub const SHIP_MAX_FUEL_KG: f64 = 327_000.0;

/// Number of booster engines.
pub const BOOSTER_ENGINE_COUNT: u32 = 33;

/// Number of ship engines.
pub const SHIP_ENGINE_COUNT: u32 = 6;

/// The two tracked vehicle classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleClass {
    Booster,
    Ship,
}

impl VehicleClass {
    /// Classify a simulator object name by its first character
    ///
    /// 'B' names boosters, 'S' names ships; any other prefix (or an empty
    /// name) is not tracked.
    ///
    /// # Examples
    ///
    /// ```
    /// use starbase_bridge::telemetry::vehicle::VehicleClass;
    ///
    /// assert_eq!(VehicleClass::from_object_name("B13"), Some(VehicleClass::Booster));
    /// assert_eq!(VehicleClass::from_object_name("S28"), Some(VehicleClass::Ship));
    /// assert_eq!(VehicleClass::from_object_name("Pad"), None);
    /// ```
    pub fn from_object_name(name: &str) -> Option<Self> {
        match name.chars().next() {
            Some('B') => Some(Self::Booster),
            Some('S') => Some(Self::Ship),
            _ => None,
        }
    }

    /// Maximum oxidizer capacity in kilograms
    pub fn max_oxidizer_kg(self) -> f64 {
        match self {
            Self::Booster => BOOSTER_MAX_OXIDIZER_KG,
            Self::Ship => SHIP_MAX_OXIDIZER_KG,
        }
    }

    /// Maximum fuel capacity in kilograms
    pub fn max_fuel_kg(self) -> f64 {
        match self {
            Self::Booster => BOOSTER_MAX_FUEL_KG,
            Self::Ship => SHIP_MAX_FUEL_KG,
        }
    }

    /// Number of engines in this class's layout
    pub fn engine_count(self) -> u32 {
        match self {
            Self::Booster => BOOSTER_ENGINE_COUNT,
            Self::Ship => SHIP_ENGINE_COUNT,
        }
    }
}
