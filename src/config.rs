//! # Configuration Module
//!
//! Handles loading and validating configuration from TOML files.
//!
//! Only host-side knobs live here; propellant capacities and engine-layout
//! geometry are compiled-in vehicle-class constants, not configuration.

use serde::de::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub mission: MissionConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Mission clock configuration
#[derive(Debug, Deserialize, Clone)]
pub struct MissionConfig {
    /// Seconds on the countdown clock at startup
    #[serde(default = "default_countdown_s")]
    pub countdown_s: i64,
}

/// Output stream configuration
#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// Interval between mission clock status lines in milliseconds
    #[serde(default = "default_clock_interval_ms")]
    pub clock_interval_ms: u64,

    /// Pretty-print emitted frames instead of one JSON line each
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

// Default value functions
fn default_countdown_s() -> i64 { 60 }
fn default_clock_interval_ms() -> u64 { 1000 }
fn default_pretty() -> bool { false }

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            countdown_s: default_countdown_s(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            clock_interval_ms: default_clock_interval_ms(),
            pretty: default_pretty(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// * `Result<Config>` - Loaded and validated configuration
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use starbase_bridge::config::Config;
    ///
    /// let config = Config::load("config/default.toml")?;
    /// # Ok::<(), starbase_bridge::error::StarbaseBridgeError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Returns
    ///
    /// * `Result<()>` - Ok if valid, Err if invalid
    ///
    /// # Errors
    ///
    /// Returns error if any configuration value is out of valid range
    fn validate(&self) -> Result<()> {
        if self.mission.countdown_s < 0 || self.mission.countdown_s > 86_400 {
            return Err(crate::error::StarbaseBridgeError::Config(
                toml::de::Error::custom("countdown_s must be between 0 and 86400"),
            ));
        }

        if self.output.clock_interval_ms == 0 || self.output.clock_interval_ms > 60_000 {
            return Err(crate::error::StarbaseBridgeError::Config(
                toml::de::Error::custom("clock_interval_ms must be between 1 and 60000"),
            ));
        }

        Ok(())
    }
}
