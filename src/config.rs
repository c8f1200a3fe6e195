//! Run configuration.
//!
//! Horizon length, search budget and random seed, loadable from TOML.
//!
//! ```
//! use u_roster::RosterConfig;
//!
//! let config = RosterConfig::from_toml_str(r#"
//!     days = 28
//!     max_iter = 2000
//! "#).unwrap();
//!
//! assert_eq!(config.days, 28);
//! assert_eq!(config.max_iter, 2000);
//! assert_eq!(config.seed, 5);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML or has unknown keys.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A parameter is out of range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Parameters of one rostering run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RosterConfig {
    /// Horizon length in days (16 weeks by default).
    pub days: usize,
    /// Local search iteration budget.
    pub max_iter: usize,
    /// Seed of the search RNG.
    pub seed: u64,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            days: 112,
            max_iter: 10_000,
            seed: 5,
        }
    }
}

impl RosterConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file is missing, is not valid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Sets the horizon length.
    pub fn with_days(mut self, days: usize) -> Self {
        self.days = days;
        self
    }

    /// Sets the search budget.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks that the configuration describes a runnable problem.
    ///
    /// A zero search budget is allowed and skips optimization.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.days == 0 {
            return Err(ConfigError::Invalid(
                "days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
