//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the rate
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::RateSchedule;

use super::types::RateConfig;

/// Name of the rate file inside a configuration directory.
pub const RATES_FILE: &str = "rates.yaml";

/// Loads and provides access to the rate configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── rates.yaml   # Rate card name, currency, and hourly rates
/// ```
///
/// # Example
///
/// ```no_run
/// use nightly_charge::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Bedtime rate: {}", loader.rates().bedtime_to_midnight);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: RateConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `rates.yaml` is missing
    /// - `rates.yaml` contains invalid YAML
    /// - any configured rate is negative
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nightly_charge::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config")?;
    /// # Ok::<(), nightly_charge::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let rates_path = path.as_ref().join(RATES_FILE);
        let config = Self::load_yaml::<RateConfig>(&rates_path)?;
        Self::from_config(config)
    }

    /// Creates a loader from an already-built configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRate`] if any rate is negative.
    pub fn from_config(config: RateConfig) -> EngineResult<Self> {
        config.rates.validate()?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying rate configuration.
    pub fn config(&self) -> &RateConfig {
        &self.config
    }

    /// Returns the validated rate schedule.
    pub fn rates(&self) -> &RateSchedule {
        &self.config.rates
    }

    /// Returns the currency code the rates are expressed in.
    pub fn currency(&self) -> &str {
        &self.config.currency
    }
}
