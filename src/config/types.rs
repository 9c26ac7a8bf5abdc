//! Configuration types for nightly charge calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML rate file.

use serde::Deserialize;

use crate::models::RateSchedule;

fn default_currency() -> String {
    "USD".to_string()
}

/// The rate configuration loaded from `rates.yaml`.
///
/// ```yaml
/// name: Standard nightly rates
/// currency: USD
/// rates:
///   start_to_bedtime: "12.00"
///   bedtime_to_midnight: "8.00"
///   midnight_to_end: "16.00"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RateConfig {
    /// Human-readable name of this rate card.
    pub name: String,
    /// ISO 4217 currency code the rates are expressed in.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// The hourly rates. Omitted rates take their defaults.
    #[serde(default)]
    pub rates: RateSchedule,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            name: "Default nightly rates".to_string(),
            currency: default_currency(),
            rates: RateSchedule::default(),
        }
    }
}
