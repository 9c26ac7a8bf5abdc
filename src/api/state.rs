//! Application state for the Nightly Charge Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::models::RateSchedule;

/// Shared application state.
///
/// Holds the loaded rate card, read-only after startup. Handlers take the
/// base rate schedule and currency from here.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rate configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the configured rate schedule that request overrides start from.
    pub fn rates(&self) -> &RateSchedule {
        self.config.rates()
    }

    /// Returns the currency code reported with every charge.
    pub fn currency(&self) -> &str {
        self.config.currency()
    }
}
