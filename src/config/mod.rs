//! Configuration loading for the Nightly Charge Engine.
//!
//! This module loads the rate card (name, currency, and the three hourly
//! rates) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use nightly_charge::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Loaded rate card: {}", config.config().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, RATES_FILE};
pub use types::RateConfig;
