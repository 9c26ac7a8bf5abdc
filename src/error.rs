//! Error types for the Nightly Charge Engine.
//!
//! The charge calculation itself never fails; these errors come from the
//! layers around it (loading rate configuration, validating rate overrides).

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Nightly Charge Engine.
///
/// # Example
///
/// ```
/// use nightly_charge::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An hourly rate was negative.
    #[error("Invalid rate '{field}': {value} must not be negative")]
    InvalidRate {
        /// The rate field that was rejected.
        field: String,
        /// The rejected value.
        value: Decimal,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
