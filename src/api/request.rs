//! Request types for the Nightly Charge Engine API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{RateSchedule, Session};

/// Request body for the `/calculate` endpoint.
///
/// Timestamps are ISO-8601 without offset, e.g. `2022-01-20T18:00:00`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// When the sitter started.
    pub start_time: NaiveDateTime,
    /// When the sitter left.
    pub end_time: NaiveDateTime,
    /// When the child went to bed.
    pub bedtime: NaiveDateTime,
    /// Optional per-request rate overrides.
    #[serde(default)]
    pub rates: Option<RateOverrides>,
}

/// Per-request overrides of the configured rates.
///
/// Any rate left out falls back to the configured schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateOverrides {
    /// Override for the start-to-bedtime rate.
    #[serde(default)]
    pub start_to_bedtime: Option<Decimal>,
    /// Override for the bedtime-to-midnight rate.
    #[serde(default)]
    pub bedtime_to_midnight: Option<Decimal>,
    /// Override for the midnight-to-end rate.
    #[serde(default)]
    pub midnight_to_end: Option<Decimal>,
}

impl RateOverrides {
    /// Applies the overrides on top of `base`, validating the result.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidRate`] if an override is negative.
    pub fn apply_to(&self, base: &RateSchedule) -> EngineResult<RateSchedule> {
        RateSchedule::new(
            self.start_to_bedtime.unwrap_or(base.start_to_bedtime),
            self.bedtime_to_midnight.unwrap_or(base.bedtime_to_midnight),
            self.midnight_to_end.unwrap_or(base.midnight_to_end),
        )
    }
}

impl CalculationRequest {
    /// Returns the session described by this request.
    pub fn session(&self) -> Session {
        Session::new(self.start_time, self.end_time, self.bedtime)
    }

    /// Resolves the rate schedule for this request against the configured one.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidRate`] if an override is negative.
    pub fn resolve_rates(&self, configured: &RateSchedule) -> EngineResult<RateSchedule> {
        match &self.rates {
            Some(overrides) => overrides.apply_to(configured),
            None => Ok(*configured),
        }
    }
}
