//! Core data models for the Nightly Charge Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod charge_breakdown;
mod charge_line;
mod rate_schedule;
mod session;

pub use charge_breakdown::ChargeBreakdown;
pub use charge_line::{AuditStep, ChargeLine};
pub use rate_schedule::{
    BillingPeriod, DEFAULT_BEDTIME_TO_MIDNIGHT_RATE, DEFAULT_MIDNIGHT_TO_END_RATE,
    DEFAULT_START_TO_BEDTIME_RATE, RateSchedule,
};
pub use session::Session;
