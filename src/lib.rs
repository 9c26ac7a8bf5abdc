//! Nightly Charge Engine
//!
//! This crate calculates what a babysitter is owed for one night of work:
//! the session is clipped to the paid window (17:00 to 04:00), split at the
//! child's bedtime and at midnight, and each part is billed in whole hours at
//! its own hourly rate.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
