//! Calculation logic for the Nightly Charge Engine.
//!
//! This module contains the functions that turn a session and a rate
//! schedule into a charge: closest-midnight selection, clipping to the paid
//! window, case routing, and whole-hour segment pricing.

mod midnight;
mod nightly_charge;
mod paid_window;
mod routing;
mod segment;

pub use midnight::{MIDNIGHT_CUTOFF_HOURS, closest_midnight, start_of_day};
pub use nightly_charge::{calculate_nightly_charge, calculate_nightly_charge_breakdown};
pub use paid_window::{
    PAID_WINDOW_END_HOUR, PAID_WINDOW_START_HOUR, correct_end_time, correct_start_time,
};
pub use routing::{RoutingInput, SessionCase};
pub use segment::{SessionSegment, price_segment, whole_hours};
