//! Sub-interval pricing.
//!
//! Each sub-interval of a night is billed in whole hours at its period's
//! rate. Flooring happens per sub-interval, so two 1.5 hour segments bill
//! two hours in total, not three.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BillingPeriod, ChargeLine, RateSchedule};

/// A sub-interval of a session together with the period it is billed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSegment {
    /// The billing period of this segment.
    pub period: BillingPeriod,
    /// The start of the segment.
    pub start_time: NaiveDateTime,
    /// The end of the segment.
    pub end_time: NaiveDateTime,
}

impl SessionSegment {
    /// Creates a new segment.
    pub fn new(period: BillingPeriod, start_time: NaiveDateTime, end_time: NaiveDateTime) -> Self {
        Self {
            period,
            start_time,
            end_time,
        }
    }
}

/// Returns `floor(end - start)` in hours.
///
/// Fractional hours are dropped towards negative infinity, so an inverted
/// interval yields a negative count: 01:00 to 00:00 is -1 and 00:15 to
/// 00:00 is also -1. Routing relies on this to cancel the overlap when a
/// segment ending at bedtime already runs past midnight.
///
/// # Example
///
/// ```
/// use nightly_charge::calculation::whole_hours;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDateTime::parse_from_str("2022-01-20 17:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2022-01-20 19:20:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(whole_hours(start, end), Decimal::ONE);
/// ```
pub fn whole_hours(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    let elapsed = end - start;
    // num_hours truncates towards zero
    let mut hours = elapsed.num_hours();
    if elapsed < Duration::hours(hours) {
        hours -= 1;
    }
    Decimal::from(hours)
}

/// Prices a segment at the schedule's rate for its period.
pub fn price_segment(segment: &SessionSegment, rates: &RateSchedule) -> ChargeLine {
    let hours = whole_hours(segment.start_time, segment.end_time);
    let rate = rates.rate_for(segment.period);

    ChargeLine {
        period: segment.period,
        start_time: segment.start_time,
        end_time: segment.end_time,
        hours,
        rate,
        amount: hours * rate,
    }
}
