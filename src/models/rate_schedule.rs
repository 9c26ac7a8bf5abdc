//! Rate schedule and billing periods.
//!
//! A night is billed in up to three periods, each with its own hourly rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default hourly rate from the start of the session until bedtime (12.00).
pub const DEFAULT_START_TO_BEDTIME_RATE: Decimal = Decimal::from_parts(1200, 0, 0, false, 2);

/// Default hourly rate from bedtime until midnight (8.00).
pub const DEFAULT_BEDTIME_TO_MIDNIGHT_RATE: Decimal = Decimal::from_parts(800, 0, 0, false, 2);

/// Default hourly rate from midnight until the end of the session (16.00).
pub const DEFAULT_MIDNIGHT_TO_END_RATE: Decimal = Decimal::from_parts(1600, 0, 0, false, 2);

/// The billing period a sub-interval of the night falls into.
///
/// # Example
///
/// ```
/// use nightly_charge::models::BillingPeriod;
///
/// assert_eq!(BillingPeriod::BedtimeToMidnight.to_string(), "Bedtime to midnight");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingPeriod {
    /// From the (corrected) start until the child's bedtime.
    StartToBedtime,
    /// From bedtime until midnight.
    BedtimeToMidnight,
    /// From midnight until the (corrected) end.
    MidnightToEnd,
}

impl std::fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BillingPeriod::StartToBedtime => write!(f, "Start to bedtime"),
            BillingPeriod::BedtimeToMidnight => write!(f, "Bedtime to midnight"),
            BillingPeriod::MidnightToEnd => write!(f, "Midnight to end"),
        }
    }
}

/// Hourly rates for the three billing periods of a night.
///
/// Rates are expected to be non-negative; [`RateSchedule::validate`] checks
/// this for schedules coming from configuration or requests. Fields missing
/// when deserializing take their default values.
///
/// # Example
///
/// ```
/// use nightly_charge::models::{BillingPeriod, RateSchedule};
/// use rust_decimal::Decimal;
///
/// let rates = RateSchedule::default();
/// assert_eq!(rates.rate_for(BillingPeriod::StartToBedtime), Decimal::new(12, 0));
/// assert_eq!(rates.rate_for(BillingPeriod::BedtimeToMidnight), Decimal::new(8, 0));
/// assert_eq!(rates.rate_for(BillingPeriod::MidnightToEnd), Decimal::new(16, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateSchedule {
    /// Hourly rate from start until bedtime.
    pub start_to_bedtime: Decimal,
    /// Hourly rate from bedtime until midnight.
    pub bedtime_to_midnight: Decimal,
    /// Hourly rate from midnight until the end.
    pub midnight_to_end: Decimal,
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self {
            start_to_bedtime: DEFAULT_START_TO_BEDTIME_RATE,
            bedtime_to_midnight: DEFAULT_BEDTIME_TO_MIDNIGHT_RATE,
            midnight_to_end: DEFAULT_MIDNIGHT_TO_END_RATE,
        }
    }
}

impl RateSchedule {
    /// Creates a validated rate schedule.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRate`] if any rate is negative.
    pub fn new(
        start_to_bedtime: Decimal,
        bedtime_to_midnight: Decimal,
        midnight_to_end: Decimal,
    ) -> EngineResult<Self> {
        let rates = Self {
            start_to_bedtime,
            bedtime_to_midnight,
            midnight_to_end,
        };
        rates.validate()?;
        Ok(rates)
    }

    /// Returns the hourly rate for the given billing period.
    pub fn rate_for(&self, period: BillingPeriod) -> Decimal {
        match period {
            BillingPeriod::StartToBedtime => self.start_to_bedtime,
            BillingPeriod::BedtimeToMidnight => self.bedtime_to_midnight,
            BillingPeriod::MidnightToEnd => self.midnight_to_end,
        }
    }

    /// Checks that every rate is non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRate`] naming the first negative rate.
    pub fn validate(&self) -> EngineResult<()> {
        let fields = [
            ("start_to_bedtime", self.start_to_bedtime),
            ("bedtime_to_midnight", self.bedtime_to_midnight),
            ("midnight_to_end", self.midnight_to_end),
        ];

        match fields.iter().find(|(_, value)| *value < Decimal::ZERO) {
            Some((field, value)) => Err(EngineError::InvalidRate {
                field: field.to_string(),
                value: *value,
            }),
            None => Ok(()),
        }
    }
}
