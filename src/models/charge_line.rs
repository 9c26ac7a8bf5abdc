//! Charge line and audit models.
//!
//! This module contains the [`ChargeLine`] type describing one priced
//! sub-interval of a night, and [`AuditStep`] recording each decision the
//! calculation took to produce the lines.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::BillingPeriod;

/// A single priced sub-interval of a babysitting session.
///
/// `hours` is the floored whole-hour count of the sub-interval, and `amount`
/// is `hours * rate`. Both are negative for an inverted sub-interval.
///
/// # Example
///
/// ```
/// use nightly_charge::models::{BillingPeriod, ChargeLine};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let line = ChargeLine {
///     period: BillingPeriod::StartToBedtime,
///     start_time: NaiveDateTime::parse_from_str("2022-01-20 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2022-01-20 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     hours: Decimal::new(4, 0),
///     rate: Decimal::new(12, 0),
///     amount: Decimal::new(48, 0),
/// };
/// assert_eq!(line.hours * line.rate, line.amount);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeLine {
    /// The billing period this line is charged under.
    pub period: BillingPeriod,
    /// The start of the sub-interval.
    pub start_time: NaiveDateTime,
    /// The end of the sub-interval.
    pub end_time: NaiveDateTime,
    /// Whole hours billed for the sub-interval.
    pub hours: Decimal,
    /// The hourly rate for the billing period.
    pub rate: Decimal,
    /// The amount for this line (hours * rate).
    pub amount: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}
