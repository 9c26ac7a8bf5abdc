//! Charge breakdown model.
//!
//! This module contains [`ChargeBreakdown`], the complete itemised output of
//! one nightly charge calculation.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::SessionCase;

use super::{AuditStep, ChargeLine, Session};

/// The itemised result of a nightly charge calculation.
///
/// `total` is the sum of every line's `amount`, floored at zero. Lines may
/// carry negative hours when a segment is inverted (bedtime after midnight),
/// which cancels the hour an earlier segment already billed. The breakdown
/// holds no identifiers or clock readings, so identical inputs produce
/// identical breakdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeBreakdown {
    /// The session as supplied.
    pub session: Session,
    /// The start after clipping to the paid window.
    pub corrected_start: NaiveDateTime,
    /// The end after clipping to the paid window.
    pub corrected_end: NaiveDateTime,
    /// The midnight the session was split at.
    pub midnight: NaiveDateTime,
    /// The routing case, or `None` when the session was empty.
    pub case: Option<SessionCase>,
    /// One line per billed segment, in routing order.
    pub lines: Vec<ChargeLine>,
    /// The total amount charged.
    pub total: Decimal,
    /// The decisions taken to reach the total.
    pub audit_steps: Vec<AuditStep>,
}

impl ChargeBreakdown {
    /// Returns the sum of the line amounts before the zero floor is applied.
    pub fn line_sum(&self) -> Decimal {
        self.lines.iter().map(|line| line.amount).sum()
    }

    /// Returns true if a line was billed with negative hours.
    pub fn has_overlap_correction(&self) -> bool {
        self.lines.iter().any(|line| line.hours < Decimal::ZERO)
    }
}
