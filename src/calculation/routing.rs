//! Session case routing.
//!
//! After clipping, a session is classified by three predicates and then
//! partitioned into at most three billed segments. The classification is a
//! flat decision table so every combination is visible in one place.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::BillingPeriod;

use super::segment::SessionSegment;

/// The shape of a night, deciding which billing periods apply.
///
/// # Example
///
/// ```
/// use nightly_charge::calculation::SessionCase;
///
/// assert_eq!(SessionCase::from_predicates(true, true, true), SessionCase::AfterMidnight);
/// assert_eq!(SessionCase::from_predicates(false, false, true), SessionCase::BeforeBedtime);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionCase {
    /// The session starts after midnight; everything is midnight-to-end.
    AfterMidnight,
    /// The child is still awake when the session ends; no bedtime segment.
    BedtimeAfterEnd,
    /// The session starts before bedtime; up to three segments.
    BeforeBedtime,
    /// The session starts at or after bedtime.
    AfterBedtime,
}

impl std::fmt::Display for SessionCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionCase::AfterMidnight => write!(f, "Start after midnight"),
            SessionCase::BedtimeAfterEnd => write!(f, "Bedtime after end"),
            SessionCase::BeforeBedtime => write!(f, "Start before bedtime"),
            SessionCase::AfterBedtime => write!(f, "Start after bedtime"),
        }
    }
}

impl SessionCase {
    /// Classifies a session from its routing predicates.
    ///
    /// Earlier predicates take precedence: a start after midnight wins over
    /// everything, and a bedtime after the end wins over the start/bedtime
    /// comparison.
    pub fn from_predicates(
        start_after_midnight: bool,
        bedtime_after_end: bool,
        start_before_bedtime: bool,
    ) -> Self {
        match (start_after_midnight, bedtime_after_end, start_before_bedtime) {
            (true, _, _) => SessionCase::AfterMidnight,
            (false, true, _) => SessionCase::BedtimeAfterEnd,
            (false, false, true) => SessionCase::BeforeBedtime,
            (false, false, false) => SessionCase::AfterBedtime,
        }
    }
}

/// The timestamps a session is routed and partitioned by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingInput {
    /// Start clipped to the paid window.
    pub corrected_start: NaiveDateTime,
    /// End clipped to the paid window.
    pub corrected_end: NaiveDateTime,
    /// End as supplied, before clipping.
    pub original_end: NaiveDateTime,
    /// Bedtime as supplied.
    pub bedtime: NaiveDateTime,
    /// The midnight closest to the original start.
    pub midnight: NaiveDateTime,
}

impl RoutingInput {
    /// Classifies the session.
    ///
    /// The bedtime test compares against the original end so that a child
    /// put to bed after the sitter nominally left never produces a
    /// bedtime-to-midnight segment, even when the end was clipped.
    pub fn case(&self) -> SessionCase {
        SessionCase::from_predicates(
            self.corrected_start > self.midnight,
            self.bedtime > self.original_end,
            self.corrected_start < self.bedtime,
        )
    }

    fn ends_before_midnight(&self) -> bool {
        self.corrected_end < self.midnight
    }

    /// Splits the session into ordered billed segments for the given case.
    ///
    /// When the corrected end falls before midnight, the segment that would
    /// otherwise run to midnight runs to the corrected end instead, and no
    /// midnight-to-end segment is produced.
    ///
    /// For [`SessionCase::BeforeBedtime`] with bedtime after midnight, the
    /// bedtime-to-midnight segment is inverted; pricing floors it negative.
    pub fn partition(&self, case: SessionCase) -> Vec<SessionSegment> {
        let start = self.corrected_start;

        match case {
            SessionCase::AfterMidnight => {
                vec![SessionSegment::new(
                    BillingPeriod::MidnightToEnd,
                    start,
                    self.corrected_end,
                )]
            }
            SessionCase::BedtimeAfterEnd => {
                self.split_at_midnight(BillingPeriod::StartToBedtime, start)
            }
            SessionCase::BeforeBedtime => {
                let mut segments = vec![SessionSegment::new(
                    BillingPeriod::StartToBedtime,
                    start,
                    self.bedtime,
                )];
                segments.extend(
                    self.split_at_midnight(BillingPeriod::BedtimeToMidnight, self.bedtime),
                );
                segments
            }
            SessionCase::AfterBedtime => {
                self.split_at_midnight(BillingPeriod::BedtimeToMidnight, start)
            }
        }
    }

    /// Bills `from` until midnight (or the end, if earlier) under
    /// `before_midnight`, and anything past midnight as midnight-to-end.
    fn split_at_midnight(
        &self,
        before_midnight: BillingPeriod,
        from: NaiveDateTime,
    ) -> Vec<SessionSegment> {
        if self.ends_before_midnight() {
            vec![SessionSegment::new(before_midnight, from, self.corrected_end)]
        } else {
            vec![
                SessionSegment::new(before_midnight, from, self.midnight),
                SessionSegment::new(BillingPeriod::MidnightToEnd, self.midnight, self.corrected_end),
            ]
        }
    }
}
