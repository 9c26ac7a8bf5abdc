//! Session model.
//!
//! A [`Session`] is one babysitting night: when the sitter arrived, when they
//! left, and when the child went to bed.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single babysitting session.
///
/// All three timestamps are calendar date + time of day. Bedtime may fall
/// anywhere, including before the session starts or after it ends.
///
/// # Example
///
/// ```
/// use nightly_charge::models::Session;
/// use chrono::NaiveDateTime;
///
/// let session = Session {
///     start_time: NaiveDateTime::parse_from_str("2022-01-20 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2022-01-21 02:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     bedtime: NaiveDateTime::parse_from_str("2022-01-20 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
/// assert!(!session.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// When the sitter started.
    pub start_time: NaiveDateTime,
    /// When the sitter left.
    pub end_time: NaiveDateTime,
    /// When the child went to bed.
    pub bedtime: NaiveDateTime,
}

impl Session {
    /// Creates a session from its three timestamps.
    pub fn new(start_time: NaiveDateTime, end_time: NaiveDateTime, bedtime: NaiveDateTime) -> Self {
        Self {
            start_time,
            end_time,
            bedtime,
        }
    }

    /// Returns true when the session ends at or before it starts.
    ///
    /// Such a session is never charged.
    pub fn is_empty(&self) -> bool {
        self.end_time <= self.start_time
    }
}
