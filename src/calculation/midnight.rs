//! Midnight boundary selection.
//!
//! A night's "midnight" is the boundary after which the midnight-to-end rate
//! applies. Sessions may start on either side of it, so the boundary is
//! picked relative to the start of the session rather than assumed to be the
//! end of the start's calendar day.

use chrono::{Duration, NaiveDateTime, NaiveTime};

/// Hours past midnight before which a start is treated as "after midnight".
pub const MIDNIGHT_CUTOFF_HOURS: i64 = 12;

/// Returns midnight (00:00:00) at the start of the timestamp's calendar day.
pub fn start_of_day(datetime: NaiveDateTime) -> NaiveDateTime {
    datetime.date().and_time(NaiveTime::MIN)
}

/// Determines the midnight closest to the start of a session.
///
/// If the start is less than twelve hours past its own midnight (before
/// noon), that same midnight is used; otherwise the following one.
///
/// # Example
///
/// ```
/// use nightly_charge::calculation::closest_midnight;
/// use chrono::NaiveDateTime;
///
/// let evening = NaiveDateTime::parse_from_str("2022-01-20 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let next_midnight = NaiveDateTime::parse_from_str("2022-01-21 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(closest_midnight(evening), next_midnight);
///
/// let early_morning = NaiveDateTime::parse_from_str("2022-01-21 01:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(closest_midnight(early_morning), next_midnight);
/// ```
pub fn closest_midnight(start_time: NaiveDateTime) -> NaiveDateTime {
    let own_midnight = start_of_day(start_time);

    if start_time - own_midnight < Duration::hours(MIDNIGHT_CUTOFF_HOURS) {
        own_midnight
    } else {
        own_midnight + Duration::days(1)
    }
}
