//! Paid window clipping.
//!
//! Work is only paid between 17:00 and 04:00 the next morning. Start and end
//! times falling in the unpaid daytime gap are snapped to the nearest window
//! edge on the same calendar day.

use chrono::{Duration, NaiveDateTime, Timelike};

use super::midnight::start_of_day;

/// Hour of day at which paid work begins (5:00 PM).
pub const PAID_WINDOW_START_HOUR: u32 = 17;

/// Hour of day at which paid work ends (4:00 AM).
pub const PAID_WINDOW_END_HOUR: u32 = 4;

/// Returns the timestamp's calendar day at `hour`:00:00.
fn at_hour(datetime: NaiveDateTime, hour: u32) -> NaiveDateTime {
    start_of_day(datetime) + Duration::hours(i64::from(hour))
}

/// Moves a start time that falls in `[04:00, 17:00)` forward to 17:00 of the
/// same day. Any other start time is returned unchanged.
///
/// # Example
///
/// ```
/// use nightly_charge::calculation::correct_start_time;
/// use chrono::NaiveDateTime;
///
/// let afternoon = NaiveDateTime::parse_from_str("2022-01-20 14:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let five_pm = NaiveDateTime::parse_from_str("2022-01-20 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(correct_start_time(afternoon), five_pm);
/// ```
pub fn correct_start_time(start_time: NaiveDateTime) -> NaiveDateTime {
    if (PAID_WINDOW_END_HOUR..PAID_WINDOW_START_HOUR).contains(&start_time.hour()) {
        at_hour(start_time, PAID_WINDOW_START_HOUR)
    } else {
        start_time
    }
}

/// Moves an end time whose hour is in `(4, 17]` back to 04:00 of the same
/// day. Any other end time is returned unchanged.
///
/// The hour comparison ignores minutes, so 04:45 is kept as is while 17:30
/// is snapped back.
///
/// # Example
///
/// ```
/// use nightly_charge::calculation::correct_end_time;
/// use chrono::NaiveDateTime;
///
/// let morning = NaiveDateTime::parse_from_str("2022-01-21 05:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let four_am = NaiveDateTime::parse_from_str("2022-01-21 04:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(correct_end_time(morning), four_am);
/// ```
pub fn correct_end_time(end_time: NaiveDateTime) -> NaiveDateTime {
    if end_time.hour() > PAID_WINDOW_END_HOUR && end_time.hour() <= PAID_WINDOW_START_HOUR {
        at_hour(end_time, PAID_WINDOW_END_HOUR)
    } else {
        end_time
    }
}
