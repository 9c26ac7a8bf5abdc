//! Nightly charge calculation.
//!
//! This module ties the pieces together: it clips a session to the paid
//! window, picks the relevant midnight, routes the session to one of the
//! [`SessionCase`]s, and prices each resulting segment in whole hours.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{AuditStep, ChargeBreakdown, RateSchedule, Session};

use super::midnight::closest_midnight;
use super::paid_window::{correct_end_time, correct_start_time};
use super::routing::{RoutingInput, SessionCase};
use super::segment::price_segment;

/// Calculates the amount owed for one babysitting session.
///
/// Returns zero when `end_time` is at or before `start_time`. Otherwise the
/// session is clipped to the 17:00 to 04:00 paid window, split at bedtime and
/// midnight, and each segment is billed in whole hours (floored, so an
/// inverted segment counts negative) at its period's rate. The total never
/// goes below zero.
///
/// Use [`RateSchedule::default`] for the standard 12 / 8 / 16 rates.
///
/// # Example
///
/// ```
/// use nightly_charge::calculation::calculate_nightly_charge;
/// use nightly_charge::models::RateSchedule;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let parse = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let charge = calculate_nightly_charge(
///     parse("2022-01-20 18:00:00"),
///     parse("2022-01-21 02:00:00"),
///     parse("2022-01-20 22:00:00"),
///     &RateSchedule::default(),
/// );
/// // 4h x 12 + 2h x 8 + 2h x 16
/// assert_eq!(charge, Decimal::new(96, 0));
/// ```
pub fn calculate_nightly_charge(
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    bedtime: NaiveDateTime,
    rates: &RateSchedule,
) -> Decimal {
    calculate_nightly_charge_breakdown(&Session::new(start_time, end_time, bedtime), rates).total
}

/// Calculates the itemised charge for one babysitting session.
///
/// This is the same calculation as [`calculate_nightly_charge`], returning
/// every billed segment and an audit trail of the clipping, midnight and
/// routing decisions.
///
/// # Example
///
/// ```
/// use nightly_charge::calculation::{calculate_nightly_charge_breakdown, SessionCase};
/// use nightly_charge::models::{BillingPeriod, RateSchedule, Session};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let parse = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let session = Session::new(
///     parse("2022-01-20 18:00:00"),
///     parse("2022-01-20 23:00:00"),
///     parse("2022-01-20 22:00:00"),
/// );
///
/// let breakdown = calculate_nightly_charge_breakdown(&session, &RateSchedule::default());
/// assert_eq!(breakdown.case, Some(SessionCase::BeforeBedtime));
/// assert_eq!(breakdown.lines.len(), 2);
/// assert_eq!(breakdown.lines[0].period, BillingPeriod::StartToBedtime);
/// assert_eq!(breakdown.total, Decimal::new(56, 0));
/// ```
pub fn calculate_nightly_charge_breakdown(
    session: &Session,
    rates: &RateSchedule,
) -> ChargeBreakdown {
    let mut audit_steps = Vec::new();
    let mut current_step = 1;

    let midnight = closest_midnight(session.start_time);

    if session.is_empty() {
        audit_steps.push(AuditStep {
            step_number: current_step,
            rule_id: "empty_session".to_string(),
            rule_name: "Empty Session".to_string(),
            input: serde_json::json!({
                "start_time": session.start_time.to_string(),
                "end_time": session.end_time.to_string()
            }),
            output: serde_json::json!({ "total": "0" }),
            reasoning: "End time is at or before start time - nothing is charged".to_string(),
        });
        debug!(start_time = %session.start_time, end_time = %session.end_time, "Empty session");

        return ChargeBreakdown {
            session: *session,
            corrected_start: session.start_time,
            corrected_end: session.end_time,
            midnight,
            case: None,
            lines: Vec::new(),
            total: Decimal::ZERO,
            audit_steps,
        };
    }

    // Step 1: Select midnight from the original start
    audit_steps.push(AuditStep {
        step_number: current_step,
        rule_id: "midnight_selection".to_string(),
        rule_name: "Closest Midnight Selection".to_string(),
        input: serde_json::json!({ "start_time": session.start_time.to_string() }),
        output: serde_json::json!({ "midnight": midnight.to_string() }),
        reasoning: if midnight <= session.start_time {
            format!("Start is before noon - using midnight of the same day ({})", midnight)
        } else {
            format!("Start is at or after noon - using the following midnight ({})", midnight)
        },
    });
    current_step += 1;

    // Step 2: Clip to the paid window
    let corrected_start = correct_start_time(session.start_time);
    let corrected_end = correct_end_time(session.end_time);
    audit_steps.push(AuditStep {
        step_number: current_step,
        rule_id: "paid_window_clipping".to_string(),
        rule_name: "Paid Window Clipping".to_string(),
        input: serde_json::json!({
            "start_time": session.start_time.to_string(),
            "end_time": session.end_time.to_string()
        }),
        output: serde_json::json!({
            "corrected_start": corrected_start.to_string(),
            "corrected_end": corrected_end.to_string()
        }),
        reasoning: clipping_reasoning(session, corrected_start, corrected_end),
    });
    current_step += 1;

    // Step 3: Route
    let routing = RoutingInput {
        corrected_start,
        corrected_end,
        original_end: session.end_time,
        bedtime: session.bedtime,
        midnight,
    };
    let case = routing.case();
    let segments = routing.partition(case);
    audit_steps.push(AuditStep {
        step_number: current_step,
        rule_id: "case_routing".to_string(),
        rule_name: "Session Case Routing".to_string(),
        input: serde_json::json!({
            "corrected_start": corrected_start.to_string(),
            "original_end": session.end_time.to_string(),
            "bedtime": session.bedtime.to_string(),
            "midnight": midnight.to_string()
        }),
        output: serde_json::json!({
            "case": case,
            "segment_count": segments.len()
        }),
        reasoning: format!("{}: split into {} segment(s)", case, segments.len()),
    });
    current_step += 1;

    // Step 4: Price each segment
    let mut lines = Vec::with_capacity(segments.len());
    let mut total = Decimal::ZERO;

    for segment in &segments {
        let line = price_segment(segment, rates);

        audit_steps.push(AuditStep {
            step_number: current_step,
            rule_id: "segment_charge".to_string(),
            rule_name: "Segment Charge".to_string(),
            input: serde_json::json!({
                "period": line.period,
                "start_time": line.start_time.to_string(),
                "end_time": line.end_time.to_string(),
                "rate": line.rate.to_string()
            }),
            output: serde_json::json!({
                "hours": line.hours.to_string(),
                "amount": line.amount.to_string()
            }),
            reasoning: if line.hours < Decimal::ZERO {
                format!(
                    "{}: inverted segment, {}h x ${} = ${} cancels time already billed",
                    line.period, line.hours, line.rate, line.amount
                )
            } else {
                format!(
                    "{}: {}h x ${} = ${}",
                    line.period, line.hours, line.rate, line.amount
                )
            },
        });
        current_step += 1;

        total += line.amount;
        lines.push(line);
    }

    // Step 5: Floor the total at zero
    if total < Decimal::ZERO {
        audit_steps.push(AuditStep {
            step_number: current_step,
            rule_id: "non_negative_total".to_string(),
            rule_name: "Non-negative Total".to_string(),
            input: serde_json::json!({ "line_sum": total.to_string() }),
            output: serde_json::json!({ "total": "0" }),
            reasoning: "Segments sum below zero - nothing is charged".to_string(),
        });
        total = Decimal::ZERO;
    }

    debug!(
        case = %case,
        segments = lines.len(),
        total = %total,
        "Nightly charge calculated"
    );

    ChargeBreakdown {
        session: *session,
        corrected_start,
        corrected_end,
        midnight,
        case: Some(case),
        lines,
        total,
        audit_steps,
    }
}

fn clipping_reasoning(
    session: &Session,
    corrected_start: NaiveDateTime,
    corrected_end: NaiveDateTime,
) -> String {
    let mut notes = Vec::new();
    if corrected_start != session.start_time {
        notes.push(format!("start moved forward to {}", corrected_start));
    }
    if corrected_end != session.end_time {
        notes.push(format!("end moved back to {}", corrected_end));
    }

    if notes.is_empty() {
        "Session lies within the paid window".to_string()
    } else {
        format!("Unpaid time skipped: {}", notes.join(", "))
    }
}
