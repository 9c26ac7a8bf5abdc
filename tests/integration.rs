//! Integration tests for the Nightly Charge Engine.
//!
//! This test suite covers:
//! - Reference scenarios through the HTTP API
//! - Fractional hours and paid window clipping
//! - Rate overrides
//! - Error cases
//! - Properties of the calculation over generated sessions

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Duration, NaiveDateTime};
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use nightly_charge::api::{AppState, create_router};
use nightly_charge::calculation::{
    calculate_nightly_charge, calculate_nightly_charge_breakdown, whole_hours,
};
use nightly_charge::config::ConfigLoader;
use nightly_charge::models::{RateSchedule, Session};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_request(start_time: &str, end_time: &str, bedtime: &str) -> Value {
    json!({
        "start_time": start_time,
        "end_time": end_time,
        "bedtime": bedtime
    })
}

fn assert_total(result: &Value, expected: &str) {
    let actual = decimal(result["total"].as_str().unwrap());
    assert_eq!(
        actual.normalize(),
        decimal(expected).normalize(),
        "Expected total {}, got {}",
        expected,
        actual
    );
}

async fn assert_session_total(start_time: &str, end_time: &str, bedtime: &str, expected: &str) {
    let (status, result) = post_calculate(
        create_router_for_test(),
        create_request(start_time, end_time, bedtime),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "Unexpected response: {}", result);
    assert_total(&result, expected);
}

// =============================================================================
// Reference scenarios
// =============================================================================

#[tokio::test]
async fn test_start_before_bedtime_end_after_midnight() {
    assert_session_total(
        "2022-01-20T18:00:00",
        "2022-01-21T02:00:00",
        "2022-01-20T22:00:00",
        "96.00",
    )
    .await;
}

#[tokio::test]
async fn test_start_before_bedtime_end_before_midnight() {
    assert_session_total(
        "2022-01-20T18:00:00",
        "2022-01-20T23:00:00",
        "2022-01-20T22:00:00",
        "56.00",
    )
    .await;
}

#[tokio::test]
async fn test_start_after_bedtime_end_before_midnight() {
    assert_session_total(
        "2022-01-20T18:00:00",
        "2022-01-20T23:00:00",
        "2022-01-20T17:00:00",
        "40.00",
    )
    .await;
}

#[tokio::test]
async fn test_start_after_midnight() {
    assert_session_total(
        "2022-01-21T01:00:00",
        "2022-01-21T03:00:00",
        "2022-01-20T17:00:00",
        "32.00",
    )
    .await;
}

#[tokio::test]
async fn test_end_before_start_is_zero() {
    assert_session_total(
        "2022-01-20T19:00:00",
        "2022-01-20T18:00:00",
        "2022-01-20T20:00:00",
        "0",
    )
    .await;
}

#[tokio::test]
async fn test_start_before_five_pm_is_clipped() {
    assert_session_total(
        "2022-01-20T14:30:00",
        "2022-01-20T21:00:00",
        "2022-01-20T19:00:00",
        "40.00",
    )
    .await;
}

// =============================================================================
// Fractional hours and window edges
// =============================================================================

#[tokio::test]
async fn test_fractional_start_before_bedtime_end_after_midnight() {
    assert_session_total(
        "2022-01-20T17:30:00",
        "2022-01-21T01:45:00",
        "2022-01-20T19:20:00",
        "60",
    )
    .await;
}

#[tokio::test]
async fn test_fractional_start_before_bedtime_end_before_midnight() {
    assert_session_total(
        "2022-01-20T17:30:00",
        "2022-01-20T23:30:00",
        "2022-01-20T22:00:00",
        "56",
    )
    .await;
}

#[tokio::test]
async fn test_fractional_start_after_bedtime() {
    assert_session_total(
        "2022-01-20T17:30:00",
        "2022-01-20T23:00:00",
        "2022-01-20T17:00:00",
        "40",
    )
    .await;
}

#[tokio::test]
async fn test_fractional_bedtime_after_end() {
    assert_session_total(
        "2022-01-20T17:30:00",
        "2022-01-20T19:45:00",
        "2022-01-20T20:00:00",
        "24",
    )
    .await;
}

#[tokio::test]
async fn test_fractional_start_after_midnight_before_bedtime() {
    assert_session_total(
        "2022-01-21T01:30:00",
        "2022-01-21T03:45:00",
        "2022-01-21T02:15:00",
        "32",
    )
    .await;
}

#[tokio::test]
async fn test_bedtime_after_end_start_after_midnight() {
    assert_session_total(
        "2022-01-21T01:30:00",
        "2022-01-21T03:45:00",
        "2022-01-21T03:46:00",
        "32",
    )
    .await;
}

#[tokio::test]
async fn test_end_after_four_am_is_clipped() {
    assert_session_total(
        "2022-01-20T17:00:00",
        "2022-01-21T05:00:00",
        "2022-01-20T19:00:00",
        "128",
    )
    .await;
}

#[tokio::test]
async fn test_equal_start_and_end_is_zero() {
    assert_session_total(
        "2022-01-20T19:00:00",
        "2022-01-20T19:00:00",
        "2022-01-20T20:00:00",
        "0",
    )
    .await;
}

#[tokio::test]
async fn test_bedtime_after_midnight_bills_overlap_once() {
    assert_session_total(
        "2022-01-20T20:00:00",
        "2022-01-21T03:00:00",
        "2022-01-21T01:00:00",
        "100",
    )
    .await;
}

#[tokio::test]
async fn test_bedtime_after_midnight_fractional() {
    assert_session_total(
        "2022-01-20T20:00:00",
        "2022-01-21T00:30:00",
        "2022-01-21T00:15:00",
        "40",
    )
    .await;
}

// =============================================================================
// Response shape and rate overrides
// =============================================================================

#[tokio::test]
async fn test_response_contains_breakdown_and_metadata() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        create_request(
            "2022-01-20T18:00:00",
            "2022-01-21T02:00:00",
            "2022-01-20T22:00:00",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["calculation_id"].is_string());
    assert!(result["timestamp"].is_string());
    assert_eq!(result["currency"], "USD");

    let lines = result["breakdown"]["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["period"], "start_to_bedtime");
    assert_eq!(lines[1]["period"], "bedtime_to_midnight");
    assert_eq!(lines[2]["period"], "midnight_to_end");
    assert_eq!(result["breakdown"]["midnight"], "2022-01-21T00:00:00");
}

#[tokio::test]
async fn test_rate_overrides_replace_only_given_rates() {
    let mut body = create_request(
        "2022-01-20T18:00:00",
        "2022-01-21T02:00:00",
        "2022-01-20T22:00:00",
    );
    body["rates"] = json!({ "midnight_to_end": "20.00" });

    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    // 4 x 12 + 2 x 8 + 2 x 20
    assert_total(&result, "104");
}

#[tokio::test]
async fn test_negative_rate_override_is_rejected() {
    let mut body = create_request(
        "2022-01-20T18:00:00",
        "2022-01-21T02:00:00",
        "2022-01-20T22:00:00",
    );
    body["rates"] = json!({ "start_to_bedtime": "-12" });

    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_missing_bedtime_is_validation_error() {
    let body = json!({
        "start_time": "2022-01-20T18:00:00",
        "end_time": "2022-01-21T02:00:00"
    });

    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
    assert!(result["message"].as_str().unwrap().contains("bedtime"));
}

#[tokio::test]
async fn test_unparseable_timestamp_is_malformed_json() {
    let body = create_request("yesterday evening", "2022-01-21T02:00:00", "2022-01-20T22:00:00");

    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

// =============================================================================
// Properties
// =============================================================================

fn base_datetime() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2022-01-20 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
}

/// Any minute within a 48 hour span starting at midnight of 2022-01-20.
fn any_datetime() -> impl Strategy<Value = NaiveDateTime> {
    (0i64..48 * 60).prop_map(|minutes| base_datetime() + Duration::minutes(minutes))
}

fn any_rates() -> impl Strategy<Value = RateSchedule> {
    (0i64..10_000, 0i64..10_000, 0i64..10_000).prop_map(|(a, b, c)| RateSchedule {
        start_to_bedtime: Decimal::new(a, 2),
        bedtime_to_midnight: Decimal::new(b, 2),
        midnight_to_end: Decimal::new(c, 2),
    })
}

proptest! {
    #[test]
    fn prop_charge_is_never_negative(
        start in any_datetime(),
        end in any_datetime(),
        bedtime in any_datetime(),
        rates in any_rates()
    ) {
        prop_assert!(calculate_nightly_charge(start, end, bedtime, &rates) >= Decimal::ZERO);
    }

    #[test]
    fn prop_end_not_after_start_is_free(
        start in any_datetime(),
        back in 0i64..24 * 60,
        bedtime in any_datetime(),
        rates in any_rates()
    ) {
        let end = start - Duration::minutes(back);
        prop_assert_eq!(calculate_nightly_charge(start, end, bedtime, &rates), Decimal::ZERO);
    }

    #[test]
    fn prop_total_is_sum_of_truncated_segments(
        start in any_datetime(),
        end in any_datetime(),
        bedtime in any_datetime(),
        rates in any_rates()
    ) {
        let breakdown = calculate_nightly_charge_breakdown(&Session::new(start, end, bedtime), &rates);

        let mut sum = Decimal::ZERO;
        for line in &breakdown.lines {
            prop_assert_eq!(line.hours, whole_hours(line.start_time, line.end_time));
            prop_assert_eq!(line.rate, rates.rate_for(line.period));
            prop_assert_eq!(line.amount, line.hours * line.rate);
            sum += line.amount;
        }
        prop_assert_eq!(sum.max(Decimal::ZERO), breakdown.total);
        prop_assert!(breakdown.lines.len() <= 3);
    }

    #[test]
    fn prop_default_rates_match_explicit_12_8_16(
        start in any_datetime(),
        end in any_datetime(),
        bedtime in any_datetime()
    ) {
        let explicit = RateSchedule::new(decimal("12"), decimal("8"), decimal("16")).unwrap();
        prop_assert_eq!(
            calculate_nightly_charge(start, end, bedtime, &RateSchedule::default()),
            calculate_nightly_charge(start, end, bedtime, &explicit)
        );
    }

    #[test]
    fn prop_unpaid_morning_adds_nothing(
        start_offset in 0i64..(7 * 60),
        bedtime_offset in 0i64..(11 * 60),
        end_offset in 0i64..(13 * 60)
    ) {
        // Any end from 05:00 to 17:59 on the 21st charges like a 04:00 end.
        // Bedtime stays at or before 04:00 so it never lands after either end.
        let evening = base_datetime() + Duration::hours(17);
        let start = evening + Duration::minutes(start_offset);
        let bedtime = evening + Duration::minutes(bedtime_offset);
        let four_am = base_datetime() + Duration::hours(28);
        let end = four_am + Duration::hours(1) + Duration::minutes(end_offset);

        let rates = RateSchedule::default();
        prop_assert_eq!(
            calculate_nightly_charge(start, end, bedtime, &rates),
            calculate_nightly_charge(start, four_am, bedtime, &rates)
        );
    }

    #[test]
    fn prop_unpaid_daytime_adds_nothing(
        offset in 0i64..(5 * 60),
        end in any_datetime(),
        bedtime in any_datetime()
    ) {
        // Any afternoon start before 17:00 on the 20th charges like a 17:00 start.
        let five_pm = base_datetime() + Duration::hours(17);
        let start = base_datetime() + Duration::hours(12) + Duration::minutes(offset);
        prop_assume!(end > five_pm);

        let rates = RateSchedule::default();
        prop_assert_eq!(
            calculate_nightly_charge(start, end, bedtime, &rates),
            calculate_nightly_charge(five_pm, end, bedtime, &rates)
        );
    }
}
