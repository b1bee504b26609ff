//! HTTP request handlers for the shift payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{Ledger, calculate_travel_charge};
use crate::config::PayPolicy;
use crate::error::PayrollResult;
use crate::models::{CalculationResult, DayResult, PayTotals};

use super::request::{CalculationRequest, TimesheetRow};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a timesheet and returns the priced days and totals.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            }
            .into_response();
        }
    };

    let start_time = Instant::now();
    match perform_calculation(&request.rows, state.policy(), correlation_id) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                rows = request.rows.len(),
                priced_days = result.days.len(),
                skipped_rows = result.skipped_rows,
                grand_total = %result.totals.grand_total,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Prices every worked row of a timesheet.
///
/// Rows without a role are skipped; rows missing a time are kept at zero.
fn perform_calculation(
    rows: &[TimesheetRow],
    policy: &PayPolicy,
    calculation_id: Uuid,
) -> PayrollResult<CalculationResult> {
    let mut ledger = Ledger::new(policy.clone());
    let mut days = Vec::with_capacity(rows.len());
    let mut skipped_rows = 0;
    let mut total_hours = Decimal::ZERO;
    let mut premium_hours = Decimal::ZERO;
    let mut total_travel = Decimal::ZERO;

    for row in rows {
        let Some(role) = row.worked_role() else {
            skipped_rows += 1;
            continue;
        };

        let Some(shift) = row.shift_request() else {
            days.push(DayResult {
                date: row.date,
                role: role.to_string(),
                start_time: row.entry_time,
                end_time: row.exit_time,
                in_control_room: row.in_control_room,
                pay: Decimal::ZERO,
                travel_charge: Decimal::ZERO,
                segments: Vec::new(),
            });
            continue;
        };

        let pay = ledger.add_shift(&shift)?;
        let travel = calculate_travel_charge(
            shift.date,
            shift.start_time,
            shift.end_time,
            shift.flags.is_friday,
            shift.flags.is_saturday,
            &policy.travel,
        );

        total_hours += pay.hours;
        premium_hours += pay.premium_hours(policy.multipliers.default_multiplier);
        total_travel += travel.amount;

        days.push(DayResult {
            date: shift.date,
            role: role.to_string(),
            start_time: Some(shift.start_time),
            end_time: Some(shift.end_time),
            in_control_room: shift.in_control_room,
            pay: pay.total.round_dp(2),
            travel_charge: travel.amount,
            segments: pay.segments,
        });
    }

    // The total is the sum of the listed day pays, which are already in cents
    let total_pay: Decimal = days.iter().map(|day| day.pay).sum();

    Ok(CalculationResult {
        calculation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        days,
        skipped_rows,
        totals: PayTotals {
            total_hours,
            premium_hours,
            total_pay,
            total_travel,
            grand_total: total_pay + total_travel,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::str::FromStr;
    use tower::ServiceExt;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_state() -> AppState {
        AppState::new(PayPolicy::default())
    }

    fn parse_rows(json: &str) -> Vec<TimesheetRow> {
        serde_json::from_str(json).unwrap()
    }

    async fn post_body(body: String) -> axum::response::Response {
        create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[test]
    fn test_perform_calculation_skips_rows_without_role() {
        let rows = parse_rows(
            r#"[
                {"date": "2026-01-13", "role": "Guard", "entry_time": "09:00", "exit_time": "10:00"},
                {"date": "2026-01-14", "role": "N/A", "entry_time": "09:00", "exit_time": "10:00"},
                {"date": "2026-01-15", "entry_time": "09:00", "exit_time": "10:00"}
            ]"#,
        );

        let result = perform_calculation(&rows, &PayPolicy::default(), Uuid::new_v4()).unwrap();
        assert_eq!(result.days.len(), 1);
        assert_eq!(result.skipped_rows, 2);
        assert_eq!(result.totals.total_pay, dec("50"));
    }

    #[test]
    fn test_perform_calculation_zeroes_rows_missing_a_time() {
        let rows = parse_rows(
            r#"[{"date": "2026-01-16", "role": "Guard", "entry_time": "15:00"}]"#,
        );

        let result = perform_calculation(&rows, &PayPolicy::default(), Uuid::new_v4()).unwrap();
        assert_eq!(result.days.len(), 1);
        assert_eq!(result.days[0].pay, Decimal::ZERO);
        assert_eq!(result.days[0].travel_charge, Decimal::ZERO);
        assert!(result.days[0].segments.is_empty());
        assert_eq!(result.totals.grand_total, Decimal::ZERO);
    }

    #[test]
    fn test_perform_calculation_adds_travel_to_grand_total() {
        // Friday 15:00-17:00: pay 125, travel 40
        let rows = parse_rows(
            r#"[{"date": "2026-01-16", "role": "Guard", "entry_time": "15:00", "exit_time": "17:00"}]"#,
        );

        let result = perform_calculation(&rows, &PayPolicy::default(), Uuid::new_v4()).unwrap();
        assert_eq!(result.totals.total_pay, dec("125"));
        assert_eq!(result.totals.total_travel, dec("40"));
        assert_eq!(result.totals.grand_total, dec("165"));
        assert_eq!(result.totals.premium_hours, dec("1"));
    }

    #[test]
    fn test_total_pay_is_sum_of_listed_day_pays() {
        // Each 20 minute shift is 16.666..., listed as 16.67
        let rows = parse_rows(
            r#"[
                {"date": "2026-01-13", "role": "Guard", "entry_time": "09:00", "exit_time": "09:20"},
                {"date": "2026-01-13", "role": "Guard", "entry_time": "13:00", "exit_time": "13:20"}
            ]"#,
        );

        let result = perform_calculation(&rows, &PayPolicy::default(), Uuid::new_v4()).unwrap();
        let listed: Decimal = result.days.iter().map(|d| d.pay).sum();
        assert_eq!(result.days[0].pay, dec("16.67"));
        assert_eq!(listed, dec("33.34"));
        assert_eq!(result.totals.total_pay, listed);
        assert_eq!(result.totals.grand_total, dec("57.34"));
    }

    #[test]
    fn test_perform_calculation_propagates_invalid_shift() {
        let rows = parse_rows(
            r#"[{"date": "2026-01-13", "role": "Guard", "entry_time": "09:00", "exit_time": "09:00"}]"#,
        );

        let result = perform_calculation(&rows, &PayPolicy::default(), Uuid::new_v4());
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let body = r#"{"rows": [
            {"date": "2026-01-13", "role": "Guard", "entry_time": "09:00", "exit_time": "17:00", "in_control_room": true}
        ]}"#;

        let response = post_body(body.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: CalculationResult = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.days.len(), 1);
        assert_eq!(result.days[0].segments.len(), 8);
        assert_eq!(result.totals.total_pay, dec("480"));
        assert_eq!(result.totals.total_travel, dec("12"));
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let response = post_body("{invalid json".to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_rows_returns_validation_error() {
        let response = post_body("{}".to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("rows"));
    }

    #[tokio::test]
    async fn test_zero_length_shift_returns_invalid_shift() {
        let body = r#"{"rows": [
            {"date": "2026-01-13", "role": "Guard", "entry_time": "09:00", "exit_time": "09:00"}
        ]}"#;

        let response = post_body(body.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_SHIFT");
    }

    #[tokio::test]
    async fn test_error_responses_are_json() {
        let rejected = post_body("{invalid json".to_string()).await;
        assert_eq!(rejected.headers().get("content-type").unwrap(), "application/json");

        let body = r#"{"rows": [
            {"date": "2026-01-13", "role": "Guard", "entry_time": "09:00", "exit_time": "09:00"}
        ]}"#;
        let failed = post_body(body.to_string()).await;
        assert_eq!(failed.status(), StatusCode::BAD_REQUEST);
        assert_eq!(failed.headers().get("content-type").unwrap(), "application/json");

        let body = axum::body::to_bytes(failed.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_SHIFT");
        assert!(error.details.is_some());
    }
}
