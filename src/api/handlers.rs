//! HTTP request handlers for the labor evaluation API.
//!
//! This module contains the handler functions for all API endpoints. Every
//! handler is stateless apart from the shared, immutable [`AppState`].

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::summarize_month;
use crate::models::{JobInputs, ReportingMonth};

use super::request::{EvaluationRequest, JobRequest, SummaryRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate_handler))
        .route("/annual-leave", post(annual_leave_handler))
        .route("/summary", post(summary_handler))
        .with_state(state)
}

/// Handler for POST /evaluate.
///
/// Returns the evaluation result together with its audit trace.
async fn evaluate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing evaluation request");

    let request = parse_payload(payload, correlation_id)?;
    let today = request.today.unwrap_or_else(current_date);
    let job = job_inputs(request.job, correlation_id)?;

    let start_time = Instant::now();
    let report = state.evaluator().explain(&job, today);
    info!(
        correlation_id = %correlation_id,
        today = %today,
        min_wage_ok = report.result.min_wage_ok,
        warnings = report.result.warnings.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Evaluation completed successfully"
    );

    Ok(json_ok(&report))
}

/// Handler for POST /annual-leave.
async fn annual_leave_handler(
    State(state): State<AppState>,
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing annual leave request");

    let request = parse_payload(payload, correlation_id)?;
    let today = request.today.unwrap_or_else(current_date);
    let job = job_inputs(request.job, correlation_id)?;

    let summary = state.evaluator().summarize_leave(&job, today);
    info!(
        correlation_id = %correlation_id,
        total = %summary.total,
        "Annual leave summarized"
    );

    Ok(json_ok(&summary))
}

/// Handler for POST /summary.
///
/// Requires a `month` in `YYYY-MM` form.
async fn summary_handler(
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly summary request");

    let request = parse_payload(payload, correlation_id)?;
    let hourly_rate = request.validated_hourly_rate().map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Invalid hourly rate");
        ApiErrorResponse::from(err)
    })?;
    let Some(month) = request.month.as_deref() else {
        warn!(correlation_id = %correlation_id, "Reporting month missing");
        return Err(ApiErrorResponse::bad_request(ApiError::missing_period()));
    };

    let month = ReportingMonth::parse(month).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Invalid reporting month");
        ApiErrorResponse::from(err)
    })?;

    let summary = summarize_month(hourly_rate, &month, &request.records);
    info!(
        correlation_id = %correlation_id,
        month = %month,
        records = request.records.len(),
        total_hours = %summary.total_hours,
        "Monthly summary completed"
    );

    Ok(json_ok(&summary))
}

fn current_date() -> NaiveDate {
    Local::now().date_naive()
}

fn json_ok<T: Serialize>(body: &T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn job_inputs(request: JobRequest, correlation_id: Uuid) -> Result<JobInputs, ApiErrorResponse> {
    JobInputs::try_from(request).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Invalid job input");
        ApiErrorResponse::from(err)
    })
}

/// Unwraps a JSON body, mapping extractor rejections to 400 responses.
fn parse_payload<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
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

    Err(ApiErrorResponse::bad_request(error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{AnnualLeaveSummary, EvaluationReport, MonthlySummary};
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/kr2025").expect("Failed to load config");
        AppState::new(config)
    }

    async fn post_json(uri: &str, body: &str) -> Response {
        create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> axum::body::Bytes {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
    }

    const VALID_EVALUATION: &str = r#"{
        "job": {
            "hourly_rate": "11500",
            "weekly_hours": "30",
            "work_days_per_week": 5,
            "start_date": "2024-08-01"
        },
        "today": "2025-06-01"
    }"#;

    #[tokio::test]
    async fn test_api_001_valid_evaluation_returns_200() {
        let response = post_json("/evaluate", VALID_EVALUATION).await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let report: EvaluationReport = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(report.result.min_wage_ok);
        assert_eq!(report.result.weekly_holiday_pay, 69000);
        assert_eq!(report.result.severance_estimate, 0);
        assert!(report.result.warnings.is_empty());
        assert_eq!(report.audit_trace.steps.len(), 5);
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let response = post_json("/evaluate", "{invalid json").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_job_field_returns_400() {
        let body = r#"{ "job": { "weekly_hours": "30", "start_date": "2024-08-01" } }"#;
        let response = post_json("/evaluate", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(
            error.message.contains("missing field"),
            "Expected error message to mention missing field, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_api_004_invalid_job_returns_400() {
        let body = r#"{
            "job": {
                "hourly_rate": "11500",
                "weekly_hours": "30",
                "start_date": "2024-08-01",
                "attendance_rate_last_year": "1.5"
            }
        }"#;
        let response = post_json("/evaluate", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "INVALID_JOB_INPUT");
    }

    #[tokio::test]
    async fn test_annual_leave_endpoint() {
        let body = r#"{
            "job": {
                "hourly_rate": "11000",
                "weekly_hours": "40",
                "start_date": "2022-01-01",
                "attendance_rate_last_year": "0.95"
            },
            "today": "2025-06-01"
        }"#;
        let response = post_json("/annual-leave", body).await;

        assert_eq!(response.status(), StatusCode::OK);
        let summary: AnnualLeaveSummary =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(summary.total, dec("16"));
        assert_eq!(summary.used, Decimal::ZERO);
        assert_eq!(summary.available, dec("16"));
    }

    #[tokio::test]
    async fn test_summary_endpoint() {
        let body = r#"{
            "hourly_rate": "10030",
            "month": "2025-11",
            "records": [
                {
                    "work_date": "2025-11-03",
                    "time_in": "2025-11-03T09:00:00",
                    "time_out": "2025-11-03T13:00:00"
                }
            ]
        }"#;
        let response = post_json("/summary", body).await;

        assert_eq!(response.status(), StatusCode::OK);
        let summary: MonthlySummary = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(summary.total_hours, dec("4"));
        assert_eq!(summary.estimated_salary, dec("40120"));
        assert_eq!(summary.week_stats.len(), 5);
    }

    #[tokio::test]
    async fn test_summary_negative_rate_returns_400() {
        let body = r#"{ "hourly_rate": "-10030", "month": "2025-11", "records": [] }"#;
        let response = post_json("/summary", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "INVALID_JOB_INPUT");
        assert!(error.message.contains("hourly_rate"));
    }

    #[tokio::test]
    async fn test_summary_missing_month_returns_400() {
        let response = post_json("/summary", r#"{ "hourly_rate": "10030", "records": [] }"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "MISSING_PERIOD");
    }

    #[tokio::test]
    async fn test_summary_invalid_month_returns_400() {
        let body = r#"{ "hourly_rate": "10030", "month": "2025/11", "records": [] }"#;
        let response = post_json("/summary", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "INVALID_PERIOD");
    }
}
