//! HTTP request handlers for the payroll reconciliation API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use chrono::Datelike;

use crate::calculation::{
    ViewMode, attendance_distribution, parse_calendar_date, productivity_distribution,
    reconcile_month, window_days, work_report_distribution,
};
use crate::models::{AttendanceEntry, PayrollProfile, WorkReportEntry};

use super::request::ReconcileRequest;
use super::response::{ApiError, ApiErrorResponse, DistributionSet, ReconcileResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reconcile", post(reconcile_handler))
        .with_state(state)
}

/// Handler for POST /reconcile endpoint.
///
/// Accepts an employee's record collections and a window selection, and
/// returns the monthly payroll summary with the reporting distributions.
async fn reconcile_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReconcileRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing reconcile request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(request)) => request,
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
                        ApiError::new("VALIDATION_ERROR", body_text)
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
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // The reference date selects the window; without it there is nothing
    // to reconcile, so it is the one date that must parse.
    let Some(reference_date) = parse_calendar_date(&request.reference_date) else {
        warn!(
            correlation_id = %correlation_id,
            reference_date = %request.reference_date,
            "Unparsable reference date"
        );
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ApiError::with_details(
                "VALIDATION_ERROR",
                format!("Unparsable reference date: {}", request.reference_date),
                "Expected a calendar date such as 2025-06-17",
            )),
        )
            .into_response();
    };

    // Convert wire records into domain entries, dropping malformed rows
    let mode = request.mode;
    let employee_id = request.employee.id.clone();
    let profile: PayrollProfile = request.employee.into();

    let attendance_received = request.attendance.len();
    let attendance: Vec<AttendanceEntry> = request
        .attendance
        .into_iter()
        .filter_map(|entry| entry.into_entry(&employee_id))
        .collect();

    let reports_received = request.work_reports.len();
    let work_reports: Vec<WorkReportEntry> = request
        .work_reports
        .into_iter()
        .filter_map(|entry| entry.into_entry(&employee_id))
        .collect();

    let dropped = (attendance_received - attendance.len()) + (reports_received - work_reports.len());
    if dropped > 0 {
        warn!(
            correlation_id = %correlation_id,
            employee_id = %employee_id,
            dropped,
            "Excluded records with unparsable dates"
        );
    }

    let start_time = Instant::now();
    let window = window_days(reference_date, mode);
    let month_days = window_days(reference_date, ViewMode::Month);

    let summary = match reconcile_month(
        reference_date.year(),
        reference_date.month(),
        &attendance,
        &work_reports,
        &profile,
        state.policy(),
    ) {
        Ok(summary) => summary,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Reconciliation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let distributions = DistributionSet {
        attendance: attendance_distribution(&month_days, &attendance, state.policy()),
        work_reports: work_report_distribution(&month_days, &work_reports),
        productivity: productivity_distribution(&month_days, &work_reports),
    };

    let duration = start_time.elapsed();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        year = summary.year,
        month = summary.month,
        valid_days = summary.valid_days,
        paid_days = summary.paid_days,
        earnings = %summary.earnings,
        duration_us = duration.as_micros(),
        "Reconciliation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ReconcileResponse {
            window,
            summary,
            distributions,
        }),
    )
        .into_response()
}
