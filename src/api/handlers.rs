//! HTTP request handlers for the workforce report API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::aggregation::compute_metrics;
use crate::export::{ExportOutcome, run_export};
use crate::insights::select_insights;
use crate::report::build_report;

use super::request::ReportRequest;
use super::response::{ApiError, ApiErrorResponse, MetricsResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", post(metrics_handler))
        .route("/report", post(report_handler))
        .route("/report/export", post(export_handler))
        .with_state(state)
}

/// Handler for POST /metrics.
///
/// Returns the derived metrics and insights for the live display.
async fn metrics_handler(payload: Result<Json<ReportRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing metrics request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };
    let (snapshot, baseline, now) = request.into_parts();

    if let Err(err) = snapshot.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Snapshot validation failed");
        return ApiErrorResponse::from(err).into_response();
    }

    let start_time = Instant::now();
    let metrics = compute_metrics(&snapshot, now, baseline.as_ref());
    let insights = select_insights(&metrics);
    info!(
        correlation_id = %correlation_id,
        staff = metrics.total_staff,
        departments = metrics.departments.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Metrics computed successfully"
    );

    json_ok(&MetricsResponse { metrics, insights })
}

/// Handler for POST /report.
///
/// Returns the assembled report without exporting it.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };
    let (snapshot, baseline, now) = request.into_parts();

    let start_time = Instant::now();
    match build_report(&snapshot, now, baseline.as_ref(), state.config()) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                report_id = %report.report_id,
                pages = report.pages.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Report assembled successfully"
            );
            json_ok(&report)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Report assembly failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /report/export.
///
/// Assembles the report and hands it to the injected exporter once.
async fn export_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing export request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };
    let (snapshot, baseline, now) = request.into_parts();

    let start_time = Instant::now();
    let report = match build_report(&snapshot, now, baseline.as_ref(), state.config()) {
        Ok(report) => report,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Report assembly failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let outcome = run_export(state.exporter(), &report).await;
    let duration_us = start_time.elapsed().as_micros();
    match outcome {
        ExportOutcome::Failure {
            kind,
            message,
            reason,
        } => {
            warn!(
                correlation_id = %correlation_id,
                report_id = %report.report_id,
                ?kind,
                duration_us,
                "Export failed"
            );
            ApiErrorResponse::from_export_failure(kind, message, reason).into_response()
        }
        success => {
            info!(
                correlation_id = %correlation_id,
                report_id = %report.report_id,
                duration_us,
                "Export completed successfully"
            );
            json_ok(&success)
        }
    }
}

fn json_ok<T: Serialize>(body: &T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Turns a JSON extraction failure into a 400 with a specific error code.
fn parse_payload(
    correlation_id: Uuid,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<ReportRequest, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

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

    Err(ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    })
}
