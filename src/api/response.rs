//! Response types for the workforce report API.
//!
//! This module defines the error response structures and the mapping from
//! engine and export failures to HTTP status codes.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::export::ExportFailureKind;
use crate::insights::Insight;
use crate::models::DerivedMetrics;

/// Body returned by `/metrics`: the metrics and the insights derived from
/// them, computed once for the live display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsResponse {
    /// Derived metrics.
    pub metrics: DerivedMetrics,
    /// Insights selected from `metrics`.
    pub insights: Vec<Insight>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Maps a failed export to its status and error body.
    pub fn from_export_failure(kind: ExportFailureKind, message: String, reason: String) -> Self {
        let (status, code) = match kind {
            ExportFailureKind::Unavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "EXPORTER_UNAVAILABLE")
            }
            ExportFailureKind::Generation => (StatusCode::INTERNAL_SERVER_ERROR, "EXPORT_FAILED"),
        };
        Self {
            status,
            error: ApiError::with_details(code, message, reason),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::InvalidStaff { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_STAFF",
                    message,
                    "The staff roster contains invalid information",
                ),
            },
            EngineError::DuplicateAttendanceDate { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "DUPLICATE_ATTENDANCE_DATE",
                    message,
                    "Each attendance date may appear only once",
                ),
            },
            EngineError::InvalidRecruitment { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RECRUITMENT",
                    message,
                    "The recruitment pipeline contains invalid information",
                ),
            },
            EngineError::ReportLayout { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "REPORT_LAYOUT_ERROR",
                    "Report assembly failed",
                    message,
                ),
            },
        }
    }
}
