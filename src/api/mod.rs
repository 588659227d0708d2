//! HTTP API module for the workforce report engine.
//!
//! This module exposes the live metrics, the assembled report, and report
//! export over REST endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ReportRequest;
pub use response::{ApiError, ApiErrorResponse, MetricsResponse};
pub use state::AppState;
