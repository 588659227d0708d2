//! Error types for the workforce report engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for configuration loading, input validation and report assembly.
//! Export failures have their own type in [`crate::export`].

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the workforce report engine.
///
/// Aggregation itself never fails; these errors come from loading
/// configuration, validating input records, or laying out report tables.
///
/// # Example
///
/// ```
/// use workforce_report::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/report.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/report.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A staff record was malformed.
    #[error("Invalid staff record '{id}' field '{field}': {message}")]
    InvalidStaff {
        /// The identifier of the offending record (may be blank).
        id: String,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Two attendance entries share the same calendar date.
    #[error("Duplicate attendance date: {date}")]
    DuplicateAttendanceDate {
        /// The repeated date.
        date: NaiveDate,
    },

    /// A recruitment entry was malformed.
    #[error("Invalid recruitment entry '{position}' field '{field}': {message}")]
    InvalidRecruitment {
        /// The position title of the offending entry (may be blank).
        position: String,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A report table could not be laid out.
    #[error("Report layout error in table '{table}': {message}")]
    ReportLayout {
        /// The title of the table being assembled.
        table: String,
        /// A description of the layout problem.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
