//! Tracing subscriber setup for the binary.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Log filter used when neither `RUST_LOG` nor a configured level is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Failures while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured level is not a valid filter directive.
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter {
        /// The rejected directive.
        value: String,
        /// The parser's error.
        #[source]
        source: ParseError,
    },

    /// A global subscriber was already installed.
    #[error("telemetry error: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Builds the log filter. `RUST_LOG` wins over `log_level`.
pub fn build_filter(log_level: &str) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(log_level).map_err(|source| TelemetryError::EnvFilter {
            value: log_level.to_string(),
            source,
        }),
    }
}

/// Installs a compact fmt subscriber as the global default.
pub fn init(log_level: &str) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(log_level)?)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
