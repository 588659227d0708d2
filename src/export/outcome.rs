//! Running an export and reporting what happened.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::exporter::{DocumentExporter, ExportFailureKind};
use crate::models::Report;

/// The user-visible result of one export attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExportOutcome {
    /// The document was delivered.
    Success {
        /// File name of the document.
        file_name: String,
        /// Where it was delivered.
        location: String,
        /// Titles of the sections included, in report order.
        sections: Vec<String>,
        /// Confirmation message.
        message: String,
    },
    /// The export failed.
    Failure {
        /// Which side failed.
        kind: ExportFailureKind,
        /// Message for the person who triggered the export.
        message: String,
        /// Technical detail.
        reason: String,
    },
}

impl ExportOutcome {
    /// Returns true for [`ExportOutcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, ExportOutcome::Success { .. })
    }
}

/// Runs one export and converts the result into an [`ExportOutcome`].
///
/// Failures are returned, never retried.
pub async fn run_export(exporter: &dyn DocumentExporter, report: &Report) -> ExportOutcome {
    match exporter.export(report).await {
        Ok(receipt) => {
            let sections: Vec<String> = report
                .section_titles()
                .into_iter()
                .map(str::to_string)
                .collect();
            info!(
                exporter = exporter.name(),
                report_id = %report.report_id,
                file_name = %receipt.file_name,
                bytes = receipt.bytes,
                "Report exported"
            );
            let message = format!(
                "Report exported as {}. Included sections: {}.",
                receipt.file_name,
                sections.join(", ")
            );
            ExportOutcome::Success {
                file_name: receipt.file_name,
                location: receipt.location,
                sections,
                message,
            }
        }
        Err(err) => {
            warn!(
                exporter = exporter.name(),
                report_id = %report.report_id,
                error = %err,
                "Report export failed"
            );
            ExportOutcome::Failure {
                kind: err.kind(),
                message: err.user_message().to_string(),
                reason: err.to_string(),
            }
        }
    }
}

/// Runs an export, abandoning it if it has not resolved within `limit`.
///
/// Returns `None` when the export was abandoned. The exporter future is
/// dropped at that point; whatever it had started is not rolled back.
pub async fn run_export_within(
    exporter: &dyn DocumentExporter,
    report: &Report,
    limit: Duration,
) -> Option<ExportOutcome> {
    match tokio::time::timeout(limit, run_export(exporter, report)).await {
        Ok(outcome) => Some(outcome),
        Err(_) => {
            warn!(
                exporter = exporter.name(),
                report_id = %report.report_id,
                limit_ms = limit.as_millis() as u64,
                "Report export abandoned"
            );
            None
        }
    }
}
