//! The injected document-export capability.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Report;

/// Serializes an assembled report into a document somewhere.
///
/// Implementations may complete, fail, or never resolve. Callers abandon
/// an export by dropping the future; there is no cancellation token and no
/// automatic retry.
#[async_trait]
pub trait DocumentExporter: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Exports `report`, returning where the document went.
    async fn export(&self, report: &Report) -> Result<ExportReceipt, ExportError>;
}

/// Where an exported document was delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReceipt {
    /// File name of the document.
    pub file_name: String,
    /// Exporter-specific location, e.g. a file path.
    pub location: String,
    /// Size of the document in bytes.
    pub bytes: u64,
}

/// Export failures, split by whether the exporter could be reached at all.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The exporter or its backing resource could not be loaded.
    #[error("Document exporter unavailable: {reason}")]
    Unavailable {
        /// What was missing.
        reason: String,
    },

    /// The exporter was reached but failed while producing the document.
    #[error("Document generation failed: {reason}")]
    Generation {
        /// What went wrong.
        reason: String,
    },
}

impl ExportError {
    /// The message shown to the person who triggered the export.
    pub fn user_message(&self) -> &'static str {
        match self {
            ExportError::Unavailable { .. } => {
                "Error loading the document exporter. Please check your connection and try again."
            }
            ExportError::Generation { .. } => {
                "Error generating the report. Please try again or contact IT support if the problem persists."
            }
        }
    }

    /// The failure kind.
    pub fn kind(&self) -> ExportFailureKind {
        match self {
            ExportError::Unavailable { .. } => ExportFailureKind::Unavailable,
            ExportError::Generation { .. } => ExportFailureKind::Generation,
        }
    }
}

/// Which side of the export boundary failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFailureKind {
    /// The exporter could not be loaded.
    Unavailable,
    /// The exporter failed while generating.
    Generation,
}
