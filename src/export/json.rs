//! An exporter that writes the report structure as JSON files.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::exporter::{DocumentExporter, ExportError, ExportReceipt};
use crate::models::Report;

/// Writes each report as pretty-printed JSON into a directory.
///
/// The directory must already exist; a missing directory makes the
/// exporter unavailable rather than being created on demand.
#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

impl JsonExporter {
    /// Creates an exporter writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// The directory documents are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    async fn write(&self, report: &Report) -> Result<ExportReceipt, ExportError> {
        let metadata =
            tokio::fs::metadata(&self.output_dir)
                .await
                .map_err(|e| ExportError::Unavailable {
                    reason: format!("{}: {e}", self.output_dir.display()),
                })?;
        if !metadata.is_dir() {
            return Err(ExportError::Unavailable {
                reason: format!("{} is not a directory", self.output_dir.display()),
            });
        }

        let body = serde_json::to_vec_pretty(report).map_err(|e| ExportError::Generation {
            reason: e.to_string(),
        })?;

        let path = self.output_dir.join(&report.file_name);
        tokio::fs::write(&path, &body)
            .await
            .map_err(|e| ExportError::Generation {
                reason: format!("{}: {e}", path.display()),
            })?;

        debug!(path = %path.display(), bytes = body.len(), "Wrote report document");

        Ok(ExportReceipt {
            file_name: report.file_name.clone(),
            location: path.display().to_string(),
            bytes: body.len() as u64,
        })
    }
}

#[async_trait]
impl DocumentExporter for JsonExporter {
    fn name(&self) -> &str {
        "json"
    }

    async fn export(&self, report: &Report) -> Result<ExportReceipt, ExportError> {
        self.write(report).await
    }
}
