//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the report
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{MAX_NEXT_REVIEW_DAYS, ReportConfig};

/// Name of the report configuration file inside the config directory.
pub const REPORT_CONFIG_FILE: &str = "report.yaml";

/// Loads and provides access to the report configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── report.yaml   # Report title, naming and closing metadata
/// ```
///
/// # Example
///
/// ```no_run
/// use workforce_report::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Report title: {}", loader.report().title);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    report: ReportConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if `report.yaml` cannot be
    /// read, or [`EngineError::ConfigParseError`] if it is not valid YAML
    /// for [`ReportConfig`] or `next_review_days` exceeds
    /// [`MAX_NEXT_REVIEW_DAYS`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let file = path.as_ref().join(REPORT_CONFIG_FILE);
        let report = Self::load_yaml::<ReportConfig>(&file)?;

        if report.next_review_days > MAX_NEXT_REVIEW_DAYS {
            return Err(EngineError::ConfigParseError {
                path: file.display().to_string(),
                message: format!(
                    "next_review_days must be at most {MAX_NEXT_REVIEW_DAYS}, got {}",
                    report.next_review_days
                ),
            });
        }

        Ok(Self { report })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the report configuration.
    pub fn report(&self) -> &ReportConfig {
        &self.report
    }

    /// Consumes the loader, returning the report configuration.
    pub fn into_report(self) -> ReportConfig {
        self.report
    }
}
