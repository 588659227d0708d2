//! Configuration types for report assembly.
//!
//! These structures are deserialized from `report.yaml`. Every field has a
//! default, so a partial file only overrides what it names.

use serde::{Deserialize, Serialize};

/// Upper bound on [`ReportConfig::next_review_days`], ten years.
pub const MAX_NEXT_REVIEW_DAYS: u32 = 3_660;

/// Presentation settings for an assembled report.
///
/// Aggregation thresholds are not configurable; only the text and naming
/// of the report are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Report title shown in the header.
    pub title: String,
    /// Subtitle shown under the title.
    pub subtitle: String,
    /// Report type line in the header.
    pub report_type: String,
    /// File name prefix, followed by the generation date.
    pub file_prefix: String,
    /// File name extension, without the dot.
    pub file_extension: String,
    /// Classification printed in the closing metadata.
    pub classification: String,
    /// Data sources printed in the closing metadata.
    pub data_sources: Vec<String>,
    /// Report name in each page footer, before the page count.
    pub footer_title: String,
    /// Marking after the generation date in each page footer.
    pub footer_marking: String,
    /// Attendance target, in percent, shown next to the actual rate.
    pub attendance_target: u32,
    /// Days from generation until the next review date, at most
    /// [`MAX_NEXT_REVIEW_DAYS`].
    pub next_review_days: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "HR DASHBOARD".to_string(),
            subtitle: "COMPREHENSIVE ANALYTICS REPORT".to_string(),
            report_type: "Executive Summary".to_string(),
            file_prefix: "HR-Dashboard-Report".to_string(),
            file_extension: "json".to_string(),
            classification: "Internal Use Only".to_string(),
            data_sources: vec![
                "HRIS".to_string(),
                "Attendance System".to_string(),
                "Performance Management".to_string(),
            ],
            footer_title: "HR Dashboard Analytics Report".to_string(),
            footer_marking: "Confidential".to_string(),
            attendance_target: 95,
            next_review_days: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: ReportConfig =
            serde_yaml::from_str("title: Quarterly People Review\n").unwrap();

        assert_eq!(config.title, "Quarterly People Review");
        assert_eq!(config.file_prefix, "HR-Dashboard-Report");
        assert_eq!(config.attendance_target, 95);
        assert_eq!(config.data_sources.len(), 3);
    }

    #[test]
    fn test_empty_mapping_is_default() {
        let config: ReportConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, ReportConfig::default());
    }
}
