//! Recruitment pipeline counts.

use std::collections::HashSet;

use crate::models::RecruitmentEntry;

/// Counts derived from the recruitment pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecruitmentSummary {
    /// Entries whose stage is not terminal.
    pub open_positions: usize,
    /// Distinct department labels across all entries.
    pub recruiting_departments: usize,
}

/// Counts open positions and the departments recruiting.
pub fn summarize_recruitment(entries: &[RecruitmentEntry]) -> RecruitmentSummary {
    let departments: HashSet<&str> = entries
        .iter()
        .map(|entry| entry.department.as_str())
        .collect();

    RecruitmentSummary {
        open_positions: entries.iter().filter(|entry| entry.is_open()).count(),
        recruiting_departments: departments.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PipelineStage, Priority};

    fn entry(department: &str, stage: PipelineStage) -> RecruitmentEntry {
        RecruitmentEntry {
            position: "Role".to_string(),
            department: department.to_string(),
            applicants: 10,
            stage,
            priority: Priority::Medium,
        }
    }

    #[test]
    fn test_hired_entries_are_not_open() {
        let entries = vec![
            entry("Engineering", PipelineStage::Interview),
            entry("Engineering", PipelineStage::Hired),
            entry("Sales", PipelineStage::Applied),
            entry("Design", PipelineStage::Offer),
        ];

        let summary = summarize_recruitment(&entries);
        assert_eq!(summary.open_positions, 3);
        assert_eq!(summary.recruiting_departments, 3);
    }

    #[test]
    fn test_empty_pipeline() {
        let summary = summarize_recruitment(&[]);
        assert_eq!(summary.open_positions, 0);
        assert_eq!(summary.recruiting_departments, 0);
    }
}
