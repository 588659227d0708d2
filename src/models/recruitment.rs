//! Recruitment pipeline model.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Ordered position of an opening in the hiring pipeline.
///
/// Variants are declared in pipeline order, so the derived `Ord` follows
/// the pipeline. `Hired` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    /// Applications are being collected.
    Applied,
    /// Applications are being screened.
    Screening,
    /// Candidates are being interviewed.
    Interview,
    /// An offer has been extended.
    Offer,
    /// The position has been filled.
    Hired,
}

impl PipelineStage {
    /// Returns true for the terminal stage.
    pub fn is_terminal(&self) -> bool {
        *self == PipelineStage::Hired
    }

    /// Capitalized display label, e.g. `"Interview"`.
    pub fn label(&self) -> &'static str {
        match self {
            PipelineStage::Applied => "Applied",
            PipelineStage::Screening => "Screening",
            PipelineStage::Interview => "Interview",
            PipelineStage::Offer => "Offer",
            PipelineStage::Hired => "Hired",
        }
    }
}

/// Hiring priority of an opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Low priority.
    Low,
    /// Medium priority.
    Medium,
    /// High priority.
    High,
}

impl Priority {
    /// Capitalized display label, e.g. `"High"`.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// One opening in the recruitment pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruitmentEntry {
    /// Position title.
    pub position: String,
    /// Department label the opening belongs to.
    pub department: String,
    /// Number of applicants so far.
    pub applicants: u32,
    /// Current pipeline stage.
    pub stage: PipelineStage,
    /// Hiring priority.
    pub priority: Priority,
}

impl RecruitmentEntry {
    /// An opening is still open until it reaches the terminal stage.
    pub fn is_open(&self) -> bool {
        !self.stage.is_terminal()
    }

    /// Checks the entry against the shape the aggregation engine assumes.
    pub fn validate(&self) -> EngineResult<()> {
        if self.position.trim().is_empty() {
            return Err(EngineError::InvalidRecruitment {
                position: self.position.clone(),
                field: "position".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        if self.department.trim().is_empty() {
            return Err(EngineError::InvalidRecruitment {
                position: self.position.clone(),
                field: "department".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        Ok(())
    }
}
