//! The immutable input snapshot handed to the aggregation engine.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{AttendanceDay, RecruitmentEntry, StaffRecord};
use crate::error::{EngineError, EngineResult};

/// The three record collections for one reporting period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordSnapshot {
    /// Staff roster, in source order.
    #[serde(default)]
    pub staff: Vec<StaffRecord>,
    /// Daily attendance headcounts, in any order.
    #[serde(default)]
    pub attendance: Vec<AttendanceDay>,
    /// Recruitment pipeline entries, in source order.
    #[serde(default)]
    pub recruitment: Vec<RecruitmentEntry>,
}

impl RecordSnapshot {
    /// Validates every record, failing on the first malformed one.
    ///
    /// Empty collections are valid.
    pub fn validate(&self) -> EngineResult<()> {
        for record in &self.staff {
            record.validate()?;
        }

        let mut seen = HashSet::with_capacity(self.attendance.len());
        for day in &self.attendance {
            if !seen.insert(day.date) {
                return Err(EngineError::DuplicateAttendanceDate { date: day.date });
            }
        }

        for entry in &self.recruitment {
            entry.validate()?;
        }
        Ok(())
    }
}
