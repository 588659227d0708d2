//! Request types for the workforce report API.
//!
//! Every endpoint accepts the same body: a record snapshot plus an optional
//! period baseline and an optional evaluation time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceDay, PeriodBaseline, RecordSnapshot, RecruitmentEntry, StaffRecord};

/// Request body for `/metrics`, `/report` and `/report/export`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The staff roster.
    pub staff: Vec<StaffRecord>,
    /// Daily attendance counts.
    #[serde(default)]
    pub attendance: Vec<AttendanceDay>,
    /// Recruitment pipeline entries.
    #[serde(default)]
    pub recruitment: Vec<RecruitmentEntry>,
    /// Prior-period values to compute trends against.
    #[serde(default)]
    pub baseline: Option<PeriodBaseline>,
    /// Evaluation time; defaults to the time the request is handled.
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

impl ReportRequest {
    /// Splits the request into a snapshot, baseline and resolved time.
    pub fn into_parts(self) -> (RecordSnapshot, Option<PeriodBaseline>, DateTime<Utc>) {
        let snapshot = RecordSnapshot {
            staff: self.staff,
            attendance: self.attendance,
            recruitment: self.recruitment,
        };
        (snapshot, self.baseline, self.now.unwrap_or_else(Utc::now))
    }
}
