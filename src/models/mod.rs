//! Core data models for the workforce report engine.
//!
//! This module contains the input records, the derived metrics, and the
//! logical report structure used throughout the engine.

mod attendance;
mod metrics;
mod recruitment;
mod report;
mod snapshot;
mod staff;

pub use attendance::AttendanceDay;
pub use metrics::{
    AttendanceWindow, AttendanceWindowDay, DepartmentRollup, DerivedMetrics, MetricTrends,
    PeriodBaseline, RankedPerformer, SalaryBand, SalaryBucket, SalaryRange, TrendDelta,
};
pub use recruitment::{PipelineStage, Priority, RecruitmentEntry};
pub use report::{
    Alignment, ColumnSpec, InsightBlock, InsightEntry, Page, PageFooter, PageKind, Report,
    Section, SummaryBlock, SummaryEntry, Table,
};
pub use snapshot::RecordSnapshot;
pub use staff::{MAX_ATTENDANCE_RATE, MAX_PERFORMANCE_RATING, StaffRecord, StaffStatus};
