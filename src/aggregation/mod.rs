//! Aggregation engine for the workforce report.
//!
//! This module contains the pure functions that turn a [`RecordSnapshot`]
//! into [`DerivedMetrics`]: roster averages and threshold counts, department
//! rollups, the salary band distribution, the performance ranking, trend
//! deltas, and the trailing attendance window.
//!
//! [`RecordSnapshot`]: crate::models::RecordSnapshot
//! [`DerivedMetrics`]: crate::models::DerivedMetrics

mod attendance_window;
mod averages;
mod departments;
mod distribution;
mod engine;
mod ranking;
mod recruitment;
mod rounding;
mod trend;
mod workforce;

pub use attendance_window::{ATTENDANCE_WINDOW_DAYS, attendance_window};
pub use averages::{mean_attendance, mean_performance, mean_salary};
pub use departments::group_by_department;
pub use distribution::{salary_band, salary_distribution};
pub use engine::compute_metrics;
pub use ranking::{TOP_PERFORMER_COUNT, rank_top_performers};
pub use recruitment::{RecruitmentSummary, summarize_recruitment};
pub use rounding::{round_half_up, round_to_u32};
pub use trend::{calc_trend, compute_trends};
pub use workforce::{
    HIGH_PERFORMER_THRESHOLD, LOW_ATTENDANCE_THRESHOLD, RECENT_HIRE_WINDOW_DAYS, REVIEW_THRESHOLD,
    WorkforceSummary, is_recent_hire, summarize_workforce,
};
