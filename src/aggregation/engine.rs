//! The aggregation pass: one snapshot in, one [`DerivedMetrics`] out.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::attendance_window::{ATTENDANCE_WINDOW_DAYS, attendance_window};
use super::departments::group_by_department;
use super::distribution::salary_distribution;
use super::ranking::{TOP_PERFORMER_COUNT, rank_top_performers};
use super::recruitment::summarize_recruitment;
use super::trend::compute_trends;
use super::workforce::summarize_workforce;
use crate::models::{DerivedMetrics, PeriodBaseline, RecordSnapshot};

/// Computes every derived metric for a snapshot.
///
/// This is a pure, total function: it never mutates `snapshot`, never reads
/// the system clock (`now` is explicit), and turns empty collections into
/// zero counts and empty groupings instead of failing. Validate the
/// snapshot first with [`RecordSnapshot::validate`] if it comes from an
/// untrusted source.
///
/// Trends are only computed when a `baseline` is supplied.
///
/// # Examples
///
/// ```
/// use workforce_report::aggregation::compute_metrics;
/// use workforce_report::models::RecordSnapshot;
/// use chrono::{TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2024, 2, 14, 9, 0, 0).unwrap();
/// let metrics = compute_metrics(&RecordSnapshot::default(), now, None);
///
/// assert_eq!(metrics.total_staff, 0);
/// assert_eq!(metrics.average_salary, 0);
/// assert!(metrics.departments.is_empty());
/// assert!(metrics.trends.is_none());
/// ```
pub fn compute_metrics(
    snapshot: &RecordSnapshot,
    now: DateTime<Utc>,
    baseline: Option<&PeriodBaseline>,
) -> DerivedMetrics {
    let workforce = summarize_workforce(&snapshot.staff, now);
    let recruitment = summarize_recruitment(&snapshot.recruitment);
    let departments = group_by_department(&snapshot.staff);
    let trends = baseline.map(|baseline| compute_trends(&workforce, baseline));

    debug!(
        staff = workforce.total_staff,
        departments = departments.len(),
        attendance_days = snapshot.attendance.len(),
        recruitment_entries = snapshot.recruitment.len(),
        with_baseline = trends.is_some(),
        "Computed derived metrics"
    );

    DerivedMetrics {
        computed_at: now,
        total_staff: workforce.total_staff,
        active_staff: workforce.active_staff,
        inactive_staff: workforce.inactive_staff,
        average_salary: workforce.average_salary,
        salary_range: workforce.salary_range,
        average_attendance: workforce.average_attendance,
        average_performance: workforce.average_performance,
        performance_percent: workforce.performance_percent,
        open_positions: recruitment.open_positions,
        recruiting_departments: recruitment.recruiting_departments,
        recent_hires: workforce.recent_hires,
        high_performers: workforce.high_performers,
        high_performer_percent: workforce.high_performer_percent,
        low_attendance: workforce.low_attendance,
        pending_reviews: workforce.pending_reviews,
        departments,
        salary_distribution: salary_distribution(&snapshot.staff),
        top_performers: rank_top_performers(&snapshot.staff, TOP_PERFORMER_COUNT),
        attendance_window: attendance_window(&snapshot.attendance, ATTENDANCE_WINDOW_DAYS),
        trends,
    }
}
