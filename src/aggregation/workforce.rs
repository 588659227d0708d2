//! Roster-wide scalar metrics: headcounts, averages and threshold counts.

use chrono::{DateTime, Duration, NaiveTime, Utc};

use super::averages::{mean_attendance, mean_performance, mean_salary};
use super::rounding::round_to_u32;
use crate::models::{MAX_PERFORMANCE_RATING, SalaryRange, StaffRecord};

/// Length of the trailing window that counts as a recent hire.
pub const RECENT_HIRE_WINDOW_DAYS: i64 = 30;

/// Ratings at or above this are high performers.
pub const HIGH_PERFORMER_THRESHOLD: f64 = 4.5;

/// Ratings below this are due a performance review.
pub const REVIEW_THRESHOLD: f64 = 4.0;

/// Attendance rates below this are flagged.
pub const LOW_ATTENDANCE_THRESHOLD: f64 = 90.0;

/// Scalar metrics over the whole roster.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkforceSummary {
    /// Total staff.
    pub total_staff: usize,
    /// Active staff.
    pub active_staff: usize,
    /// Inactive staff.
    pub inactive_staff: usize,
    /// Mean salary, rounded.
    pub average_salary: u64,
    /// Lowest and highest salary.
    pub salary_range: Option<SalaryRange>,
    /// Mean attendance, rounded.
    pub average_attendance: u32,
    /// Mean performance, unrounded.
    pub average_performance: f64,
    /// Mean performance as a percentage of the maximum rating.
    pub performance_percent: u32,
    /// Recent hires.
    pub recent_hires: usize,
    /// High performers.
    pub high_performers: usize,
    /// High performers as a percentage of total staff.
    pub high_performer_percent: u32,
    /// Staff below the attendance threshold.
    pub low_attendance: usize,
    /// Staff below the review threshold.
    pub pending_reviews: usize,
}

/// Returns true if `record` joined strictly after `now - 30 days`.
///
/// The join date is taken as midnight UTC, so a join date exactly on the
/// window boundary is excluded.
///
/// # Examples
///
/// ```
/// use workforce_report::aggregation::is_recent_hire;
/// use workforce_report::models::{StaffRecord, StaffStatus};
/// use chrono::{NaiveDate, TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2024, 2, 14, 0, 0, 0).unwrap();
/// let mut record = StaffRecord {
///     id: "emp_001".to_string(),
///     name: "New Starter".to_string(),
///     department: "Sales".to_string(),
///     role: "Account Executive".to_string(),
///     status: StaffStatus::Active,
///     salary: 60_000,
///     performance_rating: 4.0,
///     attendance_rate: 95.0,
///     join_date: NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
///     avatar: None,
/// };
/// assert!(is_recent_hire(&record, now));
///
/// record.join_date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// assert!(!is_recent_hire(&record, now));
/// ```
pub fn is_recent_hire(record: &StaffRecord, now: DateTime<Utc>) -> bool {
    let joined = record.join_date.and_time(NaiveTime::MIN).and_utc();
    match now.checked_sub_signed(Duration::days(RECENT_HIRE_WINDOW_DAYS)) {
        Some(cutoff) => joined > cutoff,
        // The window reaches past the earliest representable instant.
        None => true,
    }
}

/// Computes headcounts, averages and threshold counts for the roster.
///
/// An empty roster yields zeros and no salary range.
pub fn summarize_workforce(staff: &[StaffRecord], now: DateTime<Utc>) -> WorkforceSummary {
    let total_staff = staff.len();
    let active_staff = staff.iter().filter(|record| record.is_active()).count();
    let high_performers = staff
        .iter()
        .filter(|record| record.performance_rating >= HIGH_PERFORMER_THRESHOLD)
        .count();

    let average_performance = mean_performance(staff);

    let salary_range = staff
        .iter()
        .map(|record| record.salary)
        .fold(None, |range: Option<SalaryRange>, salary| {
            Some(match range {
                None => SalaryRange {
                    min: salary,
                    max: salary,
                },
                Some(range) => SalaryRange {
                    min: range.min.min(salary),
                    max: range.max.max(salary),
                },
            })
        });

    let high_performer_percent = if total_staff == 0 {
        0
    } else {
        round_to_u32(high_performers as f64 / total_staff as f64 * 100.0)
    };

    WorkforceSummary {
        total_staff,
        active_staff,
        inactive_staff: total_staff - active_staff,
        average_salary: mean_salary(staff),
        salary_range,
        average_attendance: round_to_u32(mean_attendance(staff)),
        average_performance,
        performance_percent: round_to_u32(average_performance / MAX_PERFORMANCE_RATING * 100.0),
        recent_hires: staff
            .iter()
            .filter(|record| is_recent_hire(record, now))
            .count(),
        high_performers,
        high_performer_percent,
        low_attendance: staff
            .iter()
            .filter(|record| record.attendance_rate < LOW_ATTENDANCE_THRESHOLD)
            .count(),
        pending_reviews: staff
            .iter()
            .filter(|record| record.performance_rating < REVIEW_THRESHOLD)
            .count(),
    }
}
