//! Derived metric models.
//!
//! This module contains [`DerivedMetrics`], the single value produced by an
//! aggregation pass, and the rollups, distributions, rankings and trend
//! deltas it is made of. The live display and the report assembler both
//! read from the same value so they can never disagree.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Per-department rollup over the staff roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentRollup {
    /// The exact department label.
    pub department: String,
    /// Number of staff in the department.
    pub staff_count: usize,
    /// Mean salary, rounded to the nearest whole unit.
    pub average_salary: u64,
    /// Mean performance rating, unrounded so it can be ranked.
    pub average_performance: f64,
    /// Mean attendance rate, rounded to the nearest whole percent.
    pub average_attendance: u32,
    /// Mean performance on a 0-100 scale (`round(mean * 20)`).
    pub performance_percent: u32,
}

/// One of the four fixed salary bands.
///
/// Bands are half-open `[min, max)` intervals; a boundary salary belongs to
/// the higher band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryBand {
    /// `[0, 50000)`
    Under50k,
    /// `[50000, 70000)`
    From50kTo70k,
    /// `[70000, 90000)`
    From70kTo90k,
    /// `[90000, ∞)`
    Over90k,
}

impl SalaryBand {
    /// All bands in ascending order.
    pub const ALL: [SalaryBand; 4] = [
        SalaryBand::Under50k,
        SalaryBand::From50kTo70k,
        SalaryBand::From70kTo90k,
        SalaryBand::Over90k,
    ];

    /// Inclusive lower bound of the band.
    pub fn min(&self) -> u64 {
        match self {
            SalaryBand::Under50k => 0,
            SalaryBand::From50kTo70k => 50_000,
            SalaryBand::From70kTo90k => 70_000,
            SalaryBand::Over90k => 90_000,
        }
    }

    /// Exclusive upper bound of the band, `None` for the open-ended band.
    pub fn max(&self) -> Option<u64> {
        match self {
            SalaryBand::Under50k => Some(50_000),
            SalaryBand::From50kTo70k => Some(70_000),
            SalaryBand::From70kTo90k => Some(90_000),
            SalaryBand::Over90k => None,
        }
    }

    /// Short display label, e.g. `"50-70K"`.
    pub fn label(&self) -> &'static str {
        match self {
            SalaryBand::Under50k => "<50K",
            SalaryBand::From50kTo70k => "50-70K",
            SalaryBand::From70kTo90k => "70-90K",
            SalaryBand::Over90k => ">90K",
        }
    }

    /// Returns true if `salary` falls inside this band.
    pub fn contains(&self, salary: u64) -> bool {
        salary >= self.min() && self.max().is_none_or(|max| salary < max)
    }
}

/// Staff count for a single salary band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBucket {
    /// The band.
    pub band: SalaryBand,
    /// Number of staff whose salary falls in the band.
    pub count: usize,
}

/// Lowest and highest salary on the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    /// Lowest salary.
    pub min: u64,
    /// Highest salary.
    pub max: u64,
}

/// A staff member's position in the performance ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPerformer {
    /// One-based rank.
    pub rank: usize,
    /// Staff identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Department label.
    pub department: String,
    /// Role.
    pub role: String,
    /// Performance rating.
    pub performance_rating: f64,
    /// Attendance rate.
    pub attendance_rate: f64,
    /// Annual salary.
    pub salary: u64,
    /// Join date.
    pub join_date: NaiveDate,
}

/// One day inside the trailing attendance window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceWindowDay {
    /// Calendar date.
    pub date: NaiveDate,
    /// Short weekday label, e.g. `"Mon"`.
    pub weekday: String,
    /// Present count.
    pub present: u32,
    /// Absent count.
    pub absent: u32,
    /// Late count.
    pub late: u32,
    /// `present / (present + absent)` as a fraction.
    pub rate: f64,
    /// `rate` as a rounded whole percent.
    pub rate_percent: u32,
    /// `present + absent + late`.
    pub total: u64,
}

/// The chronologically latest attendance days, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceWindow {
    /// Days in the window, in ascending date order.
    pub days: Vec<AttendanceWindowDay>,
    /// Mean present count per day in the window, rounded.
    pub average_present: u32,
    /// Mean absent count per day in the window, rounded.
    pub average_absent: u32,
}

/// Signed percentage change between a current and a baseline value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendDelta {
    /// Rounded percentage change; 0 when the baseline is not positive.
    pub percent: i64,
    /// True only when the current value is strictly greater.
    pub is_positive: bool,
}

/// Comparison values from a previous period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodBaseline {
    /// Previous total staff count.
    pub total_staff: u64,
    /// Previous average salary.
    pub average_salary: u64,
    /// Previous average attendance rate.
    pub average_attendance: f64,
    /// Previous average performance rating.
    pub average_performance: f64,
}

/// Trend deltas for the headline metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricTrends {
    /// Total staff against the baseline.
    pub total_staff: TrendDelta,
    /// Average salary against the baseline.
    pub average_salary: TrendDelta,
    /// Average attendance against the baseline.
    pub average_attendance: TrendDelta,
    /// Average performance against the baseline.
    pub average_performance: TrendDelta,
}

/// Everything one aggregation pass derives from a [`super::RecordSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// The instant the pass was evaluated against.
    pub computed_at: DateTime<Utc>,
    /// Total staff on the roster.
    pub total_staff: usize,
    /// Staff with active status.
    pub active_staff: usize,
    /// Staff with inactive status.
    pub inactive_staff: usize,
    /// Mean salary, rounded. Zero for an empty roster.
    pub average_salary: u64,
    /// Lowest and highest salary. `None` for an empty roster.
    pub salary_range: Option<SalaryRange>,
    /// Mean attendance rate, rounded. Zero for an empty roster.
    pub average_attendance: u32,
    /// Mean performance rating, unrounded. Zero for an empty roster.
    pub average_performance: f64,
    /// Mean performance as a percentage of the maximum rating.
    pub performance_percent: u32,
    /// Recruitment entries not yet hired.
    pub open_positions: usize,
    /// Distinct departments across all recruitment entries.
    pub recruiting_departments: usize,
    /// Staff who joined inside the trailing recent-hire window.
    pub recent_hires: usize,
    /// Staff rated at or above the high-performer threshold.
    pub high_performers: usize,
    /// High performers as a rounded percentage of total staff.
    pub high_performer_percent: u32,
    /// Staff below the attendance threshold.
    pub low_attendance: usize,
    /// Staff rated below the review threshold.
    pub pending_reviews: usize,
    /// Department rollups in first-appearance order.
    pub departments: Vec<DepartmentRollup>,
    /// Staff counts per salary band, in ascending band order.
    pub salary_distribution: Vec<SalaryBucket>,
    /// Highest rated staff, best first.
    pub top_performers: Vec<RankedPerformer>,
    /// Trailing attendance window.
    pub attendance_window: AttendanceWindow,
    /// Trend deltas, present only when a baseline was supplied.
    pub trends: Option<MetricTrends>,
}
