//! Trend deltas against a comparison baseline.

use super::rounding::round_half_up;
use super::workforce::WorkforceSummary;
use crate::models::{MetricTrends, PeriodBaseline, TrendDelta};

/// Computes the signed percentage change from `previous` to `current`.
///
/// `percent` is `round(((current - previous) / previous) * 100)` when
/// `previous > 0` and 0 otherwise. `is_positive` is true only when
/// `current` is strictly greater than `previous`. Every headline trend goes
/// through this one function.
///
/// # Examples
///
/// ```
/// use workforce_report::aggregation::calc_trend;
///
/// let up = calc_trend(110.0, 100.0);
/// assert_eq!(up.percent, 10);
/// assert!(up.is_positive);
///
/// let flat = calc_trend(100.0, 100.0);
/// assert_eq!(flat.percent, 0);
/// assert!(!flat.is_positive);
///
/// let from_zero = calc_trend(50.0, 0.0);
/// assert_eq!(from_zero.percent, 0);
/// assert!(from_zero.is_positive);
/// ```
pub fn calc_trend(current: f64, previous: f64) -> TrendDelta {
    let percent = if previous > 0.0 {
        round_half_up((current - previous) / previous * 100.0)
    } else {
        0
    };

    TrendDelta {
        percent,
        is_positive: current > previous,
    }
}

/// Computes trend deltas for the headline workforce metrics.
pub fn compute_trends(summary: &WorkforceSummary, baseline: &PeriodBaseline) -> MetricTrends {
    MetricTrends {
        total_staff: calc_trend(summary.total_staff as f64, baseline.total_staff as f64),
        average_salary: calc_trend(
            summary.average_salary as f64,
            baseline.average_salary as f64,
        ),
        average_attendance: calc_trend(
            f64::from(summary.average_attendance),
            baseline.average_attendance,
        ),
        average_performance: calc_trend(
            summary.average_performance,
            baseline.average_performance,
        ),
    }
}
