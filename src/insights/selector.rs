//! Qualitative statements derived from the metrics.

use serde::{Deserialize, Serialize};

use super::top_department::top_department;
use crate::models::DerivedMetrics;

/// Which statement an [`Insight`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Department with the best mean performance.
    TopDepartment,
    /// Hires inside the recent-hire window.
    RecentHires,
    /// Staff due a performance review.
    PendingReviews,
    /// Staff below the attendance threshold.
    LowAttendance,
    /// Openings not yet hired.
    OpenPositions,
    /// Staff at or above the high-performer threshold.
    HighPerformers,
}

/// A labelled, computed statement with a static caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// Which statement this is.
    pub kind: InsightKind,
    /// Display label.
    pub label: String,
    /// Computed value, formatted for display.
    pub value: String,
    /// Static caption.
    pub caption: String,
}

impl Insight {
    fn new(kind: InsightKind, label: &str, value: String, caption: &str) -> Self {
        Self {
            kind,
            label: label.to_string(),
            value,
            caption: caption.to_string(),
        }
    }
}

/// Value shown for the top department when there are no staff.
pub const NO_DEPARTMENT: &str = "N/A";

/// Builds the ordered list of insights for a metrics value.
///
/// The order is fixed: top department, recent hires, pending reviews, low
/// attendance, open positions, high performers.
pub fn select_insights(metrics: &DerivedMetrics) -> Vec<Insight> {
    let top = top_department(&metrics.departments)
        .map(|rollup| rollup.department.clone())
        .unwrap_or_else(|| NO_DEPARTMENT.to_string());

    vec![
        Insight::new(
            InsightKind::TopDepartment,
            "Top Department",
            top,
            "Highest average performance rating",
        ),
        Insight::new(
            InsightKind::RecentHires,
            "New Hires",
            metrics.recent_hires.to_string(),
            "Joined in the last 30 days",
        ),
        Insight::new(
            InsightKind::PendingReviews,
            "Pending Reviews",
            metrics.pending_reviews.to_string(),
            "Rated below 4.0 and due for review",
        ),
        Insight::new(
            InsightKind::LowAttendance,
            "Attendance Alerts",
            metrics.low_attendance.to_string(),
            "Attendance below the 90% threshold",
        ),
        Insight::new(
            InsightKind::OpenPositions,
            "Open Positions",
            metrics.open_positions.to_string(),
            "Roles still moving through the hiring pipeline",
        ),
        Insight::new(
            InsightKind::HighPerformers,
            "High Performers",
            format!(
                "{} ({}%)",
                metrics.high_performers, metrics.high_performer_percent
            ),
            "Rated 4.5 or above",
        ),
    ]
}

/// Finds the insight of a given kind.
pub fn find_insight(insights: &[Insight], kind: InsightKind) -> Option<&Insight> {
    insights.iter().find(|insight| insight.kind == kind)
}
