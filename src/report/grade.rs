//! Letter grades for department performance.

use serde::{Deserialize, Serialize};

use super::format::round_rating;

/// Letter grade awarded from an average performance rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerformanceGrade {
    /// 4.5 and above.
    #[serde(rename = "A+")]
    APlus,
    /// 4.0 to below 4.5.
    A,
    /// 3.5 to below 4.0.
    #[serde(rename = "B+")]
    BPlus,
    /// 3.0 to below 3.5.
    B,
    /// Below 3.0.
    C,
}

impl PerformanceGrade {
    /// Grades an average rating.
    ///
    /// The average is first rounded to one decimal, the precision printed
    /// next to the grade, so the grade always agrees with the displayed
    /// rating.
    ///
    /// # Examples
    ///
    /// ```
    /// use workforce_report::report::PerformanceGrade;
    ///
    /// assert_eq!(PerformanceGrade::from_average(4.5), PerformanceGrade::APlus);
    /// assert_eq!(PerformanceGrade::from_average(4.46), PerformanceGrade::APlus);
    /// assert_eq!(PerformanceGrade::from_average(4.44), PerformanceGrade::A);
    /// assert_eq!(PerformanceGrade::from_average(2.9), PerformanceGrade::C);
    /// ```
    pub fn from_average(average: f64) -> Self {
        let shown = round_rating(average);
        if shown >= 4.5 {
            PerformanceGrade::APlus
        } else if shown >= 4.0 {
            PerformanceGrade::A
        } else if shown >= 3.5 {
            PerformanceGrade::BPlus
        } else if shown >= 3.0 {
            PerformanceGrade::B
        } else {
            PerformanceGrade::C
        }
    }

    /// Display label, e.g. `"B+"`.
    pub fn label(&self) -> &'static str {
        match self {
            PerformanceGrade::APlus => "A+",
            PerformanceGrade::A => "A",
            PerformanceGrade::BPlus => "B+",
            PerformanceGrade::B => "B",
            PerformanceGrade::C => "C",
        }
    }
}
