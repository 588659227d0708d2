//! Daily attendance model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headcounts recorded for a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDay {
    /// The calendar date. Unique within a collection.
    pub date: NaiveDate,
    /// Number of staff present.
    pub present: u32,
    /// Number of staff absent.
    pub absent: u32,
    /// Number of staff who arrived late.
    pub late: u32,
}

impl AttendanceDay {
    /// Attendance rate for the day as a fraction in [0, 1].
    ///
    /// The denominator is `present + absent`; late arrivals are not part of
    /// the rate. Returns 0 when nobody was recorded as present or absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use workforce_report::models::AttendanceDay;
    /// use chrono::NaiveDate;
    ///
    /// let day = AttendanceDay {
    ///     date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
    ///     present: 18,
    ///     absent: 2,
    ///     late: 1,
    /// };
    /// assert_eq!(day.rate(), 0.9);
    /// assert_eq!(day.total(), 21);
    /// ```
    pub fn rate(&self) -> f64 {
        let denominator = u64::from(self.present) + u64::from(self.absent);
        if denominator == 0 {
            return 0.0;
        }
        f64::from(self.present) / denominator as f64
    }

    /// Total headcount for the day, including late arrivals.
    pub fn total(&self) -> u64 {
        u64::from(self.present) + u64::from(self.absent) + u64::from(self.late)
    }
}
