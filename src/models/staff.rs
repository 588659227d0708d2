//! Staff record model and related types.
//!
//! This module defines the [`StaffRecord`] struct and [`StaffStatus`] enum
//! for representing members of the workforce roster.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Upper bound of the performance rating scale.
pub const MAX_PERFORMANCE_RATING: f64 = 5.0;

/// Upper bound of the attendance rate scale.
pub const MAX_ATTENDANCE_RATE: f64 = 100.0;

/// Whether a staff member is currently on the active roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffStatus {
    /// Currently employed and working.
    Active,
    /// On the roster but not currently working.
    Inactive,
}

/// Represents one member of staff in the reporting period snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffRecord {
    /// Unique identifier for the staff member.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Department label. Compared exactly, with no normalization.
    pub department: String,
    /// Job role or position title.
    pub role: String,
    /// Roster status.
    pub status: StaffStatus,
    /// Annual salary in whole currency units.
    pub salary: u64,
    /// Performance rating in [0, 5].
    pub performance_rating: f64,
    /// Attendance rate as a percentage in [0, 100].
    pub attendance_rate: f64,
    /// The date the staff member joined.
    pub join_date: NaiveDate,
    /// Opaque avatar reference for presentation layers.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl StaffRecord {
    /// Returns true if the staff member is on the active roster.
    ///
    /// # Examples
    ///
    /// ```
    /// use workforce_report::models::{StaffRecord, StaffStatus};
    /// use chrono::NaiveDate;
    ///
    /// let record = StaffRecord {
    ///     id: "emp_001".to_string(),
    ///     name: "Sarah Johnson".to_string(),
    ///     department: "Engineering".to_string(),
    ///     role: "Senior Developer".to_string(),
    ///     status: StaffStatus::Active,
    ///     salary: 95_000,
    ///     performance_rating: 4.8,
    ///     attendance_rate: 96.0,
    ///     join_date: NaiveDate::from_ymd_opt(2022, 3, 15).unwrap(),
    ///     avatar: None,
    /// };
    /// assert!(record.is_active());
    /// ```
    pub fn is_active(&self) -> bool {
        self.status == StaffStatus::Active
    }

    /// Checks the record against the shape the aggregation engine assumes.
    ///
    /// Returns the first problem found as [`EngineError::InvalidStaff`].
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |field: &str, message: String| EngineError::InvalidStaff {
            id: self.id.clone(),
            field: field.to_string(),
            message,
        };

        if self.id.trim().is_empty() {
            return Err(invalid("id", "must not be blank".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(invalid("name", "must not be blank".to_string()));
        }
        if self.department.trim().is_empty() {
            return Err(invalid("department", "must not be blank".to_string()));
        }
        if !self.performance_rating.is_finite()
            || !(0.0..=MAX_PERFORMANCE_RATING).contains(&self.performance_rating)
        {
            return Err(invalid(
                "performance_rating",
                format!(
                    "{} is outside the range 0 to {}",
                    self.performance_rating, MAX_PERFORMANCE_RATING
                ),
            ));
        }
        if !self.attendance_rate.is_finite()
            || !(0.0..=MAX_ATTENDANCE_RATE).contains(&self.attendance_rate)
        {
            return Err(invalid(
                "attendance_rate",
                format!(
                    "{} is outside the range 0 to {}",
                    self.attendance_rate, MAX_ATTENDANCE_RATE
                ),
            ));
        }
        Ok(())
    }
}
