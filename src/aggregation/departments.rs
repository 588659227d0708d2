//! Department grouping and per-department rollups.

use std::collections::HashMap;

use super::averages::{mean_attendance, mean_performance, mean_salary};
use super::rounding::round_to_u32;
use crate::models::{DepartmentRollup, StaffRecord};

/// Groups staff by exact department label and rolls each group up.
///
/// Labels are compared case-sensitively with no trimming. Groups are
/// returned in order of each label's first appearance in `staff`, and every
/// record lands in exactly one group.
///
/// # Examples
///
/// ```
/// use workforce_report::aggregation::group_by_department;
///
/// assert!(group_by_department(&[]).is_empty());
/// ```
pub fn group_by_department(staff: &[StaffRecord]) -> Vec<DepartmentRollup> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&StaffRecord>)> = Vec::new();

    for record in staff {
        let slot = *index.entry(record.department.as_str()).or_insert_with(|| {
            groups.push((record.department.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(record);
    }

    groups
        .into_iter()
        .map(|(department, members)| {
            let average_performance = mean_performance(members.iter().copied());
            DepartmentRollup {
                department: department.to_string(),
                staff_count: members.len(),
                average_salary: mean_salary(members.iter().copied()),
                average_performance,
                average_attendance: round_to_u32(mean_attendance(members.iter().copied())),
                performance_percent: round_to_u32(average_performance * 20.0),
            }
        })
        .collect()
}
