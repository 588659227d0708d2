//! Top department selection.

use crate::models::DepartmentRollup;

/// Returns the department with the highest mean performance rating.
///
/// The maximum is computed once over all rollups; the result is the first
/// rollup, in grouping order, whose mean equals it exactly. Ties therefore go
/// to the department that appeared first in the roster. Returns `None` when
/// there are no departments.
///
/// # Examples
///
/// ```
/// use workforce_report::insights::top_department;
///
/// assert!(top_department(&[]).is_none());
/// ```
pub fn top_department(departments: &[DepartmentRollup]) -> Option<&DepartmentRollup> {
    let best = departments
        .iter()
        .map(|rollup| rollup.average_performance)
        .fold(f64::NEG_INFINITY, f64::max);

    departments
        .iter()
        .find(|rollup| rollup.average_performance == best)
}
