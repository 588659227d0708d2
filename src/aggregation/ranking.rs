//! Performance ranking.

use crate::models::{RankedPerformer, StaffRecord};

/// Number of staff listed in the top performer ranking.
pub const TOP_PERFORMER_COUNT: usize = 5;

/// Ranks staff by performance rating, best first, and keeps the first `limit`.
///
/// The sort is stable: staff with equal ratings keep their relative order
/// from `staff`. No secondary key is applied. The input is not reordered.
///
/// # Examples
///
/// ```
/// use workforce_report::aggregation::rank_top_performers;
///
/// assert!(rank_top_performers(&[], 5).is_empty());
/// ```
pub fn rank_top_performers(staff: &[StaffRecord], limit: usize) -> Vec<RankedPerformer> {
    let mut ranked: Vec<&StaffRecord> = staff.iter().collect();
    ranked.sort_by(|a, b| b.performance_rating.total_cmp(&a.performance_rating));

    ranked
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(position, record)| RankedPerformer {
            rank: position + 1,
            id: record.id.clone(),
            name: record.name.clone(),
            department: record.department.clone(),
            role: record.role.clone(),
            performance_rating: record.performance_rating,
            attendance_rate: record.attendance_rate,
            salary: record.salary,
            join_date: record.join_date,
        })
        .collect()
}
