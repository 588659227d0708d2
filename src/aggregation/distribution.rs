//! Salary band distribution.

use crate::models::{SalaryBand, SalaryBucket, StaffRecord};

/// Returns the single band that `salary` falls into.
///
/// # Examples
///
/// ```
/// use workforce_report::aggregation::salary_band;
/// use workforce_report::models::SalaryBand;
///
/// assert_eq!(salary_band(49_999), SalaryBand::Under50k);
/// assert_eq!(salary_band(50_000), SalaryBand::From50kTo70k);
/// assert_eq!(salary_band(90_000), SalaryBand::Over90k);
/// ```
pub fn salary_band(salary: u64) -> SalaryBand {
    match salary {
        0..50_000 => SalaryBand::Under50k,
        50_000..70_000 => SalaryBand::From50kTo70k,
        70_000..90_000 => SalaryBand::From70kTo90k,
        _ => SalaryBand::Over90k,
    }
}

/// Counts staff per salary band, in ascending band order.
///
/// All four bands are always present, with a zero count when empty.
pub fn salary_distribution(staff: &[StaffRecord]) -> Vec<SalaryBucket> {
    let mut counts = [0usize; SalaryBand::ALL.len()];
    for record in staff {
        let band = salary_band(record.salary);
        if let Some(slot) = SalaryBand::ALL.iter().position(|b| *b == band) {
            counts[slot] += 1;
        }
    }

    SalaryBand::ALL
        .iter()
        .zip(counts)
        .map(|(band, count)| SalaryBucket { band: *band, count })
        .collect()
}
