//! Arithmetic means over groups of staff records.
//!
//! Every mean here is guarded: an empty group yields zero rather than a
//! division by zero.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::StaffRecord;

/// Mean salary, rounded to the nearest whole unit (halves up).
///
/// The sum is accumulated as a [`Decimal`] so large rosters do not lose
/// precision before the division.
///
/// # Examples
///
/// ```
/// use workforce_report::aggregation::mean_salary;
///
/// assert_eq!(mean_salary(&[]), 0);
/// ```
pub fn mean_salary<'a, I>(staff: I) -> u64
where
    I: IntoIterator<Item = &'a StaffRecord>,
{
    let (sum, count) = staff
        .into_iter()
        .fold((Decimal::ZERO, 0u64), |(sum, count), record| {
            (sum + Decimal::from(record.salary), count + 1)
        });

    if count == 0 {
        return 0;
    }

    (sum / Decimal::from(count))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(0)
}

/// Mean performance rating, unrounded.
pub fn mean_performance<'a, I>(staff: I) -> f64
where
    I: IntoIterator<Item = &'a StaffRecord>,
{
    mean_of(staff.into_iter().map(|record| record.performance_rating))
}

/// Mean attendance rate, unrounded.
pub fn mean_attendance<'a, I>(staff: I) -> f64
where
    I: IntoIterator<Item = &'a StaffRecord>,
{
    mean_of(staff.into_iter().map(|record| record.attendance_rate))
}

fn mean_of(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}
