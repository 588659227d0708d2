//! Trailing attendance window.

use super::rounding::round_to_u32;
use crate::models::{AttendanceDay, AttendanceWindow, AttendanceWindowDay};

/// Number of days in the weekly attendance window.
pub const ATTENDANCE_WINDOW_DAYS: usize = 7;

/// Selects the `days` chronologically latest entries, oldest first.
///
/// Selection is by date, not by position in `attendance`. Each day carries
/// both the rate (`present / (present + absent)`) and the total
/// (`present + absent + late`). The window means are over the selected
/// days and are zero when the window is empty.
pub fn attendance_window(attendance: &[AttendanceDay], days: usize) -> AttendanceWindow {
    let mut sorted: Vec<&AttendanceDay> = attendance.iter().collect();
    sorted.sort_by_key(|day| day.date);
    let start = sorted.len().saturating_sub(days);
    let selected = &sorted[start..];

    let window_days: Vec<AttendanceWindowDay> = selected
        .iter()
        .map(|day| {
            let rate = day.rate();
            AttendanceWindowDay {
                date: day.date,
                weekday: day.date.format("%a").to_string(),
                present: day.present,
                absent: day.absent,
                late: day.late,
                rate,
                rate_percent: round_to_u32(rate * 100.0),
                total: day.total(),
            }
        })
        .collect();

    let (average_present, average_absent) = if selected.is_empty() {
        (0, 0)
    } else {
        let count = selected.len() as f64;
        let present: u64 = selected.iter().map(|day| u64::from(day.present)).sum();
        let absent: u64 = selected.iter().map(|day| u64::from(day.absent)).sum();
        (
            round_to_u32(present as f64 / count),
            round_to_u32(absent as f64 / count),
        )
    };

    AttendanceWindow {
        days: window_days,
        average_present,
        average_absent,
    }
}
