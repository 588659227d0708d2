//! Cell and text formatting applied at assembly time.
//!
//! Exporters receive finished strings; they never format numbers or dates
//! themselves.

use chrono::NaiveDate;

use crate::aggregation::round_half_up;

/// Inserts comma thousands separators, e.g. `85000` becomes `"85,000"`.
///
/// # Examples
///
/// ```
/// use workforce_report::report::format_thousands;
///
/// assert_eq!(format_thousands(0), "0");
/// assert_eq!(format_thousands(999), "999");
/// assert_eq!(format_thousands(1_234_567), "1,234,567");
/// ```
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a whole currency amount, e.g. `"$85,000"`.
pub fn format_currency(value: u64) -> String {
    format!("${}", format_thousands(value))
}

/// Rounds a rating to one decimal place, halves up.
pub fn round_rating(value: f64) -> f64 {
    round_half_up(value * 10.0) as f64 / 10.0
}

/// Formats a rating with exactly one decimal, e.g. `"4.5"`.
pub fn format_rating(value: f64) -> String {
    format!("{:.1}", round_rating(value))
}

/// Formats a whole percentage, e.g. `"90%"`.
pub fn format_percent(value: u32) -> String {
    format!("{value}%")
}

/// Short month and year, e.g. `"Mar 2022"`.
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Weekday with short month and day, e.g. `"Monday, Jan 15"`.
pub fn format_weekday_date(date: NaiveDate) -> String {
    date.format("%A, %b %-d").to_string()
}

/// Long date, e.g. `"February 14, 2024"`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Numeric month/day/year, e.g. `"3/15/2024"`.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
