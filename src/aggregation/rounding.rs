//! Rounding helpers shared by every aggregation rule.

/// Rounds to the nearest integer, with halves rounded towards positive
/// infinity.
///
/// `f64::round` rounds halves away from zero, which differs for negative
/// values: `-2.5` becomes `-3` there and `-2` here.
///
/// # Examples
///
/// ```
/// use workforce_report::aggregation::round_half_up;
///
/// assert_eq!(round_half_up(2.5), 3);
/// assert_eq!(round_half_up(-2.5), -2);
/// assert_eq!(round_half_up(-2.6), -3);
/// ```
pub fn round_half_up(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    (value + 0.5).floor() as i64
}

/// Rounds a non-negative quantity such as a percentage to a `u32`.
///
/// Negative or non-finite inputs yield 0.
pub fn round_to_u32(value: f64) -> u32 {
    round_half_up(value).clamp(0, i64::from(u32::MAX)) as u32
}
