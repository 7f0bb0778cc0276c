//! Two-decimal rounding for reported figures.

/// Rounds a value to two decimal places, half away from zero.
///
/// A machine epsilon is added before scaling so that values such as `1.005`,
/// whose binary representation falls just short of the midpoint, still round
/// up. Non-finite values (infinity, NaN) are returned unchanged.
///
/// # Examples
///
/// ```
/// use invoice_roi::calculation::round_to_cents;
///
/// assert_eq!(round_to_cents(1.466275659824047), 1.47);
/// assert_eq!(round_to_cents(1.005), 1.01);
/// assert_eq!(round_to_cents(f64::INFINITY), f64::INFINITY);
/// assert!(round_to_cents(f64::NAN).is_nan());
/// ```
pub fn round_to_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    ((value + f64::EPSILON) * 100.0).round() / 100.0
}
