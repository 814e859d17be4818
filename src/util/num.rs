/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: f64 = 9_007_199_254_740_991.0;

/// Returns `true` if `value` is a whole number in `0..=MAX_SAFE_INT`.
///
/// ## Example
/// ```
/// use geowalle::util::num::is_safe_count;
///
/// assert!(is_safe_count(0.0));
/// assert!(is_safe_count(12.0));
/// assert!(!is_safe_count(-1.0));
/// assert!(!is_safe_count(2.5));
/// assert!(!is_safe_count(f64::INFINITY));
/// ```
#[must_use]
pub fn is_safe_count(value: f64) -> bool {
    value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= MAX_SAFE_INT
}

/// Safely converts an `f64` to `usize` if the value is a whole number that
/// fits.
///
/// ## Errors
/// Returns `Err(error)` for negative, fractional, non-finite or oversized
/// values.
///
/// ## Example
/// ```
/// use geowalle::util::num::f64_to_usize_checked;
///
/// assert_eq!(f64_to_usize_checked(5.0, "bad"), Ok(5));
/// assert_eq!(f64_to_usize_checked(5.5, "bad"), Err("bad"));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_usize_checked<E>(value: f64, error: E) -> Result<usize, E> {
    if !is_safe_count(value) {
        return Err(error);
    }
    usize::try_from(value as u64).map_err(|_| error)
}

/// Safely converts a `usize` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_INT`.
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64_checked<E>(value: usize, error: E) -> Result<f64, E> {
    let converted = value as f64;
    if converted > MAX_SAFE_INT {
        return Err(error);
    }
    Ok(converted)
}
