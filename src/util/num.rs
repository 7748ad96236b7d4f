use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_I64_INT` in absolute
/// value.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Returns
/// - `Ok(f64)`: The converted value if it is safe.
/// - `Err(error)`: If the value is too large.
///
/// ## Example
/// ```
/// use ladle::util::num::{MAX_SAFE_I64_INT, i64_to_f64_checked};
///
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// let big = MAX_SAFE_I64_INT + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_I64_INT.unsigned_abs() {
        return Err(error);
    }
    Ok(value as f64)
}

/// Safely converts a `usize` to an `i64` if and only if it can be
/// represented exactly.
///
/// ## Errors
/// Returns an error if the value exceeds the maximum representable `i64`.
///
/// ## Parameters
/// - `value`: The unsigned value to convert.
/// - `line`: Source code line number for error reporting.
///
/// ## Returns
/// - `Ok(i64)`: The converted value if it is safe.
/// - `Err(RuntimeError::Overflow { line })`: If conversion fails.
///
/// ## Example
/// ```
/// use ladle::util::num::usize_to_i64_checked;
///
/// let v = usize_to_i64_checked(42, 0).unwrap();
/// assert_eq!(v, 42);
/// ```
pub fn usize_to_i64_checked(value: usize, line: usize) -> EvalResult<i64> {
    i64::try_from(value).map_or(Err(RuntimeError::Overflow { line }), Ok)
}
