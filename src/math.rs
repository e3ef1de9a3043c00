//! Arithmetic helpers.
//!
//! Numbers are `f64`, as in the dynamic value model, so the usual IEEE
//! rules apply: dividing by zero gives an infinity and an undefined result
//! is `NaN` rather than an error.

/// `left + right`.
#[must_use]
pub fn add(left: f64, right: f64) -> f64 {
    left + right
}

/// `left - right`.
#[must_use]
pub fn subtract(left: f64, right: f64) -> f64 {
    left - right
}

/// `left * right`.
#[must_use]
pub fn multiply(left: f64, right: f64) -> f64 {
    left * right
}

/// `left / right`.
#[must_use]
pub fn divide(left: f64, right: f64) -> f64 {
    left / right
}

/// Truncated remainder; the result has the sign of `left`.
#[must_use]
pub fn modulo(left: f64, right: f64) -> f64 {
    left % right
}

/// Floored modulus of integers; the result has the sign of `divisor`.
///
/// Returns `NaN` unless both arguments are integers and `divisor` is at
/// least one.
///
/// ```rust
/// use rambars::math::{math_mod, modulo};
///
/// assert_eq!(modulo(-17.0, 5.0), -2.0);
/// assert_eq!(math_mod(-17.0, 5.0), 3.0);
/// assert!(math_mod(17.2, 5.0).is_nan());
/// assert!(math_mod(17.0, 0.0).is_nan());
/// ```
#[must_use]
pub fn math_mod(number: f64, divisor: f64) -> f64 {
    if !is_integer(number) || !is_integer(divisor) || divisor < 1.0 {
        return f64::NAN;
    }
    ((number % divisor) + divisor) % divisor
}

fn is_integer(number: f64) -> bool {
    number.is_finite() && number.fract() == 0.0
}

/// `number + 1`.
#[must_use]
pub fn inc(number: f64) -> f64 {
    number + 1.0
}

/// `number - 1`.
#[must_use]
pub fn dec(number: f64) -> f64 {
    number - 1.0
}

/// `-number`.
#[must_use]
pub fn negate(number: f64) -> f64 {
    -number
}

/// Restricts `value` to `low..=high`.
///
/// Unlike `Ord::clamp` this never panics: with `low > high` the lower bound
/// wins.
pub fn clamp<T: PartialOrd>(low: T, high: T, value: T) -> T {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

/// The larger argument; `first` on ties and for incomparable arguments.
pub fn max<T: PartialOrd>(first: T, second: T) -> T {
    if second > first { second } else { first }
}

/// The smaller argument; `first` on ties and for incomparable arguments.
pub fn min<T: PartialOrd>(first: T, second: T) -> T {
    if second < first { second } else { first }
}

/// The argument with the larger key; `first` on ties.
pub fn max_by<T, K, F>(key: F, first: T, second: T) -> T
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    if key(&second) > key(&first) {
        second
    } else {
        first
    }
}

/// The argument with the smaller key; `first` on ties.
pub fn min_by<T, K, F>(key: F, first: T, second: T) -> T
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    if key(&second) < key(&first) {
        second
    } else {
        first
    }
}

/// Sum of the numbers; `0` for an empty list.
#[must_use]
pub fn sum(numbers: &[f64]) -> f64 {
    numbers.iter().sum()
}

/// Product of the numbers; `1` for an empty list.
#[must_use]
pub fn product(numbers: &[f64]) -> f64 {
    numbers.iter().product()
}

/// Arithmetic mean; `NaN` for an empty list.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(numbers: &[f64]) -> f64 {
    if numbers.is_empty() {
        return f64::NAN;
    }
    sum(numbers) / numbers.len() as f64
}

/// Median; the mean of the two middle values for an even count, `NaN` for
/// an empty list.
///
/// ```rust
/// use rambars::math::median;
///
/// assert_eq!(median(&[7.0, 1.0, 3.0]), 3.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
/// assert!(median(&[]).is_nan());
/// ```
#[must_use]
pub fn median(numbers: &[f64]) -> f64 {
    let mut sorted = numbers.to_vec();
    sorted.sort_by(f64::total_cmp);
    let middle = sorted.len() / 2;
    match sorted.len() {
        0 => f64::NAN,
        length if length % 2 == 1 => sorted[middle],
        _ => mean(&sorted[middle - 1..=middle]),
    }
}

/// The integers from `start` up to, not including, `end`.
#[must_use]
pub fn range(start: i64, end: i64) -> Vec<i64> {
    (start..end).collect()
}

/// Calls `function` with `0..count` and collects the results.
pub fn times<T, F>(function: F, count: usize) -> Vec<T>
where
    F: Fn(usize) -> T,
{
    (0..count).map(function).collect()
}
