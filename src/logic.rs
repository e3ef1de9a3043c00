//! Boolean logic, predicate combinators and value predicates.
//!
//! Predicates are `Fn(&T) -> bool`; the combinators build new predicates
//! and never evaluate more branches than needed.
//!
//! # Examples
//!
//! ```rust
//! use rambars::logic::{all_pass, both, complement};
//!
//! let positive = |x: &i32| *x > 0;
//! let even = |x: &i32| x % 2 == 0;
//!
//! let positive_even = both(positive, even);
//! assert!(positive_even(&4));
//! assert!(!positive_even(&-4));
//!
//! assert!(complement(positive)(&-1));
//! assert!(all_pass([positive, positive])(&1));
//! ```

use crate::value::{TypeTag, Value};

pub use crate::value::{equals, identical};

/// Logical and.
#[must_use]
pub const fn and(left: bool, right: bool) -> bool {
    left && right
}

/// Logical or.
#[must_use]
pub const fn or(left: bool, right: bool) -> bool {
    left || right
}

/// Logical negation.
#[must_use]
pub const fn not(value: bool) -> bool {
    !value
}

/// Exclusive or.
#[must_use]
pub const fn xor(left: bool, right: bool) -> bool {
    left ^ right
}

/// A predicate that holds when both predicates hold.
pub fn both<T, P, Q>(first: P, second: Q) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |value| first(value) && second(value)
}

/// A predicate that holds when either predicate holds.
pub fn either<T, P, Q>(first: P, second: Q) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |value| first(value) || second(value)
}

/// A predicate that holds when every predicate holds.
pub fn all_pass<T, P, I>(predicates: I) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    I: IntoIterator<Item = P>,
{
    let predicates: Vec<P> = predicates.into_iter().collect();
    move |value| predicates.iter().all(|predicate| predicate(value))
}

/// A predicate that holds when some predicate holds.
pub fn any_pass<T, P, I>(predicates: I) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    I: IntoIterator<Item = P>,
{
    let predicates: Vec<P> = predicates.into_iter().collect();
    move |value| predicates.iter().any(|predicate| predicate(value))
}

/// The negation of a predicate.
pub fn complement<T, P>(predicate: P) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
{
    move |value| !predicate(value)
}

/// Runs `on_true` or `on_false` depending on `condition`.
///
/// ```rust
/// use rambars::logic::if_else;
///
/// let describe = if_else(
///     |n: &i32| n % 2 == 0,
///     |n: i32| format!("{n} is even"),
///     |n: i32| format!("{n} is odd"),
/// );
/// assert_eq!(describe(3), "3 is odd");
/// ```
pub fn if_else<T, R, C, F, G>(condition: C, on_true: F, on_false: G) -> impl Fn(T) -> R
where
    C: Fn(&T) -> bool,
    F: Fn(T) -> R,
    G: Fn(T) -> R,
{
    move |value| {
        if condition(&value) {
            on_true(value)
        } else {
            on_false(value)
        }
    }
}

/// Applies `transform` when `condition` holds, otherwise returns the input.
pub fn when<T, C, F>(condition: C, transform: F) -> impl Fn(T) -> T
where
    C: Fn(&T) -> bool,
    F: Fn(T) -> T,
{
    move |value| {
        if condition(&value) {
            transform(value)
        } else {
            value
        }
    }
}

/// Applies `transform` unless `condition` holds.
pub fn unless<T, C, F>(condition: C, transform: F) -> impl Fn(T) -> T
where
    C: Fn(&T) -> bool,
    F: Fn(T) -> T,
{
    move |value| {
        if condition(&value) {
            value
        } else {
            transform(value)
        }
    }
}

/// Runs the transform of the first pair whose predicate holds, or returns
/// `None` when none does.
///
/// ```rust
/// use rambars::logic::cond;
///
/// type Rule = (fn(&i32) -> bool, fn(&i32) -> &'static str);
///
/// let rules: [Rule; 2] = [
///     (|n: &i32| *n < 0, |_: &i32| "negative"),
///     (|n: &i32| *n == 0, |_: &i32| "zero"),
/// ];
/// let classify = cond(rules);
///
/// assert_eq!(classify(&-3), Some("negative"));
/// assert_eq!(classify(&0), Some("zero"));
/// assert_eq!(classify(&8), None);
/// ```
pub fn cond<T, R, P, F, I>(pairs: I) -> impl Fn(&T) -> Option<R>
where
    P: Fn(&T) -> bool,
    F: Fn(&T) -> R,
    I: IntoIterator<Item = (P, F)>,
{
    let pairs: Vec<(P, F)> = pairs.into_iter().collect();
    move |value| {
        pairs
            .iter()
            .find(|(predicate, _)| predicate(value))
            .map(|(_, transform)| transform(value))
    }
}

/// `fallback` when `value` is `null`, `undefined` or `NaN`, otherwise
/// `value`.
#[must_use]
pub fn default_to(fallback: &Value, value: &Value) -> Value {
    match value {
        Value::Undefined | Value::Null => fallback.clone(),
        Value::Number(number) if number.is_nan() => fallback.clone(),
        other => other.clone(),
    }
}

/// `true` for `null` and `undefined`.
#[must_use]
pub const fn is_nil(value: &Value) -> bool {
    value.is_nil()
}

/// `true` for the empty string, array, object and set. `null` and
/// `undefined` are not empty.
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::String(text) => text.is_empty(),
        Value::Array(items) | Value::Set(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
        _ => false,
    }
}

/// `true` when `value` is an instance of the type named by `tag`.
///
/// See [`TypeTag::admits`]; unlike comparing [`type_of`](crate::value::type_of)
/// results, every non-primitive value is an `Object`.
///
/// ```rust
/// use rambars::logic::is;
/// use rambars::value;
/// use rambars::value::{TypeTag, Value};
///
/// assert!(is(TypeTag::Object, &value!([1, 2])));
/// assert!(is(TypeTag::Number, &Value::Number(f64::NAN)));
/// assert!(!is(TypeTag::Object, &Value::from("text")));
/// ```
#[must_use]
pub fn is(tag: TypeTag, value: &Value) -> bool {
    tag.admits(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    #[test]
    fn test_boolean_operators() {
        assert!(xor(true, false));
        assert!(!xor(true, true));
        assert!(or(false, true));
        assert!(!and(true, false));
        assert!(not(false));
    }

    #[test]
    fn test_default_to_replaces_nan() {
        let fallback = Value::from(10);
        assert_eq!(default_to(&fallback, &Value::Number(f64::NAN)), fallback);
        assert_eq!(default_to(&fallback, &Value::Null), fallback);
        assert_eq!(default_to(&fallback, &Value::from(0)), Value::from(0));
    }

    #[test]
    fn test_is_empty() {
        assert!(is_empty(&value!("")));
        assert!(is_empty(&value!([])));
        assert!(is_empty(&value!({})));
        assert!(!is_empty(&value!(null)));
        assert!(!is_empty(&value!(0)));
    }

    #[test]
    fn test_when_and_unless() {
        let clamp_negative = when(|n: &i32| *n < 0, |_| 0);
        assert_eq!(clamp_negative(-5), 0);
        assert_eq!(clamp_negative(5), 5);
        let shout = unless(|s: &String| s.is_empty(), |s: String| s.to_uppercase());
        assert_eq!(shout("hi".to_string()), "HI");
    }

    #[test]
    fn test_either_and_any_pass() {
        let small = |n: &u8| *n < 3;
        let large = |n: &u8| *n > 8;
        assert!(either(small, large)(&9));
        assert!(!any_pass([small, small])(&5));
    }
}
