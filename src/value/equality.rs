//! Deep structural equality and identity.

use super::{Value, type_of};

/// Deep structural equality.
///
/// - `NaN` equals `NaN`, while `0` and `-0` differ.
/// - Arrays, objects and sets compare element-wise. Sets ignore order and
///   repeated members.
/// - Dates compare by timestamp, regular expressions by source, errors by
///   name and message.
/// - Functions are equal when they share a non-empty name; symbols and
///   promises only equal themselves.
///
/// # Examples
///
/// ```rust
/// use rambars::value;
/// use rambars::value::{Value, equals};
///
/// assert!(equals(&value!({ "a": [1, 2] }), &value!({ "a": [1, 2] })));
/// assert!(equals(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));
/// assert!(!equals(&Value::Number(0.0), &Value::Number(-0.0)));
/// ```
#[must_use]
pub fn equals(left: &Value, right: &Value) -> bool {
    if type_of(left) != type_of(right) {
        return false;
    }

    match (left, right) {
        (Value::Number(left), Value::Number(right)) => {
            (left.is_nan() && right.is_nan())
                || (left == right && left.is_sign_negative() == right.is_sign_negative())
        }
        (Value::Boolean(left), Value::Boolean(right)) => left == right,
        (Value::String(left), Value::String(right)) => left == right,
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len() && left.iter().zip(right).all(|(a, b)| equals(a, b))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .all(|(key, value)| right.get(key).is_some_and(|other| equals(value, other)))
        }
        (Value::Date(left), Value::Date(right)) => left == right,
        (Value::RegExp(left), Value::RegExp(right)) => left.as_str() == right.as_str(),
        (Value::Set(left), Value::Set(right)) => {
            let covers = |outer: &[Value], inner: &[Value]| {
                inner
                    .iter()
                    .all(|item| outer.iter().any(|other| equals(item, other)))
            };
            covers(right, left) && covers(left, right)
        }
        (Value::Error(left), Value::Error(right)) => left == right,
        (Value::Symbol(left), Value::Symbol(right)) => left == right,
        (Value::Function(left), Value::Function(right)) => {
            !left.name().is_empty() && left.name() == right.name()
        }
        (Value::Promise(left), Value::Promise(right)) => left.ptr_eq(right),
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        _ => false,
    }
}

/// `Object.is` semantics.
///
/// Primitives compare by value (with `NaN` identical to itself and `0`
/// distinct from `-0`). Compound values are identical only when both
/// references point at the same value in memory.
#[must_use]
pub fn identical(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Boolean(left), Value::Boolean(right)) => left == right,
        (Value::Number(left), Value::Number(right)) => {
            (left.is_nan() && right.is_nan())
                || (left == right && left.is_sign_negative() == right.is_sign_negative())
        }
        (Value::String(left), Value::String(right)) => left == right,
        (Value::Symbol(left), Value::Symbol(right)) => left == right,
        (Value::Function(left), Value::Function(right)) => left.ptr_eq(right),
        (Value::Promise(left), Value::Promise(right)) => left.ptr_eq(right),
        _ => std::ptr::eq(left, right),
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        equals(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Object;

    #[test]
    fn test_numbers_distinguish_signed_zero() {
        assert!(equals(&Value::Number(-0.0), &Value::Number(-0.0)));
        assert!(!equals(&Value::Number(0.0), &Value::Number(-0.0)));
        assert!(equals(&Value::Number(1.5), &Value::Number(1.5)));
        assert!(!equals(&Value::Number(-1.5), &Value::Number(1.5)));
    }

    #[test]
    fn test_date_is_not_a_plain_object() {
        assert!(!equals(&Value::Date(0), &Value::Object(Object::new())));
    }

    #[test]
    fn test_sets_ignore_order() {
        assert!(equals(&Value::set([1, 2]), &Value::set([2, 1])));
    }

    #[test]
    fn test_identical_arrays_require_same_reference() {
        let list = Value::array([1, 2]);
        let copy = list.clone();
        assert!(identical(&list, &list));
        assert!(!identical(&list, &copy));
    }
}
