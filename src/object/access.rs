//! Reading properties and paths.

use crate::value::{Path, PathSegment, TypeTag, Value, equals};

/// The property `key` of `object`, or `Undefined`.
///
/// Arrays are indexed by numeric keys; primitives have no properties.
pub fn prop(key: impl Into<PathSegment>, object: &Value) -> Value {
    object.get(key).cloned().unwrap_or_default()
}

/// The property `key`, or `fallback` when it is `null`, `undefined` or
/// `NaN`.
pub fn prop_or(fallback: &Value, key: impl Into<PathSegment>, object: &Value) -> Value {
    or_fallback(fallback, prop(key, object))
}

/// `true` when the property `key` deeply equals `expected`.
pub fn prop_eq(key: impl Into<PathSegment>, expected: &Value, object: &Value) -> bool {
    equals(&prop(key, object), expected)
}

/// `true` when the property `key` is an instance of `tag`.
pub fn prop_is(tag: TypeTag, key: impl Into<PathSegment>, object: &Value) -> bool {
    tag.admits(&prop(key, object))
}

/// The properties `keys`, in order, with `Undefined` for missing ones.
pub fn props<K>(keys: &[K], object: &Value) -> Vec<Value>
where
    K: AsRef<str>,
{
    keys.iter().map(|key| prop(key.as_ref(), object)).collect()
}

/// The value at `path`, or `Undefined` when any segment is missing.
///
/// ```rust
/// use rambars::object::path;
/// use rambars::value;
/// use rambars::value::Value;
///
/// let data = value!({ "a": { "b": [10, 20] } });
/// assert_eq!(path("a.b.1", &data), Value::from(20));
/// assert_eq!(path(["a", "c"], &data), Value::Undefined);
/// ```
pub fn path(path: impl Into<Path>, object: &Value) -> Value {
    path.into().resolve(object).cloned().unwrap_or_default()
}

/// The value at `path`, or `fallback` when it is `null`, `undefined` or
/// `NaN`.
pub fn path_or(fallback: &Value, path: impl Into<Path>, object: &Value) -> Value {
    or_fallback(fallback, self::path(path, object))
}

/// `true` when the value at `path` deeply equals `expected`.
pub fn path_eq(path: impl Into<Path>, expected: &Value, object: &Value) -> bool {
    equals(&self::path(path, object), expected)
}

/// The values at each of `paths`.
pub fn paths<P>(paths: &[P], object: &Value) -> Vec<Value>
where
    P: Clone + Into<Path>,
{
    paths
        .iter()
        .map(|each| path(each.clone(), object))
        .collect()
}

/// `true` when `object` has its own property `key`.
pub fn has(key: impl Into<PathSegment>, object: &Value) -> bool {
    object.get(key).is_some()
}

/// `true` when the value at `path` is defined.
pub fn has_path(path: impl Into<Path>, object: &Value) -> bool {
    path.into()
        .resolve(object)
        .is_some_and(|found| !matches!(found, Value::Undefined))
}

/// `true` when both objects have deeply equal properties `key`.
pub fn eq_props(key: impl Into<PathSegment>, first: &Value, second: &Value) -> bool {
    let key = key.into();
    equals(&prop(key.clone(), first), &prop(key, second))
}

/// The own keys of `object`, in key order; array indices for arrays.
#[must_use]
pub fn keys(object: &Value) -> Vec<String> {
    object.to_object().into_keys().collect()
}

/// The own property values of `object`, in key order.
#[must_use]
pub fn values(object: &Value) -> Vec<Value> {
    object.to_object().into_values().collect()
}

/// The own properties of `object` as key/value pairs.
#[must_use]
pub fn to_pairs(object: &Value) -> Vec<(String, Value)> {
    object.to_object().into_iter().collect()
}

/// Builds an object from pairs; a repeated key keeps the last value.
pub fn from_pairs<K, V, I>(pairs: I) -> Value
where
    K: Into<String>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    Value::object(pairs)
}

/// A deep copy of `value`.
#[must_use]
pub fn clone(value: &Value) -> Value {
    value.clone()
}

/// `String(value)`.
#[must_use]
pub fn to_string(value: &Value) -> String {
    value.to_string()
}

fn or_fallback(fallback: &Value, found: Value) -> Value {
    match found {
        Value::Undefined | Value::Null => fallback.clone(),
        Value::Number(number) if number.is_nan() => fallback.clone(),
        other => other,
    }
}
