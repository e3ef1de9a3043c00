//! Querying lists of records and building objects from functions.

use crate::value::{PathSegment, Value, equals};

use super::access::prop;

/// A per-property predicate used by [`where_`].
pub type Condition<'a> = (&'a str, &'a dyn Fn(&Value) -> bool);

/// The property `key` of every element that has it defined.
pub fn pluck(key: impl Into<PathSegment>, list: &[Value]) -> Vec<Value> {
    let key = key.into();
    list.iter()
        .filter_map(|item| key.lookup(item))
        .filter(|found| !matches!(found, Value::Undefined))
        .cloned()
        .collect()
}

/// `true` when every condition holds for its property of `object`.
/// Missing properties are passed as `undefined`.
///
/// ```rust
/// use rambars::object::where_;
/// use rambars::value;
/// use rambars::value::Value;
///
/// let is_adult = |age: &Value| age.as_f64().is_some_and(|age| age >= 18.0);
/// let has_name = |name: &Value| name.as_str().is_some_and(|name| !name.is_empty());
///
/// let conditions = [("age", &is_adult as &dyn Fn(&Value) -> bool), ("name", &has_name)];
///
/// assert!(where_(&conditions, &value!({ "name": "ada", "age": 36 })));
/// assert!(!where_(&conditions, &value!({ "name": "ada" })));
/// ```
#[must_use]
pub fn where_(conditions: &[Condition<'_>], object: &Value) -> bool {
    conditions
        .iter()
        .all(|(key, condition)| condition(&prop(*key, object)))
}

/// `true` when every property of `pattern` deeply equals the same property
/// of `object`.
#[must_use]
pub fn where_eq(pattern: &Value, object: &Value) -> bool {
    pattern
        .to_object()
        .iter()
        .all(|(key, expected)| equals(expected, &prop(key, object)))
}

/// Replaces every function in `spec` by its result for `arguments`.
///
/// Objects and arrays in `spec` are walked recursively; any other leaf is
/// kept as is.
///
/// ```rust
/// use rambars::object::apply_spec;
/// use rambars::value;
/// use rambars::value::{Function, Value};
///
/// let sum = Function::new("sum", 2, |arguments| {
///     Value::Number(arguments.iter().filter_map(Value::as_f64).sum())
/// });
/// let first = Function::unary("first", |value| value);
///
/// let spec = value!({ "total": sum, "nested": { "first": first } });
/// assert_eq!(
///     apply_spec(&spec, &[value!(2), value!(3)]),
///     value!({ "total": 5, "nested": { "first": 2 } })
/// );
/// ```
#[must_use]
pub fn apply_spec(spec: &Value, arguments: &[Value]) -> Value {
    match spec {
        Value::Function(function) => function.call(arguments),
        Value::Object(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, child)| (key.clone(), apply_spec(child, arguments)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|child| apply_spec(child, arguments))
                .collect(),
        ),
        leaf => leaf.clone(),
    }
}
