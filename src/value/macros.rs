//! The `value!` literal macro.

/// Builds a [`Value`](crate::value::Value) from JSON-like syntax.
///
/// - `null` and `undefined` are keywords.
/// - `[ ... ]` builds an array and `{ "key": ... }` builds an object.
/// - Anything else is converted with `Value::from`. Elements and field values
///   are single token trees, so wrap compound expressions such as `-1` or
///   `x + 1` in parentheses.
///
/// # Examples
///
/// ```rust
/// use rambars::value;
/// use rambars::value::Value;
///
/// let offset = 2;
/// let record = value!({
///     "id": 7,
///     "name": "widget",
///     "dimensions": [3, (offset * 2), (-1)],
///     "parent": null,
/// });
///
/// assert_eq!(record.get("id"), Some(&Value::Number(7.0)));
/// assert_eq!(
///     record.get("dimensions"),
///     Some(&Value::array([3, 4, -1]))
/// );
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::value::Value::Null
    };
    (undefined) => {
        $crate::value::Value::Undefined
    };
    ([ $($element:tt),* $(,)? ]) => {
        $crate::value::Value::Array(::std::vec![ $( $crate::value!($element) ),* ])
    };
    ({ $($key:literal : $field:tt),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut object = $crate::value::Object::new();
        $( object.insert(::std::string::String::from($key), $crate::value!($field)); )*
        $crate::value::Value::Object(object)
    }};
    ($other:expr) => {
        $crate::value::Value::from($other)
    };
}
