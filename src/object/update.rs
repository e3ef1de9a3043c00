//! Building updated copies of objects.
//!
//! Inputs are never modified. A non-object input is first viewed as an
//! object (arrays by index, primitives as `{}`), so `assoc("a", 1, null)`
//! is `{a: 1}`.

use crate::value::{Object, Path, PathSegment, Value};

/// How far past the end of an array [`assoc_path`] pads with `undefined`.
/// Indices further out are written as object keys instead.
pub const MAX_ARRAY_PADDING: usize = 1 << 16;

/// A list of property names, written either as a comma separated string
/// (`"a,b"`) or as a slice of names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropList(Vec<String>);

impl PropList {
    /// The names, in the order given.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.0
    }

    fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|name| name == key)
    }
}

impl From<&str> for PropList {
    fn from(names: &str) -> Self {
        Self(
            names
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

impl From<&[&str]> for PropList {
    fn from(names: &[&str]) -> Self {
        Self(names.iter().map(|name| (*name).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PropList {
    fn from(names: [&str; N]) -> Self {
        Self(names.iter().map(|name| (*name).to_string()).collect())
    }
}

impl From<Vec<String>> for PropList {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

/// A copy of `object` with `key` set to `value`.
pub fn assoc(key: impl Into<PathSegment>, value: Value, object: &Value) -> Value {
    let mut entries = object.to_object();
    entries.insert(key.into().to_key(), value);
    Value::Object(entries)
}

/// A copy of `object` with the value at `path` set, creating intermediate
/// containers as needed.
///
/// A missing intermediate becomes an array when the next segment is an
/// index and an object otherwise. Arrays written at an index stay arrays,
/// padded with `undefined` when the index is past the end. An index more
/// than [`MAX_ARRAY_PADDING`] past the end turns the array into an object
/// keyed by position, with the new entry under the index's text.
///
/// ```rust
/// use rambars::object::assoc_path;
/// use rambars::value;
///
/// let updated = assoc_path("a.items.1", value!("x"), &value!({ "b": 1 }));
/// assert_eq!(updated, value!({ "a": { "items": [undefined, "x"] }, "b": 1 }));
/// ```
pub fn assoc_path(path: impl Into<Path>, value: Value, object: &Value) -> Value {
    assoc_segments(path.into().segments(), value, object)
}

fn assoc_segments(segments: &[PathSegment], value: Value, object: &Value) -> Value {
    let Some((head, rest)) = segments.split_first() else {
        return value;
    };

    let value = match rest.first() {
        None => value,
        Some(next) => {
            let child = match head.lookup(object) {
                Some(existing) => existing.clone(),
                None if next.as_index().is_some() => Value::Array(Vec::new()),
                None => Value::Object(Object::new()),
            };
            assoc_segments(rest, value, &child)
        }
    };

    match (object, head.as_index()) {
        (Value::Array(items), Some(index))
            if index.saturating_sub(items.len()) <= MAX_ARRAY_PADDING =>
        {
            let mut items = items.clone();
            match items.get_mut(index) {
                Some(slot) => *slot = value,
                None => {
                    items.resize(index, Value::Undefined);
                    items.push(value);
                }
            }
            Value::Array(items)
        }
        _ => assoc(head.clone(), value, object),
    }
}

/// A copy of `object` without `key`.
pub fn dissoc(key: impl Into<PathSegment>, object: &Value) -> Value {
    let mut entries = object.to_object();
    entries.remove(&key.into().to_key());
    Value::Object(entries)
}

/// A copy of `object` without the listed properties.
///
/// `null` and `undefined` give `undefined`.
///
/// ```rust
/// use rambars::object::omit;
/// use rambars::value;
///
/// let user = value!({ "id": 1, "name": "ada", "token": "secret" });
/// assert_eq!(omit("token,id", &user), value!({ "name": "ada" }));
/// ```
pub fn omit(names: impl Into<PropList>, object: &Value) -> Value {
    if object.is_nil() {
        return Value::Undefined;
    }
    let names = names.into();
    let mut entries = object.to_object();
    entries.retain(|key, _| !names.contains(key));
    Value::Object(entries)
}

/// The listed properties that `object` has.
///
/// `null` and `undefined` give `undefined`.
pub fn pick(names: impl Into<PropList>, object: &Value) -> Value {
    if object.is_nil() {
        return Value::Undefined;
    }
    let names = names.into();
    let mut entries = object.to_object();
    entries.retain(|key, _| names.contains(key));
    Value::Object(entries)
}

/// The listed properties, with `undefined` for the ones `object` lacks.
pub fn pick_all(names: impl Into<PropList>, object: &Value) -> Value {
    if object.is_nil() {
        return Value::Undefined;
    }
    let entries = object.to_object();
    Value::Object(
        names
            .into()
            .0
            .into_iter()
            .map(|name| {
                let found = entries.get(&name).cloned().unwrap_or_default();
                (name, found)
            })
            .collect(),
    )
}

/// Shallow merge; properties of `source` win.
#[must_use]
pub fn merge(target: &Value, source: &Value) -> Value {
    let mut entries = target.to_object();
    entries.extend(source.to_object());
    Value::Object(entries)
}

/// Shallow merge of every object, later ones winning.
#[must_use]
pub fn merge_all(objects: &[Value]) -> Value {
    Value::Object(
        objects
            .iter()
            .flat_map(Value::to_object)
            .collect(),
    )
}

/// Shallow merge; properties of `target` win.
#[must_use]
pub fn merge_left(source: &Value, target: &Value) -> Value {
    merge(target, source)
}

/// Deep merge; properties of `source` win, and objects present on both
/// sides are merged recursively.
///
/// ```rust
/// use rambars::object::merge_deep_right;
/// use rambars::value;
///
/// let defaults = value!({ "db": { "host": "localhost", "port": 5432 }, "debug": false });
/// let overrides = value!({ "db": { "port": 6432 }, "debug": true });
///
/// assert_eq!(
///     merge_deep_right(&defaults, &overrides),
///     value!({ "db": { "host": "localhost", "port": 6432 }, "debug": true })
/// );
/// ```
#[must_use]
pub fn merge_deep_right(target: &Value, source: &Value) -> Value {
    let mut merged = target.to_object();
    for (key, incoming) in source.to_object() {
        let value = match merged.get(&key) {
            Some(existing)
                if matches!(existing, Value::Object(_)) && matches!(incoming, Value::Object(_)) =>
            {
                merge_deep_right(existing, &incoming)
            }
            _ => incoming,
        };
        merged.insert(key, value);
    }
    Value::Object(merged)
}

/// `{key: value}`.
pub fn obj_of(key: impl Into<String>, value: Value) -> Value {
    Value::Object(Object::from([(key.into(), value)]))
}

/// Pairs keys with values into an object; the longer list is truncated.
pub fn zip_obj<K>(keys: &[K], values: &[Value]) -> Value
where
    K: AsRef<str>,
{
    Value::Object(
        keys.iter()
            .zip(values)
            .map(|(key, value)| (key.as_ref().to_string(), value.clone()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::value;

    #[test]
    fn test_assoc_on_null_creates_object() {
        assert_eq!(assoc("a", value!(1), &value!(null)), value!({ "a": 1 }));
    }

    #[test]
    fn test_assoc_path_replaces_array_element() {
        let data = value!({ "list": [1, 2, 3] });
        assert_eq!(
            assoc_path("list.1", value!(20), &data),
            value!({ "list": [1, 20, 3] })
        );
    }

    #[test]
    fn test_assoc_path_through_primitive() {
        let data = value!({ "a": 1 });
        assert_eq!(
            assoc_path("a.b", value!(2), &data),
            value!({ "a": { "b": 2 } })
        );
    }

    #[test]
    fn test_assoc_path_empty_path_replaces_input() {
        assert_eq!(assoc_path(Path::root(), value!(5), &value!({ "a": 1 })), value!(5));
    }

    #[rstest]
    #[case(PropList::from("a, b"), vec!["a", "b"])]
    #[case(PropList::from(["x"]), vec!["x"])]
    #[case(PropList::from(""), vec![])]
    fn test_prop_list_forms(#[case] list: PropList, #[case] expected: Vec<&str>) {
        assert_eq!(list.names(), expected.as_slice());
    }

    #[test]
    fn test_pick_and_pick_all() {
        let data = value!({ "a": 1, "b": 2 });
        assert_eq!(pick("a,c", &data), value!({ "a": 1 }));
        assert_eq!(pick_all("a,c", &data), value!({ "a": 1, "c": undefined }));
        assert_eq!(pick("a", &value!(null)), Value::Undefined);
    }

    #[test]
    fn test_merge_directions() {
        let first = value!({ "a": 1, "b": 1 });
        let second = value!({ "b": 2 });
        assert_eq!(merge(&first, &second), value!({ "a": 1, "b": 2 }));
        assert_eq!(merge_left(&second, &first), value!({ "a": 1, "b": 1 }));
        assert_eq!(merge_all(&[first, second, value!({ "c": 3 })]), value!({ "a": 1, "b": 2, "c": 3 }));
    }

    #[test]
    fn test_merge_deep_right_replaces_non_objects() {
        let target = value!({ "a": { "b": 1 } });
        let source = value!({ "a": [1] });
        assert_eq!(merge_deep_right(&target, &source), value!({ "a": [1] }));
    }

    #[test]
    fn test_zip_obj_truncates() {
        assert_eq!(zip_obj(&["a", "b", "c"], &[value!(1), value!(2)]), value!({ "a": 1, "b": 2 }));
        assert_eq!(obj_of("k", value!(true)), value!({ "k": true }));
        assert_eq!(dissoc("a", &value!({ "a": 1, "b": 2 })), value!({ "b": 2 }));
    }
}
