//! The dynamic value model.
//!
//! Ramda's object, path and lens functions operate on arbitrary JavaScript
//! values. [`Value`] is the owned, tree-shaped Rust counterpart: every
//! variant maps to one of the fifteen [`TypeTag`]s reported by [`type_of`].
//!
//! Values are plain data. Cloning is a deep copy, equality ([`equals`] and
//! `PartialEq`) is deep structural equality, and no value can contain a
//! cycle.
//!
//! # Examples
//!
//! ```rust
//! use rambars::value;
//! use rambars::value::{TypeTag, Value, type_of};
//!
//! let user = value!({ "name": "ada", "tags": ["admin", "ops"], "age": 36 });
//!
//! assert_eq!(type_of(&user), TypeTag::Object);
//! assert_eq!(user.get("name"), Some(&Value::from("ada")));
//! assert_eq!(user.to_string(), "[object Object]");
//! ```

mod convert;
mod display;
mod equality;
mod function;
mod kind;
mod macros;
mod path;
mod promise;
#[cfg(feature = "serde")]
mod serde_impl;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use regex::Regex;

pub use equality::{equals, identical};
pub use function::{Function, FunctionKind};
pub use kind::{TypeTag, type_of};
pub use path::{Path, PathSegment};
pub use promise::Promise;

/// Key-ordered map used for object values.
pub type Object = BTreeMap<String, Value>;

/// A dynamically typed value.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Undefined,
    /// The explicit null value.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A double-precision number, including `NaN` and the infinities.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered list.
    Array(Vec<Value>),
    /// A string-keyed record.
    Object(Object),
    /// A point in time, as milliseconds since the Unix epoch.
    Date(i64),
    /// A regular expression.
    RegExp(Regex),
    /// A collection of distinct values, in insertion order.
    Set(Vec<Value>),
    /// An error with a name and a message.
    Error(ErrorValue),
    /// A unique symbol.
    Symbol(Symbol),
    /// A native function.
    Function(Function),
    /// A pending or settled asynchronous value.
    Promise(Promise),
}

/// Payload of [`Value::Error`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorValue {
    /// Error class name, such as `TypeError`.
    pub name: String,
    /// Human readable message.
    pub message: String,
}

impl ErrorValue {
    /// Creates an error value with the generic `Error` name.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            name: "Error".to_string(),
            message: message.into(),
        }
    }
}

static NEXT_SYMBOL: AtomicU64 = AtomicU64::new(0);

/// Payload of [`Value::Symbol`]. Every call to [`Symbol::new`] yields a
/// symbol distinct from all others, even with the same description.
#[derive(Clone, Debug)]
pub struct Symbol {
    id: u64,
    description: Option<Arc<str>>,
}

impl Symbol {
    /// Creates a fresh symbol.
    #[must_use]
    pub fn new(description: Option<&str>) -> Self {
        Self {
            id: NEXT_SYMBOL.fetch_add(1, Ordering::Relaxed),
            description: description.map(Arc::from),
        }
    }

    /// The description given at creation, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

static_assertions::assert_impl_all!(Value: Send, Sync, Clone);

impl Value {
    /// Builds an object from key/value pairs.
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Builds an array from any iterator of convertible items.
    pub fn array<V, I>(items: I) -> Self
    where
        V: Into<Self>,
        I: IntoIterator<Item = V>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Builds a set, dropping items equal to an earlier one.
    pub fn set<V, I>(items: I) -> Self
    where
        V: Into<Self>,
        I: IntoIterator<Item = V>,
    {
        let mut distinct: Vec<Self> = Vec::new();
        for item in items {
            let item = item.into();
            if !distinct.iter().any(|existing| equals(existing, &item)) {
                distinct.push(item);
            }
        }
        Self::Set(distinct)
    }

    /// `true` for `Undefined` and `Null`.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// JavaScript truthiness.
    ///
    /// `false`, `0`, `-0`, `NaN`, `""`, `null` and `undefined` are falsy;
    /// everything else is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Boolean(flag) => *flag,
            Self::Number(number) => *number != 0.0 && !number.is_nan(),
            Self::String(text) => !text.is_empty(),
            _ => true,
        }
    }

    /// The number, if this is a `Number`.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// The boolean, if this is a `Boolean`.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(flag) => Some(*flag),
            _ => None,
        }
    }

    /// The string slice, if this is a `String`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// The elements, if this is an `Array`.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The entries, if this is an `Object`.
    #[must_use]
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// The function, if this is a `Function`.
    #[must_use]
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Looks up a single property or index.
    ///
    /// Objects are indexed by key, arrays by a numeric key; every other
    /// variant has no properties.
    #[must_use]
    pub fn get<S>(&self, segment: S) -> Option<&Self>
    where
        S: Into<PathSegment>,
    {
        segment.into().lookup(self)
    }

    /// Object view of this value, as produced by `Object.assign({}, value)`.
    ///
    /// Objects are copied, arrays become index-keyed objects, and every
    /// other variant contributes no entries.
    #[must_use]
    pub fn to_object(&self) -> Object {
        match self {
            Self::Object(entries) => entries.clone(),
            Self::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), item.clone()))
                .collect(),
            _ => Object::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness_follows_javascript() {
        assert!(!Value::Number(0.0).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(Value::Array(vec![]).is_truthy());
        assert!(Value::Object(Object::new()).is_truthy());
    }

    #[test]
    fn test_set_drops_duplicates() {
        let set = Value::set([1, 2, 1, 3]);
        assert_eq!(set, Value::Set(vec![1.into(), 2.into(), 3.into()]));
    }

    #[test]
    fn test_symbols_are_unique() {
        let first = Symbol::new(Some("id"));
        let second = Symbol::new(Some("id"));
        assert_ne!(first, second);
        assert_eq!(first, first.clone());
    }

    #[test]
    fn test_to_object_of_array_is_index_keyed() {
        let object = Value::array(["a", "b"]).to_object();
        assert_eq!(object.get("1"), Some(&Value::from("b")));
    }
}
