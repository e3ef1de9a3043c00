//! Runtime type tags.

use std::fmt;

use super::{FunctionKind, Value};

/// The closed set of tags reported by [`type_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeTag {
    /// Plain objects and dates.
    Object,
    /// Numbers other than `NaN`.
    Number,
    /// Booleans.
    Boolean,
    /// Strings.
    String,
    /// `null`.
    Null,
    /// Arrays.
    Array,
    /// Regular expressions.
    RegExp,
    /// The `NaN` number.
    NaN,
    /// Synchronous functions.
    Function,
    /// `undefined`.
    Undefined,
    /// Asynchronous functions.
    Async,
    /// Promises.
    Promise,
    /// Symbols.
    Symbol,
    /// Sets.
    Set,
    /// Errors.
    Error,
}

impl TypeTag {
    /// Every tag, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Object,
        Self::Number,
        Self::Boolean,
        Self::String,
        Self::Null,
        Self::Array,
        Self::RegExp,
        Self::NaN,
        Self::Function,
        Self::Undefined,
        Self::Async,
        Self::Promise,
        Self::Symbol,
        Self::Set,
        Self::Error,
    ];

    /// The tag's name as a string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Object => "Object",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::String => "String",
            Self::Null => "Null",
            Self::Array => "Array",
            Self::RegExp => "RegExp",
            Self::NaN => "NaN",
            Self::Function => "Function",
            Self::Undefined => "Undefined",
            Self::Async => "Async",
            Self::Promise => "Promise",
            Self::Symbol => "Symbol",
            Self::Set => "Set",
            Self::Error => "Error",
        }
    }
}

impl TypeTag {
    /// `true` when `value` is an instance of the type this tag names.
    ///
    /// This follows the prototype relation rather than comparing
    /// [`type_of`]: every non-primitive value is an `Object`, `NaN` is a
    /// `Number` and an async function is a `Function`.
    #[must_use]
    pub fn admits(self, value: &Value) -> bool {
        let actual = type_of(value);
        match self {
            Self::Object => !matches!(
                value,
                Value::Undefined
                    | Value::Null
                    | Value::Boolean(_)
                    | Value::Number(_)
                    | Value::String(_)
                    | Value::Symbol(_)
            ),
            Self::Number => matches!(actual, Self::Number | Self::NaN),
            Self::Function => matches!(actual, Self::Function | Self::Async),
            other => actual == other,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Returns the type tag of a value.
///
/// # Examples
///
/// ```rust
/// use rambars::value::{TypeTag, Value, type_of};
///
/// assert_eq!(type_of(&Value::Number(f64::NAN)), TypeTag::NaN);
/// assert_eq!(type_of(&Value::Date(0)), TypeTag::Object);
/// assert_eq!(type_of(&Value::Undefined), TypeTag::Undefined);
/// ```
#[must_use]
pub fn type_of(value: &Value) -> TypeTag {
    match value {
        Value::Undefined => TypeTag::Undefined,
        Value::Null => TypeTag::Null,
        Value::Boolean(_) => TypeTag::Boolean,
        Value::Number(number) if number.is_nan() => TypeTag::NaN,
        Value::Number(_) => TypeTag::Number,
        Value::String(_) => TypeTag::String,
        Value::Array(_) => TypeTag::Array,
        Value::Object(_) | Value::Date(_) => TypeTag::Object,
        Value::RegExp(_) => TypeTag::RegExp,
        Value::Set(_) => TypeTag::Set,
        Value::Error(_) => TypeTag::Error,
        Value::Symbol(_) => TypeTag::Symbol,
        Value::Function(function) => match function.kind() {
            FunctionKind::Sync => TypeTag::Function,
            FunctionKind::Async => TypeTag::Async,
        },
        Value::Promise(_) => TypeTag::Promise,
    }
}
