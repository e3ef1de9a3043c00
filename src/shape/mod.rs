//! A structural type algebra.
//!
//! [`Shape`] describes the static type of a [`Value`]: primitives,
//! literals, arrays, object records, function signatures and unions, plus
//! [`Shape::Never`], the uninhabited type. On top of it this module
//! computes the two generic transformations of the library's declaration
//! surface:
//!
//! - [`evolve`]: the result shape of evolving an object shape with a tree
//!   of transformer signatures, rejecting incongruent pairs;
//! - [`select`]: the members of a union assignable to a pattern.
//!
//! Rejections surface as [`Shape::Never`], or with a located diagnostic
//! through [`evolve_checked`].
//!
//! # Examples
//!
//! ```rust
//! use rambars::shape::{Shape, ShapeEvolver, Signature, evolve};
//!
//! let input = Shape::object([("count", Shape::Number), ("name", Shape::String)]);
//! let rules = ShapeEvolver::new()
//!     .transform("count", Signature::unary(Shape::Number, Shape::Number));
//!
//! assert_eq!(evolve(&input, &rules), input);
//! assert_eq!(evolve(&input, &rules).to_string(), "{count: number, name: string}");
//! ```

mod assign;
mod evolve;
mod select;

use std::collections::BTreeMap;
use std::fmt;

use crate::value::{TypeTag, Value, type_of};

pub use evolve::{
    Rejection, RejectionReason, ShapeEvolver, ShapeRule, evolve, evolve_checked,
    evolve_checked_with, evolve_with, is_evolvable,
};
pub use select::{Discriminated, select, select_by_tag, select_values};

/// A literal type.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A specific boolean.
    Boolean(bool),
    /// A specific number.
    Number(f64),
    /// A specific string.
    String(String),
}

impl Literal {
    /// The primitive shape this literal widens to.
    #[must_use]
    pub const fn base(&self) -> Shape {
        match self {
            Self::Boolean(_) => Shape::Boolean,
            Self::Number(_) => Shape::Number,
            Self::String(_) => Shape::String,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(flag) => write!(formatter, "{flag}"),
            Self::Number(number) => write!(formatter, "{}", Value::Number(*number)),
            Self::String(text) => write!(formatter, "{text:?}"),
        }
    }
}

/// A function type.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    params: Vec<Shape>,
    returns: Box<Shape>,
}

impl Signature {
    /// A signature with the given parameters and result.
    #[must_use]
    pub fn new(params: Vec<Shape>, returns: Shape) -> Self {
        Self {
            params,
            returns: Box::new(returns),
        }
    }

    /// A one-parameter signature, the form every transformer has.
    #[must_use]
    pub fn unary(param: Shape, returns: Shape) -> Self {
        Self::new(vec![param], returns)
    }

    /// Parameter shapes.
    #[must_use]
    pub fn params(&self) -> &[Shape] {
        &self.params
    }

    /// Result shape.
    #[must_use]
    pub fn returns(&self) -> &Shape {
        &self.returns
    }

    /// `true` when this function can be called with `argument` alone.
    ///
    /// A function declaring no parameter accepts anything. One declaring
    /// more than one parameter accepts nothing, since it is not assignable
    /// to `(value) => any`.
    #[must_use]
    pub fn accepts(&self, argument: &Shape) -> bool {
        match self.params.as_slice() {
            [] => true,
            [param] => argument.is_assignable_to(param),
            _ => false,
        }
    }
}

/// A structural type.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Shape {
    /// The uninhabited type: the result of every rejection.
    #[default]
    Never,
    /// The top type; assignable to and from everything except `Never`.
    Any,
    /// `undefined`.
    Undefined,
    /// `null`.
    Null,
    /// Any boolean.
    Boolean,
    /// Any number.
    Number,
    /// Any string.
    String,
    /// One specific primitive value.
    Literal(Literal),
    /// A homogeneous array.
    Array(Box<Shape>),
    /// A record with known keys.
    Object(BTreeMap<String, Shape>),
    /// A function.
    Function(Signature),
    /// A runtime-only type that only matches itself, named after its
    /// constructor (`Date`, `RegExp`, `Set`, `Error`, `Symbol`, `Promise`).
    Opaque(&'static str),
    /// A union of at least two distinct members.
    Union(Vec<Shape>),
}

impl Shape {
    /// An object shape from key/shape pairs.
    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>,
    {
        Self::Object(
            fields
                .into_iter()
                .map(|(key, shape)| (key.into(), shape))
                .collect(),
        )
    }

    /// An array shape.
    #[must_use]
    pub fn array(element: Self) -> Self {
        Self::Array(Box::new(element))
    }

    /// A function shape.
    #[must_use]
    pub fn function(params: Vec<Self>, returns: Self) -> Self {
        Self::Function(Signature::new(params, returns))
    }

    /// A string literal shape.
    #[must_use]
    pub fn literal(text: &str) -> Self {
        Self::Literal(Literal::String(text.to_string()))
    }

    /// Normalises a union.
    ///
    /// Nested unions are flattened, `Never` members and duplicates are
    /// dropped, and `Any` absorbs everything. No members yields `Never`,
    /// one member yields that member.
    ///
    /// ```rust
    /// use rambars::shape::Shape;
    ///
    /// assert_eq!(Shape::union([]), Shape::Never);
    /// assert_eq!(Shape::union([Shape::Number, Shape::Never]), Shape::Number);
    /// assert_eq!(
    ///     Shape::union([Shape::Number, Shape::union([Shape::String, Shape::Number])]),
    ///     Shape::Union(vec![Shape::Number, Shape::String])
    /// );
    /// ```
    pub fn union<I>(members: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut flattened: Vec<Self> = Vec::new();
        for member in members {
            let nested = match member {
                Self::Union(inner) => inner,
                other => vec![other],
            };
            for shape in nested {
                if shape == Self::Any {
                    return Self::Any;
                }
                if shape != Self::Never && !flattened.contains(&shape) {
                    flattened.push(shape);
                }
            }
        }

        match flattened.len() {
            0 => Self::Never,
            1 => flattened.pop().unwrap_or_default(),
            _ => Self::Union(flattened),
        }
    }

    /// The members of this shape viewed as a union: the union's members,
    /// nothing for `Never`, or the shape itself.
    #[must_use]
    pub fn members(&self) -> &[Self] {
        match self {
            Self::Union(members) => members,
            Self::Never => &[],
            other => std::slice::from_ref(other),
        }
    }

    /// `true` for the uninhabited type.
    #[must_use]
    pub const fn is_never(&self) -> bool {
        matches!(self, Self::Never)
    }

    /// Infers the most specific shape of a value.
    ///
    /// Primitives infer literal shapes, so discriminant fields keep their
    /// exact value. Arrays infer the union of their element shapes.
    ///
    /// ```rust
    /// use rambars::shape::Shape;
    /// use rambars::value;
    ///
    /// let shape = Shape::of(&value!({ "kind": "circle", "radius": 2 }));
    /// assert_eq!(shape.to_string(), "{kind: \"circle\", radius: 2}");
    /// ```
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Undefined => Self::Undefined,
            Value::Null => Self::Null,
            Value::Boolean(flag) => Self::Literal(Literal::Boolean(*flag)),
            Value::Number(number) if number.is_nan() => Self::Number,
            Value::Number(number) => Self::Literal(Literal::Number(*number)),
            Value::String(text) => Self::Literal(Literal::String(text.clone())),
            Value::Array(items) => Self::array(Self::union(items.iter().map(Self::of))),
            Value::Object(entries) => Self::Object(
                entries
                    .iter()
                    .map(|(key, field)| (key.clone(), Self::of(field)))
                    .collect(),
            ),
            Value::Function(function) => Self::Function(Signature::new(
                vec![Self::Any; function.arity()],
                match type_of(value) {
                    TypeTag::Async => Self::Opaque("Promise"),
                    _ => Self::Any,
                },
            )),
            Value::Date(_) => Self::Opaque("Date"),
            Value::RegExp(_) => Self::Opaque("RegExp"),
            Value::Set(_) => Self::Opaque("Set"),
            Value::Error(_) => Self::Opaque("Error"),
            Value::Symbol(_) => Self::Opaque("Symbol"),
            Value::Promise(_) => Self::Opaque("Promise"),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Never => formatter.write_str("never"),
            Self::Any => formatter.write_str("any"),
            Self::Undefined => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Boolean => formatter.write_str("boolean"),
            Self::Number => formatter.write_str("number"),
            Self::String => formatter.write_str("string"),
            Self::Literal(literal) => write!(formatter, "{literal}"),
            Self::Array(element) => match element.as_ref() {
                Self::Union(_) | Self::Function(_) => write!(formatter, "({element})[]"),
                _ => write!(formatter, "{element}[]"),
            },
            Self::Object(fields) => {
                formatter.write_str("{")?;
                for (position, (key, field)) in fields.iter().enumerate() {
                    if position > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{key}: {field}")?;
                }
                formatter.write_str("}")
            }
            Self::Function(signature) => {
                formatter.write_str("(")?;
                for (position, param) in signature.params().iter().enumerate() {
                    if position > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{param}")?;
                }
                write!(formatter, ") => {}", signature.returns())
            }
            Self::Opaque(name) => formatter.write_str(name),
            Self::Union(members) => {
                for (position, member) in members.iter().enumerate() {
                    if position > 0 {
                        formatter.write_str(" | ")?;
                    }
                    write!(formatter, "{member}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_absorbs_into_any() {
        assert_eq!(Shape::union([Shape::Number, Shape::Any]), Shape::Any);
    }

    #[test]
    fn test_display_of_nested_shapes() {
        let shape = Shape::object([
            ("list", Shape::array(Shape::union([Shape::Number, Shape::Null]))),
            ("run", Shape::function(vec![Shape::String], Shape::Boolean)),
        ]);
        assert_eq!(
            shape.to_string(),
            "{list: (number | null)[], run: (string) => boolean}"
        );
    }

    #[test]
    fn test_of_empty_array_is_array_of_never() {
        assert_eq!(Shape::of(&Value::Array(vec![])), Shape::array(Shape::Never));
    }
}
