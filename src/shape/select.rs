//! Selecting union members.

use super::Shape;
use crate::value::{TypeTag, Value, type_of};

/// The members of `union` assignable to `pattern`.
///
/// A non-union input is treated as a one-member union. No survivors yields
/// [`Shape::Never`] and a single survivor is returned as is.
///
/// ```rust
/// use rambars::shape::{Shape, select};
///
/// let circle = Shape::object([("kind", Shape::literal("circle")), ("radius", Shape::Number)]);
/// let square = Shape::object([("kind", Shape::literal("square")), ("side", Shape::Number)]);
/// let shapes = Shape::union([circle.clone(), square]);
///
/// assert_eq!(select(&shapes, &Shape::object([("kind", Shape::literal("circle"))])), circle);
/// assert_eq!(select(&shapes, &Shape::String), Shape::Never);
/// ```
#[must_use]
pub fn select(union: &Shape, pattern: &Shape) -> Shape {
    Shape::union(
        union
            .members()
            .iter()
            .filter(|member| member.is_assignable_to(pattern))
            .cloned(),
    )
}

/// The values whose inferred shape is assignable to `pattern`.
///
/// ```rust
/// use rambars::shape::{Shape, select_values};
/// use rambars::value;
///
/// let events = [
///     value!({ "type": "click", "x": 1 }),
///     value!({ "type": "key", "code": 13 }),
/// ];
/// let clicks = select_values(&events, &Shape::object([("type", Shape::literal("click"))]));
///
/// assert_eq!(clicks, vec![&events[0]]);
/// ```
#[must_use]
pub fn select_values<'a>(values: &'a [Value], pattern: &Shape) -> Vec<&'a Value> {
    values
        .iter()
        .filter(|value| Shape::of(value).is_assignable_to(pattern))
        .collect()
}

/// A type whose variants carry an explicit discriminant.
pub trait Discriminated {
    /// The discriminant type.
    type Tag: PartialEq;

    /// The discriminant of this value.
    fn tag(&self) -> Self::Tag;
}

impl Discriminated for Value {
    type Tag = TypeTag;

    fn tag(&self) -> TypeTag {
        type_of(self)
    }
}

/// The items whose discriminant equals `tag`.
///
/// ```rust
/// use rambars::shape::{Discriminated, select_by_tag};
///
/// #[derive(Debug, PartialEq)]
/// enum Event {
///     Click(i32),
///     Key(u32),
/// }
///
/// impl Discriminated for Event {
///     type Tag = &'static str;
///
///     fn tag(&self) -> &'static str {
///         match self {
///             Self::Click(_) => "click",
///             Self::Key(_) => "key",
///         }
///     }
/// }
///
/// let events = [Event::Click(1), Event::Key(13), Event::Click(2)];
/// assert_eq!(select_by_tag(&events, &"click"), vec![&Event::Click(1), &Event::Click(2)]);
/// ```
#[must_use]
pub fn select_by_tag<'a, T>(items: &'a [T], tag: &T::Tag) -> Vec<&'a T>
where
    T: Discriminated,
{
    items.iter().filter(|item| item.tag() == *tag).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_on_non_union() {
        assert_eq!(select(&Shape::Number, &Shape::Number), Shape::Number);
        assert_eq!(select(&Shape::Number, &Shape::String), Shape::Never);
    }

    #[test]
    fn test_select_keeps_several_members() {
        let union = Shape::union([Shape::literal("a"), Shape::literal("b"), Shape::Number]);
        assert_eq!(
            select(&union, &Shape::String),
            Shape::union([Shape::literal("a"), Shape::literal("b")])
        );
    }

    #[test]
    fn test_select_by_type_tag() {
        let values = [Value::from(1), Value::from("x"), Value::Null, Value::from(2)];
        assert_eq!(
            select_by_tag(&values, &TypeTag::Number),
            vec![&values[0], &values[3]]
        );
    }
}
