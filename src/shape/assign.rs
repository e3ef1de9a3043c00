//! Structural assignability.

use super::{Shape, Signature};

impl Shape {
    /// `true` when every value of `self` is also a value of `target`.
    ///
    /// - `Never` is assignable to everything and only `Never` is assignable
    ///   to it.
    /// - `Any` is assignable both ways with every inhabited shape.
    /// - A union source must fit member-wise; a union target accepts a
    ///   source that fits any member.
    /// - Literals widen to their primitive.
    /// - Arrays are covariant.
    /// - Objects use width subtyping: the source may carry extra keys, and
    ///   may omit a key whose target shape admits `undefined`.
    /// - Functions take fewer or contravariant parameters and return a
    ///   covariant result.
    ///
    /// ```rust
    /// use rambars::shape::Shape;
    ///
    /// let wide = Shape::object([("id", Shape::Number), ("name", Shape::String)]);
    /// let narrow = Shape::object([("id", Shape::Number)]);
    ///
    /// assert!(wide.is_assignable_to(&narrow));
    /// assert!(!narrow.is_assignable_to(&wide));
    /// assert!(Shape::literal("a").is_assignable_to(&Shape::String));
    /// ```
    #[must_use]
    pub fn is_assignable_to(&self, target: &Self) -> bool {
        match (self, target) {
            (Self::Never, _) | (_, Self::Any) => true,
            (_, Self::Never) => false,
            (Self::Any, _) => true,
            (Self::Union(members), _) => members.iter().all(|member| member.is_assignable_to(target)),
            (_, Self::Union(members)) => members.iter().any(|member| self.is_assignable_to(member)),
            (Self::Literal(source), Self::Literal(expected)) => source == expected,
            (Self::Literal(source), _) => source.base() == *target,
            (Self::Array(source), Self::Array(expected)) => source.is_assignable_to(expected),
            (Self::Object(source), Self::Object(expected)) => expected.iter().all(|(key, field)| {
                source.get(key).map_or_else(
                    || Self::Undefined.is_assignable_to(field),
                    |present| present.is_assignable_to(field),
                )
            }),
            (Self::Function(source), Self::Function(expected)) => source.is_subtype_of(expected),
            (Self::Opaque(source), Self::Opaque(expected)) => source == expected,
            _ => self == target,
        }
    }
}

impl Signature {
    fn is_subtype_of(&self, expected: &Self) -> bool {
        self.params().len() <= expected.params().len()
            && self
                .params()
                .iter()
                .zip(expected.params())
                .all(|(mine, theirs)| theirs.is_assignable_to(mine))
            && self.returns().is_assignable_to(expected.returns())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Shape::Never, Shape::Never, true)]
    #[case(Shape::Number, Shape::Never, false)]
    #[case(Shape::Any, Shape::Never, false)]
    #[case(Shape::Any, Shape::Number, true)]
    #[case(Shape::Number, Shape::Any, true)]
    #[case(Shape::Null, Shape::Undefined, false)]
    #[case(Shape::literal("a"), Shape::literal("b"), false)]
    #[case(Shape::union([Shape::Number, Shape::String]), Shape::Number, false)]
    #[case(Shape::Number, Shape::union([Shape::Number, Shape::String]), true)]
    #[case(Shape::Opaque("Date"), Shape::Opaque("RegExp"), false)]
    fn test_assignability_table(#[case] source: Shape, #[case] target: Shape, #[case] expected: bool) {
        assert_eq!(source.is_assignable_to(&target), expected);
    }

    #[test]
    fn test_optional_key_may_be_missing() {
        let target = Shape::object([
            ("id", Shape::Number),
            ("note", Shape::union([Shape::String, Shape::Undefined])),
        ]);
        let source = Shape::object([("id", Shape::Number)]);
        assert!(source.is_assignable_to(&target));
    }

    #[test]
    fn test_functions_are_contravariant_in_parameters() {
        let general = Shape::function(vec![Shape::Any], Shape::Number);
        let specific = Shape::function(vec![Shape::Number], Shape::Number);
        assert!(general.is_assignable_to(&specific));
        assert!(!specific.is_assignable_to(&Shape::function(vec![Shape::String], Shape::Number)));
    }

    #[test]
    fn test_fewer_parameters_are_allowed() {
        let nullary = Shape::function(vec![], Shape::Boolean);
        let unary = Shape::function(vec![Shape::String], Shape::Boolean);
        assert!(nullary.is_assignable_to(&unary));
        assert!(!unary.is_assignable_to(&nullary));
    }
}
