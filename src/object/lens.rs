//! Lenses: composable getter/setter pairs.
//!
//! A lens focuses on one part of a larger structure. [`view`] reads the
//! focus, [`set`] returns a copy of the whole with the focus replaced and
//! [`over`] replaces it with a function of its current value.
//!
//! # Laws
//!
//! Every lens must satisfy three laws:
//!
//! 1. **GetPut**: setting what was viewed changes nothing.
//!    ```text
//!    set(lens, view(lens, s), s) == s
//!    ```
//!
//! 2. **PutGet**: viewing after a set yields the set value.
//!    ```text
//!    view(lens, set(lens, v, s)) == v
//!    ```
//!
//! 3. **PutPut**: the second of two sets wins.
//!    ```text
//!    set(lens, v2, set(lens, v1, s)) == set(lens, v2, s)
//!    ```
//!
//! [`lens_prop`], [`lens_path`] and [`lens_index`] focus on parts of a
//! [`Value`]; [`lens`] and the [`lens!`](crate::lens!) macro build lenses
//! over any type from a getter and a setter.
//!
//! # Examples
//!
//! ```rust
//! use rambars::object::{Lens, lens_path, lens_prop, over, set, view};
//! use rambars::value;
//! use rambars::value::Value;
//!
//! let user = value!({ "name": "ada", "address": { "city": "london" } });
//!
//! let city = lens_prop("address").compose(lens_prop("city"));
//! assert_eq!(view(&city, &user), Value::from("london"));
//!
//! let moved = set(&lens_path("address.city"), value!("paris"), &user);
//! assert_eq!(moved, value!({ "name": "ada", "address": { "city": "paris" } }));
//!
//! let shout = over(&lens_prop("name"), |name| Value::from(name.to_string().to_uppercase()), &user);
//! assert_eq!(view(&lens_prop("name"), &shout), Value::from("ADA"));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::value::{Path, PathSegment, Value};

use super::access;
use super::update::{assoc, assoc_path};

/// A lens from a whole `S` to a focus `A`.
pub trait Lens<S, A> {
    /// Reads the focus.
    fn view(&self, source: &S) -> A;

    /// Returns a copy of `source` with the focus replaced by `value`.
    fn set(&self, value: A, source: &S) -> S;

    /// Returns a copy of `source` with the focus replaced by
    /// `function(focus)`.
    fn over<F>(&self, function: F, source: &S) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.set(function(self.view(source)), source)
    }

    /// Focuses further, through `other`, into the focus of this lens.
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }
}

/// A lens built from a getter and a setter.
///
/// ```rust
/// use rambars::object::{FunctionLens, Lens};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// let x = FunctionLens::new(
///     |point: &Point| point.x,
///     |x: i32, point: &Point| Point { x, ..point.clone() },
/// );
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(x.view(&point), 1);
/// assert_eq!(x.over(|x| x * 10, &point), Point { x: 10, y: 2 });
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(A, &S) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn(&S) -> A>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(A, &S) -> S,
{
    /// Pairs a getter with a setter.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(A, &S) -> S,
{
    fn view(&self, source: &S) -> A {
        (self.getter)(source)
    }

    fn set(&self, value: A, source: &S) -> S {
        (self.setter)(value, source)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A + Clone,
    St: Fn(A, &S) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.getter.clone(), self.setter.clone())
    }
}

impl<S, A, G, St> fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(A, &S) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FunctionLens").finish_non_exhaustive()
    }
}

/// Two lenses applied one after the other; `A` is the intermediate focus.
pub struct ComposedLens<L1, L2, A> {
    outer: L1,
    inner: L2,
    _marker: PhantomData<fn() -> A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Focuses through `outer`, then through `inner`.
    #[must_use]
    pub const fn new(outer: L1, inner: L2) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    fn view(&self, source: &S) -> B {
        self.inner.view(&self.outer.view(source))
    }

    fn set(&self, value: B, source: &S) -> S {
        let intermediate = self.outer.view(source);
        self.outer.set(self.inner.set(value, &intermediate), source)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone())
    }
}

impl<L1: fmt::Debug, L2: fmt::Debug, A> fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

/// Focuses on one property of a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropLens {
    key: PathSegment,
}

impl Lens<Value, Value> for PropLens {
    fn view(&self, source: &Value) -> Value {
        access::prop(self.key.clone(), source)
    }

    fn set(&self, value: Value, source: &Value) -> Value {
        assoc(self.key.clone(), value, source)
    }
}

/// Focuses on the value at a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathLens {
    path: Path,
}

impl Lens<Value, Value> for PathLens {
    fn view(&self, source: &Value) -> Value {
        access::path(&self.path, source)
    }

    fn set(&self, value: Value, source: &Value) -> Value {
        assoc_path(&self.path, value, source)
    }
}

/// Focuses on one element of an array; negative indices count from the
/// end.
///
/// Setting an index outside the array, or on a value that is not an array,
/// returns the source unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexLens {
    index: isize,
}

impl IndexLens {
    fn resolve(self, length: usize) -> Option<usize> {
        let index = if self.index < 0 {
            length.checked_sub(self.index.unsigned_abs())?
        } else {
            self.index.unsigned_abs()
        };
        (index < length).then_some(index)
    }
}

impl Lens<Value, Value> for IndexLens {
    fn view(&self, source: &Value) -> Value {
        source
            .as_array()
            .and_then(|items| self.resolve(items.len()).map(|index| items[index].clone()))
            .unwrap_or_default()
    }

    fn set(&self, value: Value, source: &Value) -> Value {
        let Value::Array(items) = source else {
            return source.clone();
        };
        let Some(index) = self.resolve(items.len()) else {
            tracing::trace!(index = self.index, length = items.len(), "lens index out of range");
            return source.clone();
        };
        let mut items = items.clone();
        items[index] = value;
        Value::Array(items)
    }
}

/// A lens from a getter and a setter.
pub const fn lens<S, A, G, St>(getter: G, setter: St) -> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(A, &S) -> S,
{
    FunctionLens::new(getter, setter)
}

/// A lens on the property `key`.
pub fn lens_prop(key: impl Into<PathSegment>) -> PropLens {
    PropLens { key: key.into() }
}

/// A lens on the value at `path`.
pub fn lens_path(path: impl Into<Path>) -> PathLens {
    PathLens { path: path.into() }
}

/// A lens on the array element at `index`.
#[must_use]
pub const fn lens_index(index: isize) -> IndexLens {
    IndexLens { index }
}

/// Reads the focus of `lens`.
pub fn view<S, A, L: Lens<S, A>>(lens: &L, source: &S) -> A {
    lens.view(source)
}

/// Replaces the focus of `lens`.
pub fn set<S, A, L: Lens<S, A>>(lens: &L, value: A, source: &S) -> S {
    lens.set(value, source)
}

/// Replaces the focus of `lens` with a function of its current value.
pub fn over<S, A, L, F>(lens: &L, function: F, source: &S) -> S
where
    L: Lens<S, A>,
    F: FnOnce(A) -> A,
{
    lens.over(function, source)
}

/// Builds a [`FunctionLens`] focusing on a named struct field.
///
/// The struct must be `Clone` and the field type `Clone`.
///
/// ```rust
/// use rambars::lens;
/// use rambars::object::Lens;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Account { owner: String, balance: i64 }
///
/// let balance = lens!(Account, balance);
/// let account = Account { owner: "ada".to_string(), balance: 10 };
///
/// assert_eq!(balance.over(|amount| amount + 5, &account).balance, 15);
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::object::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| ::std::clone::Clone::clone(&source.$field),
            |value, source: &$struct_type<$($generic),+>| {
                let mut updated = ::std::clone::Clone::clone(source);
                updated.$field = value;
                updated
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::object::FunctionLens::new(
            |source: &$struct_type| ::std::clone::Clone::clone(&source.$field),
            |value, source: &$struct_type| {
                let mut updated = ::std::clone::Clone::clone(source);
                updated.$field = value;
                updated
            },
        )
    };
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::value;

    #[rstest]
    #[case(0, value!(1))]
    #[case(-1, value!(3))]
    #[case(3, Value::Undefined)]
    #[case(-4, Value::Undefined)]
    fn test_index_lens_view(#[case] index: isize, #[case] expected: Value) {
        assert_eq!(view(&lens_index(index), &value!([1, 2, 3])), expected);
    }

    #[test]
    fn test_index_lens_set_out_of_range_is_identity() {
        let list = value!([1, 2]);
        assert_eq!(set(&lens_index(5), value!(0), &list), list);
        assert_eq!(set(&lens_index(-1), value!(0), &list), value!([1, 0]));
    }

    #[test]
    fn test_prop_lens_creates_missing_key() {
        let updated = set(&lens_prop("b"), value!(2), &value!({ "a": 1 }));
        assert_eq!(updated, value!({ "a": 1, "b": 2 }));
    }

    #[test]
    fn test_composed_lens_matches_path_lens() {
        let data = value!({ "a": { "b": [1, 2] } });
        let composed = lens_prop("a").compose(lens_prop("b")).compose(lens_index(1));
        let path = lens_path("a.b.1");
        assert_eq!(view(&composed, &data), view(&path, &data));
        assert_eq!(set(&composed, value!(9), &data), set(&path, value!(9), &data));
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_lens_macro_over_struct() {
        let y = lens!(Point, y);
        let point = Point { x: 1, y: 2 };
        assert_eq!(y.view(&point), 2);
        assert_eq!(y.set(7, &point), Point { x: 1, y: 7 });
    }
}
