//! Data-last curried forms of the catalog.
//!
//! Each function here takes every argument of its namesake except the last
//! one and returns a closure expecting that last argument, the data. The
//! closures compose directly with [`pipe!`](crate::pipe!):
//!
//! ```rust
//! use rambars::curried::{filter, map, take};
//! use rambars::pipe;
//!
//! let top_doubled = pipe!(
//!     filter(|x: &i32| x % 2 == 1),
//!     |odd: Vec<i32>| map(|x: &i32| x * 2)(&odd),
//!     |doubled: Vec<i32>| take(2)(doubled.as_slice()),
//! );
//!
//! assert_eq!(top_doubled(&[1, 2, 3, 4, 5]), vec![2, 6]);
//! ```
//!
//! Fixed arguments are captured by value and cloned on every call when the
//! underlying function consumes them.

use std::cmp::Ordering;

use regex::Regex;

use crate::dictionary::{self, Dictionary};
use crate::list::{self, Sequence};
use crate::object::{self, Lens, PropList};
use crate::value::{Path, PathSegment, Value};
use crate::{logic, math, string};

// Lists.

/// See [`list::map`].
pub fn map<T, U, F>(function: F) -> impl Fn(&[T]) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    move |items: &[T]| list::map(&function, items)
}

/// See [`list::filter`].
pub fn filter<T, P>(predicate: P) -> impl Fn(&[T]) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    move |items: &[T]| list::filter(&predicate, items)
}

/// See [`list::reject`].
pub fn reject<T, P>(predicate: P) -> impl Fn(&[T]) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    move |items: &[T]| list::reject(&predicate, items)
}

/// See [`list::chain`].
pub fn chain<T, U, F>(function: F) -> impl Fn(&[T]) -> Vec<U>
where
    F: Fn(&T) -> Vec<U>,
{
    move |items: &[T]| list::chain(&function, items)
}

/// See [`list::reduce`].
pub fn reduce<T, A, F>(reducer: F, initial: A) -> impl Fn(&[T]) -> A
where
    A: Clone,
    F: Fn(A, &T) -> A,
{
    move |items: &[T]| list::reduce(&reducer, initial.clone(), items)
}

/// See [`list::all`].
pub fn all<T, P>(predicate: P) -> impl Fn(&[T]) -> bool
where
    P: Fn(&T) -> bool,
{
    move |items: &[T]| list::all(&predicate, items)
}

/// See [`list::any`].
pub fn any<T, P>(predicate: P) -> impl Fn(&[T]) -> bool
where
    P: Fn(&T) -> bool,
{
    move |items: &[T]| list::any(&predicate, items)
}

/// See [`list::none`].
pub fn none<T, P>(predicate: P) -> impl Fn(&[T]) -> bool
where
    P: Fn(&T) -> bool,
{
    move |items: &[T]| list::none(&predicate, items)
}

/// See [`list::find`]; the match is returned by value.
pub fn find<T, P>(predicate: P) -> impl Fn(&[T]) -> Option<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    move |items: &[T]| list::find(&predicate, items).cloned()
}

/// See [`list::find_index`].
pub fn find_index<T, P>(predicate: P) -> impl Fn(&[T]) -> Option<usize>
where
    P: Fn(&T) -> bool,
{
    move |items: &[T]| list::find_index(&predicate, items)
}

/// See [`list::includes`].
pub fn includes<T: PartialEq>(target: T) -> impl Fn(&[T]) -> bool {
    move |items: &[T]| list::includes(&target, items)
}

/// See [`list::partition`].
pub fn partition<T, P>(predicate: P) -> impl Fn(&[T]) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    move |items: &[T]| list::partition(&predicate, items)
}

/// See [`list::group_with`].
pub fn group_with<T, F>(same_group: F) -> impl Fn(&[T]) -> Vec<Vec<T>>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    move |items: &[T]| list::group_with(&same_group, items)
}

/// See [`list::take`].
#[must_use]
pub fn take<S: Sequence + ?Sized>(count: usize) -> impl Fn(&S) -> S::Owned {
    move |sequence: &S| list::take(count, sequence)
}

/// See [`list::take_last`].
#[must_use]
pub fn take_last<S: Sequence + ?Sized>(count: usize) -> impl Fn(&S) -> S::Owned {
    move |sequence: &S| list::take_last(count, sequence)
}

/// See [`list::drop`].
#[must_use]
pub fn drop<S: Sequence + ?Sized>(count: usize) -> impl Fn(&S) -> S::Owned {
    move |sequence: &S| list::drop(count, sequence)
}

/// See [`list::drop_last`].
#[must_use]
pub fn drop_last<S: Sequence + ?Sized>(count: usize) -> impl Fn(&S) -> S::Owned {
    move |sequence: &S| list::drop_last(count, sequence)
}

/// See [`list::nth`].
#[must_use]
pub fn nth<S: Sequence + ?Sized>(index: isize) -> impl Fn(&S) -> Option<S::Item> {
    move |sequence: &S| list::nth(index, sequence)
}

/// See [`list::slice`].
#[must_use]
pub fn slice<S: Sequence + ?Sized>(from: isize, to: isize) -> impl Fn(&S) -> S::Owned {
    move |sequence: &S| list::slice(from, to, sequence)
}

/// See [`list::split_every`].
#[must_use]
pub fn split_every<S: Sequence + ?Sized>(size: usize) -> impl Fn(&S) -> Vec<S::Owned> {
    move |sequence: &S| list::split_every(size, sequence)
}

/// See [`list::append`].
pub fn append<T: Clone>(item: T) -> impl Fn(&[T]) -> Vec<T> {
    move |items: &[T]| list::append(item.clone(), items)
}

/// See [`list::prepend`].
pub fn prepend<T: Clone>(item: T) -> impl Fn(&[T]) -> Vec<T> {
    move |items: &[T]| list::prepend(item.clone(), items)
}

/// See [`list::adjust`].
pub fn adjust<T, F>(index: isize, function: F) -> impl Fn(&[T]) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    move |items: &[T]| list::adjust(index, &function, items)
}

/// See [`list::update`].
pub fn update<T: Clone>(index: isize, value: T) -> impl Fn(&[T]) -> Vec<T> {
    move |items: &[T]| list::update(index, value.clone(), items)
}

/// See [`list::without`].
pub fn without<T: Clone + PartialEq>(removed: Vec<T>) -> impl Fn(&[T]) -> Vec<T> {
    move |items: &[T]| list::without(&removed, items)
}

/// See [`list::difference`]; the fixed list is the first operand.
pub fn difference<T: Clone + PartialEq>(first: Vec<T>) -> impl Fn(&[T]) -> Vec<T> {
    move |second: &[T]| list::difference(&first, second)
}

/// See [`list::union`].
pub fn union<T: Clone + PartialEq>(first: Vec<T>) -> impl Fn(&[T]) -> Vec<T> {
    move |second: &[T]| list::union(&first, second)
}

/// See [`list::intersection`].
pub fn intersection<T: Clone + PartialEq>(first: Vec<T>) -> impl Fn(&[T]) -> Vec<T> {
    move |second: &[T]| list::intersection(&first, second)
}

/// See [`list::sort`].
pub fn sort<T, F>(comparator: F) -> impl Fn(&[T]) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    move |items: &[T]| list::sort(&comparator, items)
}

/// See [`list::sort_by`].
pub fn sort_by<T, K, F>(key: F) -> impl Fn(&[T]) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    move |items: &[T]| list::sort_by(&key, items)
}

/// See [`list::zip`].
pub fn zip<A: Clone, B: Clone>(left: Vec<A>) -> impl Fn(&[B]) -> Vec<(A, B)> {
    move |right: &[B]| list::zip(&left, right)
}

/// See [`list::zip_with`].
pub fn zip_with<A, B, R, F>(function: F, left: Vec<A>) -> impl Fn(&[B]) -> Vec<R>
where
    F: Fn(&A, &B) -> R,
{
    move |right: &[B]| list::zip_with(&function, &left, right)
}

// Dictionaries.

/// See [`dictionary::map_object`].
pub fn map_object<T, U, F>(function: F) -> impl Fn(&Dictionary<T>) -> Dictionary<U>
where
    F: Fn(&T, &str) -> U,
{
    move |entries: &Dictionary<T>| dictionary::map_object(&function, entries)
}

/// See [`dictionary::filter_object`].
pub fn filter_object<T, P>(predicate: P) -> impl Fn(&Dictionary<T>) -> Dictionary<T>
where
    T: Clone,
    P: Fn(&T, &str) -> bool,
{
    move |entries: &Dictionary<T>| dictionary::filter_object(&predicate, entries)
}

/// See [`dictionary::group_by`].
pub fn group_by<T, F>(key: F) -> impl Fn(&[T]) -> Dictionary<Vec<T>>
where
    T: Clone,
    F: Fn(&T) -> String,
{
    move |items: &[T]| dictionary::group_by(&key, items)
}

/// See [`dictionary::index_by`].
pub fn index_by<T, F>(key: F) -> impl Fn(&[T]) -> Dictionary<T>
where
    T: Clone,
    F: Fn(&T) -> String,
{
    move |items: &[T]| dictionary::index_by(&key, items)
}

// Objects.

/// See [`object::prop`].
pub fn prop(key: impl Into<PathSegment>) -> impl Fn(&Value) -> Value {
    let key = key.into();
    move |source: &Value| object::prop(key.clone(), source)
}

/// See [`object::prop_or`].
pub fn prop_or(fallback: Value, key: impl Into<PathSegment>) -> impl Fn(&Value) -> Value {
    let key = key.into();
    move |source: &Value| object::prop_or(&fallback, key.clone(), source)
}

/// See [`object::prop_eq`].
pub fn prop_eq(key: impl Into<PathSegment>, expected: Value) -> impl Fn(&Value) -> bool {
    let key = key.into();
    move |source: &Value| object::prop_eq(key.clone(), &expected, source)
}

/// See [`object::path`].
pub fn path(path: impl Into<Path>) -> impl Fn(&Value) -> Value {
    let path = path.into();
    move |source: &Value| object::path(&path, source)
}

/// See [`object::path_or`].
pub fn path_or(fallback: Value, path: impl Into<Path>) -> impl Fn(&Value) -> Value {
    let path = path.into();
    move |source: &Value| object::path_or(&fallback, &path, source)
}

/// See [`object::has`].
pub fn has(key: impl Into<PathSegment>) -> impl Fn(&Value) -> bool {
    let key = key.into();
    move |source: &Value| object::has(key.clone(), source)
}

/// See [`object::assoc`].
pub fn assoc(key: impl Into<PathSegment>, value: Value) -> impl Fn(&Value) -> Value {
    let key = key.into();
    move |source: &Value| object::assoc(key.clone(), value.clone(), source)
}

/// See [`object::assoc_path`].
pub fn assoc_path(path: impl Into<Path>, value: Value) -> impl Fn(&Value) -> Value {
    let path = path.into();
    move |source: &Value| object::assoc_path(&path, value.clone(), source)
}

/// See [`object::dissoc`].
pub fn dissoc(key: impl Into<PathSegment>) -> impl Fn(&Value) -> Value {
    let key = key.into();
    move |source: &Value| object::dissoc(key.clone(), source)
}

/// See [`object::omit`].
pub fn omit(names: impl Into<PropList>) -> impl Fn(&Value) -> Value {
    let names = names.into();
    move |source: &Value| object::omit(names.clone(), source)
}

/// See [`object::pick`].
pub fn pick(names: impl Into<PropList>) -> impl Fn(&Value) -> Value {
    let names = names.into();
    move |source: &Value| object::pick(names.clone(), source)
}

/// See [`object::merge`]; the fixed object is the target.
#[must_use]
pub fn merge(target: Value) -> impl Fn(&Value) -> Value {
    move |source: &Value| object::merge(&target, source)
}

/// See [`object::merge_deep_right`]; the fixed object is the target.
#[must_use]
pub fn merge_deep_right(target: Value) -> impl Fn(&Value) -> Value {
    move |source: &Value| object::merge_deep_right(&target, source)
}

/// See [`object::pluck`].
pub fn pluck(key: impl Into<PathSegment>) -> impl Fn(&[Value]) -> Vec<Value> {
    let key = key.into();
    move |items: &[Value]| object::pluck(key.clone(), items)
}

/// See [`object::where_eq`].
#[must_use]
pub fn where_eq(pattern: Value) -> impl Fn(&Value) -> bool {
    move |source: &Value| object::where_eq(&pattern, source)
}

/// See [`object::view`].
pub fn view<S, A, L: Lens<S, A>>(lens: L) -> impl Fn(&S) -> A {
    move |source: &S| lens.view(source)
}

/// See [`object::set`].
pub fn set<S, A: Clone, L: Lens<S, A>>(lens: L, value: A) -> impl Fn(&S) -> S {
    move |source: &S| lens.set(value.clone(), source)
}

/// See [`object::over`].
pub fn over<S, A, L, F>(lens: L, function: F) -> impl Fn(&S) -> S
where
    L: Lens<S, A>,
    F: Fn(A) -> A,
{
    move |source: &S| lens.over(&function, source)
}

// Numbers, strings and values.

/// See [`math::add`].
#[must_use]
pub fn add(left: f64) -> impl Fn(f64) -> f64 {
    move |right| math::add(left, right)
}

/// See [`math::subtract`]; computes `left - right`.
#[must_use]
pub fn subtract(left: f64) -> impl Fn(f64) -> f64 {
    move |right| math::subtract(left, right)
}

/// See [`math::multiply`].
#[must_use]
pub fn multiply(left: f64) -> impl Fn(f64) -> f64 {
    move |right| math::multiply(left, right)
}

/// See [`math::divide`]; computes `left / right`.
#[must_use]
pub fn divide(left: f64) -> impl Fn(f64) -> f64 {
    move |right| math::divide(left, right)
}

/// See [`math::clamp`].
pub fn clamp<T: PartialOrd + Clone>(low: T, high: T) -> impl Fn(T) -> T {
    move |value| math::clamp(low.clone(), high.clone(), value)
}

/// See [`string::split`].
pub fn split(separator: impl Into<String>) -> impl Fn(&str) -> Vec<String> {
    let separator = separator.into();
    move |text: &str| string::split(&separator, text)
}

/// See [`string::join`].
pub fn join<T: std::fmt::Display>(separator: impl Into<String>) -> impl Fn(&[T]) -> String {
    let separator = separator.into();
    move |items: &[T]| string::join(&separator, items)
}

/// See [`string::replace`].
pub fn replace(pattern: Regex, replacement: impl Into<String>) -> impl Fn(&str) -> String {
    let replacement = replacement.into();
    move |text: &str| string::replace(&pattern, &replacement, text)
}

/// See [`string::replace_all`].
pub fn replace_all(pattern: Regex, replacement: impl Into<String>) -> impl Fn(&str) -> String {
    let replacement = replacement.into();
    move |text: &str| string::replace_all(&pattern, &replacement, text)
}

/// See [`string::match_all`].
#[must_use]
pub fn match_all(pattern: Regex) -> impl Fn(&str) -> Vec<String> {
    move |text: &str| string::match_all(&pattern, text)
}

/// See [`string::test`].
#[must_use]
pub fn test(pattern: Regex) -> impl Fn(&str) -> bool {
    move |text: &str| string::test(&pattern, text)
}

/// See [`logic::default_to`].
#[must_use]
pub fn default_to(fallback: Value) -> impl Fn(&Value) -> Value {
    move |value: &Value| logic::default_to(&fallback, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    #[test]
    fn test_list_forms_are_reusable() {
        let evens = filter(|x: &i32| x % 2 == 0);
        assert_eq!(evens(&[1, 2, 3, 4]), vec![2, 4]);
        assert_eq!(evens(&[6, 7]), vec![6]);
    }

    #[test]
    fn test_sequence_forms_work_on_strings() {
        let first_two = take::<str>(2);
        assert_eq!(first_two("rambda"), "ra");
        assert_eq!(nth::<str>(-1)("xyz"), Some('z'));
    }

    #[test]
    fn test_reduce_clones_initial() {
        let total = reduce(|sum: i32, x: &i32| sum + x, 10);
        assert_eq!(total(&[1, 2]), 13);
        assert_eq!(total(&[5]), 15);
    }

    #[test]
    fn test_object_forms() {
        let user = value!({ "name": "ada", "role": "admin" });
        assert_eq!(prop("name")(&user), Value::from("ada"));
        assert!(prop_eq("role", Value::from("admin"))(&user));
        assert_eq!(omit("role")(&user), value!({ "name": "ada" }));
        assert_eq!(assoc_path("a.b", value!(1))(&value!({})), value!({ "a": { "b": 1 } }));
    }

    #[test]
    fn test_lens_forms() {
        let name = object::lens_prop("name");
        let data = value!({ "name": "ada" });
        assert_eq!(view(name.clone())(&data), Value::from("ada"));
        assert_eq!(set(name, value!("alan"))(&data), value!({ "name": "alan" }));
    }

    #[test]
    fn test_math_keeps_argument_order() {
        assert_eq!(subtract(10.0)(3.0), 7.0);
        assert_eq!(clamp(1, 5)(9), 5);
    }

    #[test]
    fn test_string_forms() {
        let words = Regex::new(r"\w+").unwrap();
        assert_eq!(match_all(words)("hi there"), vec!["hi", "there"]);
        assert_eq!(split(",")("a,b"), vec!["a", "b"]);
        assert_eq!(join("-")(&[1, 2][..]), "1-2");
    }
}
