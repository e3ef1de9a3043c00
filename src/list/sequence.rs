//! Functions that work on both lists and strings.
//!
//! A string is treated as a sequence of `char`s, and results are rebuilt in
//! the input's owned form: slicing a `str` gives a `String`, slicing a
//! `[T]` gives a `Vec<T>`.
//!
//! Index arguments are `isize`; a negative index counts from the end.

use std::borrow::Cow;

/// A finite ordered sequence that can be rebuilt from its items.
pub trait Sequence {
    /// The element type.
    type Item: Clone;
    /// The owned form results are returned in.
    type Owned;

    /// The items in order.
    fn to_items(&self) -> Cow<'_, [Self::Item]>;

    /// Rebuilds the owned form from items.
    fn from_items(items: Vec<Self::Item>) -> Self::Owned;
}

impl<T: Clone> Sequence for [T] {
    type Item = T;
    type Owned = Vec<T>;

    fn to_items(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self)
    }

    fn from_items(items: Vec<T>) -> Vec<T> {
        items
    }
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;
    type Owned = Self;

    fn to_items(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self)
    }

    fn from_items(items: Vec<T>) -> Self {
        items
    }
}

impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;
    type Owned = Vec<T>;

    fn to_items(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self)
    }

    fn from_items(items: Vec<T>) -> Vec<T> {
        items
    }
}

impl Sequence for str {
    type Item = char;
    type Owned = String;

    fn to_items(&self) -> Cow<'_, [char]> {
        Cow::Owned(self.chars().collect())
    }

    fn from_items(items: Vec<char>) -> String {
        items.into_iter().collect()
    }
}

impl Sequence for String {
    type Item = char;
    type Owned = Self;

    fn to_items(&self) -> Cow<'_, [char]> {
        Cow::Owned(self.chars().collect())
    }

    fn from_items(items: Vec<char>) -> Self {
        items.into_iter().collect()
    }
}

fn rebuild<S: Sequence + ?Sized>(items: &[S::Item]) -> S::Owned {
    S::from_items(items.to_vec())
}

// Resolves a possibly negative index against `length`, clamped to `0..=length`.
fn resolve_index(index: isize, length: usize) -> usize {
    if index < 0 {
        length.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs().min(length)
    }
}

/// Number of items; the `char` count for strings.
pub fn length<S: Sequence + ?Sized>(sequence: &S) -> usize {
    sequence.to_items().len()
}

/// The item at `index`, counting from the end when negative.
///
/// ```rust
/// use rambars::list::nth;
///
/// assert_eq!(nth(-1, &[1, 2, 3]), Some(3));
/// assert_eq!(nth(1, "abc"), Some('b'));
/// assert_eq!(nth(5, "abc"), None);
/// ```
pub fn nth<S: Sequence + ?Sized>(index: isize, sequence: &S) -> Option<S::Item> {
    let items = sequence.to_items();
    let position = if index < 0 {
        items.len().checked_sub(index.unsigned_abs())?
    } else {
        index.unsigned_abs()
    };
    items.get(position).cloned()
}

/// The first item.
pub fn head<S: Sequence + ?Sized>(sequence: &S) -> Option<S::Item> {
    sequence.to_items().first().cloned()
}

/// The last item.
pub fn last<S: Sequence + ?Sized>(sequence: &S) -> Option<S::Item> {
    sequence.to_items().last().cloned()
}

/// Everything but the first item.
pub fn tail<S: Sequence + ?Sized>(sequence: &S) -> S::Owned {
    let items = sequence.to_items();
    rebuild::<S>(items.get(1..).unwrap_or_default())
}

/// Everything but the last item.
pub fn init<S: Sequence + ?Sized>(sequence: &S) -> S::Owned {
    let items = sequence.to_items();
    rebuild::<S>(&items[..items.len().saturating_sub(1)])
}

/// The first `count` items.
pub fn take<S: Sequence + ?Sized>(count: usize, sequence: &S) -> S::Owned {
    let items = sequence.to_items();
    rebuild::<S>(&items[..count.min(items.len())])
}

/// The last `count` items.
pub fn take_last<S: Sequence + ?Sized>(count: usize, sequence: &S) -> S::Owned {
    let items = sequence.to_items();
    rebuild::<S>(&items[items.len().saturating_sub(count)..])
}

/// All but the first `count` items.
pub fn drop<S: Sequence + ?Sized>(count: usize, sequence: &S) -> S::Owned {
    let items = sequence.to_items();
    rebuild::<S>(&items[count.min(items.len())..])
}

/// All but the last `count` items.
pub fn drop_last<S: Sequence + ?Sized>(count: usize, sequence: &S) -> S::Owned {
    let items = sequence.to_items();
    rebuild::<S>(&items[..items.len().saturating_sub(count)])
}

/// The longest prefix whose items all satisfy `predicate`.
pub fn take_while<S, P>(predicate: P, sequence: &S) -> S::Owned
where
    S: Sequence + ?Sized,
    P: Fn(&S::Item) -> bool,
{
    let items = sequence.to_items();
    let end = items.iter().position(|item| !predicate(item)).unwrap_or(items.len());
    rebuild::<S>(&items[..end])
}

/// What remains after removing the longest prefix satisfying `predicate`.
pub fn drop_while<S, P>(predicate: P, sequence: &S) -> S::Owned
where
    S: Sequence + ?Sized,
    P: Fn(&S::Item) -> bool,
{
    let items = sequence.to_items();
    let start = items.iter().position(|item| !predicate(item)).unwrap_or(items.len());
    rebuild::<S>(&items[start..])
}

/// The longest suffix whose items all satisfy `predicate`.
///
/// ```rust
/// use rambars::list::take_last_while;
///
/// assert_eq!(take_last_while(|c: &char| c.is_ascii_digit(), "order66"), "66");
/// ```
pub fn take_last_while<S, P>(predicate: P, sequence: &S) -> S::Owned
where
    S: Sequence + ?Sized,
    P: Fn(&S::Item) -> bool,
{
    let items = sequence.to_items();
    let start = items.iter().rposition(|item| !predicate(item)).map_or(0, |index| index + 1);
    rebuild::<S>(&items[start..])
}

/// What remains after removing the longest suffix satisfying `predicate`.
pub fn drop_last_while<S, P>(predicate: P, sequence: &S) -> S::Owned
where
    S: Sequence + ?Sized,
    P: Fn(&S::Item) -> bool,
{
    let items = sequence.to_items();
    let end = items.iter().rposition(|item| !predicate(item)).map_or(0, |index| index + 1);
    rebuild::<S>(&items[..end])
}

/// The items in reverse order.
pub fn reverse<S: Sequence + ?Sized>(sequence: &S) -> S::Owned {
    let mut items = sequence.to_items().into_owned();
    items.reverse();
    S::from_items(items)
}

/// `first` followed by `second`.
pub fn concat<S: Sequence + ?Sized>(first: &S, second: &S) -> S::Owned {
    let mut items = first.to_items().into_owned();
    items.extend_from_slice(&second.to_items());
    S::from_items(items)
}

/// The items from `from` up to, not including, `to`.
///
/// Both bounds count from the end when negative and are clamped to the
/// sequence; an empty range yields an empty result.
///
/// ```rust
/// use rambars::list::slice;
///
/// assert_eq!(slice(1, -1, &[1, 2, 3, 4]), vec![2, 3]);
/// assert_eq!(slice(-3, 100, "rambars"), "ars");
/// assert_eq!(slice(3, 1, "rambars"), "");
/// ```
pub fn slice<S: Sequence + ?Sized>(from: isize, to: isize, sequence: &S) -> S::Owned {
    let items = sequence.to_items();
    let start = resolve_index(from, items.len());
    let end = resolve_index(to, items.len());
    if start >= end {
        return S::from_items(Vec::new());
    }
    rebuild::<S>(&items[start..end])
}

/// Splits before `index`, counting from the end when negative.
pub fn split_at<S: Sequence + ?Sized>(index: isize, sequence: &S) -> (S::Owned, S::Owned) {
    let items = sequence.to_items();
    let (left, right) = items.split_at(resolve_index(index, items.len()));
    (rebuild::<S>(left), rebuild::<S>(right))
}

/// Consecutive chunks of `size` items; the last chunk may be shorter.
///
/// A size of zero is treated as one.
///
/// ```rust
/// use rambars::list::split_every;
///
/// assert_eq!(split_every(3, "abcdefg"), vec!["abc", "def", "g"]);
/// ```
pub fn split_every<S: Sequence + ?Sized>(size: usize, sequence: &S) -> Vec<S::Owned> {
    sequence
        .to_items()
        .chunks(size.max(1))
        .map(rebuild::<S>)
        .collect()
}

/// `true` when `sequence` begins with `prefix`.
pub fn starts_with<S>(prefix: &S, sequence: &S) -> bool
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    sequence.to_items().starts_with(&prefix.to_items())
}

/// `true` when `sequence` ends with `suffix`.
pub fn ends_with<S>(suffix: &S, sequence: &S) -> bool
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    sequence.to_items().ends_with(&suffix.to_items())
}
