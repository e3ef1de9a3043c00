//! Element-wise transformation and reshaping of lists.

use std::cmp::Ordering;

use crate::value::Value;

/// Applies `function` to every element.
pub fn map<T, U, F>(function: F, list: &[T]) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    list.iter().map(function).collect()
}

/// Applies `function` to every element and its index.
pub fn map_indexed<T, U, F>(function: F, list: &[T]) -> Vec<U>
where
    F: Fn(&T, usize) -> U,
{
    list.iter()
        .enumerate()
        .map(|(index, item)| function(item, index))
        .collect()
}

/// The elements satisfying `predicate`.
pub fn filter<T, P>(predicate: P, list: &[T]) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    list.iter().filter(|item| predicate(item)).cloned().collect()
}

/// The elements satisfying `predicate`, which also receives the index.
pub fn filter_indexed<T, P>(predicate: P, list: &[T]) -> Vec<T>
where
    T: Clone,
    P: Fn(&T, usize) -> bool,
{
    list.iter()
        .enumerate()
        .filter(|(index, item)| predicate(item, *index))
        .map(|(_, item)| item.clone())
        .collect()
}

/// The elements not satisfying `predicate`.
pub fn reject<T, P>(predicate: P, list: &[T]) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    list.iter().filter(|item| !predicate(item)).cloned().collect()
}

/// Maps every element to a list and concatenates the results.
pub fn chain<T, U, F>(function: F, list: &[T]) -> Vec<U>
where
    F: Fn(&T) -> Vec<U>,
{
    list.iter().flat_map(function).collect()
}

/// Folds the list from the left.
pub fn reduce<T, A, F>(reducer: F, initial: A, list: &[T]) -> A
where
    F: Fn(A, &T) -> A,
{
    list.iter().fold(initial, reducer)
}

/// Runs `effect` on every element and returns the list.
pub fn for_each<T, F>(effect: F, list: &[T]) -> &[T]
where
    F: Fn(&T),
{
    list.iter().for_each(effect);
    list
}

fn position_of(index: isize, length: usize) -> Option<usize> {
    let position = if index < 0 {
        length.checked_sub(index.unsigned_abs())?
    } else {
        index.unsigned_abs()
    };
    (position < length).then_some(position)
}

/// Replaces the element at `index` with `function` applied to it.
///
/// A negative index counts from the end; an index out of range leaves the
/// list unchanged.
///
/// ```rust
/// use rambars::list::adjust;
///
/// assert_eq!(adjust(-1, |x: &i32| x * 10, &[1, 2, 3]), vec![1, 2, 30]);
/// assert_eq!(adjust(7, |x: &i32| x * 10, &[1, 2, 3]), vec![1, 2, 3]);
/// ```
pub fn adjust<T, F>(index: isize, function: F, list: &[T]) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    let mut result = list.to_vec();
    if let Some(position) = position_of(index, list.len()) {
        result[position] = function(&list[position]);
    }
    result
}

/// Replaces the element at `index` with `value`. See [`adjust`].
pub fn update<T: Clone>(index: isize, value: T, list: &[T]) -> Vec<T> {
    adjust(index, |_| value.clone(), list)
}

/// The list with `item` added at the end.
pub fn append<T: Clone>(item: T, list: &[T]) -> Vec<T> {
    let mut result = list.to_vec();
    result.push(item);
    result
}

/// The list with `item` added at the front.
pub fn prepend<T: Clone>(item: T, list: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(list.len() + 1);
    result.push(item);
    result.extend_from_slice(list);
    result
}

/// A one-element list.
pub fn of<T>(item: T) -> Vec<T> {
    vec![item]
}

/// `item` repeated `count` times.
pub fn repeat<T: Clone>(item: T, count: usize) -> Vec<T> {
    vec![item; count]
}

/// Moves the element at `from` to position `to`.
///
/// When either position is outside the list, the list is returned
/// unchanged.
///
/// ```rust
/// use rambars::list::move_item;
///
/// assert_eq!(move_item(0, 2, &['a', 'b', 'c', 'd']), vec!['b', 'c', 'a', 'd']);
/// ```
pub fn move_item<T: Clone>(from: usize, to: usize, list: &[T]) -> Vec<T> {
    let mut result = list.to_vec();
    if from >= list.len() || to >= list.len() {
        tracing::trace!(from, to, length = list.len(), "move_item position out of range");
        return result;
    }
    let item = result.remove(from);
    result.insert(to, item);
    result
}

/// The elements with `separator` between each pair.
pub fn intersperse<T: Clone>(separator: T, list: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity((list.len() * 2).saturating_sub(1));
    for (index, item) in list.iter().enumerate() {
        if index > 0 {
            result.push(separator.clone());
        }
        result.push(item.clone());
    }
    result
}

/// A sorted copy using a comparator. The sort is stable.
pub fn sort<T, F>(comparator: F, list: &[T]) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut result = list.to_vec();
    result.sort_by(comparator);
    result
}

/// A copy sorted by a derived key. The sort is stable, and keys that do not
/// compare with themselves (such as `NaN`) sort last.
///
/// ```rust
/// use rambars::list::sort_by;
///
/// let people = [("ada", 36), ("alan", 41), ("grace", 29)];
/// let by_age = sort_by(|person: &(&str, i32)| person.1, &people);
/// assert_eq!(by_age[0].0, "grace");
/// ```
pub fn sort_by<T, K, F>(key: F, list: &[T]) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut keyed: Vec<(K, &T)> = list.iter().map(|item| (key(item), item)).collect();
    keyed.sort_by(|(left, _), (right, _)| compare_keys(left, right));
    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

fn compare_keys<K: PartialOrd>(left: &K, right: &K) -> Ordering {
    let left_ordered = left.partial_cmp(left).is_some();
    let right_ordered = right.partial_cmp(right).is_some();
    match (left_ordered, right_ordered) {
        (true, true) => left.partial_cmp(right).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

/// Turns rows into columns. Shorter rows simply contribute nothing to the
/// columns they lack.
///
/// ```rust
/// use rambars::list::transpose;
///
/// let rows = vec![vec![1, 2, 3], vec![4], vec![5, 6]];
/// assert_eq!(transpose(&rows), vec![vec![1, 4, 5], vec![2, 6], vec![3]]);
/// ```
pub fn transpose<T: Clone>(rows: &[Vec<T>]) -> Vec<Vec<T>> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    (0..width)
        .map(|column| rows.iter().filter_map(|row| row.get(column).cloned()).collect())
        .collect()
}

/// Pairs elements by position, stopping at the shorter list.
pub fn zip<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<(A, B)> {
    left.iter().cloned().zip(right.iter().cloned()).collect()
}

/// Combines elements by position, stopping at the shorter list.
pub fn zip_with<A, B, R, F>(function: F, left: &[A], right: &[B]) -> Vec<R>
where
    F: Fn(&A, &B) -> R,
{
    left.iter()
        .zip(right)
        .map(|(first, second)| function(first, second))
        .collect()
}

/// Applies `rules[i]` to element `i`; elements without a rule are cloned.
///
/// ```rust
/// use rambars::list::evolve_array;
///
/// let rules: [fn(&i32) -> i32; 2] = [|x| x + 1, |x| x * 10];
/// assert_eq!(evolve_array(&rules, &[1, 2, 3]), vec![2, 20, 3]);
/// ```
pub fn evolve_array<T, F>(rules: &[F], list: &[T]) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    list.iter()
        .enumerate()
        .map(|(index, item)| rules.get(index).map_or_else(|| item.clone(), |rule| rule(item)))
        .collect()
}

/// Deeply flattens nested arrays. Non-array elements, including sets and
/// objects, are kept as they are.
///
/// ```rust
/// use rambars::list::flatten;
/// use rambars::value;
///
/// let nested = value!([1, [2, [3, [4]]], { "a": [5] }]);
/// assert_eq!(
///     flatten(nested.as_array().unwrap()),
///     value!([1, 2, 3, 4, { "a": [5] }]).as_array().unwrap()
/// );
/// ```
#[must_use]
pub fn flatten(list: &[Value]) -> Vec<Value> {
    let mut result = Vec::with_capacity(list.len());
    flatten_into(list, &mut result);
    result
}

fn flatten_into(list: &[Value], result: &mut Vec<Value>) {
    for item in list {
        match item {
            Value::Array(inner) => flatten_into(inner, result),
            other => result.push(other.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersperse() {
        assert_eq!(intersperse(0, &[1, 2, 3]), vec![1, 0, 2, 0, 3]);
        assert_eq!(intersperse(0, &[] as &[i32]), Vec::<i32>::new());
    }

    #[test]
    fn test_sort_by_puts_incomparable_keys_last() {
        let list = [(f64::NAN, 'a'), (2.0, 'b'), (f64::NAN, 'c'), (1.0, 'd')];
        let sorted = sort_by(|pair: &(f64, char)| pair.0, &list);
        let labels: String = sorted.iter().map(|pair| pair.1).collect();
        assert_eq!(labels, "dbac");
    }

    #[test]
    fn test_update_negative_index() {
        assert_eq!(update(-2, 9, &[1, 2, 3]), vec![1, 9, 3]);
    }

    #[test]
    fn test_move_item_out_of_range_is_identity() {
        assert_eq!(move_item(5, 0, &[1, 2]), vec![1, 2]);
    }

    #[test]
    fn test_zip_with_stops_at_shorter() {
        assert_eq!(zip_with(|a: &i32, b: &i32| a + b, &[1, 2, 3], &[10, 20]), vec![11, 22]);
        assert_eq!(zip(&[1, 2], &["a"]), vec![(1, "a")]);
    }
}
