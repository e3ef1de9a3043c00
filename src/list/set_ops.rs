//! Set-like operations on lists, using the element type's equality.
//!
//! Lists stay lists: order is preserved and, unless a function says
//! otherwise, duplicates are kept.

/// The distinct elements of `first` that are not in `second`.
///
/// ```rust
/// use rambars::list::difference;
///
/// assert_eq!(difference(&[1, 2, 2, 3, 4], &[3, 4, 5]), vec![1, 2]);
/// ```
pub fn difference<T: Clone + PartialEq>(first: &[T], second: &[T]) -> Vec<T> {
    uniq(first)
        .into_iter()
        .filter(|item| !second.contains(item))
        .collect()
}

/// The elements of each list that are not in the other.
pub fn symmetric_difference<T: Clone + PartialEq>(first: &[T], second: &[T]) -> Vec<T> {
    first
        .iter()
        .filter(|item| !second.contains(item))
        .chain(second.iter().filter(|item| !first.contains(item)))
        .cloned()
        .collect()
}

/// The elements of `second` that also occur in `first`.
///
/// ```rust
/// use rambars::list::intersection;
///
/// assert_eq!(intersection(&[1, 2, 3, 4], &[7, 6, 5, 4, 3]), vec![4, 3]);
/// ```
pub fn intersection<T: Clone + PartialEq>(first: &[T], second: &[T]) -> Vec<T> {
    second
        .iter()
        .filter(|item| first.contains(item))
        .cloned()
        .collect()
}

/// The distinct elements of both lists, in order of first occurrence.
pub fn union<T: Clone + PartialEq>(first: &[T], second: &[T]) -> Vec<T> {
    let mut result: Vec<T> = Vec::with_capacity(first.len() + second.len());
    for item in first.iter().chain(second) {
        if !result.contains(item) {
            result.push(item.clone());
        }
    }
    result
}

/// The first occurrence of every distinct element.
pub fn uniq<T: Clone + PartialEq>(list: &[T]) -> Vec<T> {
    uniq_with(|left: &T, right: &T| left == right, list)
}

/// The first element of every class of `same`-equal elements.
pub fn uniq_with<T, F>(same: F, list: &[T]) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut result: Vec<T> = Vec::with_capacity(list.len());
    for item in list {
        if !result.iter().any(|kept| same(kept, item)) {
            result.push(item.clone());
        }
    }
    result
}

/// The elements of `list` that are not in `removed`.
pub fn without<T: Clone + PartialEq>(removed: &[T], list: &[T]) -> Vec<T> {
    list.iter()
        .filter(|item| !removed.contains(item))
        .cloned()
        .collect()
}

/// The list without elements equal to their predecessor.
///
/// ```rust
/// use rambars::list::drop_repeats;
///
/// assert_eq!(drop_repeats(&[1, 1, 2, 2, 1]), vec![1, 2, 1]);
/// ```
pub fn drop_repeats<T: Clone + PartialEq>(list: &[T]) -> Vec<T> {
    drop_repeats_with(|left: &T, right: &T| left == right, list)
}

/// The list without elements `same`-equal to their predecessor.
pub fn drop_repeats_with<T, F>(same: F, list: &[T]) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut result: Vec<T> = Vec::with_capacity(list.len());
    for item in list {
        if result.last().is_none_or(|previous| !same(previous, item)) {
            result.push(item.clone());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;
    use crate::value::Value;

    #[test]
    fn test_values_compare_deeply() {
        let first = [value!({ "a": 1 }), value!([1, 2])];
        let second = [value!({ "a": 1 })];
        assert_eq!(difference(&first, &second), vec![value!([1, 2])]);
        assert_eq!(union(&second, &first), first.to_vec());
    }

    #[test]
    fn test_symmetric_difference() {
        assert_eq!(symmetric_difference(&[1, 2, 3], &[3, 4]), vec![1, 2, 4]);
    }

    #[test]
    fn test_union_removes_duplicates() {
        assert_eq!(union(&[1, 1, 3], &[2, 3, 2]), vec![1, 3, 2]);
    }

    #[test]
    fn test_uniq_with_case_insensitive() {
        let words = ["Ada", "ada", "Alan"];
        assert_eq!(
            uniq_with(|a: &&str, b: &&str| a.eq_ignore_ascii_case(b), &words),
            vec!["Ada", "Alan"]
        );
    }

    #[test]
    fn test_without_nan_values() {
        let list = [Value::Number(f64::NAN), Value::from(1)];
        assert_eq!(without(&[Value::Number(f64::NAN)], &list), vec![Value::from(1)]);
    }
}
