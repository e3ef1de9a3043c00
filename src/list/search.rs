//! Predicates, lookups and grouping over lists.

/// `true` when every element satisfies `predicate`; `true` for an empty list.
pub fn all<T, P>(predicate: P, list: &[T]) -> bool
where
    P: Fn(&T) -> bool,
{
    list.iter().all(predicate)
}

/// `true` when some element satisfies `predicate`.
pub fn any<T, P>(predicate: P, list: &[T]) -> bool
where
    P: Fn(&T) -> bool,
{
    list.iter().any(predicate)
}

/// `true` when no element satisfies `predicate`.
pub fn none<T, P>(predicate: P, list: &[T]) -> bool
where
    P: Fn(&T) -> bool,
{
    !list.iter().any(predicate)
}

/// The first element satisfying `predicate`.
pub fn find<T, P>(predicate: P, list: &[T]) -> Option<&T>
where
    P: Fn(&T) -> bool,
{
    list.iter().find(|item| predicate(item))
}

/// The index of the first element satisfying `predicate`.
pub fn find_index<T, P>(predicate: P, list: &[T]) -> Option<usize>
where
    P: Fn(&T) -> bool,
{
    list.iter().position(predicate)
}

/// The last element satisfying `predicate`.
pub fn find_last<T, P>(predicate: P, list: &[T]) -> Option<&T>
where
    P: Fn(&T) -> bool,
{
    list.iter().rev().find(|item| predicate(item))
}

/// The index of the last element satisfying `predicate`.
pub fn find_last_index<T, P>(predicate: P, list: &[T]) -> Option<usize>
where
    P: Fn(&T) -> bool,
{
    list.iter().rposition(predicate)
}

/// `true` when some element equals `target`.
///
/// Equality is the element type's `PartialEq`, which for
/// [`Value`](crate::value::Value) is deep [`equals`](crate::value::equals).
pub fn includes<T: PartialEq>(target: &T, list: &[T]) -> bool {
    list.iter().any(|item| item == target)
}

/// Index of the first element equal to `target`.
pub fn index_of<T: PartialEq>(target: &T, list: &[T]) -> Option<usize> {
    list.iter().position(|item| item == target)
}

/// Index of the last element equal to `target`.
pub fn last_index_of<T: PartialEq>(target: &T, list: &[T]) -> Option<usize> {
    list.iter().rposition(|item| item == target)
}

/// Splits into the elements that satisfy `predicate` and those that do not.
pub fn partition<T, P>(predicate: P, list: &[T]) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    list.iter().cloned().partition(|item| predicate(item))
}

/// Splits before the first element satisfying `predicate`.
///
/// ```rust
/// use rambars::list::split_when;
///
/// let (before, after) = split_when(|x: &i32| *x > 2, &[1, 2, 3, 1]);
/// assert_eq!((before, after), (vec![1, 2], vec![3, 1]));
/// ```
pub fn split_when<T, P>(predicate: P, list: &[T]) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    let index = list.iter().position(predicate).unwrap_or(list.len());
    let (before, after) = list.split_at(index);
    (before.to_vec(), after.to_vec())
}

/// Groups runs of adjacent elements for which `same_group(previous,
/// current)` holds.
///
/// ```rust
/// use rambars::list::group_with;
///
/// let runs = group_with(|a: &i32, b: &i32| b - a == 1, &[1, 2, 3, 7, 8, 10]);
/// assert_eq!(runs, vec![vec![1, 2, 3], vec![7, 8], vec![10]]);
/// ```
pub fn group_with<T, F>(same_group: F, list: &[T]) -> Vec<Vec<T>>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut groups: Vec<Vec<T>> = Vec::new();
    for (index, item) in list.iter().enumerate() {
        let continues = index > 0 && same_group(&list[index - 1], item);
        match groups.last_mut() {
            Some(group) if continues => group.push(item.clone()),
            _ => groups.push(vec![item.clone()]),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantifiers_on_empty_list() {
        let empty: [i32; 0] = [];
        assert!(all(|_| false, &empty));
        assert!(!any(|_| true, &empty));
        assert!(none(|_| true, &empty));
    }

    #[test]
    fn test_find_from_both_ends() {
        let list = [1, 4, 2, 6];
        assert_eq!(find(|x: &i32| x % 2 == 0, &list), Some(&4));
        assert_eq!(find_last(|x: &i32| x % 2 == 0, &list), Some(&6));
        assert_eq!(find_index(|x: &i32| *x > 10, &list), None);
        assert_eq!(find_last_index(|x: &i32| *x < 3, &list), Some(2));
    }

    #[test]
    fn test_index_of_and_last_index_of() {
        let list = ['a', 'b', 'a'];
        assert_eq!(index_of(&'a', &list), Some(0));
        assert_eq!(last_index_of(&'a', &list), Some(2));
        assert!(includes(&'b', &list));
    }

    #[test]
    fn test_partition() {
        let (even, odd) = partition(|x: &u8| x % 2 == 0, &[1, 2, 3, 4]);
        assert_eq!(even, vec![2, 4]);
        assert_eq!(odd, vec![1, 3]);
    }
}
