//! Functions over string-keyed maps.
//!
//! A [`Dictionary`] is the typed counterpart of a plain object whose values
//! all share one type. Iteration, and therefore every result that is a
//! list, follows key order.
//!
//! # Examples
//!
//! ```rust
//! use rambars::dictionary::{Dictionary, filter_object, group_by, map_object};
//!
//! let stock: Dictionary<u32> = [("apples".to_string(), 3), ("pears".to_string(), 0)].into();
//!
//! let labelled = map_object(|count: &u32, fruit: &str| format!("{count} {fruit}"), &stock);
//! assert_eq!(labelled["apples"], "3 apples");
//!
//! let available = filter_object(|count: &u32, _: &str| *count > 0, &stock);
//! assert_eq!(available.len(), 1);
//!
//! let by_initial = group_by(|word: &&str| word[..1].to_string(), &["ant", "bee", "asp"]);
//! assert_eq!(by_initial["a"], vec!["ant", "asp"]);
//! ```

use std::collections::BTreeMap;

/// A string-keyed map with values of one type.
pub type Dictionary<T> = BTreeMap<String, T>;

/// Maps every value, with access to its key (Ramda's `mapObjIndexed`).
pub fn map_object<T, U, F>(function: F, dictionary: &Dictionary<T>) -> Dictionary<U>
where
    F: Fn(&T, &str) -> U,
{
    dictionary
        .iter()
        .map(|(key, value)| (key.clone(), function(value, key)))
        .collect()
}

/// The entries whose value and key satisfy `predicate`.
pub fn filter_object<T, P>(predicate: P, dictionary: &Dictionary<T>) -> Dictionary<T>
where
    T: Clone,
    P: Fn(&T, &str) -> bool,
{
    dictionary
        .iter()
        .filter(|(key, value)| predicate(value, key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// The entries whose value and key do not satisfy `predicate`.
pub fn reject_object<T, P>(predicate: P, dictionary: &Dictionary<T>) -> Dictionary<T>
where
    T: Clone,
    P: Fn(&T, &str) -> bool,
{
    filter_object(|value, key| !predicate(value, key), dictionary)
}

/// Splits the entries into those satisfying `predicate` and the rest.
pub fn partition_object<T, P>(
    predicate: P,
    dictionary: &Dictionary<T>,
) -> (Dictionary<T>, Dictionary<T>)
where
    T: Clone,
    P: Fn(&T, &str) -> bool,
{
    dictionary
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .partition(|(key, value)| predicate(value, key))
}

/// Groups list elements under the key computed for each.
pub fn group_by<T, F>(key: F, list: &[T]) -> Dictionary<Vec<T>>
where
    T: Clone,
    F: Fn(&T) -> String,
{
    let mut groups: Dictionary<Vec<T>> = BTreeMap::new();
    for item in list {
        groups.entry(key(item)).or_default().push(item.clone());
    }
    groups
}

/// Indexes list elements by the key computed for each; later elements
/// replace earlier ones with the same key.
pub fn index_by<T, F>(key: F, list: &[T]) -> Dictionary<T>
where
    T: Clone,
    F: Fn(&T) -> String,
{
    list.iter().map(|item| (key(item), item.clone())).collect()
}

/// The keys, in order.
#[must_use]
pub fn keys<T>(dictionary: &Dictionary<T>) -> Vec<String> {
    dictionary.keys().cloned().collect()
}

/// The values, in key order.
#[must_use]
pub fn values<T: Clone>(dictionary: &Dictionary<T>) -> Vec<T> {
    dictionary.values().cloned().collect()
}

/// The entries as key/value pairs.
#[must_use]
pub fn to_pairs<T: Clone>(dictionary: &Dictionary<T>) -> Vec<(String, T)> {
    dictionary
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Builds a dictionary from pairs; a repeated key keeps the last value.
pub fn from_pairs<K, T, I>(pairs: I) -> Dictionary<T>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, T)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores() -> Dictionary<i32> {
        from_pairs([("ada", 9), ("alan", 4), ("grace", 7)])
    }

    #[test]
    fn test_partition_object() {
        let (pass, fail) = partition_object(|score: &i32, _: &str| *score >= 5, &scores());
        assert_eq!(keys(&pass), vec!["ada", "grace"]);
        assert_eq!(keys(&fail), vec!["alan"]);
    }

    #[test]
    fn test_reject_object_sees_keys() {
        let rest = reject_object(|_: &i32, name: &str| name.starts_with('a'), &scores());
        assert_eq!(to_pairs(&rest), vec![("grace".to_string(), 7)]);
    }

    #[test]
    fn test_index_by_keeps_last() {
        let indexed = index_by(|word: &&str| word.len().to_string(), &["ab", "cd", "efg"]);
        assert_eq!(values(&indexed), vec!["cd", "efg"]);
    }

    #[test]
    fn test_from_pairs_last_wins() {
        let dictionary = from_pairs([("a", 1), ("a", 2)]);
        assert_eq!(dictionary["a"], 2);
    }
}
