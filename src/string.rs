//! String functions.
//!
//! Pattern arguments are compiled [`Regex`]es; literal separators are plain
//! string slices. Results are always owned.
//!
//! # Examples
//!
//! ```rust
//! use regex::Regex;
//! use rambars::string::{match_all, replace_all, split};
//!
//! let digits = Regex::new(r"\d+").unwrap();
//!
//! assert_eq!(split(",", "a,b,c"), vec!["a", "b", "c"]);
//! assert_eq!(match_all(&digits, "a1b22c333"), vec!["1", "22", "333"]);
//! assert_eq!(replace_all(&digits, "#", "a1b22"), "a#b#");
//! ```

use std::fmt::Display;

use regex::Regex;

/// Splits `text` on every occurrence of `separator`.
///
/// An empty separator splits into characters.
#[must_use]
pub fn split(separator: &str, text: &str) -> Vec<String> {
    if separator.is_empty() {
        return text.chars().map(String::from).collect();
    }
    text.split(separator).map(str::to_string).collect()
}

/// Splits `text` on every match of `pattern`.
#[must_use]
pub fn split_by(pattern: &Regex, text: &str) -> Vec<String> {
    pattern.split(text).map(str::to_string).collect()
}

/// Joins the items' string forms with `separator`.
pub fn join<T: Display>(separator: &str, items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Lower-cases `text`.
#[must_use]
pub fn to_lower(text: &str) -> String {
    text.to_lowercase()
}

/// Upper-cases `text`.
#[must_use]
pub fn to_upper(text: &str) -> String {
    text.to_uppercase()
}

/// Removes leading and trailing whitespace.
#[must_use]
pub fn trim(text: &str) -> String {
    text.trim().to_string()
}

/// Replaces the first match of `pattern`.
///
/// `replacement` may refer to capture groups as `$1` or `${name}`.
///
/// ```rust
/// use regex::Regex;
/// use rambars::string::replace;
///
/// let word = Regex::new(r"(\w+)@").unwrap();
/// assert_eq!(replace(&word, "<$1>@", "ada@ops alan@ops"), "<ada>@ops alan@ops");
/// ```
#[must_use]
pub fn replace(pattern: &Regex, replacement: &str, text: &str) -> String {
    pattern.replace(text, replacement).into_owned()
}

/// Replaces every match of `pattern`.
#[must_use]
pub fn replace_all(pattern: &Regex, replacement: &str, text: &str) -> String {
    pattern.replace_all(text, replacement).into_owned()
}

/// Every match of `pattern`, in order; empty when nothing matches.
#[must_use]
pub fn match_all(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|found| found.as_str().to_string())
        .collect()
}

/// `true` when `pattern` matches somewhere in `text`.
#[must_use]
pub fn test(pattern: &Regex, text: &str) -> bool {
    pattern.is_match(text)
}

/// `true` when `text` begins with `prefix`.
#[must_use]
pub fn starts_with(prefix: &str, text: &str) -> bool {
    text.starts_with(prefix)
}

/// `true` when `text` ends with `suffix`.
#[must_use]
pub fn ends_with(suffix: &str, text: &str) -> bool {
    text.ends_with(suffix)
}
