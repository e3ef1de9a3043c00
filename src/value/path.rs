//! Property paths.
//!
//! A path is written either as a dotted string (`"a.b.0"`) or as a list
//! of segments. Numeric segments index arrays, but every segment can also
//! address an object key, so `"0"` works on `{ "0": ... }` as well.

use std::fmt;

use smallvec::SmallVec;

use super::Value;

/// One step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key.
    Key(String),
    /// An array index.
    Index(usize),
}

impl PathSegment {
    /// Parses a textual segment: all-digit text becomes an index.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        if !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit()) {
            if let Ok(index) = text.parse() {
                return Self::Index(index);
            }
        }
        Self::Key(text.to_string())
    }

    /// The array index this segment denotes, if any.
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Key(key) => match Self::parse(key) {
                Self::Index(index) => Some(index),
                Self::Key(_) => None,
            },
        }
    }

    /// The object key this segment denotes.
    #[must_use]
    pub fn to_key(&self) -> String {
        match self {
            Self::Key(key) => key.clone(),
            Self::Index(index) => index.to_string(),
        }
    }

    /// Resolves this segment against a value.
    #[must_use]
    pub fn lookup<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        match value {
            Value::Object(entries) => match self {
                Self::Key(key) => entries.get(key),
                Self::Index(index) => entries.get(&index.to_string()),
            },
            Value::Array(items) => self.as_index().and_then(|index| items.get(index)),
            _ => None,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => formatter.write_str(key),
            Self::Index(index) => write!(formatter, "{index}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(text: &str) -> Self {
        Self::Key(text.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(text: String) -> Self {
        Self::Key(text)
    }
}

impl From<&String> for PathSegment {
    fn from(text: &String) -> Self {
        Self::Key(text.clone())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// A sequence of [`PathSegment`]s.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path(SmallVec<[PathSegment; 4]>);

impl Path {
    /// The empty path, which addresses the value itself.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Splits a dotted string into segments.
    ///
    /// ```rust
    /// use rambars::value::{Path, PathSegment};
    ///
    /// let path = Path::parse("items.0.name");
    /// assert_eq!(
    ///     path.segments(),
    ///     &[
    ///         PathSegment::Key("items".to_string()),
    ///         PathSegment::Index(0),
    ///         PathSegment::Key("name".to_string()),
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self(text.split('.').map(PathSegment::parse).collect())
    }

    /// The segments of this path.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` for the root path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a new path with `segment` appended.
    #[must_use]
    pub fn child(&self, segment: impl Into<PathSegment>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    /// Splits off the first segment.
    #[must_use]
    pub fn split_first(&self) -> Option<(&PathSegment, Self)> {
        self.0
            .split_first()
            .map(|(head, rest)| (head, Self(rest.iter().cloned().collect())))
    }

    /// Follows the path through a value.
    ///
    /// Returns `None` as soon as a segment cannot be resolved.
    #[must_use]
    pub fn resolve<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        self.0
            .iter()
            .try_fold(value, |current, segment| segment.lookup(current))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.0.iter().enumerate() {
            if position > 0 {
                formatter.write_str(".")?;
            }
            write!(formatter, "{segment}")?;
        }
        Ok(())
    }
}

impl From<&str> for Path {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<String> for Path {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<&Self> for Path {
    fn from(path: &Self) -> Self {
        path.clone()
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self(segments.into())
    }
}

impl<S: Into<PathSegment>, const N: usize> From<[S; N]> for Path {
    fn from(segments: [S; N]) -> Self {
        segments.into_iter().map(Into::into).collect()
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    #[test]
    fn test_numeric_key_reaches_array_and_object() {
        let data = value!({ "list": ["a", "b"], "map": { "1": "one" } });
        assert_eq!(Path::parse("list.1").resolve(&data), Some(&Value::from("b")));
        assert_eq!(Path::parse("map.1").resolve(&data), Some(&Value::from("one")));
    }

    #[test]
    fn test_missing_segment_stops_resolution() {
        let data = value!({ "a": 1 });
        assert_eq!(Path::parse("a.b.c").resolve(&data), None);
    }

    #[test]
    fn test_display_round_trips_dotted_text() {
        assert_eq!(Path::parse("a.0.b").to_string(), "a.0.b");
        assert_eq!(Path::from(["x", "y"]).to_string(), "x.y");
    }
}
