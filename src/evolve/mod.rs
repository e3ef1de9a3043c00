//! Recursive structural transformation of values.
//!
//! An evolver is a tree of per-field rules. Each rule is either a
//! transformer applied to the field's current value, or a nested set of
//! rules applied to the field, which must itself be an object:
//!
//! ```text
//! Evolver = Transform(fn(Value) -> Value) | Nested(Rules)
//! ```
//!
//! Fields without a rule pass through unchanged and rules for keys the
//! input does not have are ignored, so the output always has exactly the
//! input's key set.
//!
//! # Examples
//!
//! ```rust
//! use rambars::evolve::{Rules, evolve};
//! use rambars::value;
//! use rambars::value::Value;
//!
//! let rules = Rules::new()
//!     .transform("count", |count| Value::Number(count.as_f64().unwrap_or(0.0) + 1.0))
//!     .nested("meta", Rules::new().transform("tag", |tag| Value::from(tag.to_string().to_uppercase())));
//!
//! let input = value!({ "count": 1, "name": "x", "meta": { "tag": "new" } });
//! let output = evolve(&rules, &input).unwrap();
//!
//! assert_eq!(output, value!({ "count": 2, "name": "x", "meta": { "tag": "NEW" } }));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::config::Limits;
use crate::error::EvolveError;
use crate::value::{Object, Path, Value, type_of};

/// A field transformer.
pub type Transform = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// One node of an evolver tree.
#[derive(Clone)]
pub enum Evolver {
    /// Replace the field with the transformer's result.
    Transform(Transform),
    /// Evolve the field, which must be an object, with nested rules.
    Nested(Rules),
}

impl fmt::Debug for Evolver {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transform(_) => formatter.write_str("Transform(..)"),
            Self::Nested(rules) => formatter.debug_tuple("Nested").field(rules).finish(),
        }
    }
}

/// Keyed evolver rules.
#[derive(Clone, Debug, Default)]
pub struct Rules(BTreeMap<String, Evolver>);

impl Rules {
    /// Creates an empty rule set, which evolves every object to itself.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a transformer for `key`.
    #[must_use]
    pub fn transform<F>(mut self, key: impl Into<String>, transform: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.0.insert(key.into(), Evolver::Transform(Arc::new(transform)));
        self
    }

    /// Adds nested rules for `key`.
    #[must_use]
    pub fn nested(mut self, key: impl Into<String>, rules: Self) -> Self {
        self.0.insert(key.into(), Evolver::Nested(rules));
        self
    }

    /// The rule for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Evolver> {
        self.0.get(key)
    }

    /// Number of keys with a rule.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no key has a rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the rules in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Evolver)> {
        self.0.iter().map(|(key, evolver)| (key.as_str(), evolver))
    }
}

impl FromIterator<(String, Evolver)> for Rules {
    fn from_iter<I: IntoIterator<Item = (String, Evolver)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Evolves an object value with the default [`Limits`].
///
/// # Errors
///
/// Returns [`EvolveError::NotEvolvable`] when the input, or a field paired
/// with nested rules, is not an object, and [`EvolveError::DepthExceeded`]
/// when the rules nest deeper than the limit.
pub fn evolve(rules: &Rules, input: &Value) -> Result<Value, EvolveError> {
    evolve_with(rules, input, &Limits::default())
}

/// Evolves an object value under explicit limits.
///
/// # Errors
///
/// See [`evolve`].
pub fn evolve_with(rules: &Rules, input: &Value, limits: &Limits) -> Result<Value, EvolveError> {
    match input {
        Value::Object(entries) => {
            evolve_object(rules, entries, &Path::root(), 0, limits).map(Value::Object)
        }
        other => Err(reject(Path::root(), other)),
    }
}

/// Applies `rules[i]` to the `i`-th element; elements beyond the rules pass
/// through unchanged.
///
/// ```rust
/// use std::sync::Arc;
///
/// use rambars::evolve::{Transform, evolve_list};
/// use rambars::value::Value;
///
/// let negate: Transform = Arc::new(|value: Value| Value::Number(-value.as_f64().unwrap_or(0.0)));
/// let result = evolve_list(&[negate], &[Value::from(1), Value::from(2)]);
/// assert_eq!(result, vec![Value::from(-1), Value::from(2)]);
/// ```
#[must_use]
pub fn evolve_list(rules: &[Transform], list: &[Value]) -> Vec<Value> {
    list.iter()
        .enumerate()
        .map(|(index, item)| {
            rules
                .get(index)
                .map_or_else(|| item.clone(), |rule| rule(item.clone()))
        })
        .collect()
}

fn evolve_object(
    rules: &Rules,
    entries: &Object,
    path: &Path,
    depth: usize,
    limits: &Limits,
) -> Result<Object, EvolveError> {
    if depth > limits.max_depth() {
        tracing::debug!(%path, limit = limits.max_depth(), "evolve depth limit reached");
        return Err(EvolveError::DepthExceeded {
            limit: limits.max_depth(),
        });
    }

    entries
        .iter()
        .map(|(key, field)| {
            let evolved = match rules.get(key) {
                None => field.clone(),
                Some(Evolver::Transform(transform)) => transform(field.clone()),
                Some(Evolver::Nested(nested)) => {
                    let field_path = path.child(key.as_str());
                    match field {
                        Value::Object(inner) => Value::Object(evolve_object(
                            nested,
                            inner,
                            &field_path,
                            depth + 1,
                            limits,
                        )?),
                        other => return Err(reject(field_path, other)),
                    }
                }
            };
            Ok((key.clone(), evolved))
        })
        .collect()
}

fn reject(path: Path, found: &Value) -> EvolveError {
    let found = type_of(found);
    tracing::debug!(%path, %found, "nested evolver applied to a non-object");
    EvolveError::NotEvolvable { path, found }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;
    use crate::value::TypeTag;

    #[test]
    fn test_rules_without_matching_keys_are_identity() {
        let rules = Rules::new().transform("missing", |_| Value::Null);
        let input = value!({ "a": 1, "b": [1, 2] });
        assert_eq!(evolve(&rules, &input).unwrap(), input);
    }

    #[test]
    fn test_nested_rules_on_number_are_rejected() {
        let rules = Rules::new().nested("a", Rules::new().transform("b", |value| value));
        let error = evolve(&rules, &value!({ "a": 1 })).unwrap_err();
        assert_eq!(
            error,
            EvolveError::NotEvolvable {
                path: Path::parse("a"),
                found: TypeTag::Number,
            }
        );
    }

    #[test]
    fn test_depth_limit_applies_to_nested_rules() {
        let rules = Rules::new().nested("a", Rules::new().nested("b", Rules::new()));
        let input = value!({ "a": { "b": { "c": 1 } } });
        let limits = Limits::default().with_max_depth(1);
        assert_eq!(
            evolve_with(&rules, &input, &limits),
            Err(EvolveError::DepthExceeded { limit: 1 })
        );
    }
}
