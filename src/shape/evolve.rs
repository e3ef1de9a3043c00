//! Result shapes of `evolve`.

use std::collections::BTreeMap;

use thiserror::Error;

use super::{Shape, Signature};
use crate::config::Limits;
use crate::value::Path;

/// One node of a shape-level evolver.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeRule {
    /// A transformer with the given signature.
    Transform(Signature),
    /// Nested rules for an object-shaped field.
    Nested(ShapeEvolver),
}

/// Keyed rules describing an evolver at the type level.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeEvolver(BTreeMap<String, ShapeRule>);

impl ShapeEvolver {
    /// An evolver with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a transformer signature for `key`.
    #[must_use]
    pub fn transform(mut self, key: impl Into<String>, signature: Signature) -> Self {
        self.0.insert(key.into(), ShapeRule::Transform(signature));
        self
    }

    /// Adds nested rules for `key`.
    #[must_use]
    pub fn nested(mut self, key: impl Into<String>, rules: Self) -> Self {
        self.0.insert(key.into(), ShapeRule::Nested(rules));
        self
    }

    /// The rule for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ShapeRule> {
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
}

/// Why an evolve was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RejectionReason {
    /// The transformer's parameter does not accept the field's shape.
    #[error("transformer expects {expected}, found {found}")]
    InputMismatch {
        /// The transformer's parameter shape.
        expected: Shape,
        /// The field's shape.
        found: Shape,
    },
    /// The transformer takes more than one parameter.
    #[error("transformer must take one parameter, it takes {params}")]
    NotUnary {
        /// The transformer's parameter count.
        params: usize,
    },
    /// Nested rules were paired with a shape that is not an object.
    #[error("expected an object, found {found}")]
    NotEvolvable {
        /// The shape found instead.
        found: Shape,
    },
    /// The rules nest deeper than the configured limit.
    #[error("nesting exceeds the depth limit of {limit}")]
    DepthExceeded {
        /// The limit that was hit.
        limit: usize,
    },
}

/// A located rejection of the shape evolver.
///
/// ```rust
/// use rambars::shape::{Shape, ShapeEvolver, evolve_checked};
///
/// let rules = ShapeEvolver::new().nested("a", ShapeEvolver::new());
/// let rejection = evolve_checked(&Shape::object([("a", Shape::Number)]), &rules).unwrap_err();
///
/// assert_eq!(rejection.to_string(), "cannot evolve `a`: expected an object, found number");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("cannot evolve `{path}`: {reason}")]
pub struct Rejection {
    /// Where the rejection happened.
    pub path: Path,
    /// What went wrong.
    pub reason: RejectionReason,
}

impl Rejection {
    fn new(path: Path, reason: RejectionReason) -> Self {
        tracing::debug!(%path, %reason, "shape evolve rejected");
        Self { path, reason }
    }
}

/// The result shape of evolving `shape`, or [`Shape::Never`] when any
/// field is rejected.
#[must_use]
pub fn evolve(shape: &Shape, evolver: &ShapeEvolver) -> Shape {
    evolve_with(shape, evolver, &Limits::default())
}

/// [`evolve`] under explicit limits.
#[must_use]
pub fn evolve_with(shape: &Shape, evolver: &ShapeEvolver, limits: &Limits) -> Shape {
    evolve_checked_with(shape, evolver, limits).unwrap_or_default()
}

/// The result shape of evolving `shape`, or the first rejection.
///
/// # Errors
///
/// Returns a [`Rejection`] naming the key path of the incongruent pair.
pub fn evolve_checked(shape: &Shape, evolver: &ShapeEvolver) -> Result<Shape, Rejection> {
    evolve_checked_with(shape, evolver, &Limits::default())
}

/// [`evolve_checked`] under explicit limits.
///
/// # Errors
///
/// See [`evolve_checked`].
pub fn evolve_checked_with(
    shape: &Shape,
    evolver: &ShapeEvolver,
    limits: &Limits,
) -> Result<Shape, Rejection> {
    evolve_at(shape, evolver, &Path::root(), 0, limits)
}

/// `true` when nested rules may be applied to `shape`: an object, `Any`,
/// or a union made only of such shapes.
#[must_use]
pub fn is_evolvable(shape: &Shape) -> bool {
    match shape {
        Shape::Object(_) | Shape::Any => true,
        Shape::Union(members) => members.iter().all(is_evolvable),
        _ => false,
    }
}

fn evolve_at(
    shape: &Shape,
    evolver: &ShapeEvolver,
    path: &Path,
    depth: usize,
    limits: &Limits,
) -> Result<Shape, Rejection> {
    if depth > limits.max_depth() {
        return Err(Rejection::new(
            path.clone(),
            RejectionReason::DepthExceeded {
                limit: limits.max_depth(),
            },
        ));
    }

    match shape {
        Shape::Object(fields) => evolve_fields(fields, evolver, path, depth, limits).map(Shape::Object),
        Shape::Any | Shape::Never => Ok(shape.clone()),
        Shape::Union(members) => {
            let mut survivors = Vec::with_capacity(members.len());
            let mut first_rejection = None;
            for member in members {
                match evolve_at(member, evolver, path, depth, limits) {
                    Ok(evolved) => survivors.push(evolved),
                    Err(rejection) => {
                        first_rejection.get_or_insert(rejection);
                    }
                }
            }
            match first_rejection {
                Some(rejection) if survivors.is_empty() => Err(rejection),
                _ => Ok(Shape::union(survivors)),
            }
        }
        other => Err(Rejection::new(
            path.clone(),
            RejectionReason::NotEvolvable {
                found: other.clone(),
            },
        )),
    }
}

fn evolve_fields(
    fields: &BTreeMap<String, Shape>,
    evolver: &ShapeEvolver,
    path: &Path,
    depth: usize,
    limits: &Limits,
) -> Result<BTreeMap<String, Shape>, Rejection> {
    fields
        .iter()
        .map(|(key, field)| {
            let evolved = match evolver.get(key) {
                None => field.clone(),
                Some(ShapeRule::Transform(signature)) if signature.accepts(field) => {
                    signature.returns().clone()
                }
                Some(ShapeRule::Transform(signature)) => {
                    let reason = match signature.params() {
                        [expected] => RejectionReason::InputMismatch {
                            expected: expected.clone(),
                            found: field.clone(),
                        },
                        params => RejectionReason::NotUnary {
                            params: params.len(),
                        },
                    };
                    return Err(Rejection::new(path.child(key.as_str()), reason));
                }
                Some(ShapeRule::Nested(nested)) => {
                    evolve_at(field, nested, &path.child(key.as_str()), depth + 1, limits)?
                }
            };
            Ok((key.clone(), evolved))
        })
        .collect()
}
