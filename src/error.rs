//! Error types.
//!
//! Each concern has its own small enum; [`Error`] unifies them for callers
//! that want a single type to propagate with `?`.

use thiserror::Error;

use crate::value::{Path, TypeTag};

/// Failure of the runtime evolver.
///
/// # Examples
///
/// ```rust
/// use rambars::error::EvolveError;
/// use rambars::value::{Path, TypeTag};
///
/// let error = EvolveError::NotEvolvable {
///     path: Path::parse("a.b"),
///     found: TypeTag::Number,
/// };
/// assert_eq!(
///     error.to_string(),
///     "cannot evolve `a.b`: expected an object, found Number"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvolveError {
    /// A nested evolver was paired with a value that is not an object.
    #[error("cannot evolve `{path}`: expected an object, found {found}")]
    NotEvolvable {
        /// Location of the offending value, relative to the evolved input.
        path: Path,
        /// Type tag of the value found there.
        found: TypeTag,
    },
    /// The evolver nests deeper than the configured limit.
    #[error("evolver nesting exceeds the depth limit of {limit}")]
    DepthExceeded {
        /// The limit that was hit.
        limit: usize,
    },
}

/// A dynamic function was given an argument list it cannot accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// More arguments were supplied than the function declares.
    #[error("`{name}` accepts {expected} argument(s), received {received}")]
    TooMany {
        /// Name of the function.
        name: String,
        /// Declared arity.
        expected: usize,
        /// Number of arguments supplied.
        received: usize,
    },
}

/// Invalid configuration supplied through the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable is present but cannot be used.
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// Name of the variable.
        key: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// See [`EvolveError`].
    #[error(transparent)]
    Evolve(#[from] EvolveError),
    /// See [`ArgumentError`].
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    /// See [`ConfigError`].
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// See [`crate::shape::Rejection`].
    #[cfg(feature = "shape")]
    #[error(transparent)]
    Rejection(#[from] crate::shape::Rejection),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_error_display() {
        let error = ArgumentError::TooMany {
            name: "add".to_string(),
            expected: 2,
            received: 3,
        };
        assert_eq!(error.to_string(), "`add` accepts 2 argument(s), received 3");
    }

    #[test]
    fn test_error_wraps_transparently() {
        let error: Error = EvolveError::DepthExceeded { limit: 4 }.into();
        assert_eq!(
            error.to_string(),
            "evolver nesting exceeds the depth limit of 4"
        );
    }
}
