//! Recursion limits shared by the runtime evolver and the shape algebra.
//!
//! Nested runtime evolvers and shape evolution are bounded by
//! [`Limits::max_depth`]. Assignability checks are not; they recurse only
//! as deep as the shapes themselves. The default is generous enough for any realistic
//! document; [`Limits::from_env`] lets a host process tighten or relax it
//! without recompiling.
//!
//! # Example
//!
//! ```rust
//! use rambars::config::Limits;
//!
//! let limits = Limits::default().with_max_depth(8);
//! assert_eq!(limits.max_depth(), 8);
//! ```

use std::env;

use crate::error::ConfigError;

/// Default nesting depth accepted before a walk is rejected.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Environment variable read by [`Limits::from_env`].
pub const MAX_DEPTH_VARIABLE: &str = "RAMBARS_MAX_DEPTH";

/// Bounds applied to recursive structural walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self::new()
    }
}

impl Limits {
    /// Creates limits with [`DEFAULT_MAX_DEPTH`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Returns a copy with a different maximum depth.
    ///
    /// A depth of zero still allows the top level to be processed; only
    /// nested levels are rejected.
    #[must_use]
    pub const fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// The maximum number of nested levels a walk may descend.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Loads limits from the process environment.
    ///
    /// An unset [`MAX_DEPTH_VARIABLE`] yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the variable is set but is
    /// not a positive integer or not valid Unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match env::var(key) {
            Ok(raw) => Ok(Some(raw)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
                key: key.to_string(),
                message: "value is not valid Unicode".to_string(),
            }),
        })
    }

    /// Loads limits through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Propagates lookup errors and rejects values that are not positive
    /// integers.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<Option<String>, ConfigError>,
    {
        let Some(raw) = lookup(MAX_DEPTH_VARIABLE)? else {
            return Ok(Self::new());
        };

        let max_depth = raw
            .trim()
            .parse::<usize>()
            .map_err(|error| ConfigError::InvalidValue {
                key: MAX_DEPTH_VARIABLE.to_string(),
                message: error.to_string(),
            })?;

        if max_depth == 0 {
            return Err(ConfigError::InvalidValue {
                key: MAX_DEPTH_VARIABLE.to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        tracing::debug!(max_depth, "loaded recursion limits from environment");
        Ok(Self::new().with_max_depth(max_depth))
    }
}
