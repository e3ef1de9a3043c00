//! # rambars
//!
//! Ramda-style functional utilities for Rust.
//!
//! ## Overview
//!
//! This library brings the small, pure, data-last helpers of the Ramda and
//! Rambda JavaScript libraries to Rust, together with the type-level
//! machinery their declarations encode. It includes:
//!
//! - **Dynamic values**: [`Value`](value::Value), a tree-shaped model of
//!   JavaScript data with deep equality, type tags and property paths
//! - **Catalog**: list, dictionary, object, string, math and logic helpers
//! - **Lenses**: composable getter/setter pairs over values and structs
//! - **Evolve**: rule trees that transform nested objects field by field
//! - **Shapes**: a structural type model computing the result of evolve and
//!   selecting union members by pattern
//! - **Function Composition**: `compose!`, `pipe!`, fixed-arity
//!   `pipe1..pipe7`, partial application and dynamic currying
//!
//! ## Feature Flags
//!
//! - `compose`: function composition and combinators
//! - `collection`: list, dictionary, math, string and logic functions
//! - `object`: object and path functions, lenses and the runtime evolver
//! - `shape`: the structural shape model
//! - `serde`: `Serialize`/`Deserialize` for values and JSON conversions
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use rambars::prelude::*;
//!
//! let rules = Rules::new().transform("count", |count| {
//!     Value::Number(count.as_f64().unwrap_or(0.0) + 1.0)
//! });
//! let evolved = evolve(&rules, &value!({ "count": 1, "name": "x" })).unwrap();
//! assert_eq!(evolved, value!({ "count": 2, "name": "x" }));
//!
//! let shape = Shape::object([("count", Shape::Number), ("name", Shape::String)]);
//! let evolver = ShapeEvolver::new().transform("count", Signature::unary(Shape::Number, Shape::Number));
//! assert_eq!(shape::evolve(&shape, &evolver), shape);
//!
//! let shout = pipe!(|name: &str| name.trim().to_string(), |name: String| name.to_uppercase());
//! assert_eq!(shout("  ada "), "ADA");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the core types and macros. The catalog functions are left in
/// their modules, since several share a name across modules (`keys`,
/// `starts_with`, ...).
///
/// # Usage
///
/// ```rust
/// use rambars::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::Limits;
    pub use crate::error::Error;
    pub use crate::value;
    pub use crate::value::{Function, Object, Path, TypeTag, Value, equals, type_of};

    #[cfg(feature = "compose")]
    pub use crate::compose::{Stage, always, identity};
    #[cfg(feature = "compose")]
    pub use crate::{compose, pipe};

    #[cfg(feature = "collection")]
    pub use crate::dictionary::Dictionary;

    #[cfg(feature = "object")]
    pub use crate::evolve::{Evolver, Rules, evolve};
    #[cfg(feature = "object")]
    pub use crate::lens;
    #[cfg(feature = "object")]
    pub use crate::object::{Lens, lens_path, lens_prop, over, set, view};

    #[cfg(feature = "shape")]
    pub use crate::shape;
    #[cfg(feature = "shape")]
    pub use crate::shape::{Discriminated, Shape, ShapeEvolver, Signature};
}

pub mod config;
pub mod error;
pub mod value;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "collection")]
pub mod dictionary;

#[cfg(feature = "collection")]
pub mod list;

#[cfg(feature = "collection")]
pub mod logic;

#[cfg(feature = "collection")]
pub mod math;

#[cfg(feature = "collection")]
pub mod string;

#[cfg(feature = "object")]
pub mod evolve;

#[cfg(feature = "object")]
pub mod object;

#[cfg(feature = "shape")]
pub mod shape;

#[cfg(all(feature = "collection", feature = "object"))]
pub mod curried;
