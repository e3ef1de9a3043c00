//! Function composition utilities.
//!
//! # Overview
//!
//! - [`compose!`] and [`pipe!`]: compose any number of functions, with
//!   every stage checked by the compiler
//! - [`pipe1`]..[`pipe7`] and [`compose1`]..[`compose7`]: the same as plain
//!   functions, fixed arity
//! - [`pipe_erased`] and [`compose_erased`]: longer chains with typed
//!   endpoints and dynamic inner stages
//! - [`partial2_1`]..[`partial4_3`]: prefix partial application
//! - [`curry`], [`curry_n`], [`partial_fn`], [`apply`], [`unapply`]: the
//!   dynamic counterparts over [`Function`](crate::value::Function) values
//! - [`identity`], [`always`], [`flip`], [`once`], [`tap`], [`converge`],
//!   [`try_catch`]: combinators
//!
//! # Examples
//!
//! ```
//! use rambars::compose::partial2_1;
//! use rambars::{compose, pipe};
//!
//! fn multiply(first: i32, second: i32) -> i32 { first * second }
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! let double = partial2_1(multiply, 2);
//! let add_ten = partial2_1(add, 10);
//!
//! assert_eq!(compose!(&add_ten, &double)(5), 20);
//! assert_eq!(pipe!(double, add_ten)(5), 20);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Mirror**: `pipeN(f1, ..., fN) == composeN(fN, ..., f1)`

mod dynamic;
mod ladder;
mod macros;
mod partial;
mod utils;

pub use dynamic::{apply, curry, curry_n, partial_fn, unapply};
pub use ladder::{
    Stage, compose_erased, compose1, compose2, compose3, compose4, compose5, compose6, compose7,
    pipe_erased, pipe1, pipe2, pipe3, pipe4, pipe5, pipe6, pipe7,
};
pub use partial::{partial2_1, partial3_1, partial3_2, partial4_1, partial4_2, partial4_3};
pub use utils::{always, always_false, always_true, converge, flip, identity, once, tap, try_catch};

pub use crate::compose;
pub use crate::pipe;
