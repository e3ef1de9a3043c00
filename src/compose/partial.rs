//! Prefix partial application.
//!
//! `partialN_K` fixes the first `K` arguments of an `N`-parameter function
//! and returns a function of the remaining `N - K`. The fixed arguments
//! must be a prefix of the parameter list, and the result type is
//! unchanged; both are enforced by the compiler.
//!
//! Fixed arguments are cloned on every call, so the returned function can
//! be called any number of times.
//!
//! # Examples
//!
//! ```
//! use rambars::compose::{partial2_1, partial3_2};
//!
//! fn greet(greeting: &str, name: &str) -> String {
//!     format!("{greeting}, {name}!")
//! }
//!
//! let hello = partial2_1(greet, "Hello");
//! assert_eq!(hello("Ada"), "Hello, Ada!");
//!
//! let clamp_to_percent = partial3_2(|low: i32, high: i32, value: i32| value.clamp(low, high), 0, 100);
//! assert_eq!(clamp_to_percent(140), 100);
//! ```
//!
//! Supplying an argument of the wrong type for the prefix is a compile
//! error:
//!
//! ```compile_fail
//! use rambars::compose::partial2_1;
//!
//! let add = |left: i32, right: i32| left + right;
//! let broken = partial2_1(add, "one");
//! broken(2);
//! ```

/// Fixes the first argument of a two-parameter function.
pub fn partial2_1<A, B, R, F>(function: F, first: A) -> impl Fn(B) -> R
where
    F: Fn(A, B) -> R,
    A: Clone,
{
    move |second| function(first.clone(), second)
}

/// Fixes the first argument of a three-parameter function.
pub fn partial3_1<A, B, C, R, F>(function: F, first: A) -> impl Fn(B, C) -> R
where
    F: Fn(A, B, C) -> R,
    A: Clone,
{
    move |second, third| function(first.clone(), second, third)
}

/// Fixes the first two arguments of a three-parameter function.
pub fn partial3_2<A, B, C, R, F>(function: F, first: A, second: B) -> impl Fn(C) -> R
where
    F: Fn(A, B, C) -> R,
    A: Clone,
    B: Clone,
{
    move |third| function(first.clone(), second.clone(), third)
}

/// Fixes the first argument of a four-parameter function.
pub fn partial4_1<A, B, C, D, R, F>(function: F, first: A) -> impl Fn(B, C, D) -> R
where
    F: Fn(A, B, C, D) -> R,
    A: Clone,
{
    move |second, third, fourth| function(first.clone(), second, third, fourth)
}

/// Fixes the first two arguments of a four-parameter function.
pub fn partial4_2<A, B, C, D, R, F>(function: F, first: A, second: B) -> impl Fn(C, D) -> R
where
    F: Fn(A, B, C, D) -> R,
    A: Clone,
    B: Clone,
{
    move |third, fourth| function(first.clone(), second.clone(), third, fourth)
}

/// Fixes the first three arguments of a four-parameter function.
pub fn partial4_3<A, B, C, D, R, F>(
    function: F,
    first: A,
    second: B,
    third: C,
) -> impl Fn(D) -> R
where
    F: Fn(A, B, C, D) -> R,
    A: Clone,
    B: Clone,
    C: Clone,
{
    move |fourth| function(first.clone(), second.clone(), third.clone(), fourth)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume(length: u32, width: u32, height: u32, scale: u32) -> u32 {
        length * width * height * scale
    }

    #[test]
    fn test_four_parameter_ladder_agrees() {
        let expected = volume(2, 3, 4, 5);
        assert_eq!(partial4_1(volume, 2)(3, 4, 5), expected);
        assert_eq!(partial4_2(volume, 2, 3)(4, 5), expected);
        assert_eq!(partial4_3(volume, 2, 3, 4)(5), expected);
    }

    #[test]
    fn test_fixed_arguments_are_reusable() {
        let tag = partial3_1(
            |prefix: String, body: &str, suffix: &str| format!("{prefix}{body}{suffix}"),
            "<".to_string(),
        );
        assert_eq!(tag("a", ">"), "<a>");
        assert_eq!(tag("b", "/>"), "<b/>");
    }
}
