//! Fixed-arity `pipe`/`compose` functions and the erased fallback.
//!
//! `pipe1` through `pipe7` thread a value through one to seven stages and
//! every stage boundary is a generic parameter, so a mismatch anywhere in
//! the chain is a compile error. `compose1` through `compose7` take the
//! same stages in reverse order.
//!
//! Longer chains go through [`pipe_erased`] or [`compose_erased`], where only
//! the endpoints are typed and the inner stages all work on [`Value`]. The
//! [`pipe!`](crate::pipe!) and [`compose!`](crate::compose!) macros have no
//! such limit.
//!
//! # Examples
//!
//! ```
//! use rambars::compose::{compose3, pipe3};
//!
//! let parse = |text: &str| text.trim().parse::<i32>().unwrap_or(0);
//! let double = |number: i32| number * 2;
//! let describe = |number: i32| format!("<{number}>");
//!
//! assert_eq!(pipe3(parse, double, describe)(" 21 "), "<42>");
//! assert_eq!(compose3(describe, double, parse)(" 21 "), "<42>");
//! ```
//!
//! A stage whose input does not match the previous output is rejected:
//!
//! ```compile_fail
//! use rambars::compose::pipe3;
//!
//! let broken = pipe3(|n: i32| n + 1, |s: String| s.len(), |n: usize| n * 2);
//! broken(1);
//! ```

use paste::paste;

use crate::value::Value;

/// An inner stage of an erased chain.
pub type Stage = Box<dyn Fn(Value) -> Value + Send + Sync>;

macro_rules! define_ladder {
    (
        $arity:literal: $input:ident => $output:ident;
        [$($stage:ident: $stage_type:ident($from:ident -> $to:ident)),+];
        reversed [$($reversed:ident: $reversed_type:ident),+]
    ) => {
        paste! {
            #[doc = "Left-to-right composition of " $arity " stage(s)."]
            #[must_use]
            pub fn [<pipe $arity>]<$input, $($to,)+ $($stage_type,)+>(
                $($stage: $stage_type,)+
            ) -> impl Fn($input) -> $output
            where
                $($stage_type: Fn($from) -> $to,)+
            {
                move |input: $input| {
                    let value = input;
                    $(let value = $stage(value);)+
                    value
                }
            }

            #[doc = "Right-to-left composition of " $arity " stage(s); the mirror of `pipe" $arity "`."]
            #[must_use]
            pub fn [<compose $arity>]<$input, $($to,)+ $($stage_type,)+>(
                $($reversed: $reversed_type,)+
            ) -> impl Fn($input) -> $output
            where
                $($stage_type: Fn($from) -> $to,)+
            {
                [<pipe $arity>]($($stage),+)
            }
        }
    };
}

define_ladder! {
    1: A => B;
    [first: F1(A -> B)];
    reversed [first: F1]
}

define_ladder! {
    2: A => C;
    [first: F1(A -> B), second: F2(B -> C)];
    reversed [second: F2, first: F1]
}

define_ladder! {
    3: A => D;
    [first: F1(A -> B), second: F2(B -> C), third: F3(C -> D)];
    reversed [third: F3, second: F2, first: F1]
}

define_ladder! {
    4: A => E;
    [first: F1(A -> B), second: F2(B -> C), third: F3(C -> D), fourth: F4(D -> E)];
    reversed [fourth: F4, third: F3, second: F2, first: F1]
}

define_ladder! {
    5: A => G;
    [
        first: F1(A -> B), second: F2(B -> C), third: F3(C -> D), fourth: F4(D -> E),
        fifth: F5(E -> G)
    ];
    reversed [fifth: F5, fourth: F4, third: F3, second: F2, first: F1]
}

define_ladder! {
    6: A => H;
    [
        first: F1(A -> B), second: F2(B -> C), third: F3(C -> D), fourth: F4(D -> E),
        fifth: F5(E -> G), sixth: F6(G -> H)
    ];
    reversed [sixth: F6, fifth: F5, fourth: F4, third: F3, second: F2, first: F1]
}

define_ladder! {
    7: A => I;
    [
        first: F1(A -> B), second: F2(B -> C), third: F3(C -> D), fourth: F4(D -> E),
        fifth: F5(E -> G), sixth: F6(G -> H), seventh: F7(H -> I)
    ];
    reversed [seventh: F7, sixth: F6, fifth: F5, fourth: F4, third: F3, second: F2, first: F1]
}

/// Left-to-right composition of any number of stages with typed endpoints.
///
/// The inner stages are not checked against each other: each one maps a
/// [`Value`] to a [`Value`].
///
/// ```
/// use rambars::compose::{Stage, pipe_erased};
/// use rambars::value::Value;
///
/// let add = |amount: f64| -> Stage {
///     Box::new(move |value: Value| Value::Number(value.as_f64().unwrap_or(0.0) + amount))
/// };
/// let chain = pipe_erased(
///     |number: i32| Value::from(number),
///     (1..=8).map(f64::from).map(add).collect(),
///     |value: Value| value.to_string(),
/// );
///
/// assert_eq!(chain(0), "36");
/// ```
#[must_use]
pub fn pipe_erased<A, R, F, L>(first: F, middle: Vec<Stage>, last: L) -> impl Fn(A) -> R
where
    F: Fn(A) -> Value,
    L: Fn(Value) -> R,
{
    move |input: A| {
        let value = middle.iter().fold(first(input), |value, stage| stage(value));
        last(value)
    }
}

/// Right-to-left composition with typed endpoints; the mirror of
/// [`pipe_erased`]. `middle` is listed in composition order, so its last
/// stage runs first.
#[must_use]
pub fn compose_erased<A, R, F, L>(last: L, middle: Vec<Stage>, first: F) -> impl Fn(A) -> R
where
    F: Fn(A) -> Value,
    L: Fn(Value) -> R,
{
    move |input: A| {
        let value = middle.iter().rev().fold(first(input), |value, stage| stage(value));
        last(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipe1_is_the_function() {
        assert_eq!(pipe1(|x: i32| x + 1)(1), 2);
        assert_eq!(compose1(|x: i32| x + 1)(1), 2);
    }

    #[test]
    fn test_pipe7_threads_types() {
        let chain = pipe7(
            |x: u8| u16::from(x),
            |x: u16| u32::from(x) * 2,
            |x: u32| u64::from(x) + 1,
            |x: u64| x.to_string(),
            |x: String| x.len(),
            |x: usize| x % 2 == 1,
            |x: bool| if x { "odd" } else { "even" },
        );
        assert_eq!(chain(50), "odd");
    }

    #[test]
    fn test_compose_erased_runs_middle_in_reverse() {
        let append = |suffix: &'static str| -> Stage {
            Box::new(move |value: Value| Value::from(format!("{value}{suffix}")))
        };
        let chain = compose_erased(
            |value: Value| value.to_string(),
            vec![append("c"), append("b")],
            |text: &str| Value::from(text),
        );
        assert_eq!(chain("a"), "abc");
    }
}
