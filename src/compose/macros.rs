//! The `compose!` and `pipe!` macros.
//!
//! Both build a single function out of any number of stages, and every
//! adjacent pair of stages is checked by the compiler: there is no length
//! past which the chain stops being verified.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`: the last listed function sees the
/// input and the first listed function produces the output.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
///
/// # Examples
///
/// ```
/// use rambars::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // add_one(double(square(3))) = add_one(double(9)) = 19
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed(3), 19);
/// ```
///
/// Types flow through the chain:
///
/// ```
/// use rambars::compose;
///
/// let length = compose!(|text: String| text.len(), |number: i32| number.to_string());
/// assert_eq!(length(12345), 5);
/// ```
///
/// Adjacent stages must agree:
///
/// ```compile_fail
/// use rambars::compose;
///
/// let broken = compose!(|text: String| text.len(), |number: i32| number * 2);
/// broken(1);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}

/// Composes functions from left to right.
///
/// `pipe!(f, g, h)(x)` is `h(g(f(x)))`, the mirror image of
/// [`compose!`](crate::compose!): `pipe!(f, g, h) == compose!(h, g, f)`.
///
/// A head function of several parameters takes them as one tuple.
///
/// # Examples
///
/// ```
/// use rambars::pipe;
///
/// let area = pipe!(
///     |(width, height): (f64, f64)| width * height,
///     |square_meters: f64| square_meters.round(),
///     |rounded: f64| format!("{rounded} m2"),
/// );
/// assert_eq!(area((2.5, 4.1)), "10 m2");
/// ```
///
/// ```compile_fail
/// use rambars::pipe;
///
/// let broken = pipe!(|number: i32| number + 1, |text: &str| text.len());
/// broken(1);
/// ```
#[macro_export]
macro_rules! pipe {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let rest_piped = $crate::pipe!($($remaining_functions),+);
        move |input| rest_piped(first(input))
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_compose_single() {
        let double = |x: i32| x * 2;
        let composed = compose!(double);
        assert_eq!(composed(5), 10);
    }

    #[test]
    fn test_pipe_matches_reversed_compose() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let square = |x: i32| x * x;
        let piped = pipe!(square, double, add_one);
        let composed = compose!(add_one, double, square);
        assert_eq!(piped(3), composed(3));
    }

    #[test]
    fn test_pipe_beyond_seven_stages_is_still_typed() {
        let increment = |x: u64| x + 1;
        let piped = pipe!(
            increment, increment, increment, increment, increment, increment, increment,
            increment, |x: u64| x.to_string()
        );
        assert_eq!(piped(0), "8");
    }
}
