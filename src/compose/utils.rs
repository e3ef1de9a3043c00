//! Small combinators used as building blocks for composition.
//!
//! - [`identity`]: the unit of composition (I combinator)
//! - [`always`]: a function that ignores its input (K combinator)
//! - [`flip`]: swaps the arguments of a binary function (C combinator)
//! - [`once`], [`tap`], [`converge`], [`try_catch`]: call-site adapters

use std::sync::OnceLock;

/// Returns the value unchanged.
///
/// `compose!(identity, f)` and `compose!(f, identity)` both behave as `f`.
///
/// ```
/// use rambars::compose;
/// use rambars::compose::identity;
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = compose!(identity, double);
/// assert_eq!(composed(5), double(5));
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns a clone of `value`, ignoring its
/// input.
///
/// ```
/// use rambars::compose::always;
///
/// let values: Vec<i32> = vec![1, 2, 3].into_iter().map(always(0)).collect();
/// assert_eq!(values, vec![0, 0, 0]);
/// ```
#[inline]
pub fn always<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// A function that returns `true` for any input.
#[inline]
pub fn always_true<U>(_: U) -> bool {
    true
}

/// A function that returns `false` for any input.
#[inline]
pub fn always_false<U>(_: U) -> bool {
    false
}

/// Swaps the arguments of a binary function.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// ```
/// use rambars::compose::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// assert_eq!(flip(subtract)(3, 10), 7);
/// assert_eq!(flip(flip(subtract))(10, 3), subtract(10, 3));
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Runs `function` on the first call only; every later call returns a clone
/// of the first result and ignores its argument.
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// use rambars::compose::once;
///
/// let calls = AtomicUsize::new(0);
/// let initialise = once(|seed: u32| {
///     calls.fetch_add(1, Ordering::SeqCst);
///     seed * 10
/// });
///
/// assert_eq!(initialise(4), 40);
/// assert_eq!(initialise(9), 40);
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// ```
pub fn once<A, R, F>(function: F) -> impl Fn(A) -> R
where
    F: Fn(A) -> R,
    R: Clone,
{
    let result = OnceLock::new();
    move |argument| result.get_or_init(|| function(argument)).clone()
}

/// Runs `effect` on a reference to the input, then returns the input.
///
/// ```
/// use std::cell::RefCell;
///
/// use rambars::compose::tap;
///
/// let seen = RefCell::new(Vec::new());
/// let record = tap(|value: &i32| seen.borrow_mut().push(*value));
///
/// assert_eq!(record(3), 3);
/// assert_eq!(*seen.borrow(), vec![3]);
/// ```
pub fn tap<T, F>(effect: F) -> impl Fn(T) -> T
where
    F: Fn(&T),
{
    move |value| {
        effect(&value);
        value
    }
}

/// Feeds the input to every branch and the collected branch results to
/// `after`.
///
/// ```
/// use rambars::compose::converge;
///
/// let average = converge(
///     |parts: Vec<f64>| parts[0] / parts[1],
///     [
///         (|list: &Vec<f64>| list.iter().sum::<f64>()) as fn(&Vec<f64>) -> f64,
///         |list: &Vec<f64>| list.len() as f64,
///     ],
/// );
///
/// assert_eq!(average(vec![1.0, 2.0, 3.0, 6.0]), 3.0);
/// ```
pub fn converge<A, R, S, G, F, I>(after: G, branches: I) -> impl Fn(A) -> S
where
    G: Fn(Vec<R>) -> S,
    F: Fn(&A) -> R,
    I: IntoIterator<Item = F>,
{
    let branches: Vec<F> = branches.into_iter().collect();
    move |input| after(branches.iter().map(|branch| branch(&input)).collect())
}

/// Calls `function`, and on failure calls `fallback` with the error and the
/// original input.
///
/// ```
/// use rambars::compose::try_catch;
///
/// let parse = try_catch(
///     |text: &str| text.parse::<i32>(),
///     |_error, text: &str| i32::try_from(text.len()).unwrap_or(i32::MAX),
/// );
///
/// assert_eq!(parse("42"), 42);
/// assert_eq!(parse("abc"), 3);
/// ```
pub fn try_catch<A, R, E, F, G>(function: F, fallback: G) -> impl Fn(A) -> R
where
    A: Clone,
    F: Fn(A) -> Result<R, E>,
    G: Fn(E, A) -> R,
{
    move |input: A| match function(input.clone()) {
        Ok(result) => result,
        Err(error) => fallback(error, input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_always_with_reference() {
        let always_hello = always("hello");
        assert_eq!(always_hello(42), "hello");
    }

    #[test]
    fn test_flip_with_asymmetric_function() {
        fn power(base: i32, exponent: u32) -> i32 {
            base.pow(exponent)
        }

        let flipped_power = flip(power);
        assert_eq!(flipped_power(3, 2), 8);
    }

    #[test]
    fn test_constant_predicates() {
        assert!(always_true("anything"));
        assert!(!always_false(0));
    }
}
