//! Currying and application over dynamic [`Function`] values.
//!
//! The generic ladder covers functions whose types are known to the
//! compiler. These helpers work on [`Function`] values instead, where the
//! arity is a runtime property.

use crate::error::ArgumentError;
use crate::value::{Function, Value};

/// Curries a function by its declared arity. See [`curry_n`].
#[must_use]
pub fn curry(function: &Function) -> Function {
    curry_n(function.arity(), function)
}

/// Curries a function to exactly `arity` arguments.
///
/// Each call of the curried function may supply any number of arguments.
/// Once `arity` have been collected the original function runs with all of
/// them; before that the call returns a [`Value::Function`] waiting for the
/// rest.
///
/// ```rust
/// use rambars::compose::curry;
/// use rambars::value::{Function, Value};
///
/// let sum3 = Function::new("sum3", 3, |arguments| {
///     Value::Number(arguments.iter().filter_map(Value::as_f64).sum())
/// });
/// let curried = curry(&sum3);
///
/// let step = curried.call(&[1.into()]);
/// let step = step.as_function().unwrap().call(&[2.into()]);
/// let total = step.as_function().unwrap().call(&[3.into()]);
/// assert_eq!(total, Value::Number(6.0));
///
/// assert_eq!(curried.call(&[1.into(), 2.into(), 3.into()]), Value::Number(6.0));
/// ```
#[must_use]
pub fn curry_n(arity: usize, function: &Function) -> Function {
    collect_arguments(function.clone(), arity, Vec::new())
}

fn collect_arguments(function: Function, arity: usize, collected: Vec<Value>) -> Function {
    let remaining = arity.saturating_sub(collected.len());
    let target = function.clone();
    target.wrap(remaining, move |arguments| {
        let mut gathered = collected.clone();
        gathered.extend_from_slice(arguments);
        if gathered.len() >= arity {
            function.call(&gathered)
        } else {
            tracing::trace!(
                name = function.name(),
                collected = gathered.len(),
                arity,
                "curried call is still partial"
            );
            Value::Function(collect_arguments(function.clone(), arity, gathered))
        }
    })
}

/// Fixes a prefix of a function's arguments.
///
/// The result has the remaining arity and, when called, receives the fixed
/// arguments followed by its own.
///
/// # Errors
///
/// Returns [`ArgumentError::TooMany`] when more arguments are fixed than
/// the function declares.
///
/// ```rust
/// use rambars::compose::partial_fn;
/// use rambars::value::{Function, Value};
///
/// let greet = Function::new("greet", 2, |arguments| {
///     Value::from(format!("{}, {}!", arguments[0], arguments[1]))
/// });
/// let hello = partial_fn(&greet, &["Hello".into()]).unwrap();
///
/// assert_eq!(hello.arity(), 1);
/// assert_eq!(hello.call(&["Ada".into()]), Value::from("Hello, Ada!"));
/// assert!(partial_fn(&greet, &[1.into(), 2.into(), 3.into()]).is_err());
/// ```
pub fn partial_fn(function: &Function, fixed: &[Value]) -> Result<Function, ArgumentError> {
    if fixed.len() > function.arity() {
        tracing::debug!(
            name = function.name(),
            arity = function.arity(),
            received = fixed.len(),
            "partial application with too many arguments"
        );
        return Err(ArgumentError::TooMany {
            name: function.name().to_string(),
            expected: function.arity(),
            received: fixed.len(),
        });
    }

    let target = function.clone();
    let fixed = fixed.to_vec();
    Ok(function.wrap(function.arity() - fixed.len(), move |arguments| {
        let mut all = fixed.clone();
        all.extend_from_slice(arguments);
        target.call(&all)
    }))
}

/// Calls `function` with the elements of `arguments`.
#[must_use]
pub fn apply(function: &Function, arguments: &[Value]) -> Value {
    function.call(arguments)
}

/// Turns a function of one array into a variadic function.
///
/// ```rust
/// use rambars::compose::unapply;
/// use rambars::value::{Function, Value};
///
/// let count = Function::unary("count", |list| Value::from(list.as_array().map_or(0, <[Value]>::len)));
/// let variadic = unapply(&count);
///
/// assert_eq!(variadic.call(&[1.into(), 2.into(), 3.into()]), Value::from(3));
/// ```
#[must_use]
pub fn unapply(function: &Function) -> Function {
    let target = function.clone();
    function.wrap(0, move |arguments| target.call(&[Value::Array(arguments.to_vec())]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concat() -> Function {
        Function::new("concat", 2, |arguments| {
            Value::from(arguments.iter().map(ToString::to_string).collect::<String>())
        })
    }

    #[test]
    fn test_curry_reports_remaining_arity() {
        let curried = curry(&concat());
        assert_eq!(curried.arity(), 2);
        let partial = curried.call(&["a".into()]);
        assert_eq!(partial.as_function().map(Function::arity), Some(1));
    }

    #[test]
    fn test_curry_n_can_shorten_arity() {
        let curried = curry_n(1, &concat());
        assert_eq!(curried.call(&["a".into()]), Value::from("a"));
    }

    #[test]
    fn test_partial_fn_accepts_exact_arity() {
        let thunk = partial_fn(&concat(), &["a".into(), "b".into()]).unwrap();
        assert_eq!(thunk.arity(), 0);
        assert_eq!(thunk.call(&[]), Value::from("ab"));
    }

    #[test]
    fn test_adapters_keep_async_kind() {
        use crate::value::{FunctionKind, TypeTag, type_of};

        let fetch = Function::new_async("fetch", 2, |_| async { Value::Null });
        let adapted = [
            curry(&fetch),
            partial_fn(&fetch, &["a".into()]).unwrap(),
            unapply(&fetch),
        ];
        for function in adapted {
            assert_eq!(function.kind(), FunctionKind::Async);
            assert_eq!(function.name(), "fetch");
            assert_eq!(type_of(&Value::Function(function)), TypeTag::Async);
        }

        let step = curry(&fetch).call(&["a".into()]);
        assert_eq!(type_of(&step), TypeTag::Async);
        assert_eq!(type_of(&curry(&concat()).call(&["a".into()])), TypeTag::Function);
    }

    #[test]
    fn test_apply_spreads_arguments() {
        assert_eq!(apply(&concat(), &["x".into(), "y".into()]), Value::from("xy"));
    }
}
