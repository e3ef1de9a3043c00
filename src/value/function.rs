//! Native function values.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use super::{Promise, Value};

type Body = dyn Fn(&[Value]) -> Value + Send + Sync;

/// Whether calling a [`Function`] yields its result directly or a
/// [`Promise`] of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    /// Returns its result directly.
    Sync,
    /// Returns a [`Value::Promise`].
    Async,
}

/// A named native function with a declared arity.
///
/// Missing arguments read as `Undefined`; extra arguments are passed
/// through and may be ignored by the body.
///
/// # Examples
///
/// ```rust
/// use rambars::value::{Function, Value};
///
/// let add = Function::new("add", 2, |arguments| {
///     let left = arguments.first().and_then(Value::as_f64).unwrap_or(f64::NAN);
///     let right = arguments.get(1).and_then(Value::as_f64).unwrap_or(f64::NAN);
///     Value::Number(left + right)
/// });
///
/// assert_eq!(add.call(&[1.into(), 2.into()]), Value::Number(3.0));
/// assert_eq!(add.arity(), 2);
/// ```
#[derive(Clone)]
pub struct Function {
    name: Arc<str>,
    arity: usize,
    kind: FunctionKind,
    body: Arc<Body>,
}

impl Function {
    /// Wraps a synchronous body.
    pub fn new<F>(name: &str, arity: usize, body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(name),
            arity,
            kind: FunctionKind::Sync,
            body: Arc::new(body),
        }
    }

    /// Wraps a one-argument body.
    pub fn unary<F>(name: &str, body: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Self::new(name, 1, move |arguments| {
            body(arguments.first().cloned().unwrap_or_default())
        })
    }

    /// Wraps an asynchronous body; each call returns a [`Value::Promise`].
    pub fn new_async<F, Fut>(name: &str, arity: usize, body: F) -> Self
    where
        F: Fn(Vec<Value>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Value> + Send + 'static,
    {
        Self {
            name: Arc::from(name),
            arity,
            kind: FunctionKind::Async,
            body: Arc::new(move |arguments: &[Value]| {
                Value::Promise(Promise::new(body(arguments.to_vec())))
            }),
        }
    }

    /// Invokes the function.
    #[must_use]
    pub fn call(&self, arguments: &[Value]) -> Value {
        (self.body)(arguments)
    }

    /// The function's name; may be empty for anonymous functions.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared number of parameters.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Synchronous or asynchronous.
    #[must_use]
    pub const fn kind(&self) -> FunctionKind {
        self.kind
    }

    /// A function with this one's name and kind running a new body.
    ///
    /// Used to build adapters (curried or partially applied forms) that
    /// still report as the function they wrap.
    pub fn wrap<F>(&self, arity: usize, body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: Arc::clone(&self.name),
            arity,
            kind: self.kind,
            body: Arc::new(body),
        }
    }

    /// `true` when both handles share the same body.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
