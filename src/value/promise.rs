//! Shared asynchronous values.

use std::fmt;
use std::future::{Future, IntoFuture};

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};

use super::Value;

/// A clonable handle to a value that may not be available yet.
///
/// Every clone observes the same outcome; the underlying future runs at
/// most once.
///
/// # Examples
///
/// ```rust
/// use std::future::IntoFuture;
///
/// use rambars::value::{Promise, Value};
///
/// let promise = Promise::resolve(Value::from(1));
/// let result = futures::executor::block_on(promise.clone().into_future());
/// assert_eq!(result, Value::from(1));
/// assert_eq!(promise.peek(), Some(&Value::from(1)));
/// ```
#[derive(Clone)]
pub struct Promise(Shared<BoxFuture<'static, Value>>);

impl Promise {
    /// Wraps a future.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Value> + Send + 'static,
    {
        Self(future.boxed().shared())
    }

    /// A promise that is already settled.
    #[must_use]
    pub fn resolve(value: Value) -> Self {
        Self::new(futures::future::ready(value))
    }

    /// The settled value, if the future has completed.
    #[must_use]
    pub fn peek(&self) -> Option<&Value> {
        self.0.peek()
    }

    /// `true` when both handles share the same future.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

impl IntoFuture for Promise {
    type Output = Value;
    type IntoFuture = Shared<BoxFuture<'static, Value>>;

    fn into_future(self) -> Self::IntoFuture {
        self.0
    }
}

impl fmt::Debug for Promise {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.peek() {
            Some(value) => formatter.debug_tuple("Promise").field(value).finish(),
            None => formatter.write_str("Promise(<pending>)"),
        }
    }
}
