//! Integration tests for asynchronous functions and promises.

use std::future::IntoFuture;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use rambars::value::{Function, FunctionKind, Promise, TypeTag, Value, type_of};

fn delayed_double() -> Function {
    Function::new_async("double", 1, |arguments| async move {
        tokio::time::sleep(Duration::from_millis(5)).await;
        let number = arguments.first().and_then(Value::as_f64).unwrap_or(f64::NAN);
        Value::Number(number * 2.0)
    })
}

#[tokio::test]
async fn test_async_function_returns_promise() {
    let double = delayed_double();
    assert_eq!(double.kind(), FunctionKind::Async);
    assert_eq!(type_of(&Value::from(double.clone())), TypeTag::Async);

    let Value::Promise(promise) = double.call(&[Value::from(21)]) else {
        panic!("async function must return a promise");
    };
    assert_eq!(promise.clone().into_future().await, Value::from(42));
    assert_eq!(promise.peek(), Some(&Value::from(42)));
}

#[tokio::test]
async fn test_promise_runs_once_for_all_clones() {
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&runs);
    let promise = Promise::new(async move {
        counter.fetch_add(1, Ordering::SeqCst);
        Value::from("done")
    });

    let first = promise.clone();
    let second = promise.clone();
    let (left, right) = tokio::join!(first.into_future(), second.into_future());
    assert_eq!(left, right);
    assert_eq!(promise.into_future().await, Value::from("done"));
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_pending_promise_has_no_peek() {
    let promise = Promise::new(async {
        tokio::time::sleep(Duration::from_millis(5)).await;
        Value::Null
    });
    assert!(promise.peek().is_none());
    promise.clone().into_future().await;
    assert_eq!(promise.peek(), Some(&Value::Null));
}

#[test]
fn test_promise_equality_is_by_handle() {
    let promise = Promise::resolve(Value::from(1));
    let same = Value::Promise(promise.clone());
    assert_eq!(Value::Promise(promise), same);
    assert_ne!(same, Value::Promise(Promise::resolve(Value::from(1))));
    assert_eq!(same.to_string(), "[object Promise]");
}
