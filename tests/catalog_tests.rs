//! Integration tests for the math, string and logic catalog.

#![cfg(feature = "collection")]

use proptest::prelude::*;
use rambars::logic::{
    all_pass, any_pass, both, complement, default_to, either, if_else, is, is_empty, is_nil,
    unless, when,
};
use rambars::math::{
    clamp, math_mod, max_by, mean, median, min_by, modulo, product, range, sum, times,
};
use rambars::string::{join, match_all, replace, replace_all, split, split_by, test, trim};
use rambars::value;
use rambars::value::{TypeTag, Value};
use regex::Regex;
use rstest::rstest;

// =============================================================================
// Math
// =============================================================================

#[rstest]
#[case(-17.0, 5.0, 3.0)]
#[case(17.0, 5.0, 2.0)]
#[case(-5.0, 5.0, 0.0)]
fn test_math_mod_is_floored(#[case] number: f64, #[case] divisor: f64, #[case] expected: f64) {
    assert_eq!(math_mod(number, divisor), expected);
}

#[rstest]
#[case(17.5, 5.0)]
#[case(17.0, -5.0)]
#[case(f64::INFINITY, 5.0)]
fn test_math_mod_rejects_non_integers(#[case] number: f64, #[case] divisor: f64) {
    assert!(math_mod(number, divisor).is_nan());
}

#[test]
fn test_aggregates() {
    assert_eq!(modulo(-17.0, 5.0), -2.0);
    assert_eq!(sum(&[1.0, 2.0, 3.5]), 6.5);
    assert_eq!(product(&[2.0, 3.0]), 6.0);
    assert_eq!(product(&[]), 1.0);
    assert_eq!(mean(&[1.0, 2.0, 6.0]), 3.0);
    assert!(mean(&[]).is_nan());
    assert_eq!(median(&[5.0, 1.0, 4.0, 2.0]), 3.0);
}

#[test]
fn test_ranges_and_extremes() {
    assert_eq!(range(2, 5), vec![2, 3, 4]);
    assert!(range(5, 2).is_empty());
    assert_eq!(times(|index| index * index, 4), vec![0, 1, 4, 9]);
    assert_eq!(max_by(|word: &&str| word.len(), "ab", "abc"), "abc");
    assert_eq!(min_by(|word: &&str| word.len(), "ab", "abc"), "ab");
    assert_eq!(clamp('b', 'y', 'z'), 'y');
}

proptest! {
    #[test]
    fn prop_math_mod_stays_in_range(number in -1000i32..1000, divisor in 1i32..50) {
        let result = math_mod(f64::from(number), f64::from(divisor));
        prop_assert!((0.0..f64::from(divisor)).contains(&result));
        prop_assert_eq!((f64::from(number) - result) % f64::from(divisor), 0.0);
    }
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn test_split_and_join() {
    assert_eq!(split(",", "a,b,,c"), vec!["a", "b", "", "c"]);
    assert_eq!(split("", "abc"), vec!["a", "b", "c"]);
    assert_eq!(split_by(&Regex::new(r"\s+").unwrap(), "a  b\tc"), vec!["a", "b", "c"]);
    assert_eq!(join("-", &[2024, 1, 31]), "2024-1-31");
    assert_eq!(join(", ", &[] as &[&str]), "");
}

#[test]
fn test_regex_helpers() {
    let digits = Regex::new(r"\d+").unwrap();
    assert_eq!(replace(&digits, "#", "a1b22c333"), "a#b22c333");
    assert_eq!(replace_all(&digits, "#", "a1b22c333"), "a#b#c#");
    assert_eq!(match_all(&digits, "a1b22c333"), vec!["1", "22", "333"]);
    assert!(match_all(&digits, "none").is_empty());
    assert!(test(&digits, "v2"));
    assert_eq!(trim("  padded \n"), "padded");
}

// =============================================================================
// Logic
// =============================================================================

#[test]
fn test_predicate_combinators() {
    let positive = |n: &i32| *n > 0;
    let even = |n: &i32| n % 2 == 0;
    assert!(both(positive, even)(&4));
    assert!(!both(positive, even)(&3));
    assert!(either(positive, even)(&-2));
    assert!(complement(positive)(&0));

    let checks: [fn(&i32) -> bool; 2] = [|n| *n > 0, |n| *n < 10];
    assert!(all_pass(checks)(&5));
    assert!(!all_pass(checks)(&12));
    assert!(any_pass(checks)(&12));
}

#[test]
fn test_conditional_functions() {
    let sign = if_else(|n: &i32| *n < 0, |_: i32| "negative", |_: i32| "non-negative");
    assert_eq!(sign(-4), "negative");
    assert_eq!(sign(4), "non-negative");

    let cap = when(|n: &i32| *n > 100, |_: i32| 100);
    assert_eq!(cap(250), 100);
    assert_eq!(cap(50), 50);

    let ensure_odd = unless(|n: &i32| n % 2 != 0, |n: i32| n + 1);
    assert_eq!(ensure_odd(2), 3);
    assert_eq!(ensure_odd(3), 3);
}

#[rstest]
#[case(Value::Undefined, value!("fallback"))]
#[case(Value::Null, value!("fallback"))]
#[case(Value::Number(f64::NAN), value!("fallback"))]
#[case(value!(0), value!(0))]
#[case(value!(false), value!(false))]
fn test_default_to(#[case] input: Value, #[case] expected: Value) {
    assert_eq!(default_to(&value!("fallback"), &input), expected);
}

#[test]
fn test_nil_and_empty_checks() {
    assert!(is_nil(&Value::Undefined));
    assert!(!is_nil(&value!(0)));
    assert!(is_empty(&value!([])));
    assert!(is_empty(&value!({})));
    assert!(is_empty(&value!("")));
    assert!(!is_empty(&Value::Null));
    assert!(is(TypeTag::Object, &Value::Date(0)));
    assert!(!is(TypeTag::Array, &value!({})));
}
