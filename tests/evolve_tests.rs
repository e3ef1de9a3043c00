//! Integration tests for the runtime evolver and its shape-level mirror.
//!
//! Each property is checked on values and, where it has a static
//! counterpart, on shapes.

#![cfg(feature = "object")]

use rambars::config::Limits;
use rambars::error::{Error, EvolveError};
use rambars::evolve::{Evolver, Rules, Transform, evolve, evolve_list, evolve_with};
use rambars::value;
use rambars::value::{Path, TypeTag, Value};
use rstest::rstest;

fn inc(value: Value) -> Value {
    Value::Number(value.as_f64().unwrap_or(f64::NAN) + 1.0)
}

fn stringify(value: Value) -> Value {
    Value::from(value.to_string())
}

// =============================================================================
// Runtime behaviour
// =============================================================================

#[test]
fn test_evolve_count_inc_keeps_other_fields() {
    let rules = Rules::new().transform("count", inc);
    let output = evolve(&rules, &value!({ "count": 1, "name": "x" })).unwrap();
    assert_eq!(output, value!({ "count": 2, "name": "x" }));
}

#[rstest]
#[case(value!({}))]
#[case(value!({ "a": 1 }))]
#[case(value!({ "a": { "b": [1, 2] }, "c": null }))]
fn test_disjoint_rules_are_identity(#[case] input: Value) {
    let rules = Rules::new()
        .transform("unrelated", |_| Value::Null)
        .nested("other", Rules::new().transform("x", inc));
    assert_eq!(evolve(&rules, &input).unwrap(), input);
}

#[test]
fn test_three_level_nesting_recurses_once_per_level() {
    let rules = Rules::new().nested(
        "a",
        Rules::new().nested("b", Rules::new().transform("c", stringify)),
    );
    let output = evolve(&rules, &value!({ "a": { "b": { "c": 1 } } })).unwrap();
    assert_eq!(output, value!({ "a": { "b": { "c": "1" } } }));
}

#[test]
fn test_nested_rule_on_number_reports_path() {
    let rules = Rules::new().nested("meta", Rules::new().nested("tags", Rules::new()));
    let error = evolve(&rules, &value!({ "meta": { "tags": 3 } })).unwrap_err();
    assert_eq!(
        error,
        EvolveError::NotEvolvable {
            path: Path::parse("meta.tags"),
            found: TypeTag::Number,
        }
    );
    assert_eq!(
        error.to_string(),
        "cannot evolve `meta.tags`: expected an object, found Number"
    );
}

#[rstest]
#[case(value!([1, 2]), TypeTag::Array)]
#[case(value!("text"), TypeTag::String)]
#[case(value!(null), TypeTag::Null)]
fn test_non_object_root_is_rejected(#[case] input: Value, #[case] found: TypeTag) {
    let error = evolve(&Rules::new(), &input).unwrap_err();
    assert_eq!(
        error,
        EvolveError::NotEvolvable {
            path: Path::root(),
            found,
        }
    );
}

#[test]
fn test_errors_convert_into_crate_error() {
    fn run() -> Result<Value, Error> {
        Ok(evolve(&Rules::new(), &value!(1))?)
    }
    assert!(matches!(run(), Err(Error::Evolve(_))));
}

#[test]
fn test_depth_limit_is_configurable() {
    let rules = Rules::new().nested("a", Rules::new().nested("b", Rules::new()));
    let input = value!({ "a": { "b": {} } });
    assert!(evolve_with(&rules, &input, &Limits::default().with_max_depth(2)).is_ok());
    assert_eq!(
        evolve_with(&rules, &input, &Limits::default().with_max_depth(1)),
        Err(EvolveError::DepthExceeded { limit: 1 })
    );
}

#[test]
fn test_rules_built_from_pairs() {
    let rules: Rules = [
        ("a".to_string(), Evolver::Transform(std::sync::Arc::new(inc))),
        ("b".to_string(), Evolver::Nested(Rules::new().transform("c", inc))),
    ]
    .into_iter()
    .collect();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules.iter().map(|(key, _)| key).collect::<Vec<_>>(), ["a", "b"]);
    assert!(Rules::new().is_empty());
    let output = evolve(&rules, &value!({ "a": 1, "b": { "c": 1 } })).unwrap();
    assert_eq!(output, value!({ "a": 2, "b": { "c": 2 } }));
}

#[test]
fn test_evolve_list_positional_rules() {
    let rules: Vec<Transform> = vec![std::sync::Arc::new(inc), std::sync::Arc::new(stringify)];
    let output = evolve_list(&rules, &[value!(1), value!(2), value!(3)]);
    assert_eq!(output, vec![value!(2), value!("2"), value!(3)]);
}

// =============================================================================
// Shape mirror
// =============================================================================

#[cfg(feature = "shape")]
mod shapes {
    use rambars::shape::{self, RejectionReason, Shape, ShapeEvolver, Signature};
    use rambars::value::Path;

    #[test]
    fn test_count_inc_shape_is_preserved() {
        let shape = Shape::object([("count", Shape::Number), ("name", Shape::String)]);
        let evolver =
            ShapeEvolver::new().transform("count", Signature::unary(Shape::Number, Shape::Number));
        assert_eq!(shape::evolve(&shape, &evolver), shape);
    }

    #[test]
    fn test_nested_shape_evolves_leaf_type() {
        let shape = Shape::object([(
            "a",
            Shape::object([("b", Shape::object([("c", Shape::Number)]))]),
        )]);
        let evolver = ShapeEvolver::new().nested(
            "a",
            ShapeEvolver::new().nested(
                "b",
                ShapeEvolver::new().transform("c", Signature::unary(Shape::Number, Shape::String)),
            ),
        );
        assert_eq!(
            shape::evolve(&shape, &evolver).to_string(),
            "{a: {b: {c: string}}}"
        );
    }

    #[test]
    fn test_nested_evolver_on_number_field_is_never() {
        let shape = Shape::object([("a", Shape::Number)]);
        let evolver = ShapeEvolver::new().nested("a", ShapeEvolver::new());
        assert_eq!(shape::evolve(&shape, &evolver), Shape::Never);

        let rejection = shape::evolve_checked(&shape, &evolver).unwrap_err();
        assert_eq!(rejection.path, Path::parse("a"));
        assert!(matches!(rejection.reason, RejectionReason::NotEvolvable { .. }));
    }

    #[test]
    fn test_inferred_value_shape_matches_runtime_result() {
        let input = rambars::value!({ "count": 1, "name": "x" });
        let evolver =
            ShapeEvolver::new().transform("count", Signature::unary(Shape::Number, Shape::Number));
        let evolved = shape::evolve(&Shape::of(&input), &evolver);
        assert_eq!(evolved.to_string(), "{count: number, name: \"x\"}");
    }
}
