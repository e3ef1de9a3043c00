//! Integration tests for the shape model: assignability, select and the
//! discriminant-based selection of Rust enums.

#![cfg(feature = "shape")]

use rambars::shape::{
    Discriminated, Shape, ShapeEvolver, Signature, evolve, evolve_checked, is_evolvable, select,
    select_by_tag, select_values,
};
use rambars::value;
use rambars::value::{TypeTag, Value};
use rstest::rstest;

fn circle() -> Shape {
    Shape::object([("kind", Shape::literal("circle")), ("radius", Shape::Number)])
}

fn square() -> Shape {
    Shape::object([("kind", Shape::literal("square")), ("side", Shape::Number)])
}

fn figure() -> Shape {
    Shape::union([circle(), square()])
}

// =============================================================================
// Select
// =============================================================================

#[test]
fn test_select_member_returns_member() {
    assert_eq!(select(&figure(), &circle()), circle());
    assert_eq!(select(&figure(), &square()), square());
}

#[test]
fn test_select_by_discriminant_pattern() {
    let pattern = Shape::object([("kind", Shape::literal("square"))]);
    assert_eq!(select(&figure(), &pattern), square());
}

#[rstest]
#[case(Shape::String)]
#[case(Shape::object([("kind", Shape::literal("triangle"))]))]
#[case(Shape::object([("radius", Shape::String)]))]
fn test_disjoint_pattern_selects_never(#[case] pattern: Shape) {
    assert_eq!(select(&figure(), &pattern), Shape::Never);
}

#[test]
fn test_select_with_any_keeps_everything() {
    assert_eq!(select(&figure(), &Shape::Any), figure());
}

#[test]
fn test_select_values_by_inferred_shape() {
    let events = [
        value!({ "type": "click", "x": 1, "y": 2 }),
        value!({ "type": "key", "code": 13 }),
        value!({ "type": "click", "x": 5, "y": 0 }),
    ];
    let pattern = Shape::object([("type", Shape::literal("click")), ("x", Shape::Number)]);
    let clicks = select_values(&events, &pattern);
    assert_eq!(clicks.len(), 2);
    assert!(clicks.iter().all(|event| event.get("x").is_some()));
}

#[test]
fn test_select_by_type_tag() {
    let values = [value!(1), value!("a"), Value::Number(f64::NAN), value!(2)];
    assert_eq!(select_by_tag(&values, &TypeTag::Number), vec![&values[0], &values[3]]);
    assert_eq!(values[2].tag(), TypeTag::NaN);
}

#[derive(Debug, PartialEq)]
enum Command {
    Move { dx: i32, dy: i32 },
    Say(String),
    Quit,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum CommandKind {
    Move,
    Say,
    Quit,
}

impl Discriminated for Command {
    type Tag = CommandKind;

    fn tag(&self) -> CommandKind {
        match self {
            Self::Move { .. } => CommandKind::Move,
            Self::Say(_) => CommandKind::Say,
            Self::Quit => CommandKind::Quit,
        }
    }
}

#[test]
fn test_select_by_tag_on_enum() {
    let script = [
        Command::Say("hi".to_string()),
        Command::Move { dx: 1, dy: 0 },
        Command::Quit,
        Command::Move { dx: 0, dy: -1 },
    ];
    let moves = select_by_tag(&script, &CommandKind::Move);
    assert_eq!(moves, vec![&script[1], &script[3]]);
    assert!(select_by_tag(&script[..2], &CommandKind::Quit).is_empty());
}

// =============================================================================
// Assignability
// =============================================================================

#[rstest]
#[case(Shape::literal("a"), Shape::String, true)]
#[case(Shape::String, Shape::literal("a"), false)]
#[case(Shape::Never, Shape::Number, true)]
#[case(Shape::Number, Shape::Never, false)]
#[case(Shape::Any, Shape::Number, true)]
#[case(Shape::array(Shape::literal("a")), Shape::array(Shape::String), true)]
#[case(Shape::Opaque("Date"), Shape::Opaque("RegExp"), false)]
#[case(Shape::union([Shape::Number, Shape::Null]), Shape::Number, false)]
#[case(Shape::Number, Shape::union([Shape::Number, Shape::Null]), true)]
fn test_assignability_table(#[case] source: Shape, #[case] target: Shape, #[case] expected: bool) {
    assert_eq!(source.is_assignable_to(&target), expected);
}

#[test]
fn test_optional_field_may_be_missing() {
    let target = Shape::object([
        ("id", Shape::Number),
        ("note", Shape::union([Shape::String, Shape::Undefined])),
    ]);
    assert!(Shape::object([("id", Shape::Number)]).is_assignable_to(&target));
}

#[test]
fn test_function_variance() {
    let takes_any = Shape::function(vec![Shape::Any], Shape::literal("ok"));
    let takes_number = Shape::function(vec![Shape::Number], Shape::String);
    assert!(takes_any.is_assignable_to(&takes_number));
    assert!(!takes_number.is_assignable_to(&takes_any));

    let nullary = Shape::function(vec![], Shape::String);
    assert!(nullary.is_assignable_to(&takes_number));
}

// =============================================================================
// Evolve diagnostics
// =============================================================================

#[test]
fn test_input_mismatch_is_located() {
    let shape = Shape::object([("meta", Shape::object([("tag", Shape::Number)]))]);
    let evolver = ShapeEvolver::new().nested(
        "meta",
        ShapeEvolver::new().transform("tag", Signature::unary(Shape::String, Shape::String)),
    );
    let rejection = evolve_checked(&shape, &evolver).unwrap_err();
    assert_eq!(
        rejection.to_string(),
        "cannot evolve `meta.tag`: transformer expects string, found number"
    );
}

#[test]
fn test_transformer_must_be_unary() {
    let shape = Shape::object([("a", Shape::Number)]);
    let binary = Signature::new(vec![Shape::Number, Shape::String], Shape::Boolean);
    let evolver = ShapeEvolver::new().transform("a", binary);
    assert_eq!(evolve(&shape, &evolver), Shape::Never);
    assert_eq!(
        evolve_checked(&shape, &evolver).unwrap_err().to_string(),
        "cannot evolve `a`: transformer must take one parameter, it takes 2"
    );

    let nullary = ShapeEvolver::new().transform("a", Signature::new(vec![], Shape::Boolean));
    assert_eq!(evolve(&shape, &nullary), Shape::object([("a", Shape::Boolean)]));
}

#[test]
fn test_union_members_that_cannot_evolve_drop_out() {
    let shape = Shape::union([Shape::object([("a", Shape::Number)]), Shape::Null]);
    let evolver = ShapeEvolver::new().transform("a", Signature::unary(Shape::Number, Shape::Boolean));
    assert_eq!(
        evolve_checked(&shape, &evolver),
        Ok(Shape::object([("a", Shape::Boolean)]))
    );
    assert!(!is_evolvable(&shape));
}
