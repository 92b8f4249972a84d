#![cfg(all(feature = "serde", feature = "facade"))]

//! Integration tests for serde support on the owned containers.

use lambars_trans::control::Either;
use lambars_trans::facade::stack_option;
use lambars_trans::persistent::PersistentStack;
use rstest::rstest;

#[rstest]
fn either_uses_externally_tagged_variants() {
    let left: Either<String, i32> = Either::Left("error".to_string());
    let right: Either<String, i32> = Either::Right(42);

    assert_eq!(serde_json::to_string(&left).unwrap(), r#"{"Left":"error"}"#);
    assert_eq!(serde_json::to_string(&right).unwrap(), r#"{"Right":42}"#);

    let restored: Either<String, i32> = serde_json::from_str(r#"{"Right":42}"#).unwrap();
    assert_eq!(restored, right);
}

#[rstest]
fn stack_serializes_top_first() {
    let stack = PersistentStack::new().push(3).push(2).push(1);
    assert_eq!(serde_json::to_string(&stack).unwrap(), "[1,2,3]");

    let restored: PersistentStack<i32> = serde_json::from_str("[1,2,3]").unwrap();
    assert_eq!(restored.peek(), Some(&1));
    assert_eq!(restored, stack);
}

#[rstest]
fn deserialized_nested_value_feeds_the_facade() {
    let nested: PersistentStack<Option<i32>> = serde_json::from_str("[1,null,3]").unwrap();
    let doubled = stack_option::map_t(nested, |value| value * 2);
    assert_eq!(serde_json::to_string(&doubled).unwrap(), "[2,null,6]");
}

#[rstest]
fn malformed_stack_input_is_rejected() {
    let result: Result<PersistentStack<i32>, _> = serde_json::from_str(r#"{"top":1}"#);
    assert!(result.is_err());
}
