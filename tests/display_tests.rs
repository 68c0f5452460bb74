//! Integration tests for Display and Debug implementations.

#![cfg(feature = "control")]

use fpkit::control::{Either, Maybe, NothingError};

#[test]
fn test_either_left_display() {
    let left: Either<i32, String> = Either::Left(42);
    assert_eq!(format!("{left}"), "Left(42)");
}

#[test]
fn test_either_right_display() {
    let right: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(format!("{right}"), "Right(hello)");
}

#[test]
fn test_either_debug_quotes_strings() {
    let right: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(format!("{right:?}"), "Right(\"hello\")");
}

#[test]
fn test_maybe_just_display() {
    assert_eq!(format!("{}", Maybe::Just(1.5)), "Just(1.5)");
}

#[test]
fn test_maybe_nothing_display() {
    assert_eq!(format!("{}", Maybe::<i32>::Nothing), "Nothing");
}

#[test]
fn test_maybe_debug() {
    assert_eq!(format!("{:?}", Maybe::Just("a")), "Just(\"a\")");
    assert_eq!(format!("{:?}", Maybe::<&str>::Nothing), "Nothing");
}

#[test]
fn test_nested_display() {
    let nested: Either<String, Maybe<i32>> = Either::Right(Maybe::Just(3));
    assert_eq!(nested.to_string(), "Right(Just(3))");
}

#[test]
fn test_nothing_error_display() {
    assert_eq!(NothingError.to_string(), "expected a value but found Nothing");
}
