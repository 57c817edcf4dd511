#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! Containers serialize as externally tagged enums, so the variant name is
//! part of the JSON.

use combinate::either::Either;
use combinate::maybe::{Maybe, none, some};
use combinate::validated::{NonEmptyVec, Validated, invalid, valid};
use rstest::rstest;

// =============================================================================
// Maybe
// =============================================================================

#[rstest]
#[case(some(7), r#"{"Just":7}"#)]
#[case(none(), r#""Nothing""#)]
fn test_maybe_json_shape(#[case] value: Maybe<i32>, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&value).unwrap(), expected);
    let restored: Maybe<i32> = serde_json::from_str(expected).unwrap();
    assert_eq!(restored, value);
}

#[rstest]
fn test_maybe_nested_roundtrip() {
    let nested: Maybe<Vec<Maybe<String>>> = some(vec![some("a".to_string()), none()]);
    let json = serde_json::to_string(&nested).unwrap();
    let restored: Maybe<Vec<Maybe<String>>> = serde_json::from_str(&json).unwrap();
    assert_eq!(nested, restored);
}

// =============================================================================
// Either
// =============================================================================

#[rstest]
fn test_either_json_roundtrip() {
    let left: Either<String, i32> = Either::Left("error".to_string());
    let right: Either<String, i32> = Either::Right(42);

    let left_json = serde_json::to_string(&left).unwrap();
    let right_json = serde_json::to_string(&right).unwrap();
    assert_eq!(left_json, r#"{"Left":"error"}"#);
    assert_eq!(right_json, r#"{"Right":42}"#);

    let restored_left: Either<String, i32> = serde_json::from_str(&left_json).unwrap();
    let restored_right: Either<String, i32> = serde_json::from_str(&right_json).unwrap();

    assert_eq!(left, restored_left);
    assert_eq!(right, restored_right);
}

// =============================================================================
// Validated and NonEmptyVec
// =============================================================================

#[rstest]
fn test_non_empty_vec_json_shape() {
    let values = NonEmptyVec::from_parts(1, vec![2, 3]);
    let json = serde_json::to_string(&values).unwrap();
    assert_eq!(json, r#"{"head":1,"tail":[2,3]}"#);

    let restored: NonEmptyVec<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, values);
}

#[rstest]
fn test_non_empty_vec_requires_head() {
    let result: Result<NonEmptyVec<i32>, _> = serde_json::from_str(r#"{"tail":[1]}"#);
    assert!(result.is_err());
}

#[rstest]
fn test_validated_json_roundtrip() {
    let ok: Validated<String, u32> = valid(5);
    let failed: Validated<String, u32> =
        invalid::<String, u32>("first".to_string()).product(invalid("second".to_string())).map(|(a, _): (u32, u32)| a);

    for value in [ok, failed] {
        let json = serde_json::to_string(&value).unwrap();
        let restored: Validated<String, u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, value);
    }
}

#[rstest]
fn test_validated_invalid_keeps_error_order() {
    let failed: Validated<&str, u32> = Validated::invalid_all(NonEmptyVec::from_parts("b", vec!["a"]));
    let json = serde_json::to_string(&failed).unwrap();
    assert_eq!(json, r#"{"Invalid":{"head":"b","tail":["a"]}}"#);
}
