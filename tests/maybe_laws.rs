//! Property-based tests for Maybe<A>.
//!
//! - **Identity Law**: `m.map(|x| x) == m`
//! - **Composition Law**: `m.map(f).map(g) == m.map(|x| g(f(x)))`
//! - **Associativity Law**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//! - **Left Identity Law**: `some(a).flat_map(f) == f(a)`
//! - **Right Identity Law**: `m.flat_map(some) == m`

use combinate::maybe::{Maybe, none, some};
use proptest::prelude::*;

fn maybe_i32() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn halve(value: i32) -> Maybe<i32> {
    if value % 2 == 0 { some(value / 2) } else { none() }
}

fn positive(value: i32) -> Maybe<i32> {
    if value > 0 { some(value) } else { none() }
}

proptest! {
    #[test]
    fn prop_maybe_identity_law(value in maybe_i32()) {
        prop_assert_eq!(value.map(|x| x), value);
    }

    #[test]
    fn prop_maybe_composition_law(value in maybe_i32()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_maybe_associativity_law(value in maybe_i32()) {
        let left = value.flat_map(halve).flat_map(positive);
        let right = value.flat_map(|x| halve(x).flat_map(positive));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_maybe_left_identity_law(value in any::<i32>()) {
        prop_assert_eq!(some(value).flat_map(halve), halve(value));
    }

    #[test]
    fn prop_maybe_right_identity_law(value in maybe_i32()) {
        prop_assert_eq!(value.flat_map(some), value);
    }

    /// Presence alone decides `get_or_else`.
    #[test]
    fn prop_get_or_else_prefers_present_value(value in any::<Option<i32>>(), default in any::<Option<i32>>()) {
        prop_assert_eq!(some(value).get_or_else(default), value);
    }

    #[test]
    fn prop_lift2_agrees_with_nested_flat_map(first in maybe_i32(), second in maybe_i32()) {
        let lifted = Maybe::lift2(i32::wrapping_sub);
        let nested = first.flat_map(|a| second.map(|b| a.wrapping_sub(b)));
        prop_assert_eq!(lifted(first, second), nested);
    }
}
