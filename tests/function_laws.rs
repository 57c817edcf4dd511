//! Property-based tests for the function combinators.
//!
//! - Round trip: `uncurryN(f.curry())` behaves like `f`
//! - Partial application commutes
//! - `swap` is an involution
//! - Composition is associative with `identity` as its unit

#![cfg(feature = "function")]

use combinate::function::{
    Function2, Function3, Function4, Function5, and_then, compose, identity, uncurry2, uncurry3,
    uncurry4, uncurry5,
};
use proptest::prelude::*;

fn mix2(a: i32, b: i32) -> i32 {
    a.wrapping_mul(31).wrapping_add(b)
}

fn mix3(a: i32, b: i32, c: i32) -> i32 {
    mix2(mix2(a, b), c)
}

fn mix4(a: i32, b: i32, c: i32, d: i32) -> i32 {
    mix2(mix3(a, b, c), d)
}

fn mix5(a: i32, b: i32, c: i32, d: i32, e: i32) -> i32 {
    mix2(mix4(a, b, c, d), e)
}

proptest! {
    // =========================================================================
    // Currying round trips
    // =========================================================================

    #[test]
    fn prop_uncurry2_curry_is_identity(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(uncurry2(mix2.curry())(a, b), mix2(a, b));
    }

    #[test]
    fn prop_uncurry3_curry_is_identity(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        prop_assert_eq!(uncurry3(mix3.curry())(a, b, c), mix3(a, b, c));
    }

    #[test]
    fn prop_uncurry4_curry_is_identity(
        a in any::<i32>(),
        b in any::<i32>(),
        c in any::<i32>(),
        d in any::<i32>(),
    ) {
        prop_assert_eq!(uncurry4(mix4.curry())(a, b, c, d), mix4(a, b, c, d));
    }

    #[test]
    fn prop_uncurry5_curry_is_identity(
        a in any::<i32>(),
        b in any::<i32>(),
        c in any::<i32>(),
        d in any::<i32>(),
        e in any::<i32>(),
    ) {
        prop_assert_eq!(uncurry5(mix5.curry())(a, b, c, d, e), mix5(a, b, c, d, e));
    }

    #[test]
    fn prop_curry_of_uncurry_is_identity(a in any::<i32>(), b in any::<i32>()) {
        let hand_curried = |x: i32| move |y: i32| mix2(x, y);
        let recurried = uncurry2(hand_curried).curry();
        prop_assert_eq!(recurried(a)(b), hand_curried(a)(b));
    }

    // =========================================================================
    // Partial application
    // =========================================================================

    #[test]
    fn prop_p_apply_commutes(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let first_then_second = mix3.p_apply1(a).p_apply1(b);
        let second_then_first = mix3.p_apply2(b).p_apply1(a);
        prop_assert_eq!(first_then_second(c), second_then_first(c));
        prop_assert_eq!(first_then_second(c), mix3(a, b, c));
    }

    #[test]
    fn prop_p_apply_last_matches_direct_call(
        a in any::<i32>(),
        b in any::<i32>(),
        c in any::<i32>(),
        d in any::<i32>(),
        e in any::<i32>(),
    ) {
        prop_assert_eq!(mix5.p_apply5(e)(a, b, c, d), mix5(a, b, c, d, e));
        prop_assert_eq!(mix4.p_apply2(b).p_apply3(d)(a, c), mix4(a, b, c, d));
    }

    // =========================================================================
    // swap
    // =========================================================================

    #[test]
    fn prop_swap_is_involution(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(mix2.swap().swap()(a, b), mix2(a, b));
        prop_assert_eq!(mix2.swap()(a, b), mix2(b, a));
    }

    // =========================================================================
    // Composition
    // =========================================================================

    #[test]
    fn prop_compose_is_associative(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_add(7);
        let g = |n: i32| n.wrapping_mul(3);
        let h = |n: i32| n ^ 0x55;

        let left = compose(compose(f, g), h);
        let right = compose(f, compose(g, h));
        prop_assert_eq!(left(x), right(x));
    }

    #[test]
    fn prop_identity_is_unit(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_sub(11);
        prop_assert_eq!(compose(identity, f)(x), f(x));
        prop_assert_eq!(compose(f, identity)(x), f(x));
        prop_assert_eq!(and_then(identity, f)(x), f(x));
    }

    #[test]
    fn prop_and_then_is_flipped_compose(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_add(1);
        let g = |n: i32| n.wrapping_mul(5);
        prop_assert_eq!(and_then(f, g)(x), compose(g, f)(x));
    }
}
