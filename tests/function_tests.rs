//! Tests for currying, partial application and composition.
//!
//! Functions of arity 2 to 5 are exercised through their extension traits;
//! the free functions `uncurryN`, `compose`, `and_then` and `identity` are
//! checked against the direct call.

#![cfg(feature = "function")]

use combinate::function::{
    Curried3, Function1, Function2, Function3, Function4, Function5, and_then, compose, identity,
    uncurry2, uncurry3, uncurry4, uncurry5,
};
use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;

fn subtract(a: i32, b: i32) -> i32 {
    a - b
}

fn affine(scale: i32, value: i32, offset: i32) -> i32 {
    scale * value + offset
}

fn digits4(a: u8, b: u8, c: u8, d: u8) -> u32 {
    [a, b, c, d].iter().fold(0, |acc, &digit| acc * 10 + u32::from(digit))
}

fn digits5(a: u8, b: u8, c: u8, d: u8, e: u8) -> u32 {
    [a, b, c, d, e].iter().fold(0, |acc, &digit| acc * 10 + u32::from(digit))
}

// =============================================================================
// curry / uncurry
// =============================================================================

#[rstest]
#[case(10, 3)]
#[case(-4, 9)]
#[case(0, 0)]
fn curry2_matches_direct_call(#[case] a: i32, #[case] b: i32) {
    let curried = subtract.curry();
    assert_eq!(curried(a)(b), subtract(a, b));
    assert_eq!(uncurry2(subtract.curry())(a, b), subtract(a, b));
}

#[rstest]
fn curry3_through_uncurry3() {
    let curried: Curried3<i32, i32, i32, i32> = affine.curry();
    assert_eq!(curried(2)(5)(1), 11);
    assert_eq!(uncurry3(curried)(3, 4, -2), affine(3, 4, -2));
}

#[rstest]
fn curry4_and_curry5_keep_argument_order() {
    assert_eq!(digits4.curry()(1)(2)(3)(4), 1234);
    assert_eq!(uncurry4(digits4.curry())(4, 3, 2, 1), 4321);
    assert_eq!(digits5.curry()(1)(2)(3)(4)(5), 12345);
    assert_eq!(uncurry5(digits5.curry())(9, 0, 0, 0, 1), 90001);
}

#[rstest]
fn uncurry_accepts_hand_written_chains() {
    let curried = |a: i32| move |b: i32| move |c: i32| a * 100 + b * 10 + c;
    assert_eq!(uncurry3(curried)(1, 2, 3), 123);
}

#[rstest]
fn curried_prefix_is_reusable() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let tracked = move |a: u8, b: u8, c: u8, d: u8| {
        counter.set(counter.get() + 1);
        digits4(a, b, c, d)
    };

    let prefix = tracked.curry()(7)(7);
    assert_eq!(prefix(0)(1), 7701);
    assert_eq!(prefix(9)(9), 7799);
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn curry_does_not_call_until_saturated() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let tracked = move |a: i32, b: i32, c: i32| {
        counter.set(counter.get() + 1);
        a + b + c
    };

    let waiting = tracked.curry()(1)(2);
    assert_eq!(calls.get(), 0);
    assert_eq!(waiting(3), 6);
    assert_eq!(calls.get(), 1);
}

// =============================================================================
// Partial application
// =============================================================================

#[rstest]
fn p_apply_binary() {
    assert_eq!(subtract.p_apply1(10)(3), 7);
    assert_eq!(subtract.p_apply2(10)(3), -7);
}

#[rstest]
fn p_apply_ternary_at_every_position() {
    assert_eq!(affine.p_apply1(2)(5, 1), 11);
    assert_eq!(affine.p_apply2(2)(5, 1), 11);
    assert_eq!(affine.p_apply3(2)(5, 1), 7);
}

#[rstest]
fn p_apply_quinary_at_every_position() {
    assert_eq!(digits5.p_apply1(0)(1, 2, 3, 4), 1234);
    assert_eq!(digits5.p_apply2(0)(1, 2, 3, 4), 10234);
    assert_eq!(digits5.p_apply3(0)(1, 2, 3, 4), 12034);
    assert_eq!(digits5.p_apply4(0)(1, 2, 3, 4), 12304);
    assert_eq!(digits5.p_apply5(0)(1, 2, 3, 4), 12340);
}

#[rstest]
fn chained_partial_application_is_order_independent() {
    let forwards = digits4.p_apply1(1).p_apply1(2).p_apply1(3);
    let backwards = digits4.p_apply4(4).p_apply3(3).p_apply2(2);
    let mixed = digits4.p_apply3(3).p_apply1(1).p_apply2(4);

    assert_eq!(forwards(4), 1234);
    assert_eq!(backwards(1), 1234);
    assert_eq!(mixed(2), 1234);
}

#[rstest]
fn partial_application_clones_owned_arguments() {
    let greet = |greeting: String, name: &str| format!("{greeting}, {name}!");
    let hello = greet.p_apply1("Hello".to_string());
    assert_eq!(hello("Ada"), "Hello, Ada!");
    assert_eq!(hello("Grace"), "Hello, Grace!");
}

// =============================================================================
// swap
// =============================================================================

#[rstest]
#[case(10, 3)]
#[case(3, 10)]
fn swap_exchanges_arguments(#[case] a: i32, #[case] b: i32) {
    assert_eq!(subtract.swap()(a, b), subtract(b, a));
}

#[rstest]
fn swap_then_p_apply1_fixes_original_second() {
    let minus_three = subtract.swap().p_apply1(3);
    assert_eq!(minus_three(10), 7);
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
fn compose_free_and_method_agree() {
    let add_one = |x: i32| x + 1;
    let square = |x: i32| x * x;

    assert_eq!(compose(add_one, square)(3), 10);
    assert_eq!(add_one.compose(square)(3), 10);
    assert_eq!(and_then(add_one, square)(3), 16);
    assert_eq!(add_one.and_then(square)(3), 16);
}

#[rstest]
fn composition_changes_types() {
    let describe = and_then(|n: u32| n.count_ones(), |ones: u32| format!("{ones} bits"));
    assert_eq!(describe(0b1011), "3 bits");

    let parse_then_double = (|text: &str| text.len()).and_then(|len: usize| len * 2);
    assert_eq!(parse_then_double("four"), 8);
}

#[rstest]
fn identity_in_composition() {
    let negate = |x: i32| -x;
    assert_eq!(compose(identity, negate)(4), -4);
    assert_eq!(and_then(negate, identity)(4), -4);
    assert_eq!(identity(String::from("same")), "same");
}

#[rstest]
fn partial_application_composes() {
    let pipeline = subtract.p_apply2(1).and_then(affine.p_apply1(2).p_apply2(100));
    assert_eq!(pipeline(6), 110);
}
