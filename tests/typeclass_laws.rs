//! Property-based tests for the type class instances.
//!
//! Every call goes through the trait so that the instances, not the
//! inherent methods, are under test.
//!
//! - Functor: identity and composition
//! - Applicative: identity and homomorphism
//! - Monad: left identity, right identity, associativity
//! - Semigroup: associativity

#![cfg(feature = "typeclass")]

use combinate::either::Either;
use combinate::maybe::Maybe;
use combinate::typeclass::{Applicative, Functor, Monad, Semigroup};
use combinate::validated::{NonEmptyVec, Validated};
use proptest::prelude::*;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop::result::maybe_ok(any::<i32>(), "[a-z]{0,4}").prop_map(Either::from)
}

fn validated_strategy() -> impl Strategy<Value = Validated<String, i32>> {
    prop_oneof![
        any::<i32>().prop_map(Validated::Valid),
        ("[a-z]{1,3}", prop::collection::vec("[a-z]{1,3}", 0..3))
            .prop_map(|(head, tail)| Validated::invalid_all(NonEmptyVec::from_parts(head, tail))),
    ]
}

fn increment(value: i32) -> i32 {
    value.wrapping_add(1)
}

fn triple(value: i32) -> i32 {
    value.wrapping_mul(3)
}

fn half_if_even(value: i32) -> Maybe<i32> {
    if value % 2 == 0 { Maybe::Just(value / 2) } else { Maybe::Nothing }
}

fn below_limit(value: i32) -> Maybe<i32> {
    if value < 1_000 { Maybe::Just(value) } else { Maybe::Nothing }
}

fn checked_square(value: i32) -> Either<String, i32> {
    value
        .checked_mul(value)
        .map_or_else(|| Either::Left(format!("{value} squared overflows")), Either::Right)
}

fn positive(value: i32) -> Either<String, i32> {
    if value > 0 { Either::Right(value) } else { Either::Left("not positive".to_string()) }
}

proptest! {
    // =========================================================================
    // Functor
    // =========================================================================

    #[test]
    fn prop_functor_identity(
        maybe in maybe_strategy(),
        either in either_strategy(),
        validated in validated_strategy(),
    ) {
        prop_assert_eq!(Functor::fmap(maybe.clone(), |x| x), maybe);
        prop_assert_eq!(Functor::fmap(either.clone(), |x| x), either);
        prop_assert_eq!(Functor::fmap(validated.clone(), |x| x), validated);
    }

    #[test]
    fn prop_functor_composition(
        maybe in maybe_strategy(),
        either in either_strategy(),
        validated in validated_strategy(),
    ) {
        prop_assert_eq!(
            Functor::fmap(Functor::fmap(maybe.clone(), increment), triple),
            Functor::fmap(maybe, |x| triple(increment(x)))
        );
        prop_assert_eq!(
            Functor::fmap(Functor::fmap(either.clone(), increment), triple),
            Functor::fmap(either, |x| triple(increment(x)))
        );
        prop_assert_eq!(
            Functor::fmap(Functor::fmap(validated.clone(), increment), triple),
            Functor::fmap(validated, |x| triple(increment(x)))
        );
    }

    #[test]
    fn prop_fmap_ref_agrees_with_fmap(maybe in maybe_strategy(), validated in validated_strategy()) {
        prop_assert_eq!(maybe.fmap_ref(|x| increment(*x)), Functor::fmap(maybe, increment));
        prop_assert_eq!(validated.fmap_ref(|x| increment(*x)), Functor::fmap(validated, increment));
    }

    // =========================================================================
    // Applicative
    // =========================================================================

    #[test]
    fn prop_applicative_identity(
        maybe in maybe_strategy(),
        either in either_strategy(),
        validated in validated_strategy(),
    ) {
        let id = (|x| x) as fn(i32) -> i32;

        let maybe_id: Maybe<fn(i32) -> i32> = <Maybe<i32> as Applicative>::pure(id);
        prop_assert_eq!(Applicative::apply(maybe_id, maybe.clone()), maybe);

        let either_id: Either<String, fn(i32) -> i32> = <Either<String, i32> as Applicative>::pure(id);
        prop_assert_eq!(Applicative::apply(either_id, either.clone()), either);

        let validated_id: Validated<String, fn(i32) -> i32> =
            <Validated<String, i32> as Applicative>::pure(id);
        prop_assert_eq!(Applicative::apply(validated_id, validated.clone()), validated);
    }

    #[test]
    fn prop_applicative_homomorphism(value in any::<i32>()) {
        let function = triple as fn(i32) -> i32;

        let applied: Maybe<i32> = Applicative::apply(
            <Maybe<i32> as Applicative>::pure(function),
            <Maybe<i32> as Applicative>::pure(value),
        );
        prop_assert_eq!(applied, Maybe::Just(triple(value)));

        let applied: Validated<String, i32> = Applicative::apply(
            <Validated<String, i32> as Applicative>::pure(function),
            <Validated<String, i32> as Applicative>::pure(value),
        );
        prop_assert_eq!(applied, Validated::Valid(triple(value)));
    }

    #[test]
    fn prop_product_sides_agree_with_map2(first in validated_strategy(), second in validated_strategy()) {
        prop_assert_eq!(
            Applicative::product_left(first.clone(), second.clone()),
            Applicative::map2(first.clone(), second.clone(), |a, _| a)
        );
        prop_assert_eq!(
            Applicative::product_right(first.clone(), second.clone()),
            Applicative::map2(first, second, |_, b| b)
        );
    }

    // =========================================================================
    // Monad
    // =========================================================================

    #[test]
    fn prop_monad_left_identity(value in any::<i32>()) {
        prop_assert_eq!(
            Monad::flat_map(<Maybe<i32> as Applicative>::pure(value), half_if_even),
            half_if_even(value)
        );
        prop_assert_eq!(
            Monad::flat_map(<Either<String, i32> as Applicative>::pure(value), checked_square),
            checked_square(value)
        );
    }

    #[test]
    fn prop_monad_right_identity(maybe in maybe_strategy(), either in either_strategy()) {
        prop_assert_eq!(Monad::flat_map(maybe.clone(), Maybe::Just), maybe);
        prop_assert_eq!(Monad::flat_map(either.clone(), Either::Right), either);
    }

    #[test]
    fn prop_monad_associativity(maybe in maybe_strategy(), either in either_strategy()) {
        prop_assert_eq!(
            Monad::flat_map(Monad::flat_map(maybe.clone(), half_if_even), below_limit),
            Monad::flat_map(maybe, |x| Monad::flat_map(half_if_even(x), below_limit))
        );
        prop_assert_eq!(
            Monad::flat_map(Monad::flat_map(either.clone(), checked_square), positive),
            Monad::flat_map(either, |x| Monad::flat_map(checked_square(x), positive))
        );
    }

    // =========================================================================
    // Semigroup
    // =========================================================================

    #[test]
    fn prop_string_semigroup_associativity(a in ".{0,5}", b in ".{0,5}", c in ".{0,5}") {
        prop_assert_eq!(
            a.clone().combine(b.clone()).combine(c.clone()),
            a.combine(b.combine(c))
        );
    }

    #[test]
    fn prop_maybe_semigroup_associativity(
        a in any::<Option<Vec<u8>>>(),
        b in any::<Option<Vec<u8>>>(),
        c in any::<Option<Vec<u8>>>(),
    ) {
        let (a, b, c) = (Maybe::from(a), Maybe::from(b), Maybe::from(c));
        prop_assert_eq!(
            a.clone().combine(b.clone()).combine(c.clone()),
            a.combine(b.combine(c))
        );
    }

    #[test]
    fn prop_validated_semigroup_associativity(
        a in validated_strategy(),
        b in validated_strategy(),
        c in validated_strategy(),
    ) {
        let (a, b, c) = (
            a.map(|n| vec![n]),
            b.map(|n| vec![n]),
            c.map(|n| vec![n]),
        );
        prop_assert_eq!(
            a.combine_ref(&b).combine(c.clone()),
            a.combine(b.combine(c))
        );
    }

    #[test]
    fn prop_reduce_all_matches_fold(parts in prop::collection::vec("[a-z]{0,3}", 0..6)) {
        let expected = if parts.is_empty() { Maybe::Nothing } else { Maybe::Just(parts.concat()) };
        prop_assert_eq!(String::reduce_all(parts), expected);
    }
}
