//! Applicative type class - combining independent values in a context.
//!
//! `Applicative` extends `Functor` with `pure` and `map2`. The three
//! containers differ in how failures combine:
//!
//! - `Maybe`: any `Nothing` gives `Nothing`.
//! - `Either`: the first `Left`, scanning left to right, wins.
//! - `Validated`: the errors of every `Invalid` operand are concatenated.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use combinate::prelude::*;
//!
//! let value: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(value, some(42));
//!
//! let first: Validated<&str, i32> = invalid("a");
//! let second: Validated<&str, i32> = invalid("b");
//! let both = Applicative::map2(first, second, |x, y| x + y);
//! assert_eq!(both.get_invalid(), vec!["a", "b"]);
//! ```

use super::functor::Functor;
use crate::either::Either;
use crate::maybe::Maybe;
use crate::validated::Validated;

/// A functor that can lift plain values and combine independent contexts.
pub trait Applicative: Functor {
    /// Lifts a plain value into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two values with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three values with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs two values.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Combines two values and keeps the left one.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Combines two values and keeps the right one.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies the function held by `self` to the value held by `other`.
    ///
    /// The receiver is the function. `Validated::apply` takes the value as
    /// its receiver instead, so for two `Invalid` operands this method
    /// reports the function's errors first and the inherent one reports the
    /// value's errors first.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Just(a), Maybe::Just(b)) => Maybe::Just(function(a, b)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Just(a), Maybe::Just(b), Maybe::Just(c)) => Maybe::Just(function(a, b, c)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        Either::map2(self, other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Either<L, B>,
        third: Either<L, C>,
        function: F,
    ) -> Either<L, D>
    where
        F: FnOnce(R, B, C) -> D,
    {
        Either::map3(self, second, third, function)
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
    where
        R: FnOnce(B) -> Output,
    {
        Either::map2(self, other, |function, b| function(b))
    }
}

// =============================================================================
// Validated<E, A> Implementation
// =============================================================================

impl<E: Clone, A> Applicative for Validated<E, A> {
    #[inline]
    fn pure<B>(value: B) -> Validated<E, B> {
        Validated::Valid(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Validated<E, B>, function: F) -> Validated<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        Validated::map2(self, other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Validated<E, B>,
        third: Validated<E, C>,
        function: F,
    ) -> Validated<E, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Validated::map3(self, second, third, function)
    }

    /// Function errors come before value errors.
    #[inline]
    fn apply<B, Output>(self, other: Validated<E, B>) -> Validated<E, Output>
    where
        A: FnOnce(B) -> Output,
    {
        Validated::map2(self, other, |function, b| function(b))
    }
}
