//! Monad type class - sequencing dependent computations.
//!
//! `Maybe` and `Either` are monads. `Validated` is not: a bind has to stop at
//! the first failure, which would defeat error accumulation.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use combinate::prelude::*;
//!
//! fn parse_positive(input: &str) -> Maybe<i32> {
//!     input.parse::<i32>().ok().to_maybe().filter(|n| *n > 0)
//! }
//!
//! let result = some("42").and_then(parse_positive).then(some("done"));
//! assert_eq!(result, some("done"));
//! ```

use super::applicative::Applicative;
use crate::either::Either;
use crate::maybe::Maybe;

/// An applicative whose next step may depend on the previous value.
pub trait Monad: Applicative {
    /// Binds the held value to a function returning a new container.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first value.
    ///
    /// A failure in `self` propagates and `next` is dropped.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        Self::flat_map(self, function)
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        Self::flat_map(self, function)
    }
}
