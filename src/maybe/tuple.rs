//! Combining tuples of `Maybe` values.
//!
//! `(first, second).map_n(f)` is the tuple form of [`Maybe::lift2`], and
//! `flat_map_n` binds every element before calling a function that may itself
//! return `Nothing`.
//!
//! ```rust
//! use combinate::maybe::{MaybeTuple2, none, some};
//!
//! assert_eq!((some(2), some(3)).map_n(|a, b| a * b), some(6));
//! assert_eq!((some(2), none::<i32>()).map_n(|a, b| a * b), none());
//! ```

use super::Maybe;

/// Tuple combinators for two `Maybe` values.
pub trait MaybeTuple2<A, B> {
    /// Applies `function` if both values are present.
    fn map_n<Z, F>(self, function: F) -> Maybe<Z>
    where
        F: FnOnce(A, B) -> Z;

    /// Binds both values, then continues with `function`.
    fn flat_map_n<Z, F>(self, function: F) -> Maybe<Z>
    where
        F: FnOnce(A, B) -> Maybe<Z>;
}

impl<A, B> MaybeTuple2<A, B> for (Maybe<A>, Maybe<B>) {
    fn map_n<Z, F>(self, function: F) -> Maybe<Z>
    where
        F: FnOnce(A, B) -> Z,
    {
        self.flat_map_n(|a, b| Maybe::Just(function(a, b)))
    }

    fn flat_map_n<Z, F>(self, function: F) -> Maybe<Z>
    where
        F: FnOnce(A, B) -> Maybe<Z>,
    {
        let (first, second) = self;
        first.flat_map(|a| second.flat_map(|b| function(a, b)))
    }
}

/// Tuple combinators for three `Maybe` values.
pub trait MaybeTuple3<A, B, C> {
    /// Applies `function` if all values are present.
    fn map_n<Z, F>(self, function: F) -> Maybe<Z>
    where
        F: FnOnce(A, B, C) -> Z;

    /// Binds all values, then continues with `function`.
    fn flat_map_n<Z, F>(self, function: F) -> Maybe<Z>
    where
        F: FnOnce(A, B, C) -> Maybe<Z>;
}

impl<A, B, C> MaybeTuple3<A, B, C> for (Maybe<A>, Maybe<B>, Maybe<C>) {
    fn map_n<Z, F>(self, function: F) -> Maybe<Z>
    where
        F: FnOnce(A, B, C) -> Z,
    {
        self.flat_map_n(|a, b, c| Maybe::Just(function(a, b, c)))
    }

    fn flat_map_n<Z, F>(self, function: F) -> Maybe<Z>
    where
        F: FnOnce(A, B, C) -> Maybe<Z>,
    {
        let (first, second, third) = self;
        first.flat_map(|a| second.flat_map(|b| third.flat_map(|c| function(a, b, c))))
    }
}

/// Tuple combinators for four `Maybe` values.
pub trait MaybeTuple4<A, B, C, D> {
    /// Applies `function` if all values are present.
    fn map_n<Z, F>(self, function: F) -> Maybe<Z>
    where
        F: FnOnce(A, B, C, D) -> Z;

    /// Binds all values, then continues with `function`.
    fn flat_map_n<Z, F>(self, function: F) -> Maybe<Z>
    where
        F: FnOnce(A, B, C, D) -> Maybe<Z>;
}

impl<A, B, C, D> MaybeTuple4<A, B, C, D> for (Maybe<A>, Maybe<B>, Maybe<C>, Maybe<D>) {
    fn map_n<Z, F>(self, function: F) -> Maybe<Z>
    where
        F: FnOnce(A, B, C, D) -> Z,
    {
        self.flat_map_n(|a, b, c, d| Maybe::Just(function(a, b, c, d)))
    }

    fn flat_map_n<Z, F>(self, function: F) -> Maybe<Z>
    where
        F: FnOnce(A, B, C, D) -> Maybe<Z>,
    {
        let (first, second, third, fourth) = self;
        first.flat_map(|a| {
            second.flat_map(|b| third.flat_map(|c| fourth.flat_map(|d| function(a, b, c, d))))
        })
    }
}
