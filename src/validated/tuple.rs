//! Combining tuples of `Validated` values.
//!
//! `(first, second).map_n(f)` behaves like [`Validated::map2`]: every invalid
//! element contributes its errors, in tuple order.
//!
//! ```rust
//! use combinate::validated::{Validated, ValidatedTuple3, invalid, valid};
//!
//! let result: Validated<&str, i32> =
//!     (valid(1), invalid("b"), invalid("c")).map_n(|a, b: i32, c: i32| a + b + c);
//! assert_eq!(result.get_invalid(), vec!["b", "c"]);
//! ```

use super::Validated;

/// Tuple combinator for two `Validated` values.
pub trait ValidatedTuple2<E, A, B> {
    /// Applies `function` if both values are valid, else accumulates errors.
    fn map_n<Z, F>(self, function: F) -> Validated<E, Z>
    where
        F: FnOnce(A, B) -> Z;
}

impl<E, A, B> ValidatedTuple2<E, A, B> for (Validated<E, A>, Validated<E, B>) {
    fn map_n<Z, F>(self, function: F) -> Validated<E, Z>
    where
        F: FnOnce(A, B) -> Z,
    {
        let (first, second) = self;
        first.map2(second, function)
    }
}

/// Tuple combinator for three `Validated` values.
pub trait ValidatedTuple3<E, A, B, C> {
    /// Applies `function` if all values are valid, else accumulates errors.
    fn map_n<Z, F>(self, function: F) -> Validated<E, Z>
    where
        F: FnOnce(A, B, C) -> Z;
}

impl<E, A, B, C> ValidatedTuple3<E, A, B, C>
    for (Validated<E, A>, Validated<E, B>, Validated<E, C>)
{
    fn map_n<Z, F>(self, function: F) -> Validated<E, Z>
    where
        F: FnOnce(A, B, C) -> Z,
    {
        let (first, second, third) = self;
        first.map3(second, third, function)
    }
}

/// Tuple combinator for four `Validated` values.
pub trait ValidatedTuple4<E, A, B, C, D> {
    /// Applies `function` if all values are valid, else accumulates errors.
    fn map_n<Z, F>(self, function: F) -> Validated<E, Z>
    where
        F: FnOnce(A, B, C, D) -> Z;
}

impl<E, A, B, C, D> ValidatedTuple4<E, A, B, C, D>
    for (
        Validated<E, A>,
        Validated<E, B>,
        Validated<E, C>,
        Validated<E, D>,
    )
{
    fn map_n<Z, F>(self, function: F) -> Validated<E, Z>
    where
        F: FnOnce(A, B, C, D) -> Z,
    {
        let (first, second, third, fourth) = self;
        first.map4(second, third, fourth, function)
    }
}
