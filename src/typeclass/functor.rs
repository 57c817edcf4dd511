//! Functor type class - mapping over a container's value.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use combinate::prelude::*;
//!
//! let doubled = Functor::fmap(some(21), |x| x * 2);
//! assert_eq!(doubled, some(42));
//!
//! let failed: Either<String, i32> = Either::left("bad".to_string());
//! assert_eq!(Functor::fmap(failed.clone(), |x| x * 2), failed);
//! ```

use super::higher::TypeConstructor;
use crate::either::Either;
use crate::maybe::Maybe;
use crate::validated::Validated;

/// A container whose value can be transformed without changing its shape.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the held value.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference to the held value.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the held value with `value`, keeping the shape.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the held value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(error) => Either::Left(error.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

// =============================================================================
// Validated<E, A> Implementation
// =============================================================================

impl<E: Clone, A> Functor for Validated<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Validated<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Validated<E, B>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Self::Valid(value) => Validated::Valid(function(value)),
            Self::Invalid(errors) => Validated::Invalid(errors.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn maybe_fmap_ref_keeps_original() {
        let original = Maybe::some("text".to_string());
        let length = original.fmap_ref(String::len);
        assert_eq!(length, Maybe::some(4));
        assert_eq!(original, Maybe::some("text".to_string()));
    }

    #[rstest]
    fn either_replace_keeps_left() {
        let failed: Either<&str, i32> = Either::Left("e");
        assert_eq!(failed.replace("x"), Either::Left("e"));
        assert_eq!(Either::<&str, i32>::Right(1).replace("x"), Either::Right("x"));
    }

    #[rstest]
    fn validated_void_discards_value() {
        let value: Validated<String, i32> = Validated::valid(3);
        assert_eq!(value.void(), Validated::valid(()));
    }
}
