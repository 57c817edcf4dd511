//! Semigroup type class - an associative binary operation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use combinate::typeclass::Semigroup;
//! use combinate::validated::NonEmptyVec;
//!
//! let errors = NonEmptyVec::new("a").combine(NonEmptyVec::from_parts("b", vec!["c"]));
//! assert_eq!(errors, vec!["a", "b", "c"]);
//! ```

use crate::maybe::Maybe;
use crate::validated::{NonEmptyVec, Validated};

/// A type with an associative `combine` operation.
pub trait Semigroup {
    /// Combines two values into one.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two borrowed values, cloning both.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces every element with `combine`; `Nothing` when empty.
    ///
    /// ```rust
    /// use combinate::maybe::{Maybe, some};
    /// use combinate::typeclass::Semigroup;
    ///
    /// let words = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::reduce_all(words), some(String::from("ab")));
    /// assert_eq!(String::reduce_all(Vec::new()), Maybe::Nothing);
    /// ```
    fn reduce_all<I>(items: I) -> Maybe<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        items
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
            .into()
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.append(other);
        self
    }
}

/// `Nothing` is the identity; two values are combined.
impl<T: Semigroup> Semigroup for Maybe<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Just(left), Self::Just(right)) => Self::Just(left.combine(right)),
            (Self::Just(value), Self::Nothing) | (Self::Nothing, Self::Just(value)) => {
                Self::Just(value)
            }
            (Self::Nothing, Self::Nothing) => Self::Nothing,
        }
    }
}

/// Valid values are combined; any errors are accumulated.
impl<E, A: Semigroup> Semigroup for Validated<E, A> {
    fn combine(self, other: Self) -> Self {
        self.map2(other, Semigroup::combine)
    }
}
