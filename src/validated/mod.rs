//! Validated type - success or an accumulated list of failures.
//!
//! `Validated<E, A>` is either `Valid(A)` or `Invalid(NonEmptyVec<E>)`.
//! Unlike [`Either`], combining several `Validated` values never stops at the
//! first failure: [`product`](Validated::product), the `map2`..`map4` family
//! and [`apply`](Validated::apply) concatenate the errors of every invalid
//! operand, left to right, duplicates retained.
//!
//! `Validated` is an applicative functor and deliberately not a monad. There
//! is no `flat_map`, because a bind must stop at the first failure and could
//! not accumulate.
//!
//! # Examples
//!
//! ```rust
//! use combinate::validated::Validated;
//!
//! fn name(input: &str) -> Validated<String, String> {
//!     if input.is_empty() {
//!         Validated::invalid("name is empty".to_string())
//!     } else {
//!         Validated::valid(input.to_string())
//!     }
//! }
//!
//! fn age(input: i32) -> Validated<String, u8> {
//!     u8::try_from(input).map_or_else(
//!         |_| Validated::invalid(format!("{input} is not an age")),
//!         Validated::valid,
//!     )
//! }
//!
//! let person = name("Ada").map2(age(36), |name, age| format!("{name} ({age})"));
//! assert_eq!(person, Validated::valid("Ada (36)".to_string()));
//!
//! let errors = name("").map2(age(-1), |name, age| format!("{name} ({age})"));
//! assert_eq!(
//!     errors.get_invalid(),
//!     vec!["name is empty".to_string(), "-1 is not an age".to_string()]
//! );
//! ```

mod non_empty;
mod tuple;

pub use non_empty::NonEmptyVec;
pub use tuple::{ValidatedTuple2, ValidatedTuple3, ValidatedTuple4};

use crate::either::Either;
use crate::error::InvalidAccessError;
use crate::maybe::Maybe;

/// A value that is either valid or carries one or more errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validated<E, A> {
    /// A successful value.
    Valid(A),
    /// The accumulated errors, never empty.
    Invalid(NonEmptyVec<E>),
}

impl<E, A> Validated<E, A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a valid value.
    #[inline]
    pub const fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid value with a single error.
    #[inline]
    pub const fn invalid(error: E) -> Self {
        Self::Invalid(NonEmptyVec::new(error))
    }

    /// Creates an invalid value from several errors.
    #[inline]
    pub const fn invalid_all(errors: NonEmptyVec<E>) -> Self {
        Self::Invalid(errors)
    }

    // =========================================================================
    // Inspection and Access
    // =========================================================================

    /// Returns `true` for `Valid`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` for `Invalid`.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Returns the valid value.
    ///
    /// # Panics
    ///
    /// Panics with the [`InvalidAccessError::NotValid`] message for `Invalid`.
    #[inline]
    pub fn get_valid(self) -> A {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(_) => panic!("{}", InvalidAccessError::NotValid),
        }
    }

    /// Returns the accumulated errors.
    ///
    /// # Panics
    ///
    /// Panics with the [`InvalidAccessError::NotInvalid`] message for `Valid`.
    #[inline]
    pub fn get_invalid(self) -> NonEmptyVec<E> {
        match self {
            Self::Valid(_) => panic!("{}", InvalidAccessError::NotInvalid),
            Self::Invalid(errors) => errors,
        }
    }

    /// Returns the valid value, or [`InvalidAccessError::NotValid`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAccessError::NotValid`] for `Invalid`.
    #[inline]
    pub fn try_valid(self) -> Result<A, InvalidAccessError> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(_) => Err(InvalidAccessError::NotValid),
        }
    }

    /// Returns the accumulated errors, or [`InvalidAccessError::NotInvalid`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAccessError::NotInvalid`] for `Valid`.
    #[inline]
    pub fn try_invalid(self) -> Result<NonEmptyVec<E>, InvalidAccessError> {
        match self {
            Self::Valid(_) => Err(InvalidAccessError::NotInvalid),
            Self::Invalid(errors) => Ok(errors),
        }
    }

    /// Returns the valid value, or `default`.
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(_) => default,
        }
    }

    /// Returns the valid value, or calls `supplier`.
    ///
    /// `supplier` is never called for `Valid`.
    #[inline]
    pub fn get_or_else_with<F>(self, supplier: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(_) => supplier(),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Eliminates the `Validated`. Exactly one of the two functions runs.
    #[inline]
    pub fn fold<B, I, V>(self, on_invalid: I, on_valid: V) -> B
    where
        I: FnOnce(NonEmptyVec<E>) -> B,
        V: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => on_valid(value),
            Self::Invalid(errors) => on_invalid(errors),
        }
    }

    /// Applies `function` to the valid value.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Validated<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validated::Valid(function(value)),
            Self::Invalid(errors) => Validated::Invalid(errors),
        }
    }

    /// Applies `function` to every accumulated error.
    #[inline]
    pub fn map_errors<F, G>(self, function: G) -> Validated<F, A>
    where
        G: FnMut(E) -> F,
    {
        match self {
            Self::Valid(value) => Validated::Valid(value),
            Self::Invalid(errors) => Validated::Invalid(errors.map(function)),
        }
    }

    // =========================================================================
    // Accumulation
    // =========================================================================

    /// Pairs two values, accumulating the errors of both.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinate::validated::Validated;
    ///
    /// let both: Validated<&str, (i32, i32)> =
    ///     Validated::invalid("e1").product(Validated::invalid("e2"));
    /// assert_eq!(both.get_invalid(), vec!["e1", "e2"]);
    ///
    /// let one: Validated<&str, (i32, i32)> =
    ///     Validated::valid(1).product(Validated::invalid("e"));
    /// assert_eq!(one.get_invalid(), vec!["e"]);
    /// ```
    #[inline]
    pub fn product<B>(self, other: Validated<E, B>) -> Validated<E, (A, B)> {
        match (self, other) {
            (Self::Valid(a), Validated::Valid(b)) => Validated::Valid((a, b)),
            (Self::Invalid(mut errors), Validated::Invalid(more)) => {
                errors.append(more);
                Validated::Invalid(errors)
            }
            (Self::Invalid(errors), Validated::Valid(_))
            | (Self::Valid(_), Validated::Invalid(errors)) => Validated::Invalid(errors),
        }
    }

    /// Triples three values, accumulating every operand's errors in order.
    #[inline]
    pub fn product3<B, C>(
        self,
        second: Validated<E, B>,
        third: Validated<E, C>,
    ) -> Validated<E, (A, B, C)> {
        self.product(second)
            .product(third)
            .map(|((a, b), c)| (a, b, c))
    }

    /// Combines four values, accumulating every operand's errors in order.
    #[inline]
    pub fn product4<B, C, D>(
        self,
        second: Validated<E, B>,
        third: Validated<E, C>,
        fourth: Validated<E, D>,
    ) -> Validated<E, (A, B, C, D)> {
        self.product3(second, third)
            .product(fourth)
            .map(|((a, b, c), d)| (a, b, c, d))
    }

    /// Combines two values with `function`, accumulating errors.
    #[inline]
    pub fn map2<B, Z, F>(self, other: Validated<E, B>, function: F) -> Validated<E, Z>
    where
        F: FnOnce(A, B) -> Z,
    {
        self.product(other).map(|(a, b)| function(a, b))
    }

    /// Combines three values with `function`, accumulating errors.
    #[inline]
    pub fn map3<B, C, Z, F>(
        self,
        second: Validated<E, B>,
        third: Validated<E, C>,
        function: F,
    ) -> Validated<E, Z>
    where
        F: FnOnce(A, B, C) -> Z,
    {
        self.product3(second, third)
            .map(|(a, b, c)| function(a, b, c))
    }

    /// Combines four values with `function`, accumulating errors.
    #[inline]
    pub fn map4<B, C, D, Z, F>(
        self,
        second: Validated<E, B>,
        third: Validated<E, C>,
        fourth: Validated<E, D>,
        function: F,
    ) -> Validated<E, Z>
    where
        F: FnOnce(A, B, C, D) -> Z,
    {
        self.product4(second, third, fourth)
            .map(|(a, b, c, d)| function(a, b, c, d))
    }

    /// Applies a validated function to this value.
    ///
    /// Errors of `self` come first, followed by the errors of `function`.
    /// `Applicative::apply` takes the function as its receiver and so
    /// reports the function's errors first.
    ///
    /// ```rust
    /// use combinate::validated::Validated;
    ///
    /// let value: Validated<&str, i32> = Validated::invalid("bad value");
    /// let function: Validated<&str, fn(i32) -> i32> = Validated::invalid("bad function");
    /// assert_eq!(value.apply(function).get_invalid(), vec!["bad value", "bad function"]);
    /// ```
    #[inline]
    pub fn apply<B, F>(self, function: Validated<E, F>) -> Validated<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.product(function).map(|(value, function)| function(value))
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Keeps the valid value and discards errors.
    #[inline]
    pub fn as_maybe(self) -> Maybe<A> {
        match self {
            Self::Valid(value) => Maybe::Just(value),
            Self::Invalid(_) => Maybe::Nothing,
        }
    }

    /// Converts into an `Either` carrying the full error sequence on the left.
    #[inline]
    pub fn as_either(self) -> Either<NonEmptyVec<E>, A> {
        match self {
            Self::Valid(value) => Either::Right(value),
            Self::Invalid(errors) => Either::Left(errors),
        }
    }
}

// =============================================================================
// Lifting
// =============================================================================

impl<E, Z> Validated<E, Z> {
    /// Lifts a unary function to operate on `Validated` values.
    #[inline]
    pub fn lift1<A, F>(function: F) -> impl Fn(Validated<E, A>) -> Self
    where
        F: Fn(A) -> Z,
    {
        move |first: Validated<E, A>| first.map(&function)
    }

    /// Lifts a binary function; errors of both arguments are accumulated.
    #[inline]
    pub fn lift2<A, B, F>(function: F) -> impl Fn(Validated<E, A>, Validated<E, B>) -> Self
    where
        F: Fn(A, B) -> Z,
    {
        move |first: Validated<E, A>, second: Validated<E, B>| first.map2(second, &function)
    }

    /// Lifts a ternary function; errors of all arguments are accumulated.
    #[inline]
    pub fn lift3<A, B, C, F>(
        function: F,
    ) -> impl Fn(Validated<E, A>, Validated<E, B>, Validated<E, C>) -> Self
    where
        F: Fn(A, B, C) -> Z,
    {
        move |first: Validated<E, A>, second: Validated<E, B>, third: Validated<E, C>| {
            first.map3(second, third, &function)
        }
    }

    /// Lifts a four-argument function; errors of all arguments are accumulated.
    #[inline]
    pub fn lift4<A, B, C, D, F>(
        function: F,
    ) -> impl Fn(Validated<E, A>, Validated<E, B>, Validated<E, C>, Validated<E, D>) -> Self
    where
        F: Fn(A, B, C, D) -> Z,
    {
        move |first: Validated<E, A>,
              second: Validated<E, B>,
              third: Validated<E, C>,
              fourth: Validated<E, D>| first.map4(second, third, fourth, &function)
    }
}

// =============================================================================
// Injection Helpers
// =============================================================================

/// Creates a valid value.
#[inline]
pub const fn valid<E, A>(value: A) -> Validated<E, A> {
    Validated::Valid(value)
}

/// Creates an invalid value with a single error.
#[inline]
pub const fn invalid<E, A>(error: E) -> Validated<E, A> {
    Validated::Invalid(NonEmptyVec::new(error))
}

/// Collects every value, or every error of every invalid element in order.
///
/// ```rust
/// use combinate::validated::Validated;
///
/// let all: Validated<&str, Vec<i32>> =
///     vec![Validated::valid(1), Validated::invalid("a"), Validated::invalid("b")]
///         .into_iter()
///         .collect();
/// assert_eq!(all.get_invalid(), vec!["a", "b"]);
/// ```
impl<E, A, V> FromIterator<Validated<E, A>> for Validated<E, V>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Validated<E, A>>>(items: I) -> Self {
        let mut values = Vec::new();
        let mut errors: Option<NonEmptyVec<E>> = None;
        for item in items {
            match item {
                Validated::Valid(value) => {
                    if errors.is_none() {
                        values.push(value);
                    }
                }
                Validated::Invalid(more) => match &mut errors {
                    Some(accumulated) => accumulated.append(more),
                    None => errors = Some(more),
                },
            }
        }
        match errors {
            Some(errors) => Self::Invalid(errors),
            None => Self::Valid(values.into_iter().collect()),
        }
    }
}

static_assertions::assert_impl_all!(Validated<String, u32>: Send, Sync);
static_assertions::assert_impl_all!(NonEmptyVec<String>: Send, Sync);
