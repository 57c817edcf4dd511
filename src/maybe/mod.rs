//! Maybe type - a value that may be absent.
//!
//! `Maybe<A>` is either `Just(A)` or `Nothing`. It plays the role of an
//! optional value with an explicit, composable API: `map`, `flat_map`,
//! `filter`, `fold`, the `lift` family and conversions into
//! [`Either`] and [`Validated`].
//!
//! # Absence versus a null payload
//!
//! Two injection paths exist and are kept apart on purpose:
//!
//! - [`some`] / [`Maybe::some`] always produce `Just`, even when the payload is
//!   itself a `None` of type `Option<T>`.
//! - [`to_maybe`] / [`ToMaybe::to_maybe`] treat a `None` payload as `Nothing`.
//!
//! Presence, not the payload, decides every operation:
//!
//! ```rust
//! use combinate::maybe::{Maybe, some, to_maybe};
//!
//! let null_payload: Option<i32> = None;
//!
//! let wrapped = some(null_payload);
//! assert!(wrapped.has_value());
//! assert_eq!(wrapped.get_or_else(Some(7)), None);
//!
//! let collapsed = to_maybe(null_payload);
//! assert_eq!(collapsed, Maybe::Nothing);
//! ```
//!
//! # Laws
//!
//! - **Identity**: `m.map(|x| x) == m`
//! - **Composition**: `m.map(f).map(g) == m.map(|x| g(f(x)))`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`

mod traverse;
mod tuple;

pub use traverse::{SequenceExt, sequence, traverse};
pub use tuple::{MaybeTuple2, MaybeTuple3, MaybeTuple4};

use crate::either::Either;
use crate::error::EmptyValueError;
use crate::validated::Validated;

/// A value that is either present (`Just`) or absent (`Nothing`).
///
/// # Examples
///
/// ```rust
/// use combinate::maybe::Maybe;
///
/// let present = Maybe::some(20).map(|n| n + 1).filter(|n| n % 3 == 0);
/// assert_eq!(present, Maybe::Just(21));
///
/// let absent: Maybe<i32> = Maybe::none();
/// assert_eq!(absent.fold(|| "empty".to_string(), |n| n.to_string()), "empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// No value.
    Nothing,
    /// A present value.
    Just(A),
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<A> Maybe<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps `value` in `Just`, whatever the value is.
    ///
    /// A `None` payload stays wrapped: `Maybe::some(None::<i32>)` is present.
    #[inline]
    pub const fn some(value: A) -> Self {
        Self::Just(value)
    }

    /// Returns `Nothing`.
    #[inline]
    pub const fn none() -> Self {
        Self::Nothing
    }

    // =========================================================================
    // Inspection and Access
    // =========================================================================

    /// Returns `true` for `Just`.
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` for `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns the contained value, consuming the `Maybe`.
    ///
    /// # Panics
    ///
    /// Panics with the [`EmptyValueError`] message if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinate::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::some("x").value(), "x");
    /// ```
    #[inline]
    pub fn value(self) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("{}", EmptyValueError),
        }
    }

    /// Returns the contained value, or [`EmptyValueError`] for `Nothing`.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueError`] if this is `Nothing`.
    #[inline]
    pub fn try_value(self) -> Result<A, EmptyValueError> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(EmptyValueError),
        }
    }

    /// Borrows the contained value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Returns the contained value, or `default` for `Nothing`.
    ///
    /// `default` is evaluated eagerly; see [`Maybe::get_or_else_with`].
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the contained value, or calls `supplier` for `Nothing`.
    ///
    /// `supplier` is never called when a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinate::maybe::Maybe;
    ///
    /// let value = Maybe::some(1).get_or_else_with(|| unreachable!());
    /// assert_eq!(value, 1);
    /// ```
    #[inline]
    pub fn get_or_else_with<F>(self, supplier: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => supplier(),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Keeps the value only if it is present and satisfies `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Just(value) => {
                if predicate(&value) {
                    Self::Just(value)
                } else {
                    Self::Nothing
                }
            }
            Self::Nothing => Self::Nothing,
        }
    }

    /// Eliminates the `Maybe`. Exactly one of the two functions runs.
    #[inline]
    pub fn fold<B, N, S>(self, on_none: N, on_some: S) -> B
    where
        N: FnOnce() -> B,
        S: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => on_some(value),
            Self::Nothing => on_none(),
        }
    }

    /// Applies `function` to the value if present.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Chains a computation that may itself be absent.
    ///
    /// `function` is not called for `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinate::maybe::Maybe;
    ///
    /// fn half(n: i32) -> Maybe<i32> {
    ///     if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() }
    /// }
    ///
    /// assert_eq!(Maybe::some(8).flat_map(half).flat_map(half), Maybe::Just(2));
    /// assert_eq!(Maybe::some(6).flat_map(half).flat_map(half), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into an `Either`, with `if_none` on the left for `Nothing`.
    #[inline]
    pub fn as_either<E>(self, if_none: E) -> Either<E, A> {
        match self {
            Self::Just(value) => Either::Right(value),
            Self::Nothing => Either::Left(if_none),
        }
    }

    /// Converts into a `Validated`, with the single error `if_none` for `Nothing`.
    #[inline]
    pub fn as_validated<E>(self, if_none: E) -> Validated<E, A> {
        match self {
            Self::Just(value) => Validated::valid(value),
            Self::Nothing => Validated::invalid(if_none),
        }
    }
}

// =============================================================================
// Lifting
// =============================================================================

impl<Z> Maybe<Z> {
    /// Lifts a unary function to operate on `Maybe` values.
    #[inline]
    pub fn lift1<A, F>(function: F) -> impl Fn(Maybe<A>) -> Self
    where
        F: Fn(A) -> Z,
    {
        move |first: Maybe<A>| first.map(&function)
    }

    /// Lifts a binary function to operate on `Maybe` values.
    ///
    /// The result is present only if both arguments are.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinate::maybe::Maybe;
    ///
    /// let add = Maybe::lift2(|a: i32, b: i32| a + b);
    /// assert_eq!(add(Maybe::some(1), Maybe::some(2)), Maybe::Just(3));
    /// assert_eq!(add(Maybe::some(1), Maybe::none()), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn lift2<A, B, F>(function: F) -> impl Fn(Maybe<A>, Maybe<B>) -> Self
    where
        F: Fn(A, B) -> Z,
    {
        move |first: Maybe<A>, second: Maybe<B>| {
            first.flat_map(|a| second.map(|b| function(a, b)))
        }
    }

    /// Lifts a ternary function to operate on `Maybe` values.
    #[inline]
    pub fn lift3<A, B, C, F>(function: F) -> impl Fn(Maybe<A>, Maybe<B>, Maybe<C>) -> Self
    where
        F: Fn(A, B, C) -> Z,
    {
        move |first: Maybe<A>, second: Maybe<B>, third: Maybe<C>| {
            first.flat_map(|a| second.flat_map(|b| third.map(|c| function(a, b, c))))
        }
    }

    /// Lifts a four-argument function to operate on `Maybe` values.
    #[inline]
    pub fn lift4<A, B, C, D, F>(
        function: F,
    ) -> impl Fn(Maybe<A>, Maybe<B>, Maybe<C>, Maybe<D>) -> Self
    where
        F: Fn(A, B, C, D) -> Z,
    {
        move |first: Maybe<A>, second: Maybe<B>, third: Maybe<C>, fourth: Maybe<D>| {
            first.flat_map(|a| {
                second.flat_map(|b| third.flat_map(|c| fourth.map(|d| function(a, b, c, d))))
            })
        }
    }
}

// =============================================================================
// Nested and Nullable Payloads
// =============================================================================

impl<A> Maybe<Maybe<A>> {
    /// Removes one level of nesting. Present only if both layers are present.
    #[inline]
    pub fn flatten(self) -> Maybe<A> {
        match self {
            Self::Just(inner) => inner,
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<A> Maybe<Option<A>> {
    /// Collapses a present-but-null payload into `Nothing`.
    ///
    /// ```rust
    /// use combinate::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::some(None::<i32>).map_null(), Maybe::Nothing);
    /// assert_eq!(Maybe::some(Some(3)).map_null(), Maybe::Just(3));
    /// ```
    #[inline]
    pub fn map_null(self) -> Maybe<A> {
        self.flat_map(to_maybe)
    }
}

// =============================================================================
// Injection Helpers
// =============================================================================

/// Wraps `value` in `Just`. See [`Maybe::some`].
#[inline]
pub const fn some<A>(value: A) -> Maybe<A> {
    Maybe::Just(value)
}

/// Returns `Nothing`.
#[inline]
pub const fn none<A>() -> Maybe<A> {
    Maybe::Nothing
}

/// Converts a nullable raw value, treating `None` as absence.
#[inline]
pub fn to_maybe<A>(raw: Option<A>) -> Maybe<A> {
    match raw {
        Some(value) => Maybe::Just(value),
        None => Maybe::Nothing,
    }
}

/// Method form of [`to_maybe`] for nullable raw values.
pub trait ToMaybe<A> {
    /// Converts into a `Maybe`, treating a null payload as `Nothing`.
    fn to_maybe(self) -> Maybe<A>;
}

impl<A> ToMaybe<A> for Option<A> {
    #[inline]
    fn to_maybe(self) -> Maybe<A> {
        to_maybe(self)
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    #[inline]
    fn from(raw: Option<A>) -> Self {
        to_maybe(raw)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        maybe.into_option()
    }
}

static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);
