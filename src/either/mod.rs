//! Either type - a value that is one of two alternatives.
//!
//! `Either<L, R>` is either `Left(L)` or `Right(R)`. By convention `Left`
//! carries a failure and `Right` a success, and every right-biased operation
//! (`map`, `flat_map`, the `lift` family, `map2`..`map4`) passes a `Left`
//! through unchanged. Chains therefore short-circuit: the first `Left`
//! encountered wins.
//!
//! Panicking code can be bridged into `Either` with
//! [`catch_all`](Catch1::catch_all) and [`catch_only`](Catch1::catch_only).
//!
//! # Examples
//!
//! ```rust
//! use combinate::either::Either;
//!
//! fn parse(input: &str) -> Either<String, i32> {
//!     input.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let sum = Either::map2(parse("40"), parse("2"), |a, b| a + b);
//! assert_eq!(sum, Either::Right(42));
//!
//! // Only the first failure is reported.
//! let failed = Either::map2(parse("x"), parse("y"), |a, b| a + b);
//! assert_eq!(failed, parse("x"));
//! ```

mod catch;

pub use catch::{Catch1, Catch2, Catch3, Catch4, CaughtPanic};

use std::num::{ParseFloatError, ParseIntError};

use crate::error::{Side, WrongSideError};
use crate::maybe::Maybe;
use crate::validated::Validated;

/// A value that is either `Left(L)` or `Right(R)`.
///
/// # Type Parameters
///
/// * `L` - The type of the left (failure) value
/// * `R` - The type of the right (success) value
///
/// # Examples
///
/// ```rust
/// use combinate::either::Either;
///
/// let success: Either<String, i32> = Either::right(42);
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
///
/// let failure: Either<String, i32> = Either::left("error".to_string());
/// assert_eq!(failure.get_or_else(0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The failure side.
    Left(L),
    /// The success side.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Left` value.
    #[inline]
    pub const fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// Creates a `Right` value.
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics with the [`WrongSideError`] message if this is a `Right` value.
    #[inline]
    pub fn get_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("{}", WrongSideError::requested(Side::Left)),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics with the [`WrongSideError`] message if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinate::either::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.get_right(), "hello");
    /// ```
    #[inline]
    pub fn get_right(self) -> R {
        match self {
            Self::Left(_) => panic!("{}", WrongSideError::requested(Side::Right)),
            Self::Right(value) => value,
        }
    }

    /// Returns the left value, or [`WrongSideError`] for a `Right`.
    ///
    /// # Errors
    ///
    /// Returns [`WrongSideError`] if this is a `Right` value.
    #[inline]
    pub fn try_left(self) -> Result<L, WrongSideError> {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => Err(WrongSideError::requested(Side::Left)),
        }
    }

    /// Returns the right value, or [`WrongSideError`] for a `Left`.
    ///
    /// # Errors
    ///
    /// Returns [`WrongSideError`] if this is a `Left` value.
    #[inline]
    pub fn try_right(self) -> Result<R, WrongSideError> {
        match self {
            Self::Left(_) => Err(WrongSideError::requested(Side::Right)),
            Self::Right(value) => Ok(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Maybe<&L> {
        match self {
            Self::Left(value) => Maybe::Just(value),
            Self::Right(_) => Maybe::Nothing,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Maybe<&R> {
        match self {
            Self::Left(_) => Maybe::Nothing,
            Self::Right(value) => Maybe::Just(value),
        }
    }

    /// Returns the right value, or `default` for a `Left`.
    #[inline]
    pub fn get_or_else(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Returns the right value, or calls `supplier` for a `Left`.
    ///
    /// `supplier` is never called for a `Right`.
    #[inline]
    pub fn get_or_else_with<F>(self, supplier: F) -> R
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Left(_) => supplier(),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the right value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinate::either::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map(|s| s.len()), Either::Right(5));
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map(|s: String| s.len()), Either::Left(42));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies a function to the left value if present.
    #[inline]
    pub fn left_map<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies one of two functions depending on whether this is Left or Right.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Chains a computation on the right value. A `Left` short-circuits.
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Chains a computation on the left value, typically to recover.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinate::either::Either;
    ///
    /// let failed: Either<&str, i32> = Either::left("missing");
    /// let recovered: Either<String, i32> = failed.left_flat_map(|reason| {
    ///     if reason == "missing" { Either::right(0) } else { Either::left(reason.to_string()) }
    /// });
    /// assert_eq!(recovered, Either::Right(0));
    /// ```
    #[inline]
    pub fn left_flat_map<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinate::either::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Swaps the Left and Right variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Keeps the right value and discards a left one.
    #[inline]
    pub fn as_maybe(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::Nothing,
            Self::Right(value) => Maybe::Just(value),
        }
    }

    /// Converts into a `Validated` with a single error on the invalid side.
    #[inline]
    pub fn as_validated(self) -> Validated<L, R> {
        match self {
            Self::Left(error) => Validated::invalid(error),
            Self::Right(value) => Validated::valid(value),
        }
    }

    // =========================================================================
    // Combining
    // =========================================================================

    /// Combines two right values; the first `Left` wins.
    #[inline]
    pub fn map2<B, Z, F>(first: Self, second: Either<L, B>, function: F) -> Either<L, Z>
    where
        F: FnOnce(R, B) -> Z,
    {
        first.flat_map(|a| second.map(|b| function(a, b)))
    }

    /// Combines three right values; the first `Left` wins.
    #[inline]
    pub fn map3<B, C, Z, F>(
        first: Self,
        second: Either<L, B>,
        third: Either<L, C>,
        function: F,
    ) -> Either<L, Z>
    where
        F: FnOnce(R, B, C) -> Z,
    {
        first.flat_map(|a| second.flat_map(|b| third.map(|c| function(a, b, c))))
    }

    /// Combines four right values; the first `Left` wins.
    #[inline]
    pub fn map4<B, C, D, Z, F>(
        first: Self,
        second: Either<L, B>,
        third: Either<L, C>,
        fourth: Either<L, D>,
        function: F,
    ) -> Either<L, Z>
    where
        F: FnOnce(R, B, C, D) -> Z,
    {
        first.flat_map(|a| {
            second.flat_map(|b| third.flat_map(|c| fourth.map(|d| function(a, b, c, d))))
        })
    }
}

// =============================================================================
// Lifting
// =============================================================================

impl<L, Z> Either<L, Z> {
    /// Lifts a unary function to operate on `Either` values.
    #[inline]
    pub fn lift1<A, F>(function: F) -> impl Fn(Either<L, A>) -> Self
    where
        F: Fn(A) -> Z,
    {
        move |first: Either<L, A>| first.map(&function)
    }

    /// Lifts a binary function to operate on `Either` values.
    ///
    /// Arguments are scanned left to right; the first `Left` is returned.
    ///
    /// ```rust
    /// use combinate::either::Either;
    ///
    /// let add = Either::lift2(|a: i32, b: i32| a + b);
    /// let result: Either<&str, i32> = add(Either::left("first"), Either::left("second"));
    /// assert_eq!(result, Either::Left("first"));
    /// ```
    #[inline]
    pub fn lift2<A, B, F>(function: F) -> impl Fn(Either<L, A>, Either<L, B>) -> Self
    where
        F: Fn(A, B) -> Z,
    {
        move |first: Either<L, A>, second: Either<L, B>| {
            first.flat_map(|a| second.map(|b| function(a, b)))
        }
    }

    /// Lifts a ternary function to operate on `Either` values.
    #[inline]
    pub fn lift3<A, B, C, F>(
        function: F,
    ) -> impl Fn(Either<L, A>, Either<L, B>, Either<L, C>) -> Self
    where
        F: Fn(A, B, C) -> Z,
    {
        move |first: Either<L, A>, second: Either<L, B>, third: Either<L, C>| {
            first.flat_map(|a| second.flat_map(|b| third.map(|c| function(a, b, c))))
        }
    }

    /// Lifts a four-argument function to operate on `Either` values.
    #[inline]
    pub fn lift4<A, B, C, D, F>(
        function: F,
    ) -> impl Fn(Either<L, A>, Either<L, B>, Either<L, C>, Either<L, D>) -> Self
    where
        F: Fn(A, B, C, D) -> Z,
    {
        move |first: Either<L, A>,
              second: Either<L, B>,
              third: Either<L, C>,
              fourth: Either<L, D>| {
            first.flat_map(|a| {
                second.flat_map(|b| third.flat_map(|c| fourth.map(|d| function(a, b, c, d))))
            })
        }
    }
}

// =============================================================================
// Nullable Payloads
// =============================================================================

impl<L, R> Either<L, Option<R>> {
    /// Turns a present-but-null right payload into `Left(if_null)`.
    #[inline]
    pub fn map_null(self, if_null: L) -> Either<L, R> {
        self.flat_map(|raw| to_either(raw, if_null))
    }
}

// =============================================================================
// Injection Helpers
// =============================================================================

/// Creates a `Left` value.
#[inline]
pub const fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// Creates a `Right` value.
#[inline]
pub const fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

/// Converts a nullable raw value, using `if_null` as the failure for `None`.
///
/// ```rust
/// use combinate::either::{Either, to_either};
///
/// assert_eq!(to_either(Some(1), "missing"), Either::Right(1));
/// assert_eq!(to_either(None::<i32>, "missing"), Either::Left("missing"));
/// ```
#[inline]
pub fn to_either<L, R>(raw: Option<R>, if_null: L) -> Either<L, R> {
    match raw {
        Some(value) => Either::Right(value),
        None => Either::Left(if_null),
    }
}

/// Parses a decimal integer, keeping the parse failure on the left.
///
/// ```rust
/// use combinate::either::to_int_e;
///
/// assert_eq!(to_int_e("42").get_right(), 42);
/// assert!(to_int_e("forty-two").is_left());
/// ```
#[inline]
pub fn to_int_e(input: &str) -> Either<ParseIntError, i32> {
    input.parse().into()
}

/// Parses a floating point number, keeping the parse failure on the left.
#[inline]
pub fn to_double_e(input: &str) -> Either<ParseFloatError, f64> {
    input.parse().into()
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

static_assertions::assert_impl_all!(Either<String, Vec<u8>>: Send, Sync);
