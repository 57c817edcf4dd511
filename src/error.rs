//! Errors raised when a container is read from the wrong side.
//!
//! These are programmer-misuse errors: reading the value of an empty
//! [`Maybe`](crate::maybe::Maybe), the wrong side of an
//! [`Either`](crate::either::Either), or the wrong side of a
//! [`Validated`](crate::validated::Validated). The panicking accessors
//! (`value`, `get_right`, `get_valid`, ...) panic with the `Display` text of
//! these errors, while the `try_*` accessors return them as values.
//!
//! Domain errors are never defined here. They are the generic failure
//! parameters of `Either` and `Validated`.
//!
//! # Examples
//!
//! ```rust
//! use combinate::error::{EmptyValueError, WrongSideError, Side};
//! use combinate::maybe::Maybe;
//! use combinate::either::Either;
//!
//! let empty: Maybe<i32> = Maybe::none();
//! assert_eq!(empty.try_value(), Err(EmptyValueError));
//!
//! let failure: Either<String, i32> = Either::left("boom".to_string());
//! assert_eq!(
//!     failure.try_right(),
//!     Err(WrongSideError { requested: Side::Right, actual: Side::Left })
//! );
//! ```

use std::fmt;

use thiserror::Error;

/// One side of an [`Either`](crate::either::Either).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The failure side.
    Left,
    /// The success side.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => formatter.write_str("left"),
            Self::Right => formatter.write_str("right"),
        }
    }
}

/// The value of an empty `Maybe` was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("cannot get the value of Nothing")]
pub struct EmptyValueError;

/// One side of an `Either` was requested while the other side is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("cannot get {requested} of an Either holding {actual}")]
pub struct WrongSideError {
    /// The side the caller asked for.
    pub requested: Side,
    /// The side actually populated.
    pub actual: Side,
}

impl WrongSideError {
    pub(crate) const fn requested(requested: Side) -> Self {
        let actual = match requested {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        };
        Self { requested, actual }
    }
}

/// The wrong side of a `Validated` was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum InvalidAccessError {
    /// The valid value of an `Invalid` was requested.
    #[error("cannot get the valid value of an Invalid")]
    NotValid,
    /// The errors of a `Valid` were requested.
    #[error("cannot get the errors of a Valid")]
    NotInvalid,
}

/// Any container access error.
///
/// Lets callers use `?` across accessors of different containers.
///
/// ```rust
/// use combinate::error::AccessError;
/// use combinate::prelude::*;
///
/// fn total(a: Maybe<i32>, b: Either<String, i32>) -> Result<i32, AccessError> {
///     Ok(a.try_value()? + b.try_right()?)
/// }
///
/// assert_eq!(total(some(1), Either::right(2)), Ok(3));
/// assert!(total(none(), Either::right(2)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AccessError {
    /// See [`EmptyValueError`].
    #[error(transparent)]
    Empty(#[from] EmptyValueError),
    /// See [`WrongSideError`].
    #[error(transparent)]
    WrongSide(#[from] WrongSideError),
    /// See [`InvalidAccessError`].
    #[error(transparent)]
    InvalidAccess(#[from] InvalidAccessError),
}
