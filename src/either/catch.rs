//! Bridging unwinding panics into `Either` values.
//!
//! A panic payload's type is treated as the *kind* of the fault. Functions of
//! one to four arguments gain two wrappers:
//!
//! - `catch_all()` converts any panic into `Left(CaughtPanic)`.
//! - `catch_only::<K>()` converts a panic whose payload is a `K` (raised with
//!   [`std::panic::panic_any`]) into `Left(k)`, and resumes every other panic
//!   unchanged.
//!
//! Normal returns become `Right`. The default panic hook still reports caught
//! panics on stderr.
//!
//! # Examples
//!
//! ```rust
//! use combinate::either::{Catch1, Either};
//!
//! #[derive(Debug, PartialEq)]
//! struct FormatError(String);
//!
//! fn to_int(input: &str) -> i32 {
//!     input
//!         .parse()
//!         .unwrap_or_else(|_| std::panic::panic_any(FormatError(input.to_string())))
//! }
//!
//! let safe = to_int.catch_only::<FormatError>();
//! assert_eq!(safe("12"), Either::Right(12));
//! assert_eq!(safe("twelve"), Either::Left(FormatError("twelve".to_string())));
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use super::Either;

/// A panic of any kind, caught by `catch_all`.
pub struct CaughtPanic {
    payload: Box<dyn Any + Send>,
}

impl CaughtPanic {
    fn payload(&self) -> &(dyn Any + Send) {
        &*self.payload
    }

    /// Returns the panic message for `panic!("...")`-style payloads.
    pub fn message(&self) -> Option<&str> {
        let payload = self.payload();
        payload
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
    }

    /// Returns `true` if the payload is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.payload().is::<T>()
    }

    /// Borrows the payload as a `T`, if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload().downcast_ref::<T>()
    }

    /// Returns the raw payload.
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Resumes unwinding with the original payload.
    pub fn resume(self) -> ! {
        panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for CaughtPanic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CaughtPanic")
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for CaughtPanic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(formatter, "panicked: {message}"),
            None => formatter.write_str("panicked with a non-string payload"),
        }
    }
}

impl std::error::Error for CaughtPanic {}

fn catching_all<Z, C>(call: C) -> Either<CaughtPanic, Z>
where
    C: FnOnce() -> Z,
{
    match panic::catch_unwind(AssertUnwindSafe(call)) {
        Ok(value) => Either::Right(value),
        Err(payload) => {
            #[cfg(feature = "tracing")]
            tracing::trace!("panic converted into Left");
            Either::Left(CaughtPanic { payload })
        }
    }
}

fn catching_only<K, Z, C>(call: C) -> Either<K, Z>
where
    K: Any + Send,
    C: FnOnce() -> Z,
{
    match panic::catch_unwind(AssertUnwindSafe(call)) {
        Ok(value) => Either::Right(value),
        Err(payload) => match payload.downcast::<K>() {
            Ok(fault) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(kind = std::any::type_name::<K>(), "panic converted into Left");
                Either::Left(*fault)
            }
            Err(payload) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(kind = std::any::type_name::<K>(), "panic kind not caught, resuming");
                panic::resume_unwind(payload)
            }
        },
    }
}

/// Panic bridging for unary functions.
pub trait Catch1<A, Z>: Fn(A) -> Z + Sized {
    /// Wraps the function so that any panic becomes `Left(CaughtPanic)`.
    fn catch_all(self) -> impl Fn(A) -> Either<CaughtPanic, Z> {
        move |a: A| catching_all(|| self(a))
    }

    /// Wraps the function so that a panic with a `K` payload becomes `Left(k)`.
    ///
    /// Panics of any other kind propagate unchanged.
    fn catch_only<K>(self) -> impl Fn(A) -> Either<K, Z>
    where
        K: Any + Send,
    {
        move |a: A| catching_only(|| self(a))
    }
}

impl<A, Z, F> Catch1<A, Z> for F where F: Fn(A) -> Z {}

/// Panic bridging for binary functions.
pub trait Catch2<A, B, Z>: Fn(A, B) -> Z + Sized {
    /// See [`Catch1::catch_all`].
    fn catch_all(self) -> impl Fn(A, B) -> Either<CaughtPanic, Z> {
        move |a: A, b: B| catching_all(|| self(a, b))
    }

    /// See [`Catch1::catch_only`].
    fn catch_only<K>(self) -> impl Fn(A, B) -> Either<K, Z>
    where
        K: Any + Send,
    {
        move |a: A, b: B| catching_only(|| self(a, b))
    }
}

impl<A, B, Z, F> Catch2<A, B, Z> for F where F: Fn(A, B) -> Z {}

/// Panic bridging for ternary functions.
pub trait Catch3<A, B, C, Z>: Fn(A, B, C) -> Z + Sized {
    /// See [`Catch1::catch_all`].
    fn catch_all(self) -> impl Fn(A, B, C) -> Either<CaughtPanic, Z> {
        move |a: A, b: B, c: C| catching_all(|| self(a, b, c))
    }

    /// See [`Catch1::catch_only`].
    fn catch_only<K>(self) -> impl Fn(A, B, C) -> Either<K, Z>
    where
        K: Any + Send,
    {
        move |a: A, b: B, c: C| catching_only(|| self(a, b, c))
    }
}

impl<A, B, C, Z, F> Catch3<A, B, C, Z> for F where F: Fn(A, B, C) -> Z {}

/// Panic bridging for four-argument functions.
pub trait Catch4<A, B, C, D, Z>: Fn(A, B, C, D) -> Z + Sized {
    /// See [`Catch1::catch_all`].
    fn catch_all(self) -> impl Fn(A, B, C, D) -> Either<CaughtPanic, Z> {
        move |a: A, b: B, c: C, d: D| catching_all(|| self(a, b, c, d))
    }

    /// See [`Catch1::catch_only`].
    fn catch_only<K>(self) -> impl Fn(A, B, C, D) -> Either<K, Z>
    where
        K: Any + Send,
    {
        move |a: A, b: B, c: C, d: D| catching_only(|| self(a, b, c, d))
    }
}

impl<A, B, C, D, Z, F> Catch4<A, B, C, D, Z> for F where F: Fn(A, B, C, D) -> Z {}
