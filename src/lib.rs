//! # combinate
//!
//! Composable containers and function combinators that replace null checks and
//! unwinding failures with explicit, value-level control flow.
//!
//! ## Overview
//!
//! - **Maybe**: a value that may be absent ([`maybe`])
//! - **Either**: success or a single failure, short-circuiting ([`either`])
//! - **Validated**: success or every failure, accumulating ([`validated`])
//! - **Function combinators**: curry, uncurry, partial application, swap and
//!   composition for functions of up to five arguments ([`function`])
//! - **Type classes**: `Functor`, `Applicative`, `Monad`, `Semigroup`
//!   ([`typeclass`])
//!
//! ## Feature Flags
//!
//! - `function` (default): function combinators
//! - `typeclass` (default): type class traits and their container instances
//! - `serde`: `Serialize`/`Deserialize` for the containers
//! - `tracing`: trace events when panics are bridged into `Either`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use combinate::prelude::*;
//!
//! fn parse(input: &str) -> Either<String, i32> {
//!     input.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let total = Either::map2(parse("40"), parse("2"), |a, b| a + b);
//! assert_eq!(total, Either::Right(42));
//!
//! let first = some(3).flat_map(|x| if x > 0 { some(x * 2) } else { none() });
//! assert_eq!(first.get_or_else(0), 6);
//!
//! let checked: Validated<&str, (i32, i32)> = invalid("a").product(invalid("b"));
//! assert_eq!(checked.get_invalid(), vec!["a", "b"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, their helper functions and extension traits.
///
/// # Usage
///
/// ```rust
/// use combinate::prelude::*;
/// ```
pub mod prelude {
    pub use crate::either::{
        Catch1, Catch2, Catch3, Catch4, CaughtPanic, Either, left, right, to_double_e, to_either,
        to_int_e,
    };
    pub use crate::error::{AccessError, EmptyValueError, InvalidAccessError, Side, WrongSideError};
    pub use crate::maybe::{
        Maybe, MaybeTuple2, MaybeTuple3, MaybeTuple4, SequenceExt, ToMaybe, none, sequence,
        some, to_maybe, traverse,
    };
    pub use crate::validated::{
        NonEmptyVec, Validated, ValidatedTuple2, ValidatedTuple3, ValidatedTuple4, invalid,
        valid,
    };

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod either;
pub mod error;
pub mod maybe;
pub mod validated;

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "typeclass")]
pub mod typeclass;
