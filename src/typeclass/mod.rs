//! Type class traits shared by the containers.
//!
//! - [`Functor`]: mapping over the held value (`Maybe`, `Either`, `Validated`)
//! - [`Applicative`]: lifting values and combining independent contexts
//!   (`Maybe`, `Either`, `Validated`)
//! - [`Monad`]: sequencing dependent computations (`Maybe`, `Either` only)
//! - [`Semigroup`]: associative combination (`String`, `Vec`, `NonEmptyVec`,
//!   `Maybe`, `Validated`)
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not support higher-kinded types natively. [`TypeConstructor`]
//! uses generic associated types to let the traits above talk about "the
//! same container with another element type".
//!
//! The containers also expose the same operations as inherent methods, which
//! take precedence in method-call syntax. The traits exist for generic code:
//!
//! ```rust
//! use combinate::prelude::*;
//!
//! fn double_all<F>(container: F) -> F::WithType<i32>
//! where
//!     F: Functor<Inner = i32>,
//! {
//!     container.fmap(|x| x * 2)
//! }
//!
//! assert_eq!(double_all(some(4)), some(8));
//! assert_eq!(double_all(Either::<String, i32>::Right(4)), Either::Right(8));
//! assert_eq!(double_all(Validated::<String, i32>::valid(4)), Validated::valid(8));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
mod semigroup;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use semigroup::Semigroup;
