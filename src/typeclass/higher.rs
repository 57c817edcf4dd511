//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over `Maybe<_>` or `Either<L, _>` as type
//! constructors directly. [`TypeConstructor`] names the element type
//! (`Inner`) and lets a trait ask for "the same container holding a `B`"
//! (`WithType<B>`), which is all `Functor`, `Applicative` and `Monad` need.
//!
//! # Example
//!
//! ```rust
//! use combinate::maybe::Maybe;
//! use combinate::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let nothing: Maybe<String> = reset(Maybe::some(42));
//! assert!(nothing.is_nothing());
//! ```

use crate::either::Either;
use crate::maybe::Maybe;
use crate::validated::Validated;

/// A type constructor with one varying type parameter.
///
/// For two-parameter containers the *last* parameter varies; the failure
/// type is fixed.
pub trait TypeConstructor {
    /// The element type currently held.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<E, A> TypeConstructor for Validated<E, A> {
    type Inner = A;
    type WithType<B> = Validated<E, B>;
}
