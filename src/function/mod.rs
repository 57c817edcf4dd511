//! Function combinators over functions of one to five arguments.
//!
//! Every closure or function item gains method syntax through the per-arity
//! extension traits [`Function1`] to [`Function5`]:
//!
//! - `curry()`: convert an N-ary function into a chain of single-argument
//!   functions ([`Curried2`] to [`Curried5`]).
//! - [`uncurry2`] to [`uncurry5`]: the exact inverse of `curry`.
//! - `p_apply1()` .. `p_applyN()`: fix the K-th parameter and keep the rest in
//!   their original order.
//! - `swap()`: exchange the two parameters of a binary function.
//! - [`compose`] / [`and_then`] and the matching [`Function1`] methods.
//!
//! # Examples
//!
//! ## Currying
//!
//! ```
//! use combinate::function::{Function3, uncurry3};
//!
//! fn volume(width: i32, height: i32, depth: i32) -> i32 {
//!     width * height * depth
//! }
//!
//! let curried = volume.curry();
//! assert_eq!(curried(2)(3)(4), 24);
//!
//! let restored = uncurry3(curried);
//! assert_eq!(restored(2, 3, 4), volume(2, 3, 4));
//! ```
//!
//! ## Partial Application
//!
//! ```
//! use combinate::function::{Function2, Function3};
//!
//! fn label(prefix: &'static str, value: i32, suffix: &'static str) -> String {
//!     format!("{prefix}{value}{suffix}")
//! }
//!
//! let bracketed = label.p_apply1("[").p_apply2("]");
//! assert_eq!(bracketed(7), "[7]");
//!
//! // The order in which parameters are fixed does not matter.
//! let same = label.p_apply3("]").p_apply1("[");
//! assert_eq!(same(7), bracketed(7));
//! ```
//!
//! # Laws
//!
//! - **Curry inverse**: `uncurryN(f.curry())(a, ..) == f(a, ..)`
//! - **Swap**: `f.swap()(b, a) == f(a, b)`
//! - **Composition**: `compose(f, g)(a) == f(g(a))` and `and_then(f, g)(a) == g(f(a))`
//! - **Identity**: `compose(identity, f) == f == compose(f, identity)`

mod arity;
mod compose;

pub use arity::{
    Curried2, Curried3, Curried4, Curried5, Function1, Function2, Function3, Function4,
    Function5, uncurry2, uncurry3, uncurry4, uncurry5,
};
pub use compose::{and_then, compose, identity};
