//! Composition helpers.
//!
//! - [`identity`]: returns its argument unchanged
//! - [`compose`]: right-to-left composition, `compose(f, g)(a) = f(g(a))`
//! - [`and_then`]: left-to-right composition, `and_then(f, g)(a) = g(f(a))`

/// Returns the value unchanged.
///
/// `identity` is the unit of composition:
/// `compose(identity, f)` and `compose(f, identity)` both behave like `f`.
///
/// # Examples
///
/// ```
/// use combinate::function::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Composes two functions right to left.
///
/// The returned function feeds its argument to `inner` and the result to
/// `outer`.
///
/// # Examples
///
/// ```
/// use combinate::function::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = compose(add_one, double);
/// assert_eq!(composed(5), 11);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |value| outer(inner(value))
}

/// Composes two functions left to right.
///
/// # Examples
///
/// ```
/// use combinate::function::and_then;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let piped = and_then(add_one, double);
/// assert_eq!(piped(5), 12);
/// ```
#[inline]
pub fn and_then<A, B, C, F, G>(first: F, next: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |value| next(first(value))
}
