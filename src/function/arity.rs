//! Per-arity extension traits for currying, partial application and swapping.
//!
//! Each trait is implemented for every `Fn` of its arity, so the methods are
//! available on function items and closures alike. Results of `p_applyK` are
//! ordinary closures of one arity lower and therefore pick up the next trait
//! down, which lets partial applications chain in any order.
//!
//! # Design Decisions
//!
//! Curried chains are boxed trait objects so that their types can be named
//! ([`Curried2`] to [`Curried5`]). The original function is shared between
//! the links of a chain through [`Rc`], and every argument fixed so far is
//! cloned on each final call. A partially applied chain can therefore be
//! called any number of times, at the cost of `'static` and `Clone` bounds.

use std::rc::Rc;

/// A curried binary function: `A -> B -> Z`.
pub type Curried2<A, B, Z> = Box<dyn Fn(A) -> Box<dyn Fn(B) -> Z>>;

/// A curried ternary function: `A -> B -> C -> Z`.
pub type Curried3<A, B, C, Z> = Box<dyn Fn(A) -> Curried2<B, C, Z>>;

/// A curried four-argument function.
pub type Curried4<A, B, C, D, Z> = Box<dyn Fn(A) -> Curried3<B, C, D, Z>>;

/// A curried five-argument function.
pub type Curried5<A, B, C, D, E, Z> = Box<dyn Fn(A) -> Curried4<B, C, D, E, Z>>;

// =============================================================================
// Function1
// =============================================================================

/// Composition methods for unary functions.
///
/// # Examples
///
/// ```
/// use combinate::function::Function1;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
///
/// assert_eq!(add_one.compose(double)(5), 11);
/// assert_eq!(add_one.and_then(double)(5), 12);
/// ```
pub trait Function1<A, Z>: Fn(A) -> Z + Sized {
    /// Runs `inner` first, then this function.
    fn compose<X, G>(self, inner: G) -> impl Fn(X) -> Z
    where
        G: Fn(X) -> A,
    {
        move |value: X| self(inner(value))
    }

    /// Runs this function first, then `next`.
    fn and_then<Y, G>(self, next: G) -> impl Fn(A) -> Y
    where
        G: Fn(Z) -> Y,
    {
        move |value: A| next(self(value))
    }
}

impl<A, Z, F> Function1<A, Z> for F where F: Fn(A) -> Z {}

// =============================================================================
// Function2
// =============================================================================

/// Currying, partial application and swapping for binary functions.
pub trait Function2<A, B, Z>: Fn(A, B) -> Z + Sized {
    /// Converts into `A -> B -> Z`.
    ///
    /// ```
    /// use combinate::function::Function2;
    ///
    /// let add = |a: i32, b: i32| a + b;
    /// let add_five = add.curry()(5);
    /// assert_eq!(add_five(3), 8);
    /// assert_eq!(add_five(10), 15);
    /// ```
    fn curry(self) -> Curried2<A, B, Z>
    where
        Self: 'static,
        A: Clone + 'static,
        B: 'static,
        Z: 'static,
    {
        let function = Rc::new(self);
        Box::new(move |a: A| -> Box<dyn Fn(B) -> Z> {
            let function = Rc::clone(&function);
            Box::new(move |b: B| function(a.clone(), b))
        })
    }

    /// Fixes the first parameter.
    fn p_apply1(self, a: A) -> impl Fn(B) -> Z
    where
        A: Clone,
    {
        move |b: B| self(a.clone(), b)
    }

    /// Fixes the second parameter.
    fn p_apply2(self, b: B) -> impl Fn(A) -> Z
    where
        B: Clone,
    {
        move |a: A| self(a, b.clone())
    }

    /// Exchanges the two parameters.
    ///
    /// ```
    /// use combinate::function::Function2;
    ///
    /// let divide = |numerator: i32, denominator: i32| numerator / denominator;
    /// assert_eq!(divide.swap()(2, 10), 5);
    /// ```
    fn swap(self) -> impl Fn(B, A) -> Z {
        move |b: B, a: A| self(a, b)
    }
}

impl<A, B, Z, F> Function2<A, B, Z> for F where F: Fn(A, B) -> Z {}

// =============================================================================
// Function3
// =============================================================================

/// Currying and partial application for ternary functions.
pub trait Function3<A, B, C, Z>: Fn(A, B, C) -> Z + Sized {
    /// Converts into `A -> B -> C -> Z`.
    fn curry(self) -> Curried3<A, B, C, Z>
    where
        Self: 'static,
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        Z: 'static,
    {
        let function = Rc::new(self);
        Box::new(move |a: A| -> Curried2<B, C, Z> {
            let function = Rc::clone(&function);
            Function2::curry(move |b: B, c: C| function(a.clone(), b, c))
        })
    }

    /// Fixes the first parameter.
    fn p_apply1(self, a: A) -> impl Fn(B, C) -> Z
    where
        A: Clone,
    {
        move |b: B, c: C| self(a.clone(), b, c)
    }

    /// Fixes the second parameter.
    fn p_apply2(self, b: B) -> impl Fn(A, C) -> Z
    where
        B: Clone,
    {
        move |a: A, c: C| self(a, b.clone(), c)
    }

    /// Fixes the third parameter.
    fn p_apply3(self, c: C) -> impl Fn(A, B) -> Z
    where
        C: Clone,
    {
        move |a: A, b: B| self(a, b, c.clone())
    }
}

impl<A, B, C, Z, F> Function3<A, B, C, Z> for F where F: Fn(A, B, C) -> Z {}

// =============================================================================
// Function4
// =============================================================================

/// Currying and partial application for four-argument functions.
pub trait Function4<A, B, C, D, Z>: Fn(A, B, C, D) -> Z + Sized {
    /// Converts into `A -> B -> C -> D -> Z`.
    fn curry(self) -> Curried4<A, B, C, D, Z>
    where
        Self: 'static,
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        D: 'static,
        Z: 'static,
    {
        let function = Rc::new(self);
        Box::new(move |a: A| -> Curried3<B, C, D, Z> {
            let function = Rc::clone(&function);
            Function3::curry(move |b: B, c: C, d: D| function(a.clone(), b, c, d))
        })
    }

    /// Fixes the first parameter.
    fn p_apply1(self, a: A) -> impl Fn(B, C, D) -> Z
    where
        A: Clone,
    {
        move |b: B, c: C, d: D| self(a.clone(), b, c, d)
    }

    /// Fixes the second parameter.
    fn p_apply2(self, b: B) -> impl Fn(A, C, D) -> Z
    where
        B: Clone,
    {
        move |a: A, c: C, d: D| self(a, b.clone(), c, d)
    }

    /// Fixes the third parameter.
    fn p_apply3(self, c: C) -> impl Fn(A, B, D) -> Z
    where
        C: Clone,
    {
        move |a: A, b: B, d: D| self(a, b, c.clone(), d)
    }

    /// Fixes the fourth parameter.
    fn p_apply4(self, d: D) -> impl Fn(A, B, C) -> Z
    where
        D: Clone,
    {
        move |a: A, b: B, c: C| self(a, b, c, d.clone())
    }
}

impl<A, B, C, D, Z, F> Function4<A, B, C, D, Z> for F where F: Fn(A, B, C, D) -> Z {}

// =============================================================================
// Function5
// =============================================================================

/// Currying and partial application for five-argument functions.
pub trait Function5<A, B, C, D, E, Z>: Fn(A, B, C, D, E) -> Z + Sized {
    /// Converts into `A -> B -> C -> D -> E -> Z`.
    fn curry(self) -> Curried5<A, B, C, D, E, Z>
    where
        Self: 'static,
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        D: Clone + 'static,
        E: 'static,
        Z: 'static,
    {
        let function = Rc::new(self);
        Box::new(move |a: A| -> Curried4<B, C, D, E, Z> {
            let function = Rc::clone(&function);
            Function4::curry(move |b: B, c: C, d: D, e: E| function(a.clone(), b, c, d, e))
        })
    }

    /// Fixes the first parameter.
    fn p_apply1(self, a: A) -> impl Fn(B, C, D, E) -> Z
    where
        A: Clone,
    {
        move |b: B, c: C, d: D, e: E| self(a.clone(), b, c, d, e)
    }

    /// Fixes the second parameter.
    fn p_apply2(self, b: B) -> impl Fn(A, C, D, E) -> Z
    where
        B: Clone,
    {
        move |a: A, c: C, d: D, e: E| self(a, b.clone(), c, d, e)
    }

    /// Fixes the third parameter.
    fn p_apply3(self, c: C) -> impl Fn(A, B, D, E) -> Z
    where
        C: Clone,
    {
        move |a: A, b: B, d: D, e: E| self(a, b, c.clone(), d, e)
    }

    /// Fixes the fourth parameter.
    fn p_apply4(self, d: D) -> impl Fn(A, B, C, E) -> Z
    where
        D: Clone,
    {
        move |a: A, b: B, c: C, e: E| self(a, b, c, d.clone(), e)
    }

    /// Fixes the fifth parameter.
    fn p_apply5(self, e: E) -> impl Fn(A, B, C, D) -> Z
    where
        E: Clone,
    {
        move |a: A, b: B, c: C, d: D| self(a, b, c, d, e.clone())
    }
}

impl<A, B, C, D, E, Z, F> Function5<A, B, C, D, E, Z> for F where F: Fn(A, B, C, D, E) -> Z {}

// =============================================================================
// Uncurrying
// =============================================================================

/// Converts `A -> B -> Z` back into a binary function.
///
/// ```
/// use combinate::function::uncurry2;
///
/// let curried = |a: i32| move |b: i32| a - b;
/// assert_eq!(uncurry2(curried)(10, 3), 7);
/// ```
pub fn uncurry2<A, B, Z, F, G>(curried: F) -> impl Fn(A, B) -> Z
where
    F: Fn(A) -> G,
    G: Fn(B) -> Z,
{
    move |a: A, b: B| curried(a)(b)
}

/// Converts `A -> B -> C -> Z` back into a ternary function.
pub fn uncurry3<A, B, C, Z, F, G, H>(curried: F) -> impl Fn(A, B, C) -> Z
where
    F: Fn(A) -> G,
    G: Fn(B) -> H,
    H: Fn(C) -> Z,
{
    move |a: A, b: B, c: C| curried(a)(b)(c)
}

/// Converts a curried chain of four single-argument functions back into a
/// four-argument function.
pub fn uncurry4<A, B, C, D, Z, F, G, H, I>(curried: F) -> impl Fn(A, B, C, D) -> Z
where
    F: Fn(A) -> G,
    G: Fn(B) -> H,
    H: Fn(C) -> I,
    I: Fn(D) -> Z,
{
    move |a: A, b: B, c: C, d: D| curried(a)(b)(c)(d)
}

/// Converts a curried chain of five single-argument functions back into a
/// five-argument function.
pub fn uncurry5<A, B, C, D, E, Z, F, G, H, I, J>(curried: F) -> impl Fn(A, B, C, D, E) -> Z
where
    F: Fn(A) -> G,
    G: Fn(B) -> H,
    H: Fn(C) -> I,
    I: Fn(D) -> J,
    J: Fn(E) -> Z,
{
    move |a: A, b: B, c: C, d: D, e: E| curried(a)(b)(c)(d)(e)
}

// Curried chains share the function through Rc.
static_assertions::assert_not_impl_any!(Curried2<i32, i32, i32>: Send, Sync);
