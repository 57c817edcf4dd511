//! Sequencing and traversal over collections of `Maybe` values.
//!
//! Both operations make a single left-to-right pass over their input and stop
//! at the first `Nothing`; the result is never partially filled.
//!
//! ```rust
//! use combinate::maybe::{SequenceExt, none, sequence, some};
//!
//! assert_eq!(sequence(vec![some(1), some(2), some(3)]), some(vec![1, 2, 3]));
//! assert_eq!(vec![some(1), none(), some(3)].sequence(), none());
//! ```

use super::Maybe;

/// Turns a sequence of `Maybe` values into a `Maybe` of their values.
///
/// Returns `Nothing` as soon as a `Nothing` is encountered. The input is
/// enumerated at most once.
pub fn sequence<A, I>(items: I) -> Maybe<Vec<A>>
where
    I: IntoIterator<Item = Maybe<A>>,
{
    traverse(items, |value| value)
}

/// Applies `function` to every present value while sequencing.
///
/// Same single scan and short-circuit rule as [`sequence`]: `function` runs
/// for each present value up to the first `Nothing`.
///
/// ```rust
/// use combinate::maybe::{none, some, traverse};
///
/// assert_eq!(traverse(vec![some(1), some(2)], |n| n * 10), some(vec![10, 20]));
/// assert_eq!(traverse(vec![some(1), none()], |n: i32| n * 10), none());
/// ```
pub fn traverse<A, B, I, F>(items: I, mut function: F) -> Maybe<Vec<B>>
where
    I: IntoIterator<Item = Maybe<A>>,
    F: FnMut(A) -> B,
{
    let iterator = items.into_iter();
    let mut values = Vec::with_capacity(iterator.size_hint().0);
    for item in iterator {
        match item {
            Maybe::Just(value) => values.push(function(value)),
            Maybe::Nothing => return Maybe::Nothing,
        }
    }
    Maybe::Just(values)
}

/// Method syntax for [`sequence`] and [`traverse`].
pub trait SequenceExt<A>: IntoIterator<Item = Maybe<A>> + Sized {
    /// See [`sequence`].
    fn sequence(self) -> Maybe<Vec<A>> {
        sequence(self)
    }

    /// See [`traverse`].
    fn traverse<B, F>(self, function: F) -> Maybe<Vec<B>>
    where
        F: FnMut(A) -> B,
    {
        traverse(self, function)
    }
}

impl<A, I> SequenceExt<A> for I where I: IntoIterator<Item = Maybe<A>> {}

/// Collects into any container, stopping at the first `Nothing`.
///
/// ```rust
/// use std::collections::BTreeSet;
/// use combinate::maybe::{Maybe, some};
///
/// let collected: Maybe<BTreeSet<i32>> = vec![some(2), some(1)].into_iter().collect();
/// assert_eq!(collected, some(BTreeSet::from([1, 2])));
/// ```
impl<A, V> FromIterator<Maybe<A>> for Maybe<V>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Maybe<A>>>(items: I) -> Self {
        items
            .into_iter()
            .map(Maybe::into_option)
            .collect::<Option<V>>()
            .into()
    }
}
