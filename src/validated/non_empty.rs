//! A vector that always holds at least one element.
//!
//! Used as the error sequence of [`Validated::Invalid`](super::Validated),
//! so that an invalid value without errors cannot be constructed.

use crate::maybe::Maybe;

/// A non-empty, ordered sequence.
///
/// # Examples
///
/// ```rust
/// use combinate::validated::NonEmptyVec;
///
/// let mut errors = NonEmptyVec::new("too short");
/// errors.push("no digits");
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.first(), &"too short");
/// assert_eq!(errors.into_vec(), vec!["too short", "no digits"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Creates a sequence holding a single element.
    #[inline]
    pub const fn new(head: T) -> Self {
        Self {
            head,
            tail: Vec::new(),
        }
    }

    /// Creates a sequence from a first element and the rest.
    #[inline]
    pub const fn from_parts(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Converts a `Vec`, returning `Nothing` when it is empty.
    pub fn from_vec(values: Vec<T>) -> Maybe<Self> {
        let mut values = values.into_iter();
        match values.next() {
            Some(head) => Maybe::Just(Self {
                head,
                tail: values.collect(),
            }),
            None => Maybe::Nothing,
        }
    }

    /// Returns the first element.
    #[inline]
    pub const fn first(&self) -> &T {
        &self.head
    }

    /// Returns the number of elements, always at least one.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Appends an element.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.tail.push(value);
    }

    /// Appends every element of `other`, keeping order.
    #[inline]
    pub fn append(&mut self, other: Self) {
        self.tail.reserve(other.len());
        self.tail.push(other.head);
        self.tail.extend(other.tail);
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Applies `function` to every element.
    pub fn map<U, F>(self, mut function: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        let head = function(self.head);
        NonEmptyVec {
            head,
            tail: self.tail.into_iter().map(function).collect(),
        }
    }

    /// Converts into a `Vec` in order.
    pub fn into_vec(self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len());
        values.push(self.head);
        values.extend(self.tail);
        values
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    #[inline]
    fn from(values: NonEmptyVec<T>) -> Self {
        values.into_vec()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for NonEmptyVec<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(left, right)| left == right)
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Chain<std::iter::Once<&'a T>, std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}
