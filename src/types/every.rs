//! Non-empty, order-preserving failure collections.
//!
//! [`One`] is the failure of a single computation that has not been combined with
//! anything yet. [`Every`] is what accumulation produces: one or more failures in the
//! order their source computations were declared. Neither can be empty, so a `Bad`
//! arm built from them always has at least one failure to report.

use core::fmt;
use core::ops::Index;

use smallvec::smallvec;

use crate::types::alloc_type::Vec;
use crate::types::ErrorVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when an [`Every`] would be built from zero failures.
///
/// # Examples
///
/// ```
/// use or_rail::types::{EmptyAccumulation, Every};
///
/// let empty: Vec<&str> = Vec::new();
/// assert_eq!(Every::try_from_iter(empty), Err(EmptyAccumulation));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyAccumulation;

impl fmt::Display for EmptyAccumulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cannot build an accumulation from zero failures")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EmptyAccumulation {}

/// Exactly one failure.
///
/// Produced by [`Or::accumulating`](crate::Or::accumulating) so that a plain
/// `Or<G, B>` becomes eligible for combination.
///
/// # Examples
///
/// ```
/// use or_rail::types::One;
///
/// let one = One::of("bad input");
/// assert_eq!(one.get(), &"bad input");
/// assert_eq!(one.len(), 1);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct One<B>(B);

impl<B> One<B> {
    /// Wraps a single failure.
    #[inline]
    pub fn of(value: B) -> Self {
        Self(value)
    }

    /// Borrows the failure.
    #[inline]
    pub fn get(&self) -> &B {
        &self.0
    }

    /// Unwraps the failure.
    #[inline]
    pub fn into_inner(self) -> B {
        self.0
    }

    /// Always `1`.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        1
    }

    #[inline]
    pub fn as_slice(&self) -> &[B] {
        core::slice::from_ref(&self.0)
    }

    /// Transforms the failure.
    #[inline]
    pub fn map<C, F>(self, f: F) -> One<C>
    where
        F: FnOnce(B) -> C,
    {
        One(f(self.0))
    }

    /// Concatenates `other` after this failure.
    #[inline]
    pub fn append<E>(self, other: E) -> Every<B>
    where
        E: IntoEvery<Item = B>,
    {
        Every::of(self.0).append(other)
    }
}

impl<B: fmt::Display> fmt::Display for One<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "One({})", self.0)
    }
}

/// One or more failures, in declaration order.
///
/// `Every` is immutable: every combining operation consumes its inputs and returns a
/// new value. The only way to build one is from at least one failure, so
/// [`head`](Every::head) never fails.
///
/// # Examples
///
/// ```
/// use or_rail::types::Every;
///
/// let left = Every::of_many("a", ["b"]);
/// let right = Every::of("c");
/// let all = left.append(right);
///
/// assert_eq!(all.as_slice(), &["a", "b", "c"]);
/// assert_eq!(all.head(), &"a");
/// ```
#[must_use]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Every<B> {
    items: ErrorVec<B>,
}

impl<B> Every<B> {
    /// Builds an accumulation holding a single failure.
    #[inline]
    pub fn of(first: B) -> Self {
        Self { items: smallvec![first] }
    }

    /// Builds an accumulation from a first failure followed by any number of others.
    #[inline]
    pub fn of_many<I>(first: B, rest: I) -> Self
    where
        I: IntoIterator<Item = B>,
    {
        let mut items: ErrorVec<B> = smallvec![first];
        items.extend(rest);
        Self { items }
    }

    /// Collects failures, refusing an empty source.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyAccumulation`] when `iter` yields nothing.
    pub fn try_from_iter<I>(iter: I) -> Result<Self, EmptyAccumulation>
    where
        I: IntoIterator<Item = B>,
    {
        let items: ErrorVec<B> = iter.into_iter().collect();
        if items.is_empty() {
            Err(EmptyAccumulation)
        } else {
            Ok(Self { items })
        }
    }

    /// Concatenates two accumulations, this one's failures first.
    ///
    /// # Examples
    ///
    /// ```
    /// use or_rail::types::{Every, One};
    ///
    /// let merged = Every::of(1).append(One::of(2)).append(Every::of_many(3, [4]));
    /// assert_eq!(merged.into_vec(), vec![1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn append<E>(mut self, other: E) -> Self
    where
        E: IntoEvery<Item = B>,
    {
        self.items.extend(other.into_every().items);
        self
    }

    /// Transforms every failure, keeping order and length.
    #[inline]
    pub fn map<C, F>(self, f: F) -> Every<C>
    where
        F: FnMut(B) -> C,
    {
        Every { items: self.items.into_iter().map(f).collect() }
    }

    /// The first failure.
    #[inline]
    pub fn head(&self) -> &B {
        &self.items[0]
    }

    /// The failures as an ordered, read-only slice.
    #[inline]
    pub fn as_slice(&self) -> &[B] {
        &self.items
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, B> {
        self.items.iter()
    }

    /// Number of failures; never zero.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<B> {
        self.items.into_vec()
    }
}

/// Failure shapes that can be widened into an [`Every`].
///
/// Implemented by [`One`] and [`Every`]; the accumulation engine accepts any bad arm
/// implementing it, so singleton and already-combined inputs mix freely.
pub trait IntoEvery {
    type Item;

    fn into_every(self) -> Every<Self::Item>;
}

impl<B> IntoEvery for One<B> {
    type Item = B;

    #[inline]
    fn into_every(self) -> Every<B> {
        Every::of(self.0)
    }
}

impl<B> IntoEvery for Every<B> {
    type Item = B;

    #[inline]
    fn into_every(self) -> Every<B> {
        self
    }
}

impl<B> From<One<B>> for Every<B> {
    #[inline]
    fn from(one: One<B>) -> Self {
        Every::of(one.0)
    }
}

impl<B> TryFrom<Vec<B>> for Every<B> {
    type Error = EmptyAccumulation;

    fn try_from(items: Vec<B>) -> Result<Self, Self::Error> {
        Every::try_from_iter(items)
    }
}

impl<B> Index<usize> for Every<B> {
    type Output = B;

    fn index(&self, index: usize) -> &B {
        &self.items[index]
    }
}

impl<B> IntoIterator for Every<B> {
    type Item = B;
    type IntoIter = smallvec::IntoIter<[B; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, B> IntoIterator for &'a Every<B> {
    type Item = &'a B;
    type IntoIter = core::slice::Iter<'a, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<B: fmt::Display> fmt::Display for Every<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Every(")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str(")")
    }
}

#[cfg(feature = "serde")]
impl<B: Serialize> Serialize for Every<B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, B: Deserialize<'de>> Deserialize<'de> for Every<B> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<B>::deserialize(deserializer)?;
        Every::try_from(items).map_err(serde::de::Error::custom)
    }
}
