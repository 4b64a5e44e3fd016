//! Sequence-backed sets.
//!
//! [`Set<T, M>`] stores its elements in a `Vec` and decides membership
//! through a [`Membership`] strategy `M` chosen at the type level. Two
//! aliases cover the common cases:
//!
//! - [`UnorderedSet<T, E>`]: insertion order, equality predicate `E`
//!   (default [`Equal`])
//! - [`OrderedSet<T, O>`]: ascending order under strict order `O`
//!   (default [`Less`]), equivalence derived from `O`
//!
//! Membership tests scan the sequence, so any element type that offers only
//! equality or only an ordering can be stored. No hashing is involved.
//!
//! # Time Complexity
//!
//! | Operation      | `UnorderedSet` | `OrderedSet`        |
//! |----------------|----------------|---------------------|
//! | `insert`       | O(n)           | O(log n) + O(n) move|
//! | `find`         | O(n)           | O(log n)            |
//! | `count`        | O(n)           | O(log n + k)        |
//! | `erase`        | O(n)           | O(n)                |
//! | `union`        | O(n * m)       | O(m * (log n + n))  |
//! | `intersection` | O(n * m)       | O(min(n, m) log max)|
//! | `unique`       | O(n^2)         | O(n)                |
//!
//! # Examples
//!
//! ```rust
//! use seqset::{UnorderedSet, unordered_set};
//!
//! let first: UnorderedSet<i32> = unordered_set![1, 2, 3];
//! let second: UnorderedSet<i32> = unordered_set![1, 2, 4];
//!
//! assert_eq!(&first - &second, unordered_set![3]);
//! assert_eq!(&second - &first, unordered_set![4]);
//! assert_eq!((&first + &second).count(&1), 1);
//! ```
//!
//! Sets nest:
//!
//! ```rust
//! use seqset::{UnorderedSet, unordered_set};
//!
//! let nested: UnorderedSet<UnorderedSet<i32>> =
//!     unordered_set![unordered_set![7, 1, 2, 3], unordered_set![1, 2, 4]];
//!
//! assert_eq!(nested.count(&unordered_set![4, 2, 1]), 1);
//! assert_eq!(nested.count(&unordered_set![1, 2, 3]), 0);
//! ```
//!
//! [`Equal`]: crate::compare::Equal
//! [`Less`]: crate::compare::Less

mod algebra;
mod iter;
mod membership;
mod relation;

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Bound, RangeBounds};

use crate::compare::{Equal, Less};

pub use iter::{IntoIter, Iter};
pub use membership::{Membership, Sorted, Unordered};

/// An insertion-ordered set with equality predicate `E`.
pub type UnorderedSet<T, E = Equal> = Set<T, Unordered<E>>;

/// A sorted set with strict order `O`.
///
/// Iteration is always ascending under `O`, and two values are the same
/// member when neither is less than the other.
pub type OrderedSet<T, O = Less> = Set<T, Sorted<O>>;

/// A set of `T` stored as a sequence, with membership decided by `M`.
///
/// Most code uses this type through the [`UnorderedSet`] and [`OrderedSet`]
/// aliases.
///
/// The backing sequence is never exposed mutably, so an [`OrderedSet`]
/// stays sorted. Mutating operations return `&mut Self` for chaining.
///
/// # Copy and Move
///
/// [`Clone`] copies the backing sequence as is. [`Set::deep_copy`] instead
/// rebuilds the set by inserting every element one at a time. Moving out
/// with [`std::mem::take`] leaves an empty set behind.
///
/// # Examples
///
/// ```rust
/// use seqset::OrderedSet;
///
/// let mut set: OrderedSet<i32> = OrderedSet::new();
/// set.insert(6464).insert(1).insert(3).insert(2).insert(1);
///
/// assert_eq!(set.as_slice(), &[1, 2, 3, 6464]);
/// assert_eq!(set.first(), Some(&1));
/// ```
pub struct Set<T, M> {
    elements: Vec<T>,
    membership: PhantomData<fn() -> M>,
}

impl<T, M> Set<T, M> {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
            membership: PhantomData,
        }
    }

    /// Creates an empty set with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            membership: PhantomData,
        }
    }

    /// Returns the number of stored elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns an iterator over the elements in storage order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.elements.iter())
    }

    /// Returns the elements as a read-only slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns the element at `index` in storage order.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns the first element. For an [`OrderedSet`] this is the minimum.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the last element. For an [`OrderedSet`] this is the maximum.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Consumes the set, returning its backing sequence.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Removes the element at `index`, returning it.
    ///
    /// Returns `None` if `index` is out of bounds.
    ///
    /// ```rust
    /// use seqset::UnorderedSet;
    ///
    /// let mut set = UnorderedSet::<char>::from(['a', 'b', 'c']);
    /// assert_eq!(set.erase_at(1), Some('b'));
    /// assert_eq!(set.erase_at(5), None);
    /// assert_eq!(set.as_slice(), &['a', 'c']);
    /// ```
    pub fn erase_at(&mut self, index: usize) -> Option<T> {
        (index < self.elements.len()).then(|| self.elements.remove(index))
    }

    /// Removes the elements whose positions fall in `range`, returning how
    /// many were removed.
    ///
    /// Bounds beyond the end of the set are clamped, so this never panics.
    ///
    /// ```rust
    /// use seqset::UnorderedSet;
    ///
    /// let mut set = UnorderedSet::<i32>::from([10, 20, 30, 40]);
    /// assert_eq!(set.erase_range(1..3), 2);
    /// assert_eq!(set.as_slice(), &[10, 40]);
    /// assert_eq!(set.erase_range(1..99), 1);
    /// ```
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) -> usize {
        let length = self.elements.len();
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => length,
        }
        .min(length);
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(end);

        self.elements.drain(start..end).count()
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    pub fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.elements.retain(predicate);
    }
}

impl<T, M: Membership<T>> Set<T, M> {
    /// Returns the position of the first element equivalent to `value`.
    ///
    /// `None` plays the role of the end position.
    ///
    /// ```rust
    /// use seqset::UnorderedSet;
    ///
    /// let set = UnorderedSet::<i32>::from([4, 8, 15]);
    /// assert_eq!(set.find(&8), Some(1));
    /// assert_eq!(set.find(&16), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn find(&self, value: &T) -> Option<usize> {
        M::locate(&self.elements, value)
    }

    /// Returns the number of stored elements equivalent to `value`.
    ///
    /// This is 0 or 1 unless [`insert_duplicate`](Self::insert_duplicate)
    /// has been used.
    #[inline]
    #[must_use]
    pub fn count(&self, value: &T) -> usize {
        M::occurrences(&self.elements, value)
    }

    /// Returns `true` if an element equivalent to `value` is stored.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Inserts `value` unless an equivalent element is already stored.
    ///
    /// ```rust
    /// use seqset::UnorderedSet;
    ///
    /// let mut set: UnorderedSet<i32> = UnorderedSet::new();
    /// set.insert(3).insert(1).insert(3);
    /// assert_eq!(set.as_slice(), &[3, 1]);
    /// ```
    pub fn insert(&mut self, value: T) -> &mut Self {
        if !self.contains(&value) {
            self.place(value);
        }
        self
    }

    /// Inserts `value` even if an equivalent element is already stored.
    ///
    /// This turns the set into a multiset for `value`; [`count`](Self::count)
    /// and [`erase_all`](Self::erase_all) account for the extra copies and
    /// [`unique`](Self::unique) removes them again.
    pub fn insert_duplicate(&mut self, value: T) -> &mut Self {
        self.place(value);
        self
    }

    fn place(&mut self, value: T) {
        let index = M::insertion_point(&self.elements, &value);
        self.elements.insert(index, value);
    }

    /// Removes the first element equivalent to `value`, returning the
    /// number removed (0 or 1).
    pub fn erase(&mut self, value: &T) -> usize {
        match self.find(value) {
            Some(index) => {
                self.elements.remove(index);
                1
            }
            None => 0,
        }
    }

    /// Removes every element equivalent to `value`, returning the number
    /// removed.
    pub fn erase_all(&mut self, value: &T) -> usize {
        let before = self.elements.len();
        self.elements.retain(|element| !M::equivalent(element, value));
        before - self.elements.len()
    }

    /// Removes elements equivalent to an earlier element, keeping the first
    /// occurrence of each.
    ///
    /// ```rust
    /// use seqset::UnorderedSet;
    ///
    /// let mut set: UnorderedSet<i32> = UnorderedSet::new();
    /// set.insert_duplicate(2).insert_duplicate(1).insert_duplicate(2);
    /// assert_eq!(set.unique().as_slice(), &[2, 1]);
    /// ```
    pub fn unique(&mut self) -> &mut Self {
        M::deduplicate(&mut self.elements);
        self
    }
}

impl<T: Clone, M: Membership<T>> Set<T, M> {
    /// Rebuilds `source` by inserting a clone of each element in turn.
    ///
    /// Unlike [`Clone`], which copies the backing sequence directly, this
    /// goes through [`insert`](Self::insert), so duplicates left by
    /// [`insert_duplicate`](Self::insert_duplicate) are dropped.
    #[must_use]
    pub fn deep_copy(source: &Self) -> Self {
        let mut copy = Self::with_capacity(source.len());
        for element in source {
            copy.insert(element.clone());
        }
        copy
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, M> Default for Set<T, M> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, M> Clone for Set<T, M> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            membership: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.elements.clone_from(&source.elements);
    }
}

impl<T: fmt::Debug, M> fmt::Debug for Set<T, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T, M: Membership<T>> Extend<T> for Set<T, M> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T, M: Membership<T>> FromIterator<T> for Set<T, M> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity(iter.size_hint().0);
        set.extend(iter);
        set
    }
}

impl<T, M: Membership<T>, const N: usize> From<[T; N]> for Set<T, M> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, M: Membership<T>> From<Vec<T>> for Set<T, M> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, M> IntoIterator for Set<T, M> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.elements.into_iter())
    }
}

impl<'a, T, M> IntoIterator for &'a Set<T, M> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, M> serde::Serialize for Set<T, M> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SetVisitor<T, M> {
    marker: PhantomData<fn() -> (T, M)>,
}

#[cfg(feature = "serde")]
impl<'de, T, M> serde::de::Visitor<'de> for SetVisitor<T, M>
where
    T: serde::Deserialize<'de>,
    M: Membership<T>,
{
    type Value = Set<T, M>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of set elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Every element goes through insert, so duplicates collapse and
        // sorted sets are re-sorted.
        let mut set = Set::new();
        while let Some(element) = seq.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, M> serde::Deserialize<'de> for Set<T, M>
where
    T: serde::Deserialize<'de>,
    M: Membership<T>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor {
            marker: PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
