//! Containment, equality and ordering between sets.

use std::cmp::Ordering;

use super::{Membership, Set};

impl<T, M: Membership<T>> Set<T, M> {
    /// Returns `true` if every element of `other` is a member of `self`.
    ///
    /// With `strict`, the reverse containment is required as well, which
    /// makes this equivalent to `self == other`.
    ///
    /// ```rust
    /// use seqset::UnorderedSet;
    ///
    /// let set = UnorderedSet::<i32>::from([1, 2, 3]);
    /// let part = UnorderedSet::<i32>::from([3, 1]);
    ///
    /// assert!(set.contains_set(&part, false));
    /// assert!(!set.contains_set(&part, true));
    /// assert!(set.contains_set(&UnorderedSet::from([2, 3, 1]), true));
    /// ```
    #[must_use]
    pub fn contains_set(&self, other: &Self, strict: bool) -> bool {
        self.contains_all(other) && (!strict || other.contains_all(self))
    }

    fn contains_all(&self, other: &Self) -> bool {
        other.iter().all(|value| self.contains(value))
    }

    /// Returns `true` if every member of `self` is a member of `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        other.contains_all(self)
    }

    /// Returns `true` if `self` is a subset of `other` and the two differ.
    ///
    /// ```rust
    /// use seqset::OrderedSet;
    ///
    /// let small = OrderedSet::<i32>::from([1, 2]);
    /// let large = OrderedSet::<i32>::from([1, 2, 3]);
    ///
    /// assert!(small.is_proper_subset(&large));
    /// assert!(!large.is_proper_subset(&large));
    /// assert!(large.is_subset(&large));
    /// ```
    #[must_use]
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self != other && self.is_subset(other)
    }

    /// Returns `true` if every member of `other` is a member of `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.contains_all(other)
    }

    /// Returns `true` if `self` is a superset of `other` and the two differ.
    #[must_use]
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        self != other && self.is_superset(other)
    }
}

/// Set equality: equal sizes and mutual containment.
///
/// Storage order does not matter, so `{1, 2}` equals `{2, 1}`.
impl<T, M: Membership<T>> PartialEq for Set<T, M> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.contains_set(other, true)
    }
}

impl<T, M: Membership<T>> Eq for Set<T, M> {}

/// Ordering over stored representations.
///
/// Equal sets compare [`Ordering::Equal`]. Otherwise the smaller set sorts
/// first, and sets of the same size are compared element by element in
/// storage order using `T`'s own ordering, the first difference deciding.
/// Sets of the same size with no differing position but unequal membership
/// are incomparable.
///
/// For an [`OrderedSet`](crate::OrderedSet) the storage order is canonical,
/// so this is a consistent order over set values. For an
/// [`UnorderedSet`](crate::UnorderedSet) it depends on insertion order:
/// `{1, 2}` and `{2, 1}` are equal, yet `{1, 2} < {1, 3}` while
/// `{2, 1} > {1, 3}`.
impl<T: PartialOrd, M: Membership<T>> PartialOrd for Set<T, M> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }

        match self.len().cmp(&other.len()) {
            Ordering::Equal => {}
            unequal => return Some(unequal),
        }

        for (left, right) in self.iter().zip(other.iter()) {
            if left < right {
                return Some(Ordering::Less);
            }
            if left > right {
                return Some(Ordering::Greater);
            }
        }

        None
    }
}
