//! Set algebra: union, difference, intersection, product and combinations.
//!
//! Every operation is defined through the membership strategy of the
//! operands, so results of operations on an
//! [`OrderedSet`](crate::OrderedSet) stay sorted.
//!
//! | Operator        | Named method                                  |
//! |-----------------|-----------------------------------------------|
//! | `a + b`, `+=`   | [`union`](Set::union), [`union_with`](Set::union_with) |
//! | `a - b`, `-=`   | [`difference`](Set::difference), [`difference_with`](Set::difference_with) |
//! | `a * b`         | [`product`](Set::product)                     |
//! |                 | [`intersection`](Set::intersection)           |
//! |                 | [`combinations`](Set::combinations)           |
//!
//! A single element may also be the right operand: `set + value` and
//! `set += value` insert it, `set - &value` and `set -= &value` erase its
//! first occurrence.

use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use super::{Membership, Set, UnorderedSet};
use crate::error::SetError;

impl<T, M: Membership<T>> Set<T, M> {
    /// Removes every element equivalent to some element of `other`.
    pub fn difference_with(&mut self, other: &Self) -> &mut Self {
        self.elements.retain(|element| !other.contains(element));
        self
    }
}

impl<T: Clone, M: Membership<T>> Set<T, M> {
    /// Inserts a clone of every element of `other`.
    ///
    /// Elements equivalent to one already stored are skipped, so the left
    /// representative wins.
    pub fn union_with(&mut self, other: &Self) -> &mut Self {
        for element in other {
            self.insert(element.clone());
        }
        self
    }

    /// Returns a set holding every member of `self` and of `other`.
    ///
    /// ```rust
    /// use seqset::UnorderedSet;
    ///
    /// let left = UnorderedSet::<i32>::from([1, 2, 3]);
    /// let right = UnorderedSet::<i32>::from([1, 2, 4]);
    /// assert_eq!(left.union(&right).as_slice(), &[1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.union_with(other);
        result
    }

    /// Returns the members of `self` that are not members of `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.difference_with(other);
        result
    }

    /// Returns the members present in both `self` and `other`.
    ///
    /// The smaller operand is enumerated and the larger one probed, and the
    /// result keeps the storage order of the enumerated operand. On equal
    /// sizes `other` is enumerated. Each member appears once, even if the
    /// enumerated operand holds duplicates.
    ///
    /// ```rust
    /// use seqset::UnorderedSet;
    ///
    /// let left = UnorderedSet::<i32>::from([5, 1, 4, 2]);
    /// let right = UnorderedSet::<i32>::from([2, 5, 8]);
    /// assert_eq!(left.intersection(&right).as_slice(), &[2, 5]);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (source, probe) = if other.len() <= self.len() {
            (other, self)
        } else {
            (self, other)
        };

        let mut result = Self::new();
        for element in source {
            if probe.contains(element) {
                result.insert(element.clone());
            }
        }
        result
    }

    /// Returns the Cartesian product as a set of pairs.
    ///
    /// Each pair `{left, right}` is itself a set of the operands' type, so a
    /// pair of equivalent values collapses to a single element. The result
    /// is empty if either operand is empty.
    ///
    /// ```rust
    /// use seqset::{UnorderedSet, unordered_set};
    ///
    /// let left: UnorderedSet<i32> = unordered_set![1, 2];
    /// let right: UnorderedSet<i32> = unordered_set![3];
    ///
    /// assert_eq!(
    ///     left.product(&right),
    ///     unordered_set![unordered_set![1, 3], unordered_set![2, 3]]
    /// );
    /// ```
    #[must_use]
    pub fn product(&self, other: &Self) -> UnorderedSet<Self> {
        let mut pairs: UnorderedSet<Self> =
            UnorderedSet::with_capacity(self.len().saturating_mul(other.len()));
        for left in self {
            for right in other {
                let mut pair = Self::with_capacity(2);
                pair.insert(left.clone()).insert(right.clone());
                pairs.insert(pair);
            }
        }
        tracing::trace!(
            left = self.len(),
            right = other.len(),
            pairs = pairs.len(),
            "built cartesian product"
        );
        pairs
    }

    /// Returns every sub-selection of `size` elements.
    ///
    /// Selections are enumerated in lexicographic order of their element
    /// positions. `combinations(0)` yields a single empty selection.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::CombinationSizeOutOfRange`] if `size` exceeds the
    /// number of elements.
    ///
    /// ```rust
    /// use seqset::{UnorderedSet, unordered_set};
    ///
    /// let set: UnorderedSet<char> = unordered_set!['a', 'b', 'c'];
    /// let pairs = set.combinations(2).unwrap();
    ///
    /// assert_eq!(
    ///     pairs,
    ///     unordered_set![
    ///         unordered_set!['a', 'b'],
    ///         unordered_set!['a', 'c'],
    ///         unordered_set!['b', 'c'],
    ///     ]
    /// );
    /// assert!(set.combinations(4).is_err());
    /// ```
    pub fn combinations(&self, size: usize) -> Result<UnorderedSet<Self>, SetError> {
        let available = self.len();
        if size > available {
            tracing::debug!(size, available, "rejected combination size");
            return Err(SetError::CombinationSizeOutOfRange {
                requested: size,
                available,
            });
        }

        let mut positions: Vec<usize> = (0..size).collect();
        let mut selections: UnorderedSet<Self> = UnorderedSet::new();
        loop {
            let selection: Self = positions
                .iter()
                .map(|&position| self.elements[position].clone())
                .collect();
            selections.insert(selection);

            if !advance_positions(&mut positions, available) {
                break;
            }
        }

        tracing::trace!(
            size,
            available,
            selections = selections.len(),
            "enumerated combinations"
        );
        Ok(selections)
    }
}

/// Moves `positions` to the next ascending selection out of `available`
/// slots, returning `false` once the last selection has been reached.
///
/// The rightmost position that can still grow is incremented and every
/// position to its right is reset to follow it consecutively.
fn advance_positions(positions: &mut [usize], available: usize) -> bool {
    let size = positions.len();
    for index in (0..size).rev() {
        let ceiling = available - (size - index);
        if positions[index] < ceiling {
            positions[index] += 1;
            let base = positions[index];
            for (offset, slot) in positions[index + 1..].iter_mut().enumerate() {
                *slot = base + offset + 1;
            }
            return true;
        }
    }
    false
}

// =============================================================================
// Operators
// =============================================================================

impl<T: Clone, M: Membership<T>> Add<&Set<T, M>> for &Set<T, M> {
    type Output = Set<T, M>;

    fn add(self, rhs: &Set<T, M>) -> Self::Output {
        self.union(rhs)
    }
}

impl<T: Clone, M: Membership<T>> Add<&Set<T, M>> for Set<T, M> {
    type Output = Self;

    fn add(mut self, rhs: &Set<T, M>) -> Self::Output {
        self.union_with(rhs);
        self
    }
}

impl<T, M: Membership<T>> Add for Set<T, M> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.extend(rhs);
        self
    }
}

impl<T: Clone, M: Membership<T>> AddAssign<&Set<T, M>> for Set<T, M> {
    fn add_assign(&mut self, rhs: &Set<T, M>) {
        self.union_with(rhs);
    }
}

impl<T, M: Membership<T>> AddAssign for Set<T, M> {
    fn add_assign(&mut self, rhs: Self) {
        self.extend(rhs);
    }
}

impl<T: Clone, M: Membership<T>> Sub<&Set<T, M>> for &Set<T, M> {
    type Output = Set<T, M>;

    fn sub(self, rhs: &Set<T, M>) -> Self::Output {
        self.difference(rhs)
    }
}

impl<T, M: Membership<T>> Sub<&Set<T, M>> for Set<T, M> {
    type Output = Self;

    fn sub(mut self, rhs: &Set<T, M>) -> Self::Output {
        self.difference_with(rhs);
        self
    }
}

impl<T, M: Membership<T>> Sub for Set<T, M> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self.difference_with(&rhs);
        self
    }
}

impl<T, M: Membership<T>> SubAssign<&Set<T, M>> for Set<T, M> {
    fn sub_assign(&mut self, rhs: &Set<T, M>) {
        self.difference_with(rhs);
    }
}

impl<T, M: Membership<T>> SubAssign for Set<T, M> {
    fn sub_assign(&mut self, rhs: Self) {
        self.difference_with(&rhs);
    }
}

// =============================================================================
// Element Operators
// =============================================================================

/// `set + value` inserts `value` unless an equivalent element is stored.
impl<T, M: Membership<T>> Add<T> for Set<T, M> {
    type Output = Self;

    fn add(mut self, value: T) -> Self::Output {
        self.insert(value);
        self
    }
}

impl<T, M: Membership<T>> AddAssign<T> for Set<T, M> {
    fn add_assign(&mut self, value: T) {
        self.insert(value);
    }
}

/// `set - &value` removes the first element equivalent to `value`.
impl<T, M: Membership<T>> Sub<&T> for Set<T, M> {
    type Output = Self;

    fn sub(mut self, value: &T) -> Self::Output {
        self.erase(value);
        self
    }
}

impl<T, M: Membership<T>> SubAssign<&T> for Set<T, M> {
    fn sub_assign(&mut self, value: &T) {
        self.erase(value);
    }
}

impl<T: Clone, M: Membership<T>> Mul<&Set<T, M>> for &Set<T, M> {
    type Output = UnorderedSet<Set<T, M>>;

    fn mul(self, rhs: &Set<T, M>) -> Self::Output {
        self.product(rhs)
    }
}

impl<T: Clone, M: Membership<T>> Mul for Set<T, M> {
    type Output = UnorderedSet<Self>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.product(&rhs)
    }
}
