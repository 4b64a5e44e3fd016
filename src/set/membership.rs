//! Membership strategies.
//!
//! A [`Membership`] strategy decides two things for a [`Set`](super::Set):
//! which stored values count as the same member, and where a new value is
//! placed in the backing sequence. The two provided strategies are
//!
//! - [`Unordered`]: equality through an [`Equivalence`], appends at the end
//! - [`Sorted`]: equivalence derived from a [`StrictOrder`], keeps the
//!   sequence ascending
//!
//! The lookup hooks ([`locate`](Membership::locate),
//! [`occurrences`](Membership::occurrences) and
//! [`deduplicate`](Membership::deduplicate)) have linear default
//! implementations. [`Sorted`] refines them using the fact that equivalent
//! values are stored next to each other.

use std::marker::PhantomData;

use crate::compare::{Equivalence, OrderEquivalence, StrictOrder};

/// Strategy deciding equivalence and placement of set elements.
///
/// Every hook receives the current backing sequence of the set. A strategy
/// may rely on the sequence being exactly what its own
/// [`insertion_point`](Membership::insertion_point) produced.
pub trait Membership<T> {
    /// Returns `true` if `left` and `right` are the same set member.
    fn equivalent(left: &T, right: &T) -> bool;

    /// Returns the index at which `value` is stored on insertion.
    fn insertion_point(elements: &[T], value: &T) -> usize;

    /// Returns the first index holding a value equivalent to `value`.
    fn locate(elements: &[T], value: &T) -> Option<usize> {
        elements
            .iter()
            .position(|element| Self::equivalent(element, value))
    }

    /// Returns the number of stored values equivalent to `value`.
    fn occurrences(elements: &[T], value: &T) -> usize {
        elements
            .iter()
            .filter(|element| Self::equivalent(element, value))
            .count()
    }

    /// Removes every value equivalent to an earlier one, keeping the first
    /// of each class in its original position order.
    fn deduplicate(elements: &mut Vec<T>) {
        let mut kept: Vec<T> = Vec::with_capacity(elements.len());
        for element in elements.drain(..) {
            if !kept.iter().any(|existing| Self::equivalent(existing, &element)) {
                kept.push(element);
            }
        }
        *elements = kept;
    }
}

/// Insertion-ordered membership with equality predicate `E`.
///
/// See [`UnorderedSet`](crate::UnorderedSet).
pub struct Unordered<E>(PhantomData<fn() -> E>);

impl<T, E: Equivalence<T>> Membership<T> for Unordered<E> {
    #[inline]
    fn equivalent(left: &T, right: &T) -> bool {
        E::equivalent(left, right)
    }

    #[inline]
    fn insertion_point(elements: &[T], _value: &T) -> usize {
        elements.len()
    }
}

/// Sorted membership with strict order `O`.
///
/// Equivalence is [`OrderEquivalence<O>`]. See
/// [`OrderedSet`](crate::OrderedSet).
pub struct Sorted<O>(PhantomData<fn() -> O>);

impl<O> Sorted<O> {
    /// Index of the first element that is not less than `value`.
    fn lower_bound<T>(elements: &[T], value: &T) -> usize
    where
        O: StrictOrder<T>,
    {
        elements.partition_point(|element| O::less(element, value))
    }
}

impl<T, O: StrictOrder<T>> Membership<T> for Sorted<O> {
    #[inline]
    fn equivalent(left: &T, right: &T) -> bool {
        OrderEquivalence::<O>::equivalent(left, right)
    }

    #[inline]
    fn insertion_point(elements: &[T], value: &T) -> usize {
        Self::lower_bound(elements, value)
    }

    fn locate(elements: &[T], value: &T) -> Option<usize> {
        let index = Self::lower_bound(elements, value);
        elements
            .get(index)
            .filter(|candidate| !O::less(value, candidate))
            .map(|_| index)
    }

    fn occurrences(elements: &[T], value: &T) -> usize {
        let start = Self::lower_bound(elements, value);
        elements[start..]
            .iter()
            .take_while(|element| !O::less(value, element))
            .count()
    }

    fn deduplicate(elements: &mut Vec<T>) {
        elements.dedup_by(|later, earlier| Self::equivalent(earlier, later));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{Equal, Less};
    use rstest::rstest;

    type Plain = Unordered<Equal>;
    type Ascending = Sorted<Less>;

    #[rstest]
    fn test_unordered_appends_at_end() {
        assert_eq!(Plain::insertion_point(&[5, 1, 3], &0), 3);
        assert_eq!(Plain::insertion_point(&[], &0), 0);
    }

    #[rstest]
    #[case(&[], 4, 0)]
    #[case(&[1, 3, 5], 0, 0)]
    #[case(&[1, 3, 5], 4, 2)]
    #[case(&[1, 3, 5], 9, 3)]
    #[case(&[1, 3, 3, 5], 3, 1)]
    fn test_sorted_insertion_point(
        #[case] elements: &[i32],
        #[case] value: i32,
        #[case] expected: usize,
    ) {
        assert_eq!(Ascending::insertion_point(elements, &value), expected);
    }

    #[rstest]
    fn test_sorted_locate_finds_first_of_run() {
        let elements = [1, 2, 2, 2, 7];
        assert_eq!(Ascending::locate(&elements, &2), Some(1));
        assert_eq!(Ascending::locate(&elements, &7), Some(4));
        assert_eq!(Ascending::locate(&elements, &3), None);
        assert_eq!(Ascending::locate(&elements, &8), None);
    }

    #[rstest]
    fn test_sorted_occurrences_counts_run() {
        let elements = [1, 2, 2, 2, 7];
        assert_eq!(Ascending::occurrences(&elements, &2), 3);
        assert_eq!(Ascending::occurrences(&elements, &1), 1);
        assert_eq!(Ascending::occurrences(&elements, &4), 0);
    }

    #[rstest]
    fn test_default_deduplicate_keeps_first_seen() {
        let mut elements = vec![3, 1, 3, 2, 1, 3];
        Plain::deduplicate(&mut elements);
        assert_eq!(elements, vec![3, 1, 2]);
    }

    #[rstest]
    fn test_sorted_deduplicate_collapses_runs() {
        let mut elements = vec![1, 1, 2, 4, 4, 4, 9];
        Ascending::deduplicate(&mut elements);
        assert_eq!(elements, vec![1, 2, 4, 9]);
    }
}
