//! Property-based tests for set algebra laws.
//!
//! These tests verify that both set flavours satisfy the properties
//! expected of a set, whatever the insertion order of their elements.

use proptest::prelude::*;
use seqset::{OrderedSet, UnorderedSet};

fn binomial(n: usize, k: usize) -> usize {
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

// =============================================================================
// Union Commutativity Law
// Description: a + b == b + a as sets
// =============================================================================

proptest! {
    #[test]
    fn prop_union_commutative(
        left in prop::collection::vec(any::<i16>(), 0..30),
        right in prop::collection::vec(any::<i16>(), 0..30)
    ) {
        let left: UnorderedSet<i16> = left.into_iter().collect();
        let right: UnorderedSet<i16> = right.into_iter().collect();

        prop_assert_eq!(&left + &right, &right + &left);
    }
}

// =============================================================================
// Union Membership Law
// Description: x in a + b iff x in a or x in b, with no duplicates
// =============================================================================

proptest! {
    #[test]
    fn prop_union_membership(
        left in prop::collection::vec(0..20i32, 0..20),
        right in prop::collection::vec(0..20i32, 0..20),
        probe in 0..20i32
    ) {
        let left: UnorderedSet<i32> = left.into_iter().collect();
        let right: UnorderedSet<i32> = right.into_iter().collect();
        let union = &left + &right;

        prop_assert_eq!(union.contains(&probe), left.contains(&probe) || right.contains(&probe));
        prop_assert!(union.count(&probe) <= 1);
    }
}

// =============================================================================
// Difference Law
// Description: x in a - b iff x in a and x not in b
// =============================================================================

proptest! {
    #[test]
    fn prop_difference_membership(
        left in prop::collection::vec(0..20i32, 0..20),
        right in prop::collection::vec(0..20i32, 0..20),
        probe in 0..20i32
    ) {
        let left: UnorderedSet<i32> = left.into_iter().collect();
        let right: UnorderedSet<i32> = right.into_iter().collect();
        let difference = &left - &right;

        prop_assert_eq!(
            difference.contains(&probe),
            left.contains(&probe) && !right.contains(&probe)
        );
        prop_assert!(difference.is_subset(&left));
    }
}

// =============================================================================
// Intersection Bound Law
// Description: a & b is contained in both and no larger than either
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_bound(
        left in prop::collection::vec(0..15i32, 0..20),
        right in prop::collection::vec(0..15i32, 0..20)
    ) {
        let left: UnorderedSet<i32> = left.into_iter().collect();
        let right: UnorderedSet<i32> = right.into_iter().collect();
        let both = left.intersection(&right);

        prop_assert!(both.len() <= left.len().min(right.len()));
        prop_assert!(both.is_subset(&left));
        prop_assert!(both.is_subset(&right));
        prop_assert_eq!(&both, &right.intersection(&left));
    }
}

// =============================================================================
// Strict Containment Law
// Description: contains_set(other, true) iff the sets are equal
// =============================================================================

proptest! {
    #[test]
    fn prop_strict_containment_iff_equal(
        left in prop::collection::vec(0..6i32, 0..8),
        right in prop::collection::vec(0..6i32, 0..8)
    ) {
        let left: UnorderedSet<i32> = left.into_iter().collect();
        let right: UnorderedSet<i32> = right.into_iter().collect();

        prop_assert_eq!(left.contains_set(&right, true), left == right);
        prop_assert_eq!(left == right, right == left);
    }
}

proptest! {
    #[test]
    fn prop_equality_ignores_insertion_order(
        elements in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let forward: UnorderedSet<i32> = elements.iter().copied().collect();
        let backward: UnorderedSet<i32> = elements.iter().rev().copied().collect();

        prop_assert_eq!(forward, backward);
    }
}

// =============================================================================
// Sortedness Law
// Description: an OrderedSet stays ascending after any sequence of inserts
// and erasures, duplicates included, and agrees with a sorted Vec model
// =============================================================================

#[derive(Debug, Clone)]
enum Operation {
    Insert(i32),
    InsertDuplicate(i32),
    Erase(i32),
    EraseAll(i32),
    EraseAt(usize),
    EraseRange(usize, usize),
    RetainAtLeast(i32),
    Unique,
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        (-10..10i32).prop_map(Operation::Insert),
        (-10..10i32).prop_map(Operation::InsertDuplicate),
        (-10..10i32).prop_map(Operation::Erase),
        (-10..10i32).prop_map(Operation::EraseAll),
        (0..40usize).prop_map(Operation::EraseAt),
        (0..40usize, 0..40usize).prop_map(|(start, end)| Operation::EraseRange(start, end)),
        (-10..10i32).prop_map(Operation::RetainAtLeast),
        Just(Operation::Unique),
    ]
}

/// Applies `operation` to a sorted `Vec` standing in for the set.
fn apply_to_model(model: &mut Vec<i32>, operation: &Operation) {
    match *operation {
        Operation::Insert(value) => {
            if !model.contains(&value) {
                let index = model.partition_point(|element| *element < value);
                model.insert(index, value);
            }
        }
        Operation::InsertDuplicate(value) => {
            let index = model.partition_point(|element| *element < value);
            model.insert(index, value);
        }
        Operation::Erase(value) => {
            if let Some(index) = model.iter().position(|element| *element == value) {
                model.remove(index);
            }
        }
        Operation::EraseAll(value) => model.retain(|element| *element != value),
        Operation::EraseAt(index) => {
            if index < model.len() {
                model.remove(index);
            }
        }
        Operation::EraseRange(start, end) => {
            let end = end.min(model.len());
            let start = start.min(end);
            model.drain(start..end);
        }
        Operation::RetainAtLeast(threshold) => model.retain(|element| *element >= threshold),
        Operation::Unique => model.dedup(),
    }
}

proptest! {
    #[test]
    fn prop_ordered_set_stays_sorted(
        operations in prop::collection::vec(operation(), 0..100)
    ) {
        let mut set: OrderedSet<i32> = OrderedSet::new();
        let mut model: Vec<i32> = Vec::new();

        for operation in &operations {
            match *operation {
                Operation::Insert(value) => {
                    set.insert(value);
                }
                Operation::InsertDuplicate(value) => {
                    set.insert_duplicate(value);
                }
                Operation::Erase(value) => {
                    set.erase(&value);
                }
                Operation::EraseAll(value) => {
                    set.erase_all(&value);
                }
                Operation::EraseAt(index) => {
                    set.erase_at(index);
                }
                Operation::EraseRange(start, end) => {
                    set.erase_range(start..end);
                }
                Operation::RetainAtLeast(threshold) => set.retain(|element| *element >= threshold),
                Operation::Unique => {
                    set.unique();
                }
            }
            apply_to_model(&mut model, operation);

            prop_assert!(set.as_slice().windows(2).all(|pair| pair[0] <= pair[1]));
        }

        prop_assert_eq!(set.into_vec(), model);
    }
}

// =============================================================================
// Unique Law
// Description: unique keeps exactly the first occurrence of each value
// =============================================================================

proptest! {
    #[test]
    fn prop_unique_keeps_first_occurrences(
        elements in prop::collection::vec(0..10i32, 0..30)
    ) {
        let mut set: UnorderedSet<i32> = UnorderedSet::new();
        for element in &elements {
            set.insert_duplicate(*element);
        }
        set.unique();

        let mut expected: Vec<i32> = Vec::new();
        for element in elements {
            if !expected.contains(&element) {
                expected.push(element);
            }
        }
        prop_assert_eq!(set.as_slice(), expected.as_slice());
    }
}

// =============================================================================
// Combination Count Law
// Description: combinations(k) has C(n, k) members, each a k-subset
// =============================================================================

proptest! {
    #[test]
    fn prop_combination_count(
        elements in prop::collection::vec(any::<u8>(), 0..8),
        size in 0..9usize
    ) {
        let set: UnorderedSet<u8> = elements.into_iter().collect();

        match set.combinations(size) {
            Ok(selections) => {
                prop_assert!(size <= set.len());
                prop_assert_eq!(selections.len(), binomial(set.len(), size));
                for selection in &selections {
                    prop_assert_eq!(selection.len(), size);
                    prop_assert!(selection.is_subset(&set));
                }
            }
            Err(_) => prop_assert!(size > set.len()),
        }
    }
}

// =============================================================================
// Product Size Law
// Description: product of sets of distinct values has |a| * |b| pairs when
// the operands are disjoint
// =============================================================================

proptest! {
    #[test]
    fn prop_product_of_disjoint_sets(
        left in prop::collection::vec(0..10i32, 0..6),
        right in prop::collection::vec(10..20i32, 0..6)
    ) {
        let left: UnorderedSet<i32> = left.into_iter().collect();
        let right: UnorderedSet<i32> = right.into_iter().collect();

        prop_assert_eq!((&left * &right).len(), left.len() * right.len());
    }
}
