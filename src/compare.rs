//! Equality and ordering strategies.
//!
//! A set never stores its comparison function. Instead the comparison is a
//! zero-sized strategy type supplied as a type parameter, so the compiler
//! checks at the type level that a value type can be compared at all:
//!
//! - [`Equivalence`]: a symmetric equality predicate, used by
//!   [`UnorderedSet`](crate::UnorderedSet)
//! - [`StrictOrder`]: a strict ordering predicate, used by
//!   [`OrderedSet`](crate::OrderedSet)
//!
//! # Laws
//!
//! For an [`Equivalence`] `E` and all `a`, `b`, `c`:
//!
//! ```text
//! E::equivalent(a, a)
//! E::equivalent(a, b) == E::equivalent(b, a)
//! E::equivalent(a, b) && E::equivalent(b, c)  =>  E::equivalent(a, c)
//! ```
//!
//! For a [`StrictOrder`] `O` and all `a`, `b`, `c`:
//!
//! ```text
//! !O::less(a, a)
//! O::less(a, b) && O::less(b, c)  =>  O::less(a, c)
//! ```
//!
//! and the derived equivalence `!O::less(a, b) && !O::less(b, a)` must be
//! transitive (a strict weak order). These laws are preconditions; they are
//! not verified at runtime.
//!
//! # Examples
//!
//! A case-insensitive equality strategy:
//!
//! ```rust
//! use seqset::compare::Equivalence;
//! use seqset::UnorderedSet;
//!
//! struct IgnoreCase;
//!
//! impl Equivalence<String> for IgnoreCase {
//!     fn equivalent(left: &String, right: &String) -> bool {
//!         left.eq_ignore_ascii_case(right)
//!     }
//! }
//!
//! let mut names: UnorderedSet<String, IgnoreCase> = UnorderedSet::new();
//! names.insert("Ada".to_string()).insert("ADA".to_string());
//! assert_eq!(names.len(), 1);
//! ```

use std::marker::PhantomData;

/// A symmetric equality predicate over `T`.
///
/// Implementations must be reflexive, symmetric and transitive.
pub trait Equivalence<T: ?Sized> {
    /// Returns `true` if `left` and `right` denote the same set member.
    fn equivalent(left: &T, right: &T) -> bool;
}

/// A strict ordering predicate over `T`.
///
/// Implementations must be irreflexive and transitive, and the derived
/// equivalence (neither value less than the other) must be transitive.
pub trait StrictOrder<T: ?Sized> {
    /// Returns `true` if `left` sorts strictly before `right`.
    fn less(left: &T, right: &T) -> bool;
}

/// Equality through [`PartialEq`].
///
/// The default strategy of [`UnorderedSet`](crate::UnorderedSet).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Equal;

impl<T: PartialEq + ?Sized> Equivalence<T> for Equal {
    #[inline]
    fn equivalent(left: &T, right: &T) -> bool {
        left == right
    }
}

/// Ascending order through [`PartialOrd`].
///
/// The default strategy of [`OrderedSet`](crate::OrderedSet).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Less;

impl<T: PartialOrd + ?Sized> StrictOrder<T> for Less {
    #[inline]
    fn less(left: &T, right: &T) -> bool {
        left < right
    }
}

/// Descending order through [`PartialOrd`].
///
/// ```rust
/// use seqset::compare::Greater;
/// use seqset::OrderedSet;
///
/// let set: OrderedSet<i32, Greater> = [2, 9, 4].into_iter().collect();
/// assert_eq!(set.as_slice(), &[9, 4, 2]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greater;

impl<T: PartialOrd + ?Sized> StrictOrder<T> for Greater {
    #[inline]
    fn less(left: &T, right: &T) -> bool {
        left > right
    }
}

/// The equivalence derived from a strict order `O`.
///
/// Two values are equivalent when neither is less than the other. This is
/// how [`OrderedSet`](crate::OrderedSet) decides membership; raw equality of
/// the values is never consulted.
///
/// ```rust
/// use seqset::compare::{Equivalence, Less, OrderEquivalence};
///
/// assert!(<OrderEquivalence<Less> as Equivalence<f64>>::equivalent(&1.0, &1.0));
/// assert!(!<OrderEquivalence<Less> as Equivalence<f64>>::equivalent(&1.0, &2.0));
/// ```
pub struct OrderEquivalence<O>(PhantomData<fn() -> O>);

impl<T: ?Sized, O: StrictOrder<T>> Equivalence<T> for OrderEquivalence<O> {
    #[inline]
    fn equivalent(left: &T, right: &T) -> bool {
        !O::less(left, right) && !O::less(right, left)
    }
}
