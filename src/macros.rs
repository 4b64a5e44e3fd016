//! Construction macros for set literals.

/// Builds an [`UnorderedSet`](crate::UnorderedSet) from a list of values.
///
/// Values are inserted left to right with duplicate rejection, using the
/// default [`Equal`](crate::compare::Equal) strategy.
///
/// # Examples
///
/// ```rust
/// use seqset::unordered_set;
///
/// let set = unordered_set![3, 1, 3, 2];
/// assert_eq!(set.as_slice(), &[3, 1, 2]);
///
/// let nested = unordered_set![unordered_set![7, 1, 2, 3], unordered_set![1, 2, 4]];
/// assert_eq!(nested.len(), 2);
/// ```
#[macro_export]
macro_rules! unordered_set {
    () => {
        $crate::UnorderedSet::<_>::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut set = $crate::UnorderedSet::<_>::new();
        $(
            set.insert($value);
        )+
        set
    }};
}

/// Builds an [`OrderedSet`](crate::OrderedSet) from a list of values.
///
/// Values are inserted at their sorted position with duplicate rejection,
/// using the default [`Less`](crate::compare::Less) strategy.
///
/// # Examples
///
/// ```rust
/// use seqset::ordered_set;
///
/// let set = ordered_set![6464, 1, 2, 3];
/// assert_eq!(set.as_slice(), &[1, 2, 3, 6464]);
/// ```
#[macro_export]
macro_rules! ordered_set {
    () => {
        $crate::OrderedSet::<_>::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut set = $crate::OrderedSet::<_>::new();
        $(
            set.insert($value);
        )+
        set
    }};
}

#[cfg(test)]
mod tests {
    use crate::{OrderedSet, UnorderedSet};
    use rstest::rstest;

    #[rstest]
    fn test_empty_macros() {
        let unordered: UnorderedSet<u8> = unordered_set![];
        let ordered: OrderedSet<u8> = ordered_set![];
        assert!(unordered.is_empty());
        assert!(ordered.is_empty());
    }

    #[rstest]
    fn test_trailing_comma_is_accepted() {
        let set = ordered_set!["pear", "apple", "fig",];
        assert_eq!(set.as_slice(), &["apple", "fig", "pear"]);
    }
}
