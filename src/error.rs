//! Error types for set operations.
//!
//! Almost every operation on a set is total. The exceptions are
//! [`Set::combinations`](crate::Set::combinations), which rejects a
//! selection size larger than the set, and
//! [`RenderOptions::parse`](crate::render::RenderOptions::parse), which
//! rejects malformed format specifiers.

use thiserror::Error;

/// Errors produced by this crate.
///
/// # Examples
///
/// ```rust
/// use seqset::{SetError, UnorderedSet};
///
/// let set: UnorderedSet<i32> = [1, 2].into_iter().collect();
/// let error = set.combinations(3).unwrap_err();
/// assert_eq!(
///     error,
///     SetError::CombinationSizeOutOfRange { requested: 3, available: 2 }
/// );
/// assert_eq!(
///     error.to_string(),
///     "combination size 3 is out of range for a set of 2 elements"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SetError {
    /// A combination size exceeded the number of elements in the set.
    #[error("combination size {requested} is out of range for a set of {available} elements")]
    CombinationSizeOutOfRange {
        /// The requested selection size.
        requested: usize,
        /// The number of elements available.
        available: usize,
    },

    /// A render format specifier could not be parsed.
    #[error("invalid render specifier {spec:?}: {reason}")]
    InvalidRenderSpec {
        /// The specifier as given.
        spec: String,
        /// Why it was rejected.
        reason: String,
    },
}
