//! # seqset
//!
//! Sequence-backed sets with pluggable equality and ordering.
//!
//! ## Overview
//!
//! Standard library sets need either hashing or a total order. The sets in
//! this crate only need the comparison you give them:
//!
//! - **[`UnorderedSet`]**: insertion-ordered, membership by an equality
//!   predicate ([`compare::Equal`] by default)
//! - **[`OrderedSet`]**: always sorted, membership by the equivalence derived
//!   from a strict order ([`compare::Less`] by default)
//! - **Set algebra**: union (`+`), difference (`-`), intersection, Cartesian
//!   product (`*`) and k-combinations
//! - **Rendering**: `{ 1, 2, 3 }` style output with configurable layout, see
//!   [`render`]
//!
//! Membership tests scan the backing sequence. This trades lookup speed for
//! the ability to store values that cannot be hashed.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for sets, as sequences
//!
//! ## Example
//!
//! ```rust
//! use seqset::prelude::*;
//!
//! let first: UnorderedSet<i32> = unordered_set![1, 2, 3];
//! let second: UnorderedSet<i32> = unordered_set![1, 2, 4];
//! let symmetric = (&first - &second) + (&second - &first);
//!
//! assert_eq!(symmetric, unordered_set![3, 4]);
//! assert_eq!(symmetric.to_string(), "{ 3, 4 }");
//!
//! let sorted: OrderedSet<i32> = ordered_set![6464, 1, 2, 3];
//! assert_eq!(sorted.to_string(), "{ 1, 2, 3, 6464 }");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use seqset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compare::{Equal, Equivalence, Greater, Less, StrictOrder};
    pub use crate::error::SetError;
    pub use crate::render::RenderOptions;
    pub use crate::set::{Membership, OrderedSet, Set, UnorderedSet};
    pub use crate::{ordered_set, unordered_set};
}

mod macros;

pub mod compare;
pub mod error;
pub mod render;
mod set;

pub use error::SetError;
pub use set::{IntoIter, Iter, Membership, OrderedSet, Set, Sorted, Unordered, UnorderedSet};
