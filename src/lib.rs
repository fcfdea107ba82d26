//! # Lazy depth-first flattening
//!
//! Turns an ordered list of heterogeneous items, some of which are nested
//! sequences, arrays or iterators, into one lazy sequence of leaf values.
//!
//! ## Core Algorithm
//!
//! 1. **Classification**: every pulled item is a [`Node`]: iterator, sequence,
//!    array or leaf, checked in that order
//! 2. **Explicit frame stack**: a container pushes a frame; a dry frame is popped
//! 3. **Lookahead slot**: at most one computed leaf is buffered, so
//!    [`Flatten::has_next`] can be called any number of times
//!
//! Result: memory is O(depth), independent of the number of leaves
//!
//! ## Usage Example
//!
//! ```
//! use deepflat::{flatten, Flatten, Node};
//!
//! let inner = Flatten::new(vec![Node::leaf(8), Node::leaf(9)]);
//! let mut leaves = flatten![[], 1, [[], [2, 3]], 4, { Node::leaves(vec![5, 6]) }, 7, { inner }];
//!
//! assert_eq!(leaves.next_leaf(), Ok(1));
//! assert_eq!(leaves.collect::<Vec<_>>(), vec![2, 3, 4, 5, 6, 7, 8, 9]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod node;       // Item classification
pub mod traversal;  // Frame stack and lookahead
pub mod space;      // Depth accounting utilities
mod macros;

// Re-exports for convenience
pub use node::{Node, NodeKind};
pub use space::TraversalProfile;
pub use traversal::{Flatten, TraversalConfig};

use thiserror::Error;

/// Errors reported by a [`Flatten`] traversal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlattenError {
    /// No leaves remain
    #[error("traversal exhausted: no more leaves")]
    Exhausted,

    /// Operation not offered by a read-only, forward-only traversal
    #[error("unsupported operation: {operation}")]
    Unsupported {
        /// Name of the rejected operation
        operation: &'static str,
    },
}
