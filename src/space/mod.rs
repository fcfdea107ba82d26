//! Depth accounting and profiling
//!
//! A flattening traversal holds one frame per active nesting level, so its
//! memory is bounded by the deepest nesting it has walked, not by the number
//! of leaves. These types track that figure.

mod tracker;

pub(crate) use tracker::DepthTracker;

use crate::node::NodeKind;

/// Detailed traversal profile (if enabled)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraversalProfile {
    /// Maximum number of frames held at once
    pub max_depth: usize,

    /// Frames pushed (root frame included)
    pub frames_pushed: usize,
    /// Frames popped after running dry
    pub frames_popped: usize,

    /// Leaves handed to the caller
    pub leaves_yielded: usize,

    /// Iterator nodes descended into
    pub iter_nodes: usize,
    /// Sequence nodes descended into
    pub seq_nodes: usize,
    /// Array nodes descended into
    pub array_nodes: usize,
    /// Leaf nodes buffered in the lookahead slot
    pub leaf_nodes: usize,
}

impl TraversalProfile {
    /// Verify the traversal never went deeper than `bound`
    pub fn satisfies_depth_bound(&self, bound: usize) -> bool {
        self.max_depth <= bound
    }

    /// Total nodes classified so far
    pub fn nodes_classified(&self) -> usize {
        self.iter_nodes + self.seq_nodes + self.array_nodes + self.leaf_nodes
    }

    /// Generate report
    pub fn report(&self) -> String {
        format!(
            "Max depth: {} frames\nFrames: {} pushed, {} popped\nLeaves yielded: {}\nNodes:\n  Iter: {}\n  Seq: {}\n  Array: {}\n  Leaf: {}",
            self.max_depth,
            self.frames_pushed,
            self.frames_popped,
            self.leaves_yielded,
            self.iter_nodes,
            self.seq_nodes,
            self.array_nodes,
            self.leaf_nodes
        )
    }

    pub(crate) fn count_node(&mut self, kind: NodeKind) {
        match kind {
            NodeKind::Iter => self.iter_nodes += 1,
            NodeKind::Seq => self.seq_nodes += 1,
            NodeKind::Array => self.array_nodes += 1,
            NodeKind::Leaf => self.leaf_nodes += 1,
        }
    }
}
