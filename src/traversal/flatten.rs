//! The flattening sequence

use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::config::TraversalConfig;
use super::frame::{Descend, Frame};
use crate::node::Node;
use crate::space::{DepthTracker, TraversalProfile};
use crate::FlattenError;

/// Lazy, depth-first, left-to-right flattening of nested [`Node`]s.
///
/// Leaves are produced one at a time as the caller pulls. Containers are
/// descended into when they are reached, never ahead of time, and each
/// active nesting level costs one frame on an explicit stack.
///
/// ```
/// use deepflat::{Flatten, Node};
///
/// let tail = vec![5, 6];
/// let mut leaves = Flatten::new(vec![
///     Node::seq(vec![]),
///     Node::leaf(&1),
///     Node::seq(vec![Node::seq(vec![]), Node::leaves(&[2, 3])]),
///     Node::leaf(&4),
///     Node::leaves(tail.iter()),
/// ]);
///
/// assert!(leaves.has_next());
/// assert_eq!(leaves.next_leaf(), Ok(&1));
/// assert_eq!(leaves.collect::<Vec<_>>(), vec![&2, &3, &4, &5, &6]);
/// ```
///
/// # Threading
///
/// A traversal is driven by whichever thread pulls from it and offers no
/// internal synchronization. Iterator nodes are boxed without a `Send`
/// bound, so `Flatten` is neither `Send` nor `Sync`; callers that need to
/// share one must rebuild it behind their own lock.
///
/// # Cycles
///
/// There is no cycle detection. An iterator node that, directly or
/// indirectly, yields a node leading back to itself never runs dry and the
/// traversal will not terminate.
pub struct Flatten<'a, T> {
    /// Active frames; the last one is the most deeply nested.
    frames: Vec<Frame<'a, T>>,

    /// Next leaf, once computed and not yet handed out.
    lookahead: Option<T>,

    tracker: DepthTracker,
    config: TraversalConfig,
}

impl<'a, T> Flatten<'a, T> {
    /// Flatten `items` in order with the default configuration.
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Node<'a, T>>,
        I::IntoIter: 'a,
    {
        Self::with_config(items, TraversalConfig::default())
    }

    /// Flatten `items` in order.
    ///
    /// The top-level items are pulled lazily like any other iterator node.
    pub fn with_config<I>(items: I, config: TraversalConfig) -> Self
    where
        I: IntoIterator<Item = Node<'a, T>>,
        I::IntoIter: 'a,
    {
        let mut flatten = Self::bare(config);
        flatten.push(Frame::Cursor(Box::new(items.into_iter())));
        flatten
    }

    /// A traversal with nothing to yield.
    pub fn empty() -> Self {
        Self::bare(TraversalConfig::default())
    }

    fn bare(config: TraversalConfig) -> Self {
        Self {
            frames: Vec::with_capacity(config.stack_capacity),
            lookahead: None,
            tracker: DepthTracker::new(config.profile),
            config,
        }
    }

    /// True if another leaf remains.
    ///
    /// May pop exhausted frames and buffer the next leaf, but repeated calls
    /// without an intervening pull always agree and consume nothing.
    pub fn has_next(&mut self) -> bool {
        self.advance();
        self.lookahead.is_some()
    }

    /// Take the next leaf.
    ///
    /// Fails with [`FlattenError::Exhausted`] once no leaves remain; the
    /// failure leaves the traversal as it was.
    pub fn next_leaf(&mut self) -> Result<T, FlattenError> {
        self.advance();
        let value = self.lookahead.take().ok_or(FlattenError::Exhausted)?;
        self.tracker.record_leaf();
        Ok(value)
    }

    /// Borrow the next leaf without consuming it.
    pub fn peek(&mut self) -> Option<&T> {
        self.advance();
        self.lookahead.as_ref()
    }

    /// Removal is not supported; sources are never modified.
    pub fn remove(&mut self) -> Result<(), FlattenError> {
        debug!("remove called on read-only traversal");
        Err(FlattenError::Unsupported { operation: "remove" })
    }

    /// Frames currently on the stack.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Deepest the frame stack has been.
    pub fn max_depth(&self) -> usize {
        self.tracker.max_depth()
    }

    /// Configuration this traversal was built with.
    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    /// Profile so far (if enabled).
    pub fn profile(&self) -> Option<&TraversalProfile> {
        self.tracker.profile()
    }

    /// Take the profile; profiling stops afterwards.
    pub fn take_profile(&mut self) -> Option<TraversalProfile> {
        self.tracker.take_profile()
    }

    /// Fill the lookahead slot, or run the stack dry trying.
    fn advance(&mut self) {
        while self.lookahead.is_none() {
            let Some(top) = self.frames.last_mut() else {
                return;
            };
            match top.pull() {
                Some(node) => self.classify(node),
                None => self.pop(),
            }
        }
    }

    fn classify(&mut self, node: Node<'a, T>) {
        let kind = node.kind();
        self.tracker.record_node(kind);

        match Frame::descend(node) {
            Descend::Frame(frame) => {
                trace!(depth = self.frames.len(), %kind, "descending into nested node");
                self.push(frame);
            }
            Descend::Leaf(value) => self.lookahead = Some(value),
        }
    }

    fn push(&mut self, frame: Frame<'a, T>) {
        self.frames.push(frame);
        self.tracker.push_frame();
    }

    fn pop(&mut self) {
        self.frames.pop();
        self.tracker.pop_frame();
        trace!(depth = self.frames.len(), "frame exhausted");

        if self.frames.is_empty() {
            match self.tracker.profile() {
                Some(p) => debug!(
                    max_depth = p.max_depth,
                    frames = p.frames_pushed,
                    leaves = p.leaf_nodes,
                    "traversal exhausted"
                ),
                None => debug!(max_depth = self.tracker.max_depth(), "traversal exhausted"),
            }
        }
    }
}

impl<T> Iterator for Flatten<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.next_leaf().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = usize::from(self.lookahead.is_some());
        if self.frames.is_empty() {
            (buffered, Some(buffered))
        } else {
            (buffered, None)
        }
    }
}

impl<T> FusedIterator for Flatten<'_, T> {}

impl<T> Default for Flatten<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for Flatten<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flatten")
            .field("frames", &self.frames)
            .field("lookahead", &self.lookahead)
            .field("max_depth", &self.tracker.max_depth())
            .field("config", &self.config)
            .finish()
    }
}
