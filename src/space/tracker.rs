//! Frame-stack depth tracking

use super::TraversalProfile;
use crate::node::NodeKind;

/// Tracks frame-stack depth during a traversal
#[derive(Debug)]
pub(crate) struct DepthTracker {
    /// Frames currently on the stack
    current: usize,

    /// Maximum seen
    max: usize,

    /// Profile data (if enabled)
    profile: Option<TraversalProfile>,
}

impl DepthTracker {
    /// Create new tracker
    pub(crate) fn new(profile_enabled: bool) -> Self {
        Self {
            current: 0,
            max: 0,
            profile: if profile_enabled {
                Some(TraversalProfile::default())
            } else {
                None
            },
        }
    }

    /// Push one frame
    pub(crate) fn push_frame(&mut self) {
        self.current += 1;
        self.max = self.max.max(self.current);

        if let Some(ref mut p) = self.profile {
            p.frames_pushed += 1;
            p.max_depth = self.max;
        }
    }

    /// Pop one frame
    pub(crate) fn pop_frame(&mut self) {
        if self.current == 0 {
            return;
        }
        self.current -= 1;

        if let Some(ref mut p) = self.profile {
            p.frames_popped += 1;
        }
    }

    /// Record the shape of a node pulled from a frame
    pub(crate) fn record_node(&mut self, kind: NodeKind) {
        if let Some(ref mut p) = self.profile {
            p.count_node(kind);
        }
    }

    /// Record a leaf handed to the caller
    pub(crate) fn record_leaf(&mut self) {
        if let Some(ref mut p) = self.profile {
            p.leaves_yielded += 1;
        }
    }

    /// Maximum depth reached so far
    pub(crate) fn max_depth(&self) -> usize {
        self.max
    }

    /// Borrow profile (if enabled)
    pub(crate) fn profile(&self) -> Option<&TraversalProfile> {
        self.profile.as_ref()
    }

    /// Take profile; later events are no longer recorded
    pub(crate) fn take_profile(&mut self) -> Option<TraversalProfile> {
        self.profile.take()
    }
}
