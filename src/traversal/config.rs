//! Traversal configuration

/// Default initial capacity of the frame stack.
pub const DEFAULT_STACK_CAPACITY: usize = 8;

/// Configuration parameters for a [`Flatten`](super::Flatten) traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalConfig {
    /// Frames reserved up front; the stack still grows past this.
    pub stack_capacity: usize,

    /// Enable detailed profiling.
    pub profile: bool,
}

impl TraversalConfig {
    /// Set the initial frame-stack capacity (at least one frame).
    pub fn with_stack_capacity(mut self, stack_capacity: usize) -> Self {
        self.stack_capacity = stack_capacity.max(1);
        self
    }

    /// Enable traversal profiling.
    pub fn with_profiling(mut self, enabled: bool) -> Self {
        self.profile = enabled;
        self
    }
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            stack_capacity: DEFAULT_STACK_CAPACITY,
            profile: false,
        }
    }
}
