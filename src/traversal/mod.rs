//! Lazy depth-first flattening
//!
//! The traversal keeps an explicit stack of frames, one per nesting level,
//! plus a one-slot lookahead buffer. Descending into a container pushes a
//! frame; a frame that runs dry is popped. No recursion, so nesting depth is
//! limited by heap, not by the call stack.

mod config;
mod flatten;
mod frame;

pub use config::TraversalConfig;
pub use flatten::Flatten;
