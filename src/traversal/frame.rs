//! One cursor per nesting level

use std::fmt;
use std::vec;

use crate::node::{Node, Opened};

/// Iteration cursor over one source sequence.
///
/// Sequences and arrays are moved into an owning cursor; iterator nodes are
/// kept as they are and pulled directly.
pub(crate) enum Frame<'a, T> {
    /// Owned children of a `Seq` or `Array` node.
    Items(vec::IntoIter<Node<'a, T>>),

    /// An iterator node, or the top-level argument list.
    Cursor(Box<dyn Iterator<Item = Node<'a, T>> + 'a>),
}

/// Outcome of classifying one pulled node.
pub(crate) enum Descend<'a, T> {
    /// A container; walk it next.
    Frame(Frame<'a, T>),
    /// A leaf for the lookahead slot.
    Leaf(T),
}

impl<'a, T> Frame<'a, T> {
    /// Open a node: containers become a frame, leaves are handed back.
    pub(crate) fn descend(node: Node<'a, T>) -> Descend<'a, T> {
        match node.open() {
            Opened::Cursor(cursor) => Descend::Frame(Frame::Cursor(cursor)),
            Opened::Items(children) => Descend::Frame(Frame::Items(children.into_iter())),
            Opened::Leaf(value) => Descend::Leaf(value),
        }
    }

    /// Pull the next child, `None` once this frame has run dry.
    #[inline]
    pub(crate) fn pull(&mut self) -> Option<Node<'a, T>> {
        match self {
            Frame::Items(items) => items.next(),
            Frame::Cursor(cursor) => cursor.next(),
        }
    }
}

impl<T> fmt::Debug for Frame<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::Items(items) => write!(f, "Items({} left)", items.len()),
            Frame::Cursor(_) => f.write_str("Cursor(..)"),
        }
    }
}
