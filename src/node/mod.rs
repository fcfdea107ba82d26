//! Item classification for the flattening traversal
//!
//! Every item handed to (or discovered by) a [`Flatten`] is a [`Node`]:
//! a closed set of shapes checked once, by `match`, when the item is pulled.
//!
//! Precedence: iterator, then sequence, then array, then leaf.
//! A value that is both an iterator and a container is built as
//! [`Node::Iter`] and is therefore walked as a cursor.

use std::fmt;
use std::mem::{self, ManuallyDrop};
use std::ptr;

use crate::traversal::Flatten;

/// One item of a nested structure.
///
/// Containers (`Iter`, `Seq`, `Array`) are descended into; `Leaf` values are
/// yielded untouched. Leaves may borrow (`T = &'a X`), which lets a traversal
/// walk caller-owned data without copying it.
///
/// Dropping a node frees nested `Seq` and `Array` children with a work list
/// rather than recursion, so arbitrarily deep unvisited input can be dropped
/// or abandoned mid-traversal. Nodes held inside an `Iter` are released by
/// that iterator's own drop. Because `Node` implements `Drop`, payloads
/// cannot be moved out with a by-value `match`; inspect with [`Node::kind`].
pub enum Node<'a, T> {
    /// A cursor that is itself pulled from, one child at a time.
    Iter(Box<dyn Iterator<Item = Node<'a, T>> + 'a>),

    /// A growable sequence of children.
    Seq(Vec<Node<'a, T>>),

    /// A fixed-size array or boxed slice of children.
    Array(Box<[Node<'a, T>]>),

    /// A value that is not a container.
    Leaf(T),
}

/// Payload of a node, moved out by value.
pub(crate) enum Opened<'a, T> {
    Cursor(Box<dyn Iterator<Item = Node<'a, T>> + 'a>),
    Items(Vec<Node<'a, T>>),
    Leaf(T),
}

/// Shape tag of a [`Node`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// [`Node::Iter`]
    Iter,
    /// [`Node::Seq`]
    Seq,
    /// [`Node::Array`]
    Array,
    /// [`Node::Leaf`]
    Leaf,
}

impl<'a, T> Node<'a, T> {
    /// Wrap a leaf value.
    pub fn leaf(value: T) -> Self {
        Node::Leaf(value)
    }

    /// Collect children into a sequence node.
    pub fn seq<I>(children: I) -> Self
    where
        I: IntoIterator<Item = Node<'a, T>>,
    {
        Node::Seq(children.into_iter().collect())
    }

    /// Build an array node from a fixed-size array of children.
    pub fn array<const N: usize>(children: [Node<'a, T>; N]) -> Self {
        Node::Array(Vec::from(children).into_boxed_slice())
    }

    /// Wrap an iterator of nodes; it is pulled lazily during traversal.
    pub fn iter<I>(children: I) -> Self
    where
        I: IntoIterator<Item = Node<'a, T>>,
        I::IntoIter: 'a,
    {
        Node::Iter(Box::new(children.into_iter()))
    }

    /// Wrap an iterator whose items are all leaves, e.g. `vec.iter()`.
    pub fn leaves<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
        T: 'a,
    {
        Node::Iter(Box::new(values.into_iter().map(Node::Leaf)))
    }

    /// Shape of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Iter(_) => NodeKind::Iter,
            Node::Seq(_) => NodeKind::Seq,
            Node::Array(_) => NodeKind::Array,
            Node::Leaf(_) => NodeKind::Leaf,
        }
    }

    /// True for [`Node::Leaf`].
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Take the payload out, bypassing the iterative `Drop`.
    pub(crate) fn open(self) -> Opened<'a, T> {
        let node = ManuallyDrop::new(self);
        // SAFETY: `node` is never dropped, so the one payload read here is
        // the only owner of it afterwards.
        unsafe {
            match &*node {
                Node::Iter(cursor) => Opened::Cursor(ptr::read(cursor)),
                Node::Seq(children) => Opened::Items(ptr::read(children)),
                Node::Array(children) => Opened::Items(ptr::read(children).into_vec()),
                Node::Leaf(value) => Opened::Leaf(ptr::read(value)),
            }
        }
    }
}

impl<T> Drop for Node<'_, T> {
    fn drop(&mut self) {
        let mut pending = match self {
            Node::Seq(children) => mem::take(children),
            Node::Array(children) => mem::take(children).into_vec(),
            Node::Iter(_) | Node::Leaf(_) => return,
        };
        // Each popped node is emptied before it goes out of scope.
        while let Some(mut node) = pending.pop() {
            match &mut node {
                Node::Seq(children) => pending.append(children),
                Node::Array(children) => pending.extend(mem::take(children).into_vec()),
                Node::Iter(_) | Node::Leaf(_) => {}
            }
        }
    }
}

impl<'a, T> From<Vec<Node<'a, T>>> for Node<'a, T> {
    fn from(children: Vec<Node<'a, T>>) -> Self {
        Node::Seq(children)
    }
}

impl<'a, T, const N: usize> From<[Node<'a, T>; N]> for Node<'a, T> {
    fn from(children: [Node<'a, T>; N]) -> Self {
        Node::array(children)
    }
}

impl<'a, T> From<Box<[Node<'a, T>]>> for Node<'a, T> {
    fn from(children: Box<[Node<'a, T>]>) -> Self {
        Node::Array(children)
    }
}

/// A traversal nested inside another is walked as a cursor, so its leaves
/// appear in place in the outer sequence.
impl<'a, T: 'a> From<Flatten<'a, T>> for Node<'a, T> {
    fn from(inner: Flatten<'a, T>) -> Self {
        Node::leaves(inner)
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iter(_) => f.write_str("Iter(..)"),
            Node::Seq(children) => f.debug_tuple("Seq").field(children).finish(),
            Node::Array(children) => f.debug_tuple("Array").field(children).finish(),
            Node::Leaf(value) => f.debug_tuple("Leaf").field(value).finish(),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Iter => "iter",
            NodeKind::Seq => "seq",
            NodeKind::Array => "array",
            NodeKind::Leaf => "leaf",
        };
        f.write_str(name)
    }
}
