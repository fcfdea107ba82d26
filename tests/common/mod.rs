#![allow(dead_code)]

use deepflat::Node;
use proptest::prelude::*;
use tracing_subscriber::EnvFilter;

/// Route traversal logs to the test writer; `RUST_LOG=deepflat=trace` shows frames.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Owned description of a nested input, convertible to a fresh `Node` tree.
#[derive(Debug, Clone)]
pub enum Tree {
    Leaf(u32),
    Seq(Vec<Tree>),
    Array(Vec<Tree>),
    Iter(Vec<Tree>),
}

impl Tree {
    /// Build the node tree; `Iter` children are converted lazily as they are pulled.
    pub fn to_node(&self) -> Node<'static, u32> {
        match self {
            Tree::Leaf(value) => Node::leaf(*value),
            Tree::Seq(children) => Node::seq(children.iter().map(Tree::to_node)),
            Tree::Array(children) => Node::Array(children.iter().map(Tree::to_node).collect()),
            Tree::Iter(children) => {
                let owned = children.clone();
                Node::iter(owned.into_iter().map(|child| child.to_node()))
            }
        }
    }

    /// Recursive pre-order listing of leaves.
    pub fn reference_leaves(&self, out: &mut Vec<u32>) {
        match self {
            Tree::Leaf(value) => out.push(*value),
            Tree::Seq(children) | Tree::Array(children) | Tree::Iter(children) => {
                for child in children {
                    child.reference_leaves(out);
                }
            }
        }
    }

    /// Nesting levels at and below this node (a leaf is 0).
    pub fn container_depth(&self) -> usize {
        match self {
            Tree::Leaf(_) => 0,
            Tree::Seq(children) | Tree::Array(children) | Tree::Iter(children) => {
                1 + children
                    .iter()
                    .map(Tree::container_depth)
                    .max()
                    .unwrap_or(0)
            }
        }
    }
}

/// Reference flatten of a top-level argument list.
pub fn reference_flatten(items: &[Tree]) -> Vec<u32> {
    let mut out = Vec::new();
    for item in items {
        item.reference_leaves(&mut out);
    }
    out
}

pub fn to_nodes(items: &[Tree]) -> Vec<Node<'static, u32>> {
    items.iter().map(Tree::to_node).collect()
}

pub fn arb_tree() -> impl Strategy<Value = Tree> {
    let leaf = any::<u32>().prop_map(Tree::Leaf);
    leaf.prop_recursive(6, 64, 5, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..5).prop_map(Tree::Seq),
            proptest::collection::vec(inner.clone(), 0..5).prop_map(Tree::Array),
            proptest::collection::vec(inner, 0..5).prop_map(Tree::Iter),
        ]
    })
}

pub fn arb_arguments() -> impl Strategy<Value = Vec<Tree>> {
    proptest::collection::vec(arb_tree(), 0..6)
}

/// A chain of `levels` single-child sequences around one leaf, built without recursion.
pub fn deep_seq(levels: usize, leaf: u32) -> Node<'static, u32> {
    let mut node = Node::leaf(leaf);
    for _ in 0..levels {
        node = Node::Seq(vec![node]);
    }
    node
}

/// Same as [`deep_seq`] with iterator nodes at every level.
pub fn deep_iter(levels: usize, leaf: u32) -> Node<'static, u32> {
    let mut node = Node::leaf(leaf);
    for _ in 0..levels {
        node = Node::iter(std::iter::once(node));
    }
    node
}
