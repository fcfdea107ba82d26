//! Correctness tests: leaves come out in depth-first, left-to-right order

use deepflat::{flatten, Flatten, Node};
use test_case::test_case;

mod common;
use common::*;

#[test_case(flatten![[], 1, [[], [2, 3]], 4], &[1, 2, 3, 4] ; "empty containers contribute nothing")]
#[test_case(flatten![], &[] ; "no arguments")]
#[test_case(flatten![[], [[]], [[], []]], &[] ; "only empty containers")]
#[test_case(flatten![[[[[[7]]]]]], &[7] ; "single deeply nested leaf")]
#[test_case(flatten![1, [2, [3, [4]], 5], 6], &[1, 2, 3, 4, 5, 6] ; "pre order across levels")]
#[test_case(flatten![[1, 2, 3], [[1, 2], [3]], [1, 2, 3]], &[1, 2, 3, 1, 2, 3, 1, 2, 3] ; "sibling containers concatenate")]
fn test_flattens_in_pre_order(input: Flatten<'static, i32>, expected: &[i32]) {
    init_tracing();
    assert_eq!(input.collect::<Vec<_>>(), expected);
}

#[test]
fn test_iterator_item_is_descended() {
    init_tracing();
    // [ [5, 6].iter(), 7 ]
    let source = vec![5, 6];
    let seven = 7;
    let leaves: Vec<&i32> = Flatten::new(vec![Node::leaves(source.iter()), Node::leaf(&seven)]).collect();
    assert_eq!(leaves, vec![&5, &6, &7]);
}

#[test]
fn test_iterator_yielding_containers() {
    let rows = vec![vec![1, 2], vec![], vec![3]];
    let node = Node::iter(rows.iter().map(|row| Node::leaves(row.iter().copied())));
    let leaves: Vec<i32> = Flatten::new(vec![node, Node::leaf(4)]).collect();
    assert_eq!(leaves, vec![1, 2, 3, 4]);
}

#[test]
fn test_arrays_are_descended() {
    let nested = Node::array([
        Node::array([Node::leaf('a'), Node::leaf('b')]),
        Node::array([]),
        Node::leaf('c'),
    ]);
    let boxed: Box<[Node<'_, char>]> = vec![Node::leaf('d')].into_boxed_slice();
    let leaves: String = Flatten::new(vec![nested, Node::from(boxed)]).collect();
    assert_eq!(leaves, "abcd");
}

#[test]
fn test_nested_traversal_is_flattened_in_place() {
    init_tracing();
    let inner = flatten![10, [11, [12]]];
    let outer = flatten![1, { inner }, 2];
    assert_eq!(outer.collect::<Vec<i32>>(), vec![1, 10, 11, 12, 2]);
}

#[test]
fn test_partially_consumed_traversal_resumes_in_place() {
    let mut inner = flatten![10, 11, 12];
    assert_eq!(inner.next_leaf(), Ok(10));
    let outer = flatten![[{ inner }], 1];
    assert_eq!(outer.collect::<Vec<i32>>(), vec![11, 12, 1]);
}

#[test]
fn test_absent_leaves_are_values() {
    // A leaf that is itself an absence marker must not read as exhaustion.
    let mut flatten = Flatten::new(vec![
        Node::leaf(None),
        Node::seq(vec![Node::leaf(Some(3)), Node::leaf(None)]),
    ]);
    assert_eq!(flatten.next_leaf(), Ok(None));
    assert_eq!(flatten.next_leaf(), Ok(Some(3)));
    assert!(flatten.has_next());
    assert_eq!(flatten.next_leaf(), Ok(None));
    assert!(!flatten.has_next());
}

#[test]
fn test_leaves_are_passed_through_untouched() {
    let owned = vec![String::from("alpha"), String::from("beta")];
    let mut flatten = Flatten::new(vec![Node::seq(owned.iter().map(Node::leaf))]);
    let first = flatten.next_leaf().expect("first leaf");
    assert!(std::ptr::eq(first, &owned[0]));
    assert_eq!(flatten.next(), Some(&owned[1]));
}

#[test]
fn test_deep_sequence_nesting_does_not_recurse() {
    init_tracing();
    let levels = 100_000;
    let mut flatten = Flatten::new(vec![deep_seq(levels, 42), Node::leaf(43)]);
    assert_eq!(flatten.next_leaf(), Ok(42));
    assert_eq!(flatten.depth(), levels + 1);
    assert_eq!(flatten.next_leaf(), Ok(43));
    assert!(!flatten.has_next());
    assert_eq!(flatten.max_depth(), levels + 1);
}

#[test]
fn test_deep_iterator_nesting_does_not_recurse() {
    let levels = 100_000;
    let leaves: Vec<u32> = Flatten::new(vec![deep_iter(levels, 1), deep_iter(levels, 2)]).collect();
    assert_eq!(leaves, vec![1, 2]);
}

#[test]
fn test_top_level_items_are_pulled_lazily() {
    let items = (0..3).map(|i| Node::seq(vec![Node::leaf(i), Node::leaf(i * 10)]));
    let leaves: Vec<i32> = Flatten::new(items).collect();
    assert_eq!(leaves, vec![0, 0, 1, 10, 2, 20]);
}

#[test]
fn test_abandoned_traversal_drops_unvisited_deep_input() {
    init_tracing();
    let mut flatten = Flatten::new(vec![Node::leaf(0), deep_seq(100_000, 1)]);
    assert_eq!(flatten.next_leaf(), Ok(0));
    drop(flatten);
}

#[test]
fn test_abandoned_traversal_drops_unvisited_deep_sibling() {
    let mut flatten = Flatten::new(vec![Node::seq(vec![
        Node::leaf(0),
        deep_seq(100_000, 1),
        Node::array([deep_seq(100_000, 2)]),
    ])]);
    assert_eq!(flatten.next_leaf(), Ok(0));
    assert_eq!(flatten.depth(), 2);
    drop(flatten);
}

#[test]
fn test_unused_deep_input_drops() {
    let nodes = vec![deep_seq(100_000, 1), deep_seq(100_000, 2)];
    drop(Flatten::new(nodes));
}
