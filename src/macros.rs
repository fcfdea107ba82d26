//! Variadic construction

/// Build a [`Flatten`](crate::Flatten) from a heterogeneous argument list.
///
/// Each argument is one token tree:
///
/// - `[a, b, ..]` is a nested sequence, written with the same rules;
/// - `{ expr }` is anything convertible with [`Node::from`](crate::Node),
///   such as an existing `Node`, a `Vec<Node>`, an array of nodes or
///   another `Flatten`;
/// - anything else is a leaf. Wrap multi-token leaves in parentheses,
///   e.g. `(-1)` or `(x + 1)`.
///
/// ```
/// use deepflat::{flatten, Node};
///
/// let words = ["b", "c"];
/// let leaves: Vec<&str> = flatten!["a", [{ Node::leaves(words) }, []], "d"].collect();
/// assert_eq!(leaves, ["a", "b", "c", "d"]);
/// ```
#[macro_export]
macro_rules! flatten {
    (@node [ $($inner:tt),* $(,)? ]) => {
        $crate::Node::Seq(::std::vec![ $( $crate::flatten!(@node $inner) ),* ])
    };
    (@node { $($node:tt)* }) => {
        $crate::Node::from({ $($node)* })
    };
    (@node $leaf:tt) => {
        $crate::Node::Leaf($leaf)
    };
    ( $($item:tt),* $(,)? ) => {
        $crate::Flatten::new(::std::vec![ $( $crate::flatten!(@node $item) ),* ])
    };
}
