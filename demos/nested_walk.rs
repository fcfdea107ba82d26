//! Walk a mixed nested structure and print its leaves.
//!
//! Run with `RUST_LOG=deepflat=trace cargo run --example nested_walk` to see
//! frames being pushed and popped.

use anyhow::Context;
use deepflat::{flatten, Flatten, Node, TraversalConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // A directory listing: files are leaves, directories nest.
    let src = vec!["lib.rs", "macros.rs"];
    let node_dir = ["node/mod.rs"];
    let listing = Flatten::new(vec![
        Node::leaf("Cargo.toml"),
        Node::seq(vec![
            Node::leaves(src.iter().copied()),
            Node::array([Node::leaves(node_dir)]),
            Node::seq(vec![]),
        ]),
        Node::leaf("README.md"),
    ]);

    // The listing is itself one item of a larger walk.
    let mut walk = Flatten::with_config(
        vec![Node::leaf("workspace/"), Node::from(listing), Node::leaf("target/")],
        TraversalConfig::default().with_profiling(true),
    );
    while walk.has_next() {
        let path = walk.next_leaf().context("has_next promised a leaf")?;
        println!("{path}");
    }
    if let Some(profile) = walk.take_profile() {
        println!("{}", profile.report());
    }

    let mut numbers = flatten![[], 1, [[], [2, 3]], 4];
    let first = numbers.peek().copied().context("non-empty input")?;
    let total: i32 = numbers.sum();
    println!("first leaf {first}, sum {total}");

    Ok(())
}
