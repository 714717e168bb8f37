// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lay out a search tree and a weighted graph, animate them to completion, and
//! summarize what was drawn.
//!
//! Run:
//! - `cargo run -p dsviz_demos --example tree_and_graph`
//! - `RUST_LOG=debug cargo run -p dsviz_demos --example tree_and_graph` for layout logs

use dsviz_geometry::Plane;
use dsviz_shapes::{Current, Dataset, Options, RandomJitter, Visualizer};
use dsviz_surface::{DrawCommand, Recording};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut surface = Recording::new();
    let mut vis = Visualizer::new(Plane::new(800.0, 600.0)).with_jitter(RandomJitter::seeded(7));

    let tree = Dataset::Tree(vec![Some(50), Some(20), Some(70), Some(10), None, Some(30), Some(90)]);
    vis.visualize(&tree, Options::BINARY, &mut surface);
    let frames = vis.run_until_idle(&mut surface);
    if let Some(Current::Tree(tree)) = vis.current() {
        println!("search tree, level order: {:?}", tree.tree().level_order());
        println!("ordered values:           {:?}", tree.ordered_values());
    }
    println!("tree edges took {frames} frames");
    summarize(&surface);

    surface.clear();
    let graph = Dataset::EdgeList(vec![vec![4, 1, 2], vec![7, 2, 3], vec![1, 3, 1], vec![2, 1, 2]]);
    vis.visualize(&graph, Options::DIRECTED | Options::WEIGHTED, &mut surface);
    let frames = vis.run_until_idle(&mut surface);
    if let Some(Current::Graph(graph)) = vis.current() {
        for &id in graph.model().nodes() {
            if let Some(p) = graph.position(id) {
                println!("node {id} at ({:.0}, {:.0})", p.x, p.y);
            }
        }
    }
    println!("graph edges took {frames} frames");
    summarize(&surface);
}

fn summarize(surface: &Recording) {
    let strokes = surface.count(|c| matches!(c, DrawCommand::Stroke));
    println!(
        "{} circles, {} stroked lines over {strokes} strokes, labels {:?}",
        surface.circles().len(),
        surface.stroked_lines().len(),
        surface.texts().into_iter().map(|t| t.text).collect::<Vec<_>>(),
    );
}
