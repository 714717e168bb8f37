// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a stack and a queue the way a UI would: one operation per click,
//! frames pumped in between, and operations refused while boxes are moving.
//!
//! Run:
//! - `RUST_LOG=dsviz_shapes=debug cargo run -p dsviz_demos --example stack_and_queue`

use dsviz_geometry::Plane;
use dsviz_shapes::{Dataset, Options, Visualizer};
use dsviz_surface::{Color, Recording};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut surface = Recording::new();
    let mut vis = Visualizer::new(Plane::new(600.0, 500.0));

    vis.visualize(&Dataset::Stack(vec![Some(1), Some(2)]), Options::empty(), &mut surface);
    println!("push during fly-in accepted: {}", vis.push(Some(3), &mut surface));
    vis.run_until_idle(&mut surface);
    println!("push after fly-in accepted:  {}", vis.push(Some(3), &mut surface));
    vis.run_until_idle(&mut surface);
    println!("pop accepted:                {}", vis.pop(&mut surface));
    vis.run_until_idle(&mut surface);

    vis.visualize(&Dataset::Queue(vec![Some(5), Some(6), Some(7)]), Options::empty(), &mut surface);
    let mut frames = 0;
    while vis.on_frame(&mut surface) {
        frames += 1;
    }
    println!("queue filled in {frames} frames");
    vis.dequeue(&mut surface);
    println!("second dequeue while shifting accepted: {}", vis.dequeue(&mut surface));
    println!("dequeue and shift took {} frames", vis.run_until_idle(&mut surface));

    // Picking a dark node color flips the labels to light text.
    let picked = Color::from_hex("#20206a").unwrap_or(Color::BLACK);
    let text = vis.restyle_nodes(picked, &mut surface);
    tracing::info!(%picked, %text, "restyled nodes");
}
