// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dsviz Shapes: layouts and renderers for common data structures.
//!
//! Each shape turns a [`Dataset`] into positions on a [`Plane`] and then draws
//! itself onto a [`Surface`], either all at once or piece by piece as the
//! [`Scheduler`] hands out frames.
//!
//! - [`Graph`]: nodes on a jittered square grid, optional arrowheads and
//!   edge-weight labels.
//! - [`Tree`]: binary trees from level-order arrays, optionally reshaped into a
//!   search tree or heap.
//! - [`LinkedList`]: a zig-zag of nodes joined by axis-aligned arrows.
//! - [`Stack`] and [`Queue`]: bounded containers whose boxes fly in and out.
//! - [`Visualizer`]: owns the scheduler and the shape on screen and routes
//!   frames, stack and queue operations, and restyling to it.
//!
//! # Example
//!
//! ```rust
//! use dsviz_geometry::Plane;
//! use dsviz_shapes::{Dataset, NoJitter, Options, Visualizer};
//! use dsviz_surface::Recording;
//!
//! let mut surface = Recording::new();
//! let mut vis = Visualizer::new(Plane::new(400.0, 400.0)).with_jitter(NoJitter);
//!
//! vis.visualize(
//!     &Dataset::Stack(vec![Some(3), Some(1)]),
//!     Options::empty(),
//!     &mut surface,
//! );
//! // Boxes are still flying in, so the stack refuses new work.
//! assert!(!vis.push(Some(4), &mut surface));
//!
//! vis.run_until_idle(&mut surface);
//! assert!(vis.push(Some(4), &mut surface));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies and seeds
//!   [`RandomJitter`] from the thread-local generator.
//! - `libm`: floating-point math through `libm` for `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! [`Plane`]: dsviz_geometry::Plane
//! [`Surface`]: dsviz_surface::Surface
//! [`Scheduler`]: dsviz_animation::Scheduler

#![no_std]

extern crate alloc;

use dsviz_animation::Scheduler;
use dsviz_surface::Surface;

pub mod graph;
mod jitter;
pub mod linked_list;
mod paint;
pub mod queue;
pub mod stack;
mod style;
pub mod tree;
mod types;
mod util;
mod visualizer;

pub use graph::{Graph, GraphModel};
pub use jitter::{Jitter, MAX_JITTER, NoJitter, RandomJitter};
pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;
pub use style::{EDGE_LABEL_COLOR, LABEL_FONT, Style, WALL_COLOR};
pub use tree::{BinaryTree, Tree};
pub use types::{Dataset, Options};
pub use util::trim_nulls;
pub use visualizer::{Current, Visualizer};

/// A drawable data structure.
pub trait Shape {
    /// Draw the whole shape, or start animating it when `scheduler` is
    /// enabled.
    fn plot(&mut self, scheduler: &mut Scheduler, surface: &mut dyn Surface);

    /// Advance the running animation by one frame.
    fn on_frame(&mut self, scheduler: &mut Scheduler, surface: &mut dyn Surface);
}
