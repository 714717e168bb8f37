// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dsviz Animation: cooperative, frame-driven reveal of drawings.
//!
//! Everything here is single threaded. A host (a browser frame callback, a
//! game loop, or a test) repeatedly asks the [`Scheduler`] for the next due
//! frame and forwards it to whichever shape owns the animation. The shape
//! advances one unit by one step, draws it, and requests the next frame.
//!
//! - [`Scheduler`]: at most one outstanding frame request; idempotent cancel.
//! - [`EdgeCursor`] / [`EdgeSequence`]: reveal segmented edges piece by piece,
//!   ending each edge with a terminal [`EdgeStep::Done`] for arrowheads.
//! - [`Motion`]: move a box along a sampled path (linear or cubic Bézier).
//! - [`UnitQueue`]: run units strictly one after another.
//!
//! # Example
//!
//! ```rust
//! use dsviz_animation::{EdgeCursor, EdgeSequence, EdgeStep, Scheduler};
//! use dsviz_geometry::{Plane, RelativePoint};
//!
//! let plane = Plane::new(100.0, 100.0);
//! let a = RelativePoint::new(10.0, 10.0, plane);
//! let b = RelativePoint::new(90.0, 10.0, plane);
//!
//! let mut scheduler = Scheduler::new();
//! let mut edges = EdgeSequence::new(vec![EdgeCursor::between(a, b, 4)]);
//!
//! // The first step runs synchronously; the rest are frame driven.
//! let mut strokes = usize::from(edges.step(&mut scheduler).is_some());
//! scheduler.drain(|s, _| {
//!     if let Some((_, EdgeStep::Segment { .. })) = edges.step(s) {
//!         strokes += 1;
//!     }
//! });
//! assert_eq!(strokes, 4);
//! assert!(edges.is_finished());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cursor;
pub mod motion;
mod queue;
pub mod scheduler;

pub use cursor::{EdgeCursor, EdgeSequence, EdgeStep};
pub use motion::{Motion, MotionStep};
pub use queue::UnitQueue;
pub use scheduler::{FrameId, Scheduler};
