// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dsviz Geometry: coordinate frames and line math for data-structure drawings.
//!
//! Drawings are laid out on a canvas whose origin is the top-left corner with
//! y growing downward (the *relative* frame). Angle and slope math is easier in
//! a *Cartesian* frame centered on the canvas with y growing upward, so this
//! crate provides both and the conversions between them.
//!
//! - [`Plane`]: the width and height of the drawing surface.
//! - [`RelativePoint`] / [`CartesianPoint`]: points tagged with their plane.
//! - [`kernel`]: line segmentation, distance ratios, interpolation, midpoints,
//!   and slope heuristics.
//! - [`arrow`]: arrowhead wing placement for graph and linked-list edges.
//!
//! Conversions need known plane dimensions. The `try_*` forms return a
//! [`CoordinateError`]; the plain forms report the failure through `tracing`
//! and return `None`.
//!
//! # Example
//!
//! ```rust
//! use dsviz_geometry::{Plane, RelativePoint, kernel};
//!
//! let plane = Plane::new(400.0, 400.0);
//! let top_left = RelativePoint::new(0.0, 0.0, plane);
//!
//! // The canvas corner sits up and to the left of the Cartesian origin.
//! let c = top_left.to_cartesian().unwrap();
//! assert_eq!((c.x, c.y), (-200.0, 200.0));
//! assert_eq!(c.to_relative(), Some(top_left));
//!
//! // Cut a line into four equal steps.
//! let to = RelativePoint::new(40.0, 0.0, plane);
//! let steps = kernel::segment_line(top_left, to, 4);
//! assert_eq!(steps.len(), 5);
//! assert_eq!(steps[1].x, 10.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod arrow;
mod error;
mod frame;
pub mod kernel;

pub use error::CoordinateError;
pub use frame::{CartesianPoint, Plane, RelativePoint};
