// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrowhead wing placement.
//!
//! Two styles are provided:
//!
//! - [`angled_arrowhead`] follows the edge at any angle. The wing angle is
//!   computed in the Cartesian frame from `atan(slope)`, which only covers
//!   half the circle, so both the wings and their reflections through the tip
//!   are computed and the pair lying behind the tip is kept.
//! - [`axis_arrowhead`] and [`reverse_axis_arrowhead`] use fixed offsets for
//!   edges that are either horizontal or pointing straight down, as produced by
//!   the zig-zag linked-list layout.

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::kernel::{cartesian_slope, distance_ratio, find_point_on_line};
use crate::{CartesianPoint, RelativePoint};

/// Half-angle between an arrowhead wing and the edge, in degrees.
pub const WING_ANGLE_DEGREES: f64 = 30.0;

/// Offset of an axis-aligned wing along the edge (`10 · cos 30°`).
pub const WING_RUN: f64 = 8.66025;

/// Offset of an axis-aligned wing across the edge (`10 · sin 30°`).
pub const WING_RISE: f64 = 5.0;

/// Horizontal movement, in pixels, below which an axis edge is treated as vertical.
pub const AXIS_TOLERANCE: f64 = 1e-6;

/// An arrowhead: two strokes from `tip` to each wing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Arrowhead {
    /// The point the arrow touches.
    pub tip: RelativePoint,
    /// Outer ends of the two wing strokes.
    pub wings: [RelativePoint; 2],
}

/// Place an arrowhead at `tip` for the edge arriving from `tail`.
///
/// Returns `None` when the points coincide or the plane is unknown.
pub fn angled_arrowhead(tip: RelativePoint, tail: RelativePoint, size: f64) -> Option<Arrowhead> {
    if tip.point() == tail.point() {
        return None;
    }
    let center = tip.to_cartesian()?;
    let theta = cartesian_slope(tail.to_cartesian()?, center).atan();
    let spread = WING_ANGLE_DEGREES * (PI / 180.0);

    let wing = |angle: f64| {
        RelativePoint::from_cartesian(
            center.x + size * angle.cos(),
            center.y + size * angle.sin(),
            tip.plane,
        )
    };
    let target1 = wing(theta - spread)?;
    let target2 = wing(theta + spread)?;

    let ratio = distance_ratio(size, tip, target1);
    let near = [
        find_point_on_line(tip, target1, ratio),
        find_point_on_line(tip, target2, ratio),
    ];
    let far = [
        reflect_through(center, near[0], size)?,
        reflect_through(center, near[1], size)?,
    ];

    let dy = tip.y - tail.y;
    let dx = tip.x - tail.x;
    let use_far = if dy > 0.0 {
        // Edge points down the screen; wings belong above the tip.
        min_of(far, |p| p.y) < min_of(near, |p| p.y)
    } else if dy < 0.0 {
        max_of(far, |p| p.y) > max_of(near, |p| p.y)
    } else if dx > 0.0 {
        // Horizontal edges: keep the wings on the tail side.
        max_of(far, |p| p.x) < max_of(near, |p| p.x)
    } else {
        min_of(far, |p| p.x) > min_of(near, |p| p.x)
    };

    Some(Arrowhead {
        tip,
        wings: if use_far { far } else { near },
    })
}

/// Mirror `point` through `center`, at distance `size` from it.
fn reflect_through(center: CartesianPoint, point: RelativePoint, size: f64) -> Option<RelativePoint> {
    let p = point.to_cartesian()?;
    let vx = center.x - p.x;
    let vy = center.y - p.y;
    let len = (vx * vx + vy * vy).sqrt();
    RelativePoint::from_cartesian(
        vx / len * size + center.x,
        vy / len * size + center.y,
        center.plane,
    )
}

fn min_of(points: [RelativePoint; 2], f: impl Fn(&RelativePoint) -> f64) -> f64 {
    f(&points[0]).min(f(&points[1]))
}

fn max_of(points: [RelativePoint; 2], f: impl Fn(&RelativePoint) -> f64) -> f64 {
    f(&points[0]).max(f(&points[1]))
}

/// Heading of an edge in the zig-zag layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisDirection {
    /// The tip is to the right of the tail.
    LeftToRight,
    /// The tip is to the left of the tail.
    RightToLeft,
    /// The tip is directly below the tail.
    Down,
}

impl AxisDirection {
    /// Classify the edge `tail → tip` by horizontal movement alone.
    ///
    /// Horizontal drift below [`AXIS_TOLERANCE`] counts as straight down, so
    /// rounding in the endpoint shortening does not flip a vertical edge.
    pub fn between(tail: RelativePoint, tip: RelativePoint) -> Self {
        let dx = tip.x - tail.x;
        if dx > AXIS_TOLERANCE {
            Self::LeftToRight
        } else if dx < -AXIS_TOLERANCE {
            Self::RightToLeft
        } else {
            Self::Down
        }
    }
}

/// Arrowhead at `tip` for an axis-aligned edge from `tail`.
pub fn axis_arrowhead(tip: RelativePoint, tail: RelativePoint) -> Option<Arrowhead> {
    let offsets = match AxisDirection::between(tail, tip) {
        AxisDirection::LeftToRight => [(-WING_RUN, WING_RISE), (-WING_RUN, -WING_RISE)],
        AxisDirection::RightToLeft => [(WING_RUN, WING_RISE), (WING_RUN, -WING_RISE)],
        AxisDirection::Down => [(-WING_RISE, WING_RUN), (WING_RISE, WING_RUN)],
    };
    offset_wings(tip, offsets)
}

/// Arrowhead at `tail` pointing back along an axis-aligned edge, for doubly-linked lists.
pub fn reverse_axis_arrowhead(tip: RelativePoint, tail: RelativePoint) -> Option<Arrowhead> {
    let offsets = match AxisDirection::between(tail, tip) {
        AxisDirection::LeftToRight => [(WING_RUN, WING_RISE), (WING_RUN, -WING_RISE)],
        AxisDirection::RightToLeft => [(-WING_RUN, WING_RISE), (-WING_RUN, -WING_RISE)],
        AxisDirection::Down => [(-WING_RISE, -WING_RUN), (WING_RISE, -WING_RUN)],
    };
    offset_wings(tail, offsets)
}

/// Offsets are Cartesian (y up) deltas from `at`.
fn offset_wings(at: RelativePoint, offsets: [(f64, f64); 2]) -> Option<Arrowhead> {
    let center = at.to_cartesian()?;
    let [(x1, y1), (x2, y2)] = offsets;
    Some(Arrowhead {
        tip: center.to_relative()?,
        wings: [
            RelativePoint::from_cartesian(center.x + x1, center.y + y1, at.plane)?,
            RelativePoint::from_cartesian(center.x + x2, center.y + y2, at.plane)?,
        ],
    })
}
