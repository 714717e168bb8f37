// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box motion along sampled paths.

use alloc::vec::Vec;

use dsviz_geometry::kernel::segment_line;
use dsviz_geometry::{Plane, RelativePoint};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{CubicBez, ParamCurve, Point};

/// Parameter step used when sampling motion curves.
pub const DEFAULT_SPEED: f64 = 0.05;

/// Sample `curve` at `t = k·speed` for every `k` with `k·speed <= 1`.
///
/// The final sample is pinned to the curve's end point.
pub fn sample_cubic(curve: CubicBez, speed: f64) -> Vec<Point> {
    if !(speed > 0.0 && speed <= 1.0) {
        return alloc::vec![curve.p0, curve.p3];
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "speed is in (0, 1], so the step count is a small positive integer"
    )]
    let steps = (1.0 / speed).round() as usize;
    let mut samples: Vec<Point> = (0..steps)
        .map(|k| curve.eval(k as f64 * speed))
        .collect();
    samples.push(curve.p3);
    samples
}

/// One tick of a [`Motion`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MotionStep {
    /// Move the box from `from` (absent on the first tick) to `to`.
    Move {
        /// Where the box was drawn on the previous tick.
        from: Option<RelativePoint>,
        /// Where to draw it now.
        to: RelativePoint,
    },
    /// The box reached `last`.
    Arrived {
        /// Final position of the box.
        last: RelativePoint,
    },
}

/// A box travelling along a list of points, one point per tick.
#[derive(Clone, Debug, Default)]
pub struct Motion {
    points: Vec<RelativePoint>,
    index: usize,
}

impl Motion {
    /// Motion through precomputed points.
    pub fn new(points: Vec<RelativePoint>) -> Self {
        Self { points, index: 0 }
    }

    /// Straight-line motion cut into `segments` pieces.
    pub fn linear(from: RelativePoint, to: RelativePoint, segments: usize) -> Self {
        Self::new(segment_line(from, to, segments))
    }

    /// Motion along the cubic Bézier `p0, p1, p2, p3`, sampled every `speed`.
    pub fn cubic(p0: Point, p1: Point, p2: Point, p3: Point, speed: f64, plane: Plane) -> Self {
        let curve = CubicBez::new(p0, p1, p2, p3);
        Self::new(
            sample_cubic(curve, speed)
                .into_iter()
                .map(|p| RelativePoint::at(p, plane))
                .collect(),
        )
    }

    /// The points this motion walks.
    pub fn points(&self) -> &[RelativePoint] {
        &self.points
    }

    /// The last point of the path.
    pub fn last(&self) -> Option<RelativePoint> {
        self.points.last().copied()
    }

    /// Produce the next tick.
    ///
    /// Yields one [`MotionStep::Move`] per point, then [`MotionStep::Arrived`]
    /// once, then `None`.
    pub fn advance(&mut self) -> Option<MotionStep> {
        let len = self.points.len();
        let step = if self.index < len {
            MotionStep::Move {
                from: self.index.checked_sub(1).map(|prev| self.points[prev]),
                to: self.points[self.index],
            }
        } else if self.index == len && len > 0 {
            MotionStep::Arrived {
                last: self.points[len - 1],
            }
        } else {
            return None;
        };
        self.index += 1;
        Some(step)
    }
}
