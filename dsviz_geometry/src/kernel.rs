// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure line helpers shared by every layout.
//!
//! Points produced here inherit the plane of their first argument.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::{CartesianPoint, RelativePoint};

/// Cut the segment `from → to` into `segments` equal steps.
///
/// Returns `segments + 1` points with `points[0] == from` and
/// `points[segments] == to`. Zero segments yields just `from`.
pub fn segment_line(from: RelativePoint, to: RelativePoint, segments: usize) -> Vec<RelativePoint> {
    if segments == 0 {
        return alloc::vec![from];
    }
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let n = segments as f64;
    let mut vertices: Vec<RelativePoint> = (0..segments)
        .map(|step| {
            let step = step as f64;
            RelativePoint::new(from.x + dx * step / n, from.y + dy * step / n, from.plane)
        })
        .collect();
    // Pin the endpoint rather than trusting `from + dx` to land on it.
    vertices.push(RelativePoint::new(to.x, to.y, from.plane));
    vertices
}

/// Euclidean distance between two relative points.
#[inline]
pub fn distance(p1: RelativePoint, p2: RelativePoint) -> f64 {
    p1.point().distance(p2.point())
}

/// The fraction of the `p1 → p2` span covered by `distance`.
///
/// Shrinking an edge by a node radius uses this as the ratio passed to
/// [`find_point_on_line`]. Coincident points yield an infinite ratio.
#[inline]
pub fn distance_ratio(distance: f64, p1: RelativePoint, p2: RelativePoint) -> f64 {
    distance / self::distance(p1, p2)
}

/// Linear interpolation from `from` toward `to`.
///
/// `ratio` is not clamped: values above 1 extrapolate past `to`, negative
/// values extrapolate behind `from`.
#[inline]
pub fn find_point_on_line(from: RelativePoint, to: RelativePoint, ratio: f64) -> RelativePoint {
    RelativePoint::new(
        (1.0 - ratio) * from.x + ratio * to.x,
        (1.0 - ratio) * from.y + ratio * to.y,
        from.plane,
    )
}

/// Midpoint of two relative points.
#[inline]
pub fn midpoint(p1: RelativePoint, p2: RelativePoint) -> RelativePoint {
    RelativePoint::at(p1.point().midpoint(p2.point()), p1.plane)
}

/// `|dx / dy|` in screen space.
///
/// This is a label-placement heuristic rather than a slope: small values mean
/// the segment is close to vertical, large values close to horizontal.
#[inline]
pub fn relative_slope(p1: RelativePoint, p2: RelativePoint) -> f64 {
    ((p2.x - p1.x) / (p2.y - p1.y)).abs()
}

/// `dy / dx` in the Cartesian frame.
#[inline]
pub fn cartesian_slope(p1: CartesianPoint, p2: CartesianPoint) -> f64 {
    (p2.y - p1.y) / (p2.x - p1.x)
}

/// Coarse orientation of a segment, classified from its [`relative_slope`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Slope below 0.5.
    Vertical,
    /// Slope strictly between 0.5 and 1.5.
    Diagonal,
    /// Slope above 3.
    Horizontal,
}

/// Classify a [`relative_slope`] value.
///
/// Slopes in the bands `[1.5, 3]` and exactly `0.5` are left unclassified.
pub fn relative_direction(slope: f64) -> Option<Direction> {
    if slope < 0.5 {
        Some(Direction::Vertical)
    } else if slope > 0.5 && slope < 1.5 {
        Some(Direction::Diagonal)
    } else if slope > 3.0 {
        Some(Direction::Horizontal)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Plane;

    const PLANE: Plane = Plane::new(200.0, 100.0);

    fn rp(x: f64, y: f64) -> RelativePoint {
        RelativePoint::new(x, y, PLANE)
    }

    #[test]
    fn segment_line_endpoints_and_spacing() {
        let from = rp(0.1, 0.7);
        let to = rp(30.3, -12.9);
        let points = segment_line(from, to, 7);
        assert_eq!(points.len(), 8);
        assert_eq!(points[0], from);
        assert_eq!(points[7], to);

        let step = distance(points[0], points[1]);
        for pair in points.windows(2) {
            let d = distance(pair[0], pair[1]);
            assert!((d - step).abs() < 1e-9, "uneven spacing: {d} vs {step}");
        }
    }

    #[test]
    fn segment_line_zero_segments_is_just_the_start() {
        let points = segment_line(rp(1.0, 2.0), rp(3.0, 4.0), 0);
        assert_eq!(points, alloc::vec![rp(1.0, 2.0)]);
    }

    #[test]
    fn distance_ratio_shrinks_to_a_radius() {
        let a = rp(0.0, 0.0);
        let b = rp(30.0, 40.0);
        let ratio = distance_ratio(25.0, a, b);
        assert_eq!(ratio, 0.5);
        assert_eq!(find_point_on_line(a, b, ratio), rp(15.0, 20.0));
        let quarter = distance_ratio(12.5, a, b);
        assert_eq!(find_point_on_line(b, a, quarter), rp(22.5, 30.0));
    }

    #[test]
    fn find_point_on_line_extrapolates() {
        let a = rp(0.0, 0.0);
        let b = rp(10.0, 0.0);
        assert_eq!(find_point_on_line(a, b, 1.5), rp(15.0, 0.0));
        assert_eq!(find_point_on_line(a, b, -0.5), rp(-5.0, 0.0));
    }

    #[test]
    fn midpoint_and_slopes() {
        assert_eq!(midpoint(rp(0.0, 0.0), rp(10.0, 20.0)), rp(5.0, 10.0));
        assert_eq!(relative_slope(rp(0.0, 0.0), rp(-10.0, 20.0)), 0.5);
        let c1 = CartesianPoint::new(0.0, 0.0, PLANE);
        let c2 = CartesianPoint::new(2.0, -4.0, PLANE);
        assert_eq!(cartesian_slope(c1, c2), -2.0);
    }

    #[test]
    fn direction_bands() {
        assert_eq!(relative_direction(0.0), Some(Direction::Vertical));
        assert_eq!(relative_direction(1.0), Some(Direction::Diagonal));
        assert_eq!(relative_direction(0.5), None);
        assert_eq!(relative_direction(2.0), None);
        assert_eq!(relative_direction(f64::INFINITY), Some(Direction::Horizontal));
    }
}
