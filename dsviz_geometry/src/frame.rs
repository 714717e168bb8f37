// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Relative (top-left origin, y down) and Cartesian (centered, y up) points.

use kurbo::Point;

use crate::CoordinateError;

/// Dimensions of the drawing surface a point lives on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    /// Surface width.
    pub width: f64,
    /// Surface height.
    pub height: f64,
}

impl Plane {
    /// Create a plane of the given size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are finite and strictly positive.
    ///
    /// Points on an unknown plane cannot be converted between frames.
    #[inline]
    pub fn is_known(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// The center of the plane in relative coordinates.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    fn require_known(self) -> Result<Self, CoordinateError> {
        if self.is_known() {
            Ok(self)
        } else {
            Err(CoordinateError::MissingPlaneDimensions {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// A point in canvas space: origin top-left, y increasing downward.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RelativePoint {
    /// Horizontal offset from the left edge.
    pub x: f64,
    /// Vertical offset from the top edge.
    pub y: f64,
    /// The surface this point belongs to.
    pub plane: Plane,
}

/// A point in the centered frame: origin at the canvas center, y increasing upward.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CartesianPoint {
    /// Horizontal offset from the center, positive to the right.
    pub x: f64,
    /// Vertical offset from the center, positive upward.
    pub y: f64,
    /// The surface this point belongs to.
    pub plane: Plane,
}

impl RelativePoint {
    /// Create a relative point.
    #[inline]
    pub const fn new(x: f64, y: f64, plane: Plane) -> Self {
        Self { x, y, plane }
    }

    /// Create a relative point from a `kurbo` point.
    #[inline]
    pub const fn at(point: Point, plane: Plane) -> Self {
        Self::new(point.x, point.y, plane)
    }

    /// The position as a `kurbo` point, dropping the plane.
    #[inline]
    pub const fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Build a relative point from Cartesian coordinates on `plane`.
    ///
    /// Returns `None` (and logs) when the plane dimensions are unknown.
    pub fn from_cartesian(x: f64, y: f64, plane: Plane) -> Option<Self> {
        CartesianPoint::new(x, y, plane).to_relative()
    }

    /// Convert into the Cartesian frame.
    pub fn try_to_cartesian(&self) -> Result<CartesianPoint, CoordinateError> {
        let plane = self.plane.require_known()?;
        Ok(CartesianPoint {
            x: self.x - plane.width / 2.0,
            y: plane.height / 2.0 - self.y,
            plane,
        })
    }

    /// Convert into the Cartesian frame, reporting failure on the diagnostic channel.
    pub fn to_cartesian(&self) -> Option<CartesianPoint> {
        self.try_to_cartesian()
            .map_err(|err| tracing::error!(error = %err, "relative to cartesian conversion aborted"))
            .ok()
    }
}

impl CartesianPoint {
    /// Create a Cartesian point.
    #[inline]
    pub const fn new(x: f64, y: f64, plane: Plane) -> Self {
        Self { x, y, plane }
    }

    /// Build a Cartesian point from relative coordinates on `plane`.
    ///
    /// Returns `None` (and logs) when the plane dimensions are unknown.
    pub fn from_relative(x: f64, y: f64, plane: Plane) -> Option<Self> {
        RelativePoint::new(x, y, plane).to_cartesian()
    }

    /// Convert into the relative frame.
    pub fn try_to_relative(&self) -> Result<RelativePoint, CoordinateError> {
        let plane = self.plane.require_known()?;
        Ok(RelativePoint {
            x: plane.width / 2.0 + self.x,
            y: plane.height / 2.0 - self.y,
            plane,
        })
    }

    /// Convert into the relative frame, reporting failure on the diagnostic channel.
    pub fn to_relative(&self) -> Option<RelativePoint> {
        self.try_to_relative()
            .map_err(|err| tracing::error!(error = %err, "cartesian to relative conversion aborted"))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLANE: Plane = Plane::new(640.0, 480.0);

    #[test]
    fn center_maps_to_origin() {
        let c = RelativePoint::new(320.0, 240.0, PLANE).to_cartesian().unwrap();
        assert_eq!((c.x, c.y), (0.0, 0.0));
    }

    #[test]
    fn y_axis_flips_between_frames() {
        // 40 units above the center on screen is +40 in Cartesian space.
        let c = RelativePoint::new(330.0, 200.0, PLANE).to_cartesian().unwrap();
        assert_eq!((c.x, c.y), (10.0, 40.0));
        let r = RelativePoint::from_cartesian(-20.0, -60.0, PLANE).unwrap();
        assert_eq!((r.x, r.y), (300.0, 300.0));
    }

    #[test]
    fn round_trip_is_identity_for_representable_points() {
        for &(x, y) in &[
            (0.0, 0.0),
            (640.0, 480.0),
            (12.5, 470.25),
            (-100.0, 900.0),
            (1.0e6, -3.0e5),
        ] {
            let p = RelativePoint::new(x, y, PLANE);
            let back = p.to_cartesian().and_then(|c| c.to_relative());
            assert_eq!(back, Some(p), "round trip changed ({x}, {y})");

            let c = CartesianPoint::new(x, y, PLANE);
            let back = c.to_relative().and_then(|r| r.to_cartesian());
            assert_eq!(back, Some(c), "reverse round trip changed ({x}, {y})");
        }
    }

    #[test]
    fn round_trip_is_close_for_arbitrary_points() {
        let plane = Plane::new(333.3, 777.7);
        let p = RelativePoint::new(0.1, 0.7, plane);
        let back = p.to_cartesian().and_then(|c| c.to_relative()).unwrap();
        assert!((back.x - p.x).abs() < 1e-12, "x drifted");
        assert!((back.y - p.y).abs() < 1e-12, "y drifted");
    }

    #[test]
    fn unknown_plane_is_reported() {
        for plane in [
            Plane::new(0.0, 100.0),
            Plane::new(100.0, 0.0),
            Plane::new(f64::NAN, 100.0),
            Plane::new(-5.0, 100.0),
        ] {
            let p = RelativePoint::new(1.0, 2.0, plane);
            assert!(matches!(
                p.try_to_cartesian(),
                Err(CoordinateError::MissingPlaneDimensions { .. })
            ));
            assert_eq!(p.to_cartesian(), None);
            assert_eq!(CartesianPoint::new(1.0, 2.0, plane).to_relative(), None);
            assert_eq!(RelativePoint::from_cartesian(1.0, 2.0, plane), None);
        }
    }
}
