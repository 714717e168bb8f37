// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised by coordinate conversion.

/// Failure converting a point between the relative and Cartesian frames.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    /// The point's plane has no usable width or height.
    #[error("cannot convert between frames without plane dimensions (plane is {width}x{height})")]
    MissingPlaneDimensions {
        /// Width of the offending plane.
        width: f64,
        /// Height of the offending plane.
        height: f64,
    },
}
