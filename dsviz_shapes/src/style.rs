// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors, fonts, and node sizing shared by every shape.

use alloc::string::String;

use dsviz_surface::Color;

/// Stroke color of stack and queue walls.
pub const WALL_COLOR: Color = Color::rgb8(0xcc, 0xcc, 0xcc);

/// Fill color of graph edge-weight labels.
pub const EDGE_LABEL_COLOR: Color = Color::rgb8(0xcc, 0xcc, 0xcc);

/// Font of graph edge-weight labels and settled stack boxes.
pub const LABEL_FONT: &str = "10px monospace";

/// Appearance of a drawing.
///
/// The defaults give light nodes and edges on a near-black canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    /// Canvas fill, also used to erase moving boxes.
    pub background: Color,
    /// Edge and arrowhead stroke color.
    pub edge: Color,
    /// Node and box fill color.
    pub node: Color,
    /// CSS font shorthand for node labels.
    pub node_font: String,
    /// Node label color.
    pub node_font_color: Color,
    /// Length of arrowhead wings.
    pub arrowhead_size: f64,
    /// Largest node radius.
    pub max_radius: f64,
    /// Smallest node radius for trees and linked lists.
    pub min_radius: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Color::rgb8(0x10, 0x10, 0x10),
            edge: Color::rgb8(0xee, 0xee, 0xee),
            node: Color::rgb8(0xd1, 0xd1, 0xd1),
            node_font: String::from("0.66rem monospace"),
            node_font_color: Color::rgb8(0x21, 0x21, 0x21),
            arrowhead_size: 10.0,
            max_radius: 50.0,
            min_radius: 11.0,
        }
    }
}

impl Style {
    /// A quarter of `cell`, clamped to `[min_radius, max_radius]`.
    pub fn clamped_radius(&self, cell: f64) -> f64 {
        (cell * 0.25).min(self.max_radius).max(self.min_radius)
    }

    /// A quarter of `cell`, capped at `max_radius` only.
    pub fn capped_radius(&self, cell: f64) -> f64 {
        (cell * 0.25).min(self.max_radius)
    }
}
