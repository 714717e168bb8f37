// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dsviz Surface: the drawing calls layouts emit.
//!
//! [`Surface`] mirrors the small subset of an HTML canvas 2D context that the
//! data-structure renderers need: rectangle fills, paths built from arcs and
//! lines, text, and the fill/stroke/font state those calls consume. Hosts
//! implement it over a real canvas or rasterizer; [`Recording`] implements it
//! by storing [`DrawCommand`]s, which is what tests and the demos use.
//!
//! Coordinates are in the relative frame: origin top-left, y growing down.
//!
//! ```rust
//! use dsviz_surface::{Color, DrawCommand, Recording, Surface};
//! use kurbo::{Point, Rect};
//!
//! let mut surface = Recording::new();
//! surface.set_fill_style(Color::rgb8(0x10, 0x10, 0x10));
//! surface.fill_rect(Rect::new(0.0, 0.0, 400.0, 300.0));
//! surface.fill_text("42", Point::new(20.0, 23.0));
//!
//! assert_eq!(surface.commands().len(), 3);
//! assert_eq!(surface.texts()[0].text, "42");
//! assert!(matches!(surface.commands()[1], DrawCommand::FillRect(_)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod color;
mod recording;

pub use color::{Color, ColorParseError};
pub use recording::{DrawCommand, RecordedText, Recording};

use kurbo::{Point, Rect};

/// Horizontal anchoring of text relative to its position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// The position is the left edge of the text.
    #[default]
    Left,
    /// The position is the horizontal center of the text.
    Center,
    /// The position is the right edge of the text.
    Right,
}

/// A 2D drawing target.
///
/// Calls are stateful in the canvas manner: styles persist until changed, and
/// path calls accumulate into the current path until the next
/// [`begin_path`](Self::begin_path).
pub trait Surface {
    /// Fill `rect` with the current fill style.
    fn fill_rect(&mut self, rect: Rect);
    /// Start a new, empty path.
    fn begin_path(&mut self);
    /// Close the current subpath.
    fn close_path(&mut self);
    /// Add a circular arc from `start` to `end` radians.
    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64);
    /// Begin a new subpath at `point`.
    fn move_to(&mut self, point: Point);
    /// Add a straight line to `point`.
    fn line_to(&mut self, point: Point);
    /// Stroke the current path with the current stroke style.
    fn stroke(&mut self);
    /// Fill the current path with the current fill style.
    fn fill(&mut self);
    /// Draw `text` anchored at `at` with the current font, fill style, and alignment.
    fn fill_text(&mut self, text: &str, at: Point);
    /// Set the color used by fills and text.
    fn set_fill_style(&mut self, color: Color);
    /// Set the color used by strokes.
    fn set_stroke_style(&mut self, color: Color);
    /// Set the font as a CSS font shorthand, e.g. `"10px monospace"`.
    fn set_font(&mut self, font: &str);
    /// Set the text alignment.
    fn set_text_align(&mut self, align: TextAlign);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn fill_rect(&mut self, rect: Rect) {
        (**self).fill_rect(rect);
    }
    fn begin_path(&mut self) {
        (**self).begin_path();
    }
    fn close_path(&mut self) {
        (**self).close_path();
    }
    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) {
        (**self).arc(center, radius, start, end);
    }
    fn move_to(&mut self, point: Point) {
        (**self).move_to(point);
    }
    fn line_to(&mut self, point: Point) {
        (**self).line_to(point);
    }
    fn stroke(&mut self) {
        (**self).stroke();
    }
    fn fill(&mut self) {
        (**self).fill();
    }
    fn fill_text(&mut self, text: &str, at: Point) {
        (**self).fill_text(text, at);
    }
    fn set_fill_style(&mut self, color: Color) {
        (**self).set_fill_style(color);
    }
    fn set_stroke_style(&mut self, color: Color) {
        (**self).set_stroke_style(color);
    }
    fn set_font(&mut self, font: &str) {
        (**self).set_font(font);
    }
    fn set_text_align(&mut self, align: TextAlign) {
        (**self).set_text_align(align);
    }
}
