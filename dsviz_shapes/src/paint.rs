// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw-call sequences shared by the shapes.

use core::f64::consts::TAU;

use dsviz_geometry::arrow::Arrowhead;
use dsviz_geometry::{Plane, RelativePoint};
use dsviz_surface::{Color, Surface, TextAlign};
use kurbo::{Point, Rect};

use crate::Style;

/// Fill the whole plane with the background color.
pub(crate) fn background(surface: &mut dyn Surface, plane: Plane, style: &Style) {
    surface.set_fill_style(style.background);
    surface.fill_rect(Rect::new(0.0, 0.0, plane.width, plane.height));
}

/// A filled circle with its label centered just below the middle.
pub(crate) fn node(
    surface: &mut dyn Surface,
    style: &Style,
    center: RelativePoint,
    radius: f64,
    label: &str,
) {
    surface.begin_path();
    surface.set_fill_style(style.node);
    surface.arc(center.point(), radius, 0.0, TAU);
    surface.fill();
    surface.close_path();

    text(
        surface,
        label,
        Point::new(center.x, center.y + 3.0),
        style.node_font_color,
        &style.node_font,
    );
}

/// Centered text in its own path.
pub(crate) fn text(surface: &mut dyn Surface, label: &str, at: Point, color: Color, font: &str) {
    surface.begin_path();
    surface.set_fill_style(color);
    surface.set_font(font);
    surface.set_text_align(TextAlign::Center);
    surface.fill_text(label, at);
    surface.close_path();
}

/// A single stroked line in its own path.
pub(crate) fn line(surface: &mut dyn Surface, color: Color, from: RelativePoint, to: RelativePoint) {
    surface.begin_path();
    surface.set_stroke_style(color);
    surface.move_to(from.point());
    surface.line_to(to.point());
    surface.stroke();
}

/// Both wings of an arrowhead.
pub(crate) fn arrowhead(surface: &mut dyn Surface, color: Color, head: &Arrowhead) {
    surface.begin_path();
    surface.set_stroke_style(color);
    for wing in head.wings {
        surface.move_to(head.tip.point());
        surface.line_to(wing.point());
    }
    surface.stroke();
    surface.close_path();
}

/// Fill a `width × height` rectangle whose top-left corner is `origin`.
pub(crate) fn rect(surface: &mut dyn Surface, color: Color, origin: Point, width: f64, height: f64) {
    surface.set_fill_style(color);
    surface.fill_rect(Rect::from_origin_size(origin, (width, height)));
}
