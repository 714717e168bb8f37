// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linked lists laid out in a zig-zag.
//!
//! Rows hold up to four nodes. Even rows run left to right and odd rows are
//! mirrored, so the last node of a row sits directly above the first node of
//! the next and every edge is either horizontal or straight down.

use alloc::vec::Vec;

use dsviz_animation::{EdgeCursor, EdgeSequence, EdgeStep, Scheduler};
use dsviz_geometry::arrow::{axis_arrowhead, reverse_axis_arrowhead};
use dsviz_geometry::{Plane, RelativePoint};
use dsviz_surface::Surface;

use crate::util::{shortened, trim_nulls, value_label};
use crate::{Options, Shape, Style, paint};

/// Pieces each link is revealed in.
pub const LINK_STEPS: usize = 15;

/// Most nodes in one row.
pub const ROW_LEN: usize = 4;

/// Label drawn for a `None` element.
pub const NULL_LABEL: &str = "null";

/// A linked-list visualization.
#[derive(Clone, Debug)]
pub struct LinkedList {
    plane: Plane,
    style: Style,
    options: Options,
    values: Vec<Option<i64>>,
    positions: Vec<RelativePoint>,
    links: Vec<(RelativePoint, RelativePoint)>,
    radius: f64,
    reveal: EdgeSequence,
}

impl LinkedList {
    /// Lay out `values` on `plane`, after trimming the outer `None` runs.
    pub fn parse(values: &[Option<i64>], options: Options, plane: Plane, style: Style) -> Self {
        let values = trim_nulls(values).to_vec();
        let n = values.len();
        let mut positions = Vec::with_capacity(n);
        let mut radius = style.min_radius;

        if n > 0 {
            let grid_width = ROW_LEN.min(n);
            let grid_height = n.div_ceil(grid_width);
            let cell = plane.width / grid_width as f64;
            radius = style.clamped_radius(cell);
            let top = (plane.height - grid_height as f64 * cell) / 2.0;
            for i in 0..n {
                let (row, col) = (i / grid_width, i % grid_width);
                let mut x = col as f64 * cell + cell / 2.0;
                if row % 2 == 1 {
                    x = plane.width - x;
                }
                let y = top + row as f64 * cell + cell / 2.0;
                positions.push(RelativePoint::new(x, y, plane));
            }
        }

        let links = positions
            .windows(2)
            .map(|pair| shortened(pair[0], pair[1], radius))
            .collect();
        tracing::debug!(nodes = n, radius, "linked list laid out");

        Self {
            plane,
            style,
            options,
            values,
            positions,
            links,
            radius,
            reveal: EdgeSequence::default(),
        }
    }

    /// The trimmed values.
    pub fn values(&self) -> &[Option<i64>] {
        &self.values
    }

    /// Node centers, one per value.
    pub fn positions(&self) -> &[RelativePoint] {
        &self.positions
    }

    /// Links between consecutive nodes, trimmed to the node circles.
    pub fn links(&self) -> &[(RelativePoint, RelativePoint)] {
        &self.links
    }

    /// Node radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    fn draw_arrowheads(&self, surface: &mut dyn Surface, from: RelativePoint, to: RelativePoint) {
        if let Some(head) = axis_arrowhead(to, from) {
            paint::arrowhead(surface, self.style.edge, &head);
        }
        if self.options.contains(Options::DOUBLY) {
            if let Some(head) = reverse_axis_arrowhead(to, from) {
                paint::arrowhead(surface, self.style.edge, &head);
            }
        }
    }
}

impl Shape for LinkedList {
    fn plot(&mut self, scheduler: &mut Scheduler, surface: &mut dyn Surface) {
        paint::background(surface, self.plane, &self.style);
        for (value, &center) in self.values.iter().zip(&self.positions) {
            let label = value_label(*value, NULL_LABEL);
            paint::node(surface, &self.style, center, self.radius, &label);
        }

        if scheduler.is_enabled() {
            self.reveal = EdgeSequence::new(
                self.links
                    .iter()
                    .map(|&(from, to)| EdgeCursor::between(from, to, LINK_STEPS))
                    .collect(),
            );
            self.on_frame(scheduler, surface);
        } else {
            for &(from, to) in &self.links {
                paint::line(surface, self.style.edge, from, to);
                self.draw_arrowheads(surface, from, to);
            }
        }
    }

    fn on_frame(&mut self, scheduler: &mut Scheduler, surface: &mut dyn Surface) {
        match self.reveal.step(scheduler) {
            Some((_, EdgeStep::Segment { from, to })) => {
                paint::line(surface, self.style.edge, from, to);
            }
            Some((_, EdgeStep::Done { first, last })) => {
                self.draw_arrowheads(surface, first, last);
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsviz_surface::Recording;

    const PLANE: Plane = Plane::new(400.0, 400.0);

    fn xy(list: &LinkedList) -> Vec<(f64, f64)> {
        list.positions().iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn rows_zig_zag() {
        let values: Vec<_> = (1..=6).map(Some).collect();
        let list = LinkedList::parse(&values, Options::empty(), PLANE, Style::default());
        // Four columns of 100; two rows centered vertically with 100 padding.
        assert_eq!(
            xy(&list),
            [
                (50.0, 150.0),
                (150.0, 150.0),
                (250.0, 150.0),
                (350.0, 150.0),
                (350.0, 250.0),
                (250.0, 250.0),
            ]
        );
        assert_eq!(list.radius(), 25.0);
        assert_eq!(list.links().len(), 5);
        // The row change is a straight drop.
        let (from, to) = list.links()[3];
        assert_eq!((from.x, from.y), (350.0, 175.0));
        assert_eq!((to.x, to.y), (350.0, 225.0));
    }

    #[test]
    fn short_lists_use_fewer_columns() {
        let list = LinkedList::parse(&[None, Some(1), Some(2), None], Options::empty(), PLANE, Style::default());
        assert_eq!(list.values(), [Some(1), Some(2)]);
        assert_eq!(xy(&list), [(100.0, 200.0), (300.0, 200.0)]);
        assert_eq!(list.radius(), 50.0);
    }

    #[test]
    fn interior_nulls_are_labeled() {
        let mut list = LinkedList::parse(&[Some(1), None, Some(3)], Options::empty(), PLANE, Style::default());
        let mut scheduler = Scheduler::new();
        scheduler.set_enabled(false);
        let mut rec = Recording::new();
        list.plot(&mut scheduler, &mut rec);
        let labels: Vec<_> = rec.texts().into_iter().map(|t| t.text).collect();
        assert_eq!(labels, ["1", "null", "3"]);
    }

    #[test]
    fn doubly_linked_draws_both_heads() {
        let values = [Some(1), Some(2)];
        let mut scheduler = Scheduler::new();
        scheduler.set_enabled(false);

        let mut single = Recording::new();
        LinkedList::parse(&values, Options::empty(), PLANE, Style::default())
            .plot(&mut scheduler, &mut single);
        let mut double = Recording::new();
        LinkedList::parse(&values, Options::DOUBLY, PLANE, Style::default())
            .plot(&mut scheduler, &mut double);

        // One link line plus two wings per head.
        assert_eq!(single.stroked_lines().len(), 3);
        assert_eq!(double.stroked_lines().len(), 5);
    }

    #[test]
    fn empty_list_draws_only_the_background() {
        let mut list = LinkedList::parse(&[None, None], Options::empty(), PLANE, Style::default());
        let mut scheduler = Scheduler::new();
        let mut rec = Recording::new();
        list.plot(&mut scheduler, &mut rec);
        assert_eq!(rec.filled_rects().len(), 1);
        assert!(rec.circles().is_empty());
        assert!(scheduler.is_inactive());
    }
}
