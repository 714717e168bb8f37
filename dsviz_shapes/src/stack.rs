// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A bounded stack drawn as boxes in an open-topped well.
//!
//! Boxes fly in from the top-left corner along a cubic Bézier curve and leave
//! toward the top-right corner. Flights run one at a time through a
//! [`UnitQueue`]; while one is in the air the stack rejects new operations.

use alloc::vec::Vec;

use dsviz_animation::motion::DEFAULT_SPEED;
use dsviz_animation::{Motion, MotionStep, Scheduler, UnitQueue};
use dsviz_geometry::{Plane, RelativePoint};
use dsviz_surface::{Color, Surface};
use kurbo::Point;

use crate::style::{LABEL_FONT, WALL_COLOR};
use crate::util::value_label;
use crate::{Shape, Style, paint};

/// Most boxes the stack holds.
pub const CAPACITY: usize = 6;

/// Box width.
pub const BOX_WIDTH: f64 = 90.0;

/// Box height.
pub const BOX_HEIGHT: f64 = 40.0;

/// Gap between the well and the canvas edge, above and below.
const MARGIN: f64 = 50.0;

/// Inner width of the well.
const WELL_WIDTH: f64 = 100.0;

#[derive(Clone, Debug)]
enum FlightKind {
    Push(Option<i64>),
    Pop,
}

#[derive(Clone, Debug)]
struct Flight {
    kind: FlightKind,
    motion: Motion,
}

/// A stack visualization.
#[derive(Clone, Debug)]
pub struct Stack {
    plane: Plane,
    style: Style,
    values: Vec<Option<i64>>,
    flights: UnitQueue<Flight>,
}

impl Stack {
    /// A stack holding the first [`CAPACITY`] of `values`, bottom first.
    pub fn parse(values: &[Option<i64>], plane: Plane, style: Style) -> Self {
        let values: Vec<_> = values.iter().copied().take(CAPACITY).collect();
        tracing::debug!(len = values.len(), "stack parsed");
        Self {
            plane,
            style,
            values,
            flights: UnitQueue::new(),
        }
    }

    /// Current contents, bottom first.
    ///
    /// Operations update this immediately, before their flight lands.
    pub fn values(&self) -> &[Option<i64>] {
        &self.values
    }

    /// Whether the stack holds [`CAPACITY`] values.
    pub fn is_full(&self) -> bool {
        self.values.len() >= CAPACITY
    }

    /// Put `value` on top.
    ///
    /// Returns `false`, doing nothing, when the stack is full or a flight is
    /// still in the air.
    pub fn push(
        &mut self,
        value: Option<i64>,
        scheduler: &mut Scheduler,
        surface: &mut dyn Surface,
    ) -> bool {
        if self.is_full() || scheduler.is_active() {
            tracing::debug!(len = self.values.len(), busy = scheduler.is_active(), "push rejected");
            return false;
        }
        let slot = self.values.len();
        self.values.push(value);
        self.launch_push(slot, value, scheduler, surface);
        true
    }

    /// Take the top value off.
    ///
    /// Returns `false`, doing nothing, when the stack is empty or a flight is
    /// still in the air.
    pub fn pop(&mut self, scheduler: &mut Scheduler, surface: &mut dyn Surface) -> bool {
        if self.values.is_empty() || scheduler.is_active() {
            tracing::debug!(len = self.values.len(), busy = scheduler.is_active(), "pop rejected");
            return false;
        }
        self.values.pop();
        let slot = self.values.len();
        let rest = self.landing(slot);
        if scheduler.is_enabled() {
            let y = self.cruise_y(slot);
            let mid = self.plane.width / 2.0 + BOX_WIDTH / 2.0;
            let motion = Motion::cubic(
                rest.point(),
                Point::new(mid, y - (y - 10.0) / 4.0),
                Point::new(mid, 10.0 + (y - 10.0) / 4.0),
                Point::new(self.plane.width - 10.0, 10.0),
                DEFAULT_SPEED,
                self.plane,
            );
            self.flights.enqueue(
                Flight {
                    kind: FlightKind::Pop,
                    motion,
                },
                scheduler,
            );
        } else {
            self.erase(surface, rest);
        }
        true
    }

    /// Reference height of the curve's control points for `slot`.
    fn cruise_y(&self, slot: usize) -> f64 {
        self.plane.height - (MARGIN + (slot + 1) as f64 * (BOX_HEIGHT + 2.0))
    }

    /// Top-left corner of a box resting in `slot`.
    fn landing(&self, slot: usize) -> RelativePoint {
        RelativePoint::new(
            self.plane.width / 2.0 - BOX_WIDTH / 2.0,
            self.plane.height - (MARGIN + (slot + 1) as f64 * (BOX_HEIGHT + 4.0)) + 12.0,
            self.plane,
        )
    }

    fn launch_push(
        &mut self,
        slot: usize,
        value: Option<i64>,
        scheduler: &mut Scheduler,
        surface: &mut dyn Surface,
    ) {
        let rest = self.landing(slot);
        if !scheduler.is_enabled() {
            paint::rect(
                surface,
                self.style.node,
                Point::new(rest.x - 1.0, rest.y - 1.0),
                BOX_WIDTH + 2.0,
                BOX_HEIGHT,
            );
            self.label(surface, rest, value, self.style.node_font_color, &self.style.node_font);
            return;
        }
        let y = self.cruise_y(slot);
        let x = rest.x;
        let motion = Motion::cubic(
            Point::new(10.0, 10.0),
            Point::new(x, 10.0 + (y - 10.0) / 4.0),
            Point::new(x, y - (y - 10.0) / 4.0),
            rest.point(),
            DEFAULT_SPEED,
            self.plane,
        );
        self.flights.enqueue(
            Flight {
                kind: FlightKind::Push(value),
                motion,
            },
            scheduler,
        );
    }

    fn label(&self, surface: &mut dyn Surface, at: RelativePoint, value: Option<i64>, color: Color, font: &str) {
        paint::text(
            surface,
            &value_label(value, ""),
            Point::new(at.x + BOX_WIDTH / 2.0 - 2.0, at.y + BOX_HEIGHT / 2.0 + 3.0),
            color,
            font,
        );
    }

    fn erase(&self, surface: &mut dyn Surface, at: RelativePoint) {
        paint::rect(
            surface,
            self.style.background,
            Point::new(at.x - 1.0, at.y - 1.0),
            BOX_WIDTH + 2.0,
            BOX_HEIGHT + 2.0,
        );
    }

    fn walls(&self, surface: &mut dyn Surface) {
        let left = self.plane.width / 2.0 - WELL_WIDTH / 2.0;
        let right = left + WELL_WIDTH;
        let floor = self.plane.height - MARGIN;
        surface.begin_path();
        surface.set_stroke_style(WALL_COLOR);
        surface.move_to(Point::new(left, MARGIN));
        surface.line_to(Point::new(left, floor));
        surface.move_to(Point::new(left, floor));
        surface.line_to(Point::new(right, floor));
        surface.move_to(Point::new(right, floor));
        surface.line_to(Point::new(right, MARGIN));
        surface.stroke();
        surface.close_path();
    }

    /// The side walls only; a passing box may have erased part of them.
    fn side_walls(&self, surface: &mut dyn Surface) {
        let left = self.plane.width / 2.0 - WELL_WIDTH / 2.0;
        let floor = self.plane.height - MARGIN;
        surface.set_stroke_style(WALL_COLOR);
        surface.begin_path();
        for x in [left, left + WELL_WIDTH] {
            surface.move_to(Point::new(x, MARGIN));
            surface.line_to(Point::new(x, floor));
        }
        surface.stroke();
    }
}

impl Shape for Stack {
    fn plot(&mut self, scheduler: &mut Scheduler, surface: &mut dyn Surface) {
        paint::background(surface, self.plane, &self.style);
        self.walls(surface);
        self.flights.clear();
        let values = self.values.clone();
        for (slot, value) in values.into_iter().enumerate() {
            self.launch_push(slot, value, scheduler, surface);
        }
    }

    fn on_frame(&mut self, scheduler: &mut Scheduler, surface: &mut dyn Surface) {
        let Some(flight) = self.flights.running_mut() else {
            return;
        };
        match flight.motion.advance() {
            Some(MotionStep::Move { from, to }) => {
                tracing::trace!(x = to.x, y = to.y, "stack box moved");
                surface.begin_path();
                if let Some(from) = from {
                    self.erase(surface, from);
                }
                self.side_walls(surface);
                paint::rect(surface, self.style.node, to.point(), BOX_WIDTH, BOX_HEIGHT);
                surface.close_path();
                scheduler.request();
            }
            Some(MotionStep::Arrived { last }) => {
                let kind = flight.kind.clone();
                self.flights.finish(scheduler);
                match kind {
                    FlightKind::Push(value) => {
                        self.label(surface, last, value, Color::BLACK, LABEL_FONT);
                    }
                    FlightKind::Pop => self.erase(surface, last),
                }
            }
            None => {
                self.flights.finish(scheduler);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use dsviz_surface::Recording;

    const PLANE: Plane = Plane::new(400.0, 400.0);

    fn drain(stack: &mut Stack, scheduler: &mut Scheduler, rec: &mut Recording) -> usize {
        scheduler.drain(|s, _| stack.on_frame(s, &mut *rec))
    }

    #[test]
    fn input_is_truncated_to_capacity() {
        let values: Vec<_> = (1..=9).map(Some).collect();
        let stack = Stack::parse(&values, PLANE, Style::default());
        assert_eq!(stack.values().len(), CAPACITY);
        assert!(stack.is_full());
    }

    #[test]
    fn boxes_land_in_their_slots() {
        let stack = Stack::parse(&[], PLANE, Style::default());
        let bottom = stack.landing(0);
        assert_eq!((bottom.x, bottom.y), (155.0, 318.0));
        let next = stack.landing(1);
        assert_eq!(next.y, 274.0);
    }

    #[test]
    fn animated_plot_flies_every_box_in_turn() {
        let mut stack = Stack::parse(&[Some(1), Some(2)], PLANE, Style::default());
        let mut scheduler = Scheduler::new();
        let mut rec = Recording::new();
        stack.plot(&mut scheduler, &mut rec);
        assert!(scheduler.is_active());

        // 21 samples plus the landing, per box.
        assert_eq!(drain(&mut stack, &mut scheduler, &mut rec), 44);
        assert!(scheduler.is_inactive());
        let labels: Vec<_> = rec.texts().into_iter().map(|t| (t.text, t.color)).collect();
        assert_eq!(
            labels,
            [
                (String::from("1"), Some(Color::BLACK)),
                (String::from("2"), Some(Color::BLACK)),
            ]
        );
    }

    #[test]
    fn operations_wait_for_the_flight() {
        let mut stack = Stack::parse(&[], PLANE, Style::default());
        let mut scheduler = Scheduler::new();
        let mut rec = Recording::new();
        stack.plot(&mut scheduler, &mut rec);

        assert!(stack.push(Some(4), &mut scheduler, &mut rec));
        assert!(!stack.push(Some(5), &mut scheduler, &mut rec));
        assert!(!stack.pop(&mut scheduler, &mut rec));
        drain(&mut stack, &mut scheduler, &mut rec);

        assert!(stack.pop(&mut scheduler, &mut rec));
        assert!(stack.values().is_empty());
        drain(&mut stack, &mut scheduler, &mut rec);
        assert!(!stack.pop(&mut scheduler, &mut rec));
    }

    #[test]
    fn instant_mode_draws_and_erases_in_place() {
        let mut stack = Stack::parse(&[Some(7)], PLANE, Style::default());
        let mut scheduler = Scheduler::new();
        scheduler.set_enabled(false);
        let mut rec = Recording::new();
        stack.plot(&mut scheduler, &mut rec);
        assert!(scheduler.is_inactive());

        let rects = rec.filled_rects();
        let (box_rect, color) = rects[rects.len() - 1];
        assert_eq!(color, Some(Style::default().node));
        assert_eq!((box_rect.x0, box_rect.y0), (154.0, 317.0));

        rec.clear();
        assert!(stack.pop(&mut scheduler, &mut rec));
        let rects = rec.filled_rects();
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].1, Some(Style::default().background));
        assert_eq!((rects[0].0.x0, rects[0].0.y0), (154.0, 317.0));
    }

    #[test]
    fn full_stack_rejects_push() {
        let values: Vec<_> = (1..=6).map(Some).collect();
        let mut stack = Stack::parse(&values, PLANE, Style::default());
        let mut scheduler = Scheduler::new();
        scheduler.set_enabled(false);
        let mut rec = Recording::new();
        stack.plot(&mut scheduler, &mut rec);
        assert!(!stack.push(Some(7), &mut scheduler, &mut rec));
        assert_eq!(stack.values().len(), CAPACITY);
    }
}
