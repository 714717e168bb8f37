// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A bounded FIFO queue drawn as a horizontal channel.
//!
//! Boxes slide in from the right edge and pack against the left. Dequeuing
//! slides the front box out to the left, then shifts every remaining box one
//! slot forward, the farther ones taking longer.

use alloc::vec::Vec;

use dsviz_animation::{Motion, MotionStep, Scheduler, UnitQueue};
use dsviz_geometry::{Plane, RelativePoint};
use dsviz_surface::Surface;
use kurbo::Point;

use crate::style::WALL_COLOR;
use crate::util::value_label;
use crate::{Shape, Style, paint};

/// Most boxes the queue holds.
pub const CAPACITY: usize = 6;

/// Box width.
pub const BOX_WIDTH: f64 = 40.0;

/// Box height.
pub const BOX_HEIGHT: f64 = 90.0;

/// Pieces an entering or leaving box slides in.
pub const SLIDE_STEPS: usize = 25;

/// Extra pieces per slot of distance from the front when compacting.
pub const SHIFT_STEPS_PER_SLOT: usize = 5;

const MARGIN: f64 = 50.0;
const CHANNEL_HEIGHT: f64 = 100.0;
const SLOT_GAP: f64 = 2.5;

#[derive(Clone, Copy, Debug)]
enum SlideKind {
    Enqueue(Option<i64>),
    Dequeue,
    Shift(Option<i64>),
}

#[derive(Clone, Debug)]
struct Slide {
    kind: SlideKind,
    motion: Motion,
}

/// A queue visualization.
#[derive(Clone, Debug)]
pub struct Queue {
    plane: Plane,
    style: Style,
    values: Vec<Option<i64>>,
    slides: UnitQueue<Slide>,
}

impl Queue {
    /// A queue holding the first [`CAPACITY`] of `values`, front first.
    pub fn parse(values: &[Option<i64>], plane: Plane, style: Style) -> Self {
        let values: Vec<_> = values.iter().copied().take(CAPACITY).collect();
        tracing::debug!(len = values.len(), "queue parsed");
        Self {
            plane,
            style,
            values,
            slides: UnitQueue::new(),
        }
    }

    /// Current contents, front first.
    pub fn values(&self) -> &[Option<i64>] {
        &self.values
    }

    /// Whether the queue holds [`CAPACITY`] values.
    pub fn is_full(&self) -> bool {
        self.values.len() >= CAPACITY
    }

    /// Add `value` at the back.
    ///
    /// Returns `false`, doing nothing, when the queue is full or boxes are
    /// still moving.
    pub fn enqueue(
        &mut self,
        value: Option<i64>,
        scheduler: &mut Scheduler,
        surface: &mut dyn Surface,
    ) -> bool {
        if self.is_full() || scheduler.is_active() {
            tracing::debug!(len = self.values.len(), busy = scheduler.is_active(), "enqueue rejected");
            return false;
        }
        let slot = self.values.len();
        self.values.push(value);
        self.launch_enqueue(slot, value, scheduler, surface);
        true
    }

    /// Remove the front value.
    ///
    /// Returns `false`, doing nothing, when the queue is empty or boxes are
    /// still moving.
    pub fn dequeue(&mut self, scheduler: &mut Scheduler, surface: &mut dyn Surface) -> bool {
        if self.values.is_empty() || scheduler.is_active() {
            tracing::debug!(len = self.values.len(), busy = scheduler.is_active(), "dequeue rejected");
            return false;
        }
        let old_len = self.values.len();
        self.values.remove(0);

        if !scheduler.is_enabled() {
            for slot in 0..old_len {
                self.erase(surface, self.slot(slot));
            }
            for (slot, &value) in self.values.iter().enumerate() {
                self.draw_settled(surface, self.slot(slot), value);
            }
            return true;
        }

        let front = self.slot(0);
        let exit = RelativePoint::new(10.0, front.y, self.plane);
        self.slides.enqueue(
            Slide {
                kind: SlideKind::Dequeue,
                motion: Motion::linear(front, exit, SLIDE_STEPS),
            },
            scheduler,
        );
        for (slot, &value) in self.values.iter().enumerate() {
            let motion = Motion::linear(
                self.slot(slot + 1),
                self.slot(slot),
                (slot + 1) * SHIFT_STEPS_PER_SLOT,
            );
            self.slides.enqueue(
                Slide {
                    kind: SlideKind::Shift(value),
                    motion,
                },
                scheduler,
            );
        }
        true
    }

    /// Top-left corner of a box resting in `slot`.
    fn slot(&self, slot: usize) -> RelativePoint {
        RelativePoint::new(
            MARGIN + SLOT_GAP + slot as f64 * (BOX_WIDTH + SLOT_GAP),
            self.plane.height / 2.0 - BOX_HEIGHT / 2.0,
            self.plane,
        )
    }

    fn launch_enqueue(
        &mut self,
        slot: usize,
        value: Option<i64>,
        scheduler: &mut Scheduler,
        surface: &mut dyn Surface,
    ) {
        let rest = self.slot(slot);
        if !scheduler.is_enabled() {
            self.draw_settled(surface, rest, value);
            return;
        }
        let entry = RelativePoint::new(self.plane.width - 5.0 - BOX_WIDTH, rest.y, self.plane);
        self.slides.enqueue(
            Slide {
                kind: SlideKind::Enqueue(value),
                motion: Motion::linear(entry, rest, SLIDE_STEPS),
            },
            scheduler,
        );
    }

    fn draw_settled(&self, surface: &mut dyn Surface, at: RelativePoint, value: Option<i64>) {
        paint::rect(
            surface,
            self.style.node,
            Point::new(at.x - 1.0, at.y - 1.0),
            BOX_WIDTH,
            BOX_HEIGHT,
        );
        self.label(surface, at, value);
    }

    fn label(&self, surface: &mut dyn Surface, at: RelativePoint, value: Option<i64>) {
        paint::text(
            surface,
            &value_label(value, ""),
            Point::new(at.x + BOX_WIDTH / 2.0 - 2.0, at.y + BOX_HEIGHT / 2.0 + 3.0),
            self.style.node_font_color,
            &self.style.node_font,
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
        let length = self.plane.width - 2.0 * MARGIN;
        let top = self.plane.height / 2.0 - CHANNEL_HEIGHT / 2.0;
        surface.begin_path();
        surface.set_stroke_style(WALL_COLOR);
        for y in [top, top + CHANNEL_HEIGHT] {
            surface.move_to(Point::new(MARGIN, y));
            surface.line_to(Point::new(MARGIN + length, y));
        }
        surface.stroke();
        surface.close_path();
    }
}

impl Shape for Queue {
    fn plot(&mut self, scheduler: &mut Scheduler, surface: &mut dyn Surface) {
        paint::background(surface, self.plane, &self.style);
        self.walls(surface);
        self.slides.clear();
        let values = self.values.clone();
        for (slot, value) in values.into_iter().enumerate() {
            self.launch_enqueue(slot, value, scheduler, surface);
        }
    }

    fn on_frame(&mut self, scheduler: &mut Scheduler, surface: &mut dyn Surface) {
        let Some(slide) = self.slides.running_mut() else {
            return;
        };
        match slide.motion.advance() {
            Some(MotionStep::Move { from, to }) => {
                tracing::trace!(x = to.x, y = to.y, "queue box moved");
                surface.begin_path();
                if let Some(from) = from {
                    self.erase(surface, from);
                }
                paint::rect(surface, self.style.node, to.point(), BOX_WIDTH, BOX_HEIGHT);
                surface.close_path();
                scheduler.request();
            }
            Some(MotionStep::Arrived { last }) => {
                let kind = slide.kind;
                self.slides.finish(scheduler);
                match kind {
                    SlideKind::Enqueue(value) | SlideKind::Shift(value) => {
                        self.label(surface, last, value);
                    }
                    SlideKind::Dequeue => self.erase(surface, last),
                }
            }
            None => {
                self.slides.finish(scheduler);
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

    fn drain(queue: &mut Queue, scheduler: &mut Scheduler, rec: &mut Recording) -> usize {
        scheduler.drain(|s, _| queue.on_frame(s, &mut *rec))
    }

    fn labels(rec: &Recording) -> Vec<String> {
        rec.texts().into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn slots_pack_from_the_left() {
        let queue = Queue::parse(&[], PLANE, Style::default());
        let front = queue.slot(0);
        assert_eq!((front.x, front.y), (52.5, 155.0));
        assert_eq!(queue.slot(2).x, 137.5);
    }

    #[test]
    fn enqueue_beyond_capacity_is_ignored() {
        let values: Vec<_> = (1..=6).map(Some).collect();
        let mut queue = Queue::parse(&values, PLANE, Style::default());
        let mut scheduler = Scheduler::new();
        let mut rec = Recording::new();
        queue.plot(&mut scheduler, &mut rec);
        drain(&mut queue, &mut scheduler, &mut rec);
        assert!(!queue.enqueue(Some(7), &mut scheduler, &mut rec));
        assert_eq!(queue.values().len(), CAPACITY);
        assert!(scheduler.is_inactive());
    }

    #[test]
    fn dequeue_slides_out_then_compacts() {
        let mut queue = Queue::parse(&[Some(1), Some(2), Some(3)], PLANE, Style::default());
        let mut scheduler = Scheduler::new();
        let mut rec = Recording::new();
        queue.plot(&mut scheduler, &mut rec);
        // 26 points plus the landing, per box.
        assert_eq!(drain(&mut queue, &mut scheduler, &mut rec), 81);
        assert_eq!(labels(&rec), ["1", "2", "3"]);

        rec.clear();
        assert!(queue.dequeue(&mut scheduler, &mut rec));
        assert!(!queue.dequeue(&mut scheduler, &mut rec), "dequeue while moving");
        assert_eq!(queue.values(), [Some(2), Some(3)]);
        // Exit slide 27, then shifts of 5 and 10 pieces.
        assert_eq!(drain(&mut queue, &mut scheduler, &mut rec), 27 + 7 + 12);
        assert_eq!(labels(&rec), ["2", "3"]);

        let texts = rec.texts();
        assert_eq!(texts[0].at, Point::new(70.5, 203.0));
        assert_eq!(texts[1].at, Point::new(113.0, 203.0));
    }

    #[test]
    fn dequeue_on_empty_is_ignored() {
        let mut queue = Queue::parse(&[], PLANE, Style::default());
        let mut scheduler = Scheduler::new();
        let mut rec = Recording::new();
        queue.plot(&mut scheduler, &mut rec);
        assert!(!queue.dequeue(&mut scheduler, &mut rec));
        assert!(scheduler.is_inactive());
    }

    #[test]
    fn instant_dequeue_redraws_the_rest() {
        let mut queue = Queue::parse(&[Some(1), Some(2)], PLANE, Style::default());
        let mut scheduler = Scheduler::new();
        scheduler.set_enabled(false);
        let mut rec = Recording::new();
        queue.plot(&mut scheduler, &mut rec);
        assert_eq!(labels(&rec), ["1", "2"]);

        rec.clear();
        assert!(queue.dequeue(&mut scheduler, &mut rec));
        let background = Style::default().background;
        let rects = rec.filled_rects();
        assert_eq!(rects.iter().filter(|(_, c)| *c == Some(background)).count(), 2);
        assert_eq!(labels(&rec), ["2"]);
        assert_eq!(rec.texts()[0].at, Point::new(70.5, 203.0));
    }
}
