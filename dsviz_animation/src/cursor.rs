// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incremental edge reveal.

use alloc::vec::Vec;

use dsviz_geometry::RelativePoint;
use dsviz_geometry::kernel::segment_line;

use crate::Scheduler;

/// One step of an [`EdgeCursor`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EdgeStep {
    /// Stroke the next piece of the edge.
    Segment {
        /// Start of the piece.
        from: RelativePoint,
        /// End of the piece.
        to: RelativePoint,
    },
    /// The edge is fully drawn. Carries the endpoints for arrowheads.
    Done {
        /// First point of the edge.
        first: RelativePoint,
        /// Last point of the edge.
        last: RelativePoint,
    },
}

/// Walks the pieces of a segmented edge, one per tick.
///
/// A cursor over `n + 1` points yields `n` [`EdgeStep::Segment`]s, then a
/// single [`EdgeStep::Done`], then `None` forever. An empty cursor yields
/// `None` straight away.
#[derive(Clone, Debug, Default)]
pub struct EdgeCursor {
    points: Vec<RelativePoint>,
    index: usize,
}

impl EdgeCursor {
    /// A cursor over precomputed points.
    pub fn new(points: Vec<RelativePoint>) -> Self {
        Self { points, index: 0 }
    }

    /// A cursor over `from → to` cut into `steps` pieces.
    pub fn between(from: RelativePoint, to: RelativePoint, steps: usize) -> Self {
        Self::new(segment_line(from, to, steps))
    }

    /// The points this cursor walks.
    pub fn points(&self) -> &[RelativePoint] {
        &self.points
    }

    /// Whether the terminal step has already been produced.
    pub fn is_exhausted(&self) -> bool {
        self.index >= self.points.len()
    }

    /// Produce the next step.
    pub fn advance(&mut self) -> Option<EdgeStep> {
        let len = self.points.len();
        let step = if self.index + 1 < len {
            EdgeStep::Segment {
                from: self.points[self.index],
                to: self.points[self.index + 1],
            }
        } else if self.index + 1 == len {
            EdgeStep::Done {
                first: self.points[0],
                last: self.points[len - 1],
            }
        } else {
            return None;
        };
        self.index += 1;
        Some(step)
    }
}

/// Ordered edge cursors revealed one after another.
#[derive(Clone, Debug, Default)]
pub struct EdgeSequence {
    cursors: Vec<EdgeCursor>,
    current: usize,
}

impl EdgeSequence {
    /// A sequence over `cursors`, in order.
    pub fn new(cursors: Vec<EdgeCursor>) -> Self {
        Self { cursors, current: 0 }
    }

    /// Number of cursors in the sequence.
    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    /// Whether the sequence holds no cursors.
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    /// Whether every cursor has run to its terminal step.
    pub fn is_finished(&self) -> bool {
        self.current >= self.cursors.len()
    }

    /// Index of the cursor the next step comes from.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Advance the current cursor and schedule the following tick.
    ///
    /// After a segment the next frame is requested. After a terminal step the
    /// active request is cancelled and, when cursors remain, a fresh one is
    /// requested for the next cursor. Returns the index of the cursor the step
    /// came from alongside the step.
    pub fn step(&mut self, scheduler: &mut Scheduler) -> Option<(usize, EdgeStep)> {
        loop {
            let index = self.current;
            let cursor = self.cursors.get_mut(index)?;
            match cursor.advance() {
                Some(step @ EdgeStep::Segment { .. }) => {
                    scheduler.request();
                    return Some((index, step));
                }
                Some(step @ EdgeStep::Done { .. }) => {
                    self.finish_current(scheduler);
                    return Some((index, step));
                }
                // Empty cursor: move past it without spending a frame.
                None => self.current += 1,
            }
        }
    }

    fn finish_current(&mut self, scheduler: &mut Scheduler) {
        scheduler.cancel();
        self.current += 1;
        if !self.is_finished() {
            scheduler.request();
        }
    }
}
