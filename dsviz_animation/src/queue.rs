// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strictly sequential execution of animation units.

use alloc::collections::VecDeque;

use crate::Scheduler;

/// Pending units plus the one currently running.
///
/// Only one unit runs at a time. A unit starts when it is enqueued onto an
/// idle queue while the scheduler is inactive, or when the unit ahead of it
/// [finishes](Self::finish).
#[derive(Clone, Debug)]
pub struct UnitQueue<U> {
    pending: VecDeque<U>,
    running: Option<U>,
}

impl<U> Default for UnitQueue<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> UnitQueue<U> {
    /// An empty queue.
    pub const fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            running: None,
        }
    }

    /// Add a unit; start it right away if nothing else is running.
    ///
    /// Returns `true` when the unit started immediately.
    pub fn enqueue(&mut self, unit: U, scheduler: &mut Scheduler) -> bool {
        if self.running.is_none() && scheduler.is_inactive() {
            self.running = Some(unit);
            scheduler.request();
            true
        } else {
            self.pending.push_back(unit);
            false
        }
    }

    /// The running unit.
    pub fn running(&self) -> Option<&U> {
        self.running.as_ref()
    }

    /// The running unit, mutably.
    pub fn running_mut(&mut self) -> Option<&mut U> {
        self.running.as_mut()
    }

    /// Number of units waiting behind the running one.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is running or pending.
    pub fn is_idle(&self) -> bool {
        self.running.is_none() && self.pending.is_empty()
    }

    /// Retire the running unit and start the next pending one.
    ///
    /// The active frame request is cancelled; a new one is requested only when
    /// another unit starts. Returns the retired unit.
    pub fn finish(&mut self, scheduler: &mut Scheduler) -> Option<U> {
        let done = self.running.take();
        scheduler.cancel();
        if let Some(next) = self.pending.pop_front() {
            self.running = Some(next);
            scheduler.request();
        }
        done
    }

    /// Drop every unit without running it.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.running = None;
    }
}
