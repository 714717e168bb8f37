// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single-flight frame scheduler.
//!
//! A [`Scheduler`] holds at most one outstanding frame request. Shapes call
//! [`Scheduler::request`] when they want another tick and
//! [`Scheduler::cancel`] when a unit is finished; the host delivers ticks with
//! [`Scheduler::next_frame`] (or [`Scheduler::drain`]) and forwards them to the
//! shape that owns the animation.
//!
//! ```
//! use dsviz_animation::Scheduler;
//!
//! let mut scheduler = Scheduler::new();
//! assert!(scheduler.is_inactive());
//!
//! let id = scheduler.request();
//! assert_eq!(scheduler.active(), Some(id));
//! assert_eq!(scheduler.next_frame(), Some(id));
//! // A frame is delivered once.
//! assert_eq!(scheduler.next_frame(), None);
//!
//! scheduler.cancel();
//! assert!(scheduler.is_cancelled(id));
//! assert!(scheduler.is_inactive());
//! ```

/// Identifier of a frame request.
///
/// Identifiers grow monotonically for the lifetime of a [`Scheduler`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameId(u64);

impl FrameId {
    /// The raw identifier.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Frame-request bookkeeping shared by every animated shape.
#[derive(Clone, Debug)]
pub struct Scheduler {
    enabled: bool,
    last_issued: u64,
    active: Option<FrameId>,
    delivered: Option<FrameId>,
    // Every id at or below this value is cancelled; 0 means none.
    cancelled_through: u64,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    /// A scheduler with animation enabled and no outstanding request.
    pub const fn new() -> Self {
        Self {
            enabled: true,
            last_issued: 0,
            active: None,
            delivered: None,
            cancelled_through: 0,
        }
    }

    /// Whether shapes should animate rather than draw instantly.
    #[inline]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Toggle animated rendering.
    ///
    /// This only affects shapes plotted afterwards; an animation already in
    /// flight keeps running until it completes or is cancelled.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Issue a new frame request and make it the active one.
    pub fn request(&mut self) -> FrameId {
        self.last_issued += 1;
        let id = FrameId(self.last_issued);
        self.active = Some(id);
        tracing::trace!(id = id.0, "frame requested");
        id
    }

    /// Cancel the active request, along with every earlier one.
    ///
    /// Calling this while inactive does nothing.
    pub fn cancel(&mut self) {
        if let Some(id) = self.active.take() {
            self.cancelled_through = self.cancelled_through.max(id.0);
            tracing::trace!(id = id.0, "frame cancelled");
        }
    }

    /// The outstanding request, if any.
    #[inline]
    pub const fn active(&self) -> Option<FrameId> {
        self.active
    }

    /// Whether a request is outstanding.
    #[inline]
    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Whether no request is outstanding.
    #[inline]
    pub const fn is_inactive(&self) -> bool {
        self.active.is_none()
    }

    /// Whether `id` has been cancelled.
    #[inline]
    pub const fn is_cancelled(&self, id: FrameId) -> bool {
        id.0 <= self.cancelled_through
    }

    /// Deliver the active request if it has not been delivered yet.
    ///
    /// A shape that wants another tick must call [`request`](Self::request)
    /// again from its frame handler.
    pub fn next_frame(&mut self) -> Option<FrameId> {
        let id = self.active?;
        if self.delivered == Some(id) || self.is_cancelled(id) {
            return None;
        }
        self.delivered = Some(id);
        Some(id)
    }

    /// Deliver frames to `on_frame` until none is due.
    ///
    /// Returns the number of frames delivered. The callback receives the
    /// scheduler so it can request the following frame.
    pub fn drain(&mut self, mut on_frame: impl FnMut(&mut Self, FrameId)) -> usize {
        let mut frames = 0;
        while let Some(id) = self.next_frame() {
            on_frame(self, id);
            frames += 1;
        }
        frames
    }
}
