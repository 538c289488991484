// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot timer seam for auto-advance.
//!
//! The slider never waits. When auto-slide needs a delayed callback it asks
//! its [`SlideTimer`] for one and remembers the returned [`TimerToken`]. The
//! host's timer later calls
//! [`Slider::on_auto_slide_timer`](crate::slider::Slider::on_auto_slide_timer)
//! with that token on the same thread that drives the slider. Tokens that
//! are not the slider's live token are ignored, so a fire that races with a
//! cancellation can never act on stale state.

use core::fmt;

use crate::time::Duration;

/// Identifies one scheduled callback.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken(pub u64);

impl fmt::Debug for TimerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimerToken({})", self.0)
    }
}

/// Schedules and cancels one-shot callbacks on the host's main run loop.
///
/// Implementations must return a token that is unique among tokens that are
/// still pending, must never repeat a callback, and must make
/// [`cancel`](Self::cancel) take effect synchronously.
pub trait SlideTimer {
    /// Schedules a single callback `after` from now.
    fn schedule(&mut self, after: Duration) -> TimerToken;

    /// Cancels a pending callback. Cancelling an unknown or already fired
    /// token is a no-op.
    fn cancel(&mut self, token: TimerToken);
}

impl<T: SlideTimer + ?Sized> SlideTimer for alloc::boxed::Box<T> {
    fn schedule(&mut self, after: Duration) -> TimerToken {
        (**self).schedule(after)
    }

    fn cancel(&mut self, token: TimerToken) {
        (**self).cancel(token);
    }
}
