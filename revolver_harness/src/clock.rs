// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A manually advanced clock with one-shot timers.
//!
//! [`ManualClock`] owns the current [`HostTime`] and the set of pending
//! deadlines. [`ManualTimer`] is the [`SlideTimer`] handed to a slider; it
//! schedules against the clock it was created from. Nothing fires on its
//! own: [`ManualClock::advance`] moves time forward and returns the tokens
//! that became due, in deadline order, for the caller to deliver.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use revolver_core::time::{Duration, HostTime};
use revolver_core::timer::{SlideTimer, TimerToken};

#[derive(Debug, Default)]
struct ClockInner {
    now: HostTime,
    next_token: u64,
    /// Pending callbacks, unordered.
    pending: Vec<(HostTime, TimerToken)>,
    scheduled: u64,
}

/// Shared handle to a deterministic clock.
///
/// Cloning produces another handle to the same clock.
#[derive(Clone, Default)]
pub struct ManualClock {
    inner: Rc<RefCell<ClockInner>>,
}

impl fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ManualClock")
            .field("now", &inner.now)
            .field("pending", &inner.pending.len())
            .finish_non_exhaustive()
    }
}

impl ManualClock {
    /// Creates a clock at time zero with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a timer that schedules against this clock.
    #[must_use]
    pub fn timer(&self) -> ManualTimer {
        ManualTimer {
            inner: Rc::clone(&self.inner),
        }
    }

    /// Current time.
    #[must_use]
    pub fn now(&self) -> HostTime {
        self.inner.borrow().now
    }

    /// Number of callbacks scheduled but not yet due or cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<HostTime> {
        self.inner.borrow().pending.iter().map(|(at, _)| *at).min()
    }

    /// Total number of `schedule` calls so far.
    #[must_use]
    pub fn scheduled_count(&self) -> u64 {
        self.inner.borrow().scheduled
    }

    /// Moves time forward by `by` and returns the tokens that became due,
    /// earliest deadline first. Due callbacks are no longer pending.
    pub fn advance(&self, by: Duration) -> Vec<TimerToken> {
        let mut inner = self.inner.borrow_mut();
        inner.now = inner.now.saturating_add(by);
        let now = inner.now;
        let mut due: Vec<(HostTime, TimerToken)> = Vec::new();
        inner.pending.retain(|&(at, token)| {
            if at <= now {
                due.push((at, token));
                false
            } else {
                true
            }
        });
        due.sort();
        due.into_iter().map(|(_, token)| token).collect()
    }
}

/// The [`SlideTimer`] side of a [`ManualClock`].
pub struct ManualTimer {
    inner: Rc<RefCell<ClockInner>>,
}

impl fmt::Debug for ManualTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualTimer").finish_non_exhaustive()
    }
}

impl SlideTimer for ManualTimer {
    fn schedule(&mut self, after: Duration) -> TimerToken {
        let mut inner = self.inner.borrow_mut();
        inner.next_token += 1;
        inner.scheduled += 1;
        let token = TimerToken(inner.next_token);
        let at = inner.now.saturating_add(after);
        inner.pending.push((at, token));
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        self.inner
            .borrow_mut()
            .pending
            .retain(|&(_, t)| t != token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callbacks_fire_at_their_deadline() {
        let clock = ManualClock::new();
        let mut timer = clock.timer();
        let late = timer.schedule(Duration::from_secs(3));
        let early = timer.schedule(Duration::from_secs(1));

        assert!(clock.advance(Duration::from_millis(999)).is_empty());
        assert_eq!(clock.advance(Duration::from_millis(1)), [early]);
        assert_eq!(clock.next_deadline(), Some(HostTime(3_000_000_000)));
        assert_eq!(clock.advance(Duration::from_secs(5)), [late]);
        assert_eq!(clock.pending_count(), 0);
        assert_eq!(clock.now(), HostTime(6_000_000_000));
    }

    #[test]
    fn due_tokens_are_ordered_by_deadline() {
        let clock = ManualClock::new();
        let mut timer = clock.timer();
        let b = timer.schedule(Duration::from_millis(20));
        let a = timer.schedule(Duration::from_millis(10));
        assert_eq!(clock.advance(Duration::from_secs(1)), [a, b]);
    }

    #[test]
    fn cancelled_callbacks_never_fire() {
        let clock = ManualClock::new();
        let mut timer = clock.timer();
        let token = timer.schedule(Duration::from_secs(1));
        let kept = timer.schedule(Duration::from_secs(5));
        timer.cancel(token);
        timer.cancel(token);

        assert_eq!(clock.pending_count(), 1, "second cancel is a no-op");
        assert!(clock.advance(Duration::from_secs(2)).is_empty());
        assert_eq!(clock.advance(Duration::from_secs(3)), [kept]);
        assert_eq!(clock.next_deadline(), None);
    }

    #[test]
    fn schedule_is_relative_to_now() {
        let clock = ManualClock::new();
        let mut timer = clock.timer();
        let _ = clock.advance(Duration::from_secs(10));
        let _ = timer.schedule(Duration::from_secs(2));
        assert_eq!(clock.next_deadline(), Some(HostTime(12_000_000_000)));
        assert_eq!(clock.scheduled_count(), 1);
    }
}
