// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-advance state machine.
//!
//! ```text
//!                enable (no panels)
//!   Disabled ─────────────────────────► Idle
//!      │  ▲                              │ panels assigned
//!      │  │ disable / suspend            ▼
//!      │  └──────────────────────── Scheduled(token) ◄──┐
//!      │ enable (panels)                 │ live fire     │ commit / jump /
//!      └────────────────────────────►    ▼               │ relayout recenters
//!                                    Animating ──────────┘
//! ```
//!
//! At most one timer token is live at any time: every transition out of
//! `Scheduled` cancels the token first, and every (re)schedule cancels the
//! previous token before asking the timer for a new one. Suspension disables
//! auto-slide while remembering whether it was requested, so resumption
//! restores it without the caller re-specifying anything.

use crate::error::SliderError;
use crate::time::Duration;
use crate::timer::{SlideTimer, TimerToken};
use crate::trace::{TimerAction, Tracer};

/// Observable auto-slide state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AutoSlideState {
    /// Auto-slide is off (or suspended).
    Disabled,
    /// Auto-slide is on, but there is no panel to advance to.
    Idle,
    /// A one-shot advance is pending under the given token.
    Scheduled(TimerToken),
    /// The advance fired; the viewport is animating toward the next slot
    /// and the next commit will reschedule.
    Animating,
}

impl AutoSlideState {
    /// Returns `true` for every state except [`Disabled`](Self::Disabled).
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Returns the live timer token, if one is pending.
    #[must_use]
    pub const fn pending_token(self) -> Option<TimerToken> {
        match self {
            Self::Scheduled(token) => Some(token),
            _ => None,
        }
    }
}

/// Auto-slide bookkeeping owned by a [`Slider`](crate::slider::Slider).
///
/// The timer and tracer are passed in per call so the slider can keep them
/// as sibling fields.
#[derive(Debug)]
pub struct AutoSlide {
    state: AutoSlideState,
    interval: Duration,
    requested: bool,
    suspended: bool,
}

impl AutoSlide {
    /// Creates a disabled controller with the given interval.
    ///
    /// Returns [`SliderError::InvalidInterval`] for a zero interval.
    pub fn new(interval: Duration) -> Result<Self, SliderError> {
        if interval.is_zero() {
            return Err(SliderError::InvalidInterval);
        }
        Ok(Self {
            state: AutoSlideState::Disabled,
            interval,
            requested: false,
            suspended: false,
        })
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> AutoSlideState {
        self.state
    }

    /// Whether auto-slide is currently running (not disabled or suspended).
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    /// Whether the caller asked for auto-slide, regardless of suspension.
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.requested
    }

    /// Whether a lifecycle suspension is in effect.
    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Delay used for the next scheduling.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Changes the delay used from the next scheduling on.
    pub fn set_interval(&mut self, interval: Duration) -> Result<(), SliderError> {
        if interval.is_zero() {
            return Err(SliderError::InvalidInterval);
        }
        self.interval = interval;
        Ok(())
    }

    /// Records the caller's enabled flag and applies it unless suspended.
    pub fn set_requested(
        &mut self,
        enabled: bool,
        has_panels: bool,
        timer: &mut dyn SlideTimer,
        tracer: &mut Tracer,
    ) {
        self.requested = enabled;
        if self.suspended {
            return;
        }
        if enabled {
            self.arm(has_panels, timer, tracer);
        } else {
            self.disable(timer, tracer);
        }
    }

    /// Forces auto-slide off, remembering whether it was requested.
    ///
    /// Suspending twice is the same as suspending once.
    pub fn suspend(&mut self, timer: &mut dyn SlideTimer, tracer: &mut Tracer) {
        self.suspended = true;
        self.disable(timer, tracer);
    }

    /// Lifts a suspension and restores the requested state.
    pub fn resume(&mut self, has_panels: bool, timer: &mut dyn SlideTimer, tracer: &mut Tracer) {
        if !self.suspended {
            return;
        }
        self.suspended = false;
        if self.requested {
            self.arm(has_panels, timer, tracer);
        }
    }

    /// Restarts the countdown if auto-slide is running.
    ///
    /// Called after every recentering and panel replacement.
    pub fn rearm(&mut self, has_panels: bool, timer: &mut dyn SlideTimer, tracer: &mut Tracer) {
        if self.state.is_enabled() {
            self.arm(has_panels, timer, tracer);
        }
    }

    /// Accepts a timer fire if `token` is the live one.
    ///
    /// On acceptance the state moves to [`AutoSlideState::Animating`] and the
    /// caller must start the programmatic slide.
    pub fn fire(&mut self, token: TimerToken, tracer: &mut Tracer) -> bool {
        if self.state.pending_token() != Some(token) {
            tracer.timer(token, TimerAction::Stale);
            return false;
        }
        tracer.timer(token, TimerAction::Fired);
        self.transition(AutoSlideState::Animating, tracer);
        true
    }

    /// Cancels any pending token without reporting a state change.
    ///
    /// Used on destruction, where nothing may fire afterwards.
    pub fn cancel_pending(&mut self, timer: &mut dyn SlideTimer, tracer: &mut Tracer) {
        if let Some(token) = self.state.pending_token() {
            timer.cancel(token);
            tracer.timer(token, TimerAction::Cancelled);
            self.state = AutoSlideState::Disabled;
        }
    }

    fn arm(&mut self, has_panels: bool, timer: &mut dyn SlideTimer, tracer: &mut Tracer) {
        let from = self.state;
        if let Some(token) = from.pending_token() {
            timer.cancel(token);
            tracer.timer(token, TimerAction::Cancelled);
        }
        self.state = if has_panels {
            let token = timer.schedule(self.interval);
            tracer.timer(token, TimerAction::Scheduled);
            AutoSlideState::Scheduled(token)
        } else {
            AutoSlideState::Idle
        };
        tracer.auto_slide(from, self.state);
    }

    fn disable(&mut self, timer: &mut dyn SlideTimer, tracer: &mut Tracer) {
        let from = self.state;
        if let Some(token) = from.pending_token() {
            timer.cancel(token);
            tracer.timer(token, TimerAction::Cancelled);
        }
        self.state = AutoSlideState::Disabled;
        tracer.auto_slide(from, self.state);
    }

    fn transition(&mut self, to: AutoSlideState, tracer: &mut Tracer) {
        let from = self.state;
        self.state = to;
        tracer.auto_slide(from, to);
    }
}

#[cfg(test)]
mod tests {
    use crate::test_util::RecordingTimer;

    use super::*;

    fn controller() -> (AutoSlide, RecordingTimer, Tracer) {
        let auto = AutoSlide::new(Duration::from_secs(3)).expect("valid interval");
        (auto, RecordingTimer::default(), Tracer::none())
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert_eq!(
            AutoSlide::new(Duration::ZERO).unwrap_err(),
            SliderError::InvalidInterval
        );
        let (mut auto, _, _) = controller();
        assert_eq!(
            auto.set_interval(Duration::ZERO),
            Err(SliderError::InvalidInterval)
        );
        assert_eq!(auto.interval(), Duration::from_secs(3));
    }

    #[test]
    fn enabling_with_panels_schedules_once() {
        let (mut auto, mut timer, mut tracer) = controller();
        auto.set_requested(true, true, &mut timer, &mut tracer);

        assert!(matches!(auto.state(), AutoSlideState::Scheduled(_)));
        assert_eq!(timer.live().len(), 1);
        assert_eq!(timer.scheduled[0].1, Duration::from_secs(3));
    }

    #[test]
    fn enabling_without_panels_is_idle() {
        let (mut auto, mut timer, mut tracer) = controller();
        auto.set_requested(true, false, &mut timer, &mut tracer);

        assert_eq!(auto.state(), AutoSlideState::Idle);
        assert!(timer.live().is_empty());
    }

    #[test]
    fn toggling_never_leaves_two_live_tokens() {
        let (mut auto, mut timer, mut tracer) = controller();
        for _ in 0..5 {
            auto.set_requested(true, true, &mut timer, &mut tracer);
            assert_eq!(timer.live().len(), 1, "exactly one outstanding callback");
            auto.set_requested(false, true, &mut timer, &mut tracer);
            assert!(timer.live().is_empty(), "disable cancels");
        }
        auto.set_requested(true, true, &mut timer, &mut tracer);
        auto.set_requested(true, true, &mut timer, &mut tracer);
        assert_eq!(timer.live().len(), 1, "re-enabling replaces the token");
    }

    #[test]
    fn only_live_token_fires() {
        let (mut auto, mut timer, mut tracer) = controller();
        auto.set_requested(true, true, &mut timer, &mut tracer);
        let first = auto.state().pending_token().expect("scheduled");
        auto.rearm(true, &mut timer, &mut tracer);
        let second = auto.state().pending_token().expect("scheduled");

        assert_ne!(first, second);
        assert!(!auto.fire(first, &mut tracer), "stale token ignored");
        assert!(auto.fire(second, &mut tracer));
        assert_eq!(auto.state(), AutoSlideState::Animating);
        assert!(!auto.fire(second, &mut tracer), "fires only once");
    }

    #[test]
    fn rearm_after_animation_schedules_again() {
        let (mut auto, mut timer, mut tracer) = controller();
        auto.set_requested(true, true, &mut timer, &mut tracer);
        let token = auto.state().pending_token().expect("scheduled");
        timer.fire(token);
        assert!(auto.fire(token, &mut tracer));

        auto.rearm(true, &mut timer, &mut tracer);
        assert!(matches!(auto.state(), AutoSlideState::Scheduled(_)));
        assert_eq!(timer.live().len(), 1);
    }

    #[test]
    fn rearm_is_inert_when_disabled() {
        let (mut auto, mut timer, mut tracer) = controller();
        auto.rearm(true, &mut timer, &mut tracer);
        assert_eq!(auto.state(), AutoSlideState::Disabled);
        assert!(timer.scheduled.is_empty());
    }

    #[test]
    fn suspend_and_resume_restore_enabled() {
        let (mut auto, mut timer, mut tracer) = controller();
        auto.set_requested(true, true, &mut timer, &mut tracer);

        auto.suspend(&mut timer, &mut tracer);
        assert_eq!(auto.state(), AutoSlideState::Disabled);
        assert!(timer.live().is_empty());
        assert!(auto.is_requested());

        auto.suspend(&mut timer, &mut tracer);
        auto.resume(true, &mut timer, &mut tracer);
        assert!(matches!(auto.state(), AutoSlideState::Scheduled(_)));
        assert_eq!(timer.live().len(), 1);
    }

    #[test]
    fn suspend_and_resume_keep_disabled() {
        let (mut auto, mut timer, mut tracer) = controller();
        auto.suspend(&mut timer, &mut tracer);
        auto.resume(true, &mut timer, &mut tracer);
        assert_eq!(auto.state(), AutoSlideState::Disabled);
        assert!(timer.scheduled.is_empty());
    }

    #[test]
    fn enabling_while_suspended_waits_for_resume() {
        let (mut auto, mut timer, mut tracer) = controller();
        auto.suspend(&mut timer, &mut tracer);
        auto.set_requested(true, true, &mut timer, &mut tracer);
        assert_eq!(auto.state(), AutoSlideState::Disabled);
        assert!(timer.scheduled.is_empty());

        auto.resume(true, &mut timer, &mut tracer);
        assert!(matches!(auto.state(), AutoSlideState::Scheduled(_)));
    }

    #[test]
    fn resume_without_suspend_is_noop() {
        let (mut auto, mut timer, mut tracer) = controller();
        auto.set_requested(true, true, &mut timer, &mut tracer);
        let token = auto.state().pending_token();
        auto.resume(true, &mut timer, &mut tracer);
        assert_eq!(auto.state().pending_token(), token, "no reschedule");
    }
}
