// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the slider.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! slider calls at each discrete transition: relayouts, panel replacement,
//! index commits, jumps, auto-slide state changes and timer traffic. All
//! method bodies default to no-ops, so implementing only the events you care
//! about is fine. Continuous scroll updates are not traced; they already
//! reach the [`SlideObserver`](crate::observer::SlideObserver).
//!
//! [`Tracer`] owns an optional boxed sink. When the `trace` feature is
//! **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use alloc::boxed::Box;

use crate::auto_slide::AutoSlideState;
use crate::timer::TimerToken;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Direction of an index commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlideDirection {
    /// The viewport reached the next slot; the index rotated forward.
    Forward,
    /// The viewport reached the previous slot; the index rotated backward.
    Backward,
}

/// What happened to a timer token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerAction {
    /// A callback was scheduled.
    Scheduled,
    /// A pending callback was cancelled.
    Cancelled,
    /// The live callback fired and was accepted.
    Fired,
    /// A callback fired that was not the live one and was ignored.
    Stale,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after the slot window is recomputed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutEvent {
    /// Slot width (viewport width).
    pub width: f64,
    /// Slot height (viewport height).
    pub height: f64,
}

/// Emitted after the panel list is replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelsReplacedEvent {
    /// Number of panels detached.
    pub old_count: usize,
    /// Number of panels attached.
    pub new_count: usize,
    /// Current index after re-clamping, if any panel exists.
    pub current: Option<usize>,
}

/// Emitted when a completed slide rotates the current index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommitEvent {
    /// Which boundary was reached.
    pub direction: SlideDirection,
    /// Index before the rotation.
    pub from: usize,
    /// Index after the rotation.
    pub to: usize,
    /// Number of panels.
    pub count: usize,
}

/// Emitted for every jump request, accepted or rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JumpEvent {
    /// Index before the request.
    pub from: Option<usize>,
    /// Requested index.
    pub requested: usize,
    /// Number of panels.
    pub count: usize,
    /// Whether the jump was performed.
    pub accepted: bool,
}

/// Emitted when the auto-slide state changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoSlideEvent {
    /// State before the transition.
    pub from: AutoSlideState,
    /// State after the transition.
    pub to: AutoSlideState,
}

/// Emitted for every timer token the slider touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerEvent {
    /// The token concerned.
    pub token: TimerToken,
    /// What happened to it.
    pub action: TimerAction,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from a slider.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after the slot window is recomputed.
    fn on_layout(&mut self, e: &LayoutEvent) {
        _ = e;
    }

    /// Called after the panel list is replaced.
    fn on_panels_replaced(&mut self, e: &PanelsReplacedEvent) {
        _ = e;
    }

    /// Called when the current index rotates.
    fn on_commit(&mut self, e: &CommitEvent) {
        _ = e;
    }

    /// Called for every jump request.
    fn on_jump(&mut self, e: &JumpEvent) {
        _ = e;
    }

    /// Called when the auto-slide state changes.
    fn on_auto_slide(&mut self, e: &AutoSlideEvent) {
        _ = e;
    }

    /// Called for timer scheduling, cancellation and fires.
    fn on_timer(&mut self, e: &TimerEvent) {
        _ = e;
    }

    /// Called once when the slider is dropped.
    fn on_destroy(&mut self) {}
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Owner of an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing and
/// an attached sink is dropped immediately. When **on**, each method checks
/// the inner `Option` (one branch) before dispatching to the sink.
#[derive(Default)]
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<Box<dyn TraceSink>>,
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Tracer {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: Box<dyn TraceSink>) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {}
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns `true` if events reach a sink.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        #[cfg(feature = "trace")]
        {
            self.sink.is_some()
        }
        #[cfg(not(feature = "trace"))]
        {
            false
        }
    }

    /// Emits a [`LayoutEvent`].
    #[inline]
    pub fn layout(&mut self, e: &LayoutEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layout(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PanelsReplacedEvent`].
    #[inline]
    pub fn panels_replaced(&mut self, e: &PanelsReplacedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_panels_replaced(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`CommitEvent`].
    #[inline]
    pub fn commit(&mut self, e: &CommitEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_commit(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`JumpEvent`].
    #[inline]
    pub fn jump(&mut self, e: &JumpEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_jump(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`AutoSlideEvent`] if `from` and `to` differ.
    #[inline]
    pub fn auto_slide(&mut self, from: AutoSlideState, to: AutoSlideState) {
        #[cfg(feature = "trace")]
        if from != to
            && let Some(s) = &mut self.sink
        {
            s.on_auto_slide(&AutoSlideEvent { from, to });
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = (from, to);
        }
    }

    /// Emits a [`TimerEvent`].
    #[inline]
    pub fn timer(&mut self, token: TimerToken, action: TimerAction) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_timer(&TimerEvent { token, action });
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = (token, action);
        }
    }

    /// Emits the destroy notification.
    #[inline]
    pub fn destroy(&mut self) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_destroy();
        }
    }
}
