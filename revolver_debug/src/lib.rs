// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and JSON-lines export for revolver diagnostics.
//!
//! This crate provides [`TraceSink`](revolver_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`json::JsonLinesSink`] — one JSON object per event, for tooling.

pub mod json;
pub mod pretty;

use revolver_core::auto_slide::AutoSlideState;
use revolver_core::trace::{SlideDirection, TimerAction};

pub(crate) fn direction_name(direction: SlideDirection) -> &'static str {
    match direction {
        SlideDirection::Forward => "forward",
        SlideDirection::Backward => "backward",
    }
}

pub(crate) fn timer_action_name(action: TimerAction) -> &'static str {
    match action {
        TimerAction::Scheduled => "scheduled",
        TimerAction::Cancelled => "cancelled",
        TimerAction::Fired => "fired",
        TimerAction::Stale => "stale",
    }
}

pub(crate) fn auto_state_name(state: AutoSlideState) -> &'static str {
    match state {
        AutoSlideState::Disabled => "disabled",
        AutoSlideState::Idle => "idle",
        AutoSlideState::Scheduled(_) => "scheduled",
        AutoSlideState::Animating => "animating",
    }
}
