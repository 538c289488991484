// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic headless host for driving revolver sliders.
//!
//! - [`clock::ManualClock`] / [`clock::ManualTimer`] — a clock that only
//!   moves when told to, and the [`SlideTimer`] that schedules against it.
//! - [`presenter::HeadlessPresenter`] — mirrors slider output onto
//!   in-memory views and emulates a scroll view's programmatic animation.
//! - [`observer::RecordingObserver`] — records progress notifications.
//! - [`host::HeadlessHost`] — wires all of the above together with a
//!   lifecycle hub, the way a toolkit integration would.
//!
//! [`SlideTimer`]: revolver_core::timer::SlideTimer

#![no_std]

extern crate alloc;

pub mod clock;
pub mod host;
pub mod observer;
pub mod presenter;
