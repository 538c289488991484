// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core state machine for an infinitely wrapping, paginated carousel.
//!
//! `revolver_core` maps a finite, mutable list of panels onto a horizontally
//! scrollable viewport that is exactly three panels wide. Only three slots
//! (previous, current, next) ever exist; after every completed swipe the
//! current index rotates and the viewport is parked back on the middle slot,
//! so the user can swipe forever in either direction. It is `no_std`
//! compatible (with `alloc`) and knows nothing about any particular UI
//! toolkit: panels are opaque handles and all visual output flows through
//! the [`Presenter`](backend::Presenter) trait.
//!
//! # Architecture
//!
//! ```text
//!   Host layout pass ──► Slider::set_bounds() ──► SlotWindow (prev | cur | next)
//!
//!   Host scroll view ──► Slider::on_scroll_offset_changed(x)
//!                              │            │
//!                              │            └──► SlideObserver (progress)
//!                              ▼
//!                  pre-stage / commit / recenter
//!                              │
//!   Slider::evaluate() ──► SliderChanges ──► Presenter::apply()
//!                                                 │
//!                 ┌───────────────────────────────┘
//!                 ▼
//!   ScrollCommand::Animate(2w) ──► host animation ──► scroll updates
//!
//!   SlideTimer fire ──► Slider::on_auto_slide_timer(token)
//!   LifecycleCenter ──► suspend / resume auto-slide
//! ```
//!
//! **[`geometry`]** — The three-slot window computed from the viewport size.
//!
//! **[`slider`]** — The [`Slider`](slider::Slider) component: panel list,
//! index rotation, pre-staging, recentering, jumps and evaluation.
//!
//! **[`auto_slide`]** — The auto-advance state machine with at most one live
//! timer token.
//!
//! **[`dirty`]** — Per-panel dirty channels via `understory_dirty`.
//!
//! **[`backend`]** — The [`Presenter`](backend::Presenter) trait that host
//! toolkits implement to mirror slider state onto native views.
//!
//! **[`timer`]**, **[`observer`]**, **[`lifecycle`]** — The seams through
//! which the host schedules callbacks, receives progress notifications and
//! delivers app suspension/resumption.
//!
//! **[`config`]**, **[`error`]**, **[`time`]** — Configuration, rejection
//! errors and tick-based durations.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! slider instrumentation, with a zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod auto_slide;
pub mod backend;
pub mod config;
pub mod dirty;
pub mod error;
pub mod geometry;
pub mod lifecycle;
pub mod observer;
pub mod slider;
pub mod time;
pub mod timer;
pub mod trace;

#[cfg(test)]
mod test_util;
