// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for toolkit integrations.
//!
//! A host toolkit provides the following pieces:
//!
//! - **Layout** — Calls [`Slider::set_bounds`] from its layout pass with the
//!   component's visible rectangle.
//!
//! - **Scroll feedback** — Forwards every user-driven or animated scroll
//!   position of its horizontal scroll view to
//!   [`Slider::on_scroll_offset_changed`]. Positions caused by a
//!   [`ScrollCommand::Set`] are *not* reported back.
//!
//! - **Timer** — Implements [`SlideTimer`](crate::timer::SlideTimer) on its
//!   run loop and calls [`Slider::on_auto_slide_timer`] when a scheduled
//!   callback fires.
//!
//! - **Lifecycle** — Posts app suspension/resumption into a
//!   [`LifecycleCenter`](crate::lifecycle::LifecycleCenter) the slider is
//!   subscribed to.
//!
//! - **Presenter** — Implements the [`Presenter`] trait to mirror panel
//!   frames, visibility and the scroll view configuration onto native views.
//!
//! # Crate boundaries
//!
//! `revolver_core` owns the slider state machine and this contract module.
//! Toolkit glue depends on `revolver_core` and wires the pieces together in
//! its event handlers; `revolver_harness` is such glue for tests.

use crate::slider::{Slider, SliderChanges};

#[cfg(doc)]
use crate::slider::ScrollCommand;

/// Applies evaluated slider changes to a native view tree.
///
/// Both real toolkit presenters and test doubles implement this trait,
/// enabling generic event loops.
///
/// # Event loop pseudocode
///
/// Every host callback that touches the slider ends the same way:
///
/// ```rust,ignore
/// fn on_scroll(view_offset: f64) {
///     // Rotate, stage and notify the observer
///     slider.on_scroll_offset_changed(view_offset);
///
///     // Evaluate: drain dirty channels and pending viewport requests
///     let changes = slider.evaluate();
///
///     // Present: apply incremental changes to the native views
///     presenter.apply(&slider, &changes);
/// }
/// ```
pub trait Presenter<P> {
    /// Applies the given [`SliderChanges`] to the native views, reading
    /// current frames from `slider` as needed.
    fn apply(&mut self, slider: &Slider<P>, changes: &SliderChanges<P>);
}
