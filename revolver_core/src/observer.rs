// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Progress notifications.

use crate::slider::Slider;

/// Continuous slide progress, reported on every scroll update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideEvent {
    /// Fractional position across the cyclic panel sequence, in
    /// `[0, panel_count)`. `2.5` means halfway from panel 2 to panel 3.
    pub progress: f64,
    /// Number of panels in the slider.
    pub panel_count: usize,
    /// Index of the panel parked in the current slot.
    pub current_index: usize,
}

/// Receives [`SlideEvent`]s from a [`Slider`].
///
/// The slider keeps only a weak reference to its observer (see
/// [`Slider::set_observer`]), so dropping the observer silently ends the
/// notifications.
pub trait SlideObserver<P> {
    /// Called once per scroll update, after the slider has applied it.
    fn slider_did_slide(&mut self, slider: &Slider<P>, event: &SlideEvent);
}
