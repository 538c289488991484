// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An observer that records every notification.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use revolver_core::observer::{SlideEvent, SlideObserver};
use revolver_core::slider::{ObserverRef, Slider};

/// Records every [`SlideEvent`] it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    /// Events in arrival order.
    pub events: Vec<SlideEvent>,
}

impl RecordingObserver {
    /// Creates a shared recorder and returns it with the weak handle to pass
    /// to [`Slider::set_observer`].
    #[must_use]
    pub fn shared<P>() -> (Rc<RefCell<Self>>, ObserverRef<P>) {
        let recorder = Rc::new(RefCell::new(Self::default()));
        let weak = Rc::downgrade(&recorder) as ObserverRef<P>;
        (recorder, weak)
    }

    /// Progress values in arrival order.
    #[must_use]
    pub fn progress(&self) -> Vec<f64> {
        self.events.iter().map(|e| e.progress).collect()
    }

    /// The most recent event.
    #[must_use]
    pub fn last(&self) -> Option<&SlideEvent> {
        self.events.last()
    }
}

impl<P> SlideObserver<P> for RecordingObserver {
    fn slider_did_slide(&mut self, _slider: &Slider<P>, event: &SlideEvent) {
        self.events.push(*event);
    }
}
