// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A complete headless host: slider, presenter, clock and lifecycle hub.
//!
//! [`HeadlessHost`] wires the pieces the way a toolkit integration would.
//! Every entry point ends with an evaluate/apply pass, so the presenter is
//! always in sync with the slider when control returns to the caller.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Ref, RefCell, RefMut};
use core::fmt;

use kurbo::Rect;
use revolver_core::backend::Presenter;
use revolver_core::config::SliderConfig;
use revolver_core::error::SliderError;
use revolver_core::lifecycle::{LifecycleCenter, LifecycleEvent};
use revolver_core::observer::SlideEvent;
use revolver_core::slider::{Slider, SliderChanges};
use revolver_core::time::Duration;
use revolver_core::timer::TimerToken;

use crate::clock::ManualClock;
use crate::presenter::HeadlessPresenter;

/// Drives a [`Slider`] against a [`HeadlessPresenter`] and a
/// [`ManualClock`].
pub struct HeadlessHost<P: 'static> {
    slider: Rc<RefCell<Slider<P>>>,
    presenter: HeadlessPresenter<P>,
    clock: ManualClock,
    lifecycle: LifecycleCenter,
    changes: SliderChanges<P>,
}

impl<P: fmt::Debug + 'static> fmt::Debug for HeadlessHost<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadlessHost")
            .field("slider", &self.slider)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

impl<P: Clone + 'static> HeadlessHost<P> {
    /// Creates a slider filling `bounds`, subscribes it to the host's
    /// lifecycle hub and presents its initial state.
    pub fn new(bounds: Rect, panels: Vec<P>, config: SliderConfig) -> Result<Self, SliderError> {
        Self::with_presenter(bounds, panels, config, HeadlessPresenter::default())
    }

    /// Like [`new`](Self::new), with a custom presenter (for example one
    /// with a different animation length).
    pub fn with_presenter(
        bounds: Rect,
        panels: Vec<P>,
        config: SliderConfig,
        presenter: HeadlessPresenter<P>,
    ) -> Result<Self, SliderError> {
        let clock = ManualClock::new();
        let slider = Slider::new(bounds, panels, config, clock.timer())?.into_shared();
        let lifecycle = LifecycleCenter::new();
        Slider::subscribe_lifecycle(&slider, &lifecycle);
        let mut host = Self {
            slider,
            presenter,
            clock,
            lifecycle,
            changes: SliderChanges::default(),
        };
        host.present();
        Ok(host)
    }

    /// Borrows the slider.
    pub fn slider(&self) -> Ref<'_, Slider<P>> {
        self.slider.borrow()
    }

    /// Mutably borrows the slider. Call [`present`](Self::present)
    /// afterwards to mirror any changes.
    pub fn slider_mut(&self) -> RefMut<'_, Slider<P>> {
        self.slider.borrow_mut()
    }

    /// Runs `f` on the slider, then presents.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut Slider<P>) -> R) -> R {
        let result = f(&mut *self.slider.borrow_mut());
        self.present();
        result
    }

    /// The presenter mirroring the slider.
    #[must_use]
    pub fn presenter(&self) -> &HeadlessPresenter<P> {
        &self.presenter
    }

    /// The clock backing the slider's timer.
    #[must_use]
    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    /// The lifecycle hub the slider is subscribed to.
    #[must_use]
    pub fn lifecycle(&self) -> &LifecycleCenter {
        &self.lifecycle
    }

    /// Evaluates the slider and applies the changes to the presenter.
    pub fn present(&mut self) {
        let mut slider = self.slider.borrow_mut();
        slider.evaluate_into(&mut self.changes);
        self.presenter.apply(&slider, &self.changes);
    }

    /// Drags the scroll view to `offset` and reports it to the slider.
    ///
    /// Returns `None` when the scroll view refuses the drag (scrolling
    /// disabled) or the slider is inert.
    pub fn drag_to(&mut self, offset: f64) -> Option<SlideEvent> {
        if !self.presenter.drag_to(offset) {
            return None;
        }
        self.report(offset)
    }

    /// Drags through each offset in turn.
    pub fn drag_path(&mut self, offsets: &[f64]) -> Vec<SlideEvent> {
        offsets.iter().filter_map(|&x| self.drag_to(x)).collect()
    }

    /// Plays the running scroll animation to completion, reporting every
    /// frame. Returns the events reported along the way.
    pub fn settle(&mut self) -> Vec<SlideEvent> {
        let mut events = Vec::new();
        while let Some(offset) = self.presenter.next_animation_frame() {
            events.extend(self.report(offset));
        }
        events
    }

    /// Moves the clock forward, delivering every callback that falls due and
    /// settling the animation each one starts.
    ///
    /// Time advances deadline by deadline, so callbacks scheduled while
    /// delivering earlier ones also fire if they fall inside the window.
    /// Animations complete instantly in clock time.
    ///
    /// Returns the number of callbacks the slider accepted.
    pub fn advance(&mut self, by: Duration) -> usize {
        let target = self.clock.now().saturating_add(by);
        let mut accepted = 0;
        while let Some(at) = self.clock.next_deadline()
            && at <= target
        {
            let step = at.saturating_duration_since(self.clock.now());
            for token in self.clock.advance(step) {
                if self.update(|s| s.on_auto_slide_timer(token)) {
                    accepted += 1;
                }
                let _ = self.settle();
            }
        }
        let rest = target.saturating_duration_since(self.clock.now());
        let _ = self.clock.advance(rest);
        accepted
    }

    /// Delivers a timer token directly, as a late or duplicated callback
    /// from a misbehaving run loop would. Returns whether it was accepted.
    pub fn deliver(&mut self, token: TimerToken) -> bool {
        let accepted = self.update(|s| s.on_auto_slide_timer(token));
        let _ = self.settle();
        accepted
    }

    /// Changes the component bounds, as a layout pass would.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.update(|s| s.set_bounds(bounds));
    }

    /// Posts [`LifecycleEvent::WillResignActive`].
    pub fn resign_active(&mut self) {
        let _ = self.lifecycle.post(LifecycleEvent::WillResignActive);
        self.present();
    }

    /// Posts [`LifecycleEvent::DidBecomeActive`].
    pub fn become_active(&mut self) {
        let _ = self.lifecycle.post(LifecycleEvent::DidBecomeActive);
        self.present();
    }

    fn report(&mut self, offset: f64) -> Option<SlideEvent> {
        let event = self.slider.borrow_mut().on_scroll_offset_changed(offset);
        self.present();
        event
    }
}
