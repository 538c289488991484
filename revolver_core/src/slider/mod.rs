// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider component.
//!
//! A [`Slider`] owns an ordered list of opaque panel handles and everything
//! the host needs to show them:
//!
//! - **Panel state** — a frame rectangle and a hidden flag per panel. Once a
//!   panel is handed to the slider, only the slider decides where it sits and
//!   whether it shows; hosts mirror that state through a
//!   [`Presenter`](crate::backend::Presenter).
//! - **Window** — the three-slot [`SlotWindow`] derived from the bounds.
//! - **Rotation** — the current index, rotated by completed slides
//!   ([`on_scroll_offset_changed`](Slider::on_scroll_offset_changed)) and by
//!   [`jump_to`](Slider::jump_to).
//! - **Auto-slide** — an [`AutoSlide`] controller driven through the host's
//!   [`SlideTimer`].
//!
//! All of this is shared mutable state that must stay consistent on every
//! update, so it lives in one struct. Panel mutations are recorded in dirty
//! channels (see [`dirty`](crate::dirty)) and surfaced by
//! [`evaluate`](Slider::evaluate).
//!
//! # Threading
//!
//! A slider is driven from one thread, the host's main run loop. Scroll
//! updates, timer fires, bounds changes and panel replacement arrive as
//! discrete calls; none of them blocks.

mod evaluate;
mod scroll;
mod viewport;

pub use evaluate::SliderChanges;
pub use viewport::ScrollCommand;

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use kurbo::{Rect, Size};
use understory_dirty::{CycleHandling, DirtyTracker};

use crate::auto_slide::{AutoSlide, AutoSlideState};
use crate::config::SliderConfig;
use crate::dirty;
use crate::error::SliderError;
use crate::geometry::{Slot, SlotWindow};
use crate::lifecycle::{LifecycleCenter, LifecycleEvent, LifecycleListener, ListenerRef, Subscription};
use crate::observer::SlideObserver;
use crate::time::Duration;
use crate::timer::{SlideTimer, TimerToken};
use crate::trace::{LayoutEvent, PanelsReplacedEvent, TraceSink, Tracer};

use viewport::Viewport;

/// Weak handle through which a slider reaches its observer.
pub type ObserverRef<P> = Weak<RefCell<dyn SlideObserver<P>>>;

/// An infinitely wrapping carousel over panels of type `P`.
///
/// `P` is the host's panel handle (a view pointer, a node id, a layer id).
/// The slider never inspects it; it only hands it back through
/// [`panels`](Self::panels) and [`SliderChanges::detached`].
pub struct Slider<P> {
    // -- Panels --
    pub(crate) panels: Vec<P>,
    pub(crate) frame: Vec<Rect>,
    pub(crate) hidden: Vec<bool>,

    // -- Presentation tracking --
    pub(crate) presented_hidden: Vec<bool>,
    pub(crate) attach_pending: bool,
    pub(crate) pending_detached: Vec<P>,
    pub(crate) dirty: DirtyTracker<u32>,

    // -- Geometry --
    pub(crate) bounds: Rect,
    pub(crate) window: SlotWindow,
    pub(crate) viewport: Viewport,

    // -- Rotation --
    pub(crate) current: usize,

    // -- Auto-slide --
    pub(crate) auto: AutoSlide,
    pub(crate) timer: Box<dyn SlideTimer>,

    // -- Collaborators --
    pub(crate) observer: Option<ObserverRef<P>>,
    pub(crate) subscriptions: Vec<Subscription>,
    pub(crate) tracer: Tracer,
}

/// Converts a panel index into a dirty-tracking key.
#[expect(
    clippy::cast_possible_truncation,
    reason = "panel counts are far below u32::MAX"
)]
pub(crate) fn key(idx: usize) -> u32 {
    idx as u32
}

impl<P> Slider<P> {
    /// Creates a slider filling `bounds` with an initial (possibly empty)
    /// panel list.
    ///
    /// The viewport is parked on the current slot. If `config` enables
    /// auto-slide and there are panels, the first advance is scheduled on
    /// `timer` right away.
    ///
    /// Returns [`SliderError::InvalidInterval`] if the configured interval is
    /// zero.
    pub fn new(
        bounds: Rect,
        panels: Vec<P>,
        config: SliderConfig,
        timer: impl SlideTimer + 'static,
    ) -> Result<Self, SliderError> {
        config.validate()?;
        let mut slider = Self {
            panels: Vec::new(),
            frame: Vec::new(),
            hidden: Vec::new(),
            presented_hidden: Vec::new(),
            attach_pending: false,
            pending_detached: Vec::new(),
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            bounds,
            window: SlotWindow::new(bounds.size()),
            viewport: Viewport::new(),
            current: 0,
            auto: AutoSlide::new(config.auto_slide_interval)?,
            timer: Box::new(timer),
            observer: None,
            subscriptions: Vec::new(),
            tracer: Tracer::none(),
        };
        slider.set_panels(panels);
        if config.auto_slide_enabled {
            slider.set_auto_slide_enabled(true);
        }
        Ok(slider)
    }

    /// Routes trace events to `sink` from now on.
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.tracer = Tracer::new(sink);
    }

    // -- Panel list --

    /// Replaces the panel list wholesale.
    ///
    /// The old panels are reported as detached by the next
    /// [`evaluate`](Self::evaluate) (unless they were never presented). The
    /// new panels are all attached at the current-slot rectangle and hidden,
    /// except the one at the current index, which is re-clamped into the new
    /// range. Scrolling is enabled only when there is more than one panel.
    /// The viewport is recentered and any pending auto-slide callback is
    /// cancelled and, if auto-slide is running, scheduled afresh.
    pub fn set_panels(&mut self, panels: Vec<P>) {
        let old = core::mem::replace(&mut self.panels, panels);
        let old_count = old.len();
        if !self.attach_pending {
            self.pending_detached.extend(old);
        }
        self.attach_pending = true;

        let count = self.panels.len();
        self.frame = vec![self.window.current; count];
        self.hidden = vec![true; count];
        // Freshly attached host views start out visible.
        self.presented_hidden = vec![false; count];
        self.dirty = DirtyTracker::with_cycle_handling(CycleHandling::Error);
        for idx in 0..count {
            self.dirty.mark(key(idx), dirty::FRAME);
            self.dirty.mark(key(idx), dirty::VISIBILITY);
        }

        self.current = self.current.min(count.saturating_sub(1));
        if count > 0 {
            self.hidden[self.current] = false;
        }
        self.viewport.scroll_enabled = count > 1;
        self.relayout();
        self.auto
            .rearm(count > 0, &mut *self.timer, &mut self.tracer);

        self.tracer.panels_replaced(&PanelsReplacedEvent {
            old_count,
            new_count: count,
            current: self.current_index(),
        });
    }

    /// The panels, in insertion order.
    #[must_use]
    pub fn panels(&self) -> &[P] {
        &self.panels
    }

    /// Number of panels.
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Whether the panel list is empty. An empty slider is inert.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Index of the panel parked in the current slot, or `None` when there
    /// are no panels.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        (!self.panels.is_empty()).then_some(self.current)
    }

    /// The panel parked in the current slot.
    #[must_use]
    pub fn current_panel(&self) -> Option<&P> {
        self.panels.get(self.current)
    }

    /// Frame of the panel at `idx`, in content coordinates.
    #[must_use]
    pub fn frame_at(&self, idx: usize) -> Option<Rect> {
        self.frame.get(idx).copied()
    }

    /// Whether the panel at `idx` is hidden.
    #[must_use]
    pub fn is_hidden_at(&self, idx: usize) -> Option<bool> {
        self.hidden.get(idx).copied()
    }

    /// Indices of the panels that are currently visible.
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.hidden
            .iter()
            .enumerate()
            .filter_map(|(idx, hidden)| (!hidden).then_some(idx))
    }

    // -- Geometry --

    /// Sets the component's visible bounds.
    ///
    /// Setting the same bounds again is a no-op and does not touch the
    /// scroll position. Different bounds recompute the slot window, publish
    /// a content size of three bounds-widths, park the current panel in the
    /// current slot and recenter the viewport.
    pub fn set_bounds(&mut self, bounds: Rect) {
        if self.bounds == bounds {
            return;
        }
        self.bounds = bounds;
        self.relayout();
    }

    /// The component's visible bounds.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The current slot rectangles.
    #[must_use]
    pub fn window(&self) -> &SlotWindow {
        &self.window
    }

    /// Last scroll offset reported by the host or forced by the slider.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.viewport.offset
    }

    /// Size of the scrollable content.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.viewport.content_size
    }

    /// Whether the user may scroll (more than one panel).
    #[must_use]
    pub fn is_scroll_enabled(&self) -> bool {
        self.viewport.scroll_enabled
    }

    fn relayout(&mut self) {
        self.window = SlotWindow::new(self.bounds.size());
        self.viewport.content_size = self.window.content_size();
        self.tracer.layout(&LayoutEvent {
            width: self.window.width(),
            height: self.window.current.height(),
        });
        self.park_current();
        self.recenter();
        self.restart_interrupted_advance();
    }

    /// Hides every panel except the current one, which is placed into the
    /// current slot.
    pub(crate) fn park_current(&mut self) {
        let current = self.current_index();
        for idx in 0..self.panels.len() {
            self.set_hidden(idx, Some(idx) != current);
        }
        if let Some(idx) = current {
            let rect = self.window.rect(Slot::Current);
            self.set_frame(idx, rect);
        }
    }

    /// Forces the viewport back onto the current slot.
    pub(crate) fn recenter(&mut self) {
        self.viewport.reset_offset(self.window.rest_offset());
    }

    /// Reschedules an auto-advance whose animation was replaced by a forced
    /// recentering and so can never reach the commit offset.
    pub(crate) fn restart_interrupted_advance(&mut self) {
        if self.auto.state() == AutoSlideState::Animating {
            let has_panels = !self.panels.is_empty();
            self.auto
                .rearm(has_panels, &mut *self.timer, &mut self.tracer);
        }
    }

    pub(crate) fn set_frame(&mut self, idx: usize, rect: Rect) {
        if self.frame[idx] != rect {
            self.frame[idx] = rect;
            self.dirty.mark(key(idx), dirty::FRAME);
        }
    }

    pub(crate) fn set_hidden(&mut self, idx: usize, hidden: bool) {
        if self.hidden[idx] != hidden {
            self.hidden[idx] = hidden;
            self.dirty.mark(key(idx), dirty::VISIBILITY);
        }
    }

    // -- Observer --

    /// Registers the observer that receives a
    /// [`SlideEvent`](crate::observer::SlideEvent) on every scroll update.
    ///
    /// Only a weak reference is kept; replace it or drop the observer to
    /// stop notifications.
    pub fn set_observer(&mut self, observer: ObserverRef<P>) {
        self.observer = Some(observer);
    }

    /// Removes the observer.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    // -- Auto-slide --

    /// Turns auto-advance on or off.
    ///
    /// Enabling (again) cancels any pending callback and schedules a fresh
    /// one after the configured interval; disabling cancels it. While a
    /// lifecycle suspension is in effect the request is only recorded and
    /// takes effect on resumption.
    pub fn set_auto_slide_enabled(&mut self, enabled: bool) {
        let has_panels = !self.panels.is_empty();
        self.auto
            .set_requested(enabled, has_panels, &mut *self.timer, &mut self.tracer);
    }

    /// Whether auto-advance is running right now.
    #[must_use]
    pub fn is_auto_slide_enabled(&self) -> bool {
        self.auto.is_enabled()
    }

    /// Whether the caller asked for auto-advance, even if suspended.
    #[must_use]
    pub fn is_auto_slide_requested(&self) -> bool {
        self.auto.is_requested()
    }

    /// Current auto-slide state.
    #[must_use]
    pub fn auto_slide_state(&self) -> AutoSlideState {
        self.auto.state()
    }

    /// Delay between a recentering and the next automatic advance.
    #[must_use]
    pub fn auto_slide_interval(&self) -> Duration {
        self.auto.interval()
    }

    /// Changes the auto-advance delay. The new value applies from the next
    /// scheduling; a pending callback keeps its original deadline.
    ///
    /// Returns [`SliderError::InvalidInterval`] for a zero interval.
    pub fn set_auto_slide_interval(&mut self, interval: Duration) -> Result<(), SliderError> {
        self.auto.set_interval(interval)
    }

    /// Forces auto-advance off while remembering whether it was on.
    pub fn suspend_auto_slide(&mut self) {
        self.auto.suspend(&mut *self.timer, &mut self.tracer);
    }

    /// Restores auto-advance to its state before
    /// [`suspend_auto_slide`](Self::suspend_auto_slide).
    pub fn resume_auto_slide(&mut self) {
        let has_panels = !self.panels.is_empty();
        self.auto
            .resume(has_panels, &mut *self.timer, &mut self.tracer);
    }

    /// Delivers a timer fire.
    ///
    /// Returns `false` and does nothing if `token` is not the live token
    /// (it was cancelled, replaced or already fired). Otherwise requests an
    /// animated scroll to the next slot; the resulting scroll updates commit
    /// the slide and reschedule the next advance.
    ///
    /// While the bounds have zero width there is nothing to animate across;
    /// the advance is skipped and another one is scheduled.
    pub fn on_auto_slide_timer(&mut self, token: TimerToken) -> bool {
        if !self.auto.fire(token, &mut self.tracer) {
            return false;
        }
        if self.panels.is_empty() || !self.window.is_usable() {
            let has_panels = !self.panels.is_empty();
            self.auto
                .rearm(has_panels, &mut *self.timer, &mut self.tracer);
            return true;
        }
        self.viewport.animate_to(self.window.forward_offset());
        true
    }
}

impl<P: Clone> Slider<P> {
    /// Appends a panel.
    ///
    /// This is a full replacement with the extended list, with the same
    /// side effects as [`set_panels`](Self::set_panels).
    pub fn push_panel(&mut self, panel: P) {
        let mut panels = self.panels.clone();
        panels.push(panel);
        self.set_panels(panels);
    }
}

impl<P: 'static> Slider<P> {
    /// Moves the slider behind a shared handle, as needed for lifecycle
    /// subscriptions.
    #[must_use]
    pub fn into_shared(self) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(self))
    }

    /// Subscribes `this` to app lifecycle events from `center`.
    ///
    /// The subscription is owned by the slider and released when the slider
    /// is dropped. On [`LifecycleEvent::WillResignActive`] auto-advance is
    /// suspended; on [`LifecycleEvent::DidBecomeActive`] it is restored.
    pub fn subscribe_lifecycle(this: &Rc<RefCell<Self>>, center: &LifecycleCenter) {
        let listener: ListenerRef = Rc::downgrade(this) as ListenerRef;
        let subscription = center.subscribe(listener);
        this.borrow_mut().subscriptions.push(subscription);
    }
}

impl<P> LifecycleListener for Slider<P> {
    fn on_lifecycle(&mut self, event: LifecycleEvent) {
        match event {
            LifecycleEvent::WillResignActive => self.suspend_auto_slide(),
            LifecycleEvent::DidBecomeActive => self.resume_auto_slide(),
        }
    }
}

impl<P> Drop for Slider<P> {
    fn drop(&mut self) {
        self.auto
            .cancel_pending(&mut *self.timer, &mut self.tracer);
        self.subscriptions.clear();
        self.observer = None;
        self.tracer.destroy();
    }
}

impl<P: fmt::Debug> fmt::Debug for Slider<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("panels", &self.panels)
            .field("current", &self.current_index())
            .field("bounds", &self.bounds)
            .field("offset", &self.viewport.offset)
            .field("auto_slide", &self.auto.state())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Rect, Size};

    use super::*;
    use crate::test_util::SharedTimer;

    pub(crate) fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 50.0)
    }

    pub(crate) fn slider(panels: &[char]) -> (Slider<char>, SharedTimer) {
        let timer = SharedTimer::default();
        let slider = Slider::new(
            bounds(),
            panels.to_vec(),
            SliderConfig::default(),
            timer.clone(),
        )
        .expect("valid config");
        (slider, timer)
    }

    #[test]
    fn construction_parks_on_current_slot() {
        let (s, _) = slider(&['A', 'B', 'C']);

        assert_eq!(s.current_index(), Some(0));
        assert_eq!(s.scroll_offset(), 100.0);
        assert_eq!(s.content_size(), Size::new(300.0, 50.0));
        assert_eq!(s.frame_at(0), Some(s.window().current));
        assert_eq!(s.visible_indices().collect::<Vec<_>>(), [0]);
        assert!(s.is_scroll_enabled());
    }

    #[test]
    fn zero_interval_config_is_rejected() {
        let config = SliderConfig::new().with_auto_slide(Duration::ZERO);
        let result = Slider::new(bounds(), vec!['A'], config, SharedTimer::default());
        assert_eq!(result.err(), Some(SliderError::InvalidInterval));
    }

    #[test]
    fn empty_slider_is_inert() {
        let (s, _) = slider(&[]);
        assert_eq!(s.current_index(), None);
        assert_eq!(s.current_panel(), None);
        assert!(s.is_empty());
        assert!(!s.is_scroll_enabled());
    }

    #[test]
    fn single_panel_disables_scrolling() {
        let (s, _) = slider(&['A']);
        assert!(!s.is_scroll_enabled());
        assert_eq!(s.visible_indices().collect::<Vec<_>>(), [0]);
    }

    #[test]
    fn shorter_panel_list_reclamps_index() {
        let (mut s, _) = slider(&['A', 'B', 'C', 'D', 'E']);
        s.jump_to(4).expect("in range");

        s.set_panels(vec!['X', 'Y']);
        assert_eq!(s.current_index(), Some(1));
        assert_eq!(s.current_panel(), Some(&'Y'));
        assert_eq!(s.visible_indices().collect::<Vec<_>>(), [1]);

        s.set_panels(Vec::new());
        assert_eq!(s.current_index(), None);

        s.set_panels(vec!['P', 'Q', 'R']);
        assert_eq!(s.current_index(), Some(0));
    }

    #[test]
    fn new_panels_attach_at_current_slot() {
        let (mut s, _) = slider(&['A']);
        s.set_panels(vec!['A', 'B', 'C']);
        for idx in 0..3 {
            assert_eq!(s.frame_at(idx), Some(s.window().current));
        }
        assert_eq!(s.is_hidden_at(1), Some(true));
        assert_eq!(s.is_hidden_at(3), None);
    }

    #[test]
    fn push_panel_extends_list() {
        let (mut s, _) = slider(&['A', 'B']);
        s.jump_to(1).expect("in range");
        s.push_panel('C');

        assert_eq!(s.panels(), ['A', 'B', 'C']);
        assert_eq!(s.current_index(), Some(1));
    }

    #[test]
    fn unchanged_bounds_do_not_disturb_offset() {
        let (mut s, _) = slider(&['A', 'B', 'C']);
        let _ = s.on_scroll_offset_changed(130.0);

        s.set_bounds(bounds());
        assert_eq!(s.scroll_offset(), 130.0, "same bounds is a no-op");

        s.set_bounds(Rect::new(0.0, 0.0, 200.0, 80.0));
        assert_eq!(s.scroll_offset(), 200.0);
        assert_eq!(s.content_size(), Size::new(600.0, 80.0));
        assert_eq!(s.frame_at(0), Some(Rect::new(200.0, 0.0, 400.0, 80.0)));
        assert_eq!(s.visible_indices().collect::<Vec<_>>(), [0]);
    }

    #[test]
    fn auto_slide_from_config_schedules_first_advance() {
        let timer = SharedTimer::default();
        let config = SliderConfig::new().with_auto_slide(Duration::from_secs(1));
        let s = Slider::new(bounds(), vec!['A', 'B'], config, timer.clone()).expect("valid");

        assert!(s.is_auto_slide_enabled());
        let rec = timer.0.borrow();
        assert_eq!(rec.live().len(), 1);
        assert_eq!(rec.scheduled[0].1, Duration::from_secs(1));
    }

    #[test]
    fn replacing_panels_invalidates_pending_callback() {
        let (mut s, timer) = slider(&['A', 'B']);
        s.set_auto_slide_enabled(true);
        let first = s.auto_slide_state().pending_token().expect("scheduled");

        s.set_panels(vec!['C', 'D', 'E']);
        let second = s.auto_slide_state().pending_token().expect("rescheduled");
        assert_ne!(first, second);
        assert_eq!(timer.0.borrow().live(), [second]);
        assert!(!s.on_auto_slide_timer(first), "old callback is stale");

        s.set_panels(Vec::new());
        assert_eq!(s.auto_slide_state(), AutoSlideState::Idle);
        assert!(timer.0.borrow().live().is_empty());
    }

    #[test]
    fn timer_fire_requests_animation_to_next_slot() {
        let (mut s, _) = slider(&['A', 'B', 'C']);
        s.set_auto_slide_enabled(true);
        let token = s.auto_slide_state().pending_token().expect("scheduled");
        let _ = s.evaluate();

        assert!(s.on_auto_slide_timer(token));
        assert_eq!(s.auto_slide_state(), AutoSlideState::Animating);
        assert_eq!(s.evaluate().scroll, Some(ScrollCommand::Animate(200.0)));
    }

    #[test]
    fn advance_before_first_layout_keeps_auto_slide_scheduled() {
        let timer = SharedTimer::default();
        let config = SliderConfig::new().with_auto_slide(Duration::from_secs(1));
        let mut s = Slider::new(Rect::ZERO, vec!['A', 'B'], config, timer.clone())
            .expect("valid config");
        let first = s.auto_slide_state().pending_token().expect("scheduled");

        timer.0.borrow_mut().fire(first);
        assert!(s.on_auto_slide_timer(first));
        let second = s.auto_slide_state().pending_token().expect("rescheduled");
        assert_eq!(timer.0.borrow().live(), [second]);
        assert_eq!(s.current_index(), Some(0));

        s.set_bounds(bounds());
        assert_eq!(s.auto_slide_state().pending_token(), Some(second));
        timer.0.borrow_mut().fire(second);
        assert!(s.on_auto_slide_timer(second));
        assert_eq!(s.evaluate().scroll, Some(ScrollCommand::Animate(200.0)));
    }

    #[test]
    fn relayout_during_advance_restarts_countdown() {
        let (mut s, timer) = slider(&['A', 'B', 'C']);
        s.set_auto_slide_enabled(true);
        let token = s.auto_slide_state().pending_token().expect("scheduled");
        timer.0.borrow_mut().fire(token);
        assert!(s.on_auto_slide_timer(token));
        let _ = s.on_scroll_offset_changed(150.0);

        s.set_bounds(Rect::new(0.0, 0.0, 80.0, 50.0));
        assert_eq!(s.scroll_offset(), 80.0);
        assert_eq!(s.current_index(), Some(0));
        let next = s.auto_slide_state().pending_token().expect("rescheduled");
        assert_eq!(timer.0.borrow().live(), [next]);
    }

    #[test]
    fn interval_change_applies_to_next_schedule() {
        let (mut s, timer) = slider(&['A', 'B']);
        assert_eq!(
            s.set_auto_slide_interval(Duration::ZERO),
            Err(SliderError::InvalidInterval)
        );
        s.set_auto_slide_interval(Duration::from_millis(500))
            .expect("valid interval");
        s.set_auto_slide_enabled(true);
        assert_eq!(
            timer.0.borrow().scheduled[0].1,
            Duration::from_millis(500)
        );
    }

    #[test]
    fn lifecycle_events_suspend_and_resume() {
        let (mut s, timer) = slider(&['A', 'B']);
        s.set_auto_slide_enabled(true);

        s.on_lifecycle(LifecycleEvent::WillResignActive);
        assert!(!s.is_auto_slide_enabled());
        assert!(s.is_auto_slide_requested());
        assert!(timer.0.borrow().live().is_empty());

        s.on_lifecycle(LifecycleEvent::DidBecomeActive);
        assert!(s.is_auto_slide_enabled());
        assert_eq!(timer.0.borrow().live().len(), 1);
    }

    #[test]
    fn shared_slider_subscription_is_released_on_drop() {
        let center = LifecycleCenter::new();
        let (s, timer) = slider(&['A', 'B']);
        let shared = s.into_shared();
        Slider::subscribe_lifecycle(&shared, &center);
        shared.borrow_mut().set_auto_slide_enabled(true);
        assert_eq!(center.listener_count(), 1);

        assert_eq!(center.post(LifecycleEvent::WillResignActive), 1);
        assert!(!shared.borrow().is_auto_slide_enabled());
        assert_eq!(center.post(LifecycleEvent::DidBecomeActive), 1);
        assert!(shared.borrow().is_auto_slide_enabled());

        drop(shared);
        assert_eq!(center.listener_count(), 0);
        assert!(timer.0.borrow().live().is_empty(), "drop cancels the timer");
    }
}
