// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index rotation driven by scroll offsets.
//!
//! Every offset the host reports is checked against the slot boundaries of
//! the [`SlotWindow`](crate::geometry::SlotWindow):
//!
//! ```text
//!   offset:   0 ........ w ........ 2w
//!             │ <  w     │     >  w │
//!   commit ◄──┤ stage    │  stage   ├──► commit
//!   backward  │ previous │  next    │    forward
//! ```
//!
//! Staging uses strict comparisons and committing uses inclusive ones, so an
//! offset that lands exactly on a boundary always commits. Both checks run on
//! every update; a single large step may stage and commit at once.

use alloc::rc::Weak;

use crate::error::SliderError;
use crate::geometry::Slot;
use crate::observer::SlideEvent;
use crate::trace::{CommitEvent, JumpEvent, SlideDirection};

use super::Slider;

impl<P> Slider<P> {
    /// Applies a scroll offset reported by the host.
    ///
    /// Stages the neighbor the user is dragging toward, commits a completed
    /// slide (rotating the current index and recentering), and reports
    /// progress to the observer. Exactly one notification is sent per call,
    /// computed after any commit, so the forced recentering that follows a
    /// commit never produces a second report.
    ///
    /// Returns the reported event, or `None` when the slider is inert (no
    /// panels, or zero-width bounds).
    pub fn on_scroll_offset_changed(&mut self, offset: f64) -> Option<SlideEvent> {
        self.viewport.offset = offset;
        let count = self.panels.len();
        let width = self.window.width();
        if count == 0 || !self.window.is_usable() {
            return None;
        }

        if offset > width {
            self.stage((self.current + 1) % count, Slot::Next);
        }
        if offset < width {
            self.stage((self.current + count - 1) % count, Slot::Previous);
        }

        if offset >= self.window.forward_offset() {
            self.commit(SlideDirection::Forward);
        } else if offset <= 0.0 {
            self.commit(SlideDirection::Backward);
        }

        let event = self.slide_event()?;
        self.notify(&event);
        Some(event)
    }

    /// Fractional position across the cyclic panel sequence, derived from
    /// the last offset. `None` when the slider is inert.
    ///
    /// At rest this is exactly the current index.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        self.slide_event().map(|e| e.progress)
    }

    /// Parks the panel at `index` in the current slot without animating.
    ///
    /// Jumping on an empty slider is a no-op. An out-of-range index is
    /// rejected with [`SliderError::IndexOutOfRange`] and leaves every piece
    /// of state untouched.
    ///
    /// A pending auto-slide countdown keeps running. An advance that already
    /// fired and is still animating is cut short by the recentering, so the
    /// countdown is restarted instead.
    pub fn jump_to(&mut self, index: usize) -> Result<(), SliderError> {
        let count = self.panels.len();
        if count == 0 {
            return Ok(());
        }
        let accepted = index < count;
        self.tracer.jump(&JumpEvent {
            from: self.current_index(),
            requested: index,
            count,
            accepted,
        });
        if !accepted {
            return Err(SliderError::IndexOutOfRange { index, count });
        }
        self.current = index;
        self.park_current();
        self.recenter();
        self.restart_interrupted_advance();
        Ok(())
    }

    /// Moves the panel at `idx` into a side slot and reveals it.
    ///
    /// With a single panel the neighbor is the current panel itself, which
    /// then slides in from the side; the commit parks it again.
    fn stage(&mut self, idx: usize, slot: Slot) {
        let rect = self.window.rect(slot);
        self.set_frame(idx, rect);
        self.set_hidden(idx, false);
    }

    fn commit(&mut self, direction: SlideDirection) {
        let count = self.panels.len();
        let from = self.current;
        self.current = match direction {
            SlideDirection::Forward => (from + 1) % count,
            SlideDirection::Backward => (from + count - 1) % count,
        };
        self.tracer.commit(&CommitEvent {
            direction,
            from,
            to: self.current,
            count,
        });
        self.cleanup();
    }

    /// Parks the current panel, recenters and restarts the auto-slide
    /// countdown.
    fn cleanup(&mut self) {
        self.park_current();
        self.recenter();
        let has_panels = !self.panels.is_empty();
        self.auto
            .rearm(has_panels, &mut *self.timer, &mut self.tracer);
    }

    fn slide_event(&self) -> Option<SlideEvent> {
        let count = self.panels.len();
        let width = self.window.width();
        if count == 0 || !self.window.is_usable() {
            return None;
        }
        let mut progress = (self.viewport.offset - width) / width + self.current as f64;
        if progress < 0.0 {
            progress += count as f64;
        }
        Some(SlideEvent {
            progress,
            panel_count: count,
            current_index: self.current,
        })
    }

    fn notify(&self, event: &SlideEvent) {
        let Some(observer) = self.observer.as_ref().and_then(Weak::upgrade) else {
            return;
        };
        // An observer that is already borrowed is re-entering the slider;
        // it misses this update.
        if let Ok(mut observer) = observer.try_borrow_mut() {
            observer.slider_did_slide(self, event);
        }
    }
}
