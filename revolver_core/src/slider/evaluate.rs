// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change collection for presenters.
//!
//! Evaluation drains the slider's pending work in the order a host must
//! apply it:
//!
//! 1. **Detach / attach** — panels removed by a replacement, then the full
//!    new list (by index) if the list was replaced.
//! 2. **FRAME** — Drain dirty indices; hosts read the new rectangle through
//!    [`frame_at`](super::Slider::frame_at).
//! 3. **VISIBILITY** — Drain dirty indices and compare against what was last
//!    presented, yielding `hidden` / `unhidden` transitions only.
//! 4. **Viewport** — content size and scroll-enabled flag when they changed,
//!    then at most one [`ScrollCommand`].
//!
//! Indices are raw `u32` keys, as used by the dirty tracker, so presenters
//! can index straight into their own per-panel arrays.

use alloc::vec::Vec;

use kurbo::Size;

use super::{ScrollCommand, Slider};
use crate::dirty;

/// The set of changes produced by a single [`Slider::evaluate`] call.
#[derive(Clone, Debug)]
pub struct SliderChanges<P> {
    /// Panels that left the slider and must be removed from the host.
    pub detached: Vec<P>,
    /// Indices of panels to add to the host's scroll content, in order.
    /// Non-empty only after the panel list was replaced.
    pub attached: Vec<u32>,
    /// Panels whose frame changed.
    pub frames: Vec<u32>,
    /// Panels that transitioned from visible to hidden.
    pub hidden: Vec<u32>,
    /// Panels that transitioned from hidden to visible.
    pub unhidden: Vec<u32>,
    /// New content size of the scroll view, if it changed.
    pub content_size: Option<Size>,
    /// New scroll-enabled flag, if it changed.
    pub scroll_enabled: Option<bool>,
    /// Programmatic scroll to perform last.
    pub scroll: Option<ScrollCommand>,
}

impl<P> Default for SliderChanges<P> {
    fn default() -> Self {
        Self {
            detached: Vec::new(),
            attached: Vec::new(),
            frames: Vec::new(),
            hidden: Vec::new(),
            unhidden: Vec::new(),
            content_size: None,
            scroll_enabled: None,
            scroll: None,
        }
    }
}

impl<P> SliderChanges<P> {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.detached.clear();
        self.attached.clear();
        self.frames.clear();
        self.hidden.clear();
        self.unhidden.clear();
        self.content_size = None;
        self.scroll_enabled = None;
        self.scroll = None;
    }

    /// Returns `true` if there is nothing to apply.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.detached.is_empty()
            && self.attached.is_empty()
            && self.frames.is_empty()
            && self.hidden.is_empty()
            && self.unhidden.is_empty()
            && self.content_size.is_none()
            && self.scroll_enabled.is_none()
            && self.scroll.is_none()
    }
}

impl<P> Slider<P> {
    /// Collects everything that changed since the previous evaluation.
    pub fn evaluate(&mut self) -> SliderChanges<P> {
        let mut changes = SliderChanges::default();
        self.evaluate_into(&mut changes);
        changes
    }

    /// Like [`evaluate`](Self::evaluate), but reuses a caller-provided buffer
    /// to avoid allocation.
    pub fn evaluate_into(&mut self, changes: &mut SliderChanges<P>) {
        changes.clear();

        core::mem::swap(&mut self.pending_detached, &mut changes.detached);
        if self.attach_pending {
            changes
                .attached
                .extend((0..self.panels.len()).map(super::key));
            self.attach_pending = false;
        }

        changes.frames = self
            .dirty
            .drain(dirty::FRAME)
            .deterministic()
            .run()
            .collect();

        let dirty_visibility: Vec<u32> = self
            .dirty
            .drain(dirty::VISIBILITY)
            .deterministic()
            .run()
            .collect();
        for idx in dirty_visibility {
            let slot = idx as usize;
            let hidden = self.hidden[slot];
            if hidden != self.presented_hidden[slot] {
                if hidden {
                    changes.hidden.push(idx);
                } else {
                    changes.unhidden.push(idx);
                }
                self.presented_hidden[slot] = hidden;
            }
        }

        changes.content_size = self.viewport.take_content_size();
        changes.scroll_enabled = self.viewport.take_scroll_enabled();
        changes.scroll = self.viewport.pending_scroll.take();
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::Size;

    use super::SliderChanges;
    use crate::slider::ScrollCommand;
    use crate::slider::tests::slider;

    #[test]
    fn first_evaluate_attaches_everything() {
        let (mut s, _) = slider(&['A', 'B', 'C']);
        let changes = s.evaluate();

        assert!(changes.detached.is_empty());
        assert_eq!(changes.attached, [0, 1, 2]);
        assert_eq!(changes.frames, [0, 1, 2]);
        assert_eq!(changes.hidden, [1, 2], "fresh views start visible");
        assert!(changes.unhidden.is_empty());
        assert_eq!(changes.content_size, Some(Size::new(300.0, 50.0)));
        assert_eq!(changes.scroll_enabled, Some(true));
        assert_eq!(changes.scroll, Some(ScrollCommand::Set(100.0)));

        assert!(s.evaluate().is_empty(), "nothing left to apply");
    }

    #[test]
    fn staging_reports_frame_and_unhide() {
        let (mut s, _) = slider(&['A', 'B', 'C']);
        let _ = s.evaluate();

        let _ = s.on_scroll_offset_changed(150.0);
        let changes = s.evaluate();
        assert_eq!(changes.frames, [1]);
        assert_eq!(changes.unhidden, [1]);
        assert!(changes.hidden.is_empty());
        assert_eq!(changes.scroll, None, "host-driven offsets are not echoed");
    }

    #[test]
    fn commit_reports_recenter() {
        let (mut s, _) = slider(&['A', 'B', 'C']);
        let _ = s.evaluate();

        let _ = s.on_scroll_offset_changed(150.0);
        let _ = s.on_scroll_offset_changed(200.0);
        let changes = s.evaluate();
        assert_eq!(changes.frames, [1], "B moved next slot -> current slot");
        assert_eq!(changes.hidden, [0]);
        assert_eq!(changes.unhidden, [1]);
        assert_eq!(changes.scroll, Some(ScrollCommand::Set(100.0)));
    }

    #[test]
    fn hide_then_unhide_between_evaluates_is_silent() {
        let (mut s, _) = slider(&['A', 'B', 'C']);
        let _ = s.evaluate();

        let _ = s.on_scroll_offset_changed(150.0);
        let _ = s.on_scroll_offset_changed(100.0);
        s.jump_to(0).expect("in range");
        let changes = s.evaluate();
        assert!(changes.hidden.is_empty());
        assert!(changes.unhidden.is_empty());
    }

    #[test]
    fn replacement_detaches_presented_panels() {
        let (mut s, _) = slider(&['A', 'B']);
        let _ = s.evaluate();

        s.set_panels(vec!['X', 'Y', 'Z']);
        let changes = s.evaluate();
        assert_eq!(changes.detached, ['A', 'B']);
        assert_eq!(changes.attached, [0, 1, 2]);
        assert_eq!(changes.content_size, None, "bounds unchanged");
    }

    #[test]
    fn unpresented_panels_are_never_detached() {
        let (mut s, _) = slider(&['A', 'B']);
        let _ = s.evaluate();

        s.set_panels(vec!['X']);
        s.set_panels(vec!['Y', 'Z']);
        let changes = s.evaluate();
        assert_eq!(changes.detached, ['A', 'B']);
        assert_eq!(changes.attached, [0, 1]);
        assert_eq!(changes.scroll_enabled, None, "still scrollable");
    }

    #[test]
    fn evaluate_into_reuses_buffer() {
        let (mut s, _) = slider(&['A', 'B', 'C']);
        let mut changes = SliderChanges::default();

        s.evaluate_into(&mut changes);
        assert_eq!(changes.attached.len(), 3);

        let _ = s.on_scroll_offset_changed(40.0);
        s.evaluate_into(&mut changes);
        assert!(changes.attached.is_empty(), "attached should be cleared");
        assert_eq!(changes.frames, [2]);
        assert!(changes.detached.is_empty());
    }
}
