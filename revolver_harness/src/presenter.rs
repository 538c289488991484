// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless presenter that emulates a paging scroll view.

use alloc::vec::Vec;

use kurbo::{Rect, Size};
use revolver_core::backend::Presenter;
use revolver_core::slider::{ScrollCommand, Slider, SliderChanges};

/// Default number of frames a programmatic scroll animation takes.
pub const DEFAULT_ANIMATION_STEPS: u32 = 8;

/// A panel as mirrored by the headless host.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelView<P> {
    /// The host's panel handle.
    pub panel: P,
    /// Frame in content coordinates.
    pub frame: Rect,
    /// Whether the view is hidden.
    pub hidden: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Animation {
    from: f64,
    to: f64,
    step: u32,
    steps: u32,
}

/// Emulated horizontal scroll view.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollView {
    /// Current horizontal offset.
    pub offset: f64,
    /// Scrollable content size.
    pub content_size: Size,
    /// Whether user drags are accepted.
    pub scroll_enabled: bool,
    animation: Option<Animation>,
}

impl ScrollView {
    /// Whether a programmatic animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }
}

/// Mirrors slider output onto in-memory views.
///
/// `Set` scroll commands move the offset silently; `Animate` commands start
/// a linear animation whose frames are produced by
/// [`next_animation_frame`](Self::next_animation_frame) and must be fed
/// back to the slider by the caller.
#[derive(Clone, Debug)]
pub struct HeadlessPresenter<P> {
    views: Vec<PanelView<P>>,
    detached: Vec<P>,
    scroll: ScrollView,
    animation_steps: u32,
    applied: u64,
}

impl<P> Default for HeadlessPresenter<P> {
    fn default() -> Self {
        Self::new(DEFAULT_ANIMATION_STEPS)
    }
}

impl<P> HeadlessPresenter<P> {
    /// Creates a presenter whose animations take `animation_steps` frames
    /// (at least one).
    #[must_use]
    pub fn new(animation_steps: u32) -> Self {
        Self {
            views: Vec::new(),
            detached: Vec::new(),
            scroll: ScrollView {
                offset: 0.0,
                content_size: Size::ZERO,
                scroll_enabled: false,
                animation: None,
            },
            animation_steps: animation_steps.max(1),
            applied: 0,
        }
    }

    /// The mirrored panel views, in slider order.
    #[must_use]
    pub fn views(&self) -> &[PanelView<P>] {
        &self.views
    }

    /// Every panel ever detached, in detach order.
    #[must_use]
    pub fn detached(&self) -> &[P] {
        &self.detached
    }

    /// The emulated scroll view.
    #[must_use]
    pub fn scroll_view(&self) -> &ScrollView {
        &self.scroll
    }

    /// Number of non-empty change sets applied.
    #[must_use]
    pub fn applied_count(&self) -> u64 {
        self.applied
    }

    /// Visible panels, in slider order.
    pub fn visible(&self) -> impl Iterator<Item = &P> + '_ {
        self.views.iter().filter(|v| !v.hidden).map(|v| &v.panel)
    }

    /// Moves the offset as a user drag would.
    ///
    /// Returns `false` (leaving the offset alone) when scrolling is
    /// disabled. A drag interrupts any programmatic animation.
    pub fn drag_to(&mut self, offset: f64) -> bool {
        if !self.scroll.scroll_enabled {
            return false;
        }
        self.scroll.animation = None;
        self.scroll.offset = offset;
        true
    }

    /// Advances the running animation by one frame and returns the new
    /// offset, or `None` when nothing is animating.
    pub fn next_animation_frame(&mut self) -> Option<f64> {
        let anim = self.scroll.animation.as_mut()?;
        anim.step += 1;
        let offset = if anim.step >= anim.steps {
            anim.to
        } else {
            let t = f64::from(anim.step) / f64::from(anim.steps);
            anim.from + (anim.to - anim.from) * t
        };
        if anim.step >= anim.steps {
            self.scroll.animation = None;
        }
        self.scroll.offset = offset;
        Some(offset)
    }
}

impl<P: Clone> Presenter<P> for HeadlessPresenter<P> {
    fn apply(&mut self, slider: &Slider<P>, changes: &SliderChanges<P>) {
        if changes.is_empty() {
            return;
        }
        self.applied += 1;

        self.detached.extend(changes.detached.iter().cloned());
        if !changes.attached.is_empty() {
            let panels = slider.panels();
            self.views = changes
                .attached
                .iter()
                .map(|&idx| PanelView {
                    panel: panels[idx as usize].clone(),
                    frame: Rect::ZERO,
                    hidden: false,
                })
                .collect();
        } else if !changes.detached.is_empty() {
            self.views.clear();
        }

        for &idx in &changes.frames {
            if let (Some(view), Some(frame)) =
                (self.views.get_mut(idx as usize), slider.frame_at(idx as usize))
            {
                view.frame = frame;
            }
        }
        for &idx in &changes.hidden {
            if let Some(view) = self.views.get_mut(idx as usize) {
                view.hidden = true;
            }
        }
        for &idx in &changes.unhidden {
            if let Some(view) = self.views.get_mut(idx as usize) {
                view.hidden = false;
            }
        }

        if let Some(size) = changes.content_size {
            self.scroll.content_size = size;
        }
        if let Some(enabled) = changes.scroll_enabled {
            self.scroll.scroll_enabled = enabled;
        }
        match changes.scroll {
            Some(ScrollCommand::Set(x)) => {
                self.scroll.animation = None;
                self.scroll.offset = x;
            }
            Some(ScrollCommand::Animate(x)) => {
                self.scroll.animation = Some(Animation {
                    from: self.scroll.offset,
                    to: x,
                    step: 0,
                    steps: self.animation_steps,
                });
            }
            None => {}
        }
    }
}
