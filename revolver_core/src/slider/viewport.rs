// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-view state mirrored by the slider.

use kurbo::Size;

/// A programmatic scroll request for the host's scroll view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollCommand {
    /// Jump to the offset without animation. The host must not report the
    /// resulting position back as a scroll update.
    Set(f64),
    /// Animate to the offset. The host reports every intermediate position
    /// back through
    /// [`Slider::on_scroll_offset_changed`](super::Slider::on_scroll_offset_changed).
    Animate(f64),
}

impl ScrollCommand {
    /// Target offset of the command.
    #[must_use]
    pub fn offset(self) -> f64 {
        match self {
            Self::Set(x) | Self::Animate(x) => x,
        }
    }
}

/// What the slider knows and wants of the host's scroll view.
#[derive(Clone, Debug)]
pub(crate) struct Viewport {
    /// Last offset reported by the host or forced by the slider.
    pub(crate) offset: f64,
    pub(crate) content_size: Size,
    pub(crate) scroll_enabled: bool,
    pub(crate) pending_scroll: Option<ScrollCommand>,
    /// Values last handed to the host, `None` before the first evaluation.
    pub(crate) presented_content_size: Option<Size>,
    pub(crate) presented_scroll_enabled: Option<bool>,
}

impl Viewport {
    /// A viewport whose content size and scroll flag have never been
    /// presented.
    pub(crate) fn new() -> Self {
        Self {
            offset: 0.0,
            content_size: Size::ZERO,
            scroll_enabled: false,
            pending_scroll: None,
            presented_content_size: None,
            presented_scroll_enabled: None,
        }
    }

    /// Returns the content size if the host has not seen it yet, and
    /// records it as presented.
    pub(crate) fn take_content_size(&mut self) -> Option<Size> {
        take_changed(&mut self.presented_content_size, self.content_size)
    }

    /// Returns the scroll flag if the host has not seen it yet, and records
    /// it as presented.
    pub(crate) fn take_scroll_enabled(&mut self) -> Option<bool> {
        take_changed(&mut self.presented_scroll_enabled, self.scroll_enabled)
    }

    /// Parks the viewport at `offset` immediately.
    pub(crate) fn reset_offset(&mut self, offset: f64) {
        self.offset = offset;
        self.pending_scroll = Some(ScrollCommand::Set(offset));
    }

    /// Requests an animated scroll; the offset changes as the host reports.
    pub(crate) fn animate_to(&mut self, offset: f64) {
        self.pending_scroll = Some(ScrollCommand::Animate(offset));
    }
}

fn take_changed<T: Copy + PartialEq>(presented: &mut Option<T>, value: T) -> Option<T> {
    if *presented == Some(value) {
        return None;
    }
    *presented = Some(value);
    Some(value)
}
