// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The three-slot window.
//!
//! The scrollable content of a slider is exactly three viewport widths wide.
//! [`SlotWindow`] holds the rectangle of each slot in content coordinates:
//!
//! ```text
//!   x = 0          x = w          x = 2w         x = 3w
//!   ┌──────────────┬──────────────┬──────────────┐
//!   │   Previous   │   Current    │     Next     │  height = h
//!   └──────────────┴──────────────┴──────────────┘
//! ```
//!
//! The viewport rests at offset `w`, showing the current slot. An offset of
//! `2w` means a forward slide has completed and an offset of `0` means a
//! backward slide has completed.

use kurbo::{Point, Rect, Size};

/// One of the three slots of a [`SlotWindow`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The left slot, where the previous panel is staged.
    Previous,
    /// The middle slot, where the viewport rests.
    Current,
    /// The right slot, where the next panel is staged.
    Next,
}

/// Slot rectangles for a given viewport size.
///
/// Construction is a pure function of the size, so recomputing with an
/// unchanged size yields identical rectangles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotWindow {
    /// Rectangle of the previous slot (x = 0).
    pub previous: Rect,
    /// Rectangle of the current slot (x = w).
    pub current: Rect,
    /// Rectangle of the next slot (x = 2w).
    pub next: Rect,
}

impl SlotWindow {
    /// A window with all three slots empty.
    pub const ZERO: Self = Self {
        previous: Rect::ZERO,
        current: Rect::ZERO,
        next: Rect::ZERO,
    };

    /// Lays out three contiguous slots of `size`, left to right.
    #[must_use]
    pub fn new(size: Size) -> Self {
        let w = size.width;
        Self {
            previous: Rect::from_origin_size(Point::ORIGIN, size),
            current: Rect::from_origin_size(Point::new(w, 0.0), size),
            next: Rect::from_origin_size(Point::new(2.0 * w, 0.0), size),
        }
    }

    /// Returns the rectangle of `slot`.
    #[must_use]
    pub fn rect(&self, slot: Slot) -> Rect {
        match slot {
            Slot::Previous => self.previous,
            Slot::Current => self.current,
            Slot::Next => self.next,
        }
    }

    /// Width of a single slot.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.current.width()
    }

    /// Size of the scrollable content: three slot widths by one slot height.
    #[must_use]
    pub fn content_size(&self) -> Size {
        let size = self.current.size();
        Size::new(3.0 * size.width, size.height)
    }

    /// Offset at which the viewport shows the current slot.
    #[must_use]
    pub fn rest_offset(&self) -> f64 {
        self.width()
    }

    /// Offset at which a forward slide is complete.
    #[must_use]
    pub fn forward_offset(&self) -> f64 {
        2.0 * self.width()
    }

    /// Whether the slots have a usable (positive) width.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.width() > 0.0
    }
}

impl Default for SlotWindow {
    fn default() -> Self {
        Self::ZERO
    }
}
