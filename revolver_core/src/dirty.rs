// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! The slider uses per-panel dirty tracking (via [`understory_dirty`]) to
//! report exactly which panels a presenter has to touch. Keys are panel
//! indices into the current panel list. Both channels are local-only: panels
//! have no parent/child relationship, so nothing propagates.
//!
//! # Consumption
//!
//! Callers never need to query dirty state directly. Each
//! [`Slider::evaluate`](crate::slider::Slider::evaluate) call drains all
//! channels and surfaces the results as
//! [`SliderChanges`](crate::slider::SliderChanges), which hosts
//! [consume](crate::backend::Presenter::apply) to apply incremental updates.
//! Replacing the panel list discards all pending marks for the old list.

use understory_dirty::Channel;

/// Panel frame changed (staged into a slot or recentered).
pub const FRAME: Channel = Channel::new(0);

/// Panel hidden flag changed.
pub const VISIBILITY: Channel = Channel::new(1);
