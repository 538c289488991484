// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider configuration.

use crate::error::SliderError;
use crate::time::Duration;

/// Default delay between automatic advances.
pub const DEFAULT_AUTO_SLIDE_INTERVAL: Duration = Duration::from_secs(3);

/// Configuration for a [`Slider`](crate::slider::Slider).
///
/// Passed to [`Slider::new`](crate::slider::Slider::new), which validates it.
/// Both fields can be changed afterwards through the slider's setters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderConfig {
    /// Whether auto-slide starts enabled.
    pub auto_slide_enabled: bool,
    /// Delay between a recentering and the next automatic advance.
    /// Must be non-zero.
    pub auto_slide_interval: Duration,
}

impl SliderConfig {
    /// Auto-slide disabled, three-second interval.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            auto_slide_enabled: false,
            auto_slide_interval: DEFAULT_AUTO_SLIDE_INTERVAL,
        }
    }

    /// Returns this configuration with auto-slide enabled at `interval`.
    #[must_use]
    pub const fn with_auto_slide(mut self, interval: Duration) -> Self {
        self.auto_slide_enabled = true;
        self.auto_slide_interval = interval;
        self
    }

    /// Checks the configuration for values the slider cannot run with.
    pub const fn validate(&self) -> Result<(), SliderError> {
        if self.auto_slide_interval.is_zero() {
            return Err(SliderError::InvalidInterval);
        }
        Ok(())
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self::new()
    }
}
