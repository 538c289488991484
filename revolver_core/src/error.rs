// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rejections for caller contract violations.

use core::fmt;

/// Errors from [`Slider`](crate::slider::Slider) operations.
///
/// Every variant describes a caller mistake. A rejected call leaves the
/// slider exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderError {
    /// A jump targeted an index outside `0..count`.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of panels at the time of the request.
        count: usize,
    },
    /// The auto-slide interval was zero.
    InvalidInterval,
}

impl fmt::Display for SliderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, count } => {
                write!(f, "panel index {index} out of range for {count} panels")
            }
            Self::InvalidInterval => f.write_str("auto-slide interval must be greater than zero"),
        }
    }
}

impl core::error::Error for SliderError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_names_index_and_count() {
        let e = SliderError::IndexOutOfRange { index: 5, count: 3 };
        assert_eq!(e.to_string(), "panel index 5 out of range for 3 panels");
    }
}
