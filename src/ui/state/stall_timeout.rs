// SPDX-License-Identifier: MPL-2.0
//! Stall timeout domain type for drag gestures.
//!
//! A drag that stops delivering samples without ever sending its final
//! sample is dropped once this much time has passed since the last sample.

use crate::config::{DEFAULT_STALL_TIMEOUT_MS, MAX_STALL_TIMEOUT_MS, MIN_STALL_TIMEOUT_MS};
use std::time::Duration;

/// Stall timeout in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (250–10000 ms).
///
/// # Example
///
/// ```
/// use iced_stories::ui::state::StallTimeout;
///
/// let timeout = StallTimeout::new(800);
/// assert_eq!(timeout.value(), 800);
///
/// // Values outside range are clamped
/// let too_low = StallTimeout::new(10);
/// assert_eq!(too_low.value(), 250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StallTimeout(u32);

impl StallTimeout {
    /// Creates a new stall timeout, clamping to valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(MIN_STALL_TIMEOUT_MS, MAX_STALL_TIMEOUT_MS))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for StallTimeout {
    fn default() -> Self {
        Self(DEFAULT_STALL_TIMEOUT_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(StallTimeout::new(0).value(), MIN_STALL_TIMEOUT_MS);
        assert_eq!(StallTimeout::new(u32::MAX).value(), MAX_STALL_TIMEOUT_MS);
    }

    #[test]
    fn default_returns_expected_value() {
        assert_eq!(StallTimeout::default().value(), DEFAULT_STALL_TIMEOUT_MS);
    }

    #[test]
    fn as_duration_converts_correctly() {
        assert_eq!(
            StallTimeout::new(750).as_duration(),
            Duration::from_millis(750)
        );
    }
}
