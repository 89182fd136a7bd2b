// SPDX-License-Identifier: MPL-2.0
//! Minimum panel scale used by the drag transform.

use crate::config::{DEFAULT_MIN_SCALE, MAX_MIN_SCALE, MIN_MIN_SCALE};

/// Smallest scale a panel shrinks to while dragged, guaranteed to be
/// within `0.1..=1.0`.
///
/// # Example
///
/// ```
/// use iced_stories::ui::state::MinScale;
///
/// assert_eq!(MinScale::new(0.5).value(), 0.5);
/// assert_eq!(MinScale::new(3.0).value(), 1.0);
/// assert_eq!(MinScale::new(f32::NAN), MinScale::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinScale(f32);

impl MinScale {
    /// Creates a new minimum scale, clamping to the valid range.
    /// Non-finite input yields the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        Self(value.clamp(MIN_MIN_SCALE, MAX_MIN_SCALE))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// How much a panel shrinks per panel width of distance (`1 - min`).
    #[must_use]
    pub fn shrink_range(self) -> f32 {
        1.0 - self.0
    }
}

impl Default for MinScale {
    fn default() -> Self {
        Self(DEFAULT_MIN_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(MinScale::new(0.0).value(), MIN_MIN_SCALE);
        assert_eq!(MinScale::new(2.0).value(), MAX_MIN_SCALE);
    }

    #[test]
    fn non_finite_falls_back_to_default() {
        assert_eq!(MinScale::new(f32::INFINITY), MinScale::default());
        assert_eq!(MinScale::new(f32::NAN).value(), DEFAULT_MIN_SCALE);
    }

    #[test]
    fn shrink_range_complements_value() {
        assert!((MinScale::default().shrink_range() - 0.2).abs() < 1e-6);
        assert_eq!(MinScale::new(1.0).shrink_range(), 0.0);
    }
}
