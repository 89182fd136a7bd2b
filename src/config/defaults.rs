// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Transform**: Panel scale profile during a drag
//! - **Gesture**: Stalled gesture cancellation
//! - **Window**: Initial and minimum window size

// ==========================================================================
// Transform Defaults
// ==========================================================================

/// Scale reached by a panel one full width away from the center.
pub const DEFAULT_MIN_SCALE: f32 = 0.8;

/// Lowest accepted minimum scale.
pub const MIN_MIN_SCALE: f32 = 0.1;

/// Highest accepted minimum scale (1.0 disables shrinking).
pub const MAX_MIN_SCALE: f32 = 1.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Time without samples after which an unfinished drag is dropped (ms).
pub const DEFAULT_STALL_TIMEOUT_MS: u32 = 1500;

/// Minimum stall timeout (ms).
pub const MIN_STALL_TIMEOUT_MS: u32 = 250;

/// Maximum stall timeout (ms).
pub const MAX_STALL_TIMEOUT_MS: u32 = 10_000;

/// Interval of the stall check while a drag is in flight (ms).
pub const STALL_CHECK_INTERVAL_MS: u64 = 100;

/// Redraw interval while the current panel's clip is playing (ms).
pub const FRAME_INTERVAL_MS: u64 = 33;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const DEFAULT_WINDOW_WIDTH: u32 = 300;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 200;
pub const MIN_WINDOW_HEIGHT: u32 = 300;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MIN_SCALE > 0.0);
    assert!(MAX_MIN_SCALE <= 1.0);
    assert!(DEFAULT_MIN_SCALE >= MIN_MIN_SCALE);
    assert!(DEFAULT_MIN_SCALE <= MAX_MIN_SCALE);

    assert!(MIN_STALL_TIMEOUT_MS > 0);
    assert!(MAX_STALL_TIMEOUT_MS >= MIN_STALL_TIMEOUT_MS);
    assert!(DEFAULT_STALL_TIMEOUT_MS >= MIN_STALL_TIMEOUT_MS);
    assert!(DEFAULT_STALL_TIMEOUT_MS <= MAX_STALL_TIMEOUT_MS);
    assert!(STALL_CHECK_INTERVAL_MS < MIN_STALL_TIMEOUT_MS as u64);
    assert!(FRAME_INTERVAL_MS > 0);

    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_scale_defaults_are_valid() {
        assert_eq!(DEFAULT_MIN_SCALE, 0.8);
        assert!(DEFAULT_MIN_SCALE >= MIN_MIN_SCALE);
        assert!(DEFAULT_MIN_SCALE <= MAX_MIN_SCALE);
    }

    #[test]
    fn stall_timeout_defaults_are_valid() {
        assert_eq!(DEFAULT_STALL_TIMEOUT_MS, 1500);
        assert!(DEFAULT_STALL_TIMEOUT_MS >= MIN_STALL_TIMEOUT_MS);
        assert!(DEFAULT_STALL_TIMEOUT_MS <= MAX_STALL_TIMEOUT_MS);
    }

    #[test]
    fn window_defaults_match_story_format() {
        assert!(DEFAULT_WINDOW_HEIGHT > DEFAULT_WINDOW_WIDTH);
    }
}
