// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::viewer;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(viewer::Message),
    /// Periodic stall check while a drag is in flight.
    StallCheck(Instant),
    /// Animation tick while the current clip plays; only triggers a redraw.
    Frame(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_STORIES_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Panel to show first; clamped to the deck.
    pub start: Option<usize>,
    /// Deck file to load instead of the built-in one.
    pub deck_path: Option<String>,
}
