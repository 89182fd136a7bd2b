// SPDX-License-Identifier: MPL-2.0
//! Story deck files.
//!
//! A deck is a TOML document listing panels in display order:
//!
//! ```toml
//! [[panel]]
//! title = "Morning"
//! body = "Coffee first."
//! background = "#3a2f5b"
//!
//! [[panel]]
//! title = "Commute"
//! clip_secs = 6.0
//! ```

use crate::error::{Error, Result};
use crate::story::{Clip, Panel};
use iced::Color;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Description of a single panel as written in a deck file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PanelSpec {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Background colour as `#rrggbb`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    /// Length of the panel's media clip. No clip when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip_secs: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Deck {
    #[serde(default, rename = "panel")]
    pub panels: Vec<PanelSpec>,
}

impl Deck {
    /// Built-in deck shown when no deck file is given.
    #[must_use]
    pub fn builtin() -> Self {
        let spec = |title: &str, body: &str, background: &str, clip_secs: Option<f32>| PanelSpec {
            title: title.to_string(),
            body: Some(body.to_string()),
            background: Some(background.to_string()),
            clip_secs,
        };
        Self {
            panels: vec![
                spec("Welcome", "Swipe or tap the arrows to move between stories.", "#1f2a44", None),
                spec("Sunrise", "This one has a clip. It restarts every time you come back.", "#a34a28", Some(6.0)),
                spec("Harbour", "Drag halfway and let go to see the panel settle.", "#1d5c63", Some(4.0)),
                spec("Night", "The markers below show how far you got.", "#2b2d42", None),
            ],
        }
    }

    /// Parses a deck from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed TOML and [`Error::Deck`] for
    /// a deck without panels.
    pub fn from_toml(content: &str) -> Result<Self> {
        let deck: Deck = toml::from_str(content)?;
        if deck.panels.is_empty() {
            return Err(Error::Deck("deck contains no panels".to_string()));
        }
        Ok(deck)
    }

    /// Loads a deck file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Writes the deck as pretty TOML, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Builds the runtime panels, in deck order.
    #[must_use]
    pub fn into_panels(self) -> Vec<Panel> {
        self.panels.into_iter().map(PanelSpec::into_panel).collect()
    }
}

impl PanelSpec {
    /// Panel with only a title; everything else uses defaults.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: None,
            background: None,
            clip_secs: None,
        }
    }

    fn into_panel(self) -> Panel {
        let mut panel = Panel::new(self.title);

        if let Some(body) = self.body {
            panel = panel.with_body(body);
        }

        if let Some(raw) = self.background.as_deref() {
            match parse_hex_color(raw) {
                Some(color) => panel = panel.with_background(color),
                None => warn!("Ignoring invalid background '{}' on panel '{}'", raw, panel.title),
            }
        }

        if let Some(secs) = self.clip_secs {
            match Clip::from_secs(secs) {
                Some(clip) => panel = panel.with_media(clip),
                None => warn!("Ignoring invalid clip length {} on panel '{}'", secs, panel.title),
            }
        }

        panel
    }
}

/// Parses `#rrggbb` (the leading `#` is optional).
#[must_use]
pub fn parse_hex_color(raw: &str) -> Option<Color> {
    let hex = raw.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
