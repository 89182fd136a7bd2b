// SPDX-License-Identifier: MPL-2.0
//! Story content: panels, their media surfaces, and deck loading.
//!
//! Nothing in here knows about navigation. A [`Panel`] only reacts to the
//! `entered`/`exited` signals the viewer sends it through [`Lifecycle`].

pub mod clip;
pub mod deck;
pub mod panel;

pub use clip::Clip;
pub use deck::{Deck, PanelSpec};
pub use panel::{Lifecycle, MediaSurface, Panel};
