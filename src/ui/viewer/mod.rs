// SPDX-License-Identifier: MPL-2.0
//! Story viewer: navigation state, drag transforms, and the pane that draws them.

pub mod empty_state;
pub mod pan;
pub mod pane;
pub mod state;
pub mod strip;
pub mod transform;

pub use pan::{Commit, PanPhase, PanSample};
pub use state::{Effect, Marker, Message, Navigation, Viewer, ViewerSettings};
pub use transform::{PanelTransform, ScalePolicy};

use crate::story::Panel;
use iced::Element;

/// Renders the viewer, or a placeholder when there is nothing to show.
pub fn view(viewer: &Viewer<Panel>) -> Element<'_, Message> {
    if viewer.count() == 0 {
        return empty_state::view();
    }
    pane::view(viewer)
}
