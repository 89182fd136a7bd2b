// SPDX-License-Identifier: MPL-2.0
//! Per-panel position and scale during a drag.
//!
//! For panel `i` with the current panel at `index`, a viewport `width` and
//! an effective drag delta `d` (zero once the drag is released):
//!
//! - `offset(i) = (i - index) * width + d`
//! - `u = d / width + (i - index)`
//! - `scale(i) = max(min_scale, 1 - |u * (1 - min_scale)|)`
//!
//! The scale profile looks like `__/\__`: full size at the center, shrinking
//! linearly to `min_scale` one panel width away.

use crate::ui::state::MinScale;
use crate::ui::viewer::pan::PanSample;

/// Whether the computed scale is used when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalePolicy {
    /// Panels shrink as they move away from the center.
    #[default]
    Apply,
    /// Panels only slide; the computed scale is ignored.
    Ignore,
}

impl ScalePolicy {
    #[must_use]
    pub fn from_flag(apply: bool) -> Self {
        if apply {
            Self::Apply
        } else {
            Self::Ignore
        }
    }
}

/// Screen placement of one panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelTransform {
    /// Horizontal offset from the viewport origin, in pixels.
    pub offset_x: f32,
    /// Computed scale factor in `min_scale..=1.0`.
    pub scale: f32,
}

impl PanelTransform {
    /// Scale to draw with under `policy`.
    #[must_use]
    pub fn visual_scale(self, policy: ScalePolicy) -> f32 {
        match policy {
            ScalePolicy::Apply => self.scale,
            ScalePolicy::Ignore => 1.0,
        }
    }
}

/// Computes the transform of the panel at `position`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn panel_transform(
    position: usize,
    index: usize,
    sample: PanSample,
    width: f32,
    min_scale: MinScale,
) -> PanelTransform {
    let delta = sample.effective_delta();
    let distance = position as f32 - index as f32;

    let offset_x = distance * width + delta;

    let drag_fraction = if width > 0.0 { delta / width } else { 0.0 };
    let u = drag_fraction + distance;
    let scale = (1.0 - (u * min_scale.shrink_range()).abs()).max(min_scale.value());

    PanelTransform { offset_x, scale }
}

/// Transforms for `count` panels, in order.
pub fn panel_transforms(
    count: usize,
    index: usize,
    sample: PanSample,
    width: f32,
    min_scale: MinScale,
) -> impl Iterator<Item = PanelTransform> {
    (0..count).map(move |position| panel_transform(position, index, sample, width, min_scale))
}
