// SPDX-License-Identifier: MPL-2.0
//! Story viewer state machine.
//!
//! [`Viewer`] owns the ordered panels, the current index and the live drag
//! sample. Every index change goes through [`Viewer::set_index`], which
//! always sends `exited` to the outgoing panel and then `entered` to the
//! incoming one, even when both are the same panel (tap-to-replay).
//!
//! Drag samples are stored as they arrive. [`Viewer::sync`] runs after every
//! mutation and turns a freshly released drag into one `previous()` or
//! `next()`, unless the index was already changed in the same cycle.

use crate::config::ViewerConfig;
use crate::story::{Lifecycle, Panel};
use crate::ui::state::{MinScale, StallTimeout};
use crate::ui::viewer::pan::{Commit, PanPhase, PanSample, PanState};
use crate::ui::viewer::transform::{self, PanelTransform, ScalePolicy};
use log::{debug, trace};
use std::time::Instant;

/// Tunables that shape rendering and gesture handling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewerSettings {
    pub min_scale: MinScale,
    pub scale_policy: ScalePolicy,
    pub stall_timeout: StallTimeout,
}

impl From<&ViewerConfig> for ViewerSettings {
    fn from(config: &ViewerConfig) -> Self {
        let defaults = Self::default();
        Self {
            min_scale: config.min_scale.map_or(defaults.min_scale, MinScale::new),
            scale_policy: config
                .apply_scale
                .map_or(defaults.scale_policy, ScalePolicy::from_flag),
            stall_timeout: config
                .stall_timeout_ms
                .map_or(defaults.stall_timeout, StallTimeout::new),
        }
    }
}

/// A completed index change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub from: usize,
    pub to: usize,
}

/// Progress marker for one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub index: usize,
    /// The panel is at or before the current one.
    pub watched: bool,
}

/// Messages for the viewer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Previous affordance, left arrow key.
    Previous,
    /// Next affordance, right arrow key.
    Next,
    /// Progress marker click or programmatic jump.
    SetIndex(usize),
    /// Sample from the gesture recognizer.
    Pan(PanSample),
    /// Periodic check for a stalled drag.
    Tick(Instant),
}

/// Effects produced by viewer messages.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// The current panel was (re)entered.
    Navigated(Navigation),
    /// A stalled drag was dropped without navigating.
    GestureCancelled,
}

#[derive(Debug)]
pub struct Viewer<P = Panel> {
    panels: Vec<P>,
    index: usize,
    pan: PanState,
    /// Set by `set_index`. Cleared by `sync` and at the start of every
    /// `handle` call, so it never outlives one message cycle.
    index_changed: bool,
    settings: ViewerSettings,
}

impl<P: Lifecycle> Viewer<P> {
    /// Creates a viewer showing the first panel, which receives `entered`.
    #[must_use]
    pub fn new(panels: Vec<P>) -> Self {
        Self::with_settings(panels, ViewerSettings::default())
    }

    #[must_use]
    pub fn with_settings(mut panels: Vec<P>, settings: ViewerSettings) -> Self {
        if let Some(first) = panels.first_mut() {
            first.entered();
        }
        Self {
            panels,
            index: 0,
            pan: PanState::default(),
            index_changed: false,
            settings,
        }
    }

    /// Current index, clamped to the live panel list.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index.min(self.panels.len().saturating_sub(1))
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.panels.len()
    }

    #[must_use]
    pub fn panels(&self) -> &[P] {
        &self.panels
    }

    /// Mutable access to the panel list. Adding or removing panels is
    /// allowed; the next navigation clamps the index.
    pub fn panels_mut(&mut self) -> &mut Vec<P> {
        &mut self.panels
    }

    #[must_use]
    pub fn current_panel(&self) -> Option<&P> {
        self.panels.get(self.index())
    }

    #[must_use]
    pub fn settings(&self) -> ViewerSettings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: ViewerSettings) {
        self.settings = settings;
    }

    #[must_use]
    pub fn pan_sample(&self) -> PanSample {
        self.pan.sample()
    }

    #[must_use]
    pub fn phase(&self) -> PanPhase {
        self.pan.phase()
    }

    /// Whether a drag is in flight (drives the stall timer).
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.phase() == PanPhase::Panning
    }

    /// Makes `target` (clamped) the current panel.
    ///
    /// Sends `exited` to the current panel, then `entered` to the target,
    /// even when they are the same. Does nothing on an empty list.
    pub fn set_index(&mut self, target: usize) -> Option<Navigation> {
        let last = self.panels.len().checked_sub(1)?;
        let from = self.index.min(last);
        let to = target.min(last);

        self.panels[from].exited();
        self.panels[to].entered();
        self.index = to;
        self.index_changed = true;

        debug!("Viewer index {} -> {} (requested {})", from, to, target);
        Some(Navigation { from, to })
    }

    /// Moves one panel back; at the first panel it re-enters it.
    pub fn previous(&mut self) -> Option<Navigation> {
        self.set_index(self.index().saturating_sub(1))
    }

    /// Moves one panel forward; at the last panel it re-enters it.
    pub fn next(&mut self) -> Option<Navigation> {
        self.set_index(self.index().saturating_add(1))
    }

    /// Stores a gesture sample. Never changes the index by itself.
    pub fn record_pan(&mut self, sample: PanSample, now: Instant) {
        trace!("Pan sample {:?}", sample);
        self.pan.record(sample, now);
    }

    /// Reconciles state after a mutation.
    ///
    /// A released drag with a nonzero delta commits once: right drags go to
    /// the previous panel, left drags to the next. The release is consumed
    /// even when it does not commit, so the next render shows no offset.
    pub fn sync(&mut self) -> Option<Navigation> {
        let index_changed = std::mem::take(&mut self.index_changed);
        let released = self.pan.take_release()?;

        if index_changed {
            debug!("Drag release ignored: index already changed this cycle");
            return None;
        }

        let navigation = match Commit::from_delta(released.delta_x)? {
            Commit::Previous => self.previous(),
            Commit::Next => self.next(),
        };
        // The commit belongs to this cycle.
        self.index_changed = false;
        navigation
    }

    /// Drops a drag that has been silent for longer than the stall timeout.
    pub fn cancel_stalled(&mut self, now: Instant) -> bool {
        let cancelled = self
            .pan
            .cancel_if_stalled(now, self.settings.stall_timeout.as_duration());
        if cancelled {
            debug!("Stalled drag cancelled");
        }
        cancelled
    }

    /// Handle a viewer message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        // Mutations made outside `handle` belong to an earlier cycle.
        self.index_changed = false;

        let navigated = match msg {
            Message::Previous => self.previous(),
            Message::Next => self.next(),
            Message::SetIndex(target) => self.set_index(target),
            Message::Pan(sample) => {
                self.record_pan(sample, Instant::now());
                None
            }
            Message::Tick(now) => {
                if self.cancel_stalled(now) {
                    self.sync();
                    return Effect::GestureCancelled;
                }
                None
            }
        };
        let committed = self.sync();

        match navigated.or(committed) {
            Some(navigation) => Effect::Navigated(navigation),
            None => Effect::None,
        }
    }

    /// Transform of every panel for a viewport `width` pixels wide.
    /// Computed fresh on each call.
    pub fn transforms(&self, width: f32) -> impl Iterator<Item = PanelTransform> {
        transform::panel_transforms(
            self.panels.len(),
            self.index(),
            self.pan.sample(),
            width,
            self.settings.min_scale,
        )
    }

    /// One marker per panel, in order.
    pub fn markers(&self) -> impl Iterator<Item = Marker> {
        let current = self.index();
        (0..self.panels.len()).map(move |index| Marker {
            index,
            watched: index <= current,
        })
    }
}
