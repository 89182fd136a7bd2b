// SPDX-License-Identifier: MPL-2.0
//! Drag gesture samples and the pan state machine.
//!
//! The gesture recognizer reports `{delta_x, is_final}` samples. This module
//! stores them, derives the current [`PanPhase`], and hands out a completed
//! gesture exactly once.

use std::time::{Duration, Instant};

/// One reading from the gesture recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanSample {
    /// Horizontal drag distance in pixels since the gesture started.
    pub delta_x: f32,
    /// Set on the sample that ends the gesture (pointer released).
    pub is_final: bool,
}

impl PanSample {
    /// Sample for a drag still in progress.
    #[must_use]
    pub fn moving(delta_x: f32) -> Self {
        Self {
            delta_x,
            is_final: false,
        }
    }

    /// Sample ending a drag.
    #[must_use]
    pub fn released(delta_x: f32) -> Self {
        Self {
            delta_x,
            is_final: true,
        }
    }

    /// Delta used for rendering: a released drag no longer offsets panels.
    #[must_use]
    pub fn effective_delta(self) -> f32 {
        if self.is_final {
            0.0
        } else {
            self.delta_x
        }
    }
}

/// Where the viewer is in a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanPhase {
    /// No drag in flight.
    Idle,
    /// A drag is live and panels follow it.
    Panning,
    /// The final sample arrived and waits for the next sync to consume it.
    Releasing,
}

/// Navigation requested by a completed drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Previous,
    Next,
}

impl Commit {
    /// Dragging right reveals the previous panel; any other nonzero delta
    /// moves forward. A zero delta commits nothing.
    #[must_use]
    pub fn from_delta(delta_x: f32) -> Option<Self> {
        if delta_x == 0.0 {
            None
        } else if delta_x > 0.0 {
            Some(Self::Previous)
        } else {
            Some(Self::Next)
        }
    }
}

/// Latest sample plus the bookkeeping needed for edge detection and
/// stall cancellation.
#[derive(Debug, Clone, Default)]
pub struct PanState {
    sample: PanSample,
    /// Arrival time of the latest non-final sample.
    last_motion_at: Option<Instant>,
    /// The previous consumed sample was final; blocks a repeated release.
    release_consumed: bool,
}

impl PanState {
    /// Stores a sample verbatim.
    pub fn record(&mut self, sample: PanSample, now: Instant) {
        self.sample = sample;
        if sample.is_final {
            self.last_motion_at = None;
        } else {
            self.last_motion_at = Some(now);
            self.release_consumed = false;
        }
    }

    #[must_use]
    pub fn sample(&self) -> PanSample {
        self.sample
    }

    #[must_use]
    pub fn phase(&self) -> PanPhase {
        if self.sample.is_final {
            PanPhase::Releasing
        } else if self.sample.delta_x != 0.0 {
            PanPhase::Panning
        } else {
            PanPhase::Idle
        }
    }

    /// Consumes a final sample and returns to Idle.
    ///
    /// Returns the sample only on a fresh release (a non-final sample, or
    /// nothing at all, came before it). A final sample repeated without
    /// motion in between is consumed silently.
    pub fn take_release(&mut self) -> Option<PanSample> {
        if !self.sample.is_final {
            return None;
        }
        let released = self.sample;
        let fresh = !self.release_consumed;
        self.reset();
        self.release_consumed = true;
        fresh.then_some(released)
    }

    /// Drops a drag whose last sample is older than `timeout`.
    /// Returns `true` if a drag was dropped.
    pub fn cancel_if_stalled(&mut self, now: Instant, timeout: Duration) -> bool {
        if self.phase() != PanPhase::Panning {
            return false;
        }
        let stalled = self
            .last_motion_at
            .is_some_and(|at| now.saturating_duration_since(at) >= timeout);
        if stalled {
            self.reset();
        }
        stalled
    }

    fn reset(&mut self) {
        self.sample = PanSample::default();
        self.last_motion_at = None;
    }
}
