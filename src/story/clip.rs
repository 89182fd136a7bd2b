// SPDX-License-Identifier: MPL-2.0
//! Timed media clip: a playback clock with a fixed duration.
//!
//! The clock only advances while playing. Callers that need deterministic
//! timing use the `*_at` variants; the [`MediaSurface`] impl feeds them
//! `Instant::now()`.

use crate::error::MediaError;
use crate::story::panel::MediaSurface;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Clip {
    duration: Duration,
    /// Playhead at the moment playback last started or paused.
    anchor: Duration,
    /// Set while playing.
    playing_since: Option<Instant>,
}

impl Clip {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            anchor: Duration::ZERO,
            playing_since: None,
        }
    }

    /// Builds a clip from a length in seconds, rejecting values that
    /// cannot describe a playable duration.
    #[must_use]
    pub fn from_secs(secs: f32) -> Option<Self> {
        if !secs.is_finite() || secs <= 0.0 {
            return None;
        }
        Some(Self::new(Duration::from_secs_f32(secs)))
    }

    #[must_use]
    pub fn position_at(&self, now: Instant) -> Duration {
        let elapsed = self
            .playing_since
            .map_or(Duration::ZERO, |since| now.saturating_duration_since(since));
        (self.anchor + elapsed).min(self.duration)
    }

    #[must_use]
    pub fn is_finished_at(&self, now: Instant) -> bool {
        self.position_at(now) >= self.duration
    }

    /// Fraction of the clip played, in `0.0..=1.0`.
    #[must_use]
    pub fn progress_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        (self.position_at(now).as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Starts playback at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::NotPlayable`] for a zero-length clip.
    pub fn play_at(&mut self, now: Instant) -> Result<(), MediaError> {
        if self.duration.is_zero() {
            return Err(MediaError::NotPlayable);
        }
        if self.playing_since.is_none() {
            self.playing_since = Some(now);
        }
        Ok(())
    }

    pub fn pause_at(&mut self, now: Instant) {
        self.anchor = self.position_at(now);
        self.playing_since = None;
    }

    /// Moves the playhead, keeping the play/pause state.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::SeekFailed`] past the end of the clip.
    pub fn seek_at(&mut self, position: Duration, now: Instant) -> Result<(), MediaError> {
        if position > self.duration {
            return Err(MediaError::SeekFailed(format!(
                "{:.2}s is past the end ({:.2}s)",
                position.as_secs_f32(),
                self.duration.as_secs_f32()
            )));
        }
        self.anchor = position;
        if self.playing_since.is_some() {
            self.playing_since = Some(now);
        }
        Ok(())
    }
}

impl MediaSurface for Clip {
    fn seek(&mut self, position: Duration) -> Result<(), MediaError> {
        self.seek_at(position, Instant::now())
    }

    fn play(&mut self) -> Result<(), MediaError> {
        self.play_at(Instant::now())
    }

    fn pause(&mut self) -> Result<(), MediaError> {
        self.pause_at(Instant::now());
        Ok(())
    }

    fn is_playing(&self) -> bool {
        self.playing_since.is_some()
    }

    fn position(&self) -> Duration {
        self.position_at(Instant::now())
    }

    fn duration(&self) -> Duration {
        self.duration
    }
}
