// SPDX-License-Identifier: MPL-2.0
//! Story panel and the media surface port it drives.
//!
//! # Lifecycle
//!
//! 1. The viewer sends `entered` when the panel becomes current
//! 2. The panel rewinds its media surface (if any) and starts playback
//! 3. The viewer sends `exited` when another panel (or the same one, on
//!    replay) takes over
//! 4. The panel pauses its media surface
//!
//! A panel without a media surface ignores both signals.

use crate::error::MediaError;
use crate::ui::design_tokens::palette;
use iced::Color;
use log::warn;
use std::fmt;
use std::time::Duration;

/// Receiver of the viewer's boundary signals.
///
/// Both methods are infallible from the caller's point of view; an
/// implementation handles its own failures.
pub trait Lifecycle {
    /// The receiver just became the current panel.
    fn entered(&mut self);

    /// The receiver stopped being the current panel.
    fn exited(&mut self);
}

/// Port for something a panel can play: a clip, a video, an animation.
pub trait MediaSurface: fmt::Debug {
    /// Moves the playhead to `position`.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::SeekFailed`] if the position is out of range.
    fn seek(&mut self, position: Duration) -> Result<(), MediaError>;

    /// Starts or resumes playback from the current playhead.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::NotPlayable`] if there is nothing to play.
    fn play(&mut self) -> Result<(), MediaError>;

    /// Pauses playback, keeping the playhead where it is.
    ///
    /// # Errors
    ///
    /// Implementation specific.
    fn pause(&mut self) -> Result<(), MediaError>;

    fn is_playing(&self) -> bool;

    /// Current playhead.
    fn position(&self) -> Duration;

    fn duration(&self) -> Duration;
}

/// One full-viewport story card.
#[derive(Debug)]
pub struct Panel {
    pub title: String,
    pub body: Option<String>,
    pub background: Color,
    media: Option<Box<dyn MediaSurface>>,
}

impl Panel {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: None,
            background: palette::GRAY_900,
            media: None,
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    #[must_use]
    pub fn with_media(mut self, media: impl MediaSurface + 'static) -> Self {
        self.media = Some(Box::new(media));
        self
    }

    /// Attaches a media surface, returning the one it replaces.
    pub fn attach_media(
        &mut self,
        media: Box<dyn MediaSurface>,
    ) -> Option<Box<dyn MediaSurface>> {
        self.media.replace(media)
    }

    pub fn detach_media(&mut self) -> Option<Box<dyn MediaSurface>> {
        self.media.take()
    }

    #[must_use]
    pub fn media(&self) -> Option<&dyn MediaSurface> {
        self.media.as_deref()
    }

    #[must_use]
    pub fn has_media(&self) -> bool {
        self.media.is_some()
    }
}

impl Lifecycle for Panel {
    fn entered(&mut self) {
        let Some(media) = self.media.as_mut() else {
            return;
        };
        if let Err(err) = media.seek(Duration::ZERO).and_then(|()| media.play()) {
            warn!("Panel '{}' could not start its media: {}", self.title, err);
        }
    }

    fn exited(&mut self) {
        let Some(media) = self.media.as_mut() else {
            return;
        };
        if let Err(err) = media.pause() {
            warn!("Panel '{}' could not pause its media: {}", self.title, err);
        }
    }
}
