// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the story viewer, routes messages to it, and logs
//! the effects it reports. Startup reads `settings.toml` and the deck named
//! on the command line; either one failing falls back to defaults.

mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::story::{Deck, Panel};
use crate::ui::viewer::{self, Effect, Viewer, ViewerSettings};
use iced::{window, Element, Subscription, Task, Theme};
use log::{debug, error, info, warn};
use std::fmt;
use std::path::Path;

const APP_TITLE: &str = "Iced Stories";

/// Root Iced application state.
pub struct App {
    viewer: Viewer<Panel>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("index", &self.viewer.index())
            .field("count", &self.viewer.count())
            .finish()
    }
}

/// Builds the window settings from the `[window]` section.
#[allow(clippy::cast_precision_loss)]
pub fn window_settings(config: &Config) -> window::Settings {
    let width = config
        .window
        .width
        .unwrap_or(config::DEFAULT_WINDOW_WIDTH)
        .max(MIN_WINDOW_WIDTH);
    let height = config
        .window
        .height
        .unwrap_or(config::DEFAULT_WINDOW_HEIGHT)
        .max(MIN_WINDOW_HEIGHT);

    window::Settings {
        size: iced::Size::new(width as f32, height as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_override(flags.config_dir.clone());

    let (config, config_warning) = config::load();
    if let Some(warning) = config_warning {
        warn!("{}", warning);
    }
    let window = window_settings(&config);

    // iced 0.14 requires an `Fn` boot closure; the startup state is
    // consumed on the first call.
    let boot_state = RefCell::new(Some((flags, config)));
    let boot = move || {
        let (flags, config) = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(&flags, &config)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

/// Loads the deck at `path`, or the built-in deck when no path is given or
/// loading fails.
pub fn load_deck(path: Option<&Path>) -> Deck {
    let Some(path) = path else {
        return Deck::builtin();
    };
    match Deck::load_from_path(path) {
        Ok(deck) => {
            info!("Loaded {} panels from {}", deck.panels.len(), path.display());
            deck
        }
        Err(err) => {
            error!("Failed to load deck {}: {}", path.display(), err);
            Deck::builtin()
        }
    }
}

impl App {
    /// Builds the viewer from the deck and settings, then jumps to the
    /// requested start panel.
    pub fn new(flags: &Flags, config: &Config) -> (Self, Task<Message>) {
        let deck = load_deck(flags.deck_path.as_deref().map(Path::new));
        let settings = ViewerSettings::from(&config.viewer);
        let mut viewer = Viewer::with_settings(deck.into_panels(), settings);

        if let Some(start) = flags.start {
            viewer.set_index(start);
            viewer.sync();
        }

        (Self { viewer }, Task::none())
    }

    #[must_use]
    pub fn viewer(&self) -> &Viewer<Panel> {
        &self.viewer
    }

    #[must_use]
    pub fn title(&self) -> String {
        if self.viewer.count() == 0 {
            return APP_TITLE.to_string();
        }
        format!(
            "{} ({}/{})",
            APP_TITLE,
            self.viewer.index() + 1,
            self.viewer.count()
        )
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(msg) => {
                let effect = self.viewer.handle(msg);
                self.log_effect(&effect);
            }
            Message::StallCheck(now) => {
                let effect = self.viewer.handle(viewer::Message::Tick(now));
                self.log_effect(&effect);
            }
            Message::Frame(_) => {}
        }
        Task::none()
    }

    fn log_effect(&self, effect: &Effect) {
        match effect {
            Effect::None => {}
            Effect::Navigated(navigation) => debug!(
                "Showing panel {} of {} (from {})",
                navigation.to + 1,
                self.viewer.count(),
                navigation.from + 1
            ),
            Effect::GestureCancelled => debug!("Drag dropped after stalling"),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        viewer::view(&self.viewer).map(Message::Viewer)
    }

    /// Whether the current panel has media that is still advancing.
    #[must_use]
    pub fn is_media_playing(&self) -> bool {
        self.viewer
            .current_panel()
            .and_then(|panel| panel.media())
            .is_some_and(|media| media.is_playing() && media.position() < media.duration())
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_keyboard_subscription(),
            subscription::create_stall_subscription(self.viewer.is_panning()),
            subscription::create_frame_subscription(self.is_media_playing()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::PanelSpec;
    use tempfile::tempdir;

    fn flags_with_start(start: Option<usize>) -> Flags {
        Flags {
            start,
            ..Flags::default()
        }
    }

    #[test]
    fn starts_on_first_builtin_panel() {
        let (app, _task) = App::new(&Flags::default(), &Config::default());
        assert_eq!(app.viewer().index(), 0);
        assert_eq!(app.viewer().count(), Deck::builtin().panels.len());
        assert_eq!(app.title(), format!("Iced Stories (1/{})", app.viewer().count()));
    }

    #[test]
    fn start_flag_is_clamped() {
        let (app, _task) = App::new(&flags_with_start(Some(99)), &Config::default());
        assert_eq!(app.viewer().index(), app.viewer().count() - 1);
    }

    #[test]
    fn missing_deck_falls_back_to_builtin() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let deck = load_deck(Some(&temp_dir.path().join("missing.toml")));
        assert_eq!(deck, Deck::builtin());
    }

    #[test]
    fn deck_flag_loads_panels() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("deck.toml");
        let deck = Deck {
            panels: vec![PanelSpec::titled("One"), PanelSpec::titled("Two")],
        };
        deck.save_to_path(&path).expect("failed to save deck");

        let flags = Flags {
            deck_path: Some(path.to_string_lossy().into_owned()),
            ..Flags::default()
        };
        let (app, _task) = App::new(&flags, &Config::default());
        assert_eq!(app.viewer().count(), 2);
        assert_eq!(app.viewer().panels()[1].title, "Two");
    }

    #[test]
    fn viewer_messages_navigate() {
        let (mut app, _task) = App::new(&Flags::default(), &Config::default());
        let _ = app.update(Message::Viewer(viewer::Message::Next));
        assert_eq!(app.viewer().index(), 1);
        let _ = app.update(Message::Viewer(viewer::Message::SetIndex(usize::MAX)));
        assert_eq!(app.viewer().index(), app.viewer().count() - 1);
        let _ = app.update(Message::Viewer(viewer::Message::Previous));
        assert_eq!(app.viewer().index(), app.viewer().count() - 2);
    }

    #[test]
    fn clip_panel_plays_after_navigation() {
        let (mut app, _task) = App::new(&Flags::default(), &Config::default());
        assert!(!app.is_media_playing());

        // The second built-in panel carries a clip.
        let _ = app.update(Message::Viewer(viewer::Message::Next));
        assert!(app.is_media_playing());

        let _ = app.update(Message::Viewer(viewer::Message::Next));
        let clip_panel = &app.viewer().panels()[1];
        assert!(clip_panel.media().is_some_and(|media| !media.is_playing()));
    }

    #[test]
    fn window_settings_respect_minimums() {
        let mut config = Config::default();
        config.window.width = Some(10);
        config.window.height = Some(10);
        let settings = window_settings(&config);
        assert_eq!(
            settings.size,
            iced::Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)
        );
    }
}
