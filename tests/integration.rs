// SPDX-License-Identifier: MPL-2.0
use iced_stories::config::{self, Config, ViewerConfig, WindowConfig};
use iced_stories::story::{Deck, MediaSurface, PanelSpec};
use iced_stories::ui::viewer::{
    Effect, Message, Navigation, PanSample, ScalePolicy, Viewer, ViewerSettings,
};
use tempfile::tempdir;

fn clip_deck() -> Deck {
    let clip = |title: &str, secs: f32| PanelSpec {
        clip_secs: Some(secs),
        ..PanelSpec::titled(title)
    };
    Deck {
        panels: vec![
            clip("first", 3.0),
            PanelSpec::titled("second"),
            clip("third", 5.0),
        ],
    }
}

#[test]
fn config_round_trip_drives_viewer_settings() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config = Config {
        viewer: ViewerConfig {
            min_scale: Some(0.5),
            apply_scale: Some(false),
            stall_timeout_ms: Some(50_000),
        },
        window: WindowConfig::default(),
    };
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, config);

    let settings = ViewerSettings::from(&loaded.viewer);
    assert_eq!(settings.min_scale.value(), 0.5);
    assert_eq!(settings.scale_policy, ScalePolicy::Ignore);
    // Out-of-range values are clamped, not rejected.
    assert_eq!(
        settings.stall_timeout.value(),
        config::MAX_STALL_TIMEOUT_MS
    );
}

#[test]
fn deck_file_to_swipe_navigation() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("deck.toml");
    clip_deck().save_to_path(&path).expect("Failed to write deck");

    let deck = Deck::load_from_path(&path).expect("Failed to load deck");
    let mut viewer = Viewer::new(deck.into_panels());

    // The first panel starts playing as soon as the viewer exists.
    assert!(viewer.panels()[0].media().is_some_and(|m| m.is_playing()));

    // Drag left past the first panel and let go.
    assert_eq!(
        viewer.handle(Message::Pan(PanSample::moving(-120.0))),
        Effect::None
    );
    let transforms: Vec<_> = viewer.transforms(300.0).collect();
    assert_eq!(transforms[0].offset_x, -120.0);
    assert_eq!(transforms[1].offset_x, 180.0);

    assert_eq!(
        viewer.handle(Message::Pan(PanSample::released(-120.0))),
        Effect::Navigated(Navigation { from: 0, to: 1 })
    );
    assert_eq!(viewer.index(), 1);
    assert!(viewer.panels()[0].media().is_some_and(|m| !m.is_playing()));

    // Jump to the end with a marker click; the clip there starts from zero.
    assert_eq!(
        viewer.handle(Message::SetIndex(2)),
        Effect::Navigated(Navigation { from: 1, to: 2 })
    );
    let third = viewer.panels()[2].media().expect("third panel has a clip");
    assert!(third.is_playing());
    assert!(third.position() < third.duration());

    let watched: Vec<bool> = viewer.markers().map(|marker| marker.watched).collect();
    assert_eq!(watched, vec![true, true, true]);
}

#[test]
fn released_drag_settles_without_offset() {
    let mut viewer = Viewer::new(Deck::builtin().into_panels());
    viewer.handle(Message::Pan(PanSample::moving(90.0)));
    // Dragging right on the first panel re-enters it.
    assert_eq!(
        viewer.handle(Message::Pan(PanSample::released(90.0))),
        Effect::Navigated(Navigation { from: 0, to: 0 })
    );
    let current = viewer.transforms(300.0).next().expect("at least one panel");
    assert_eq!(current.offset_x, 0.0);
    assert_eq!(current.scale, 1.0);
}
