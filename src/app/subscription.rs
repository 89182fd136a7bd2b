// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard navigation is always on. Timers only run while they have
//! something to do: the stall check during a drag, the frame tick while a
//! clip plays.

use super::Message;
use crate::config::{FRAME_INTERVAL_MS, STALL_CHECK_INTERVAL_MS};
use crate::ui::viewer;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Maps navigation keys to viewer messages. Keys already captured by a
/// widget are left alone.
pub fn create_keyboard_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                navigation_for_key(&key).map(Message::Viewer)
            }
            _ => None,
        }
    })
}

fn navigation_for_key(key: &Key) -> Option<viewer::Message> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(viewer::Message::Previous),
        Key::Named(Named::ArrowRight) => Some(viewer::Message::Next),
        Key::Named(Named::Home) => Some(viewer::Message::SetIndex(0)),
        // Clamped to the last panel.
        Key::Named(Named::End) => Some(viewer::Message::SetIndex(usize::MAX)),
        _ => None,
    }
}

pub fn create_stall_subscription(is_panning: bool) -> Subscription<Message> {
    if is_panning {
        time::every(Duration::from_millis(STALL_CHECK_INTERVAL_MS)).map(Message::StallCheck)
    } else {
        Subscription::none()
    }
}

pub fn create_frame_subscription(media_playing: bool) -> Subscription<Message> {
    if media_playing {
        time::every(Duration::from_millis(FRAME_INTERVAL_MS)).map(Message::Frame)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_navigate() {
        assert!(matches!(
            navigation_for_key(&Key::Named(Named::ArrowLeft)),
            Some(viewer::Message::Previous)
        ));
        assert!(matches!(
            navigation_for_key(&Key::Named(Named::ArrowRight)),
            Some(viewer::Message::Next)
        ));
    }

    #[test]
    fn home_and_end_jump_to_the_ends() {
        assert!(matches!(
            navigation_for_key(&Key::Named(Named::Home)),
            Some(viewer::Message::SetIndex(0))
        ));
        assert!(matches!(
            navigation_for_key(&Key::Named(Named::End)),
            Some(viewer::Message::SetIndex(usize::MAX))
        ));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(navigation_for_key(&Key::Named(Named::Space)).is_none());
        assert!(navigation_for_key(&Key::Character("a".into())).is_none());
    }
}
