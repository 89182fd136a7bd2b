// SPDX-License-Identifier: MPL-2.0
//! `iced_stories` is a swipeable story viewer built with the Iced GUI framework.
//!
//! Panels are laid out side by side; dragging moves and scales them, and
//! releasing the drag settles on the previous or next panel. Panels with a
//! media clip restart it every time they become current.

#![doc(html_root_url = "https://docs.rs/iced_stories/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod story;
pub mod ui;
