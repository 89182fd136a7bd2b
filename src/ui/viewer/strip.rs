// SPDX-License-Identifier: MPL-2.0
//! Canvas strip that draws the panels at their drag transforms and turns
//! left-button drags into [`PanSample`]s.
//!
//! Uses f32 for canvas coordinates; durations are shown with one decimal.
#![allow(clippy::cast_precision_loss)]

use crate::story::{MediaSurface, Panel};
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::viewer::pan::PanSample;
use crate::ui::viewer::state::Message;
use crate::ui::viewer::transform::{PanelTransform, ScalePolicy};
use iced::widget::canvas::{self, Frame, Geometry, Path, Text};
use iced::widget::Action;
use iced::{mouse, Color, Event, Point, Rectangle, Renderer, Size, Theme};
use std::time::Duration;

/// Playback status of a panel's media, sampled when the view is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaStatus {
    pub position: Duration,
    pub duration: Duration,
    pub playing: bool,
}

impl MediaStatus {
    #[must_use]
    pub fn of(media: &dyn MediaSurface) -> Self {
        Self {
            position: media.position(),
            duration: media.duration(),
            playing: media.is_playing(),
        }
    }

    /// Fraction played, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        (self.position.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn label(&self) -> String {
        let state = if self.playing { "Playing" } else { "Paused" };
        format!(
            "{} {:.1}s / {:.1}s",
            state,
            self.position.as_secs_f32(),
            self.duration.as_secs_f32()
        )
    }
}

/// Everything needed to draw one panel.
#[derive(Debug, Clone)]
pub struct Card<'a> {
    pub title: &'a str,
    pub body: Option<&'a str>,
    pub background: Color,
    pub media: Option<MediaStatus>,
    pub transform: PanelTransform,
}

impl<'a> Card<'a> {
    #[must_use]
    pub fn new(panel: &'a Panel, transform: PanelTransform) -> Self {
        Self {
            title: &panel.title,
            body: panel.body.as_deref(),
            background: panel.background,
            media: panel.media().map(MediaStatus::of),
            transform,
        }
    }
}

/// Screen rectangle of a card: shifted by `offset_x` and scaled about the
/// center of the viewport.
#[must_use]
pub fn card_bounds(transform: PanelTransform, scale: f32, viewport: Size) -> Rectangle {
    let width = viewport.width * scale;
    let height = viewport.height * scale;
    Rectangle {
        x: transform.offset_x + (viewport.width - width) / 2.0,
        y: (viewport.height - height) / 2.0,
        width,
        height,
    }
}

/// Pointer bookkeeping for an in-flight drag.
#[derive(Debug, Default)]
pub struct DragTracker {
    /// Where the left button went down, in window coordinates.
    origin: Option<Point>,
    /// Last reported delta.
    delta_x: f32,
}

impl DragTracker {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    fn press(&mut self, at: Point) {
        self.origin = Some(at);
        self.delta_x = 0.0;
    }

    fn motion(&mut self, at: Point) -> Option<PanSample> {
        let origin = self.origin?;
        self.delta_x = at.x - origin.x;
        Some(PanSample::moving(self.delta_x))
    }

    fn release(&mut self, at: Option<Point>) -> Option<PanSample> {
        let origin = self.origin.take()?;
        if let Some(at) = at {
            self.delta_x = at.x - origin.x;
        }
        Some(PanSample::released(std::mem::take(&mut self.delta_x)))
    }

    /// Feeds one pointer event through the tracker.
    ///
    /// Leaving the window ends the drag like a release, so a button let go
    /// outside the window cannot leave panels following plain hover.
    pub fn on_event(
        &mut self,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Gesture> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                self.press(cursor.position_over(bounds)?);
                Some(Gesture::Started)
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.motion(*position).map(Gesture::Sample)
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                self.release(cursor.position()).map(Gesture::Sample)
            }
            Event::Mouse(mouse::Event::CursorLeft) => self.release(None).map(Gesture::Sample),
            _ => None,
        }
    }
}

/// What a pointer event meant for the drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// The left button went down over the strip.
    Started,
    Sample(PanSample),
}

pub struct Strip<'a> {
    pub cards: Vec<Card<'a>>,
    pub policy: ScalePolicy,
}

impl canvas::Program<Message> for Strip<'_> {
    type State = DragTracker;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match state.on_event(event, bounds, cursor)? {
            Gesture::Started => Some(Action::capture()),
            Gesture::Sample(sample) => Some(Action::publish(Message::Pan(sample)).and_capture()),
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let viewport = bounds.size();

        frame.fill_rectangle(Point::ORIGIN, viewport, palette::BLACK);

        for card in &self.cards {
            let scale = card.transform.visual_scale(self.policy);
            let rect = card_bounds(card.transform, scale, viewport);
            // Off-screen panels are skipped.
            if rect.x + rect.width < 0.0 || rect.x > viewport.width {
                continue;
            }
            draw_card(&mut frame, card, rect, scale);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.is_dragging() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

fn draw_card(frame: &mut Frame, card: &Card<'_>, rect: Rectangle, scale: f32) {
    let background = Path::rounded_rectangle(rect.position(), rect.size(), radius::MD.into());
    frame.fill(&background, card.background);

    let pad = spacing::LG * scale;
    let text_x = rect.x + pad;
    let mut cursor_y = rect.y + rect.height * 0.3;

    frame.fill_text(Text {
        content: card.title.to_string(),
        position: Point::new(text_x, cursor_y),
        color: palette::WHITE,
        size: (typography::TITLE_LG * scale).into(),
        ..Text::default()
    });
    cursor_y += (typography::TITLE_LG + spacing::MD) * scale;

    if let Some(body) = card.body {
        frame.fill_text(Text {
            content: body.to_string(),
            position: Point::new(text_x, cursor_y),
            color: Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::WHITE
            },
            size: (typography::BODY_LG * scale).into(),
            ..Text::default()
        });
    }

    if let Some(status) = card.media {
        let track_width = (rect.width - 2.0 * pad).max(0.0);
        let track_height = sizing::TIMELINE_TRACK * scale;
        let track_origin = Point::new(text_x, rect.y + pad);

        frame.fill_rectangle(
            track_origin,
            Size::new(track_width, track_height),
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
        );
        frame.fill_rectangle(
            track_origin,
            Size::new(track_width * status.progress(), track_height),
            palette::WHITE,
        );
        frame.fill_text(Text {
            content: status.label(),
            position: Point::new(text_x, track_origin.y + track_height + spacing::XS * scale),
            color: palette::GRAY_200,
            size: (typography::CAPTION * scale).into(),
            ..Text::default()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_scale_card_fills_viewport() {
        let viewport = Size::new(300.0, 800.0);
        let transform = PanelTransform {
            offset_x: 0.0,
            scale: 1.0,
        };
        let rect = card_bounds(transform, 1.0, viewport);
        assert_eq!(rect, Rectangle::new(Point::ORIGIN, viewport));
    }

    #[test]
    fn scaled_card_stays_centered_on_its_slot() {
        let viewport = Size::new(300.0, 800.0);
        let transform = PanelTransform {
            offset_x: 300.0,
            scale: 0.8,
        };
        let rect = card_bounds(transform, 0.8, viewport);
        assert!((rect.width - 240.0).abs() < 1e-4);
        assert!((rect.height - 640.0).abs() < 1e-4);
        assert!((rect.x - 330.0).abs() < 1e-4);
        assert!((rect.y - 80.0).abs() < 1e-4);
    }

    #[test]
    fn drag_tracker_reports_deltas_from_press_point() {
        let mut tracker = DragTracker::default();
        assert_eq!(tracker.motion(Point::new(50.0, 0.0)), None);

        tracker.press(Point::new(100.0, 10.0));
        assert!(tracker.is_dragging());
        assert_eq!(
            tracker.motion(Point::new(70.0, 30.0)),
            Some(PanSample::moving(-30.0))
        );
        assert_eq!(
            tracker.release(Some(Point::new(40.0, 30.0))),
            Some(PanSample::released(-60.0))
        );
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.release(None), None);
    }

    #[test]
    fn release_without_cursor_keeps_last_delta() {
        let mut tracker = DragTracker::default();
        tracker.press(Point::new(0.0, 0.0));
        let _ = tracker.motion(Point::new(25.0, 0.0));
        assert_eq!(tracker.release(None), Some(PanSample::released(25.0)));
    }

    #[test]
    fn cursor_leaving_window_ends_the_drag() {
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(300.0, 800.0));
        let at = |x: f32| mouse::Cursor::Available(Point::new(x, 100.0));
        let mut tracker = DragTracker::default();

        assert_eq!(
            tracker.on_event(
                &Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
                bounds,
                at(100.0),
            ),
            Some(Gesture::Started)
        );
        assert_eq!(
            tracker.on_event(
                &Event::Mouse(mouse::Event::CursorMoved {
                    position: Point::new(60.0, 100.0)
                }),
                bounds,
                at(60.0),
            ),
            Some(Gesture::Sample(PanSample::moving(-40.0)))
        );
        assert_eq!(
            tracker.on_event(
                &Event::Mouse(mouse::Event::CursorLeft),
                bounds,
                mouse::Cursor::Unavailable,
            ),
            Some(Gesture::Sample(PanSample::released(-40.0)))
        );
        assert!(!tracker.is_dragging());

        // Hover after the window was left no longer drags.
        assert_eq!(
            tracker.on_event(
                &Event::Mouse(mouse::Event::CursorMoved {
                    position: Point::new(20.0, 100.0)
                }),
                bounds,
                at(20.0),
            ),
            None
        );
    }

    #[test]
    fn press_outside_the_strip_is_ignored() {
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(300.0, 800.0));
        let mut tracker = DragTracker::default();
        let outside = mouse::Cursor::Available(Point::new(500.0, 100.0));

        assert_eq!(
            tracker.on_event(
                &Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
                bounds,
                outside,
            ),
            None
        );
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn media_status_progress_and_label() {
        let status = MediaStatus {
            position: Duration::from_millis(1500),
            duration: Duration::from_secs(6),
            playing: true,
        };
        assert!((status.progress() - 0.25).abs() < 1e-6);
        assert_eq!(status.label(), "Playing 1.5s / 6.0s");

        let empty = MediaStatus {
            position: Duration::ZERO,
            duration: Duration::ZERO,
            playing: false,
        };
        assert_eq!(empty.progress(), 0.0);
    }
}
