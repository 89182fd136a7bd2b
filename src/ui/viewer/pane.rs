// SPDX-License-Identifier: MPL-2.0
//! Viewer pane: the panel strip with previous/next chevrons on top and the
//! progress markers underneath.

use crate::story::Panel;
use crate::ui::design_tokens::palette;
use crate::ui::viewer::state::{Marker, Message, Viewer};
use crate::ui::viewer::strip::{Card, Strip};
use iced::widget::{canvas, mouse_area, responsive, svg, Column, Container, Row, Space, Stack};
use iced::{
    alignment::{Horizontal, Vertical},
    mouse, Background, Element, Length, Size, Theme,
};

/// Height of the strip reserved for progress markers.
const PROGRESS_BAR_HEIGHT: f32 = 20.0;
const MARKER_HEIGHT: f32 = 4.0;
const MARKER_GAP: f32 = 10.0;
const CHEVRON_HEIGHT: f32 = 50.0;
const CHEVRON_WIDTH: f32 = 30.0;

const PREVIOUS_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"><path d="M 6 2 L 4 5 L 6 8" stroke="#fff" fill="none"/></svg>"##;
const NEXT_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"><path d="M 4 2 L 6 5 L 4 8" stroke="#fff" fill="none"/></svg>"##;

pub fn view(viewer: &Viewer<Panel>) -> Element<'_, Message> {
    // The live size is read on every layout.
    responsive(move |available: Size| view_inner(viewer, available)).into()
}

fn view_inner(viewer: &Viewer<Panel>, available: Size) -> Element<'_, Message> {
    let settings = viewer.settings();
    let cards = viewer
        .panels()
        .iter()
        .zip(viewer.transforms(available.width))
        .map(|(panel, transform)| Card::new(panel, transform))
        .collect();

    let strip = canvas(Strip {
        cards,
        policy: settings.scale_policy,
    })
    .width(Length::Fill)
    .height(Length::Fill);

    let stage = Stack::new()
        .push(strip)
        .push(chevron(PREVIOUS_SVG, Message::Previous, Horizontal::Left))
        .push(chevron(NEXT_SVG, Message::Next, Horizontal::Right))
        .width(Length::Fill)
        .height(Length::Fill);

    Column::new()
        .push(stage)
        .push(progress_bar(viewer.markers(), available.width))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn chevron<'a>(data: &'static str, on_press: Message, side: Horizontal) -> Element<'a, Message> {
    let icon = svg::Svg::new(svg::Handle::from_memory(data.as_bytes()))
        .width(CHEVRON_WIDTH)
        .height(CHEVRON_HEIGHT);

    let clickable = mouse_area(icon)
        .on_press(on_press)
        .interaction(mouse::Interaction::Pointer);

    Container::new(clickable)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(side)
        .align_y(Vertical::Center)
        .into()
}

fn progress_bar<'a>(markers: impl Iterator<Item = Marker>, width: f32) -> Element<'a, Message> {
    let row = markers.fold(
        Row::new().spacing(MARKER_GAP).width(half_width(width)),
        |row, marker| row.push(marker_view(marker)),
    );

    Container::new(row)
        .width(Length::Fill)
        .height(PROGRESS_BAR_HEIGHT)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(|_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(palette::BLACK)),
            ..Default::default()
        })
        .into()
}

fn marker_view<'a>(marker: Marker) -> Element<'a, Message> {
    let color = marker_color(marker);
    let bar = Container::new(Space::new())
        .width(Length::Fill)
        .height(MARKER_HEIGHT)
        .style(move |_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(color)),
            ..Default::default()
        });

    mouse_area(bar)
        .on_press(Message::SetIndex(marker.index))
        .interaction(mouse::Interaction::Pointer)
        .into()
}

fn marker_color(marker: Marker) -> iced::Color {
    if marker.watched {
        palette::WHITE
    } else {
        palette::GRAY_400
    }
}

fn half_width(width: f32) -> Length {
    if width > 0.0 {
        Length::Fixed(width / 2.0)
    } else {
        Length::Shrink
    }
}
