// SPDX-License-Identifier: MPL-2.0
//! Placeholder shown when the deck has no panels.

use super::state::Message;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Background, Color, Element, Length, Theme};

pub fn view<'a>() -> Element<'a, Message> {
    let title = Text::new("Nothing to show")
        .size(typography::TITLE_MD)
        .color(palette::GRAY_200);

    let hint = Text::new("Pass a deck file with at least one [[panel]].")
        .size(typography::CAPTION)
        .color(Color {
            a: 0.5,
            ..palette::GRAY_400
        });

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(palette::BLACK)),
            ..Default::default()
        })
        .into()
}
