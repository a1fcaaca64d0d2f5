// SPDX-License-Identifier: MPL-2.0
use crate::ui::design_tokens::typography;
use crate::ui::theming::ColorScheme;
use iced::alignment::Horizontal;
use iced::font::Weight;
use iced::widget::{Container, Text};
use iced::{Element, Font, Length};

/// Bold section title, centred across the content column.
pub fn heading<'a, Message: 'a>(title: String, colors: ColorScheme) -> Element<'a, Message> {
    let text = Text::new(title)
        .size(typography::TITLE_XL)
        .color(colors.heading)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    Container::new(text)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
