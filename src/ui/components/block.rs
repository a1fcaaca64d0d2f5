// SPDX-License-Identifier: MPL-2.0
use crate::ui::design_tokens::spacing;
use iced::alignment::Horizontal;
use iced::widget::Container;
use iced::{Element, Length, Padding};

/// Centres `content` in a column at most `max_width` wide, with the
/// standard vertical section padding.
pub fn block<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    max_width: f32,
) -> Element<'a, Message> {
    let body = Container::new(content).max_width(max_width).width(Length::Fill);

    Container::new(body)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(Padding {
            top: spacing::SECTION,
            bottom: spacing::SECTION,
            left: spacing::LG,
            right: spacing::LG,
        })
        .into()
}
