// SPDX-License-Identifier: MPL-2.0
//! "About Me" blurb shown under the hero.

use crate::content::PROFILE;
use crate::i18n::fluent::I18n;
use crate::ui::components::{block::block, heading::heading};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::alignment::Horizontal;
use iced::widget::{Column, Text};
use iced::Element;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(heading(ctx.i18n.tr("about-title"), ctx.colors))
        .push(
            Text::new(PROFILE.about)
                .size(typography::BODY_LG)
                .color(ctx.colors.text_secondary)
                .align_x(Horizontal::Center),
        );

    block(content, sizing::CONTENT_NARROW)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_view_renders() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            colors: ColorScheme::dark(),
        });
    }
}
