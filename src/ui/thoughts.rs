// SPDX-License-Identifier: MPL-2.0
//! Thoughts: intro paragraph, quote cards and a row of portraits.

use crate::content::{PORTRAITS, QUOTES, THOUGHTS_INTRO};
use crate::i18n::fluent::I18n;
use crate::ui::assets::ImageStore;
use crate::ui::components::{block::block, grid::grid, heading::heading, media};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Horizontal;
use iced::font::Style as FontStyle;
use iced::widget::{Column, Container, Text};
use iced::{Element, Font, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    pub images: &'a ImageStore,
    pub is_desktop: bool,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;

    let quotes = QUOTES
        .iter()
        .map(|quote| {
            let body = Column::new()
                .spacing(spacing::SM)
                .push(
                    Text::new(format!("\u{201c}{}\u{201d}", quote.text))
                        .size(typography::BODY_LG)
                        .font(Font {
                            style: FontStyle::Italic,
                            ..Font::default()
                        }),
                )
                .push(
                    Container::new(
                        Text::new(format!("- {}", quote.author))
                            .size(typography::BODY_SM)
                            .color(colors.text_secondary),
                    )
                    .width(Length::Fill)
                    .align_x(Horizontal::Right),
                );

            Container::new(body)
                .padding(spacing::LG)
                .width(Length::Fill)
                .style(styles::container::quote(colors))
                .into()
        })
        .collect();

    let quote_columns = if ctx.is_desktop { QUOTES.len() } else { 1 };

    let portraits = PORTRAITS
        .iter()
        .map(|portrait| {
            let image = media::cover(
                ctx.images.get(portrait.image),
                sizing::PORTRAIT_HEIGHT,
                colors,
            );
            styles::tooltip::styled(image, portrait.alt, colors).into()
        })
        .collect();

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .push(heading(ctx.i18n.tr("thoughts-title"), colors))
        .push(
            Text::new(THOUGHTS_INTRO)
                .size(typography::BODY_LG)
                .color(colors.text_secondary)
                .align_x(Horizontal::Center),
        )
        .push(grid(quotes, quote_columns, spacing::LG))
        .push(grid(portraits, PORTRAITS.len(), spacing::MD));

    block(content, sizing::CONTENT_MEDIUM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thoughts_view_renders_with_and_without_images() {
        let i18n = I18n::default();
        let empty = ImageStore::default();
        for is_desktop in [true, false] {
            let _element: Element<'_, ()> = view(ViewContext {
                i18n: &i18n,
                colors: ColorScheme::light(),
                images: &empty,
                is_desktop,
            });
        }
    }
}
