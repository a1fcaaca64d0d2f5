// SPDX-License-Identifier: MPL-2.0
//! Hobbies gallery: image tiles with captions.

use crate::content::{Hobby, HOBBIES, HOBBIES_INTRO};
use crate::i18n::fluent::I18n;
use crate::ui::assets::ImageStore;
use crate::ui::components::{block::block, grid::grid, heading::heading, media};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Stack, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    pub images: &'a ImageStore,
    pub is_desktop: bool,
}

/// Tiles per row.
#[must_use]
pub fn columns(is_desktop: bool) -> usize {
    if is_desktop {
        3
    } else {
        2
    }
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let tiles = HOBBIES
        .iter()
        .map(|hobby| tile(hobby, ctx.images, ctx.colors))
        .collect();

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .push(heading(ctx.i18n.tr("hobbies-title"), ctx.colors))
        .push(
            Text::new(HOBBIES_INTRO)
                .size(typography::BODY_LG)
                .color(ctx.colors.text_secondary)
                .align_x(Horizontal::Center),
        )
        .push(grid(tiles, columns(ctx.is_desktop), spacing::LG));

    block(content, sizing::CONTENT_WIDE)
}

fn tile<'a, Message: 'a>(
    hobby: &'static Hobby,
    images: &'a ImageStore,
    colors: ColorScheme,
) -> Element<'a, Message> {
    let image = media::cover(images.get(hobby.image), sizing::HOBBY_TILE_HEIGHT, colors);

    let caption = Container::new(
        Container::new(Text::new(hobby.name).size(typography::TITLE_SM))
            .width(Length::Fill)
            .padding(spacing::SM)
            .align_x(Horizontal::Center)
            .style(styles::container::caption(colors)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(Vertical::Bottom);

    Stack::new().push(image).push(caption).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hobbies_view_renders_both_layouts() {
        let i18n = I18n::default();
        let (images, _) = ImageStore::preload(&crate::config::AssetsConfig::default());
        for is_desktop in [true, false] {
            let _element: Element<'_, ()> = view(ViewContext {
                i18n: &i18n,
                colors: ColorScheme::dark(),
                images: &images,
                is_desktop,
            });
        }
    }

    #[test]
    fn narrow_layout_uses_two_columns() {
        assert_eq!(columns(false), 2);
        assert_eq!(columns(true), 3);
    }
}
