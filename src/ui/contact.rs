// SPDX-License-Identifier: MPL-2.0
//! "Get in Touch" panel with brand-coloured contact links.

use crate::content::{ContactKind, CONTACTS};
use crate::i18n::fluent::I18n;
use crate::ui::components::{block::block, heading::heading, link};
use crate::ui::design_tokens::{brand, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::theming::ColorScheme;
use iced::alignment::Horizontal;
use iced::widget::{svg::Svg, Column, Row, Text};
use iced::{Color, Element};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    pub is_desktop: bool,
}

/// Icon and `(rest, hover)` colours for a contact channel.
fn appearance(kind: ContactKind) -> (Svg<'static>, (Color, Color)) {
    match kind {
        ContactKind::Mail => (icons::mail(), brand::MAIL),
        ContactKind::Whatsapp => (icons::message_circle(), brand::WHATSAPP),
        ContactKind::Phone => (icons::phone(), brand::PHONE),
        ContactKind::Instagram => (icons::instagram(), brand::INSTAGRAM),
        ContactKind::X => (icons::x_logo(), brand::X_CONTACT),
    }
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let entries = CONTACTS.iter().map(|contact| {
        let (icon, colors) = appearance(contact.kind);
        link::labeled(icon, colors, contact.kind.label(), contact.href, ctx.colors)
    });

    let links: Element<'a, Message> = if ctx.is_desktop {
        Row::with_children(entries)
            .spacing(spacing::XL)
            .wrap()
            .vertical_spacing(spacing::MD)
            .into()
    } else {
        Column::with_children(entries)
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .into()
    };

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .push(heading(ctx.i18n.tr("contact-title"), ctx.colors))
        .push(
            Text::new(ctx.i18n.tr("contact-prompt"))
                .size(typography::BODY_LG)
                .color(ctx.colors.text_secondary)
                .align_x(Horizontal::Center),
        )
        .push(links);

    block(content, sizing::CONTENT_NARROW)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_channel_has_distinct_brand_colour() {
        let kinds = [
            ContactKind::Mail,
            ContactKind::Whatsapp,
            ContactKind::Phone,
            ContactKind::Instagram,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(appearance(*a).1, appearance(*b).1);
            }
        }
    }

    #[test]
    fn contact_view_renders_both_layouts() {
        let i18n = I18n::default();
        for is_desktop in [true, false] {
            let _element: Element<'_, ()> = view(ViewContext {
                i18n: &i18n,
                colors: ColorScheme::light(),
                is_desktop,
            });
        }
    }
}
