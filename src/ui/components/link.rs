// SPDX-License-Identifier: MPL-2.0
//! Links rendered as icon + label.
//!
//! Targets are shown in a tooltip on hover; they are not opened.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::widget::{svg::Svg, Row, Text};
use iced::{Color, Element};

/// Brand icon alone, e.g. the hero social links.
pub fn icon<'a, Message: 'a + 'static>(
    icon: Svg<'static>,
    brand: (Color, Color),
    href: &'static str,
    size: f32,
    colors: ColorScheme,
) -> Element<'a, Message> {
    let glyph = icons::sized(icon, size).style(styles::icon::brand(brand));
    styles::tooltip::styled(glyph, href, colors).into()
}

/// Brand icon followed by a label in the same colour family.
pub fn labeled<'a, Message: 'a>(
    icon: Svg<'static>,
    brand: (Color, Color),
    label: String,
    href: &'static str,
    colors: ColorScheme,
) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(icons::sized(icon, sizing::ICON_MD).style(styles::icon::brand(brand)))
        .push(Text::new(label).size(typography::BODY_LG).color(brand.0));

    styles::tooltip::styled(row, href, colors).into()
}

/// Plain accent text link.
pub fn text<'a, Message: 'a>(
    label: String,
    href: &'static str,
    colors: ColorScheme,
) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(Text::new(label).size(typography::BODY).color(colors.accent))
        .push(
            icons::sized(icons::external_link(), sizing::ICON_SM)
                .style(styles::icon::tinted(colors.accent)),
        );

    styles::tooltip::styled(row, href, colors).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::brand;

    #[test]
    fn links_build() {
        let colors = ColorScheme::light();
        let _icon: Element<'_, ()> =
            icon(icons::github(), brand::GITHUB, "https://github.com", 32.0, colors);
        let _labeled: Element<'_, ()> = labeled(
            icons::mail(),
            brand::MAIL,
            "Mail".to_string(),
            "mailto:someone@example.com",
            colors,
        );
        let _text: Element<'_, ()> = text("View Project".to_string(), "#", colors);
    }
}
