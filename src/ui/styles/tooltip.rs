// SPDX-License-Identifier: MPL-2.0
//! Tooltips for links and icon-only buttons.
//!
//! The tip is drawn in the inverse of the page surface so it stays readable
//! over cards and the banner alike.

use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Shadow, Theme, Vector};

/// Style for the tooltip bubble, inverse of the page surface.
pub fn tooltip_container(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.text_primary)),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: Color {
                a: 0.3,
                ..colors.text_secondary
            },
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: Some(colors.page_background),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip` below it.
///
/// # Example
///
/// ```ignore
/// use crate::ui::styles::tooltip;
///
/// tooltip::styled(github_icon, "https://github.com/ajumohmd", colors)
/// ```
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    colors: ColorScheme,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(tooltip_container(colors));

    tooltip(content, tip_container, tooltip::Position::Bottom).gap(spacing::XS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_inverts_page_colours() {
        let colors = ColorScheme::light();
        let style = tooltip_container(colors)(&Theme::Light);

        assert_eq!(
            style.background,
            Some(Background::Color(colors.text_primary))
        );
        assert_eq!(style.text_color, Some(colors.page_background));
    }

    #[test]
    fn dark_scheme_gets_light_tooltip() {
        let style = tooltip_container(ColorScheme::dark())(&Theme::Dark);
        let Some(Background::Color(bg)) = style.background else {
            panic!("Expected color background")
        };
        assert!(bg.r > 0.5);
    }

    #[test]
    fn tooltip_has_shadow() {
        let style = tooltip_container(ColorScheme::light())(&Theme::Light);
        assert!(style.shadow.blur_radius > 0.0);
    }

    #[test]
    fn styled_tooltip_builds() {
        let _tip: Element<'_, ()> =
            styled(Text::new("GitHub"), "https://github.com", ColorScheme::light()).into();
    }
}
