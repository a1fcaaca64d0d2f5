// SPDX-License-Identifier: MPL-2.0
//! SVG icon colours.

use iced::widget::svg;
use iced::{Color, Theme};

/// Single colour regardless of hover.
pub fn tinted(color: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) }
}

/// Brand colour that darkens on hover, from a `(rest, hover)` pair.
pub fn brand((rest, hover): (Color, Color)) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, status: svg::Status| {
        let color = match status {
            svg::Status::Hovered => hover,
            svg::Status::Idle => rest,
        };
        svg::Style { color: Some(color) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::brand::LINKEDIN;

    #[test]
    fn brand_icon_switches_on_hover() {
        let style_fn = brand(LINKEDIN);
        assert_eq!(
            style_fn(&Theme::Light, svg::Status::Idle).color,
            Some(LINKEDIN.0)
        );
        assert_eq!(
            style_fn(&Theme::Light, svg::Status::Hovered).color,
            Some(LINKEDIN.1)
        );
    }

    #[test]
    fn tinted_ignores_status() {
        let style_fn = tinted(Color::WHITE);
        assert_eq!(
            style_fn(&Theme::Dark, svg::Status::Hovered).color,
            Some(Color::WHITE)
        );
    }
}
