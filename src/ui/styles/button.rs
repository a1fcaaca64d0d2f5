// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Navigation controls are borderless buttons. Colours come from the resolved
//! [`ColorScheme`] rather than the Iced palette so the page keeps its own
//! look in both modes.

use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Header navigation link: secondary text, accent on hover.
pub fn nav_link(colors: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => colors.accent,
            _ => colors.text_secondary,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Row in the narrow-layout dropdown menu.
pub fn menu_item(colors: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = match status {
            button::Status::Hovered => (
                Some(Background::Color(colors.chip_background)),
                colors.accent,
            ),
            button::Status::Pressed => (
                Some(Background::Color(colors.accent)),
                colors.header_background,
            ),
            _ => (None, colors.text_secondary),
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Hamburger/close toggle in the header.
pub fn menu_toggle(colors: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_SUBTLE,
            button::Status::Pressed => opacity::OVERLAY_MEDIUM,
            _ => opacity::TRANSPARENT,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..colors.chip_background
            })),
            text_color: colors.text_secondary,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
