// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn filled(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Whole-page background behind every section.
pub fn page(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        text_color: Some(colors.text_primary),
        ..filled(colors.page_background)
    }
}

/// Sticky header bar.
pub fn header(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        shadow: shadow::MD,
        ..filled(colors.header_background)
    }
}

/// Dropdown panel below the header on narrow windows.
pub fn dropdown(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        border: Border {
            color: colors.chip_background,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..filled(colors.header_background)
    }
}

/// Project card surface.
pub fn card(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..filled(colors.card_background)
    }
}

/// Skill chip.
pub fn chip(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        text_color: Some(colors.text_secondary),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..filled(colors.chip_background)
    }
}

/// Quote card with an accent rule.
pub fn quote(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.accent,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..filled(colors.quote_background)
    }
}

/// Solid colour block standing in for a project screenshot.
pub fn placeholder(background: Color, foreground: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        text_color: Some(foreground),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..filled(background)
    }
}

/// Neutral box shown where an image asset could not be loaded, and behind
/// the banner spinner.
pub fn image_placeholder(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..filled(colors.banner_placeholder)
    }
}

/// Caption strip laid over a hobby tile.
pub fn caption(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        text_color: Some(colors.footer_text),
        ..filled(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..colors.footer_background
        })
    }
}

/// Footer band.
pub fn footer(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        text_color: Some(colors.footer_text),
        ..filled(colors.footer_background)
    }
}
