// SPDX-License-Identifier: MPL-2.0
//! Light/dark colour schemes for the page.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colours used by the page sections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub page_background: Color,
    pub header_background: Color,
    pub card_background: Color,
    pub quote_background: Color,
    pub chip_background: Color,
    /// Background behind the banner spinner.
    pub banner_placeholder: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub heading: Color,

    pub footer_background: Color,
    pub footer_text: Color,

    pub accent: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            page_background: palette::GRAY_50,
            header_background: palette::WHITE,
            card_background: palette::WHITE,
            quote_background: palette::BLUE_50,
            chip_background: palette::GRAY_200,
            banner_placeholder: palette::GRAY_200,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            heading: palette::GRAY_800,

            footer_background: palette::GRAY_900,
            footer_text: palette::GRAY_400,

            accent: palette::INDIGO_600,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            page_background: palette::GRAY_900,
            header_background: palette::GRAY_800,
            card_background: palette::GRAY_800,
            quote_background: palette::GRAY_700,
            chip_background: palette::GRAY_700,
            banner_placeholder: palette::GRAY_800,

            text_primary: palette::GRAY_50,
            text_secondary: palette::GRAY_300,
            heading: palette::GRAY_200,

            footer_background: palette::BLACK,
            footer_text: palette::GRAY_400,

            accent: palette::INDIGO_600,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// `System` asks the OS and falls back to light when detection fails.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }
}

/// Theme mode resolved once to a concrete scheme.
#[derive(Debug, Clone, Copy)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
    dark: bool,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let dark = mode.is_dark();
        let colors = if dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };

        Self { colors, mode, dark }
    }

    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}
