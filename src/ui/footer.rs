// SPDX-License-Identifier: MPL-2.0
//! Copyright footer.

use crate::content::PROFILE;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use chrono::Datelike;
use fluent_bundle::FluentValue;
use iced::alignment::Horizontal;
use iced::widget::{Container, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    /// Year printed in the notice.
    pub year: i32,
}

/// Current calendar year in local time.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Localized copyright line for `year`.
#[must_use]
pub fn copyright(i18n: &I18n, year: i32) -> String {
    i18n.tr_with_args(
        "footer-copyright",
        &[
            ("year", FluentValue::from(year.to_string())),
            ("name", FluentValue::from(PROFILE.name)),
        ],
    )
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Container::new(Text::new(copyright(ctx.i18n, ctx.year)).size(typography::BODY_SM))
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .style(styles::container::footer(ctx.colors))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_owner_and_year() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &crate::config::Config::default());
        assert_eq!(
            copyright(&i18n, 2031),
            "© 2031 ajumohmd. All rights reserved."
        );
    }

    #[test]
    fn current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }

    #[test]
    fn footer_view_renders() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            colors: ColorScheme::dark(),
            year: 2025,
        });
    }
}
