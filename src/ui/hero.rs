// SPDX-License-Identifier: MPL-2.0
//! Hero banner: background image, profile photo, name, role and social links.
//!
//! While the banner is being acquired the background shows a dashed spinner
//! on a neutral fill.

use crate::content::{SocialBrand, PROFILE};
use crate::i18n::fluent::I18n;
use crate::ui::components::{link, media};
use crate::ui::design_tokens::{brand, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::image::{Handle, Image};
use iced::widget::{Column, Container, Row, Space, Stack, Text};
use iced::{Color, ContentFit, Element, Font, Length};

/// What the banner background currently shows.
#[derive(Debug, Clone, Copy)]
pub enum Banner<'a> {
    /// Acquisition in flight; spinner at the given rotation.
    Loading { rotation: f32 },
    Ready(&'a Handle),
    /// Resolved, but no displayable image could be produced.
    Unavailable,
}

/// Contextual data needed to render the hero.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    pub banner: Banner<'a>,
    pub photo: Option<&'a Handle>,
    pub window_height: f32,
    pub is_desktop: bool,
}

/// Banner height for a window of `window_height` pixels.
#[must_use]
pub fn height_for(window_height: f32) -> f32 {
    (window_height * sizing::HERO_VIEWPORT_RATIO).max(sizing::HERO_MIN_HEIGHT)
}

pub fn view<'a, Message: 'a + 'static>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let height = height_for(ctx.window_height);

    let base = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .style(styles::container::image_placeholder(ctx.colors));

    let background: Element<'a, Message> = match ctx.banner {
        Banner::Loading { rotation } => Container::new(
            AnimatedSpinner::new(ctx.colors.text_secondary, rotation).into_element(),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into(),
        Banner::Ready(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        Banner::Unavailable => Space::new().into(),
    };

    let foreground = Container::new(identity(&ctx))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::LG);

    Stack::new()
        .push(base)
        .push(background)
        .push(foreground)
        .into()
}

fn identity<'a, Message: 'a + 'static>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let photo = media::fixed(
        ctx.photo,
        sizing::PROFILE_PHOTO_WIDTH,
        sizing::PROFILE_PHOTO_HEIGHT,
        ctx.colors,
    );
    let photo = styles::tooltip::styled(photo, ctx.i18n.tr("hero-profile-alt"), ctx.colors);

    let name_size = if ctx.is_desktop {
        typography::DISPLAY_LG
    } else {
        typography::DISPLAY_SM
    };
    let name = Text::new(PROFILE.name)
        .size(name_size)
        .color(ctx.colors.heading)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let role = Text::new(PROFILE.role)
        .size(typography::TITLE_MD)
        .color(ctx.colors.text_secondary);

    let socials = PROFILE.socials.iter().fold(
        Row::new().spacing(spacing::LG).align_y(Vertical::Center),
        |row, social| {
            let (icon, colors) = social_icon(social.brand);
            row.push(link::icon(
                icon,
                colors,
                social.href,
                sizing::ICON_LG,
                ctx.colors,
            ))
        },
    );

    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(photo)
        .push(name)
        .push(role)
        .push(Space::new().height(Length::Fixed(spacing::XS)))
        .push(socials);

    if matches!(ctx.banner, Banner::Loading { .. }) {
        column = column.push(
            Text::new(ctx.i18n.tr("hero-banner-loading"))
                .size(typography::BODY_SM)
                .color(ctx.colors.text_secondary),
        );
    }

    column.into()
}

fn social_icon(social: SocialBrand) -> (iced::widget::svg::Svg<'static>, (Color, Color)) {
    match social {
        SocialBrand::LinkedIn => (icons::linkedin(), brand::LINKEDIN),
        SocialBrand::GitHub => (icons::github(), brand::GITHUB),
        SocialBrand::X => (icons::x_logo(), brand::X_SOCIAL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn ctx<'a>(i18n: &'a I18n, banner: Banner<'a>) -> ViewContext<'a> {
        ViewContext {
            i18n,
            colors: ColorScheme::light(),
            banner,
            photo: None,
            window_height: 900.0,
            is_desktop: true,
        }
    }

    #[test]
    fn hero_height_follows_window_with_floor() {
        assert_abs_diff_eq!(height_for(1000.0), 800.0);
        assert_abs_diff_eq!(height_for(300.0), sizing::HERO_MIN_HEIGHT);
    }

    #[test]
    fn hero_renders_every_banner_state() {
        let i18n = I18n::default();
        let handle = Handle::from_rgba(1, 1, vec![255, 255, 255, 255]);

        let _loading: Element<'_, ()> = view(ctx(&i18n, Banner::Loading { rotation: 0.3 }));
        let _ready: Element<'_, ()> = view(ctx(&i18n, Banner::Ready(&handle)));
        let _missing: Element<'_, ()> = view(ctx(&i18n, Banner::Unavailable));
    }
}
