// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The header sits above a single scrollable holding every section in page
//! order followed by the footer. Each section is wrapped in a sensor so its
//! laid-out height feeds the scroll geometry.

use super::Message;
use crate::banner::BannerState;
use crate::config::DESKTOP_BREAKPOINT_PX;
use crate::i18n::fluent::I18n;
use crate::ui::assets::ImageStore;
use crate::ui::hero::Banner;
use crate::ui::reveal::{self, Reveals};
use crate::ui::section::Section;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::{about, contact, footer, hero, hobbies, navbar, projects, thoughts};
use iced::widget::image::Handle;
use iced::widget::{sensor, Column, Container, Id, Scrollable};
use iced::{Element, Length, Size};
use std::f32::consts::TAU;
use std::time::{Duration, Instant};

/// Identifier of the page scrollable, targeted by smooth scrolling.
pub const PAGE_SCROLLABLE_ID: &str = "page-scrollable";

/// Time for the banner spinner to make one full turn.
const SPINNER_PERIOD: Duration = Duration::from_millis(1200);

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    pub banner: &'a BannerState,
    pub banner_handle: Option<&'a Handle>,
    pub images: &'a ImageStore,
    pub menu_open: bool,
    pub window_size: Size,
    pub reveals: &'a Reveals,
    pub now: Instant,
    /// Time since the page was mounted.
    pub elapsed: Duration,
    pub year: i32,
}

/// Whether a window of `width` pixels uses the wide layout.
#[must_use]
pub fn is_desktop(width: f32) -> bool {
    width >= DESKTOP_BREAKPOINT_PX
}

/// Spinner angle in radians after `elapsed`.
#[must_use]
pub fn spinner_rotation(elapsed: Duration) -> f32 {
    let turns = elapsed.as_secs_f32() / SPINNER_PERIOD.as_secs_f32();
    turns.fract() * TAU
}

/// Renders the whole page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let is_desktop = is_desktop(ctx.window_size.width);

    let header = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        colors: ctx.colors,
        menu_open: ctx.menu_open,
        is_desktop,
    })
    .map(Message::Navbar);

    let page = Section::ALL
        .into_iter()
        .fold(Column::new().width(Length::Fill), |column, section| {
            column.push(measured(section, view_section(&ctx, section, is_desktop)))
        })
        .push(footer::view(footer::ViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
            year: ctx.year,
        }));

    let scrollable = Scrollable::new(page)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(Message::Scrolled);

    Container::new(Column::new().push(header).push(scrollable))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page(ctx.colors))
        .into()
}

fn view_section<'a>(
    ctx: &ViewContext<'a>,
    section: Section,
    is_desktop: bool,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match section {
        Section::Home => Column::new()
            .push(hero::view(hero::ViewContext {
                i18n: ctx.i18n,
                colors: ctx.colors,
                banner: banner(ctx),
                photo: ctx.images.get(crate::content::PROFILE.photo),
                window_height: ctx.window_size.height,
                is_desktop,
            }))
            .push(about::view(about::ViewContext {
                i18n: ctx.i18n,
                colors: ctx.colors,
            }))
            .into(),
        Section::Projects => projects::view(projects::ViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
            is_desktop,
        }),
        Section::Thoughts => thoughts::view(thoughts::ViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
            images: ctx.images,
            is_desktop,
        }),
        Section::Hobbies => hobbies::view(hobbies::ViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
            images: ctx.images,
            is_desktop,
        }),
        Section::Contact => contact::view(contact::ViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
            is_desktop,
        }),
    };

    if section.is_animated() {
        reveal::view(
            content,
            ctx.reveals.style(section, ctx.now),
            ctx.colors.page_background,
        )
    } else {
        content
    }
}

fn banner<'a>(ctx: &ViewContext<'a>) -> Banner<'a> {
    if ctx.banner.is_loading() {
        return Banner::Loading {
            rotation: spinner_rotation(ctx.elapsed),
        };
    }

    match ctx.banner_handle {
        Some(handle) => Banner::Ready(handle),
        None => Banner::Unavailable,
    }
}

/// Reports the laid-out size of `content` whenever it appears or changes.
fn measured<'a>(section: Section, content: Element<'a, Message>) -> Element<'a, Message> {
    sensor(content)
        .on_show(move |size| Message::SectionMeasured(section, size))
        .on_resize(move |size| Message::SectionMeasured(section, size))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(is_desktop(768.0));
        assert!(!is_desktop(767.9));
    }

    #[test]
    fn spinner_wraps_after_one_period() {
        assert_abs_diff_eq!(spinner_rotation(Duration::ZERO), 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(
            spinner_rotation(SPINNER_PERIOD / 2),
            TAU / 2.0,
            epsilon = 1e-4
        );
        assert!(spinner_rotation(SPINNER_PERIOD * 3 + SPINNER_PERIOD / 4) < TAU / 2.0);
    }

    #[test]
    fn page_renders_while_loading_and_after() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &crate::config::Config::default());
        let reveals = Reveals::new(&crate::config::AnimationConfig::default());
        let images = ImageStore::default();
        let mut banner = BannerState::new();

        for width in [500.0, 1200.0] {
            let _element = view(ViewContext {
                i18n: &i18n,
                colors: ColorScheme::light(),
                banner: &banner,
                banner_handle: None,
                images: &images,
                menu_open: true,
                window_size: Size::new(width, 800.0),
                reveals: &reveals,
                now: Instant::now(),
                elapsed: Duration::from_millis(300),
                year: 2025,
            });
        }

        banner.resolve(crate::banner::BannerImage::fallback("/images/bann.png"));
        let _element = view(ViewContext {
            i18n: &i18n,
            colors: ColorScheme::dark(),
            banner: &banner,
            banner_handle: None,
            images: &images,
            menu_open: false,
            window_size: Size::new(1200.0, 800.0),
            reveals: &reveals,
            now: Instant::now(),
            elapsed: Duration::from_secs(2),
            year: 2025,
        });
    }
}
