// SPDX-License-Identifier: MPL-2.0
//! Sticky header with section navigation.
//!
//! Wide windows show the links inline. Below the desktop breakpoint a
//! hamburger button toggles a dropdown holding the same links; choosing one
//! closes the dropdown.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::section::Section;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::font::Weight;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Font, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    pub menu_open: bool,
    /// Window is at least as wide as the desktop breakpoint.
    pub is_desktop: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    Navigate(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    MenuToggled,
    ScrollTo(Section),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::MenuToggled
        }
        Message::Navigate(section) => {
            *menu_open = false;
            Event::ScrollTo(section)
        }
    }
}

/// Render the header and, when open on narrow windows, the dropdown.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));

    if ctx.menu_open && !ctx.is_desktop {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("nav-brand"))
        .size(typography::TITLE_MD)
        .color(ctx.colors.heading)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let mut row = Row::new()
        .spacing(spacing::LG)
        .padding([spacing::MD, spacing::LG])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if ctx.is_desktop {
        for section in Section::ALL {
            row = row.push(
                button(Text::new(ctx.i18n.tr(section.nav_key())).size(typography::BODY))
                    .on_press(Message::Navigate(section))
                    .padding(spacing::XXS)
                    .style(styles::button::nav_link(ctx.colors)),
            );
        }
    } else {
        let (icon, label_key) = if ctx.menu_open {
            (icons::close(), "nav-menu-close")
        } else {
            (icons::menu(), "nav-menu-open")
        };
        let toggle = button(
            icons::sized(icon, sizing::ICON_MD)
                .style(styles::icon::tinted(ctx.colors.text_secondary)),
        )
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS)
        .style(styles::button::menu_toggle(ctx.colors));

        row = row.push(styles::tooltip::styled(
            toggle,
            ctx.i18n.tr(label_key),
            ctx.colors,
        ));
    }

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::header(ctx.colors))
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let items = Section::ALL.into_iter().map(|section| {
        button(Text::new(ctx.i18n.tr(section.nav_key())).size(typography::BODY))
            .on_press(Message::Navigate(section))
            .padding([spacing::XS, spacing::MD])
            .width(Length::Fill)
            .style(styles::button::menu_item(ctx.colors))
            .into()
    });

    let menu_column = Column::with_children(items).spacing(spacing::XXS);

    Container::new(menu_column)
        .width(Length::Fill)
        .max_height(sizing::DROPDOWN_MAX_HEIGHT)
        .padding([spacing::XS, spacing::LG])
        .style(styles::container::dropdown(ctx.colors))
        .into()
}
