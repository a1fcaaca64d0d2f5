// SPDX-License-Identifier: MPL-2.0
//! Projects gallery: skill chips followed by project cards.

use crate::content::{Project, PROJECTS, SKILLS};
use crate::i18n::fluent::I18n;
use crate::ui::components::{block::block, grid::grid, heading::heading, link};
use crate::ui::design_tokens::{hex, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Font, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    pub is_desktop: bool,
}

/// Cards per row.
#[must_use]
pub fn columns(is_desktop: bool) -> usize {
    if is_desktop {
        3
    } else {
        1
    }
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let chips = SKILLS
        .iter()
        .fold(Row::new().spacing(spacing::SM), |row, skill| {
            row.push(
                Container::new(Text::new(*skill).size(typography::BODY_SM))
                    .padding([spacing::XXS, spacing::MD])
                    .style(styles::container::chip(ctx.colors)),
            )
        })
        .wrap()
        .vertical_spacing(spacing::SM);

    let view_label = ctx.i18n.tr("projects-view");
    let cards = PROJECTS
        .iter()
        .map(|project| card(project, view_label.clone(), ctx.colors))
        .collect();

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .push(heading(ctx.i18n.tr("projects-title"), ctx.colors))
        .push(chips)
        .push(grid(cards, columns(ctx.is_desktop), spacing::XL));

    block(content, sizing::CONTENT_WIDE)
}

fn card<'a, Message: 'a>(
    project: &'static Project,
    view_label: String,
    colors: ColorScheme,
) -> Element<'a, Message> {
    let placeholder = Container::new(
        Text::new(project.title)
            .size(typography::TITLE_MD)
            .font(Font {
                weight: Weight::Bold,
                ..Font::default()
            }),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::PROJECT_IMAGE_HEIGHT))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::placeholder(
        hex(project.placeholder.background),
        hex(project.placeholder.foreground),
    ));

    let body = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::LG)
        .push(
            Text::new(project.title)
                .size(typography::TITLE_SM)
                .color(colors.heading),
        )
        .push(
            Text::new(project.description)
                .size(typography::BODY)
                .color(colors.text_secondary),
        )
        .push(link::text(view_label, project.link, colors));

    Container::new(Column::new().push(placeholder).push(body))
        .width(Length::Fill)
        .style(styles::container::card(colors))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_view_renders_both_layouts() {
        let i18n = I18n::default();
        for is_desktop in [true, false] {
            let _element: Element<'_, ()> = view(ViewContext {
                i18n: &i18n,
                colors: ColorScheme::light(),
                is_desktop,
            });
        }
    }

    #[test]
    fn narrow_layout_stacks_cards() {
        assert_eq!(columns(false), 1);
        assert_eq!(columns(true), 3);
    }
}
