// SPDX-License-Identifier: MPL-2.0
//! Images drawn from the preloaded store.

use crate::ui::design_tokens::opacity;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::image::{Handle, Image};
use iced::widget::{Container, Space};
use iced::{ContentFit, Element, Length};

/// Image filling the available width at a fixed height, cropped to fit.
/// A neutral box of the same size stands in when `handle` is `None`.
pub fn cover<'a, Message: 'a>(
    handle: Option<&Handle>,
    height: f32,
    colors: ColorScheme,
) -> Element<'a, Message> {
    match handle {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .opacity(opacity::IMAGE)
            .into(),
        None => placeholder(Length::Fill, height, colors),
    }
}

/// Image at a fixed size, scaled to fit inside it.
pub fn fixed<'a, Message: 'a>(
    handle: Option<&Handle>,
    width: f32,
    height: f32,
    colors: ColorScheme,
) -> Element<'a, Message> {
    match handle {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        None => placeholder(Length::Fixed(width), height, colors),
    }
}

fn placeholder<'a, Message: 'a>(
    width: Length,
    height: f32,
    colors: ColorScheme,
) -> Element<'a, Message> {
    Container::new(Space::new())
        .width(width)
        .height(Length::Fixed(height))
        .style(styles::container::image_placeholder(colors))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_image_renders_placeholder() {
        let _cover: Element<'_, ()> = cover(None, 120.0, ColorScheme::light());
        let _fixed: Element<'_, ()> = fixed(None, 80.0, 80.0, ColorScheme::dark());
    }

    #[test]
    fn present_image_renders() {
        let handle = Handle::from_rgba(1, 1, vec![0, 0, 0, 255]);
        let _cover: Element<'_, ()> = cover(Some(&handle), 120.0, ColorScheme::light());
    }
}
