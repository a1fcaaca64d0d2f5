// SPDX-License-Identifier: MPL-2.0
//! Window icon.
//! The branding SVG is rasterized at startup into an RGBA buffer for the
//! title bar. Returns `None` when rendering fails and the platform default
//! icon is used instead.

use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/iced_folio.svg");
const ICON_SIZE: u32 = 128;

/// Rasterizes the embedded branding SVG to a square window icon.
pub fn load_window_icon() -> Option<Icon> {
    let pixels = rasterize(ICON_SIZE)?;
    icon::from_rgba(pixels, ICON_SIZE, ICON_SIZE).ok()
}

fn rasterize(size: u32) -> Option<Vec<u8>> {
    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()).ok()?;

    let source = tree.size();
    #[allow(clippy::cast_precision_loss)]
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / source.width(),
        size as f32 / source.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Some(pixmap.take())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branding_svg_rasterizes_to_rgba() {
        let pixels = rasterize(32).expect("embedded svg should render");
        assert_eq!(pixels.len(), 32 * 32 * 4);
        assert!(pixels.chunks(4).any(|px| px[3] > 0));
    }

    #[test]
    fn window_icon_builds() {
        assert!(load_window_icon().is_some());
    }
}
