// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the page.

## Organization

- **Palette**: neutral greys, accents and brand colours
- **Opacity**: standardized opacity levels
- **Spacing**: spacing scale (8px grid)
- **Sizing**: component sizes
- **Typography**: font size scale
- **Radius**: border radii
- **Shadow**: shadow definitions

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing};

let heading = palette::GRAY_800;
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

/// Builds a colour from a `0xRRGGBB` literal.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn hex(rgb: u32) -> Color {
    Color::from_rgb(
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
    )
}

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::{hex, Color};

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Neutral scale
    pub const GRAY_50: Color = hex(0xf9fafb);
    pub const GRAY_200: Color = hex(0xe5e7eb);
    pub const GRAY_300: Color = hex(0xd1d5db);
    pub const GRAY_400: Color = hex(0x9ca3af);
    pub const GRAY_700: Color = hex(0x374151);
    pub const GRAY_800: Color = hex(0x1f2937);
    pub const GRAY_900: Color = hex(0x111827);

    // Accents
    pub const BLUE_50: Color = hex(0xeff6ff);
    pub const INDIGO_600: Color = hex(0x4f46e5);
}

/// Brand colours for social and contact links, as (rest, hover) pairs.
pub mod brand {
    use super::{hex, Color};

    pub const LINKEDIN: (Color, Color) = (hex(0x0a66c2), hex(0x004182));
    pub const GITHUB: (Color, Color) = (hex(0x1a202c), hex(0x4a5568));
    pub const X_SOCIAL: (Color, Color) = (hex(0x1a202c), hex(0x000000));

    pub const MAIL: (Color, Color) = (hex(0xef4444), hex(0xb91c1c));
    pub const WHATSAPP: (Color, Color) = (hex(0x22c55e), hex(0x15803d));
    pub const PHONE: (Color, Color) = (hex(0x3b82f6), hex(0x1d4ed8));
    pub const INSTAGRAM: (Color, Color) = (hex(0xdb2777), hex(0x9d174d));
    pub const X_CONTACT: (Color, Color) = (hex(0x111827), hex(0x000000));
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const IMAGE: f32 = 0.9;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
    /// Vertical padding of animated sections.
    pub const SECTION: f32 = 64.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icons
    pub const ICON_SM: f32 = 18.0;
    pub const ICON_MD: f32 = 28.0;
    pub const ICON_LG: f32 = 48.0;

    pub const SPINNER: f32 = 64.0;

    /// Approximate header height, used before the first scroll report.
    pub const HEADER_HEIGHT: f32 = 64.0;

    // Hero
    /// Share of the window height taken by the hero banner.
    pub const HERO_VIEWPORT_RATIO: f32 = 0.8;
    pub const HERO_MIN_HEIGHT: f32 = 420.0;
    pub const PROFILE_PHOTO_WIDTH: f32 = 192.0;
    pub const PROFILE_PHOTO_HEIGHT: f32 = 208.0;

    // Media tiles
    pub const PROJECT_IMAGE_HEIGHT: f32 = 160.0;
    pub const PORTRAIT_HEIGHT: f32 = 104.0;
    pub const HOBBY_TILE_HEIGHT: f32 = 192.0;

    // Content column widths
    pub const CONTENT_NARROW: f32 = 768.0;
    pub const CONTENT_MEDIUM: f32 = 896.0;
    pub const CONTENT_WIDE: f32 = 1280.0;

    pub const DROPDOWN_MAX_HEIGHT: f32 = 384.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero name on wide windows.
    pub const DISPLAY_LG: f32 = 72.0;
    /// Hero name on narrow windows.
    pub const DISPLAY_SM: f32 = 48.0;
    /// Section headings and the header brand.
    pub const TITLE_XL: f32 = 36.0;
    pub const TITLE_MD: f32 = 24.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 18.0;
    pub const BODY: f32 = 16.0;
    pub const BODY_SM: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    const TINT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.15,
    };

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const XL: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 12.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::SECTION > spacing::XXL);

    assert!(opacity::TRANSPARENT == 0.0);

    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::HERO_VIEWPORT_RATIO > 0.0 && sizing::HERO_VIEWPORT_RATIO <= 1.0);
    assert!(sizing::CONTENT_WIDE > sizing::CONTENT_MEDIUM);
    assert!(sizing::CONTENT_MEDIUM > sizing::CONTENT_NARROW);

    assert!(typography::DISPLAY_LG > typography::DISPLAY_SM);
    assert!(typography::DISPLAY_SM > typography::TITLE_XL);
    assert!(typography::TITLE_XL > typography::TITLE_MD);
    assert!(typography::BODY > typography::BODY_SM);
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn hex_decodes_channels() {
        let color = hex(0x0a66c2);
        assert_abs_diff_eq!(color.r, 10.0 / 255.0, epsilon = 1e-6);
        assert_abs_diff_eq!(color.g, 102.0 / 255.0, epsilon = 1e-6);
        assert_abs_diff_eq!(color.b, 194.0 / 255.0, epsilon = 1e-6);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn hover_colours_differ_from_rest_colours() {
        for (rest, hover) in [
            brand::LINKEDIN,
            brand::GITHUB,
            brand::X_SOCIAL,
            brand::MAIL,
            brand::WHATSAPP,
            brand::PHONE,
            brand::INSTAGRAM,
            brand::X_CONTACT,
        ] {
            assert_ne!(rest, hover);
        }
    }
}
