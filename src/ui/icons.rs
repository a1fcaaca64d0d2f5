// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are single-colour SVGs drawn with `currentColor`, embedded at
//! compile time via `include_bytes!`. Their colour comes from the `svg`
//! widget style, which lets brand links change colour on hover. Handles are
//! cached using `OnceLock` so every frame reuses the same handle.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `message_circle` not `whatsapp`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Navigation Icons
// =============================================================================

define_icon!(menu, "menu.svg", "Menu icon: three horizontal bars.");
define_icon!(close, "close.svg", "Close icon: X mark shape.");

// =============================================================================
// Brand Icons
// =============================================================================

define_icon!(linkedin, "linkedin.svg", "LinkedIn logo.");
define_icon!(github, "github.svg", "GitHub logo.");
define_icon!(x_logo, "x.svg", "X (formerly Twitter) logo.");
define_icon!(instagram, "instagram.svg", "Instagram logo: rounded square with lens.");

// =============================================================================
// Contact Icons
// =============================================================================

define_icon!(mail, "mail.svg", "Mail icon: envelope.");
define_icon!(
    message_circle,
    "message_circle.svg",
    "Speech bubble icon: round bubble with a tail."
);
define_icon!(phone, "phone.svg", "Phone icon: handset.");
define_icon!(
    external_link,
    "external_link.svg",
    "External link icon: box with an arrow leaving it."
);

// =============================================================================
// Helper Functions
// =============================================================================

/// Creates an icon with specified dimensions.
///
/// This is a convenience wrapper for setting both width and height.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
