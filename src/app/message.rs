// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::banner::BannerImage;
use crate::ui::navbar;
use crate::ui::section::Section;
use iced::widget::scrollable::Viewport;
use iced::{window, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    /// The banner acquisition task finished.
    BannerResolved(BannerImage),
    /// A section reported its laid-out size.
    SectionMeasured(Section, Size),
    /// The page scrollable moved or changed size.
    Scrolled(Viewport),
    WindowResized(Size),
    /// Animation frame while something is moving.
    Tick(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional data directory override (diagnostics export).
    /// Takes precedence over `ICED_FOLIO_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
