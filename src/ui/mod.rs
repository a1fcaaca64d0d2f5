// SPDX-License-Identifier: MPL-2.0
//! User interface for the portfolio page.
//!
//! Section views are stateless functions of a `ViewContext`; the application
//! owns every piece of state and passes it down ("state down, messages up").
//!
//! # Sections
//!
//! - [`navbar`] - Sticky header with links and the narrow-layout menu
//! - [`hero`] - Banner, profile photo and social links
//! - [`about`] - Short biography shown under the hero
//! - [`projects`] - Skill chips and project cards
//! - [`thoughts`] - Quotes and portraits
//! - [`hobbies`] - Captioned image tiles
//! - [`contact`] - Contact channels
//! - [`footer`] - Copyright notice
//!
//! # Shared Infrastructure
//!
//! - [`section`] - Section identifiers and navigation order
//! - [`scroll`] - Section geometry and smooth scrolling
//! - [`reveal`] - Fade and slide-in on first visibility
//! - [`assets`] - Bundled public images and inline data locators
//! - [`components`] - Reusable building blocks (headings, grids, links)
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme resolution
//! - [`icons`] - SVG icon loading

pub mod about;
pub mod assets;
pub mod components;
pub mod contact;
pub mod design_tokens;
pub mod footer;
pub mod hero;
pub mod hobbies;
pub mod icons;
pub mod navbar;
pub mod projects;
pub mod reveal;
pub mod scroll;
pub mod section;
pub mod styles;
pub mod theming;
pub mod thoughts;
pub mod widgets;
