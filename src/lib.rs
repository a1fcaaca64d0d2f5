// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a single-page personal portfolio built with the Iced GUI
//! framework.
//!
//! The page shows a hero banner requested once from a remote image
//! generation service (falling back to a bundled image), followed by
//! projects, thoughts, hobbies and contact sections that fade in as they
//! scroll into view. Navigation links scroll smoothly to each section.

pub mod app;
pub mod application;
pub mod banner;
pub mod config;
pub mod content;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
mod test_utils;
