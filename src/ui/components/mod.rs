// SPDX-License-Identifier: MPL-2.0
//! Reusable pieces shared by the page sections.
//!
//! - [`block`]: padded, width-capped section body
//! - [`heading`]: section title
//! - [`media`]: preloaded images with a neutral placeholder
//! - [`link`]: icon + label links that show their target on hover
//! - [`grid`]: fixed-column rows

pub mod block;
pub mod grid;
pub mod heading;
pub mod link;
pub mod media;
