// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! Infrastructure adapters implement these traits; the rest of the crate only
//! sees the trait, which keeps the HTTP client out of unit tests.
//!
//! - [`image_generation`]: remote banner image generation

pub mod image_generation;

pub use image_generation::{GenerationError, ImageGenerator};
