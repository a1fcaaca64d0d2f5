// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the traits in `application::port`.
//!
//! - [`imagen`]: banner generation over HTTP (implements [`ImageGenerator`])
//!
//! [`ImageGenerator`]: crate::application::port::ImageGenerator

pub mod imagen;

pub use imagen::ImagenClient;
