// SPDX-License-Identifier: MPL-2.0
//! Application layer.
//!
//! - [`port`]: traits implemented by `infrastructure` adapters
//!
//! # Example
//!
//! ```ignore
//! use iced_folio::application::port::ImageGenerator;
//! use iced_folio::infrastructure::ImagenClient;
//!
//! let client = ImagenClient::new(&config.banner)?;
//! let response = client.predict(request).await;
//! ```

pub mod port;
