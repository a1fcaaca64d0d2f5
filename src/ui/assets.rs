// SPDX-License-Identifier: MPL-2.0
//! Public image assets and locator resolution.
//!
//! Images ship inside the binary from `assets/public/`. A configured
//! `public_dir` is searched for anything not embedded. Image handles are
//! created once at startup and reused by every frame.

use crate::banner::BannerImage;
use crate::config::AssetsConfig;
use crate::content::{HOBBIES, PORTRAITS, PROFILE};
use crate::error::AssetError;
use base64::Engine;
use iced::widget::image::Handle;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/public/"]
struct PublicAssets;

const BASE64_MARKER: &str = ";base64,";

/// Decodes the payload of a `data:<mime>;base64,<payload>` locator.
pub fn decode_data_locator(locator: &str) -> Result<Vec<u8>, AssetError> {
    let rest = locator
        .strip_prefix("data:")
        .ok_or(AssetError::MalformedDataLocator)?;
    let (_, payload) = rest
        .split_once(BASE64_MARKER)
        .ok_or(AssetError::MalformedDataLocator)?;

    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| AssetError::InvalidPayload(e.to_string()))
}

/// Strips `public_url` and the leading slash from an asset locator.
#[must_use]
pub fn relative_path<'a>(locator: &'a str, public_url: &str) -> &'a str {
    let base = public_url.trim_end_matches('/');
    let stripped = if base.is_empty() {
        locator
    } else {
        locator.strip_prefix(base).unwrap_or(locator)
    };
    stripped.trim_start_matches('/')
}

/// Reads an asset, embedded copy first, then `public_dir`.
pub fn load_bytes(relative: &str, public_dir: Option<&Path>) -> Result<Vec<u8>, AssetError> {
    if let Some(file) = PublicAssets::get(relative) {
        return Ok(file.data.into_owned());
    }

    public_dir
        .map(|dir| dir.join(relative))
        .and_then(|path| fs::read(path).ok())
        .ok_or_else(|| AssetError::NotFound(relative.to_string()))
}

/// Preloaded image handles keyed by relative asset path.
#[derive(Debug, Clone, Default)]
pub struct ImageStore {
    handles: HashMap<String, Handle>,
    public_url: String,
}

impl ImageStore {
    /// Loads every image the page shows plus the fallback banner.
    ///
    /// Assets that cannot be found are skipped and reported in the returned
    /// list so the caller can log them.
    #[must_use]
    pub fn preload(config: &AssetsConfig) -> (Self, Vec<AssetError>) {
        let mut store = Self {
            handles: HashMap::new(),
            public_url: config.public_url.clone(),
        };
        let mut missing = Vec::new();

        let wanted = std::iter::once(crate::config::FALLBACK_BANNER_ASSET)
            .chain(std::iter::once(PROFILE.photo))
            .chain(PORTRAITS.iter().map(|p| p.image))
            .chain(HOBBIES.iter().map(|h| h.image));

        for relative in wanted {
            match load_bytes(relative, config.public_dir.as_deref()) {
                Ok(bytes) => {
                    store
                        .handles
                        .insert(relative.to_string(), Handle::from_bytes(bytes));
                }
                Err(err) => missing.push(err),
            }
        }

        (store, missing)
    }

    /// Handle of a preloaded asset.
    #[must_use]
    pub fn get(&self, relative: &str) -> Option<&Handle> {
        self.handles.get(relative)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Handle for the resolved banner.
    ///
    /// Inline locators are decoded into a fresh handle; asset locators reuse
    /// the preloaded one.
    pub fn banner_handle(&self, image: &BannerImage) -> Result<Handle, AssetError> {
        let locator = image.locator();
        if locator.starts_with("data:") {
            return decode_data_locator(locator).map(Handle::from_bytes);
        }

        let relative = relative_path(locator, &self.public_url);
        self.get(relative)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(locator.to_string()))
    }

    /// Handle of the bundled fallback banner.
    #[must_use]
    pub fn fallback_banner(&self) -> Option<Handle> {
        self.get(crate::config::FALLBACK_BANNER_ASSET).cloned()
    }
}
