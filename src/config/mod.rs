// SPDX-License-Identifier: MPL-2.0
//! Application configuration, read from a `settings.toml` file at startup.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[banner]` - Remote image generation endpoint for the hero banner
//! - `[assets]` - Where public images are looked up
//! - `[animation]` - Section reveal and smooth scroll timings
//! - `[diagnostics]` - Event buffer and export behavior
//!
//! The file lives in the config directory resolved by [`crate::app::paths`].
//! The page never writes it back.
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config;
//!
//! // A broken file yields the defaults plus a warning key to report.
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings ignored: {key}");
//! }
//! println!("theme: {:?}", config.general.theme_mode);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Remote banner generation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BannerConfig {
    /// Base URL of the models collection (without the model name).
    #[serde(default = "default_banner_endpoint")]
    pub endpoint: String,

    /// Model name appended to the endpoint.
    #[serde(default = "default_banner_model")]
    pub model: String,

    /// API key sent as the `key` query parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_banner_endpoint(),
            model: default_banner_model(),
            api_key: None,
        }
    }
}

impl BannerConfig {
    /// Full predict URL for the configured model, without the key.
    #[must_use]
    pub fn predict_url(&self) -> String {
        format!(
            "{}/{}:predict",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    /// API key with the environment override applied. Empty when unset.
    #[must_use]
    pub fn resolved_api_key(&self) -> String {
        match std::env::var(ENV_BANNER_API_KEY) {
            Ok(key) if !key.is_empty() => key,
            _ => self.api_key.clone().unwrap_or_default(),
        }
    }
}

/// Public asset settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetsConfig {
    /// Prefix prepended to every public asset locator.
    #[serde(default = "default_public_url")]
    pub public_url: String,

    /// Optional directory searched for assets not embedded in the binary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_dir: Option<PathBuf>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            public_url: default_public_url(),
            public_dir: None,
        }
    }
}

impl AssetsConfig {
    /// Locator of a public asset, e.g. `/images/bann.png`.
    #[must_use]
    pub fn locator(&self, relative: &str) -> String {
        format!(
            "{}/{}",
            self.public_url.trim_end_matches('/'),
            relative.trim_start_matches('/')
        )
    }

    /// Locator of the bundled fallback banner.
    #[must_use]
    pub fn fallback_banner(&self) -> String {
        self.locator(FALLBACK_BANNER_ASSET)
    }
}

/// Section reveal and scrolling animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Reveal duration in milliseconds.
    #[serde(
        default = "default_reveal_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub reveal_duration_ms: Option<u64>,

    /// Initial vertical offset of hidden sections in pixels.
    #[serde(
        default = "default_reveal_offset_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub reveal_offset_px: Option<f32>,

    /// Visible fraction (0.0 - 1.0) that triggers a reveal.
    #[serde(
        default = "default_reveal_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub reveal_threshold: Option<f32>,

    /// Smooth scroll duration in milliseconds.
    #[serde(
        default = "default_scroll_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub scroll_duration_ms: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            reveal_duration_ms: default_reveal_duration_ms(),
            reveal_offset_px: default_reveal_offset_px(),
            reveal_threshold: default_reveal_threshold(),
            scroll_duration_ms: default_scroll_duration_ms(),
        }
    }
}

impl AnimationConfig {
    /// Reveal duration, clamped to the supported range.
    #[must_use]
    pub fn reveal_duration(&self) -> Duration {
        let ms = self
            .reveal_duration_ms
            .unwrap_or(DEFAULT_REVEAL_DURATION_MS)
            .clamp(MIN_REVEAL_DURATION_MS, MAX_REVEAL_DURATION_MS);
        Duration::from_millis(ms)
    }

    /// Reveal offset in pixels, clamped to `0..=MAX_REVEAL_OFFSET_PX`.
    #[must_use]
    pub fn reveal_offset(&self) -> f32 {
        self.reveal_offset_px
            .unwrap_or(DEFAULT_REVEAL_OFFSET_PX)
            .clamp(0.0, MAX_REVEAL_OFFSET_PX)
    }

    /// Reveal threshold, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn reveal_threshold(&self) -> f32 {
        self.reveal_threshold
            .unwrap_or(DEFAULT_REVEAL_THRESHOLD)
            .clamp(0.0, 1.0)
    }

    /// Smooth scroll duration, clamped to the supported range.
    #[must_use]
    pub fn scroll_duration(&self) -> Duration {
        let ms = self
            .scroll_duration_ms
            .unwrap_or(DEFAULT_SCROLL_DURATION_MS)
            .min(MAX_SCROLL_DURATION_MS);
        Duration::from_millis(ms)
    }
}

/// Diagnostics collection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of events kept in memory.
    #[serde(
        default = "default_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,

    /// Write `diagnostics.json` into the data directory when the window closes.
    #[serde(default)]
    pub export_on_exit: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
            export_on_exit: false,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Hero banner generation settings.
    #[serde(default)]
    pub banner: BannerConfig,

    /// Public asset lookup settings.
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Animation timings.
    #[serde(default)]
    pub animation: AnimationConfig,

    /// Diagnostics settings.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Light
}

fn default_banner_endpoint() -> String {
    DEFAULT_BANNER_ENDPOINT.to_string()
}

fn default_banner_model() -> String {
    DEFAULT_BANNER_MODEL.to_string()
}

fn default_public_url() -> String {
    DEFAULT_PUBLIC_URL.to_string()
}

fn default_reveal_duration_ms() -> Option<u64> {
    Some(DEFAULT_REVEAL_DURATION_MS)
}

fn default_reveal_offset_px() -> Option<f32> {
    Some(DEFAULT_REVEAL_OFFSET_PX)
}

fn default_reveal_threshold() -> Option<f32> {
    Some(DEFAULT_REVEAL_THRESHOLD)
}

fn default_scroll_duration_ms() -> Option<u64> {
    Some(DEFAULT_SCROLL_DURATION_MS)
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the settings file inside `base_dir`, or inside the resolved
/// config directory when no base is given.
fn config_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    base_dir
        .or_else(paths::config_dir)
        .map(|dir| dir.join(CONFIG_FILE))
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_file_path(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
