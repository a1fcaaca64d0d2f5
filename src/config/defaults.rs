// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Banner**: Remote image generation endpoint
//! - **Assets**: Public asset locations
//! - **Animation**: Section reveal and smooth scroll timings
//! - **Layout**: Breakpoints and size estimates
//! - **Diagnostics**: Event buffer bounds

// ==========================================================================
// Banner Defaults
// ==========================================================================

/// Base URL of the image generation models collection.
pub const DEFAULT_BANNER_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models";

/// Image generation model queried for the hero banner.
pub const DEFAULT_BANNER_MODEL: &str = "imagen-3.0-generate-002";

/// Environment variable that overrides `banner.api_key`.
pub const ENV_BANNER_API_KEY: &str = "ICED_FOLIO_IMAGEN_API_KEY";

// ==========================================================================
// Asset Defaults
// ==========================================================================

/// Prefix prepended to public asset paths (empty means asset root).
pub const DEFAULT_PUBLIC_URL: &str = "";

/// Fallback banner image, relative to the public asset root.
pub const FALLBACK_BANNER_ASSET: &str = "images/bann.png";

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of a section reveal (fade + slide) in milliseconds.
pub const DEFAULT_REVEAL_DURATION_MS: u64 = 500;

/// Minimum reveal duration in milliseconds.
pub const MIN_REVEAL_DURATION_MS: u64 = 0;

/// Maximum reveal duration in milliseconds.
pub const MAX_REVEAL_DURATION_MS: u64 = 5_000;

/// Initial vertical offset of a section before it is revealed (pixels).
pub const DEFAULT_REVEAL_OFFSET_PX: f32 = 50.0;

/// Maximum reveal offset (pixels).
pub const MAX_REVEAL_OFFSET_PX: f32 = 400.0;

/// Fraction of a section that must be visible to trigger its reveal.
pub const DEFAULT_REVEAL_THRESHOLD: f32 = 0.1;

/// Duration of a smooth scroll to a section in milliseconds.
pub const DEFAULT_SCROLL_DURATION_MS: u64 = 450;

/// Maximum smooth scroll duration in milliseconds.
pub const MAX_SCROLL_DURATION_MS: u64 = 3_000;

/// Interval between animation frames in milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Window width from which navigation links are shown inline.
pub const DESKTOP_BREAKPOINT_PX: f32 = 768.0;

/// Height assumed for a section that has not been measured yet.
pub const ESTIMATED_SECTION_HEIGHT_PX: f32 = 720.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default diagnostics buffer capacity (number of events).
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;
