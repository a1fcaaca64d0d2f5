// SPDX-License-Identifier: MPL-2.0
//! Hero banner acquisition.
//!
//! One prediction request is made per page load. A usable response becomes an
//! inline `data:image/png;base64,` locator; any failure becomes the bundled
//! fallback asset. Failures are reported on the diagnostics channel and never
//! reach the caller.

mod state;
pub mod wire;

pub use state::{BannerImage, BannerSource, BannerState};

use crate::application::port::{GenerationError, ImageGenerator};
use crate::diagnostics::{AppStateEvent, DiagnosticsHandle};
use wire::PredictRequest;

/// Prompt sent to the image generation service.
pub const BANNER_PROMPT: &str = "A high-resolution, professional, minimalist white banner background with a very subtle, elegant geometric texture. The overall feel should be clean and modern.";

/// Prefix of inline banner locators.
pub const DATA_LOCATOR_PREFIX: &str = "data:image/png;base64,";

/// Requests a banner from `generator`, falling back to `fallback_locator`.
///
/// Always returns a usable image reference.
pub async fn acquire<G: ImageGenerator>(
    generator: &G,
    fallback_locator: &str,
    diagnostics: &DiagnosticsHandle,
) -> BannerImage {
    match request_payload(generator).await {
        Ok(payload) => {
            diagnostics.log_state(AppStateEvent::BannerGenerated);
            BannerImage::generated(&payload)
        }
        Err(err) => {
            diagnostics.log_warning(format!(
                "banner generation failed, using {fallback_locator}: {err}"
            ));
            diagnostics.log_state(AppStateEvent::BannerFallback {
                reason: err.kind().to_string(),
            });
            BannerImage::fallback(fallback_locator)
        }
    }
}

async fn request_payload<G: ImageGenerator>(generator: &G) -> Result<String, GenerationError> {
    let response = generator
        .predict(PredictRequest::single(BANNER_PROMPT))
        .await?;

    response
        .first_image()
        .map(str::to_owned)
        .ok_or_else(|| GenerationError::Malformed("no image data in predictions".to_string()))
}
