// SPDX-License-Identifier: MPL-2.0
//! Banner lifecycle state owned by the page.

use super::DATA_LOCATOR_PREFIX;

/// Where a resolved banner image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerSource {
    /// Generated remotely and carried inline.
    Generated,
    /// The bundled fallback asset.
    Fallback,
}

/// A display-ready banner reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerImage {
    locator: String,
    source: BannerSource,
}

impl BannerImage {
    /// Wraps a base64 PNG payload into an inline data locator, unchanged.
    #[must_use]
    pub fn generated(payload: &str) -> Self {
        Self {
            locator: format!("{DATA_LOCATOR_PREFIX}{payload}"),
            source: BannerSource::Generated,
        }
    }

    #[must_use]
    pub fn fallback(locator: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
            source: BannerSource::Fallback,
        }
    }

    #[must_use]
    pub fn locator(&self) -> &str {
        &self.locator
    }

    #[must_use]
    pub fn source(&self) -> BannerSource {
        self.source
    }
}

/// Loading flag and image reference for the hero banner.
///
/// Starts loading with no image. [`begin`](Self::begin) grants the single
/// acquisition of the page's lifetime; [`resolve`](Self::resolve) applies the
/// terminal value once. After [`unmount`](Self::unmount) late results are
/// dropped.
#[derive(Debug, Clone)]
pub struct BannerState {
    loading: bool,
    image: Option<BannerImage>,
    requested: bool,
    mounted: bool,
}

impl Default for BannerState {
    fn default() -> Self {
        Self::new()
    }
}

impl BannerState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            loading: true,
            image: None,
            requested: false,
            mounted: true,
        }
    }

    /// Returns `true` the first time it is called, `false` afterwards.
    pub fn begin(&mut self) -> bool {
        if self.requested {
            return false;
        }
        self.requested = true;
        true
    }

    /// Whether a result arriving now would still be applied.
    #[must_use]
    pub fn accepts(&self) -> bool {
        self.mounted && self.loading
    }

    /// Applies the terminal value. Returns whether it was applied: a second
    /// resolution, or one arriving after unmount, is ignored.
    pub fn resolve(&mut self, image: BannerImage) -> bool {
        if !self.accepts() {
            return false;
        }
        self.image = Some(image);
        self.loading = false;
        true
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The resolved image; `None` while loading.
    #[must_use]
    pub fn image(&self) -> Option<&BannerImage> {
        if self.loading {
            None
        } else {
            self.image.as_ref()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading_without_image() {
        let state = BannerState::new();
        assert!(state.is_loading());
        assert!(state.image().is_none());
    }

    #[test]
    fn begin_grants_a_single_request() {
        let mut state = BannerState::new();
        assert!(state.begin());
        assert!(!state.begin());
        assert!(!state.begin());
    }

    #[test]
    fn resolve_applies_once() {
        let mut state = BannerState::new();
        assert!(state.accepts());
        assert!(state.resolve(BannerImage::generated("AAAA")));
        assert!(!state.is_loading());
        assert!(!state.accepts());

        assert!(!state.resolve(BannerImage::fallback("/images/bann.png")));
        let image = state.image().expect("resolved image");
        assert_eq!(image.locator(), "data:image/png;base64,AAAA");
        assert_eq!(image.source(), BannerSource::Generated);
    }

    #[test]
    fn loading_never_returns_to_true() {
        let mut state = BannerState::new();
        state.resolve(BannerImage::fallback("/images/bann.png"));
        for _ in 0..3 {
            state.resolve(BannerImage::generated("AAAA"));
            assert!(!state.is_loading());
        }
    }

    #[test]
    fn resolution_after_unmount_is_dropped() {
        let mut state = BannerState::new();
        state.begin();
        state.unmount();

        assert!(!state.accepts());
        assert!(!state.resolve(BannerImage::generated("AAAA")));
        assert!(state.is_loading());
        assert!(state.image().is_none());
    }

    #[test]
    fn generated_locator_is_payload_verbatim() {
        let image = BannerImage::generated("iVBORw0KGgo=");
        assert_eq!(image.locator(), "data:image/png;base64,iVBORw0KGgo=");
    }
}
