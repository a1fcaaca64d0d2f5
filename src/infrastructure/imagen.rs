// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the Imagen `:predict` endpoint.

use crate::application::port::{GenerationError, ImageGenerator};
use crate::banner::wire::{PredictRequest, PredictResponse};
use crate::config::BannerConfig;
use crate::error::Result;

/// [`ImageGenerator`] backed by `reqwest`.
///
/// Sends `POST {endpoint}/{model}:predict?key={api_key}` with a JSON body.
/// The client keeps reqwest's default timeouts and never retries.
#[derive(Debug, Clone)]
pub struct ImagenClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl ImagenClient {
    /// Builds a client from the `[banner]` config section, applying the API
    /// key environment override.
    pub fn new(config: &BannerConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("IcedFolio/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: config.predict_url(),
            api_key: config.resolved_api_key(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ImageGenerator for ImagenClient {
    async fn predict(
        &self,
        request: PredictRequest,
    ) -> std::result::Result<PredictResponse, GenerationError> {
        let response = self
            .client
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::Service {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| GenerationError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_built_from_config() {
        let config = BannerConfig {
            endpoint: "http://127.0.0.1:1/models".to_string(),
            model: "imagen-test".to_string(),
            api_key: None,
        };
        let client = ImagenClient::new(&config).expect("client should build");
        assert_eq!(client.url(), "http://127.0.0.1:1/models/imagen-test:predict");
    }
}
