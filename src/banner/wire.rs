// SPDX-License-Identifier: MPL-2.0
//! JSON bodies exchanged with the image generation `:predict` endpoint.

use serde::{Deserialize, Serialize};

/// Request body: `{"instances":[{"prompt":..}],"parameters":{"sampleCount":1}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub instances: Vec<Instance>,
    pub parameters: Parameters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    #[serde(rename = "sampleCount")]
    pub sample_count: u32,
}

impl PredictRequest {
    /// A request for a single image from `prompt`.
    #[must_use]
    pub fn single(prompt: impl Into<String>) -> Self {
        Self {
            instances: vec![Instance {
                prompt: prompt.into(),
            }],
            parameters: Parameters { sample_count: 1 },
        }
    }
}

/// Response body. Every field is optional so that structurally incomplete
/// bodies still parse and are judged by [`PredictResponse::first_image`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predictions: Option<Vec<Prediction>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(
        rename = "bytesBase64Encoded",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bytes_base64_encoded: Option<String>,
}

impl PredictResponse {
    /// Base64 payload of the first prediction, if present and non-empty.
    #[must_use]
    pub fn first_image(&self) -> Option<&str> {
        self.predictions
            .as_deref()?
            .first()?
            .bytes_base64_encoded
            .as_deref()
            .filter(|payload| !payload.is_empty())
    }
}
