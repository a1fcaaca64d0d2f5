// SPDX-License-Identifier: MPL-2.0
//! Image generation port.
//!
//! The [`ImageGenerator`] trait sends one prediction request and returns the
//! parsed body. Deciding whether the body is usable is left to the caller.

use crate::banner::wire::{PredictRequest, PredictResponse};
use std::fmt;
use std::future::Future;

/// Ways a prediction request can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The request never got an HTTP response (DNS, refused, TLS, reset).
    Transport(String),

    /// The service answered with a non-success status.
    Service {
        status: u16,
    },

    /// A success response whose body is unusable: not JSON, or no image data.
    Malformed(String),
}

impl GenerationError {
    /// Short, stable name used in diagnostics events.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::Transport(_) => "transport",
            GenerationError::Service { .. } => "service",
            GenerationError::Malformed(_) => "malformed",
        }
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::Transport(msg) => write!(f, "transport failure: {msg}"),
            GenerationError::Service { status } => write!(f, "service returned HTTP {status}"),
            GenerationError::Malformed(msg) => write!(f, "malformed response: {msg}"),
        }
    }
}

impl std::error::Error for GenerationError {}

/// Remote image generation.
///
/// Implementations issue exactly one request per call, without retries.
pub trait ImageGenerator: Send + Sync {
    fn predict(
        &self,
        request: PredictRequest,
    ) -> impl Future<Output = Result<PredictResponse, GenerationError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status() {
        let err = GenerationError::Service { status: 503 };
        assert_eq!(err.to_string(), "service returned HTTP 503");
        assert_eq!(err.kind(), "service");
    }

    #[test]
    fn kinds_are_distinct() {
        let kinds = [
            GenerationError::Transport(String::new()).kind(),
            GenerationError::Service { status: 500 }.kind(),
            GenerationError::Malformed(String::new()).kind(),
        ];
        assert_eq!(kinds, ["transport", "service", "malformed"]);
    }
}
