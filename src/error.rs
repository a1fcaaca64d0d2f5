// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Http(String),
    Serialization(String),
    Asset(AssetError),
}

/// Failures while turning an image locator into displayable bytes.
/// Rendering falls back to the bundled banner when one of these occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// The locator is neither an inline data locator nor a known asset path.
    NotFound(String),

    /// An inline data locator is missing its `;base64,` marker.
    MalformedDataLocator,

    /// The inline payload is not valid base64.
    InvalidPayload(String),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::NotFound(locator) => write!(f, "Asset not found: {}", locator),
            AssetError::MalformedDataLocator => write!(f, "Malformed inline data locator"),
            AssetError::InvalidPayload(msg) => write!(f, "Invalid base64 payload: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Serialization(e) => write!(f, "Serialization Error: {}", e),
            Error::Asset(e) => write!(f, "Asset Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<AssetError> for Error {
    fn from(err: AssetError) -> Self {
        Error::Asset(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn json_error_maps_to_serialization_variant() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn reqwest_error_maps_to_http_variant() {
        let reqwest_err = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        let err: Error = reqwest_err.into();
        match err {
            Error::Http(message) => assert!(!message.is_empty()),
            other => panic!("expected Http variant, got {:?}", other),
        }
    }

    #[test]
    fn asset_error_wraps_into_error() {
        let err: Error = AssetError::MalformedDataLocator.into();
        assert_eq!(
            format!("{}", err),
            "Asset Error: Malformed inline data locator"
        );
    }
}
