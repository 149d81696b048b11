//! Error types for folio-core.
//!
//! Every failure the gateway can surface is a [`GatewayError`]. Widgets only
//! ever display these, so the `Display` strings double as user-facing copy.

use thiserror::Error;

/// Errors that can occur while talking to the generative-AI service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Prompt or query was empty after trimming
    #[error("Prompt must not be empty")]
    EmptyPrompt,
    /// Service answered but returned no inline image part
    #[error("No image data found in response")]
    NoImageData,
    /// Video operation completed without a generated video URI
    #[error("Failed to generate video URI")]
    MissingVideoUri,
    /// Video operation did not complete within the configured attempt cap
    #[error("Video generation did not finish after {attempts} status checks")]
    PollTimeout { attempts: u32 },
    /// Credential check or selection flow failed
    #[error("Credential selection failed: {0}")]
    Credential(String),
    /// Request never reached the service (network, TLS, DNS)
    #[error("Request failed: {0}")]
    Transport(String),
    /// Service rejected the request (quota, invalid key, bad request)
    #[error("Service error ({status}): {message}")]
    Service { status: u16, message: String },
    /// Long-running operation finished with a `google.rpc.Status` error
    #[error("Operation failed (code {code}): {message}")]
    Operation { code: i32, message: String },
    /// Response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// String was not a `data:` URI with a payload
    #[error("Invalid data URI")]
    InvalidDataUri,
    /// Selected file could not be read
    #[error("Failed to read file: {0}")]
    FileRead(String),
    /// Invalid gateway configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}

impl From<url::ParseError> for GatewayError {
    fn from(err: url::ParseError) -> Self {
        GatewayError::Config(format!("invalid URL: {}", err))
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Decode(err.to_string())
    }
}

impl From<GatewayError> for String {
    fn from(err: GatewayError) -> String {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_output_messages() {
        assert_eq!(
            GatewayError::NoImageData.to_string(),
            "No image data found in response"
        );
        assert_eq!(
            GatewayError::MissingVideoUri.to_string(),
            "Failed to generate video URI"
        );
    }

    #[test]
    fn test_service_error_display() {
        let err = GatewayError::Service {
            status: 429,
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "Service error (429): quota exceeded");
    }

    #[test]
    fn test_operation_error_display() {
        let err = GatewayError::Operation {
            code: 3,
            message: "Image violates policy".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Operation failed (code 3): Image violates policy"
        );
    }

    #[test]
    fn test_into_string() {
        let msg: String = GatewayError::PollTimeout { attempts: 3 }.into();
        assert_eq!(msg, "Video generation did not finish after 3 status checks");
    }
}
