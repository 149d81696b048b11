//! Production configuration.
//!
//! Constants shared by the gateway and the UI, plus [`GatewayConfig`], the
//! runtime settings for talking to the generative-AI service.
//!
//! # Usage
//!
//! ```
//! use folio_core::config::{GatewayConfig, SCROLL_TOP_THRESHOLD_PX};
//!
//! let config = GatewayConfig::default().with_api_key("test-key");
//! assert!(config.validate().is_ok());
//! assert_eq!(SCROLL_TOP_THRESHOLD_PX, 400.0);
//! ```

use std::time::Duration;

use serde::Deserialize;

use crate::error::GatewayError;

// =============================================================================
// Service endpoints and models
// =============================================================================

/// Base URL of the Gemini REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used by the image studio.
pub const IMAGE_MODEL: &str = "gemini-3-pro-image-preview";

/// Model used by the video studio.
pub const VIDEO_MODEL: &str = "veo-3.1-fast-generate-preview";

/// Model used by the knowledge search.
pub const SEARCH_MODEL: &str = "gemini-3-flash-preview";

/// Only 720p is accepted by the fast video model.
pub const VIDEO_RESOLUTION: &str = "720p";

/// Mime type assumed for uploaded stills when it cannot be inferred.
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

// =============================================================================
// Polling
// =============================================================================

/// Delay between video operation status checks.
pub const VIDEO_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Default cap on status checks (10 minutes at the default interval).
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 120;

// =============================================================================
// UI
// =============================================================================

/// Vertical scroll offset above which the scroll-to-top control is shown.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 400.0;

/// Answer text used when the search model returns no text.
pub const SEARCH_PLACEHOLDER_TEXT: &str = "No response generated.";

/// Answer text shown when the search call fails.
pub const SEARCH_APOLOGY_TEXT: &str =
    "Sorry, I couldn't connect to the knowledge base right now.";

// =============================================================================
// Environment
// =============================================================================

/// Environment variables checked for the API key, in order.
pub const API_KEY_ENV_VARS: [&str; 3] = ["FOLIO_API_KEY", "GEMINI_API_KEY", "API_KEY"];

/// Environment variable overriding [`DEFAULT_API_BASE_URL`].
pub const BASE_URL_ENV_VAR: &str = "FOLIO_API_BASE_URL";

/// Runtime settings for the gateway.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub base_url: String,
    /// Key used when none is found in the environment at call time.
    pub api_key: Option<String>,
    pub image_model: String,
    pub video_model: String,
    pub search_model: String,
    pub poll_interval_ms: u64,
    /// `None` polls until the operation reports completion.
    pub max_poll_attempts: Option<u32>,
    /// Per-request timeout (ignored on WASM, where the browser owns timeouts).
    pub request_timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: None,
            image_model: IMAGE_MODEL.to_string(),
            video_model: VIDEO_MODEL.to_string(),
            search_model: SEARCH_MODEL.to_string(),
            poll_interval_ms: VIDEO_POLL_INTERVAL.as_millis() as u64,
            max_poll_attempts: Some(DEFAULT_MAX_POLL_ATTEMPTS),
            request_timeout_secs: 60,
        }
    }
}

impl GatewayConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(key) = api_key_from_env() {
            config.api_key = Some(key);
        }
        if let Ok(url) = std::env::var(BASE_URL_ENV_VAR) {
            if !url.trim().is_empty() {
                config.base_url = url.trim().trim_end_matches('/').to_string();
            }
        }
        config
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_max_poll_attempts(mut self, attempts: Option<u32>) -> Self {
        self.max_poll_attempts = attempts;
        self
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Rejects settings that would make the gateway spin or never poll.
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.poll_interval_ms == 0 {
            return Err(GatewayError::Config(
                "poll_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.max_poll_attempts == Some(0) {
            return Err(GatewayError::Config(
                "max_poll_attempts must be greater than zero".to_string(),
            ));
        }
        url::Url::parse(&self.base_url)?;
        Ok(())
    }
}

/// First non-empty key among [`API_KEY_ENV_VARS`].
pub fn api_key_from_env() -> Option<String> {
    API_KEY_ENV_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_poll_interval_is_five_seconds() {
        assert_eq!(GatewayConfig::default().poll_interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_default_is_bounded() {
        assert_eq!(
            GatewayConfig::default().max_poll_attempts,
            Some(DEFAULT_MAX_POLL_ATTEMPTS)
        );
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let config = GatewayConfig {
            poll_interval_ms: 0,
            ..GatewayConfig::default()
        };
        assert!(matches!(config.validate(), Err(GatewayError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let config = GatewayConfig::default().with_max_poll_attempts(Some(0));
        assert!(config.validate().is_err());

        let unbounded = GatewayConfig::default().with_max_poll_attempts(None);
        assert!(unbounded.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let config = GatewayConfig {
            base_url: "not a url".to_string(),
            ..GatewayConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: GatewayConfig =
            serde_json::from_str(r#"{"poll_interval_ms": 250, "max_poll_attempts": null}"#)
                .unwrap();
        assert_eq!(config.poll_interval(), Duration::from_millis(250));
        assert_eq!(config.max_poll_attempts, None);
        assert_eq!(config.image_model, IMAGE_MODEL);
    }
}
