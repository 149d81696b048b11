//! reqwest-backed [`GenAiClient`].
//!
//! reqwest works on both targets: hyper + rustls natively, `fetch()` in the
//! browser. The underlying `reqwest::Client` is built once and shared, while a
//! new [`HttpGenAiClient`] is handed out per gateway call with the key that is
//! current at that moment.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::wire::{
    GenerateContentRequest, GenerateContentResponse, GenerateVideosRequest, VideoOperation,
};
use super::{ClientFactory, GenAiClient};
use crate::config::{api_key_from_env, GatewayConfig};
use crate::error::GatewayError;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Google API error envelope: `{"error": {"code": 429, "message": "..."}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Client for the Gemini REST API bound to one key.
#[derive(Debug, Clone)]
pub struct HttpGenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpGenAiClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn model_url(&self, model: &str, method: &str) -> String {
        format!("{}/models/{}:{}", self.base_url, model, method)
    }

    async fn post_json<B, R>(&self, url: &str, body: &B) -> Result<R, GatewayError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!("POST {}", url);
        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await?;
        read_json(response).await
    }

    async fn get_json<R: DeserializeOwned>(&self, url: &str) -> Result<R, GatewayError> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        read_json(response).await
    }
}

/// Decodes a 2xx body as `R`; anything else becomes [`GatewayError::Service`].
async fn read_json<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, GatewayError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        warn!("Service returned {}: {}", status, body);
        return Err(GatewayError::Service {
            status: status.as_u16(),
            message: service_message(&body),
        });
    }

    Ok(serde_json::from_str(&body)?)
}

/// The `error.message` of a Google error body, or the raw body.
fn service_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ => body.trim().to_string(),
    }
}

#[async_trait(?Send)]
impl GenAiClient for HttpGenAiClient {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GatewayError> {
        let url = self.model_url(model, "generateContent");
        self.post_json(&url, request).await
    }

    async fn start_video_generation(
        &self,
        model: &str,
        request: &GenerateVideosRequest,
    ) -> Result<VideoOperation, GatewayError> {
        let url = self.model_url(model, "predictLongRunning");
        self.post_json(&url, request).await
    }

    async fn poll_video_operation(
        &self,
        operation: &VideoOperation,
    ) -> Result<VideoOperation, GatewayError> {
        if operation.name.is_empty() {
            return Err(GatewayError::Decode(
                "video operation has no name to poll".to_string(),
            ));
        }
        let url = format!("{}/{}", self.base_url, operation.name);
        self.get_json(&url).await
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }
}

/// Builds an [`HttpGenAiClient`] per call, resolving the key at that moment.
///
/// The environment wins over the configured key so a key exported after
/// startup is picked up without rebuilding the gateway.
#[derive(Debug, Clone)]
pub struct HttpClientFactory {
    http: reqwest::Client,
    config: GatewayConfig,
}

impl HttpClientFactory {
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        config.validate()?;

        let builder = reqwest::Client::builder();
        // The browser owns request timeouts on WASM
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.request_timeout());

        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    fn resolve_key(&self) -> Option<String> {
        api_key_from_env().or_else(|| {
            self.config
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_string)
        })
    }
}

impl ClientFactory for HttpClientFactory {
    fn create(&self) -> Result<Box<dyn GenAiClient>, GatewayError> {
        let key = self.resolve_key().ok_or_else(|| {
            GatewayError::Credential("no API key configured".to_string())
        })?;
        Ok(Box::new(HttpGenAiClient::new(
            self.http.clone(),
            self.config.base_url.clone(),
            key,
        )))
    }
}
