//! Remote-call gateway for the generative-AI demos.
//!
//! The gateway is the only code that talks to the outside world. Each
//! operation builds a request, asks the [`ClientFactory`] for a fresh
//! [`GenAiClient`] (so a credential picked a moment ago is honoured), invokes
//! it and normalizes the response into a local result shape.
//!
//! Host capabilities are injected rather than reached for globally:
//!
//! - [`CredentialProvider`]: "is a billing key selected?" / "ask the user to pick one"
//! - [`ClientFactory`]: builds the API client per call
//! - [`Pacer`]: the timed pause between video status checks
//!
//! # Examples
//!
//! ```ignore
//! let gateway = Gateway::new(
//!     config,
//!     Arc::new(HttpClientFactory::new(config.clone())),
//!     Arc::new(ConfiguredCredentials),
//!     Arc::new(PlatformPacer),
//! );
//!
//! let image = gateway.generate_image("a crystal city", ImageSize::TwoK).await?;
//! let answer = gateway.search_or_apologize("what's new in Rust?").await;
//! ```

mod http;
pub mod wire;


pub use http::{HttpClientFactory, HttpGenAiClient};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::config::{GatewayConfig, SEARCH_PLACEHOLDER_TEXT, VIDEO_RESOLUTION};
use crate::encoding::data_uri_from_base64;
use crate::error::GatewayError;
use crate::types::{AspectRatio, ImageSize, SearchResult, Source, SourceImage};
use wire::{
    GenerateContentRequest, GenerateContentResponse, GenerateVideosRequest, GenerationConfig,
    ImageConfig, Tool, VideoImage, VideoInstance, VideoOperation, VideoParameters,
};

/// Host capability for billing-key selection.
///
/// On hosts with a key picker (AI Studio) this reports whether a paid key is
/// active and opens the picker; elsewhere [`ConfiguredCredentials`] is used.
#[async_trait(?Send)]
pub trait CredentialProvider: Send + Sync {
    /// Whether a billing-enabled key has already been selected.
    async fn has_selected_key(&self) -> Result<bool, GatewayError>;

    /// Prompts the user to select a key.
    async fn open_select_key(&self) -> Result<(), GatewayError>;
}

/// Credential provider for hosts where the key comes from configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfiguredCredentials;

#[async_trait(?Send)]
impl CredentialProvider for ConfiguredCredentials {
    async fn has_selected_key(&self) -> Result<bool, GatewayError> {
        Ok(true)
    }

    async fn open_select_key(&self) -> Result<(), GatewayError> {
        Ok(())
    }
}

/// The service's call convention, one method per remote call.
#[async_trait(?Send)]
pub trait GenAiClient {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GatewayError>;

    /// Starts a video job and returns its operation handle.
    async fn start_video_generation(
        &self,
        model: &str,
        request: &GenerateVideosRequest,
    ) -> Result<VideoOperation, GatewayError>;

    /// Re-queries an operation handle.
    async fn poll_video_operation(
        &self,
        operation: &VideoOperation,
    ) -> Result<VideoOperation, GatewayError>;

    /// Key this client authenticates with; appended to media download URIs.
    fn api_key(&self) -> &str;
}

/// Builds a [`GenAiClient`]; invoked once per gateway call.
pub trait ClientFactory: Send + Sync {
    fn create(&self) -> Result<Box<dyn GenAiClient>, GatewayError>;
}

/// Timed suspension used between video status checks.
#[async_trait(?Send)]
pub trait Pacer: Send + Sync {
    async fn pause(&self, duration: Duration);
}

/// Entry point for the three demo capabilities.
#[derive(Clone)]
pub struct Gateway {
    config: GatewayConfig,
    clients: Arc<dyn ClientFactory>,
    credentials: Arc<dyn CredentialProvider>,
    pacer: Arc<dyn Pacer>,
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.config.base_url)
            .field("max_poll_attempts", &self.config.max_poll_attempts)
            .finish_non_exhaustive()
    }
}

impl Gateway {
    pub fn new(
        config: GatewayConfig,
        clients: Arc<dyn ClientFactory>,
        credentials: Arc<dyn CredentialProvider>,
        pacer: Arc<dyn Pacer>,
    ) -> Self {
        Self {
            config,
            clients,
            credentials,
            pacer,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Opens the key picker when no billing key is active.
    ///
    /// The call proceeds after the picker closes; a key that still isn't
    /// usable surfaces as a service error from the request itself.
    async fn ensure_credential(&self) -> Result<(), GatewayError> {
        if !self.credentials.has_selected_key().await? {
            info!("No billing key selected, opening key picker");
            self.credentials.open_select_key().await?;
        }
        Ok(())
    }

    /// Generates one image and returns it as a `data:` URI.
    pub async fn generate_image(
        &self,
        prompt: &str,
        size: ImageSize,
    ) -> Result<String, GatewayError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(GatewayError::EmptyPrompt);
        }

        self.ensure_credential().await?;
        let client = self.clients.create()?;

        let request = GenerateContentRequest {
            generation_config: Some(GenerationConfig {
                response_modalities: Vec::new(),
                image_config: Some(ImageConfig {
                    image_size: size.as_str().to_string(),
                }),
            }),
            ..GenerateContentRequest::from_text(prompt)
        };

        info!("🎨 Generating {} image", size.as_str());
        let response = client
            .generate_content(&self.config.image_model, &request)
            .await?;

        extract_image(&response)
    }

    /// Animates `image` into a short video and returns a playable URI.
    ///
    /// Polls the operation every `poll_interval` until it reports completion,
    /// giving up after `max_poll_attempts` status checks.
    pub async fn generate_video(
        &self,
        prompt: &str,
        image: &SourceImage,
        aspect_ratio: AspectRatio,
    ) -> Result<String, GatewayError> {
        self.ensure_credential().await?;
        let client = self.clients.create()?;

        let prompt = prompt.trim();
        let request = GenerateVideosRequest {
            instances: vec![VideoInstance {
                prompt: (!prompt.is_empty()).then(|| prompt.to_string()),
                image: VideoImage {
                    bytes_base64_encoded: image.data.clone(),
                    mime_type: image.mime_type.clone(),
                },
            }],
            parameters: VideoParameters {
                aspect_ratio: aspect_ratio.as_str().to_string(),
                resolution: VIDEO_RESOLUTION.to_string(),
                sample_count: 1,
            },
        };

        info!("🎬 Starting video generation ({})", aspect_ratio.as_str());
        let mut operation = client
            .start_video_generation(&self.config.video_model, &request)
            .await?;

        let mut attempts: u32 = 0;
        while !operation.done {
            if let Some(max) = self.config.max_poll_attempts {
                if attempts >= max {
                    warn!(
                        "Video operation {} still running after {} checks",
                        operation.name, attempts
                    );
                    return Err(GatewayError::PollTimeout { attempts });
                }
            }

            self.pacer.pause(self.config.poll_interval()).await;
            operation = client.poll_video_operation(&operation).await?;
            attempts += 1;
            debug!(
                "Video operation {} check #{}: done={}",
                operation.name, attempts, operation.done
            );
        }

        if let Some(err) = &operation.error {
            error!("Video operation failed: {}", err.message);
            return Err(GatewayError::Operation {
                code: err.code,
                message: err.message.clone(),
            });
        }

        let uri = operation
            .first_video_uri()
            .ok_or(GatewayError::MissingVideoUri)?;

        info!("✅ Video ready after {} status checks", attempts);
        append_credential(uri, client.api_key())
    }

    /// Answers `query` with web grounding and cited sources.
    pub async fn search_with_grounding(&self, query: &str) -> Result<SearchResult, GatewayError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GatewayError::EmptyPrompt);
        }

        let client = self.clients.create()?;

        let mut request = GenerateContentRequest::from_text(query);
        request.tools.push(Tool::google_search());

        info!("🔍 Grounded search: '{}'", query);
        let response = client
            .generate_content(&self.config.search_model, &request)
            .await?;

        Ok(normalize_search(&response))
    }

    /// Like [`Gateway::search_with_grounding`], but a failure becomes an
    /// apology answer with no sources instead of an error.
    pub async fn search_or_apologize(&self, query: &str) -> SearchResult {
        match self.search_with_grounding(query).await {
            Ok(result) => result,
            Err(e) => {
                error!("❌ Grounded search failed: {}", e);
                SearchResult::unavailable()
            }
        }
    }
}

/// First inline-data part of the first candidate, as a `data:` URI.
fn extract_image(response: &GenerateContentResponse) -> Result<String, GatewayError> {
    response
        .first_parts()
        .iter()
        .find_map(|part| part.inline_data.as_ref())
        .map(|inline| data_uri_from_base64(&inline.mime_type, &inline.data))
        .ok_or(GatewayError::NoImageData)
}

/// Answer text plus the citations that carry both a URI and a title.
fn normalize_search(response: &GenerateContentResponse) -> SearchResult {
    let text = response
        .text()
        .unwrap_or_else(|| SEARCH_PLACEHOLDER_TEXT.to_string());

    let sources = response
        .grounding_chunks()
        .iter()
        .filter_map(|chunk| chunk.web.as_ref())
        .filter_map(|web| match (web.uri.as_deref(), web.title.as_deref()) {
            (Some(uri), Some(title)) if !uri.is_empty() && !title.is_empty() => Some(Source {
                uri: uri.to_string(),
                title: title.to_string(),
            }),
            _ => None,
        })
        .collect();

    SearchResult { text, sources }
}

/// Appends `key=<api_key>` so the media URI can be fetched directly.
pub fn append_credential(uri: &str, api_key: &str) -> Result<String, GatewayError> {
    let mut url = url::Url::parse(uri)?;
    url.query_pairs_mut().append_pair("key", api_key);
    Ok(url.into())
}
