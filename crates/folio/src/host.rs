//! Host capabilities handed to the gateway.
//!
//! Builds the [`Gateway`] for the running platform: where the API key comes
//! from, how billing-key selection works, and how the poll loop sleeps.

use std::sync::Arc;

use async_trait::async_trait;
use dioxus::logger::tracing::{error, info, warn};
use dioxus::prelude::*;
use folio_core::config::GatewayConfig;
use folio_core::{
    ClientFactory, ConfiguredCredentials, CredentialProvider, Gateway, GatewayError, GenAiClient,
    HttpClientFactory,
};

use crate::platform::PlatformPacer;

/// Key picker exposed by the AI Studio host page (`window.aistudio`).
///
/// When the page has no picker, a key is assumed to be configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserCredentials;

const HAS_SELECTED_KEY_JS: &str = r#"
    const studio = window.aistudio;
    if (!studio || typeof studio.hasSelectedApiKey !== 'function') {
        return true;
    }
    return await studio.hasSelectedApiKey();
"#;

const OPEN_SELECT_KEY_JS: &str = r#"
    const studio = window.aistudio;
    if (studio && typeof studio.openSelectKey === 'function') {
        await studio.openSelectKey();
    }
    return true;
"#;

#[async_trait(?Send)]
impl CredentialProvider for BrowserCredentials {
    async fn has_selected_key(&self) -> Result<bool, GatewayError> {
        document::eval(HAS_SELECTED_KEY_JS)
            .join::<bool>()
            .await
            .map_err(|e| GatewayError::Credential(e.to_string()))
    }

    async fn open_select_key(&self) -> Result<(), GatewayError> {
        document::eval(OPEN_SELECT_KEY_JS)
            .join::<bool>()
            .await
            .map(|_| ())
            .map_err(|e| GatewayError::Credential(e.to_string()))
    }
}

/// Client factory used when the HTTP client could not be built.
///
/// Every call fails with the original construction error so the widgets can
/// show it instead of the app refusing to start.
#[derive(Debug, Clone)]
struct UnavailableClients(GatewayError);

impl ClientFactory for UnavailableClients {
    fn create(&self) -> Result<Box<dyn GenAiClient>, GatewayError> {
        Err(self.0.clone())
    }
}

/// Gateway settings for this platform.
///
/// Desktop reads the environment at startup (and the factory re-reads it on
/// each call). The browser has no environment, so the key is baked in at
/// compile time.
pub fn gateway_config() -> GatewayConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        GatewayConfig::from_env()
    }

    #[cfg(target_arch = "wasm32")]
    {
        let key = option_env!("FOLIO_API_KEY")
            .or(option_env!("GEMINI_API_KEY"))
            .or(option_env!("API_KEY"));
        let mut config = GatewayConfig::default();
        if let Some(key) = key {
            config = config.with_api_key(key);
        }
        if let Some(url) = option_env!("FOLIO_API_BASE_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        config
    }
}

/// Wires the gateway with the platform's credentials and pacer.
pub fn build_gateway(config: GatewayConfig) -> Gateway {
    if config.api_key.is_none() {
        warn!("No API key configured; the lab demos will fail until one is provided");
    }

    let clients: Arc<dyn ClientFactory> = match HttpClientFactory::new(config.clone()) {
        Ok(factory) => Arc::new(factory),
        Err(e) => {
            error!("❌ Failed to initialize API client: {}", e);
            Arc::new(UnavailableClients(e))
        }
    };

    let credentials: Arc<dyn CredentialProvider> = if cfg!(target_arch = "wasm32") {
        Arc::new(BrowserCredentials)
    } else {
        Arc::new(ConfiguredCredentials)
    };

    info!(
        "Gateway ready (base URL {}, poll every {:?})",
        config.base_url,
        config.poll_interval()
    );
    Gateway::new(config, clients, credentials, Arc::new(PlatformPacer))
}
