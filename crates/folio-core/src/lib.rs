//! # Folio Core
//!
//! Platform-independent logic behind the Folio portfolio site.
//!
//! Everything here runs without a DOM so it can be tested natively; the
//! `folio` crate renders it with Dioxus on web and desktop.
//!
//! ## Modules
//!
//! - [`gateway`] - Image, video and grounded-search calls to the generative-AI service
//! - [`lifecycle`] - Idle/pending/result/error state shared by the demo widgets
//! - [`encoding`] - File and image data-URI helpers
//! - [`navigation`] - Sections, nav bar state and scroll-to-top visibility
//! - [`content`] - Static portfolio content (projects, experiences, links)
//! - [`config`] - Constants and runtime gateway settings
//! - [`error`] - Error types

#![forbid(unsafe_code)]

pub mod config;
pub mod content;
pub mod encoding;
pub mod error;
pub mod gateway;
pub mod lifecycle;
pub mod navigation;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use gateway::{
    ClientFactory, ConfiguredCredentials, CredentialProvider, Gateway, GenAiClient,
    HttpClientFactory, Pacer,
};
pub use lifecycle::{Phase, Ticket, WidgetState};
pub use navigation::{NavState, Section};
pub use types::{AspectRatio, ImageSize, SearchResult, Source, SourceImage};
