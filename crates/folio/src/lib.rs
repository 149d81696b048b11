//! Folio - a single-page portfolio with generative-AI demos.
//!
//! Sections (hero, about, projects, lab, experiences, contact) are rendered
//! from the static content in [`folio_core::content`]. The lab hosts three
//! demo widgets that talk to the Gemini API through [`folio_core::Gateway`]:
//!
//! - **Image studio**: prompt + resolution tier -> generated image
//! - **Video studio**: still image + optional prompt -> short video
//! - **Knowledge search**: question -> web-grounded answer with sources
//!
//! # Platform Support
//!
//! - **Web (WASM)**: API key baked in at compile time; the AI Studio key picker
//!   is used when the host page exposes it
//! - **Desktop**: API key read from the environment on every call

#![forbid(unsafe_code)]

pub mod components;
pub mod host;
pub mod platform;
pub mod utils;
