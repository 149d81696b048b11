//! Display records and request parameters.

use serde::{Deserialize, Serialize};

use crate::config::SEARCH_APOLOGY_TEXT;

/// A portfolio project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub tags: &'static [&'static str],
}

/// One entry on the experience timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub id: u32,
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

/// A web page cited by a grounded answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub uri: String,
    pub title: String,
}

/// Normalized answer from the grounded search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub text: String,
    pub sources: Vec<Source>,
}

impl SearchResult {
    /// Result shown in place of an error when the search call fails.
    pub fn unavailable() -> Self {
        Self {
            text: SEARCH_APOLOGY_TEXT.to_string(),
            sources: Vec::new(),
        }
    }
}

/// Output resolution tier for generated images.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageSize {
    #[default]
    #[serde(rename = "1K")]
    OneK,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
}

impl ImageSize {
    pub const ALL: [ImageSize; 3] = [ImageSize::OneK, ImageSize::TwoK, ImageSize::FourK];

    /// Value sent to the service.
    pub fn as_str(self) -> &'static str {
        match self {
            ImageSize::OneK => "1K",
            ImageSize::TwoK => "2K",
            ImageSize::FourK => "4K",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ImageSize::OneK => "1K Resolution",
            ImageSize::TwoK => "2K Resolution",
            ImageSize::FourK => "4K Resolution",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == value)
    }
}

/// Frame shape for generated videos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "9:16")]
    Tall,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 2] = [AspectRatio::Widescreen, AspectRatio::Tall];

    pub fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Tall => "9:16",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::Widescreen => "Landscape (16:9)",
            AspectRatio::Tall => "Portrait (9:16)",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ratio| ratio.as_str() == value)
    }
}

/// Still image used to seed a video, already base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    /// Base64 payload without the `data:` prefix
    pub data: String,
    pub mime_type: String,
}
