//! Data-URI encoding for uploaded files and generated images.

use std::fmt::Display;
use std::future::Future;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::config::DEFAULT_IMAGE_MIME;
use crate::error::GatewayError;

/// Encodes `bytes` as `data:{mime};base64,{payload}`.
pub fn to_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Builds a data URI from an already-encoded payload.
pub fn data_uri_from_base64(mime_type: &str, payload: &str) -> String {
    format!("data:{};base64,{}", mime_type, payload)
}

/// Strips the `data:{mime};base64,` prefix, returning only the payload.
pub fn data_uri_payload(uri: &str) -> Result<&str, GatewayError> {
    if !uri.starts_with("data:") {
        return Err(GatewayError::InvalidDataUri);
    }
    uri.split_once(',')
        .map(|(_, payload)| payload)
        .ok_or(GatewayError::InvalidDataUri)
}

/// Reads a selected file and returns its base64 payload.
///
/// `read` is the host's file read (browser `FileReader`, `tokio::fs`, ...);
/// its error is propagated as [`GatewayError::FileRead`].
pub async fn file_to_base64<F, E>(read: F, mime_type: &str) -> Result<String, GatewayError>
where
    F: Future<Output = Result<Vec<u8>, E>>,
    E: Display,
{
    let bytes = read
        .await
        .map_err(|e| GatewayError::FileRead(e.to_string()))?;
    let uri = to_data_uri(mime_type, &bytes);
    data_uri_payload(&uri).map(str::to_string)
}

/// Mime type inferred from a file name's extension.
pub fn guess_mime_type(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "txt" => "text/plain",
        _ => DEFAULT_IMAGE_MIME,
    }
}
