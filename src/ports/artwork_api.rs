//! Artwork API port: metadata lookup and image download.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::IconError;

/// Raw bytes of a downloaded image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadedImage {
    /// Response body.
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
    /// `Content-Type` header, when the server sent one.
    #[serde(default)]
    pub content_type: Option<String>,
}

/// Boxed future type returned by [`ArtworkApi`] methods.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, IconError>> + Send + 'a>>;

/// Talks to the remote artwork API.
///
/// Both methods fail with [`IconError::Request`] when the server answers
/// with a non-success status.
pub trait ArtworkApi: Send + Sync {
    /// Fetch the metadata document for a Pokémon ID.
    fn fetch_pokemon(&self, id: u32) -> ApiFuture<'_, serde_json::Value>;

    /// Download the image at the given URL.
    fn download(&self, url: &str) -> ApiFuture<'_, DownloadedImage>;
}

/// Serde helper for serializing `Vec<u8>` as base64 strings in cassettes.
mod base64_bytes {
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize bytes as base64 string.
    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(data);
        serializer.serialize_str(&encoded)
    }

    /// Deserialize base64 string to bytes.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        base64::engine::general_purpose::STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}
