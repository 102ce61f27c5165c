//! Live adapter for PokeAPI and the artwork CDN it points at.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};

use crate::error::IconError;
use crate::ports::artwork_api::{ApiFuture, ArtworkApi, DownloadedImage};

const USER_AGENT: &str = concat!("pokeicons/", env!("CARGO_PKG_VERSION"));

/// Live artwork API client backed by reqwest.
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, IconError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client on top of an already configured reqwest [`Client`].
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self { client, base_url: base_url.into() }
    }

    /// Metadata endpoint for a Pokémon ID.
    #[must_use]
    pub fn pokemon_url(&self, id: u32) -> String {
        format!("{}/pokemon/{id}", self.base_url)
    }

    async fn get(&self, url: &str) -> Result<Response, IconError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(IconError::Request { url: url.to_string(), status: status.as_u16() });
        }
        Ok(response)
    }
}

impl ArtworkApi for PokeApiClient {
    fn fetch_pokemon(&self, id: u32) -> ApiFuture<'_, serde_json::Value> {
        Box::pin(async move {
            let url = self.pokemon_url(id);
            let response = self.get(&url).await?;
            let text = response.text().await?;
            serde_json::from_str(&text)
                .map_err(|e| IconError::Decode(format!("Failed to parse {url}: {e}")))
        })
    }

    fn download(&self, url: &str) -> ApiFuture<'_, DownloadedImage> {
        let url = url.to_string();
        Box::pin(async move {
            let response = self.get(&url).await?;
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let data = response.bytes().await?.to_vec();
            Ok(DownloadedImage { data, content_type })
        })
    }
}
