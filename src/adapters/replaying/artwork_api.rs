//! Replaying adapter for the `ArtworkApi` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result, ReplayedError};
use crate::cassette::replayer::CassetteReplayer;
use crate::error::IconError;
use crate::ports::artwork_api::{ApiFuture, ArtworkApi, DownloadedImage};

/// Serves recorded artwork API results from a cassette.
pub struct ReplayingArtworkApi {
    replayer: Arc<Mutex<CassetteReplayer>>,
    base_url: String,
}

impl ReplayingArtworkApi {
    /// Create a replaying adapter backed by the given replayer.
    ///
    /// `base_url` is only used to name the URL in replayed request errors.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>, base_url: impl Into<String>) -> Self {
        Self { replayer, base_url: base_url.into() }
    }
}

/// Turn a replayed failure back into the error the live adapter would have raised.
fn into_icon_error(err: ReplayedError, url: String) -> IconError {
    match err.status {
        Some(status) => IconError::Request { url, status },
        None => IconError::Replay(err.message),
    }
}

impl ArtworkApi for ReplayingArtworkApi {
    fn fetch_pokemon(&self, id: u32) -> ApiFuture<'_, serde_json::Value> {
        let url = format!("{}/pokemon/{id}", self.base_url);
        let output = next_output(&self.replayer, "artwork_api", "fetch_pokemon");
        Box::pin(async move {
            output
                .and_then(replay_result::<serde_json::Value>)
                .map_err(|e| into_icon_error(e, url))
        })
    }

    fn download(&self, url: &str) -> ApiFuture<'_, DownloadedImage> {
        let url = url.to_string();
        let output = next_output(&self.replayer, "artwork_api", "download");
        Box::pin(async move {
            output.and_then(replay_result::<DownloadedImage>).map_err(|e| into_icon_error(e, url))
        })
    }
}
