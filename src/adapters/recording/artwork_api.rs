//! Recording adapter for the `ArtworkApi` port.

use std::sync::{Arc, Mutex};

use serde_json::json;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::artwork_api::{ApiFuture, ArtworkApi, DownloadedImage};

/// Records artwork API interactions while delegating to an inner implementation.
pub struct RecordingArtworkApi {
    inner: Box<dyn ArtworkApi>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingArtworkApi {
    /// Creates a new recording adapter wrapping the given implementation.
    pub fn new(inner: Box<dyn ArtworkApi>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl ArtworkApi for RecordingArtworkApi {
    fn fetch_pokemon(&self, id: u32) -> ApiFuture<'_, serde_json::Value> {
        let recorder = Arc::clone(&self.recorder);
        Box::pin(async move {
            let result = self.inner.fetch_pokemon(id).await;
            record_result(&recorder, "artwork_api", "fetch_pokemon", &json!({ "id": id }), &result);
            result
        })
    }

    fn download(&self, url: &str) -> ApiFuture<'_, DownloadedImage> {
        let url = url.to_string();
        let recorder = Arc::clone(&self.recorder);
        Box::pin(async move {
            let result = self.inner.download(&url).await;
            record_result(&recorder, "artwork_api", "download", &json!({ "url": url }), &result);
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IconError;

    /// Answers every call from fixed values.
    struct FixedApi;

    impl ArtworkApi for FixedApi {
        fn fetch_pokemon(&self, id: u32) -> ApiFuture<'_, serde_json::Value> {
            Box::pin(async move { Ok(json!({ "id": id })) })
        }

        fn download(&self, url: &str) -> ApiFuture<'_, DownloadedImage> {
            let url = url.to_string();
            Box::pin(async move { Err(IconError::Request { url, status: 404 }) })
        }
    }

    #[tokio::test]
    async fn records_ok_and_err() {
        let dir = std::env::temp_dir().join("pokeicons_recording_adapter_test");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("artwork_api.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "test", "abc")));
        let api = RecordingArtworkApi::new(Box::new(FixedApi), Arc::clone(&recorder));

        assert!(api.fetch_pokemon(7).await.is_ok());
        assert!(api.download("https://img.test/7.png").await.is_err());
        drop(api);

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let cassette: crate::cassette::format::Cassette = serde_yaml::from_str(&content).unwrap();
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[0].input["id"], 7);
        assert_eq!(cassette.interactions[0].output["Ok"]["id"], 7);
        assert_eq!(cassette.interactions[1].input["url"], "https://img.test/7.png");
        assert_eq!(cassette.interactions[1].output["Err"]["status"], 404);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
