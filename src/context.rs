//! Service context that bundles all port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::pokeapi::PokeApiClient;
use crate::adapters::recording::artwork_api::RecordingArtworkApi;
use crate::adapters::replaying::artwork_api::ReplayingArtworkApi;
use crate::cassette::config::load_cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::IconError;
use crate::ports::ArtworkApi;

/// Bundles all port trait objects into a single context.
pub struct ServiceContext {
    /// Artwork API port.
    pub api: Box<dyn ArtworkApi>,
}

/// Handle to a recording session that must be finished after use.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Finish the recording and write the cassette to disk.
    ///
    /// The context that fed this session must be dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recording adapter still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

impl ServiceContext {
    /// Create a live context talking to `api_base`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn live(api_base: &str) -> Result<Self, IconError> {
        Ok(Self { api: Box::new(PokeApiClient::new(api_base)?) })
    }

    /// Create a recording context that wraps a live adapter with a recorder.
    ///
    /// # Errors
    ///
    /// Returns an error if the live adapter cannot be created.
    pub fn recording(api_base: &str, id: u32) -> Result<(Self, RecordingSession), IconError> {
        let live_ctx = Self::live(api_base)?;

        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let path = PathBuf::from(".pokeicons/cassettes")
            .join(&timestamp)
            .join("artwork_api.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            format!("{timestamp}-pokemon-{id}"),
            get_commit_hash(),
        )));

        let api = RecordingArtworkApi::new(live_ctx.api, Arc::clone(&recorder));

        Ok((Self { api: Box::new(api) }, RecordingSession { recorder }))
    }

    /// Create a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be loaded.
    pub fn replaying(path: &Path, api_base: &str) -> Result<Self, IconError> {
        let replayer = load_cassette(path)
            .map_err(|e| IconError::Config(format!("Failed to load cassette: {e}")))?;
        let replayer = Arc::new(Mutex::new(replayer));
        Ok(Self { api: Box::new(ReplayingArtworkApi::new(replayer, api_base)) })
    }
}

/// Get the current git commit hash, or "unknown" if unavailable.
fn get_commit_hash() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string())
}
