//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Public PokeAPI endpoint.
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// API endpoint configuration.
    #[serde(default)]
    pub api: ApiConfig,

    /// Default values used when the matching CLI flag is absent.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// API endpoint configuration.
#[derive(Debug, Default, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the metadata API.
    pub base_url: Option<String>,
}

/// Default parameter values from config file.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Default Pokémon ID.
    pub id: u32,
    /// Default output directory.
    pub dir: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self { id: 25, dir: PathBuf::from("icons") }
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed, or if it
    /// sets a default id of zero.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
        if config.defaults.id == 0 {
            return Err(format!("Invalid default id 0 in {}", path.display()));
        }
        Ok(config)
    }

    /// Get the API base URL, preferring the environment variable.
    ///
    /// Trailing slashes are stripped so paths can be appended directly.
    #[must_use]
    pub fn api_base(&self) -> String {
        let base = std::env::var("POKEICONS_API_BASE")
            .ok()
            .or_else(|| self.api.base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        base.trim_end_matches('/').to_string()
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `POKEICONS_CONFIG` environment variable
/// 3. `~/.config/pokeicons/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    if let Ok(p) = std::env::var("POKEICONS_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/pokeicons/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/pokeicons/config.toml")
    } else {
        PathBuf::from("pokeicons.toml")
    }
}
