//! On-disk cassette layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded session: every port call made during one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cassette {
    /// Human-readable session name.
    pub name: String,
    /// When the session was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Git commit of the recording build, or `"unknown"`.
    pub commit: String,
    /// Recorded calls in call order.
    pub interactions: Vec<Interaction>,
}

/// One call across a port boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// Position in the session, starting at zero.
    pub seq: u64,
    /// Port name, e.g. `"artwork_api"`.
    pub port: String,
    /// Method name on the port.
    pub method: String,
    /// Serialized call arguments.
    pub input: serde_json::Value,
    /// Serialized result, `{"Ok": ...}` or `{"Err": ...}`.
    pub output: serde_json::Value,
}
