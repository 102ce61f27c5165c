//! Unified error type for pokeicons.

use thiserror::Error;

/// Errors that can occur while fetching artwork and rendering icons.
#[derive(Debug, Error)]
pub enum IconError {
    /// An HTTP call returned a non-success status.
    #[error("Request failed ({status}): {url}")]
    Request {
        /// The requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The metadata response carried no usable image URL.
    #[error("No artwork available for id {id}")]
    NotFound {
        /// The identifier that was looked up.
        id: u32,
    },

    /// A network error occurred.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// The metadata response did not have the expected shape.
    #[error("Malformed metadata: {0}")]
    Decode(String),

    /// Image decoding or encoding error.
    #[error("Image error: {0}")]
    Image(String),

    /// An error served from a cassette that carries no HTTP status.
    #[error("Replayed error: {0}")]
    Replay(String),
}

impl IconError {
    /// The HTTP status behind this error, if it came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}
