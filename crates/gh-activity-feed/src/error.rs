//! Error types for broadcast parsing.

use thiserror::Error;

/// Errors raised while turning broadcast input into feed actions.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The broadcast envelope itself was not valid JSON.
    #[error("invalid broadcast envelope: {0}")]
    InvalidEnvelope(#[source] serde_json::Error),

    /// The envelope's `data` string did not describe a GitHub event.
    #[error("invalid event payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, FeedError>;
