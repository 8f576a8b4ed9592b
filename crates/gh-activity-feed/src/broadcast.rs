//! Broadcast envelopes
//!
//! The hosting platform hands the widget `(target, contentType, data)` where
//! `data` is itself a JSON string describing a [`GithubEvent`].

use crate::error::{FeedError, Result};
use crate::event::GithubEvent;
use serde::{Deserialize, Serialize};

/// One message received on the broadcast channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastMessage {
    pub target: String,
    #[serde(default, alias = "contentType")]
    pub content_type: String,
    /// JSON-encoded event
    pub data: String,
}

impl BroadcastMessage {
    pub fn new(
        target: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    /// Parse one line of newline-delimited JSON into an envelope.
    pub fn from_json_line(line: &str) -> Result<Self> {
        serde_json::from_str(line.trim()).map_err(FeedError::InvalidEnvelope)
    }

    pub fn is_for(&self, target: &str) -> bool {
        self.target == target
    }

    pub fn event(&self) -> Result<GithubEvent> {
        GithubEvent::from_payload(&self.data)
    }
}
