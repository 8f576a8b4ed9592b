//! GitHub event payloads as pushed over the broadcast channel.

use crate::error::{FeedError, Result};
use serde::{Deserialize, Serialize};

/// `event_name` of a pull request event
pub const PULL_REQUEST_EVENT: &str = "pull_request";
/// `event_name` of an issue event
pub const ISSUES_EVENT: &str = "issues";
/// `event_name` of a check suite event
pub const CHECK_SUITE_EVENT: &str = "check_suite";

/// A single repository activity event.
///
/// Only `event_name`, `repository` and `html_url` are required; the rest
/// depends on the kind of event. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubEvent {
    pub event_name: String,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub number: Option<u64>,
    pub repository: String,
    pub html_url: String,
    /// Check suite conclusion, e.g. "success" or "failure"
    #[serde(default)]
    pub conclusion: Option<String>,
    #[serde(default)]
    pub head_branch: Option<String>,
    #[serde(default)]
    pub merged: Option<bool>,
}

/// Kind of event, derived from `event_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    PullRequest,
    Issue,
    CheckSuite,
    /// Anything the overlay has no dedicated rendering for
    Other(String),
}

impl EventKind {
    pub fn from_event_name(name: &str) -> Self {
        match name {
            PULL_REQUEST_EVENT => Self::PullRequest,
            ISSUES_EVENT => Self::Issue,
            CHECK_SUITE_EVENT => Self::CheckSuite,
            other => Self::Other(other.to_string()),
        }
    }
}

impl GithubEvent {
    /// Parse the `data` string of a broadcast message.
    pub fn from_payload(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(FeedError::InvalidPayload)
    }

    pub fn kind(&self) -> EventKind {
        EventKind::from_event_name(&self.event_name)
    }

    /// Whether a check suite concluded successfully.
    pub fn is_success(&self) -> bool {
        self.conclusion.as_deref() == Some("success")
    }

    pub fn is_merged(&self) -> bool {
        self.merged.unwrap_or(false)
    }

    /// Pull request number a check suite belongs to, if any.
    ///
    /// A zero number counts as absent.
    pub fn pull_request_number(&self) -> Option<u64> {
        self.number.filter(|n| *n != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pull_request_payload() {
        let data = r#"{
            "event_name": "pull_request",
            "sender": "octocat",
            "action": "closed",
            "number": 42,
            "repository": "octo/repo",
            "html_url": "https://github.com/octo/repo/pull/42",
            "merged": true,
            "installation": {"id": 1}
        }"#;

        let event = GithubEvent::from_payload(data).unwrap();
        assert_eq!(event.kind(), EventKind::PullRequest);
        assert_eq!(event.sender.as_deref(), Some("octocat"));
        assert_eq!(event.number, Some(42));
        assert!(event.is_merged());
        assert!(event.conclusion.is_none());
    }

    #[test]
    fn test_parse_check_suite_payload() {
        let data = r#"{
            "event_name": "check_suite",
            "repository": "octo/repo",
            "html_url": "https://github.com/octo/repo",
            "conclusion": "success",
            "head_branch": "main"
        }"#;

        let event = GithubEvent::from_payload(data).unwrap();
        assert_eq!(event.kind(), EventKind::CheckSuite);
        assert!(event.is_success());
        assert_eq!(event.pull_request_number(), None);
        assert!(!event.is_merged());
    }

    #[test]
    fn test_missing_repository_is_rejected() {
        let data = r#"{"event_name": "issues", "html_url": "https://github.com"}"#;
        let err = GithubEvent::from_payload(data).unwrap_err();
        assert!(matches!(err, FeedError::InvalidPayload(_)));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(GithubEvent::from_payload("{not json").is_err());
    }

    #[test]
    fn test_event_kind_from_name() {
        assert_eq!(EventKind::from_event_name("issues"), EventKind::Issue);
        assert_eq!(EventKind::from_event_name("check_suite"), EventKind::CheckSuite);
        assert_eq!(
            EventKind::from_event_name("push"),
            EventKind::Other("push".to_string())
        );
    }

    #[test]
    fn test_zero_number_counts_as_absent() {
        let mut event = GithubEvent::from_payload(
            r#"{"event_name":"check_suite","repository":"r","html_url":"u","number":0}"#,
        )
        .unwrap();
        assert_eq!(event.pull_request_number(), None);

        event.number = Some(5);
        assert_eq!(event.pull_request_number(), Some(5));
    }
}
