//! Event classification and sentence formatting.

use crate::event::{EventKind, GithubEvent};

/// Rendered in place of optional fields an event did not carry or sent as `null`.
const MISSING: &str = "undefined";

/// Icons used by the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    PullRequest,
    Issue,
    CheckPass,
    CheckFail,
    /// Shown next to the empty-history placeholder
    Coffee,
    /// Toggle icon while the list is hidden
    Eye,
    /// Toggle icon while the list is visible
    EyeOff,
}

impl Icon {
    /// SVG file name under `{assets_dir}/images/`
    pub fn file_name(self) -> &'static str {
        match self {
            Icon::PullRequest => "git-pull-request.svg",
            Icon::Issue => "alert-circle.svg",
            Icon::CheckPass => "check-circle.svg",
            Icon::CheckFail => "x-circle.svg",
            Icon::Coffee => "coffee.svg",
            Icon::Eye => "eye.svg",
            Icon::EyeOff => "eye-off.svg",
        }
    }

    pub fn asset_path(self, assets_dir: &str) -> String {
        format!("{}/images/{}", assets_dir, self.file_name())
    }

    /// Single-cell glyph for terminal rendering
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::PullRequest => "⇄",
            Icon::Issue => "!",
            Icon::CheckPass => "✔",
            Icon::CheckFail => "✘",
            Icon::Coffee => "☕",
            Icon::Eye => "◉",
            Icon::EyeOff => "○",
        }
    }
}

/// Pick the icon for an event.
///
/// Unrecognized kinds fall back to the pull request icon.
pub fn icon_for(event: &GithubEvent) -> Icon {
    match event.kind() {
        EventKind::CheckSuite if event.is_success() => Icon::CheckPass,
        EventKind::CheckSuite => Icon::CheckFail,
        EventKind::PullRequest => Icon::PullRequest,
        EventKind::Issue => Icon::Issue,
        EventKind::Other(name) => {
            log::debug!("No icon for event '{}', using pull request icon", name);
            Icon::PullRequest
        }
    }
}

/// Describe an event in one sentence. Unrecognized kinds yield an empty string.
pub fn sentence_for(event: &GithubEvent) -> String {
    let sender = event.sender.as_deref().unwrap_or(MISSING);
    let action = event.action.as_deref().unwrap_or(MISSING);
    let number = event
        .number
        .map(|n| n.to_string())
        .unwrap_or_else(|| MISSING.to_string());

    match event.kind() {
        EventKind::CheckSuite => {
            let conclusion = if event.is_success() { "passed" } else { "failed" };
            let object = match event.pull_request_number() {
                Some(n) => format!("pull request #{}", n),
                None => format!(
                    "branch {}",
                    event.head_branch.as_deref().unwrap_or(MISSING)
                ),
            };
            format!("Checks {} for {} on {}", conclusion, object, event.repository)
        }
        EventKind::PullRequest => {
            let action = if event.is_merged() { "merged" } else { action };
            format!(
                "{} {} pull request #{} on {}",
                sender, action, number, event.repository
            )
        }
        EventKind::Issue => format!(
            "{} {} issue #{} on {}",
            sender, action, number, event.repository
        ),
        EventKind::Other(_) => String::new(),
    }
}
