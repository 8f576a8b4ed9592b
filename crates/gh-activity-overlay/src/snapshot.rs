//! HTML snapshot of the overlay, for browser sources that poll a file.

use crate::state::AppState;
use anyhow::{Context, Result};
use gh_activity_feed::html::to_html;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Render the current state as HTML and write it to `path`.
///
/// The document is written to a sibling temp file first and renamed over
/// `path`, so readers never see a partial document.
pub async fn write_html(state: &AppState, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let view = gh_activity_feed::render(&state.feed, &state.config.title);
    let html = to_html(&view, &state.config.assets_dir);

    let staging = staging_path(path);
    tokio::fs::write(&staging, html)
        .await
        .with_context(|| format!("Failed to write HTML snapshot to {}", staging.display()))?;

    if let Err(e) = tokio::fs::rename(&staging, path).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(e)
            .with_context(|| format!("Failed to replace HTML snapshot {}", path.display()));
    }
    Ok(())
}

/// `overlay.html` -> `.overlay.html.tmp` in the same directory
fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| OsStr::new("snapshot.html")));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;
    use crate::reducer::reduce;
    use gh_activity_feed::FeedAction;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "gh-activity-overlay-{}-{}.html",
            name,
            std::process::id()
        ))
    }

    #[tokio::test]
    async fn test_write_html_snapshot() {
        let path = temp_path("snapshot");
        let state = reduce(
            AppState::default(),
            &Action::Feed(FeedAction::ToggleVisibility),
        );

        write_html(&state, &path).await.unwrap();

        let html = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(html.contains("<ul class=\"hide\">"));
        assert!(html.contains("assets/images/coffee.svg"));
        assert!(html.contains("<span>Code Activity</span>"));

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_write_html_replaces_previous_snapshot() {
        let path = temp_path("replace");
        tokio::fs::write(&path, "stale content that is longer than nothing")
            .await
            .unwrap();

        write_html(&AppState::default(), &path).await.unwrap();

        let html = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(!html.contains("stale content"));
        assert!(html.contains("No activity yet!"));
        assert!(!staging_path(&path).exists());

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[test]
    fn test_staging_path_is_hidden_sibling() {
        let staging = staging_path(Path::new("/srv/obs/overlay.html"));
        assert_eq!(staging, PathBuf::from("/srv/obs/.overlay.html.tmp"));
    }

    #[tokio::test]
    async fn test_write_html_into_missing_directory_fails() {
        let path = std::env::temp_dir()
            .join("gh-activity-overlay-missing-dir")
            .join("nested")
            .join("overlay.html");

        assert!(write_html(&AppState::default(), &path).await.is_err());
    }
}
