use crate::theme::Theme;
use gh_activity_config::AppConfig;
use gh_activity_feed::FeedState;

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub feed: FeedState,
    pub config: AppConfig,
    pub theme: Theme,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            running: true,
            feed: FeedState::default(),
            config,
            theme: Theme::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
