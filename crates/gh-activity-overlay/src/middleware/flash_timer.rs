//! FlashTimerMiddleware - clears the flash highlight after a fixed delay
//!
//! Every received event spawns its own one-shot timer. Earlier timers are not
//! cancelled when a newer event arrives.

use super::{BoxFuture, Dispatcher, Middleware};
use crate::{actions::Action, state::AppState};
use gh_activity_feed::FeedAction;
use std::time::Duration;

pub struct FlashTimerMiddleware {
    duration: Duration,
}

impl FlashTimerMiddleware {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

impl Middleware for FlashTimerMiddleware {
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        _state: &'a AppState,
        dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            if let Action::Feed(feed_action) = action {
                if feed_action.starts_flash() {
                    let dispatcher = dispatcher.clone();
                    let duration = self.duration;
                    tokio::spawn(async move {
                        tokio::time::sleep(duration).await;
                        dispatcher.dispatch(Action::Feed(FeedAction::FlashExpired));
                    });
                }
            }

            true
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gh_activity_feed::GithubEvent;
    use tokio::sync::mpsc;

    fn event_received() -> Action {
        Action::Feed(FeedAction::EventReceived(GithubEvent {
            event_name: "pull_request".to_string(),
            sender: Some("octocat".to_string()),
            action: Some("opened".to_string()),
            number: Some(1),
            repository: "octo/repo".to_string(),
            html_url: "https://github.com/octo/repo/pull/1".to_string(),
            conclusion: None,
            head_branch: None,
            merged: None,
        }))
    }

    #[tokio::test]
    async fn test_flash_expires_after_duration() {
        let mut middleware = FlashTimerMiddleware::new(Duration::from_millis(20));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);
        let state = AppState::default();

        let continued = middleware
            .handle(&event_received(), &state, &dispatcher)
            .await;
        assert!(continued);

        // Nothing yet, the timer is still running
        assert!(rx.try_recv().is_err());

        let expired = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("flash timer did not fire");
        assert!(matches!(
            expired,
            Some(Action::Feed(FeedAction::FlashExpired))
        ));
    }

    #[tokio::test]
    async fn test_other_actions_do_not_start_timer() {
        let mut middleware = FlashTimerMiddleware::new(Duration::from_millis(1));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);
        let state = AppState::default();

        middleware
            .handle(
                &Action::Feed(FeedAction::ToggleVisibility),
                &state,
                &dispatcher,
            )
            .await;
        middleware.handle(&Action::Quit, &state, &dispatcher).await;

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(rx.try_recv().is_err());
    }
}
