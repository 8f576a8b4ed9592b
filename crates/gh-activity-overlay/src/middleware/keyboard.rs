//! KeyboardMiddleware - translates key presses into overlay actions
//!
//! | key               | action                  |
//! |-------------------|-------------------------|
//! | `h`, space        | toggle list visibility  |
//! | `q`, Esc, Ctrl+C  | quit                    |

use super::{BoxFuture, Dispatcher, Middleware};
use crate::{actions::Action, state::AppState};
use gh_activity_feed::FeedAction;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn action_for_key(key: &KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('h') | KeyCode::Char(' ') => {
                Some(Action::Feed(FeedAction::ToggleVisibility))
            }
            _ => None,
        }
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        _state: &'a AppState,
        dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            let Action::KeyPressed(key) = action else {
                return true;
            };

            match Self::action_for_key(key) {
                Some(next) => dispatcher.dispatch(next),
                None => log::trace!("Unbound key: {:?}", key.code),
            }

            // Raw key presses never reach the reducer
            false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    async fn press(key: KeyEvent) -> (bool, Option<Action>) {
        let mut middleware = KeyboardMiddleware::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);
        let state = AppState::default();

        let continued = middleware
            .handle(&Action::KeyPressed(key), &state, &dispatcher)
            .await;
        (continued, rx.try_recv().ok())
    }

    #[tokio::test]
    async fn test_h_toggles_visibility() {
        let (continued, dispatched) =
            press(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE)).await;
        assert!(!continued);
        assert!(matches!(
            dispatched,
            Some(Action::Feed(FeedAction::ToggleVisibility))
        ));
    }

    #[tokio::test]
    async fn test_quit_keys() {
        for key in [
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let (_, dispatched) = press(key).await;
            assert!(matches!(dispatched, Some(Action::Quit)));
        }
    }

    #[tokio::test]
    async fn test_unbound_key_is_swallowed() {
        let (continued, dispatched) =
            press(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)).await;
        assert!(!continued);
        assert!(dispatched.is_none());
    }

    #[tokio::test]
    async fn test_other_actions_pass_through() {
        let mut middleware = KeyboardMiddleware::new();
        let (tx, _rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);

        assert!(
            middleware
                .handle(&Action::Redraw, &AppState::default(), &dispatcher)
                .await
        );
    }
}
