//! BroadcastMiddleware - turns broadcast envelopes into feed actions
//!
//! Only envelopes addressed to the configured target are processed. A payload
//! that fails to parse is logged and dropped; the overlay keeps running.

use super::{BoxFuture, Dispatcher, Middleware};
use crate::{actions::Action, state::AppState};
use gh_activity_feed::FeedAction;

pub struct BroadcastMiddleware;

impl BroadcastMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BroadcastMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for BroadcastMiddleware {
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        state: &'a AppState,
        dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            let Action::Broadcast(message) = action else {
                return true;
            };

            let target = &state.config.broadcast_target;
            if !message.is_for(target) {
                log::debug!(
                    "Ignoring broadcast for target '{}' (subscribed to '{}')",
                    message.target,
                    target
                );
                return false;
            }

            match FeedAction::from_broadcast(message) {
                Ok(feed_action) => dispatcher.dispatch(Action::Feed(feed_action)),
                Err(e) => log::warn!("Dropping broadcast: {}", e),
            }

            false
        })
    }
}
