//! LoggingMiddleware - logs all actions for debugging

use super::{BoxFuture, Dispatcher, Middleware};
use crate::{actions::Action, state::AppState};

pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        _state: &'a AppState,
        _dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            // Skip Redraw to reduce noise while resizing
            if !matches!(action, Action::Redraw) {
                log::debug!("Action: {:?}", action);
            }
            true
        })
    }
}
