use crate::{
    actions::Action,
    middleware::{Dispatcher, Middleware},
    reducer::reduce,
    state::AppState,
};

/// Redux-style Store that holds application state and dispatches actions
///
/// - Centralized state management
/// - Actions flow through the middleware chain, then the reducer
/// - State is replaced on each action
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            middleware: Vec::new(),
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware<M: Middleware + 'static>(&mut self, middleware: M) {
        self.middleware.push(Box::new(middleware));
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action through the middleware chain, then the reducer
    pub async fn dispatch(&mut self, action: Action, dispatcher: &Dispatcher) {
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, dispatcher).await {
                return;
            }
        }

        self.state = reduce(self.state.clone(), &action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::BoxFuture;
    use gh_activity_feed::FeedAction;
    use tokio::sync::mpsc;

    struct BlockToggle;

    impl Middleware for BlockToggle {
        fn handle<'a>(
            &'a mut self,
            action: &'a Action,
            _state: &'a AppState,
            _dispatcher: &'a Dispatcher,
        ) -> BoxFuture<'a, bool> {
            Box::pin(async move { !matches!(action, Action::Feed(FeedAction::ToggleVisibility)) })
        }
    }

    #[tokio::test]
    async fn test_dispatch_reaches_reducer() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);
        let mut store = Store::new(AppState::default());

        store
            .dispatch(Action::Feed(FeedAction::ToggleVisibility), &dispatcher)
            .await;

        assert!(!store.state().feed.visible);
    }

    #[tokio::test]
    async fn test_middleware_can_block_action() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);
        let mut store = Store::new(AppState::default());
        store.add_middleware(BlockToggle);

        store
            .dispatch(Action::Feed(FeedAction::ToggleVisibility), &dispatcher)
            .await;
        assert!(store.state().feed.visible);

        store.dispatch(Action::Quit, &dispatcher).await;
        assert!(!store.state().running);
    }
}
