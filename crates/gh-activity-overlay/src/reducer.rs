use crate::actions::Action;
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer; feed actions are delegated to the feed reducer.
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Quit => {
            state.running = false;
        }
        Action::Feed(feed_action) => {
            state.feed = gh_activity_feed::reduce(state.feed, feed_action);
        }
        Action::KeyPressed(_) | Action::Broadcast(_) | Action::Redraw => {
            // Handled by middleware, nothing to reduce
        }
    }

    state
}
