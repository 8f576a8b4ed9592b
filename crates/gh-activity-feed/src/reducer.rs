use crate::action::FeedAction;
use crate::state::FeedState;

/// Reducer - pure function that produces new state from current state + action
///
/// The flash flag is cleared by whichever `FlashExpired` arrives first; timers
/// from earlier events are not cancelled, so a quick succession of events can
/// shorten the highlight of the newest one.
pub fn reduce(mut state: FeedState, action: &FeedAction) -> FeedState {
    match action {
        FeedAction::EventReceived(event) => {
            if let Some(evicted) = state.history.push(event.clone()) {
                log::debug!("Evicted event from history: {}", evicted.html_url);
            }
            state.flash = true;
        }
        FeedAction::FlashExpired => {
            state.flash = false;
        }
        FeedAction::ToggleVisibility => {
            state.visible = !state.visible;
        }
    }

    state
}
