//! Feed state

use crate::history::EventHistory;

/// Everything the overlay needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedState {
    pub history: EventHistory,
    /// Whether the event list is shown
    pub visible: bool,
    /// Set right after an event arrives, cleared by the flash timer
    pub flash: bool,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            history: EventHistory::new(),
            visible: true,
            flash: false,
        }
    }
}

impl FeedState {
    /// Whether the list entry at `index` should be highlighted.
    ///
    /// Only the newest entry ever flashes.
    pub fn is_flashing(&self, index: usize) -> bool {
        index == 0 && self.flash && !self.history.is_empty()
    }
}
