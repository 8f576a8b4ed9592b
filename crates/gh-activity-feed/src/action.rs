//! Feed Actions
//!
//! Tagged actions the feed reducer understands. The orchestrating
//! application produces them from broadcast messages, user input and its
//! own flash timer.

use crate::broadcast::BroadcastMessage;
use crate::error::Result;
use crate::event::GithubEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedAction {
    /// A new event arrived on the broadcast channel
    EventReceived(GithubEvent),
    /// The flash timeout scheduled for an earlier event elapsed
    FlashExpired,
    /// Show or hide the event list
    ToggleVisibility,
}

impl FeedAction {
    /// Build an [`FeedAction::EventReceived`] from a broadcast message.
    pub fn from_broadcast(message: &BroadcastMessage) -> Result<Self> {
        message.event().map(FeedAction::EventReceived)
    }

    /// Whether the application should schedule a [`FeedAction::FlashExpired`]
    pub fn starts_flash(&self) -> bool {
        matches!(self, FeedAction::EventReceived(_))
    }
}
