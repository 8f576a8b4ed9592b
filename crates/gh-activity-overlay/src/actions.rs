use gh_activity_feed::{BroadcastMessage, FeedAction};
use ratatui::crossterm::event::KeyEvent;

/// Actions represent all possible state changes in the application.
#[derive(Debug, Clone)]
pub enum Action {
    /// Raw key press from the terminal
    KeyPressed(KeyEvent),
    /// Envelope received by the broadcast listener, not yet parsed
    Broadcast(BroadcastMessage),
    /// Action for the activity feed
    Feed(FeedAction),
    /// Terminal resized, nothing changed but the frame must be redrawn
    Redraw,
    Quit,
}
