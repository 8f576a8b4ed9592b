//! Dispatcher allows middleware and background tasks to dispatch actions back to the store

use crate::actions::Action;
use tokio::sync::mpsc;

/// Dispatcher allows middleware to dispatch new actions
///
/// Actions dispatched through the Dispatcher are queued and processed in the
/// next event loop iteration, preventing recursion.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Action>,
}

impl Dispatcher {
    pub fn new(tx: mpsc::UnboundedSender<Action>) -> Self {
        Self { tx }
    }

    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.tx.send(action) {
            log::error!("Failed to dispatch action: {}", e);
        }
    }

    /// Whether the event loop stopped receiving actions
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
