//! Middleware system for the Redux loop
//!
//! Middleware sits between action dispatch and reducer execution, so side
//! effects (timers, parsing broadcast input, logging) stay out of the reducer.
//!
//! ```text
//! Action → Middleware Chain → Reducer → State
//! ```
//!
//! Each middleware can:
//! - Inspect actions and state
//! - Dispatch new actions
//! - Spawn async work (e.g. the flash timer)
//! - Block actions from reaching the reducer

use crate::{actions::Action, state::AppState};
use std::future::Future;
use std::pin::Pin;

mod broadcast;
mod dispatcher;
mod flash_timer;
mod keyboard;
mod logging;

pub use broadcast::BroadcastMiddleware;
pub use dispatcher::Dispatcher;
pub use flash_timer::FlashTimerMiddleware;
pub use keyboard::KeyboardMiddleware;
pub use logging::LoggingMiddleware;

/// BoxFuture type alias for async middleware handlers
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Middleware trait - handles actions before they reach the reducer
pub trait Middleware: Send + Sync {
    /// Handle an action before it reaches the reducer
    ///
    /// # Returns
    /// - `true`: Continue to next middleware/reducer
    /// - `false`: Block this action from continuing
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        state: &'a AppState,
        dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool>;
}
