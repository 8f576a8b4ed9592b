//! # gh-activity-feed
//!
//! The model behind a small overlay that shows the latest GitHub activity
//! (pull requests, issues, check suites) on a live stream.
//!
//! ## Design Principles
//!
//! Like a widget crate, this one is **instrumented**: it never touches the
//! network, timers or a terminal. The orchestrating application
//!
//! - parses broadcast envelopes into [`FeedAction`]s,
//! - runs them through the pure [`reduce`] function,
//! - schedules [`FeedAction::FlashExpired`] itself after the flash timeout,
//! - and draws the [`OverlayView`] returned by [`render`] with whatever toolkit it uses.
//!
//! ## Usage
//!
//! ```rust
//! use gh_activity_feed::{reduce, render, BroadcastMessage, FeedAction, FeedState};
//!
//! let line = r#"{"target":"broadcast","content_type":"application/json","data":"{\"event_name\":\"issues\",\"sender\":\"octocat\",\"action\":\"opened\",\"number\":7,\"repository\":\"octo/repo\",\"html_url\":\"https://github.com/octo/repo/issues/7\"}"}"#;
//! let message = BroadcastMessage::from_json_line(line)?;
//! let action = FeedAction::from_broadcast(&message)?;
//!
//! let state = reduce(FeedState::default(), &action);
//! let view = render(&state, "Code Activity");
//! assert_eq!(view.list.items.len(), 1);
//! # Ok::<(), gh_activity_feed::FeedError>(())
//! ```

pub mod action;
pub mod broadcast;
pub mod error;
pub mod event;
pub mod format;
pub mod history;
pub mod html;
pub mod reducer;
pub mod state;
pub mod view;

pub use action::FeedAction;
pub use broadcast::BroadcastMessage;
pub use error::FeedError;
pub use event::{EventKind, GithubEvent};
pub use format::{icon_for, sentence_for, Icon};
pub use history::{EventHistory, EVENT_LIST_SIZE};
pub use reducer::reduce;
pub use state::FeedState;
pub use view::{render, EventItem, HeaderView, ListItem, ListView, OverlayView, ToggleButton};
