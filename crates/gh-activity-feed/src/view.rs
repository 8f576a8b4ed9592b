//! View tree
//!
//! [`render`] maps a [`FeedState`] to a plain description of what should be on
//! screen. Toolkits (the terminal widget, the HTML writer) only ever consume
//! this tree, never the state itself.

use crate::format::{icon_for, sentence_for, Icon};
use crate::state::FeedState;

/// Text of the placeholder item shown while nothing has happened yet
pub const PLACEHOLDER_TEXT: &str = "No activity yet!";

/// CSS class of the list while hidden
pub const HIDE_CLASS: &str = "hide";

/// CSS class of a flashing list item
pub const ANIMATE_CLASS: &str = "animate";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayView {
    pub header: HeaderView,
    pub list: ListView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub title: String,
    pub toggle: ToggleButton,
}

/// The show/hide button in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleButton {
    /// Tooltip, names what a click does ("hide" or "show")
    pub title: &'static str,
    pub icon: Icon,
}

impl ToggleButton {
    pub fn for_visibility(visible: bool) -> Self {
        if visible {
            Self {
                title: "hide",
                icon: Icon::EyeOff,
            }
        } else {
            Self {
                title: "show",
                icon: Icon::Eye,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub visible: bool,
    pub items: Vec<ListItem>,
}

impl ListView {
    pub fn css_class(&self) -> &'static str {
        if self.visible {
            ""
        } else {
            HIDE_CLASS
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    Event(EventItem),
    Placeholder { icon: Icon, text: &'static str },
}

impl ListItem {
    pub fn placeholder() -> Self {
        ListItem::Placeholder {
            icon: Icon::Coffee,
            text: PLACEHOLDER_TEXT,
        }
    }
}

/// One formatted event in the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventItem {
    pub icon: Icon,
    pub sentence: String,
    /// Link target of the sentence
    pub html_url: String,
    pub flash: bool,
}

impl EventItem {
    pub fn css_class(&self) -> &'static str {
        if self.flash {
            ANIMATE_CLASS
        } else {
            ""
        }
    }
}

/// Render the overlay for the given state.
pub fn render(state: &FeedState, title: &str) -> OverlayView {
    let mut items: Vec<ListItem> = state
        .history
        .iter()
        .enumerate()
        .map(|(index, event)| {
            ListItem::Event(EventItem {
                icon: icon_for(event),
                sentence: sentence_for(event),
                html_url: event.html_url.clone(),
                flash: state.is_flashing(index),
            })
        })
        .collect();

    if items.is_empty() {
        items.push(ListItem::placeholder());
    }

    OverlayView {
        header: HeaderView {
            title: title.to_string(),
            toggle: ToggleButton::for_visibility(state.visible),
        },
        list: ListView {
            visible: state.visible,
            items,
        },
    }
}
