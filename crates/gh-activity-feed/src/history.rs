//! Bounded, newest-first event history.

use crate::event::GithubEvent;
use std::collections::VecDeque;

/// Maximum number of events kept in the history
pub const EVENT_LIST_SIZE: usize = 3;

/// The most recent events, newest first, never more than [`EVENT_LIST_SIZE`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventHistory {
    events: VecDeque<GithubEvent>,
}

impl EventHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an event, dropping the oldest one on overflow.
    ///
    /// Returns the evicted event, if any.
    pub fn push(&mut self, event: GithubEvent) -> Option<GithubEvent> {
        self.events.push_front(event);
        if self.events.len() > EVENT_LIST_SIZE {
            self.events.pop_back()
        } else {
            None
        }
    }

    /// Most recent event
    pub fn latest(&self) -> Option<&GithubEvent> {
        self.events.front()
    }

    pub fn get(&self, index: usize) -> Option<&GithubEvent> {
        self.events.get(index)
    }

    /// Iterate newest first
    pub fn iter(&self) -> impl Iterator<Item = &GithubEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(number: u64) -> GithubEvent {
        GithubEvent {
            event_name: "issues".to_string(),
            sender: Some("octocat".to_string()),
            action: Some("opened".to_string()),
            number: Some(number),
            repository: "octo/repo".to_string(),
            html_url: format!("https://github.com/octo/repo/issues/{}", number),
            conclusion: None,
            head_branch: None,
            merged: None,
        }
    }

    fn numbers(history: &EventHistory) -> Vec<u64> {
        history.iter().filter_map(|e| e.number).collect()
    }

    #[test]
    fn test_new_history_is_empty() {
        let history = EventHistory::new();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn test_newest_first() {
        let mut history = EventHistory::new();
        history.push(issue(1));
        history.push(issue(2));

        assert_eq!(numbers(&history), vec![2, 1]);
        assert_eq!(history.latest().and_then(|e| e.number), Some(2));
    }

    #[test]
    fn test_bounded_at_list_size() {
        let mut history = EventHistory::new();
        for n in 1..=10 {
            history.push(issue(n));
            assert!(history.len() <= EVENT_LIST_SIZE);
        }

        assert_eq!(history.len(), EVENT_LIST_SIZE);
        assert_eq!(numbers(&history), vec![10, 9, 8]);
    }

    #[test]
    fn test_push_returns_evicted_event() {
        let mut history = EventHistory::new();
        assert!(history.push(issue(1)).is_none());
        assert!(history.push(issue(2)).is_none());
        assert!(history.push(issue(3)).is_none());

        let evicted = history.push(issue(4));
        assert_eq!(evicted.and_then(|e| e.number), Some(1));
        assert_eq!(history.get(2).and_then(|e| e.number), Some(2));
    }
}
