//! Application state derived from poll outcomes.

use chrono::{DateTime, Local};
use mrm_feed::{FeedError, MergeRequest};
use tracing::warn;

/// Badge shown in the status bar while the last poll is failed.
const WARNING_BADGE: &str = "⚠️";

/// What the menu and status-bar badge are rendered from.
#[derive(Debug, Default, Clone)]
pub struct AppState {
    /// Merge requests from the most recent successful poll, in feed order.
    pub merge_requests: Vec<MergeRequest>,

    /// Wall-clock time of the most recent successful poll.
    pub last_updated: Option<DateTime<Local>>,

    /// Whether the most recent poll failed.
    pub fetch_failed: bool,
}

impl AppState {
    /// State as shown before the first poll.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text for the status-bar badge: the merge request count, or a
    /// warning glyph while the last poll is failed.
    #[must_use]
    pub fn badge(&self) -> String {
        if self.fetch_failed {
            WARNING_BADGE.to_string()
        } else {
            self.merge_requests.len().to_string()
        }
    }

    /// Text for the last-updated line: "Never" until the first successful
    /// poll, then the local wall-clock time of the latest one.
    #[must_use]
    pub fn last_updated_label(&self) -> String {
        match self.last_updated {
            Some(at) => at.format("%H:%M").to_string(),
            None => "Never".to_string(),
        }
    }

    /// Fold a poll outcome into the state.
    ///
    /// Success replaces the merge request list wholesale and stamps the
    /// time. Failure only raises the warning flag; the previous list and
    /// timestamp stay visible until a poll succeeds again.
    pub fn apply_poll(&mut self, outcome: Result<Vec<MergeRequest>, FeedError>) {
        match outcome {
            Ok(merge_requests) => {
                self.merge_requests = merge_requests;
                self.last_updated = Some(Local::now());
                self.fetch_failed = false;
            }
            Err(err) => {
                warn!("Poll failed: {err}");
                self.fetch_failed = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mr(title: &str) -> MergeRequest {
        MergeRequest::new(title, format!("https://gitlab.com/mr/{title}"))
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.badge(), "0");
        assert_eq!(state.last_updated_label(), "Never");
        assert!(state.merge_requests.is_empty());
        assert!(!state.fetch_failed);
    }

    #[test]
    fn test_successful_poll_updates_count_and_time() {
        let mut state = AppState::new();
        state.apply_poll(Ok(vec![mr("One"), mr("Two"), mr("Three")]));

        assert_eq!(state.badge(), "3");
        assert_ne!(state.last_updated_label(), "Never");
        assert!(!state.fetch_failed);
    }

    #[test]
    fn test_failed_poll_keeps_previous_results() {
        let mut state = AppState::new();
        state.apply_poll(Ok(vec![mr("One"), mr("Two")]));
        let stamped = state.last_updated;

        state.apply_poll(Err(FeedError::Network("connection refused".to_string())));

        assert_eq!(state.badge(), WARNING_BADGE);
        assert_eq!(state.merge_requests.len(), 2);
        assert_eq!(state.last_updated, stamped);
    }

    #[test]
    fn test_recovery_clears_warning() {
        let mut state = AppState::new();
        state.apply_poll(Err(FeedError::Network("timed out".to_string())));
        assert_eq!(state.badge(), WARNING_BADGE);

        state.apply_poll(Ok(vec![mr("Back")]));
        assert_eq!(state.badge(), "1");
        assert!(!state.fetch_failed);
    }

    #[test]
    fn test_poll_replaces_rather_than_merges() {
        let mut state = AppState::new();
        state.apply_poll(Ok(vec![mr("One"), mr("Two")]));
        state.apply_poll(Ok(vec![mr("Three")]));

        assert_eq!(state.badge(), "1");
        assert_eq!(state.merge_requests[0].title, "Three");
    }
}
