//! Saved Jobs List - State
//!
//! Screen state and its transitions, free of signals and I/O so every
//! outcome of fetch/remove can be exercised directly.

use contracts::domain::saved_job::SavedJob;
use contracts::shared::ids::JobId;

use super::card::JobCardModel;
use crate::shared::error::ApiError;
use crate::shared::notifications::{NotificationKind, NotificationQueue};

pub const REMOVED_MESSAGE: &str = "Job removed";
pub const REMOVE_FAILED_MESSAGE: &str = "Error removing job. Please try again later.";

/// What the list area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    /// Startup has not settled yet; nothing is rendered.
    Hidden,
    /// No saved jobs.
    Empty,
    Cards(Vec<JobCardModel>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavedJobsState {
    pub loading: bool,
    pub jobs: Vec<SavedJob>,
    pub notifications: NotificationQueue,
}

impl SavedJobsState {
    pub fn new() -> Self {
        Self {
            loading: true,
            jobs: Vec::new(),
            notifications: NotificationQueue::new(),
        }
    }

    /// Replace the list with a fetched one. A failed fetch changes nothing.
    pub fn apply_fetch(&mut self, result: Result<Vec<SavedJob>, ApiError>) {
        if let Ok(jobs) = result {
            self.jobs = jobs;
        }
    }

    pub fn finish_startup(&mut self) {
        self.loading = false;
    }

    /// Apply the outcome of a delete request for `job_id`.
    pub fn apply_remove(&mut self, job_id: &JobId, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.jobs.retain(|job| &job.id != job_id);
                self.notifications
                    .push(REMOVED_MESSAGE, NotificationKind::Success);
            }
            Err(_) => {
                self.notifications
                    .push(REMOVE_FAILED_MESSAGE, NotificationKind::Error);
            }
        }
    }

    pub fn dismiss(&mut self, notification_id: u64) -> bool {
        self.notifications.dismiss(notification_id)
    }

    pub fn listing(&self) -> Listing {
        if self.loading {
            Listing::Hidden
        } else if self.jobs.is_empty() {
            Listing::Empty
        } else {
            Listing::Cards(self.jobs.iter().map(JobCardModel::from).collect())
        }
    }
}

impl Default for SavedJobsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs(ids: &[&str]) -> Vec<SavedJob> {
        ids.iter().map(|id| SavedJob::with_id(*id)).collect()
    }

    fn loaded(ids: &[&str]) -> SavedJobsState {
        let mut state = SavedJobsState::new();
        state.apply_fetch(Ok(jobs(ids)));
        state.finish_startup();
        state
    }

    fn card_count(state: &SavedJobsState) -> usize {
        match state.listing() {
            Listing::Cards(cards) => cards.len(),
            _ => 0,
        }
    }

    #[test]
    fn test_nothing_rendered_while_loading() {
        let mut state = SavedJobsState::new();
        state.apply_fetch(Ok(jobs(&["1", "2"])));
        assert_eq!(state.listing(), Listing::Hidden);
    }

    #[test]
    fn test_card_count_matches_fetched_records() {
        for n in [1usize, 2, 7] {
            let ids: Vec<String> = (0..n).map(|i| i.to_string()).collect();
            let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
            assert_eq!(card_count(&loaded(&refs)), n);
        }
        assert_eq!(loaded(&[]).listing(), Listing::Empty);
    }

    #[test]
    fn test_fetch_replaces_list_verbatim() {
        let mut state = loaded(&["1", "2", "3"]);
        state.apply_fetch(Ok(jobs(&["9"])));
        assert_eq!(state.jobs, jobs(&["9"]));
    }

    #[test]
    fn test_failed_fetch_keeps_list_and_stays_silent() {
        let mut state = loaded(&["1", "2"]);
        state.apply_fetch(Err(ApiError::Status(500)));
        assert_eq!(state.jobs, jobs(&["1", "2"]));
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_failed_fetch_still_clears_loading() {
        let mut state = SavedJobsState::new();
        state.apply_fetch(Err(ApiError::Network("offline".into())));
        state.finish_startup();
        assert!(!state.loading);
        assert_eq!(state.listing(), Listing::Empty);
    }

    #[test]
    fn test_successful_remove() {
        let mut state = loaded(&["1", "2", "3"]);
        state.apply_remove(&JobId::new("2"), Ok(()));

        assert_eq!(state.jobs.len(), 2);
        assert!(state.jobs.iter().all(|job| job.id.as_str() != "2"));
        let last = state.notifications.iter().last().unwrap();
        assert_eq!(last.kind, NotificationKind::Success);
        assert_eq!(last.message, REMOVED_MESSAGE);
    }

    #[test]
    fn test_failed_remove_keeps_list() {
        let mut state = loaded(&["1", "2", "3"]);
        state.apply_remove(&JobId::new("2"), Err(ApiError::Status(404)));

        assert_eq!(state.jobs, jobs(&["1", "2", "3"]));
        assert_eq!(state.notifications.len(), 1);
        let last = state.notifications.iter().last().unwrap();
        assert_eq!(last.kind, NotificationKind::Error);
        assert_eq!(last.message, REMOVE_FAILED_MESSAGE);
    }

    #[test]
    fn test_concurrent_removes_of_distinct_jobs() {
        let mut state = loaded(&["1", "2", "3"]);
        state.apply_remove(&JobId::new("3"), Ok(()));
        state.apply_remove(&JobId::new("1"), Ok(()));
        assert_eq!(state.jobs, jobs(&["2"]));
        assert_eq!(state.notifications.len(), 2);
    }

    #[test]
    fn test_duplicate_remove_does_not_drop_other_jobs() {
        let mut state = loaded(&["1", "2"]);
        state.apply_remove(&JobId::new("1"), Ok(()));
        state.apply_remove(&JobId::new("1"), Ok(()));
        assert_eq!(state.jobs, jobs(&["2"]));
    }

    #[test]
    fn test_dismiss_removes_only_that_notification() {
        let mut state = loaded(&["1", "2", "3"]);
        state.apply_remove(&JobId::new("1"), Ok(()));
        state.apply_remove(&JobId::new("9"), Err(ApiError::Status(500)));
        state.apply_remove(&JobId::new("2"), Ok(()));

        let ids: Vec<u64> = state.notifications.iter().map(|n| n.id).collect();
        assert!(state.dismiss(ids[1]));

        let kinds: Vec<NotificationKind> =
            state.notifications.iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NotificationKind::Success, NotificationKind::Success]);
        let remaining: Vec<u64> = state.notifications.iter().map(|n| n.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2]]);
    }
}
