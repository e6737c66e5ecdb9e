//! Client-side state of one remote resource list.
//!
//! Each screen owns its own `ListState`; there is no cache shared between
//! screens, and every filter or page change refetches.

use crate::envelope::{ApiResult, Failure};
use crate::model::Page;
use crate::sequence::{RequestSequence, RequestToken};

/// What happened to a finished list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Failed,
    /// A newer request was issued meanwhile; the response was dropped.
    Stale,
}

#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub records: Vec<T>,
    pub total: u64,
    pub loading: bool,
    pub error: Option<Failure>,
    sequence: RequestSequence,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            total: 0,
            loading: false,
            error: None,
            sequence: RequestSequence::default(),
        }
    }
}

impl<T> ListState<T> {
    /// Marks the list as loading and returns the token the response must carry.
    pub fn begin_fetch(&mut self) -> RequestToken {
        self.loading = true;
        self.sequence.issue()
    }

    /// Applies a response. Failures keep the previous rows and record the error.
    pub fn finish_fetch(&mut self, token: RequestToken, result: ApiResult<Page<T>>) -> FetchOutcome {
        if !self.sequence.is_latest(token) {
            return FetchOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.records = page.data;
                self.total = page.total;
                self.error = None;
                FetchOutcome::Applied
            }
            Err(failure) => {
                self.error = Some(failure);
                FetchOutcome::Failed
            }
        }
    }
}

/// Write-in-progress signal. It keeps a second submit from being sent while
/// one is pending, but it is only a UI signal, not a lock.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SaveFlag {
    saving: bool,
}

impl SaveFlag {
    /// Returns `false` when a save is already running.
    pub fn try_begin(&mut self) -> bool {
        if self.saving {
            return false;
        }
        self.saving = true;
        true
    }

    pub fn finish(&mut self) {
        self.saving = false;
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(rows: &[u32], total: u64) -> ApiResult<Page<u32>> {
        Ok(Page {
            data: rows.to_vec(),
            total,
        })
    }

    #[test]
    fn loading_spans_the_request() {
        let mut list = ListState::default();
        let token = list.begin_fetch();
        assert!(list.loading);
        assert_eq!(list.finish_fetch(token, page(&[1, 2], 9)), FetchOutcome::Applied);
        assert!(!list.loading);
        assert_eq!(list.records, vec![1, 2]);
        assert_eq!(list.total, 9);
    }

    #[test]
    fn failure_keeps_rows_and_clears_loading() {
        let mut list = ListState::default();
        let token = list.begin_fetch();
        list.finish_fetch(token, page(&[4], 1));

        let token = list.begin_fetch();
        let outcome = list.finish_fetch(token, Err(Failure::unknown()));
        assert_eq!(outcome, FetchOutcome::Failed);
        assert!(!list.loading);
        assert_eq!(list.records, vec![4]);
        assert_eq!(list.error, Some(Failure::unknown()));

        let token = list.begin_fetch();
        list.finish_fetch(token, page(&[], 1));
        assert_eq!(list.error, None);
    }

    #[test]
    fn stale_response_cannot_overwrite_newer_data() {
        let mut list = ListState::default();
        let slow = list.begin_fetch();
        let fast = list.begin_fetch();
        assert_eq!(list.finish_fetch(fast, page(&[2], 1)), FetchOutcome::Applied);
        assert_eq!(list.finish_fetch(slow, page(&[1], 1)), FetchOutcome::Stale);
        assert_eq!(list.records, vec![2]);
    }

    #[test]
    fn stale_response_leaves_newer_request_loading() {
        let mut list: ListState<u32> = ListState::default();
        let slow = list.begin_fetch();
        let _fast = list.begin_fetch();
        list.finish_fetch(slow, page(&[1], 1));
        assert!(list.loading);
    }

    #[test]
    fn save_flag_rejects_double_submit() {
        let mut flag = SaveFlag::default();
        assert!(flag.try_begin());
        assert!(!flag.try_begin());
        flag.finish();
        assert!(!flag.is_saving());
        assert!(flag.try_begin());
    }
}
