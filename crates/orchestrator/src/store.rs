//! # Result State Store
//!
//! Holds the renderable outcome of the most recent submission: the
//! restaurant list, the user feature profile and the loading/error flags.
//!
//! Every submission is numbered when it starts. A settling submission may
//! only write its outcome if its number is still the latest one handed out,
//! so an older request that resolves late can never overwrite a newer one.
//! The check and the write happen under the same `watch` lock.

use tokio::sync::watch;
use tracing::debug;

use catalog::Restaurant;
use request::UserFeatureProfile;

/// Monotonically increasing identifier of a submission
pub type SubmissionId = u64;

/// Message shown when the latest submission failed
pub const NO_RESULTS_MESSAGE: &str = "No recommendations found. Try again";

/// Snapshot of the store, as seen by the presentation layer
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultState {
    /// Submission this state belongs to (0 before the first submission)
    pub submission: SubmissionId,
    pub results: Vec<Restaurant>,
    /// Present only after a successful user-based submission
    pub user_profile: Option<UserFeatureProfile>,
    pub loading: bool,
    pub error: bool,
}

/// What the presentation layer should show for a state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultView<'a> {
    Loading,
    Failed,
    Results(&'a [Restaurant]),
    /// Settled without error and without restaurants (or nothing submitted)
    Empty,
}

impl ResultState {
    pub fn view(&self) -> ResultView<'_> {
        if self.loading {
            ResultView::Loading
        } else if self.error {
            ResultView::Failed
        } else if !self.results.is_empty() {
            ResultView::Results(&self.results)
        } else {
            ResultView::Empty
        }
    }
}

/// Final outcome of one submission, applied to the store in a single write
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settlement {
    pub results: Vec<Restaurant>,
    pub user_profile: Option<UserFeatureProfile>,
    pub error: bool,
}

impl Settlement {
    /// Outcome of a submission where a network call failed
    pub fn failed() -> Self {
        Self {
            results: Vec::new(),
            user_profile: None,
            error: true,
        }
    }
}

/// Shared store written by the orchestrator and watched by presentation.
#[derive(Debug)]
pub struct ResultStore {
    tx: watch::Sender<ResultState>,
}

impl ResultStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ResultState::default());
        Self { tx }
    }

    /// Receive every state transition from now on
    pub fn subscribe(&self) -> watch::Receiver<ResultState> {
        self.tx.subscribe()
    }

    /// Clone of the current state
    pub fn snapshot(&self) -> ResultState {
        self.tx.borrow().clone()
    }

    /// Start a new submission: bump the sequence number, set `loading`,
    /// clear `error` and drop the previous results and profile.
    pub fn begin(&self) -> SubmissionId {
        let mut id = 0;
        self.tx.send_modify(|state| {
            state.submission += 1;
            state.results.clear();
            state.user_profile = None;
            state.loading = true;
            state.error = false;
            id = state.submission;
        });
        debug!("Submission {} started", id);
        id
    }

    /// Apply a settled outcome if `id` is still the latest submission.
    ///
    /// Returns `false` (and leaves the store untouched) for stale outcomes.
    pub fn settle(&self, id: SubmissionId, settlement: Settlement) -> bool {
        self.tx.send_if_modified(|state| {
            if state.submission != id {
                return false;
            }
            state.results = settlement.results;
            state.user_profile = settlement.user_profile;
            state.error = settlement.error;
            state.loading = false;
            true
        })
    }
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}
