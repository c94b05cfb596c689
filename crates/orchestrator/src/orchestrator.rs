//! # Recommendation Orchestrator
//!
//! This module sequences a single submission end to end:
//! 1. Build the request payload from the current input
//! 2. Open a new submission in the store (loading on, old outcome cleared)
//! 3. Send the payload to the mode-selected endpoint
//! 4. In user mode only, look up the user's features once step 3 resolved
//! 5. Trim the reserved feature entries
//! 6. Settle the submission in the store, unless a newer one was started
//!
//! Failures never escape `submit`: they are logged and surface only as the
//! store's `error` flag. There are no retries and no timeouts at this level.

use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tokio::sync::watch;
use tracing::{error, info, warn};

use rec_client::{ClientError, HttpRecommendationClient, RecommendationService, ServiceConfig};
use request::{InputState, RecommendationRequest, UserFeatureProfile};

use crate::store::{ResultState, ResultStore, Settlement, SubmissionId};

/// Reasons a submission ends in the failed state
#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error(transparent)]
    Service(#[from] ClientError),

    #[error("Recommendation service answered with an empty (null) body")]
    NullResponse,
}

/// Whether a settled submission's outcome reached the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Applied,
    /// A newer submission was started before this one settled
    Stale,
}

/// Main orchestrator: turns input into service calls and store updates.
///
/// Cloning shares the service and the store, so overlapping submissions from
/// clones still race on the same sequence numbers.
#[derive(Clone)]
pub struct RecommendationOrchestrator {
    service: Arc<dyn RecommendationService>,
    store: Arc<ResultStore>,
}

impl RecommendationOrchestrator {
    /// Create an orchestrator over any service implementation
    pub fn new(service: Arc<dyn RecommendationService>) -> Self {
        Self {
            service,
            store: Arc::new(ResultStore::new()),
        }
    }

    /// Create an orchestrator talking HTTP to the configured service
    pub fn from_config(config: ServiceConfig) -> Result<Self, ClientError> {
        let client = HttpRecommendationClient::new(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    /// Watch every state transition of the store
    pub fn subscribe(&self) -> watch::Receiver<ResultState> {
        self.store.subscribe()
    }

    pub fn snapshot(&self) -> ResultState {
        self.store.snapshot()
    }

    /// Run one submission for the given input.
    ///
    /// The store is reset before the first network call is issued. The
    /// outcome is written only if no newer submission started meanwhile.
    pub async fn submit(&self, input: &InputState) -> Delivery {
        let request = RecommendationRequest::from_input(input);
        let id = self.store.begin();
        let start_time = Instant::now();
        info!(
            "Submission {} started ({:?}, n={})",
            id,
            request.mode(),
            request.result_count()
        );

        let settlement = match self.execute(id, &request).await {
            Ok(settlement) => settlement,
            Err(e) => {
                error!("Submission {} failed: {}", id, e);
                Settlement::failed()
            }
        };
        let failed = settlement.error;
        let result_count = settlement.results.len();

        if self.store.settle(id, settlement) {
            info!(
                "Submission {} settled in {:.2?}: {} restaurants, error={}",
                id,
                start_time.elapsed(),
                result_count,
                failed
            );
            Delivery::Applied
        } else {
            warn!(
                "Discarding stale outcome of submission {} after {:.2?}",
                id,
                start_time.elapsed()
            );
            Delivery::Stale
        }
    }

    /// Issue the primary call and, for user requests, the dependent feature
    /// lookup. Nothing is written to the store here.
    async fn execute(
        &self,
        id: SubmissionId,
        request: &RecommendationRequest,
    ) -> Result<Settlement, SubmissionError> {
        let primary = self
            .service
            .recommend(request)
            .await?
            .ok_or(SubmissionError::NullResponse)?;

        let error_reported = primary.error_reported();
        if error_reported {
            warn!("Service reported an error for submission {}", id);
        }

        let user_profile = match request {
            RecommendationRequest::User(user) => {
                let raw = self.service.user_features(&user.user_id).await?;
                let profile = UserFeatureProfile::from_raw(raw.user_name, raw.user_features);
                info!(
                    "Fetched {} displayable features for user {:?}",
                    profile.features.len(),
                    user.user_id
                );
                Some(profile)
            }
            RecommendationRequest::Tags(_) => None,
        };

        Ok(Settlement {
            results: primary.into_restaurants(),
            user_profile,
            error: error_reported,
        })
    }
}
