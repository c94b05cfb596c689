//! HTTP client for the restaurant recommendation service.
//!
//! This crate provides a Rust client for the three endpoints the
//! recommendation service exposes. It handles:
//! - Resolving endpoint URLs from an injected `ServiceConfig`
//! - Posting request payloads as JSON to the mode-selected endpoint
//! - Fetching a user's feature list
//! - Decoding JSON bodies into catalog types
//!
//! The orchestrator talks to the service through the `RecommendationService`
//! trait so that tests can substitute scripted implementations.

pub mod config;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use catalog::{PrimaryResponse, UserFeatures};
use request::RecommendationRequest;

pub use config::{DEFAULT_BASE_URL, FEATURES_PATH, ServiceConfig, TAGS_PATH, USER_PATH};

/// Query parameter naming the user in a feature lookup
pub const USER_QUERY_PARAM: &str = "user_index";

/// Errors that can occur when talking to the recommendation service
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid service URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Request to recommendation service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response from {endpoint}: {reason}")]
    InvalidResponse { endpoint: String, reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ClientError>;

/// The calls the orchestrator needs from the recommendation service.
#[async_trait]
pub trait RecommendationService: Send + Sync {
    /// Send a request to the endpoint matching its mode.
    ///
    /// Returns `Ok(None)` when the service answered with a JSON `null`.
    async fn recommend(&self, request: &RecommendationRequest) -> Result<Option<PrimaryResponse>>;

    /// Look up the display name and raw feature list of a user
    async fn user_features(&self, user_id: &str) -> Result<UserFeatures>;
}

/// reqwest-backed implementation of `RecommendationService`.
#[derive(Clone)]
pub struct HttpRecommendationClient {
    http: Client,
    config: ServiceConfig,
}

impl HttpRecommendationClient {
    /// Build a client for the configured service.
    ///
    /// No connection is made until the first request.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        info!("Recommendation service at {}", config.base_url);
        Ok(Self { http, config })
    }

    /// Get the configuration this client was built with.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

#[async_trait]
impl RecommendationService for HttpRecommendationClient {
    async fn recommend(&self, request: &RecommendationRequest) -> Result<Option<PrimaryResponse>> {
        let path = match request {
            RecommendationRequest::Tags(_) => TAGS_PATH,
            RecommendationRequest::User(_) => USER_PATH,
        };
        let url = self.config.endpoint(path)?;
        debug!("POST {}", url);

        let response = self.http.post(url).json(request).send().await.map_err(|e| {
            error!("HTTP error while requesting recommendations: {}", e);
            ClientError::Transport(e)
        })?;

        decode_json(response).await
    }

    async fn user_features(&self, user_id: &str) -> Result<UserFeatures> {
        let url = self.config.endpoint(FEATURES_PATH)?;
        debug!("GET {} ({}={})", url, USER_QUERY_PARAM, user_id);

        let response = self
            .http
            .get(url)
            .query(&[(USER_QUERY_PARAM, user_id)])
            .send()
            .await
            .map_err(|e| {
                error!("HTTP error while fetching user features: {}", e);
                ClientError::Transport(e)
            })?;

        decode_json(response).await
    }
}

/// Decode a JSON body whatever the status code.
///
/// The service reports "nothing found" as a JSON object on non-2xx statuses,
/// so the status alone does not decide success.
async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let endpoint = response.url().path().to_string();
    let status = response.status();
    if !status.is_success() {
        warn!("{} answered with status {}", endpoint, status);
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| {
        error!("Undecodable body from {}: {}", endpoint, e);
        ClientError::InvalidResponse {
            endpoint,
            reason: e.to_string(),
        }
    })
}
