//! Service location and HTTP settings, resolved once at startup.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{ClientError, Result};

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Path of the tag-based recommendation endpoint, relative to the base URL
pub const TAGS_PATH: &str = "recommend_by_tags";
/// Path of the user-based recommendation endpoint
pub const USER_PATH: &str = "recommend";
/// Path of the user feature lookup
pub const FEATURES_PATH: &str = "user_features";

/// Where the recommendation service lives and how to talk to it.
///
/// Deserialization goes through `ServiceConfig::new`, so a loaded base URL
/// is normalized exactly like one passed on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawServiceConfig")]
pub struct ServiceConfig {
    pub base_url: Url,
    /// Per-request timeout in seconds. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

/// Unvalidated shape of a `ServiceConfig` as found in config sources
#[derive(Debug, Deserialize)]
struct RawServiceConfig {
    base_url: String,
    #[serde(default)]
    timeout_secs: Option<u64>,
}

impl TryFrom<RawServiceConfig> for ServiceConfig {
    type Error = ClientError;

    fn try_from(raw: RawServiceConfig) -> Result<Self> {
        Ok(ServiceConfig::new(&raw.base_url)?.with_timeout_secs(raw.timeout_secs))
    }
}

impl ServiceConfig {
    /// Parse a base URL. A base with a path prefix (`http://host/api`) keeps
    /// that prefix for every endpoint.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut url = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        if url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(format!(
                "{}: not a hierarchical URL",
                base_url
            )));
        }
        // Url::join replaces the last segment unless the path ends in '/'
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self {
            base_url: url,
            timeout_secs: None,
        })
    }

    pub fn with_timeout_secs(mut self, secs: Option<u64>) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Resolve an endpoint path against the base URL
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}{}: {}", self.base_url, path, e)))
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(&format!("{}/", DEFAULT_BASE_URL))
                .expect("default base URL is valid"),
            timeout_secs: None,
        }
    }
}
