//! Payload builder: turns `InputState` into the body of a recommendation
//! request.
//!
//! The request is a tagged union, so a tag request can never carry a user id
//! and a user request can never carry tags or a city.

use serde::Serialize;
use tracing::debug;

use crate::input::{InputState, Mode};

/// Separator used when rejoining normalized tags
pub const TAG_SEPARATOR: &str = ", ";

/// Body of a tag-based recommendation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagRequest {
    pub n: i64,
    pub tags: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
}

/// Body of a user-based recommendation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRequest {
    pub n: i64,
    pub user_id: String,
}

/// A request body for one of the two recommendation endpoints.
///
/// Serializes as the inner struct, with no variant tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecommendationRequest {
    Tags(TagRequest),
    User(UserRequest),
}

impl RecommendationRequest {
    /// Build the request body for the current mode.
    ///
    /// Never fails: blank tags or a blank user id still produce a request,
    /// and the service decides what to do with it.
    pub fn from_input(input: &InputState) -> Self {
        let n = input.result_count();
        let request = match input.mode() {
            Mode::TagBased => {
                let city = input.city_name().trim();
                RecommendationRequest::Tags(TagRequest {
                    n,
                    tags: normalize_tags(input.tags_text()),
                    city_name: (!city.is_empty()).then(|| city.to_string()),
                })
            }
            Mode::UserBased => RecommendationRequest::User(UserRequest {
                n,
                user_id: input.user_id().to_string(),
            }),
        };
        debug!("Built request payload: {:?}", request);
        request
    }

    pub fn mode(&self) -> Mode {
        match self {
            RecommendationRequest::Tags(_) => Mode::TagBased,
            RecommendationRequest::User(_) => Mode::UserBased,
        }
    }

    pub fn result_count(&self) -> i64 {
        match self {
            RecommendationRequest::Tags(req) => req.n,
            RecommendationRequest::User(req) => req.n,
        }
    }
}

impl From<&InputState> for RecommendationRequest {
    fn from(input: &InputState) -> Self {
        RecommendationRequest::from_input(input)
    }
}

/// Split on commas, trim every segment and rejoin with `", "`.
///
/// Empty segments are kept, so `"a,,b"` becomes `"a, , b"`.
pub fn normalize_tags(text: &str) -> String {
    text.split(',')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(TAG_SEPARATOR)
}
