//! Feature post-processing for the user feature lookup.
//!
//! The service prefixes every feature list with entries reserved for its own
//! bookkeeping. They are dropped before the list reaches the presentation
//! layer.

/// Number of leading entries the service reserves in a feature list
pub const RESERVED_FEATURE_COUNT: usize = 2;

/// A user's display name and their displayable features
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFeatureProfile {
    pub user_name: String,
    pub features: Vec<String>,
}

impl UserFeatureProfile {
    /// Build a profile from the raw lookup fields, trimming reserved entries
    pub fn from_raw(user_name: String, raw_features: Vec<String>) -> Self {
        Self {
            user_name,
            features: trim_reserved_features(raw_features),
        }
    }
}

/// Drop the reserved leading entries.
///
/// Lists with no more than `RESERVED_FEATURE_COUNT` entries are returned
/// unchanged.
pub fn trim_reserved_features(mut features: Vec<String>) -> Vec<String> {
    if features.len() > RESERVED_FEATURE_COUNT {
        features.drain(..RESERVED_FEATURE_COUNT);
    }
    features
}
