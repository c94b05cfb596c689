//! Core domain types for the recommendation service.
//!
//! This module defines the records the service sends back:
//! - Restaurant records returned by both recommendation endpoints
//! - The raw user feature payload returned by the feature lookup
//! - `PrimaryResponse`, which models the two shapes a recommendation
//!   endpoint may answer with (a list, or an object carrying an error marker)

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a restaurant (opaque string assigned by the service)
pub type BusinessId = String;

// =============================================================================
// Restaurant Records
// =============================================================================

/// A single recommended restaurant.
///
/// Only the fields the presentation layer renders are modelled; any extra
/// fields the service includes are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub business_id: BusinessId,
    pub name: String,
    #[serde(default)]
    pub full_address: String,
    /// Comma separated category list, exactly as the service formats it
    #[serde(default)]
    pub categories: String,
    pub avg_rating: f64,
    /// Integer count; whole floats such as `12.0` are accepted too
    #[serde(deserialize_with = "deserialize_count")]
    pub review_count: u64,
}

/// Accept a count encoded either as an integer or as a whole, non-negative
/// float (dataframe-backed services often emit `12.0`).
fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Int(u64),
        Float(f64),
    }

    match Count::deserialize(deserializer)? {
        Count::Int(n) => Ok(n),
        Count::Float(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => Ok(f as u64),
        Count::Float(f) => Err(de::Error::custom(format!("invalid review count: {}", f))),
    }
}

impl Restaurant {
    /// Average rating rounded to two decimal places for display
    pub fn display_rating(&self) -> f64 {
        (self.avg_rating * 100.0).round() / 100.0
    }
}

// =============================================================================
// User Features
// =============================================================================

/// Raw body of the feature lookup endpoint.
///
/// The leading entries of `user_features` are reserved by the service and are
/// trimmed before display (see the `request` crate). The list is required; a
/// body without it is not a usable lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserFeatures {
    #[serde(default)]
    pub user_name: String,
    pub user_features: Vec<String>,
}

// =============================================================================
// Primary Endpoint Response
// =============================================================================

/// Object body returned instead of a list when the service has nothing to
/// recommend or failed to process the request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceMarker {
    #[serde(default)]
    pub error: Value,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Body of a recommendation endpoint.
///
/// A `null` body is represented one level up as `Option::<PrimaryResponse>::None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PrimaryResponse {
    Restaurants(Vec<Restaurant>),
    Marker(ServiceMarker),
}

impl PrimaryResponse {
    /// True when the body is an object whose `error` field is truthy
    pub fn error_reported(&self) -> bool {
        match self {
            PrimaryResponse::Restaurants(_) => false,
            PrimaryResponse::Marker(marker) => is_truthy(&marker.error),
        }
    }

    /// Consume the response, yielding the restaurant list.
    ///
    /// An object body carries no restaurants and yields an empty list.
    pub fn into_restaurants(self) -> Vec<Restaurant> {
        match self {
            PrimaryResponse::Restaurants(restaurants) => restaurants,
            PrimaryResponse::Marker(_) => Vec::new(),
        }
    }
}

/// JSON truthiness: `null`, `false`, numeric zero and `""` are falsy; every
/// array and object is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
