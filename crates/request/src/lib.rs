//! Input handling for restaurant recommendation requests.
//!
//! This crate provides:
//! - `InputState` and `Mode`, the raw values entered by the user
//! - `RecommendationRequest`, the payload built from them
//! - Feature post-processing for the user feature lookup
//!
//! ## Example Usage
//! ```ignore
//! use request::{InputState, Mode, RecommendationRequest};
//!
//! let mut input = InputState::new();
//! input.set_tags_text(" indian,  mexican ,thai");
//! input.set_city_name("Tempe");
//!
//! let request = RecommendationRequest::from_input(&input);
//! // {"n":5,"tags":"indian, mexican, thai","city_name":"Tempe"}
//! ```

pub mod features;
pub mod input;
pub mod payload;

// Re-export main types
pub use features::{RESERVED_FEATURE_COUNT, UserFeatureProfile, trim_reserved_features};
pub use input::{DEFAULT_RESULT_COUNT, InputError, InputState, Mode};
pub use payload::{RecommendationRequest, TagRequest, UserRequest, normalize_tags};
