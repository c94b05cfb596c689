//! # Catalog Crate
//!
//! Domain records exchanged with the restaurant recommendation service and the
//! fixed reference lists used to populate selection affordances.
//!
//! ## Main Components
//!
//! - **types**: Restaurant records, the user feature payload and the two shapes
//!   the recommendation endpoints may answer with
//! - **reference**: Valid city names and category tags
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::PrimaryResponse;
//!
//! let body: Option<PrimaryResponse> = serde_json::from_str(r#"{"error": "no results"}"#)?;
//! assert!(body.unwrap().error_reported());
//! ```

// Public modules
pub mod reference;
pub mod types;

// Re-export commonly used types for convenience
pub use reference::{CATEGORIES, CITIES};
pub use types::{
    // Type aliases
    BusinessId,
    // Records
    Restaurant,
    UserFeatures,
    // Endpoint responses
    PrimaryResponse,
    ServiceMarker,
    // Helpers
    is_truthy,
};
