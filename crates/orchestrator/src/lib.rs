//! Orchestrator crate for the restaurant recommendation client.
//!
//! This crate contains the request sequencer that drives the recommendation
//! service and the store the presentation layer renders from.

pub mod orchestrator;
pub mod store;

pub use orchestrator::{Delivery, RecommendationOrchestrator, SubmissionError};
pub use store::{
    NO_RESULTS_MESSAGE, ResultState, ResultStore, ResultView, Settlement, SubmissionId,
};
