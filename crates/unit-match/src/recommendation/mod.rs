//! Criteria matching and ranking for the unit inventory.
//!
//! The module turns a client's stated preferences into a ranked list of
//! available units. [`ClientCriteria`] captures the preferences,
//! [`ScoringEngine`] grades a single unit against them, and
//! [`RecommendationService`] runs the whole catalog through the engine and
//! keeps the best results. HTTP access goes through
//! [`recommendation_router`].

pub mod domain;
pub mod router;
pub(crate) mod scoring;
pub mod service;
pub mod typology;

#[cfg(test)]
mod tests;

pub use domain::{BoundedRange, ClientCriteria, CriteriaInput, MatchResult, Recommendation};
pub use router::{recommendation_router, RecommendationRequest, RecommendationResponse};
pub use scoring::{ScoringConfig, ScoringEngine};
pub use service::{
    recommend_within, run_within, RecommendationError, RecommendationRun, RecommendationService,
};
pub use typology::{match_description, Typology, TypologyMatch};
