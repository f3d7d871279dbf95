//! Recommendation engine matching residential sales inventory to buyer criteria.
//!
//! Inventory arrives as per-project feeds with inconsistent nesting and field
//! conventions; the [`inventory`] module normalizes them into canonical units,
//! the [`recommendation`] module scores and ranks those units against a
//! buyer's criteria, and the [`report`] module renders the ranked list into
//! summaries, outreach messages, and per-project statistics.

pub mod config;
pub mod error;
pub mod inventory;
pub mod recommendation;
pub mod report;
pub mod telemetry;
