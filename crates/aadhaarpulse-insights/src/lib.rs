//! AadhaarPulse Insights
//!
//! Deterministic, explainable insight generation over aggregated Aadhaar
//! datasets.
//!
//! Constraints:
//! - No ML, no external APIs
//! - Pure functions over already-fetched aggregates
//! - Auditable, policy-grade explanations
//!
//! The engine consumes the same [`aadhaarpulse_core::models::RawRecord`]
//! aggregates the dashboard pages do and produces a serializable
//! [`NationalInsights`] bundle: service composition, demand concentration,
//! state activity spread, capacity planning signal, quarter-over-quarter
//! trend, and risk flags.

mod engine;
mod types;

pub use engine::generate_national_insights;
pub use types::*;
