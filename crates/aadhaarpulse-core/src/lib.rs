//! AadhaarPulse Core Analytics
//!
//! Pure computation layer behind the AadhaarPulse dashboard. The backend
//! aggregation API does the heavy lifting; this crate owns the one piece of
//! real logic the dashboard repeats everywhere: turning raw activity counts
//! into comparable demand figures.
//!
//! # Pipeline
//!
//! ```text
//! API JSON (flat state/district or nested national shape)
//!        │
//!        ▼
//!   RawRecord ── normalize ──► ServiceRecord
//!                                   │
//!                          weighted service load
//!                   ┌───────────────┼───────────────┐
//!                   ▼               ▼               ▼
//!            DemandBucket     log intensity    station estimate
//!           (median / Q3)      [0.2, 1.0]     interpretation
//! ```
//!
//! District label/count pairs from the data-cleaning endpoint flow through
//! [`cleaning`] independently: duplicate detection, severity tiers, and
//! state-name normalization.
//!
//! # Modules
//!
//! - [`models`]: wire shapes and canonical records
//! - [`demand`]: service-load weighting, classification, intensity, stations
//! - [`cleaning`]: duplicate-district detection and state normalization
//!
//! Every function in [`demand`] and [`cleaning`] is pure and total; the
//! only fallible surface is payload parsing below.

pub mod cleaning;
pub mod demand;
pub mod models;

// Re-export commonly used types
pub use cleaning::{RatioSeverity, StateNormalizer};
pub use demand::{
    classify_demand, interpret_station_estimate, log_intensity, service_load, AgeBandWeights,
    DemandAnalyzer, DemandBucket, DemandThresholds, StationInterpretation, StationSummary,
};
pub use models::{
    DistrictNamePair, DuplicateReport, RawRecord, ServiceRecord, StationEstimate,
    StationEstimateResponse,
};

use thiserror::Error;

/// Errors surfaced at the payload-ingestion boundary.
#[derive(Debug, Error)]
pub enum PulseError {
    #[error("invalid payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

/// Parse a collection of aggregate records (state or district shape).
pub fn parse_records(json: &str) -> Result<Vec<RawRecord>, PulseError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse the national aggregate (nested shape).
pub fn parse_national(json: &str) -> Result<RawRecord, PulseError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a station-estimate response envelope.
pub fn parse_station_estimates(json: &str) -> Result<StationEstimateResponse, PulseError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a duplicate-district report.
pub fn parse_duplicate_report(json: &str) -> Result<DuplicateReport, PulseError> {
    Ok(serde_json::from_str(json)?)
}
