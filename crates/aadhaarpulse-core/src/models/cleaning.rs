//! Data-cleaning payloads and audit records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cap on how many corrections a log entry retains verbatim.
const CORRECTION_SAMPLE_LIMIT: usize = 100;

/// A pair of district labels flagged as potential duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictNamePair {
    pub district_a: String,
    pub district_b: String,
    /// String similarity in [0, 1]
    pub similarity: f64,
    /// Row count behind `district_a`
    #[serde(default)]
    pub rows_a: u64,
    /// Row count behind `district_b`
    #[serde(default)]
    pub rows_b: u64,
    /// Dominance of one spelling's count over the other:
    /// `max(rows) / max(1, min(rows))`
    #[serde(default)]
    pub count_ratio: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
}

/// Triage recommendation for a duplicate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    /// Count imbalance crosses the configured minimum ratio
    Review,
    /// Similar names with comparable counts
    Check,
}

/// Response envelope from the duplicate-district endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DuplicateReport {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub dataset: String,
    #[serde(default)]
    pub similarity_cutoff: f64,
    #[serde(default)]
    pub min_count_ratio: f64,
    #[serde(default)]
    pub potential_duplicates: Vec<DistrictNamePair>,
}

/// A single normalization applied while cleaning a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    #[serde(rename = "type")]
    pub kind: CorrectionKind,
    pub from: String,
    /// `None` when the value was dropped rather than rewritten
    pub to: Option<String>,
}

/// What kind of rewrite a correction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionKind {
    /// Numeric garbage where a state name was expected
    InvalidState,
    /// Known alternate spelling resolved via the alias table
    StateAlias,
    /// Typo corrected by fuzzy match against the canonical list
    StateFuzzy,
}

/// One entry of the cleaning audit log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningLogEntry {
    pub dataset: String,
    pub timestamp: DateTime<Utc>,
    pub rows_processed: u64,
    pub corrections_count: u64,
    /// First corrections only, capped so log entries stay bounded
    pub corrections_sample: Vec<Correction>,
}

impl CleaningLogEntry {
    /// Record a cleaning pass, stamping the current time.
    pub fn new(dataset: impl Into<String>, rows_processed: u64, corrections: &[Correction]) -> Self {
        Self {
            dataset: dataset.into(),
            timestamp: Utc::now(),
            rows_processed,
            corrections_count: corrections.len() as u64,
            corrections_sample: corrections
                .iter()
                .take(CORRECTION_SAMPLE_LIMIT)
                .cloned()
                .collect(),
        }
    }
}
