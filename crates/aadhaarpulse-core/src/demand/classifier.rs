//! Relative demand classification against a collection's load distribution.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::weights::service_load;
use crate::models::ServiceRecord;

/// Relative demand tier of a region within a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DemandBucket {
    Low,
    Medium,
    High,
}

/// Median and third-quartile load thresholds for a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DemandThresholds {
    pub median: f64,
    pub q3: f64,
}

impl DemandThresholds {
    /// Index-based thresholds over the positive loads in a collection.
    ///
    /// Sorts the positive loads ascending and picks `loads[n / 2]` and
    /// `loads[n * 3 / 4]`. These are approximate percentiles, not
    /// interpolated quantiles, and skew for small `n`; the dashboard has
    /// always classified this way. With no positive loads both thresholds
    /// are 0, which classifies everything as [`DemandBucket::High`].
    pub fn from_loads(loads: &[f64]) -> Self {
        let mut positive: Vec<f64> = loads.iter().copied().filter(|l| *l > 0.0).collect();
        positive.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        if positive.is_empty() {
            return Self::default();
        }

        let n = positive.len();
        Self {
            median: positive[n / 2],
            q3: positive[n * 3 / 4],
        }
    }

    /// Bucket for a single load against these thresholds.
    pub fn bucket(&self, load: f64) -> DemandBucket {
        if load < self.median {
            DemandBucket::Low
        } else if load < self.q3 {
            DemandBucket::Medium
        } else {
            DemandBucket::High
        }
    }
}

/// Classify every record relative to the whole collection.
///
/// Positional: `result[i]` is the bucket for `records[i]`. Thresholds come
/// from the positive loads only, but every record, including zero-load
/// ones, receives a bucket. Empty input yields an empty result.
pub fn classify_demand(records: &[ServiceRecord]) -> Vec<DemandBucket> {
    let loads: Vec<f64> = records.iter().map(service_load).collect();
    let thresholds = DemandThresholds::from_loads(&loads);
    loads.iter().map(|l| thresholds.bucket(*l)).collect()
}
