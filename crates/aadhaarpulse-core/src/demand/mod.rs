//! Service-load demand engine.
//!
//! Pipeline: raw API record → normalize → weighted load → {bucket, intensity}

mod classifier;
mod intensity;
mod stations;
mod weights;

pub use classifier::*;
pub use intensity::*;
pub use stations::*;
pub use weights::*;

use crate::models::RawRecord;

/// Configured analyzer driving the full demand pipeline over a collection.
///
/// Holds the weighting policy as injected configuration instead of the
/// per-page constants the dashboard once scattered around.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemandAnalyzer {
    weights: AgeBandWeights,
}

/// Per-collection demand analysis; all vectors are positional with the
/// input records.
#[derive(Debug, Clone, PartialEq)]
pub struct DemandAnalysis {
    pub loads: Vec<f64>,
    pub buckets: Vec<DemandBucket>,
    pub intensities: Vec<f64>,
    pub thresholds: DemandThresholds,
    pub max_load: f64,
}

impl DemandAnalyzer {
    /// Analyzer with the default policy weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer with custom weights.
    pub fn with_weights(weights: AgeBandWeights) -> Self {
        Self { weights }
    }

    /// Weighted load for one raw record, either wire shape.
    pub fn load(&self, record: &RawRecord) -> f64 {
        self.weights.service_load(&record.normalize())
    }

    /// Loads, thresholds, buckets, and map intensities for a collection.
    pub fn analyze(&self, records: &[RawRecord]) -> DemandAnalysis {
        let loads: Vec<f64> = records.iter().map(|r| self.load(r)).collect();
        let thresholds = DemandThresholds::from_loads(&loads);
        let max_load = loads.iter().copied().fold(0.0_f64, f64::max);

        let buckets = loads.iter().map(|l| thresholds.bucket(*l)).collect();
        let intensities = loads.iter().map(|l| log_intensity(*l, max_load)).collect();

        DemandAnalysis {
            loads,
            buckets,
            intensities,
            thresholds,
            max_load,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(age_0_5: f64) -> RawRecord {
        RawRecord {
            age_0_5: Some(age_0_5),
            ..Default::default()
        }
    }

    #[test]
    fn test_analyze_collection() {
        let analyzer = DemandAnalyzer::new();
        let records = [flat(100.0), flat(50.0), flat(10.0)];
        let analysis = analyzer.analyze(&records);

        assert_eq!(analysis.loads, vec![120.0, 60.0, 12.0]);
        assert_eq!(analysis.max_load, 120.0);
        assert_eq!(analysis.thresholds.median, 60.0);
        assert_eq!(analysis.thresholds.q3, 120.0);
        assert_eq!(
            analysis.buckets,
            vec![DemandBucket::High, DemandBucket::Medium, DemandBucket::Low]
        );
        assert_eq!(analysis.intensities[0], 1.0);
        assert!(analysis.intensities[2] < analysis.intensities[1]);
    }

    #[test]
    fn test_analyze_empty() {
        let analysis = DemandAnalyzer::new().analyze(&[]);
        assert!(analysis.loads.is_empty());
        assert!(analysis.buckets.is_empty());
        assert_eq!(analysis.max_load, 0.0);
    }

    #[test]
    fn test_load_on_nested_record() {
        use crate::models::EnrolmentCounts;

        let analyzer = DemandAnalyzer::new();
        let nested = RawRecord {
            enrolment: Some(EnrolmentCounts {
                age_0_5: Some(100.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(analyzer.load(&nested), 120.0);
    }
}
