//! Age-band service-load weighting.
//!
//! Policy weights:
//! - Enrolment 0-5: 1.2 (biometric capture is hardest, repeat visits common)
//! - Enrolment 5-17: 1.1
//! - Enrolment 18+: 1.0
//! - Biometric update 5-17: 0.8
//! - Biometric update 17+: 1.0
//! - Demographic update 5-17: 0.6
//! - Demographic update 17+: 0.7

use crate::models::ServiceRecord;

/// Weight applied to each activity band when computing service load.
///
/// An injectable configuration value; [`AgeBandWeights::default`] carries
/// the dashboard's published policy weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeBandWeights {
    pub age_0_5: f64,
    pub age_5_17: f64,
    pub age_18_greater: f64,
    pub bio_age_5_17: f64,
    pub bio_age_17_: f64,
    pub demo_age_5_17: f64,
    pub demo_age_17_: f64,
}

impl Default for AgeBandWeights {
    fn default() -> Self {
        Self {
            age_0_5: 1.2,
            age_5_17: 1.1,
            age_18_greater: 1.0,
            bio_age_5_17: 0.8,
            bio_age_17_: 1.0,
            demo_age_5_17: 0.6,
            demo_age_17_: 0.7,
        }
    }
}

impl AgeBandWeights {
    /// Weighted service load for a single record.
    ///
    /// Pure and total: an all-zero record yields exactly 0.
    pub fn service_load(&self, record: &ServiceRecord) -> f64 {
        self.age_0_5 * record.age_0_5
            + self.age_5_17 * record.age_5_17
            + self.age_18_greater * record.age_18_greater
            + self.bio_age_5_17 * record.bio_age_5_17
            + self.bio_age_17_ * record.bio_age_17_
            + self.demo_age_5_17 * record.demo_age_5_17
            + self.demo_age_17_ * record.demo_age_17_
    }
}

/// Service load under the default policy weights.
pub fn service_load(record: &ServiceRecord) -> f64 {
    AgeBandWeights::default().service_load(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_is_zero() {
        assert_eq!(service_load(&ServiceRecord::default()), 0.0);
    }

    #[test]
    fn test_each_band_weight() {
        let cases = [
            (ServiceRecord { age_0_5: 1.0, ..Default::default() }, 1.2),
            (ServiceRecord { age_5_17: 1.0, ..Default::default() }, 1.1),
            (ServiceRecord { age_18_greater: 1.0, ..Default::default() }, 1.0),
            (ServiceRecord { bio_age_5_17: 1.0, ..Default::default() }, 0.8),
            (ServiceRecord { bio_age_17_: 1.0, ..Default::default() }, 1.0),
            (ServiceRecord { demo_age_5_17: 1.0, ..Default::default() }, 0.6),
            (ServiceRecord { demo_age_17_: 1.0, ..Default::default() }, 0.7),
        ];
        for (record, expected) in cases {
            let load = service_load(&record);
            assert!(
                (load - expected).abs() < 1e-12,
                "expected weight {expected}, got {load}"
            );
        }
    }

    #[test]
    fn test_combined_load() {
        let record = ServiceRecord {
            age_0_5: 100.0,
            bio_age_5_17: 50.0,
            demo_age_17_: 10.0,
            ..Default::default()
        };
        // 1.2*100 + 0.8*50 + 0.7*10
        assert!((service_load(&record) - 167.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_weights() {
        let weights = AgeBandWeights {
            age_0_5: 2.0,
            ..Default::default()
        };
        let record = ServiceRecord {
            age_0_5: 10.0,
            ..Default::default()
        };
        assert_eq!(weights.service_load(&record), 20.0);
    }
}
