//! Service activity records from the aggregation API.

use serde::{Deserialize, Serialize};

/// Canonical per-region activity counts for one reporting period.
///
/// Every count is a plain `f64` defaulting to zero. Wire payloads arrive as
/// [`RawRecord`] in one of two shapes and are projected onto this struct
/// exactly once, so missing-value handling never leaks into the arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Enrolments, age 0-5
    #[serde(default)]
    pub age_0_5: f64,
    /// Enrolments, age 5-17
    #[serde(default)]
    pub age_5_17: f64,
    /// Enrolments, age 18+
    #[serde(default)]
    pub age_18_greater: f64,
    /// Biometric updates, age 5-17
    #[serde(default)]
    pub bio_age_5_17: f64,
    /// Biometric updates, age 17+
    #[serde(default)]
    pub bio_age_17_: f64,
    /// Demographic updates, age 5-17
    #[serde(default)]
    pub demo_age_5_17: f64,
    /// Demographic updates, age 17+
    #[serde(default)]
    pub demo_age_17_: f64,
}

/// Enrolment counts as nested under the national aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrolmentCounts {
    #[serde(default)]
    pub age_0_5: Option<f64>,
    #[serde(default)]
    pub age_5_17: Option<f64>,
    #[serde(default)]
    pub age_18_greater: Option<f64>,
}

/// Biometric-update counts as nested under the national aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BiometricCounts {
    #[serde(default)]
    pub bio_age_5_17: Option<f64>,
    #[serde(default)]
    pub bio_age_17_: Option<f64>,
}

/// Demographic-update counts as nested under the national aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DemographicCounts {
    #[serde(default)]
    pub demo_age_5_17: Option<f64>,
    #[serde(default)]
    pub demo_age_17_: Option<f64>,
}

/// A record exactly as the aggregation API returns it.
///
/// State and district aggregates arrive flat; the national aggregate nests
/// its counts under `enrolment` / `biometric_update` / `demographic_update`.
/// Both shapes deserialize into this one struct and are resolved by
/// [`RawRecord::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// State name (state aggregates)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// District name (district aggregates)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    /// Reporting date, ISO formatted, when the dataset carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    // Flat shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_0_5: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_5_17: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_18_greater: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio_age_5_17: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio_age_17_: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_age_5_17: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_age_17_: Option<f64>,

    // Nested (national) shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrolment: Option<EnrolmentCounts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biometric_update: Option<BiometricCounts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demographic_update: Option<DemographicCounts>,
}

impl RawRecord {
    /// Project either wire shape onto the canonical seven flat fields.
    ///
    /// A nested group, when present, takes precedence over the flat fields
    /// for its counts. Absent values become zero here and nowhere else.
    pub fn normalize(&self) -> ServiceRecord {
        let (age_0_5, age_5_17, age_18_greater) = match &self.enrolment {
            Some(e) => (e.age_0_5, e.age_5_17, e.age_18_greater),
            None => (self.age_0_5, self.age_5_17, self.age_18_greater),
        };
        let (bio_age_5_17, bio_age_17_) = match &self.biometric_update {
            Some(b) => (b.bio_age_5_17, b.bio_age_17_),
            None => (self.bio_age_5_17, self.bio_age_17_),
        };
        let (demo_age_5_17, demo_age_17_) = match &self.demographic_update {
            Some(d) => (d.demo_age_5_17, d.demo_age_17_),
            None => (self.demo_age_5_17, self.demo_age_17_),
        };

        ServiceRecord {
            age_0_5: age_0_5.unwrap_or(0.0),
            age_5_17: age_5_17.unwrap_or(0.0),
            age_18_greater: age_18_greater.unwrap_or(0.0),
            bio_age_5_17: bio_age_5_17.unwrap_or(0.0),
            bio_age_17_: bio_age_17_.unwrap_or(0.0),
            demo_age_5_17: demo_age_5_17.unwrap_or(0.0),
            demo_age_17_: demo_age_17_.unwrap_or(0.0),
        }
    }

    /// Region label for display: district when present, otherwise state.
    pub fn region(&self) -> Option<&str> {
        self.district.as_deref().or(self.state.as_deref())
    }
}
