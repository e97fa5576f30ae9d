//! Insight output types.
//!
//! Field names and enum spellings match the dashboard's JSON contract.

use serde::{Deserialize, Serialize};

/// Full national insight bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationalInsights {
    pub service_composition: ServiceComposition,
    pub concentration_analysis: ConcentrationAnalysis,
    pub state_spread: StateSpread,
    pub capacity_signal: CapacitySignal,
    pub trend_insight: TrendInsight,
    pub risk_flags: Vec<RiskFlag>,
    pub methodology_notes: MethodologyNotes,
}

/// Which service class dominates national activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceComposition {
    pub dominant_service: ServiceClass,
    /// Share of total activity, percent rounded to 2 decimals
    pub share_percent: f64,
    pub commentary: String,
}

/// The three service classes the dashboard reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceClass {
    #[serde(rename = "Enrolment")]
    Enrolment,
    #[serde(rename = "Biometric Update")]
    BiometricUpdate,
    #[serde(rename = "Demographic Update")]
    DemographicUpdate,
}

impl ServiceClass {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Enrolment => "Enrolment",
            Self::BiometricUpdate => "Biometric Update",
            Self::DemographicUpdate => "Demographic Update",
        }
    }
}

/// How concentrated demand is in the top states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationAnalysis {
    pub top_3_states: Vec<String>,
    pub top_3_share_percent: f64,
    pub risk_flag: ConcentrationRisk,
    pub commentary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConcentrationRisk {
    HighConcentration,
    Balanced,
}

/// How broadly demand is spread across states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSpread {
    pub active_states: usize,
    pub total_states: usize,
    pub spread_classification: SpreadClass,
    pub commentary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpreadClass {
    Broad,
    Moderate,
    Narrow,
}

impl SpreadClass {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Broad => "Broad",
            Self::Moderate => "Moderate",
            Self::Narrow => "Narrow",
        }
    }
}

/// Capacity planning signal from the national load index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacitySignal {
    pub national_service_load_index: f64,
    pub planning_signal: PlanningSignal,
    pub commentary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanningSignal {
    #[serde(rename = "Stable")]
    Stable,
    #[serde(rename = "Expansion Required")]
    ExpansionRequired,
    #[serde(rename = "Urgent Scaling Needed")]
    UrgentScalingNeeded,
}

impl PlanningSignal {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Stable => "Stable",
            Self::ExpansionRequired => "Expansion Required",
            Self::UrgentScalingNeeded => "Urgent Scaling Needed",
        }
    }
}

/// Quarter-over-quarter demand trend, when the data carries dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendInsight {
    pub trend_type: TrendType,
    pub trend_strength: TrendStrength,
    pub time_window: String,
    pub commentary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendType {
    Increasing,
    Decreasing,
    Stable,
    InsufficientData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendStrength {
    Strong,
    Moderate,
    Weak,
    Na,
}

/// Operational risk flags raised by the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskFlag {
    HighRegionalConcentration,
    BioReverificationSurge,
    CapacityStretchRisk,
}

/// Fixed audit notes describing how the insights were produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodologyNotes {
    pub analysis_type: String,
    pub time_analysis: String,
    pub capacity_basis: String,
    pub auditability: String,
}

impl Default for MethodologyNotes {
    fn default() -> Self {
        Self {
            analysis_type: "Deterministic rule-based analytics".into(),
            time_analysis: "Rolling quarterly comparison (no forecasting)".into(),
            capacity_basis: "Annualized service load vs fixed service capacity".into(),
            auditability: "Fully reproducible from aggregated datasets".into(),
        }
    }
}
