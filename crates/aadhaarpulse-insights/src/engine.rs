//! Deterministic insight generation.
//!
//! No ML, no external calls: every figure is reproducible from the
//! aggregates alone, with commentary a policy reviewer can audit.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use aadhaarpulse_core::models::RawRecord;
use aadhaarpulse_core::service_load;

use crate::types::*;

/// Top-3 share above this percentage flags regional concentration risk.
const CONCENTRATION_RISK_THRESHOLD: f64 = 45.0;

/// A state is "active" at or above this fraction of the mean load.
const ACTIVE_STATE_FRACTION: f64 = 0.5;

/// National load index thresholds for the capacity planning signal.
const CAPACITY_STABLE_BELOW: f64 = 5e7;
const CAPACITY_EXPANSION_BELOW: f64 = 1e8;

/// Months of history required before a trend is reported.
const TREND_MIN_MONTHS: usize = 6;

/// Generate national-level insights from the national and per-state
/// aggregates.
pub fn generate_national_insights(
    national: &RawRecord,
    states: &[RawRecord],
) -> NationalInsights {
    let service_composition = analyze_composition(national);
    let state_loads = ranked_state_loads(states);
    let national_load: f64 = state_loads.iter().map(|(_, load)| load).sum();

    let concentration_analysis = analyze_concentration(&state_loads, national_load);
    let state_spread = analyze_spread(&state_loads, national_load);
    let capacity_signal = analyze_capacity(national_load);
    let trend_insight = analyze_trend(states);

    let mut risk_flags = Vec::new();
    if concentration_analysis.top_3_share_percent > CONCENTRATION_RISK_THRESHOLD {
        risk_flags.push(RiskFlag::HighRegionalConcentration);
    }
    if service_composition.dominant_service == ServiceClass::BiometricUpdate
        && service_composition.share_percent > 50.0
    {
        risk_flags.push(RiskFlag::BioReverificationSurge);
    }
    if capacity_signal.planning_signal != PlanningSignal::Stable {
        risk_flags.push(RiskFlag::CapacityStretchRisk);
    }

    NationalInsights {
        service_composition,
        concentration_analysis,
        state_spread,
        capacity_signal,
        trend_insight,
        risk_flags,
        methodology_notes: MethodologyNotes::default(),
    }
}

fn analyze_composition(national: &RawRecord) -> ServiceComposition {
    let record = national.normalize();
    let enrol_total = record.age_0_5 + record.age_5_17 + record.age_18_greater;
    let bio_total = record.bio_age_5_17 + record.bio_age_17_;
    let demo_total = record.demo_age_5_17 + record.demo_age_17_;
    let grand_total = enrol_total + bio_total + demo_total;

    let shares = [
        (ServiceClass::Enrolment, round2(safe_div(enrol_total, grand_total) * 100.0)),
        (ServiceClass::BiometricUpdate, round2(safe_div(bio_total, grand_total) * 100.0)),
        (ServiceClass::DemographicUpdate, round2(safe_div(demo_total, grand_total) * 100.0)),
    ];

    // First class wins ties, matching the published ordering
    let (dominant_service, share_percent) = shares
        .iter()
        .copied()
        .fold(shares[0], |best, candidate| {
            if candidate.1 > best.1 {
                candidate
            } else {
                best
            }
        });

    let label = dominant_service.label();
    let commentary = format!(
        "{label} accounts for {share_percent}% of national Aadhaar activity, indicating that \
         current operational demand is driven primarily by {} workflows rather than new enrolments.",
        label.to_lowercase(),
    );

    ServiceComposition {
        dominant_service,
        share_percent,
        commentary,
    }
}

/// Per-state loads under the default weights, sorted descending.
fn ranked_state_loads(states: &[RawRecord]) -> Vec<(String, f64)> {
    let mut loads: Vec<(String, f64)> = states
        .iter()
        .map(|s| {
            (
                s.state.clone().unwrap_or_default(),
                service_load(&s.normalize()),
            )
        })
        .collect();
    loads.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    loads
}

fn analyze_concentration(
    state_loads: &[(String, f64)],
    national_load: f64,
) -> ConcentrationAnalysis {
    let top_3: Vec<String> = state_loads.iter().take(3).map(|(s, _)| s.clone()).collect();
    let top_3_load: f64 = state_loads.iter().take(3).map(|(_, l)| l).sum();
    let top_3_share_percent = round2(safe_div(top_3_load, national_load) * 100.0);

    let concentrated = top_3_share_percent > CONCENTRATION_RISK_THRESHOLD;
    let risk_flag = if concentrated {
        ConcentrationRisk::HighConcentration
    } else {
        ConcentrationRisk::Balanced
    };
    let commentary = format!(
        "The top three states contribute {top_3_share_percent}% of total national service \
         demand, indicating {}.",
        if concentrated {
            "regional concentration risk"
        } else {
            "balanced demand distribution"
        },
    );

    ConcentrationAnalysis {
        top_3_states: top_3,
        top_3_share_percent,
        risk_flag,
        commentary,
    }
}

fn analyze_spread(state_loads: &[(String, f64)], national_load: f64) -> StateSpread {
    let total_states = state_loads.len();
    let avg_load = safe_div(national_load, total_states as f64);
    let active_states = state_loads
        .iter()
        .filter(|(_, load)| *load >= ACTIVE_STATE_FRACTION * avg_load)
        .count();

    let active_ratio = safe_div(active_states as f64, total_states as f64);
    let spread_classification = if active_ratio >= 0.7 {
        SpreadClass::Broad
    } else if active_ratio >= 0.4 {
        SpreadClass::Moderate
    } else {
        SpreadClass::Narrow
    };

    let commentary = format!(
        "Aadhaar service demand shows a {} spread across states, with {active_states} states \
         contributing materially to national activity.",
        spread_classification.label().to_lowercase(),
    );

    StateSpread {
        active_states,
        total_states,
        spread_classification,
        commentary,
    }
}

fn analyze_capacity(national_load: f64) -> CapacitySignal {
    let national_service_load_index = round2(national_load);

    let planning_signal = if national_service_load_index < CAPACITY_STABLE_BELOW {
        PlanningSignal::Stable
    } else if national_service_load_index < CAPACITY_EXPANSION_BELOW {
        PlanningSignal::ExpansionRequired
    } else {
        PlanningSignal::UrgentScalingNeeded
    };

    let commentary = format!(
        "Based on the current national service load index, the system indicates '{}' for \
         Aadhaar service infrastructure.",
        planning_signal.label(),
    );

    CapacitySignal {
        national_service_load_index,
        planning_signal,
        commentary,
    }
}

fn analyze_trend(states: &[RawRecord]) -> TrendInsight {
    let insufficient = TrendInsight {
        trend_type: TrendType::InsufficientData,
        trend_strength: TrendStrength::Na,
        time_window: "NA".into(),
        commentary: "Insufficient temporal granularity to derive demand trends.".into(),
    };

    if states.first().map_or(true, |s| s.date.is_none()) {
        return insufficient;
    }

    let monthly = bucket_by_month(states);
    if monthly.len() < TREND_MIN_MONTHS {
        return insufficient;
    }

    let values: Vec<f64> = monthly.values().copied().collect();
    let n = values.len();
    let recent_avg: f64 = values[n - 3..].iter().sum::<f64>() / 3.0;
    let past_avg: f64 = values[n - 6..n - 3].iter().sum::<f64>() / 3.0;
    let delta_pct = safe_div(recent_avg - past_avg, past_avg) * 100.0;

    let (trend_type, trend_strength) = if delta_pct > 10.0 {
        (
            TrendType::Increasing,
            if delta_pct > 20.0 {
                TrendStrength::Strong
            } else {
                TrendStrength::Moderate
            },
        )
    } else if delta_pct < -10.0 {
        (
            TrendType::Decreasing,
            if delta_pct < -20.0 {
                TrendStrength::Strong
            } else {
                TrendStrength::Moderate
            },
        )
    } else {
        (TrendType::Stable, TrendStrength::Weak)
    };

    let direction = match trend_type {
        TrendType::Increasing => "increasing",
        TrendType::Decreasing => "decreasing",
        _ => "stable",
    };
    let commentary = format!(
        "Aadhaar service demand exhibits a {direction} trend over the recent period, with an \
         approximate {}% quarter-over-quarter change.",
        round2(delta_pct.abs()),
    );

    TrendInsight {
        trend_type,
        trend_strength,
        time_window: format!("Last {} months", monthly.len()),
        commentary,
    }
}

/// Group service load into `YYYY-MM` buckets for time-aware analysis.
fn bucket_by_month(records: &[RawRecord]) -> BTreeMap<String, f64> {
    let mut buckets = BTreeMap::new();

    for record in records {
        let Some(raw_date) = record.date.as_deref() else {
            continue;
        };
        let Some(key) = month_key(raw_date) else {
            continue;
        };
        *buckets.entry(key).or_insert(0.0) += service_load(&record.normalize());
    }

    buckets
}

fn month_key(raw: &str) -> Option<String> {
    let date = raw
        .parse::<NaiveDate>()
        .ok()
        .or_else(|| raw.parse::<NaiveDateTime>().ok().map(|dt| dt.date()))?;
    Some(format!("{}-{:02}", date.year(), date.month()))
}

fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
