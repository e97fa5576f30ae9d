//! Station requirement estimation and interpretation.

use serde::Serialize;

use crate::models::StationEstimate;

/// Annual capacity of one service station, in weighted service units.
pub const ANNUAL_STATION_CAPACITY: f64 = 25_000.0;

/// Stations required to absorb an annualized service load.
pub fn estimate_stations(annual_load: f64) -> u32 {
    if annual_load <= 0.0 {
        return 0;
    }
    (annual_load / ANNUAL_STATION_CAPACITY).ceil() as u32
}

/// Multiplier converting an observation window into a full-year estimate.
///
/// A zero-day window cannot be extrapolated and keeps the observed load.
pub fn annualisation_factor(window_days: u32) -> f64 {
    if window_days == 0 {
        1.0
    } else {
        365.0 / f64::from(window_days)
    }
}

/// Display-ready interpretation of a server-computed station estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationInterpretation {
    pub stations_needed: u32,
    /// Annualized load rounded to the nearest whole service unit
    pub annual_load: u64,
    pub explanation: String,
}

/// Interpret a station estimate for display.
///
/// Server-authoritative: absent fields default, nothing is recomputed.
pub fn interpret_station_estimate(estimate: &StationEstimate) -> StationInterpretation {
    let stations_needed = estimate.estimated_stations_needed.unwrap_or(0);
    let annual_load = estimate
        .service_load_annualised
        .unwrap_or(0.0)
        .max(0.0)
        .round() as u64;

    let explanation = format!(
        "Annualized from {} days data × {:.2}x factor; 1 station = {} weighted service units/year",
        estimate.time_window_days.unwrap_or(0),
        estimate.annualisation_factor.unwrap_or(1.0),
        group_digits(ANNUAL_STATION_CAPACITY as u64),
    );

    StationInterpretation {
        stations_needed,
        annual_load,
        explanation,
    }
}

/// State-level roll-up of a set of district estimates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StationSummary {
    pub total_districts: usize,
    pub total_stations: u32,
    pub total_annual_load: u64,
    pub avg_stations_per_district: u32,
    pub highest_demand: u32,
}

impl StationSummary {
    /// Aggregate district estimates into the state overview table.
    pub fn from_estimates(estimates: &[StationEstimate]) -> Self {
        let total_districts = estimates.len();
        let total_stations: u32 = estimates
            .iter()
            .map(|e| e.estimated_stations_needed.unwrap_or(0))
            .sum();
        let total_annual_load = estimates
            .iter()
            .map(|e| e.service_load_annualised.unwrap_or(0.0).max(0.0))
            .sum::<f64>()
            .round() as u64;
        let avg_stations_per_district = if total_districts == 0 {
            0
        } else {
            (f64::from(total_stations) / total_districts as f64).round() as u32
        };
        let highest_demand = estimates
            .iter()
            .map(|e| e.estimated_stations_needed.unwrap_or(0))
            .max()
            .unwrap_or(0);

        Self {
            total_districts,
            total_stations,
            total_annual_load,
            avg_stations_per_district,
            highest_demand,
        }
    }
}

/// Thousands-grouped rendering for the capacity figure.
fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
