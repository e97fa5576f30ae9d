//! Station-estimate payloads from `/estimate/stations/district`.

use serde::{Deserialize, Serialize};

/// One district row of a station-requirement estimate.
///
/// Computed server-side; the core only defaults and formats these fields,
/// never recomputes them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationEstimate {
    /// District label; may carry a trailing `" *"` review marker
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub estimated_stations_needed: Option<u32>,
    #[serde(default)]
    pub service_load_annualised: Option<f64>,
    #[serde(default)]
    pub time_window_days: Option<u32>,
    #[serde(default)]
    pub annualisation_factor: Option<f64>,
}

impl StationEstimate {
    /// District label with any trailing `" *"` review marker removed.
    pub fn district_display(&self) -> &str {
        self.district
            .strip_suffix(" *")
            .unwrap_or(&self.district)
            .trim()
    }
}

/// Response envelope for a state's district estimates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationEstimateResponse {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub data: Vec<StationEstimate>,
}
