//! Choropleth intensity scaling.
//!
//! Raw service loads span several orders of magnitude between small UTs and
//! the largest states, so the map scales color saturation logarithmically
//! rather than linearly.

/// Lower intensity bound keeping low-load regions visible on the map.
pub const INTENSITY_FLOOR: f64 = 0.2;

/// Log-normalized visualization intensity in `[0.2, 1.0]`.
///
/// `log10(max(raw_load, 1)) / log10(max(max_load, 1))`, clamped. A maximum
/// at or below 1 leaves no dynamic range; the whole set maps to the floor.
/// Total for any finite or NaN input.
pub fn log_intensity(raw_load: f64, max_load: f64) -> f64 {
    let denom = max_load.max(1.0).log10();
    if denom <= 0.0 {
        return INTENSITY_FLOOR;
    }
    let normalized = raw_load.max(1.0).log10() / denom;
    normalized.clamp(INTENSITY_FLOOR, 1.0)
}
