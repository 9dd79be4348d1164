use serde::Serialize;

/// Square feet in one square meter
pub const SQ_FT_PER_SQ_M: f64 = 10.7639;

/// Feet in one meter
pub const FT_PER_M: f64 = 3.28084;

/// Derived measurements of a validated ring.
///
/// Lengths and areas are rounded half-up to 2 decimals. The centroid is
/// `(lon, lat)` in degrees and is left unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    pub area_m2: f64,
    pub area_ft2: f64,
    pub perimeter_m: f64,
    pub perimeter_ft: f64,
    pub centroid: (f64, f64),
}

/// Round half-up to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}
