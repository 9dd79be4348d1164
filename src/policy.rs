//! Maximum-area policy applied on top of a measurement

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::domain::Measurement;

/// What kind of record an area belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AreaKind {
    SiteBoundary,
    Zone,
    Pitch,
}

impl fmt::Display for AreaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AreaKind::SiteBoundary => "site boundary",
            AreaKind::Zone => "zone",
            AreaKind::Pitch => "pitch",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error, Serialize)]
#[error("AREA_TOO_LARGE: {kind} area of {area_m2} m² exceeds the maximum of {limit_m2} m²")]
pub struct AreaLimitError {
    pub kind: AreaKind,
    pub area_m2: f64,
    pub limit_m2: f64,
}

impl AreaLimitError {
    pub const KIND: &'static str = "AREA_TOO_LARGE";
}

fn default_site_boundary_m2() -> f64 {
    10_000_000.0
}
fn default_zone_m2() -> f64 {
    1_000_000.0
}
fn default_pitch_m2() -> f64 {
    1_000_000.0
}

/// Configured maximum area per record kind, in square meters
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AreaLimits {
    #[serde(default = "default_site_boundary_m2")]
    pub site_boundary_m2: f64,
    #[serde(default = "default_zone_m2")]
    pub zone_m2: f64,
    #[serde(default = "default_pitch_m2")]
    pub pitch_m2: f64,
}

impl Default for AreaLimits {
    fn default() -> Self {
        Self {
            site_boundary_m2: default_site_boundary_m2(),
            zone_m2: default_zone_m2(),
            pitch_m2: default_pitch_m2(),
        }
    }
}

impl AreaLimits {
    pub fn limit_for(&self, kind: AreaKind) -> f64 {
        match kind {
            AreaKind::SiteBoundary => self.site_boundary_m2,
            AreaKind::Zone => self.zone_m2,
            AreaKind::Pitch => self.pitch_m2,
        }
    }

    /// Reject a measurement whose area exceeds the limit for `kind`
    pub fn check(&self, kind: AreaKind, measurement: &Measurement) -> Result<(), AreaLimitError> {
        let limit_m2 = self.limit_for(kind);
        if measurement.area_m2 > limit_m2 {
            return Err(AreaLimitError {
                kind,
                area_m2: measurement.area_m2,
                limit_m2,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(area_m2: f64) -> Measurement {
        Measurement {
            area_m2,
            area_ft2: 0.0,
            perimeter_m: 0.0,
            perimeter_ft: 0.0,
            centroid: (0.0, 0.0),
        }
    }

    #[test]
    fn test_limits_are_inclusive() {
        let limits = AreaLimits::default();
        assert!(limits.check(AreaKind::Zone, &measurement(1_000_000.0)).is_ok());
        assert!(limits.check(AreaKind::Zone, &measurement(1_000_000.01)).is_err());
    }

    #[test]
    fn test_site_boundary_allows_larger_areas() {
        let limits = AreaLimits::default();
        let big = measurement(5_000_000.0);
        assert!(limits.check(AreaKind::SiteBoundary, &big).is_ok());

        let err = limits.check(AreaKind::Pitch, &big).unwrap_err();
        assert_eq!(err.limit_m2, 1_000_000.0);
        assert!(err.to_string().starts_with("AREA_TOO_LARGE: pitch area"));
    }

    #[test]
    fn test_partial_config() {
        let limits: AreaLimits = toml::from_str("zone_m2 = 500.0").unwrap();
        assert_eq!(limits.zone_m2, 500.0);
        assert_eq!(limits.site_boundary_m2, 10_000_000.0);
    }
}
