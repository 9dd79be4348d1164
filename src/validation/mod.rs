//! Polygon validation pipeline
//!
//! Runs the stages in order and stops at the first rejection:
//! - Structure: a closed Polygon ring of finite `[lon, lat]` pairs within the vertex cap
//! - Bounds: every vertex on the WGS84 sphere
//! - Self-intersection: no two non-adjacent edges touch or cross
//! - Winding: the exterior ring is counter-clockwise

pub mod bounds;
pub mod intersection;
pub mod structure;
pub mod winding;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::Polygon;
use crate::error::ValidationError;

/// Default upper bound on ring positions, keeps the O(n²) crossing test bounded
pub const DEFAULT_MAX_POINTS: usize = 500;

/// Cross products and signed areas (in degrees²) at or below this are treated as zero
pub const DEFAULT_EPSILON: f64 = 1e-12;

fn default_max_points() -> usize {
    DEFAULT_MAX_POINTS
}

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_max_points")]
    pub max_points: usize,
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_points: default_max_points(),
            epsilon: default_epsilon(),
        }
    }
}

/// Fail-fast polygon validator. Stateless apart from its configuration, so a
/// single instance can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a typed polygon
    pub fn validate(&self, polygon: &Polygon) -> Result<(), ValidationError> {
        let coords = polygon.coords();
        structure::check_ring(coords, self.config.max_points).inspect_err(log_rejection)?;
        self.run_stages(polygon)
    }

    /// Parse and validate an arbitrary GeoJSON geometry value, handing back
    /// the accepted polygon
    pub fn validate_geometry(&self, value: &Value) -> Result<Polygon, ValidationError> {
        let polygon =
            structure::parse_geometry(value, self.config.max_points).inspect_err(log_rejection)?;
        self.run_stages(&polygon)?;
        Ok(polygon)
    }

    fn run_stages(&self, polygon: &Polygon) -> Result<(), ValidationError> {
        let coords = polygon.coords();
        bounds::check(coords)
            .and_then(|()| intersection::check(coords, self.config.epsilon))
            .and_then(|()| winding::check(coords, self.config.epsilon))
            .inspect_err(log_rejection)
    }
}

fn log_rejection(err: &ValidationError) {
    tracing::debug!(kind = %err.kind(), detail = err.message(), "polygon rejected");
}

/// Validate a typed polygon with the default configuration
pub fn validate_polygon(polygon: &Polygon) -> Result<(), ValidationError> {
    Validator::default().validate(polygon)
}

/// Parse and validate a GeoJSON geometry value with the default configuration
pub fn validate_geometry(value: &Value) -> Result<Polygon, ValidationError> {
    Validator::default().validate_geometry(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn square_ccw() -> Polygon {
        Polygon::from_lon_lat(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)])
    }

    #[test]
    fn test_valid_square_passes() {
        assert_eq!(validate_polygon(&square_ccw()), Ok(()));
    }

    #[test]
    fn test_first_failure_wins() {
        // Out of bounds, self-intersecting and clockwise all at once
        let polygon = Polygon::from_lon_lat(&[
            (200.0, 0.0),
            (201.0, 1.0),
            (201.0, 0.0),
            (200.0, 1.0),
            (200.0, 0.0),
        ]);
        let err = validate_polygon(&polygon).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    }

    #[test]
    fn test_intersection_reported_before_winding() {
        let bowtie =
            Polygon::from_lon_lat(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)]);
        let err = validate_polygon(&bowtie).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SelfIntersecting);
    }

    #[test]
    fn test_validate_geometry_passes_polygon_through() {
        let value = json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]]
        });
        let polygon = validate_geometry(&value).unwrap();
        assert_eq!(polygon, square_ccw());
    }

    #[test]
    fn test_validate_geometry_winding() {
        let value = json!({
            "type": "Polygon",
            "coordinates": [[[0, 0], [0, 1], [1, 1], [1, 0], [0, 0]]]
        });
        let err = validate_geometry(&value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidWinding);
    }

    #[test]
    fn test_custom_vertex_cap() {
        let validator = Validator::new(ValidationConfig {
            max_points: 4,
            ..Default::default()
        });
        let err = validator.validate(&square_ccw()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooManyPoints);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: ValidationConfig = toml::from_str("max_points = 200").unwrap();
        assert_eq!(config.max_points, 200);
        assert_eq!(config.epsilon, DEFAULT_EPSILON);
    }
}
