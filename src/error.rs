//! Error types shared by the validation pipeline and the template generator.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Closed set of reasons a ring can be rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    InvalidPolygon,
    InsufficientPoints,
    TooManyPoints,
    OutOfBounds,
    SelfIntersecting,
    InvalidWinding,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidPolygon => "INVALID_POLYGON",
            ErrorKind::InsufficientPoints => "INSUFFICIENT_POINTS",
            ErrorKind::TooManyPoints => "TOO_MANY_POINTS",
            ErrorKind::OutOfBounds => "OUT_OF_BOUNDS",
            ErrorKind::SelfIntersecting => "SELF_INTERSECTING",
            ErrorKind::InvalidWinding => "INVALID_WINDING",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation rejection.
///
/// Validation is fail-fast: every call yields at most one of these, produced by
/// the first stage that rejects the ring. The message is meant to be passed to
/// the client verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{kind}: {message}")]
pub struct ValidationError {
    kind: ErrorKind,
    message: String,
}

impl ValidationError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_polygon(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPolygon, message)
    }

    pub fn insufficient_points(count: usize) -> Self {
        Self::new(
            ErrorKind::InsufficientPoints,
            format!(
                "Polygon ring must have at least 4 positions (3 unique vertices plus the closing vertex), got {}",
                count
            ),
        )
    }

    pub fn too_many_points(count: usize, max: usize) -> Self {
        Self::new(
            ErrorKind::TooManyPoints,
            format!(
                "Polygon ring has {} positions, which exceeds the maximum of {}",
                count, max
            ),
        )
    }

    pub fn out_of_bounds(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::OutOfBounds, message)
    }

    pub fn self_intersecting(crossings: usize) -> Self {
        let noun = if crossings == 1 { "point" } else { "points" };
        Self::new(
            ErrorKind::SelfIntersecting,
            format!(
                "Polygon edges cross each other ({} intersection {} found)",
                crossings, noun
            ),
        )
    }

    pub fn invalid_winding(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidWinding, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors raised while generating template geometry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TemplateError {
    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    #[error("invalid dimensions: width {width_m} m, length {length_m} m (both must be finite and positive)")]
    InvalidDimensions { width_m: f64, length_m: f64 },

    #[error("invalid center ({lat}, {lon}): latitude must be inside (-90, 90) and longitude inside [-180, 180]")]
    InvalidCenter { lat: f64, lon: f64 },

    #[error("invalid rotation {0} (must be finite)")]
    InvalidRotation(f64),

    #[error("generated geometry was rejected: {0}")]
    Rejected(#[from] ValidationError),
}
