//! Template geometry generation
//!
//! Builds a rectangular ring from a center point, physical dimensions and a
//! rotation, and recovers approximate dimensions from an existing polygon.
//! Generated rings go through the full validation pipeline before they are
//! returned.

use geo::{Coord, LineString};
use serde::Serialize;

use crate::domain::{Dimensions, Polygon, TemplateCatalog};
use crate::error::TemplateError;
use crate::geometry::{Extent, Projector, planar};
use crate::validation::Validator;

/// Optional per-request replacements for a template's defaults
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TemplateOverrides {
    pub width_m: Option<f64>,
    pub length_m: Option<f64>,
    pub rotation_deg: Option<f64>,
}

/// Center and axis-aligned size recovered from a polygon's extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectangleBounds {
    /// (lat, lon)
    pub center: (f64, f64),
    pub dimensions: Dimensions,
}

/// Generate a closed, counter-clockwise rectangle.
///
/// # Arguments
/// * `center` - (lat, lon) center point in WGS84
/// * `dimensions` - width (east-west at rotation 0) and length (north-south) in meters
/// * `rotation_deg` - counter-clockwise rotation about the center; 0 keeps the
///   length axis north-south
///
/// Half-extents are converted to degrees at the center latitude first, and
/// the degree offsets are then rotated. Away from the equator a rotated
/// template keeps its area but not its exact side lengths.
pub fn generate_rectangle(
    center: (f64, f64),
    dimensions: Dimensions,
    rotation_deg: f64,
) -> Result<Polygon, TemplateError> {
    let (lat, lon) = center;
    if !dimensions.is_valid() {
        return Err(TemplateError::InvalidDimensions {
            width_m: dimensions.width_m,
            length_m: dimensions.length_m,
        });
    }
    if !lat.is_finite() || lat.abs() >= 90.0 || !lon.is_finite() || lon.abs() > 180.0 {
        return Err(TemplateError::InvalidCenter { lat, lon });
    }
    if !rotation_deg.is_finite() {
        return Err(TemplateError::InvalidRotation(rotation_deg));
    }

    let (half_width, half_length) = Projector::new(center)
        .offset_to_degrees(dimensions.width_m / 2.0, dimensions.length_m / 2.0);

    let corners = [
        (-half_width, -half_length),
        (half_width, -half_length),
        (half_width, half_length),
        (-half_width, half_length),
    ];

    let (sin, cos) = rotation_deg.to_radians().sin_cos();
    let mut ring: Vec<Coord<f64>> = corners
        .iter()
        .map(|&(x, y)| {
            let (x, y) = if rotation_deg == 0.0 {
                (x, y)
            } else {
                (x * cos - y * sin, x * sin + y * cos)
            };
            Coord {
                x: lon + x,
                y: lat + y,
            }
        })
        .collect();
    ring.push(ring[0]);

    if planar::signed_area(&ring) < 0.0 {
        ring.reverse();
    }

    let polygon = Polygon::new(LineString::new(ring));
    Validator::default().validate(&polygon)?;

    tracing::debug!(
        lat,
        lon,
        width_m = dimensions.width_m,
        length_m = dimensions.length_m,
        rotation_deg,
        "generated rectangle"
    );

    Ok(polygon)
}

/// Generate the rectangle for a catalog template, applying any overrides
pub fn generate_from_template(
    catalog: &TemplateCatalog,
    template_id: &str,
    center: (f64, f64),
    overrides: &TemplateOverrides,
) -> Result<Polygon, TemplateError> {
    let template = catalog
        .get(template_id)
        .ok_or_else(|| TemplateError::UnknownTemplate(template_id.to_string()))?;

    let dimensions = Dimensions::new(
        overrides.width_m.unwrap_or(template.dimensions.width_m),
        overrides.length_m.unwrap_or(template.dimensions.length_m),
    );
    let rotation = overrides.rotation_deg.unwrap_or(template.rotation_deg);

    generate_rectangle(center, dimensions, rotation)
}

/// Recover an approximate center and width/length from a polygon.
///
/// Lossy: the result describes the polygon's longitude/latitude bounding box.
/// For an unrotated rectangle that is the rectangle itself; for a rotated one
/// the recovered size is that of the enclosing box, not the true width and
/// length. Returns `None` for an empty polygon.
pub fn calculate_bounds(polygon: &Polygon) -> Option<RectangleBounds> {
    let extent = Extent::from_coords(polygon.coords())?;
    let center = extent.center();
    let (width_m, length_m) =
        Projector::new(center).span_to_meters(extent.lon_span(), extent.lat_span());

    Some(RectangleBounds {
        center,
        dimensions: Dimensions::new(width_m, length_m),
    })
}
