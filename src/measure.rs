//! Area, perimeter and centroid of a validated polygon
//!
//! Area and perimeter are both taken from the same equirectangular projection
//! of the ring (longitude scaled by the cosine of each vertex's latitude,
//! anchored at the ring's bounding-box center), so the two metrics never
//! disagree about the shape. The centroid is computed in degrees.

use geo::Coord;

use crate::domain::Polygon;
use crate::domain::measurement::{FT_PER_M, Measurement, SQ_FT_PER_SQ_M, round2};
use crate::geometry::{Extent, Projector, planar};

/// Measure a polygon that has passed validation.
///
/// Total over validated input. Rings that skipped validation still produce a
/// result, but it carries no meaning.
pub fn measure(polygon: &Polygon) -> Measurement {
    let projected = project(polygon.coords());
    let area_m2 = planar::signed_area(&projected).abs();
    let perimeter_m = planar::ring_length(&projected);
    let centroid = calculate_centroid(polygon);

    tracing::trace!(area_m2, perimeter_m, ?centroid, "measured polygon");

    Measurement {
        area_m2: round2(area_m2),
        area_ft2: round2(area_m2 * SQ_FT_PER_SQ_M),
        perimeter_m: round2(perimeter_m),
        perimeter_ft: round2(perimeter_m * FT_PER_M),
        centroid,
    }
}

/// Area in square meters, rounded to 2 decimals
pub fn calculate_area(polygon: &Polygon) -> f64 {
    round2(planar::signed_area(&project(polygon.coords())).abs())
}

/// Perimeter in meters, rounded to 2 decimals
pub fn calculate_perimeter(polygon: &Polygon) -> f64 {
    round2(planar::ring_length(&project(polygon.coords())))
}

/// Area-weighted centroid as (lon, lat).
///
/// Falls back to the vertex mean for a zero-area ring, and to the origin for
/// an empty one.
pub fn calculate_centroid(polygon: &Polygon) -> (f64, f64) {
    let coords = polygon.coords();
    planar::centroid(coords)
        .or_else(|| planar::vertex_mean(coords))
        .map(|c| (c.x, c.y))
        .unwrap_or((0.0, 0.0))
}

fn project(coords: &[Coord<f64>]) -> Vec<Coord<f64>> {
    match Extent::from_coords(coords) {
        Some(extent) => Projector::new(extent.center()).project_ring(coords),
        None => Vec::new(),
    }
}
