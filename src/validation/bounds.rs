use geo::Coord;

use crate::error::ValidationError;

pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Reject the first vertex that falls outside WGS84 longitude/latitude limits
pub fn check(coords: &[Coord<f64>]) -> Result<(), ValidationError> {
    for (i, c) in coords.iter().enumerate() {
        if let Some(reason) = axis_violation("longitude", c.x, MIN_LON, MAX_LON)
            .or_else(|| axis_violation("latitude", c.y, MIN_LAT, MAX_LAT))
        {
            return Err(ValidationError::out_of_bounds(format!(
                "Position at index {} has {}",
                i, reason
            )));
        }
    }
    Ok(())
}

fn axis_violation(axis: &str, value: f64, min: f64, max: f64) -> Option<String> {
    if value < min {
        Some(format!("{} {} below the minimum of {}", axis, value, min))
    } else if value > max {
        Some(format!("{} {} above the maximum of {}", axis, value, max))
    } else {
        None
    }
}
