//! Exterior-ring orientation check
//!
//! The ring is treated as a flat (longitude, latitude) plane and must have a
//! positive shoelace area, i.e. run counter-clockwise. This approximates the
//! RFC 7946 right-hand rule, which is defined on the sphere. The two agree for
//! site-sized rings; very large rings, or rings near the poles, can be
//! reported with the opposite orientation to the spherical rule.
//!
//! The ring is never reversed here. Fixing the orientation is up to the caller.

use geo::Coord;

use crate::error::ValidationError;
use crate::geometry::planar::signed_area;

pub fn check(coords: &[Coord<f64>], epsilon: f64) -> Result<(), ValidationError> {
    let area = signed_area(coords);

    if area > epsilon {
        Ok(())
    } else if area < -epsilon {
        Err(ValidationError::invalid_winding(
            "Polygon exterior ring must be counter-clockwise, but it is currently clockwise",
        ))
    } else {
        Err(ValidationError::invalid_winding(
            "Polygon exterior ring has zero area (collinear or repeated vertices), so it has no counter-clockwise orientation",
        ))
    }
}
