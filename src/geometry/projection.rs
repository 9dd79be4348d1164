use geo::Coord;

/// Meters per degree of latitude (and of longitude at the equator)
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Equirectangular projection between WGS84 degrees and local meters
///
/// Uses the approximation suitable for site-scale areas:
/// - x = (lon - center_lon) * cos(lat) * 111320
/// - y = (lat - center_lat) * 111320
///
/// `project` scales longitude by the cosine of each point's own latitude, so
/// the ring's latitude band is honoured. The offset/span conversions use the
/// cosine of the center latitude.
#[derive(Debug, Clone)]
pub struct Projector {
    center_lat: f64,
    center_lon: f64,
    cos_lat: f64,
}

impl Projector {
    /// Create a new projector centered at the given coordinates
    ///
    /// # Arguments
    /// * `center` - (lat, lon) center point in WGS84
    pub fn new(center: (f64, f64)) -> Self {
        let (lat, lon) = center;
        Self {
            center_lat: lat,
            center_lon: lon,
            cos_lat: lat.to_radians().cos(),
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.center_lat, self.center_lon)
    }

    /// Project a (lon, lat) coordinate to local meters
    ///
    /// # Returns
    /// * (x, y) in meters, centered at the projection center
    pub fn project(&self, coord: Coord<f64>) -> Coord<f64> {
        let cos_lat = coord.y.to_radians().cos();
        Coord {
            x: (coord.x - self.center_lon) * cos_lat * METERS_PER_DEGREE,
            y: (coord.y - self.center_lat) * METERS_PER_DEGREE,
        }
    }

    /// Project every coordinate of a ring
    pub fn project_ring(&self, coords: &[Coord<f64>]) -> Vec<Coord<f64>> {
        coords.iter().map(|&c| self.project(c)).collect()
    }

    /// Convert a metric offset from the center to a (lon, lat) degree offset
    pub fn offset_to_degrees(&self, east_m: f64, north_m: f64) -> (f64, f64) {
        (
            east_m / (METERS_PER_DEGREE * self.cos_lat),
            north_m / METERS_PER_DEGREE,
        )
    }

    /// Convert a (lon, lat) degree span to meters at the center latitude
    pub fn span_to_meters(&self, lon_span: f64, lat_span: f64) -> (f64, f64) {
        (
            lon_span * METERS_PER_DEGREE * self.cos_lat,
            lat_span * METERS_PER_DEGREE,
        )
    }
}
