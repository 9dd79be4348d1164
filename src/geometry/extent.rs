use geo::Coord;

/// Longitude/latitude extrema of a set of coordinates, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Extent {
    /// Create an extent from a set of (lon, lat) coordinates
    pub fn from_coords(coords: &[Coord<f64>]) -> Option<Self> {
        if coords.is_empty() {
            return None;
        }

        let mut min_lon = f64::MAX;
        let mut max_lon = f64::MIN;
        let mut min_lat = f64::MAX;
        let mut max_lat = f64::MIN;

        for c in coords {
            min_lon = min_lon.min(c.x);
            max_lon = max_lon.max(c.x);
            min_lat = min_lat.min(c.y);
            max_lat = max_lat.max(c.y);
        }

        Some(Self {
            min_lon,
            max_lon,
            min_lat,
            max_lat,
        })
    }

    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Midpoint of the extent as (lat, lon)
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_from_coords() {
        let coords = vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 10.0, y: 20.0 },
            Coord { x: 5.0, y: -4.0 },
        ];
        let extent = Extent::from_coords(&coords).unwrap();

        assert_eq!(extent.min_lon, 0.0);
        assert_eq!(extent.max_lon, 10.0);
        assert_eq!(extent.min_lat, -4.0);
        assert_eq!(extent.max_lat, 20.0);
        assert_eq!(extent.lon_span(), 10.0);
        assert_eq!(extent.lat_span(), 24.0);
        assert_eq!(extent.center(), (8.0, 5.0));
    }

    #[test]
    fn test_extent_empty() {
        assert!(Extent::from_coords(&[]).is_none());
    }
}
