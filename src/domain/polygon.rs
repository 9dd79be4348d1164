use geo::{Coord, LineString};

/// A polygon with a single exterior ring of (longitude, latitude) positions.
///
/// Coordinates follow GeoJSON order: `x` is longitude, `y` is latitude, both in
/// WGS84 degrees. Holes are never carried. Construction does not validate; run
/// the polygon through [`crate::validation::Validator`] before trusting it.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    exterior: LineString<f64>,
}

impl Polygon {
    pub fn new(exterior: LineString<f64>) -> Self {
        Self { exterior }
    }

    /// Build a polygon from `(lon, lat)` pairs
    pub fn from_lon_lat(points: &[(f64, f64)]) -> Self {
        Self::new(points.iter().map(|&(lon, lat)| Coord { x: lon, y: lat }).collect())
    }

    pub fn exterior(&self) -> &LineString<f64> {
        &self.exterior
    }

    /// Ring positions, including the closing repeat of the first vertex
    pub fn coords(&self) -> &[Coord<f64>] {
        &self.exterior.0
    }

    /// Same ring with the vertex order reversed
    pub fn reversed(&self) -> Self {
        Self::new(self.exterior.0.iter().rev().copied().collect())
    }

    /// Convert to a `geo` polygon for interop with the `geo` algorithms
    pub fn to_geo(&self) -> geo::Polygon<f64> {
        geo::Polygon::new(self.exterior.clone(), Vec::new())
    }

    /// Serialize as a GeoJSON Polygon geometry object
    pub fn to_geojson(&self) -> serde_json::Value {
        let ring: Vec<[f64; 2]> = self.coords().iter().map(|c| [c.x, c.y]).collect();
        serde_json::json!({
            "type": "Polygon",
            "coordinates": [ring],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Polygon {
        Polygon::from_lon_lat(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)])
    }

    #[test]
    fn test_from_lon_lat_keeps_axis_order() {
        let polygon = Polygon::from_lon_lat(&[(-122.4, 37.7)]);
        assert_eq!(polygon.coords()[0], Coord { x: -122.4, y: 37.7 });
    }

    #[test]
    fn test_reversed() {
        let polygon = unit_square();
        let reversed = polygon.reversed();
        assert_eq!(reversed.coords()[1], Coord { x: 0.0, y: 1.0 });
        assert_eq!(reversed.reversed(), polygon);
    }

    #[test]
    fn test_to_geojson() {
        let json = unit_square().to_geojson();
        assert_eq!(json["type"], "Polygon");
        assert_eq!(json["coordinates"].as_array().unwrap().len(), 1);
        assert_eq!(json["coordinates"][0][2], serde_json::json!([1.0, 1.0]));
    }

    #[test]
    fn test_to_geo_has_no_interiors() {
        let geo_polygon = unit_square().to_geo();
        assert!(geo_polygon.interiors().is_empty());
        assert_eq!(geo_polygon.exterior().0.len(), 5);
    }
}
