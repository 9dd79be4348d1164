//! Structural checks: geometry tag, ring length, closure, position shape.

use geo::{Coord, LineString};
use serde_json::Value;

use crate::domain::Polygon;
use crate::error::ValidationError;

/// 3 unique vertices plus the closing repeat
pub const MIN_RING_POSITIONS: usize = 4;

/// Parse an arbitrary GeoJSON-shaped value into a polygon, rejecting anything
/// that is not a closed single-ring Polygon of finite `[lon, lat]` pairs.
pub fn parse_geometry(value: &Value, max_points: usize) -> Result<Polygon, ValidationError> {
    let object = value
        .as_object()
        .ok_or_else(|| ValidationError::invalid_polygon("Geometry must be a GeoJSON object"))?;

    match object.get("type").and_then(Value::as_str) {
        Some("Polygon") => {}
        Some(other) => {
            return Err(ValidationError::invalid_polygon(format!(
                "Geometry type must be Polygon, got {}",
                other
            )));
        }
        None => {
            return Err(ValidationError::invalid_polygon(
                "Geometry is missing a Polygon type tag",
            ));
        }
    }

    let rings = object
        .get("coordinates")
        .and_then(Value::as_array)
        .filter(|rings| !rings.is_empty())
        .ok_or_else(|| {
            ValidationError::invalid_polygon("Polygon must carry a non-empty coordinates array")
        })?;

    if rings.len() > 1 {
        return Err(ValidationError::invalid_polygon(format!(
            "Polygon must have exactly one exterior ring, got {} rings (holes are not supported)",
            rings.len()
        )));
    }

    let ring = rings[0].as_array().ok_or_else(|| {
        ValidationError::invalid_polygon("Polygon exterior ring must be an array of positions")
    })?;

    check_count(ring.len(), max_points)?;

    // Closure is judged only when both ends parse; a malformed end is named
    // by the position check below.
    if let (Some(first), Some(last)) = (
        ring.first().and_then(parse_position),
        ring.last().and_then(parse_position),
    ) && first != last
    {
        return Err(not_closed());
    }

    let coords = ring
        .iter()
        .enumerate()
        .map(|(i, position)| parse_position(position).ok_or_else(|| invalid_position(i)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Polygon::new(LineString::new(coords)))
}

/// Structural checks for a ring that is already typed
pub fn check_ring(coords: &[Coord<f64>], max_points: usize) -> Result<(), ValidationError> {
    check_count(coords.len(), max_points)?;

    // Same order as `parse_geometry`: closure between finite ends, then positions
    if let (Some(first), Some(last)) = (coords.first(), coords.last())
        && is_finite(first)
        && is_finite(last)
        && first != last
    {
        return Err(not_closed());
    }

    if let Some(i) = coords.iter().position(|c| !is_finite(c)) {
        return Err(invalid_position(i));
    }

    Ok(())
}

fn is_finite(coord: &Coord<f64>) -> bool {
    coord.x.is_finite() && coord.y.is_finite()
}

fn check_count(count: usize, max_points: usize) -> Result<(), ValidationError> {
    if count < MIN_RING_POSITIONS {
        return Err(ValidationError::insufficient_points(count));
    }
    if count > max_points {
        return Err(ValidationError::too_many_points(count, max_points));
    }
    Ok(())
}

fn parse_position(value: &Value) -> Option<Coord<f64>> {
    match value.as_array()?.as_slice() {
        [lon, lat] => {
            let x = lon.as_f64()?;
            let y = lat.as_f64()?;
            let coord = Coord { x, y };
            is_finite(&coord).then_some(coord)
        }
        _ => None,
    }
}

fn not_closed() -> ValidationError {
    ValidationError::invalid_polygon("Polygon ring must be closed (first position must equal the last)")
}

fn invalid_position(index: usize) -> ValidationError {
    ValidationError::invalid_polygon(format!(
        "Position at index {} must be a [longitude, latitude] pair of finite numbers",
        index
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    const MAX: usize = 500;

    fn kind_of(value: Value) -> ErrorKind {
        parse_geometry(&value, MAX).unwrap_err().kind()
    }

    #[test]
    fn test_parse_valid_polygon() {
        let value = json!({
            "type": "Polygon",
            "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]
        });
        let polygon = parse_geometry(&value, MAX).unwrap();
        assert_eq!(polygon.coords().len(), 4);
        assert_eq!(polygon.coords()[1], Coord { x: 1.0, y: 0.0 });
    }

    #[test]
    fn test_rejects_non_polygon() {
        assert_eq!(kind_of(json!("Polygon")), ErrorKind::InvalidPolygon);
        assert_eq!(
            kind_of(json!({"type": "LineString", "coordinates": [[0, 0], [1, 1]]})),
            ErrorKind::InvalidPolygon
        );
        assert_eq!(kind_of(json!({"coordinates": []})), ErrorKind::InvalidPolygon);
        assert_eq!(
            kind_of(json!({"type": "Polygon", "coordinates": []})),
            ErrorKind::InvalidPolygon
        );
    }

    #[test]
    fn test_rejects_holes() {
        let value = json!({
            "type": "Polygon",
            "coordinates": [
                [[0, 0], [4, 0], [4, 4], [0, 4], [0, 0]],
                [[1, 1], [1, 2], [2, 2], [2, 1], [1, 1]]
            ]
        });
        let err = parse_geometry(&value, MAX).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPolygon);
        assert!(err.message().contains("holes"));
    }

    #[test]
    fn test_three_positions_insufficient_even_if_closed() {
        let value = json!({"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [0, 0]]]});
        assert_eq!(kind_of(value), ErrorKind::InsufficientPoints);
    }

    #[test]
    fn test_too_many_points() {
        let ring: Vec<Value> = (0..6).map(|i| json!([i, 0])).collect();
        let value = json!({"type": "Polygon", "coordinates": [ring]});
        let err = parse_geometry(&value, 5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooManyPoints);
    }

    #[test]
    fn test_rejects_open_ring() {
        let value = json!({
            "type": "Polygon",
            "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1]]]
        });
        let err = parse_geometry(&value, MAX).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPolygon);
        assert!(err.message().contains("closed"));
    }

    #[test]
    fn test_names_bad_position_index() {
        let value = json!({
            "type": "Polygon",
            "coordinates": [[[0, 0], [1, 0], ["1", 1], [0, 1], [0, 0]]]
        });
        let err = parse_geometry(&value, MAX).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPolygon);
        assert!(err.message().contains("index 2"));
    }

    #[test]
    fn test_rejects_wrong_arity() {
        let value = json!({
            "type": "Polygon",
            "coordinates": [[[0, 0], [1, 0, 5], [1, 1], [0, 0]]]
        });
        let err = parse_geometry(&value, MAX).unwrap_err();
        assert!(err.message().contains("index 1"));
    }

    #[test]
    fn test_malformed_first_position_named_instead_of_closure() {
        let value = json!({
            "type": "Polygon",
            "coordinates": [[null, [1, 0], [1, 1], [0, 0]]]
        });
        let err = parse_geometry(&value, MAX).unwrap_err();
        assert!(err.message().contains("index 0"));
    }

    #[test]
    fn test_check_ring_typed() {
        let open = vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 1.0, y: 0.0 },
            Coord { x: 1.0, y: 1.0 },
            Coord { x: 0.0, y: 1.0 },
        ];
        assert_eq!(check_ring(&open, MAX).unwrap_err().kind(), ErrorKind::InvalidPolygon);

        let mut nan = open.clone();
        nan[2].x = f64::NAN;
        nan.push(open[0]);
        let err = check_ring(&nan, MAX).unwrap_err();
        assert!(err.message().contains("index 2"));

        assert_eq!(
            check_ring(&open[..2], MAX).unwrap_err().kind(),
            ErrorKind::InsufficientPoints
        );
    }

    #[test]
    fn test_typed_and_json_paths_agree() {
        // Open ring with a bad middle position: closure is reported on both paths
        let value = json!({
            "type": "Polygon",
            "coordinates": [[[0, 0], [1, 0], ["x", 1], [0, 1], [0, 0.5]]]
        });
        let from_json = parse_geometry(&value, MAX).unwrap_err();

        let typed = vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 1.0, y: 0.0 },
            Coord { x: f64::NAN, y: 1.0 },
            Coord { x: 0.0, y: 1.0 },
            Coord { x: 0.0, y: 0.5 },
        ];
        let from_typed = check_ring(&typed, MAX).unwrap_err();

        assert_eq!(from_json, from_typed);
        assert!(from_typed.message().contains("closed"));

        // A bad first position is named by index instead
        let mut bad_start = typed.clone();
        bad_start[0].y = f64::INFINITY;
        let err = check_ring(&bad_start, MAX).unwrap_err();
        assert!(err.message().contains("index 0"));
    }
}
