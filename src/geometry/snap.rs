use geo::Coord;

/// Default snapping lattice in degrees (about 1.1 m of latitude)
pub const DEFAULT_GRID_SIZE: f64 = 0.00001;

/// Quantize a coordinate to the nearest multiple of `grid_size` on each axis.
///
/// A non-positive or non-finite grid size leaves the coordinate untouched.
/// Snapping an already snapped coordinate returns it unchanged.
pub fn snap_to_grid(coord: Coord<f64>, grid_size: f64) -> Coord<f64> {
    if !grid_size.is_finite() || grid_size <= 0.0 {
        return coord;
    }

    Coord {
        x: snap_value(coord.x, grid_size),
        y: snap_value(coord.y, grid_size),
    }
}

fn snap_value(value: f64, grid_size: f64) -> f64 {
    (value / grid_size).round() * grid_size
}

/// Snap every vertex of a ring
pub fn snap_ring(coords: &[Coord<f64>], grid_size: f64) -> Vec<Coord<f64>> {
    coords.iter().map(|&c| snap_to_grid(c, grid_size)).collect()
}
