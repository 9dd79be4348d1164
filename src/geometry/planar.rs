//! Flat-plane ring math shared by the validators and the measurement engine.
//!
//! Rings are closed (first == last), so consecutive pairs cover every edge
//! including the closing one. Sums are taken relative to the first vertex to
//! keep cancellation error small for coordinates far from the origin.

use geo::Coord;

/// 2D cross product of (a - o) and (b - o).
/// Positive when `o -> a -> b` turns counter-clockwise.
pub fn cross(o: Coord<f64>, a: Coord<f64>, b: Coord<f64>) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Signed shoelace area of a closed ring. Positive = CCW, negative = CW.
pub fn signed_area(coords: &[Coord<f64>]) -> f64 {
    let Some(&origin) = coords.first() else {
        return 0.0;
    };

    let sum: f64 = coords
        .windows(2)
        .map(|w| {
            let a = w[0] - origin;
            let b = w[1] - origin;
            a.x * b.y - b.x * a.y
        })
        .sum();

    sum / 2.0
}

/// Area-weighted centroid of a closed ring.
///
/// Returns `None` when the ring has zero area and no centroid exists.
pub fn centroid(coords: &[Coord<f64>]) -> Option<Coord<f64>> {
    let &origin = coords.first()?;
    let area = signed_area(coords);
    if area == 0.0 || !area.is_finite() {
        return None;
    }

    let mut cx = 0.0;
    let mut cy = 0.0;
    for w in coords.windows(2) {
        let a = w[0] - origin;
        let b = w[1] - origin;
        let cross = a.x * b.y - b.x * a.y;
        cx += (a.x + b.x) * cross;
        cy += (a.y + b.y) * cross;
    }

    Some(Coord {
        x: origin.x + cx / (6.0 * area),
        y: origin.y + cy / (6.0 * area),
    })
}

/// Mean of the distinct ring vertices (the closing repeat is skipped)
pub fn vertex_mean(coords: &[Coord<f64>]) -> Option<Coord<f64>> {
    let vertices = match coords {
        [] => return None,
        [only] => return Some(*only),
        [rest @ .., last] if rest.first() == Some(last) => rest,
        all => all,
    };

    let n = vertices.len() as f64;
    let sum = vertices
        .iter()
        .fold(Coord { x: 0.0, y: 0.0 }, |acc, &c| acc + c);
    Some(Coord {
        x: sum.x / n,
        y: sum.y / n,
    })
}

/// Total length of the ring's edges
pub fn ring_length(coords: &[Coord<f64>]) -> f64 {
    coords
        .windows(2)
        .map(|w| {
            let d = w[1] - w[0];
            d.x.hypot(d.y)
        })
        .sum()
}
