//! Self-intersection ("kinks") detection
//!
//! Every pair of non-adjacent ring edges is tested with the orientation-sign
//! method. Touching and collinear overlap count as an intersection; adjacent
//! edges are skipped because they share a vertex by construction. The test is
//! O(n²) and relies on the vertex cap enforced by the structural stage.

use geo::{Coord, Line};

use crate::error::ValidationError;
use crate::geometry::planar::cross;

/// Reject the ring if any non-adjacent edges meet
pub fn check(coords: &[Coord<f64>], epsilon: f64) -> Result<(), ValidationError> {
    match count_crossings(coords, epsilon) {
        0 => Ok(()),
        n => Err(ValidationError::self_intersecting(n)),
    }
}

/// Number of non-adjacent edge pairs that touch or cross
pub fn count_crossings(coords: &[Coord<f64>], epsilon: f64) -> usize {
    let edges: Vec<Line<f64>> = coords.windows(2).map(|w| Line::new(w[0], w[1])).collect();
    let n = edges.len();
    let mut crossings = 0;

    for i in 0..n {
        for j in (i + 2)..n {
            // The closing edge is adjacent to the first one
            if i == 0 && j == n - 1 {
                continue;
            }
            if edges_intersect(&edges[i], &edges[j], epsilon) {
                crossings += 1;
            }
        }
    }

    crossings
}

/// Orientation of `c` relative to the directed line `a -> b`: 1 = left,
/// -1 = right, 0 = collinear within `epsilon`
fn orientation(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>, epsilon: f64) -> i8 {
    let value = cross(a, b, c);
    if value > epsilon {
        1
    } else if value < -epsilon {
        -1
    } else {
        0
    }
}

/// `q` lies within the bounding box of segment `p`-`r` (collinearity is known)
fn within_span(p: Coord<f64>, q: Coord<f64>, r: Coord<f64>) -> bool {
    q.x >= p.x.min(r.x) && q.x <= p.x.max(r.x) && q.y >= p.y.min(r.y) && q.y <= p.y.max(r.y)
}

fn edges_intersect(ab: &Line<f64>, cd: &Line<f64>, epsilon: f64) -> bool {
    let (a, b) = (ab.start, ab.end);
    let (c, d) = (cd.start, cd.end);

    let o1 = orientation(a, b, c, epsilon);
    let o2 = orientation(a, b, d, epsilon);
    let o3 = orientation(c, d, a, epsilon);
    let o4 = orientation(c, d, b, epsilon);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == 0 && within_span(a, c, b))
        || (o2 == 0 && within_span(a, d, b))
        || (o3 == 0 && within_span(c, a, d))
        || (o4 == 0 && within_span(c, b, d))
}
