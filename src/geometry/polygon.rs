use super::Point2D;

/// Absolute area of a (possibly non-convex, simple) polygon via the shoelace
/// formula.
///
/// Returns `0.0` for fewer than 3 vertices. Orientation (CW vs. CCW) does not
/// matter: the result is always non-negative.
#[must_use]
pub fn polygon_area(vertices: &[Point2D]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let n = vertices.len();
    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += vertices[i].x * vertices[j].y;
        area -= vertices[j].x * vertices[i].y;
    }
    (area / 2.0).abs()
}

/// Tests whether `point` lies inside `vertices` using a horizontal ray-cast
/// and edge-crossing parity.
///
/// Edge-on-boundary behaviour is intentionally asymmetric
/// (`min(y1,y2) < py <= max(y1,y2)`) so that shared edges between adjacent
/// polygons are attributed consistently rather than double- or
/// zero-counted; do not change this rule without re-checking every caller
/// that assumes it (see `DESIGN.md`).
#[must_use]
pub fn point_in_polygon(point: Point2D, vertices: &[Point2D]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut prev = vertices[n - 1];
    for &curr in vertices {
        let (x1, y1) = (prev.x, prev.y);
        let (x2, y2) = (curr.x, curr.y);

        let y_min = y1.min(y2);
        let y_max = y1.max(y2);
        if y_min < point.y && point.y <= y_max && point.x <= x1.max(x2) {
            let crosses = if (y1 - y2).abs() < f64::EPSILON {
                true
            } else {
                let x_intersect = (point.y - y1) * (x2 - x1) / (y2 - y1) + x1;
                point.x <= x_intersect
            };
            if crosses {
                inside = !inside;
            }
        }
        prev = curr;
    }
    inside
}

/// Arithmetic mean of a set of vertices (not area-weighted).
///
/// Returns the origin for an empty slice.
#[must_use]
pub fn centroid(vertices: &[Point2D]) -> Point2D {
    if vertices.is_empty() {
        return Point2D::new(0.0, 0.0);
    }
    let n = vertices.len() as f64;
    let (sx, sy) = vertices
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point2D::new(sx / n, sy / n)
}

/// Vertices approximating a circle, in CCW order, suitable for use as a
/// full-aperture mask polygon.
#[must_use]
pub fn circle_polygon(center: Point2D, radius_mm: f64, n_vertices: usize) -> Vec<Point2D> {
    (0..n_vertices)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * (i as f64) / (n_vertices as f64);
            Point2D::new(
                center.x + radius_mm * angle.cos(),
                center.y + radius_mm * angle.sin(),
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "./polygon_tests.rs"]
mod tests;
