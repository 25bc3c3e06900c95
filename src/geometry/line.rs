use super::{point_in_polygon, Point2D};

/// Intersects the line `center + t * (cos_theta, sin_theta)` with the edge
/// `(edge_start, edge_end)`.
///
/// Returns the parametric `t` of the intersection along the line iff the
/// edge-local parameter `s` falls within `[0, 1]` and the system is
/// non-degenerate (`|denom| >= 1e-12`).
#[must_use]
pub fn line_intersect_edge(
    center: Point2D,
    cos_theta: f64,
    sin_theta: f64,
    edge_start: Point2D,
    edge_end: Point2D,
) -> Option<f64> {
    let (x1, y1) = (edge_start.x, edge_start.y);
    let (x2, y2) = (edge_end.x, edge_end.y);

    let denom = cos_theta * (y2 - y1) - sin_theta * (x2 - x1);
    if denom.abs() < 1e-12 {
        return None;
    }

    let t = ((center.y - y1) * (x2 - x1) - (center.x - x1) * (y2 - y1)) / denom;
    let s = if (x2 - x1).abs() >= 1e-12 {
        ((center.x - x1) + t * cos_theta) / (x2 - x1)
    } else {
        ((center.y - y1) + t * sin_theta) / (y2 - y1)
    };

    (0.0..=1.0).contains(&s).then_some(t)
}

/// Clips the line `center + t * (cos_theta, sin_theta)`, `t in [r_min,
/// r_max]`, against `vertices`.
///
/// Returns the disjoint, `t`-ordered `(t_start, t_end)` segments of the line
/// that lie inside the polygon. Collects every edge-intersection `t`,
/// dedupes and sorts them, then keeps the intervals whose midpoint tests
/// inside the polygon.
#[must_use]
pub fn clip_line_to_polygon(
    center: Point2D,
    cos_theta: f64,
    sin_theta: f64,
    vertices: &[Point2D],
    r_min: f64,
    r_max: f64,
) -> Vec<(f64, f64)> {
    let n = vertices.len();
    let mut ts: Vec<f64> = Vec::new();
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        if let Some(t) = line_intersect_edge(center, cos_theta, sin_theta, a, b) {
            if t >= r_min && t <= r_max {
                ts.push(t);
            }
        }
    }
    ts.sort_by(|a, b| a.partial_cmp(b).expect("finite intersection parameter"));
    ts.dedup_by(|a, b| (*a - *b).abs() < 1e-12);

    let mut segments = Vec::new();
    for pair in ts.windows(2) {
        let (t_a, t_b) = (pair[0], pair[1]);
        let mid = (t_a + t_b) / 2.0;
        let mid_point = Point2D::new(
            center.x + mid * cos_theta,
            center.y + mid * sin_theta,
        );
        if point_in_polygon(mid_point, vertices) {
            segments.push((t_a, t_b));
        }
    }
    segments
}

#[cfg(test)]
#[path = "./line_tests.rs"]
mod tests;
