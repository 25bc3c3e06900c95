use ahash::AHashMap;

use crate::geometry::Point2D;
use crate::plan::candidates::Candidate;

/// Sorts accepted axis-grid points into simple-mode emission order:
/// boustrophedon by row, top row (largest `y`) first, even rows ascending
/// `x`, odd rows descending `x`.
///
/// Rows are grouped by rounding `(y - anchor_y)` to the nearest
/// `row_height_mm`, so points that are nominally on the same lattice row but
/// differ by floating-point noise land in the same bucket. `anchor_y` must be
/// the same origin the lattice was built around (the plan center in
/// mask-driven mode, the aperture center in the standalone generator) —
/// anchoring to the absolute coordinate origin instead would flip the
/// even/odd row parity, and with it the sweep direction, for any
/// off-center plan.
#[must_use]
pub fn sort_boustrophedon(mut candidates: Vec<Candidate>, row_height_mm: f64, anchor_y: f64) -> Vec<Candidate> {
    let row_height = row_height_mm.max(1e-9);
    let row_of = |y: f64| ((y - anchor_y) / row_height).round() as i64;

    candidates.sort_by(|a, b| {
        let row_a = row_of(a.y);
        let row_b = row_of(b.y);
        row_b
            .cmp(&row_a)
            .then_with(|| {
                if row_a.rem_euclid(2) == 0 {
                    a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal)
                } else {
                    b.x.partial_cmp(&a.x).unwrap_or(std::cmp::Ordering::Equal)
                }
            })
    });
    candidates
}

/// Sorts accepted advanced-mode points into snake emission order: full
/// sweeps along one diameter, then the rotational axis steps by `angle_step`
/// and the carriage sweeps back.
///
/// Sort key is `(theta_k, t_sort)` where `theta_k = round(theta/angle_step)`
/// and `t_sort = t` on even `theta_k`, `-t` on odd `theta_k`.
#[must_use]
pub fn sort_advanced_emission_order(
    mut candidates: Vec<Candidate>,
    angle_step_deg: f64,
) -> Vec<Candidate> {
    let step = angle_step_deg.max(1e-9);
    let theta_k = |theta_deg: f64| (theta_deg / step).round() as i64;

    candidates.sort_by(|a, b| {
        let ka = theta_k(a.theta_deg);
        let kb = theta_k(b.theta_deg);
        ka.cmp(&kb).then_with(|| {
            let ta = if ka.rem_euclid(2) == 0 { a.t_mm } else { -a.t_mm };
            let tb = if kb.rem_euclid(2) == 0 { b.t_mm } else { -b.t_mm };
            ta.partial_cmp(&tb).unwrap_or(std::cmp::Ordering::Equal)
        })
    });
    candidates
}

/// Filters `points` in place, keeping only points that are at least
/// `min_dist_mm` away from every previously-accepted point, scanning in the
/// given (already emission-ordered) sequence.
///
/// Uses a spatial hash with cell size `min_dist_mm`, checking the 3x3
/// neighborhood of each candidate's cell against already-accepted points,
/// which keeps the pass close to linear instead of the naive `O(n^2)`.
#[must_use]
pub fn overlap_filter(candidates: Vec<Candidate>, min_dist_mm: f64) -> Vec<Candidate> {
    let cell_size = min_dist_mm.max(1e-9);
    let min_dist_sq = min_dist_mm * min_dist_mm;
    let mut grid: AHashMap<(i64, i64), Vec<Point2D>> = AHashMap::default();
    let cell_of = |p: Point2D| {
        (
            (p.x / cell_size).floor() as i64,
            (p.y / cell_size).floor() as i64,
        )
    };

    let mut accepted = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let point = candidate.point();
        let (cx, cy) = cell_of(point);
        let mut too_close = false;
        'neighbors: for dx in -1..=1 {
            for dy in -1..=1 {
                if let Some(bucket) = grid.get(&(cx + dx, cy + dy)) {
                    if bucket
                        .iter()
                        .any(|&p| p.distance_squared_to(point) < min_dist_sq)
                    {
                        too_close = true;
                        break 'neighbors;
                    }
                }
            }
        }
        if !too_close {
            grid.entry((cx, cy)).or_default().push(point);
            accepted.push(candidate);
        }
    }
    accepted
}

#[cfg(test)]
#[path = "./emission_tests.rs"]
mod tests;
