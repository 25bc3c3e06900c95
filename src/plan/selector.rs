use crate::geometry::Point2D;
use crate::plan::candidates::Candidate;

/// Greedily selects candidates, center-outward, subject to a minimum
/// pairwise distance against both the already-accepted set and `avoid_xy`
/// (points placed by previously processed masks in this plan).
///
/// Candidates are first sorted by `(|t| ascending, theta ascending)` so
/// selection walks outward from the plan center; a candidate is kept iff its
/// distance to every accepted point and every `avoid_xy` point is at least
/// `min_dist` (compared on squared distances with `1e-6 mm²` slack, per the
/// selector's documented tolerance).
#[must_use]
pub fn select_greedy(
    mut candidates: Vec<Candidate>,
    min_dist_mm: f64,
    avoid_xy: &[Point2D],
) -> Vec<Candidate> {
    candidates.sort_by(|a, b| {
        a.t_mm
            .abs()
            .partial_cmp(&b.t_mm.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                a.theta_deg
                    .partial_cmp(&b.theta_deg)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    });

    let min_dist_sq = min_dist_mm * min_dist_mm - 1e-6;
    let mut accepted: Vec<Candidate> = Vec::new();
    for candidate in candidates {
        let point = candidate.point();
        let far_from_accepted = accepted
            .iter()
            .all(|a| a.point().distance_squared_to(point) >= min_dist_sq);
        let far_from_avoided = avoid_xy
            .iter()
            .all(|&a| a.distance_squared_to(point) >= min_dist_sq);
        if far_from_accepted && far_from_avoided {
            accepted.push(candidate);
        }
    }
    accepted
}

#[cfg(test)]
#[path = "./selector_tests.rs"]
mod tests;
