use crate::config::PlannerConfig;
use crate::geometry::Point2D;
use crate::plan::candidates::{build_polar_candidates, Candidate};
use crate::plan::selector::select_greedy;
use crate::plan::MaskPolygon;

/// The best spacing found by [`tune_spacing`] and the candidates it
/// selected.
#[derive(Clone, Debug)]
pub struct SpacingOutcome {
    /// The spacing, in millimetres, that produced `selected`.
    pub spacing_mm: f64,
    /// The accepted candidates at `spacing_mm`.
    pub selected: Vec<Candidate>,
}

/// Binary-searches spacing so the selector's output count best matches
/// `target_count`, for a single mask.
///
/// This is a count-matching search, not a root finder: `count(spacing)` is
/// integer-valued and not strictly monotone, so every iteration's result is
/// compared against the best seen so far rather than assuming convergence.
/// Runs up to `config.spacing_tuner_max_iter()` iterations over the interval
/// `[min_dist, 5.0]` mm.
#[must_use]
pub fn tune_spacing(
    mask: &MaskPolygon,
    center: Point2D,
    target_count: usize,
    avoid_xy: &[Point2D],
    config: PlannerConfig,
) -> SpacingOutcome {
    let min_dist = config.min_dist_mm();
    let mut lo = min_dist;
    let mut hi = 5.0_f64;

    let mut best: Option<SpacingOutcome> = None;
    let mut best_diff = usize::MAX;

    for _ in 0..config.spacing_tuner_max_iter() {
        let mid = ((lo + hi) / 2.0).max(min_dist);
        let candidates = build_polar_candidates(center, mid, Some(mask), config);
        let selected = select_greedy(candidates, min_dist, avoid_xy);

        let diff = selected.len().abs_diff(target_count);
        if diff < best_diff {
            best_diff = diff;
            best = Some(SpacingOutcome {
                spacing_mm: mid,
                selected,
            });
        }

        if selected.len() > target_count {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    best.unwrap_or_else(|| SpacingOutcome {
        spacing_mm: hi,
        selected: Vec::new(),
    })
}

#[cfg(test)]
#[path = "./spacing_tests.rs"]
mod tests;
