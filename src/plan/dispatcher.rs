use std::collections::HashMap;

use crate::config::PlannerConfig;
use crate::geometry::{centroid, point_in_polygon, Point2D};
use crate::plan::candidates::{build_axis_grid_candidates, Candidate};
use crate::plan::emission::{overlap_filter, sort_advanced_emission_order, sort_boustrophedon};
use crate::plan::spacing::tune_spacing;
use crate::plan::types::{AlgorithmMode, MaskPolygon, PlanResult, Spot};

/// Generates a plan over `masks` in the requested `mode`.
///
/// `target_coverage_pct` is the default coverage target, clamped to
/// `config.coverage_pct_bounds()`; `coverage_per_mask` optionally overrides
/// it per mask, keyed by either the decimal form of `mask_id`
/// ([`MaskPolygon::id_key`]) or `mask_label`. `grid_spacing_mm` overrides the
/// simple-mode lattice step (defaults to `config.simple_grid_spacing_mm()`)
/// and is ignored in `advanced` mode, where spacing is tuned per mask.
///
/// Degenerate input (no masks, everything filtered out, centroid out of
/// bounds) is never an error: it yields a structurally valid `PlanResult`
/// with `plan_valid = false` (see the crate's error-handling notes). This
/// crate receives and returns coordinates in center-mm; callers convert at
/// the TL-mm boundary with [`crate::coords`].
#[must_use]
pub fn generate_plan_by_mode(
    masks: &[MaskPolygon],
    target_coverage_pct: f64,
    coverage_per_mask: Option<&HashMap<String, f64>>,
    mode: AlgorithmMode,
    grid_spacing_mm: Option<f64>,
    config: PlannerConfig,
) -> PlanResult {
    let kept = filter_masks(masks, config);
    if kept.is_empty() {
        log::warn!("generate_plan_by_mode: no masks survived filtering, returning empty plan");
        return PlanResult::default();
    }

    let (center, fallback_used) = plan_center(&kept, config);

    let spots = match mode {
        AlgorithmMode::Simple => {
            let spacing = grid_spacing_mm.unwrap_or_else(|| config.simple_grid_spacing_mm());
            let candidates = build_axis_grid_candidates(center, spacing, &kept, config);
            let ordered = sort_boustrophedon(candidates, spacing, center.y);
            let filtered = overlap_filter(ordered, config.min_dist_mm());
            candidates_to_spots(filtered)
        }
        AlgorithmMode::Advanced => {
            let mut avoid_xy: Vec<Point2D> = Vec::new();
            let mut all_candidates: Vec<Candidate> = Vec::new();
            for mask in &kept {
                let coverage_pct =
                    mask_coverage_pct(mask, coverage_per_mask, target_coverage_pct, config);
                let target_count = target_spot_count(mask.area(), coverage_pct, config);
                let outcome = tune_spacing(mask, center, target_count, &avoid_xy, config);
                avoid_xy.extend(outcome.selected.iter().map(|c| c.point()));
                all_candidates.extend(outcome.selected);
            }
            let ordered = sort_advanced_emission_order(all_candidates, config.angle_step_deg());
            let filtered = overlap_filter(ordered, config.min_dist_mm());
            candidates_to_spots(filtered)
        }
    };

    let result = build_plan_result(spots, &kept, fallback_used, config);
    log::debug!(
        "generate_plan_by_mode: mode={mode:?} masks={} spots={}",
        kept.len(),
        result.spots_count
    );
    result
}

/// Applies the two-stage mask-area filter from SPEC_FULL.md §4.1, falling
/// back to every positive-area mask if the filter would otherwise empty the
/// set.
fn filter_masks(masks: &[MaskPolygon], config: PlannerConfig) -> Vec<MaskPolygon> {
    let positive_area: Vec<MaskPolygon> = masks.iter().cloned().filter(|m| m.area() > 0.0).collect();
    if positive_area.len() < masks.len() {
        log::debug!(
            "filter_masks: dropped {} zero/negative-area masks",
            masks.len() - positive_area.len()
        );
    }

    let aperture_floor = config.min_mask_pct_aperture() / 100.0 * config.aperture_area_mm2();
    let above_aperture_floor: Vec<MaskPolygon> = positive_area
        .iter()
        .cloned()
        .filter(|m| m.area() >= aperture_floor)
        .collect();
    if above_aperture_floor.len() < positive_area.len() {
        log::debug!(
            "filter_masks: dropped {} masks below the aperture-area floor",
            positive_area.len() - above_aperture_floor.len()
        );
    }

    let total_area: f64 = above_aperture_floor.iter().map(MaskPolygon::area).sum();
    let surviving = if total_area > 0.0 {
        let total_floor = config.min_mask_pct_of_total() / 100.0 * total_area;
        let kept: Vec<MaskPolygon> = above_aperture_floor
            .iter()
            .cloned()
            .filter(|m| m.area() >= total_floor)
            .collect();
        if kept.len() < above_aperture_floor.len() {
            log::debug!(
                "filter_masks: dropped {} masks below the total-area floor",
                above_aperture_floor.len() - kept.len()
            );
        }
        kept
    } else {
        above_aperture_floor
    };

    if surviving.is_empty() && !positive_area.is_empty() {
        log::warn!("filter_masks: area filter emptied the set, falling back to all positive-area masks");
        return positive_area;
    }
    surviving
}

/// Plan center (arithmetic mean of every kept mask's vertices), clamped to
/// the origin if it falls outside the `+/-2R` bounding box.
fn plan_center(kept: &[MaskPolygon], config: PlannerConfig) -> (Point2D, bool) {
    let all_vertices: Vec<Point2D> = kept.iter().flat_map(|m| m.vertices.clone()).collect();
    let raw = centroid(&all_vertices);
    let bound = 2.0 * config.aperture_radius_mm();
    if raw.x.abs() > bound || raw.y.abs() > bound {
        log::warn!("plan_center: centroid {raw:?} outside +/-2R bounding box, clamping to origin");
        (Point2D::new(0.0, 0.0), true)
    } else {
        (raw, false)
    }
}

/// Resolves the coverage percentage to target for a single mask: an
/// explicit override keyed by `mask_id` or `mask_label`, or the default,
/// always clamped to `config.coverage_pct_bounds()`.
fn mask_coverage_pct(
    mask: &MaskPolygon,
    coverage_per_mask: Option<&HashMap<String, f64>>,
    target_coverage_pct: f64,
    config: PlannerConfig,
) -> f64 {
    let resolved = coverage_per_mask
        .and_then(|map| {
            map.get(&mask.id_key())
                .or_else(|| mask.mask_label.as_deref().and_then(|label| map.get(label)))
        })
        .copied()
        .unwrap_or(target_coverage_pct);
    config.clamp_coverage_pct(resolved)
}

/// Target selected-point count for a mask at a given coverage percentage.
fn target_spot_count(mask_area_mm2: f64, coverage_pct: f64, config: PlannerConfig) -> usize {
    let count = (coverage_pct / 100.0 * mask_area_mm2 / config.spot_area_mm2()).round();
    (count.max(1.0)) as usize
}

fn candidates_to_spots(candidates: Vec<Candidate>) -> Vec<Spot> {
    candidates.into_iter().map(Into::into).collect()
}

fn build_plan_result(
    spots: Vec<Spot>,
    kept_masks: &[MaskPolygon],
    fallback_used: bool,
    config: PlannerConfig,
) -> PlanResult {
    let spots_outside_mask_count = spots
        .iter()
        .filter(|spot| !spot_inside_its_mask(spot, kept_masks))
        .count();
    let overlap_count = count_overlaps(&spots, config.min_dist_mm());

    let total_mask_area: f64 = kept_masks.iter().map(MaskPolygon::area).sum();
    let achieved_coverage_pct = if total_mask_area > 0.0 {
        Some(100.0 * spots.len() as f64 * config.spot_area_mm2() / total_mask_area)
    } else {
        None
    };

    let spots_count = spots.len();
    let plan_valid = spots_count > 0
        && (spots_outside_mask_count as f64) / (spots_count as f64) <= 0.05
        && overlap_count == 0;

    PlanResult {
        spots,
        achieved_coverage_pct,
        spots_count,
        spots_outside_mask_count,
        overlap_count,
        plan_valid,
        fallback_used,
    }
}

fn spot_inside_its_mask(spot: &Spot, kept_masks: &[MaskPolygon]) -> bool {
    match spot.mask_id {
        Some(id) => kept_masks
            .iter()
            .find(|m| m.mask_id == id)
            .is_some_and(|m| point_in_polygon(spot.point(), &m.vertices)),
        None => kept_masks
            .iter()
            .any(|m| point_in_polygon(spot.point(), &m.vertices)),
    }
}

fn count_overlaps(spots: &[Spot], min_dist_mm: f64) -> usize {
    let min_dist_sq = min_dist_mm * min_dist_mm;
    let mut violations = 0;
    for i in 0..spots.len() {
        for j in (i + 1)..spots.len() {
            if spots[i].point().distance_squared_to(spots[j].point()) < min_dist_sq {
                violations += 1;
            }
        }
    }
    violations
}

#[cfg(test)]
#[path = "./dispatcher_tests.rs"]
mod tests;
