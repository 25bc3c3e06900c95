use crate::config::PlannerConfig;
use crate::error::InvalidArgument;
use crate::geometry::Point2D;
use crate::grid_generator::GridGeneratorResult;
use crate::plan::{build_axis_grid_candidates, overlap_filter, sort_boustrophedon, Candidate, MaskPolygon};

const SQUARE_SIDE_MM: f64 = 12.0;
const TUNER_MAX_ITER: u32 = 25;
const TUNER_LO_MM: f64 = 0.3;
const TUNER_HI_MM: f64 = 5.0;

/// The square's own corner-origin frame runs `[0, SQUARE_SIDE_MM]` on both
/// axes, so its center sits at half the side length on each axis.
const SQUARE_CENTER: Point2D = Point2D::new(SQUARE_SIDE_MM / 2.0, SQUARE_SIDE_MM / 2.0);

/// Generates the simple 12x12 mm square aperture: either fill at a fixed
/// `axis_distance_mm`, or binary-search a spacing that best matches
/// `target_coverage_pct`. Exactly one of the two must be given.
pub fn generate_simple(
    spot_diameter_mm: f64,
    axis_distance_mm: Option<f64>,
    target_coverage_pct: Option<f64>,
    config: PlannerConfig,
) -> Result<GridGeneratorResult, InvalidArgument> {
    match (axis_distance_mm, target_coverage_pct) {
        (Some(_), Some(_)) => return Err(InvalidArgument::ConflictingSpacingAndCoverage),
        (None, None) => return Err(InvalidArgument::MissingSpacingOrCoverage),
        _ => {}
    }

    let config = config.with_spot_diameter_mm(spot_diameter_mm);
    let half_extent = SQUARE_SIDE_MM / 2.0 - spot_diameter_mm / 2.0;
    let valid_region = valid_region_mask(half_extent);
    // An aperture radius larger than the square's own diagonal keeps the
    // circular clip in `build_axis_grid_candidates` from ever triggering;
    // the square mask does the actual bounding.
    let lattice_config = config.with_aperture_radius_mm(SQUARE_SIDE_MM);

    let total_area = SQUARE_SIDE_MM * SQUARE_SIDE_MM;
    let spacing = if let Some(fixed) = axis_distance_mm {
        fixed
    } else {
        let target_pct = target_coverage_pct.unwrap_or(0.0);
        let target_count = target_spot_count(target_pct, total_area, config);
        tune_axis_distance(&valid_region, lattice_config, target_count).0
    };

    let candidates = build_lattice(&valid_region, spacing, lattice_config);
    let achieved_coverage_pct = if total_area > 0.0 {
        Some(100.0 * candidates.len() as f64 * config.spot_area_mm2() / total_area)
    } else {
        None
    };

    Ok(GridGeneratorResult {
        spots: candidates.into_iter().map(Into::into).collect(),
        axis_distance_mm: spacing,
        achieved_coverage_pct,
    })
}

fn valid_region_mask(half_extent: f64) -> MaskPolygon {
    let (cx, cy) = (SQUARE_CENTER.x, SQUARE_CENTER.y);
    MaskPolygon::new(
        0,
        vec![
            Point2D::new(cx - half_extent, cy - half_extent),
            Point2D::new(cx + half_extent, cy - half_extent),
            Point2D::new(cx + half_extent, cy + half_extent),
            Point2D::new(cx - half_extent, cy + half_extent),
        ],
        None,
    )
}

fn build_lattice(valid_region: &MaskPolygon, spacing: f64, config: PlannerConfig) -> Vec<Candidate> {
    let candidates =
        build_axis_grid_candidates(SQUARE_CENTER, spacing, std::slice::from_ref(valid_region), config);
    let ordered = sort_boustrophedon(candidates, spacing, SQUARE_CENTER.y);
    overlap_filter(ordered, config.min_dist_mm())
}

fn target_spot_count(target_coverage_pct: f64, total_area: f64, config: PlannerConfig) -> usize {
    let count = (target_coverage_pct / 100.0 * total_area / config.spot_area_mm2()).round();
    (count.max(1.0)) as usize
}

/// Binary-searches `axis_distance_mm` over `[0.3, 5.0]` mm for the spacing
/// whose resulting count best matches `target_count`, same count-matching
/// shape as [`crate::plan::tune_spacing`].
fn tune_axis_distance(
    valid_region: &MaskPolygon,
    config: PlannerConfig,
    target_count: usize,
) -> (f64, Vec<Candidate>) {
    let mut lo = TUNER_LO_MM;
    let mut hi = TUNER_HI_MM;
    let mut best = (hi, Vec::new());
    let mut best_diff = usize::MAX;

    for _ in 0..TUNER_MAX_ITER {
        let mid = (lo + hi) / 2.0;
        let candidates = build_lattice(valid_region, mid, config);
        let diff = candidates.len().abs_diff(target_count);
        if diff < best_diff {
            best_diff = diff;
            best = (mid, candidates.clone());
        }
        if candidates.len() > target_count {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    best
}

#[cfg(test)]
#[path = "./simple_tests.rs"]
mod tests;
