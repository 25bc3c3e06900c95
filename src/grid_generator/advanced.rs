use crate::config::PlannerConfig;
use crate::error::InvalidArgument;
use crate::geometry::{circle_polygon, Point2D};
use crate::grid_generator::GridGeneratorResult;
use crate::plan::{overlap_filter, sort_advanced_emission_order, tune_spacing, MaskPolygon};

/// Vertex count for the synthetic disk polygon approximating the aperture.
const DISK_VERTEX_COUNT: usize = 360;

/// Generates the built-in 25 mm disk aperture: a 360-vertex circle polygon
/// stands in as the sole mask, and a single global spacing is tuned for the
/// whole disk (the "unison grid" regime — one spacing for the entire plan,
/// as opposed to per-mask tuning) followed by one overlap-filter pass.
pub fn generate_advanced(
    spot_diameter_mm: f64,
    target_coverage_pct: Option<f64>,
    angle_step_deg: Option<f64>,
    config: PlannerConfig,
) -> Result<GridGeneratorResult, InvalidArgument> {
    let angle_step_deg = angle_step_deg.ok_or(InvalidArgument::MissingAngleStep)?;
    if !(3.0..=20.0).contains(&angle_step_deg) {
        return Err(InvalidArgument::AngleStepOutOfRange);
    }

    let config = config
        .with_spot_diameter_mm(spot_diameter_mm)
        .with_angle_step_deg(angle_step_deg);

    let radius = config.aperture_radius_mm();
    let disk = MaskPolygon::new(
        0,
        circle_polygon(Point2D::new(0.0, 0.0), radius, DISK_VERTEX_COUNT),
        None,
    );

    let target_coverage_pct = target_coverage_pct
        .map(|pct| config.clamp_coverage_pct(pct))
        .unwrap_or_else(|| config.coverage_pct_bounds().0);

    let area = disk.area();
    let target_count = target_spot_count(target_coverage_pct, area, config);
    let outcome = tune_spacing(&disk, Point2D::new(0.0, 0.0), target_count, &[], config);
    let ordered = sort_advanced_emission_order(outcome.selected, config.angle_step_deg());
    let filtered = overlap_filter(ordered, config.min_dist_mm());

    let spots_count = filtered.len();
    let achieved_coverage_pct = if area > 0.0 {
        Some(100.0 * spots_count as f64 * config.spot_area_mm2() / area)
    } else {
        None
    };

    Ok(GridGeneratorResult {
        spots: filtered.into_iter().map(Into::into).collect(),
        axis_distance_mm: outcome.spacing_mm,
        achieved_coverage_pct,
    })
}

fn target_spot_count(target_coverage_pct: f64, area_mm2: f64, config: PlannerConfig) -> usize {
    let count = (target_coverage_pct / 100.0 * area_mm2 / config.spot_area_mm2()).round();
    (count.max(1.0)) as usize
}

#[cfg(test)]
#[path = "./advanced_tests.rs"]
mod tests;
