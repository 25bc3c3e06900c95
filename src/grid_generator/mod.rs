//! Two built-in mask-free apertures that reuse the mask-driven kernel in
//! [`crate::plan`]: a 12x12 mm square and a 25 mm disk.

mod advanced;
mod simple;

use crate::config::PlannerConfig;
use crate::error::InvalidArgument;
use crate::plan::Spot;

pub use advanced::generate_advanced;
pub use simple::generate_simple;

/// A standalone (mask-free) grid generator result: spots, the spacing
/// actually used, and the coverage it achieves.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridGeneratorResult {
    /// Spots in emission order, centered on the square/disk's own origin.
    pub spots: Vec<Spot>,
    /// The spacing actually used to build the lattice, in millimetres.
    pub axis_distance_mm: f64,
    /// `100 * n * spot_area / total_area`, or `None` if the denominator is
    /// zero.
    pub achieved_coverage_pct: Option<f64>,
}

/// The built-in aperture shapes [`generate_simple`] and [`generate_advanced`]
/// implement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ApertureType {
    /// 12x12 mm square, fully-contained spots.
    Simple,
    /// 25 mm disk, reusing the mask-driven advanced planner internally.
    Advanced,
}

/// Dispatches to [`generate_simple`] or [`generate_advanced`] by
/// `aperture_type`.
pub fn generate_grid(
    aperture_type: ApertureType,
    spot_diameter_mm: f64,
    axis_distance_mm: Option<f64>,
    target_coverage_pct: Option<f64>,
    angle_step_deg: Option<f64>,
    config: PlannerConfig,
) -> Result<GridGeneratorResult, InvalidArgument> {
    match aperture_type {
        ApertureType::Simple => generate_simple(spot_diameter_mm, axis_distance_mm, target_coverage_pct, config),
        ApertureType::Advanced => {
            generate_advanced(spot_diameter_mm, target_coverage_pct, angle_step_deg, config)
        }
    }
}

#[cfg(test)]
#[path = "./mod_tests.rs"]
mod tests;
