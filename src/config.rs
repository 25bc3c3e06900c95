//! Planner configuration.
//!
//! The rest of the crate never reads a free-standing constant for a tunable
//! quantity; every operation in [`crate::plan`] and [`crate::grid_generator`]
//! takes a [`PlannerConfig`] (or one of its derived quantities) as an
//! argument. This mirrors the config-over-globals shape used by the library
//! this crate is grounded on, where a small `Copy` configuration value is
//! threaded through the polyfill entry points instead of reading module
//! statics.

/// Tunable parameters for the lesion spot planner.
///
/// Construct with [`PlannerConfig::default`] for the numeric constants fixed
/// by the design (aperture radius 12.5 mm, spot diameter 0.3 mm, angle step
/// 5°, …), or use the `with_*` builder methods to target different hardware.
///
/// Derived quantities ([`Self::min_dist_mm`], [`Self::spot_area_mm2`],
/// [`Self::aperture_area_mm2`]) are computed on demand rather than cached, so
/// they can never drift out of sync with the fields they derive from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlannerConfig {
    aperture_radius_mm: f64,
    spot_diameter_mm: f64,
    min_dist_factor: f64,
    angle_step_deg: f64,
    min_mask_pct_aperture: f64,
    min_mask_pct_of_total: f64,
    simple_grid_spacing_mm: f64,
    coverage_pct_min: f64,
    coverage_pct_max: f64,
    spacing_tuner_max_iter: u32,
}

impl PlannerConfig {
    /// Aperture radius, in millimetres (`R` in the design notes).
    #[must_use]
    pub const fn aperture_radius_mm(self) -> f64 {
        self.aperture_radius_mm
    }

    /// Spot diameter, in millimetres.
    #[must_use]
    pub const fn spot_diameter_mm(self) -> f64 {
        self.spot_diameter_mm
    }

    /// Angle step between diameters, in degrees.
    #[must_use]
    pub const fn angle_step_deg(self) -> f64 {
        self.angle_step_deg
    }

    /// Default spacing used by the simple (axis-aligned) planner mode.
    #[must_use]
    pub const fn simple_grid_spacing_mm(self) -> f64 {
        self.simple_grid_spacing_mm
    }

    /// Minimum mask area, as a percentage of the aperture area, to be
    /// considered at all.
    #[must_use]
    pub const fn min_mask_pct_aperture(self) -> f64 {
        self.min_mask_pct_aperture
    }

    /// Minimum mask area, as a percentage of the total kept-mask area, to
    /// survive the second filtering pass.
    #[must_use]
    pub const fn min_mask_pct_of_total(self) -> f64 {
        self.min_mask_pct_of_total
    }

    /// Inclusive bounds accepted for a coverage percentage.
    #[must_use]
    pub const fn coverage_pct_bounds(self) -> (f64, f64) {
        (self.coverage_pct_min, self.coverage_pct_max)
    }

    /// Maximum number of iterations the spacing tuner (binary search) runs.
    #[must_use]
    pub const fn spacing_tuner_max_iter(self) -> u32 {
        self.spacing_tuner_max_iter
    }

    /// Aperture area, in mm² (`π·R²`).
    #[must_use]
    pub fn aperture_area_mm2(self) -> f64 {
        std::f64::consts::PI * self.aperture_radius_mm * self.aperture_radius_mm
    }

    /// Spot area, in mm² (`π·(d/2)²`).
    #[must_use]
    pub fn spot_area_mm2(self) -> f64 {
        let r = self.spot_diameter_mm / 2.0;
        std::f64::consts::PI * r * r
    }

    /// Minimum pairwise center-to-center distance enforced between spots.
    #[must_use]
    pub fn min_dist_mm(self) -> f64 {
        self.spot_diameter_mm * self.min_dist_factor
    }

    /// Clamp a requested coverage percentage to the accepted bounds.
    #[must_use]
    pub fn clamp_coverage_pct(self, pct: f64) -> f64 {
        pct.clamp(self.coverage_pct_min, self.coverage_pct_max)
    }

    /// Returns a copy of `self` with a different aperture radius.
    #[must_use]
    pub const fn with_aperture_radius_mm(mut self, radius_mm: f64) -> Self {
        self.aperture_radius_mm = radius_mm;
        self
    }

    /// Returns a copy of `self` with a different spot diameter.
    #[must_use]
    pub const fn with_spot_diameter_mm(mut self, diameter_mm: f64) -> Self {
        self.spot_diameter_mm = diameter_mm;
        self
    }

    /// Returns a copy of `self` with a different angle step.
    #[must_use]
    pub const fn with_angle_step_deg(mut self, step_deg: f64) -> Self {
        self.angle_step_deg = step_deg;
        self
    }

    /// Returns a copy of `self` with a different default simple-mode
    /// spacing.
    #[must_use]
    pub const fn with_simple_grid_spacing_mm(mut self, spacing_mm: f64) -> Self {
        self.simple_grid_spacing_mm = spacing_mm;
        self
    }
}

impl Default for PlannerConfig {
    /// The numeric constants fixed by the design: 25 mm aperture, 300 µm
    /// spots, 5° angle step, 0.8 mm simple-mode spacing, mask-area floors of
    /// 0.5%/1%, coverage bounds of `[3, 20]`.
    fn default() -> Self {
        Self {
            aperture_radius_mm: 12.5,
            spot_diameter_mm: 0.3,
            min_dist_factor: 1.05,
            angle_step_deg: 5.0,
            min_mask_pct_aperture: 0.5,
            min_mask_pct_of_total: 1.0,
            simple_grid_spacing_mm: 0.8,
            coverage_pct_min: 3.0,
            coverage_pct_max: 20.0,
            spacing_tuner_max_iter: 18,
        }
    }
}

#[cfg(test)]
#[path = "./config_tests.rs"]
mod tests;
