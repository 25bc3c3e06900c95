use crate::config::PlannerConfig;
use crate::geometry::Point2D;
use crate::plan::types::Spot;
use crate::plan::MaskPolygon;

/// A candidate spot position produced by the polar or axis-aligned builders,
/// before the selector has decided whether to keep it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// X coordinate, in millimetres, absolute (not relative to center).
    pub x: f64,
    /// Y coordinate, in millimetres, absolute.
    pub y: f64,
    /// Diameter angle, in degrees, `[0, 180)`.
    pub theta_deg: f64,
    /// Signed offset along the diameter, in millimetres.
    pub t_mm: f64,
    /// Mask this candidate was generated for.
    pub mask_id: Option<u64>,
}

impl Candidate {
    /// This candidate's position as a [`Point2D`].
    #[must_use]
    pub const fn point(self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

impl From<Candidate> for Spot {
    fn from(c: Candidate) -> Self {
        Self {
            x: c.x,
            y: c.y,
            theta_deg: c.theta_deg,
            t_mm: c.t_mm,
            mask_id: c.mask_id,
        }
    }
}

/// Builds polar-ring candidates around `center` for a single mask (or the
/// full aperture, if `mask` is `None`), at ring/diameter spacing
/// `spacing_mm`.
///
/// Rings are enumerated at `r = 0, spacing, 2*spacing, ... <= R`. On each
/// ring beyond the center, only every `skip_k`-th diameter is used, where
/// `skip_k` is chosen so the tangential chord between adjacent selected
/// diameters is at least `spacing_mm` (see SPEC_FULL.md §4.3/§9 for the
/// derivation). The starting diameter index is staggered by
/// `ring_index mod skip_k` so rings don't all line up on `theta = 0`.
#[must_use]
pub fn build_polar_candidates(
    center: Point2D,
    spacing_mm: f64,
    mask: Option<&MaskPolygon>,
    config: PlannerConfig,
) -> Vec<Candidate> {
    let angle_step = config.angle_step_deg();
    let r_max = config.aperture_radius_mm();
    let n_diameters = (180.0 / angle_step).floor() as usize;
    if n_diameters == 0 || spacing_mm <= 0.0 {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    let mut ring_index: usize = 0;
    let mut r = 0.0_f64;
    while r <= r_max + 1e-9 {
        if r < 1e-9 {
            push_candidate(&mut candidates, center, 0.0, 0.0, mask);
        } else {
            let skip_k = ring_skip(spacing_mm, r, angle_step, n_diameters);
            let start = ring_index % skip_k;
            let mut k = start;
            while k < n_diameters {
                let theta_deg = k as f64 * angle_step;
                push_candidate(&mut candidates, center, theta_deg, r, mask);
                push_candidate(&mut candidates, center, theta_deg, -r, mask);
                k += skip_k;
            }
        }
        ring_index += 1;
        r += spacing_mm;
    }
    candidates
}

/// Number of diameters to skip between selected diameters on a ring of
/// radius `r`, so the chord between them is at least `spacing_mm`.
fn ring_skip(spacing_mm: f64, r: f64, angle_step_deg: f64, n_diameters: usize) -> usize {
    if spacing_mm >= 2.0 * r {
        return n_diameters.max(1);
    }
    let half_chord_ratio = (spacing_mm / (2.0 * r)).clamp(-1.0, 1.0);
    let angle_deg = (2.0 * half_chord_ratio.asin()).to_degrees();
    let skip = (angle_deg / angle_step_deg).ceil() as i64;
    skip.clamp(1, n_diameters.max(1) as i64) as usize
}

fn push_candidate(
    out: &mut Vec<Candidate>,
    center: Point2D,
    theta_deg: f64,
    t_mm: f64,
    mask: Option<&MaskPolygon>,
) {
    let rad = theta_deg.to_radians();
    let point = Point2D::new(center.x + t_mm * rad.cos(), center.y + t_mm * rad.sin());
    let mask_id = match mask {
        Some(m) => {
            if !m.contains(point) {
                return;
            }
            Some(m.mask_id)
        }
        None => None,
    };
    out.push(Candidate {
        x: point.x,
        y: point.y,
        theta_deg,
        t_mm,
        mask_id,
    });
}

/// Builds the axis-aligned lattice used by the simple planner mode: every
/// point of a `spacing_mm`-step grid around `center` that lies within the
/// aperture disk and inside at least one of `masks` (tagged with the first
/// matching mask by input order).
#[must_use]
pub fn build_axis_grid_candidates(
    center: Point2D,
    spacing_mm: f64,
    masks: &[MaskPolygon],
    config: PlannerConfig,
) -> Vec<Candidate> {
    let r_max = config.aperture_radius_mm();
    let step = spacing_mm.max(1e-6);
    let n_cells = (r_max / step).ceil() as i64;

    let mut candidates = Vec::new();
    for i in -n_cells..=n_cells {
        for j in -n_cells..=n_cells {
            let x = center.x + (i as f64) * step;
            let y = center.y + (j as f64) * step;
            let dx = x - center.x;
            let dy = y - center.y;
            if dx.mul_add(dx, dy * dy) > r_max.mul_add(r_max, 1e-9) {
                continue;
            }
            let point = Point2D::new(x, y);
            let Some(mask) = masks.iter().find(|m| m.contains(point)) else {
                continue;
            };
            let t_mm = dx.hypot(dy);
            let theta_deg = dy.atan2(dx).to_degrees();
            candidates.push(Candidate {
                x,
                y,
                theta_deg,
                t_mm,
                mask_id: Some(mask.mask_id),
            });
        }
    }
    candidates
}

#[cfg(test)]
#[path = "./candidates_tests.rs"]
mod tests;
