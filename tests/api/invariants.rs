//! Universal invariants from SPEC_FULL.md §8, exercised across a handful of
//! representative masks and both planner modes rather than as a full
//! property-testing harness (the teacher's own `tests/api` suite is
//! example-driven in the same way).

use float_eq::assert_float_eq;
use lesion_planner::{generate_plan_by_mode, AlgorithmMode, MaskPolygon, PlannerConfig, Point2D};

fn square(id: u64, cx: f64, cy: f64, side: f64) -> MaskPolygon {
    let h = side / 2.0;
    MaskPolygon::new(
        id,
        vec![
            Point2D::new(cx - h, cy - h),
            Point2D::new(cx + h, cy - h),
            Point2D::new(cx + h, cy + h),
            Point2D::new(cx - h, cy + h),
        ],
        None,
    )
}

fn pentagon(id: u64, cx: f64, cy: f64, radius: f64) -> MaskPolygon {
    let vertices = (0..5)
        .map(|i| {
            let angle = std::f64::consts::FRAC_PI_2 + 2.0 * std::f64::consts::PI * f64::from(i) / 5.0;
            Point2D::new(cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect();
    MaskPolygon::new(id, vertices, None)
}

#[test]
fn spots_stay_inside_the_aperture_disk() {
    let config = PlannerConfig::default();
    let masks = vec![square(1, 0.0, 0.0, 8.0)];
    for mode in [AlgorithmMode::Simple, AlgorithmMode::Advanced] {
        let plan = generate_plan_by_mode(&masks, 6.0, None, mode, None, config);
        let r2 = config.aperture_radius_mm() * config.aperture_radius_mm();
        for spot in &plan.spots {
            assert!(
                spot.x.mul_add(spot.x, spot.y * spot.y) <= r2 + 1e-9,
                "spot {spot:?} escaped the aperture disk under {mode:?}"
            );
        }
    }
}

#[test]
fn spots_respect_the_minimum_pairwise_distance() {
    let config = PlannerConfig::default();
    let masks = vec![square(1, 0.0, 0.0, 10.0)];
    for mode in [AlgorithmMode::Simple, AlgorithmMode::Advanced] {
        let plan = generate_plan_by_mode(&masks, 8.0, None, mode, None, config);
        let min_dist = config.min_dist_mm();
        for i in 0..plan.spots.len() {
            for j in (i + 1)..plan.spots.len() {
                let d = plan.spots[i].point().distance_to(plan.spots[j].point());
                assert!(
                    d >= min_dist - 1e-6,
                    "spots {} and {} are {d} mm apart under {mode:?}, below min_dist {min_dist}",
                    i,
                    j
                );
            }
        }
        assert_eq!(plan.overlap_count, 0);
    }
}

#[test]
fn spots_carrying_a_mask_id_test_inside_that_mask() {
    let config = PlannerConfig::default();
    let masks = vec![square(1, -3.0, 0.0, 4.0), pentagon(2, 3.0, 0.0, 2.0)];
    for mode in [AlgorithmMode::Simple, AlgorithmMode::Advanced] {
        let plan = generate_plan_by_mode(&masks, 6.0, None, mode, None, config);
        for spot in &plan.spots {
            let Some(mask_id) = spot.mask_id else {
                continue;
            };
            let mask = masks.iter().find(|m| m.mask_id == mask_id).expect("known mask");
            assert!(
                mask.contains(spot.point()),
                "spot {spot:?} claims mask {mask_id} but fails point-in-polygon under {mode:?}"
            );
        }
    }
}

#[test]
fn spot_xy_is_consistent_with_its_polar_form() {
    let config = PlannerConfig::default();
    let masks = vec![square(1, 0.0, 0.0, 8.0)];
    let plan = generate_plan_by_mode(&masks, 6.0, None, AlgorithmMode::Advanced, None, config);
    assert!(!plan.spots.is_empty());
    for spot in &plan.spots {
        let rad = spot.theta_deg.to_radians();
        assert_float_eq!(spot.x, spot.t_mm * rad.cos(), abs <= 1e-6);
        assert_float_eq!(spot.y, spot.t_mm * rad.sin(), abs <= 1e-6);
    }
}

#[test]
fn advanced_emission_order_sweeps_one_diameter_at_a_time() {
    let config = PlannerConfig::default();
    let masks = vec![square(1, 0.0, 0.0, 8.0)];
    let plan = generate_plan_by_mode(&masks, 6.0, None, AlgorithmMode::Advanced, None, config);
    assert!(!plan.spots.is_empty());

    let step = config.angle_step_deg();
    let theta_k = |theta_deg: f64| (theta_deg / step).round() as i64;

    let mut last_k: Option<i64> = None;
    let mut run_t: Vec<f64> = Vec::new();
    let flush = |run_t: &mut Vec<f64>, k: i64| {
        if run_t.len() < 2 {
            return;
        }
        let signed = |t: f64| if k.rem_euclid(2) == 0 { t } else { -t };
        for pair in run_t.windows(2) {
            assert!(
                signed(pair[0]) <= signed(pair[1]) + 1e-9,
                "t values out of order within a constant-diameter run: {pair:?} (k={k})"
            );
        }
    };

    for spot in &plan.spots {
        let k = theta_k(spot.theta_deg);
        if last_k != Some(k) {
            if let Some(prev_k) = last_k {
                flush(&mut run_t, prev_k);
            }
            run_t.clear();
        }
        run_t.push(spot.t_mm);
        last_k = Some(k);
    }
    if let Some(prev_k) = last_k {
        flush(&mut run_t, prev_k);
    }
}

#[test]
fn identical_inputs_yield_identical_plans() {
    let config = PlannerConfig::default();
    let masks = vec![square(1, 0.0, 0.0, 8.0), pentagon(2, 6.0, 6.0, 2.0)];
    for mode in [AlgorithmMode::Simple, AlgorithmMode::Advanced] {
        let a = generate_plan_by_mode(&masks, 6.0, None, mode, None, config);
        let b = generate_plan_by_mode(&masks, 6.0, None, mode, None, config);
        assert_eq!(a, b, "two runs of the same input diverged under {mode:?}");
    }
}

#[test]
fn coordinate_round_trip_is_exact_to_a_nanometre() {
    use lesion_planner::coords::{center_to_top_left, top_left_to_center};

    let (width, height) = (25.0, 25.0);
    let samples = [
        Point2D::new(0.0, 0.0),
        Point2D::new(3.4, -7.1),
        Point2D::new(-12.0, 12.0),
        Point2D::new(25.0, 0.0),
    ];
    for p in samples {
        let round_tripped = center_to_top_left(top_left_to_center(p, width, height), width, height);
        assert_float_eq!(round_tripped.x, p.x, abs <= 1e-9);
        assert_float_eq!(round_tripped.y, p.y, abs <= 1e-9);

        let round_tripped = top_left_to_center(center_to_top_left(p, width, height), width, height);
        assert_float_eq!(round_tripped.x, p.x, abs <= 1e-9);
        assert_float_eq!(round_tripped.y, p.y, abs <= 1e-9);
    }
}

#[test]
fn increasing_simple_spacing_weakly_decreases_spot_count() {
    let config = PlannerConfig::default();
    let masks = vec![square(1, 0.0, 0.0, 10.0)];
    let counts: Vec<usize> = [0.4, 0.8, 1.2, 1.6, 2.0]
        .into_iter()
        .map(|spacing| {
            generate_plan_by_mode(&masks, 6.0, None, AlgorithmMode::Simple, Some(spacing), config)
                .spots_count
        })
        .collect();
    for pair in counts.windows(2) {
        assert!(
            pair[1] <= pair[0],
            "spot count rose from {} to {} as spacing increased: {counts:?}",
            pair[0],
            pair[1]
        );
    }
}
