//! Concrete end-to-end scenarios from SPEC_FULL.md §8 (S1-S6).

use std::collections::HashMap;

use float_eq::assert_float_eq;

use lesion_planner::{
    generate_grid, generate_plan_by_mode, AlgorithmMode, ApertureType, MaskPolygon, PlannerConfig,
    Point2D,
};

fn square(id: u64, cx: f64, cy: f64, side: f64, label: Option<&str>) -> MaskPolygon {
    let h = side / 2.0;
    MaskPolygon::new(
        id,
        vec![
            Point2D::new(cx - h, cy - h),
            Point2D::new(cx + h, cy - h),
            Point2D::new(cx + h, cy + h),
            Point2D::new(cx - h, cy + h),
        ],
        label.map(str::to_owned),
    )
}

/// S1: simple mode, single 6 mm square centered at origin.
#[test]
fn s1_simple_single_square() {
    let config = PlannerConfig::default();
    let masks = vec![square(1, 0.0, 0.0, 6.0, None)];
    let plan = generate_plan_by_mode(&masks, 6.0, None, AlgorithmMode::Simple, Some(0.8), config);

    assert!(plan.spots_count >= 1);
    assert_eq!(plan.overlap_count, 0);
    for spot in &plan.spots {
        assert!((-3.0..=3.0).contains(&spot.x), "x {} outside [-3, 3]", spot.x);
        assert!((-3.0..=3.0).contains(&spot.y), "y {} outside [-3, 3]", spot.y);
        assert_eq!(spot.mask_id, Some(1));
    }

    // Boustrophedon: rows descend in y; even rows ascend in x, odd rows descend.
    let row_height = 0.8;
    let row_of = |y: f64| (y / row_height).round() as i64;
    let mut rows: Vec<i64> = plan.spots.iter().map(|s| row_of(s.y)).collect();
    rows.dedup();
    let mut sorted_desc = rows.clone();
    sorted_desc.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(rows, sorted_desc, "rows are not ordered top (+y) first");

    let mut by_row: HashMap<i64, Vec<f64>> = HashMap::new();
    for spot in &plan.spots {
        by_row.entry(row_of(spot.y)).or_default().push(spot.x);
    }
    for (row_index, xs) in &by_row {
        let mut ascending = xs.clone();
        ascending.sort_by(f64::total_cmp);
        let mut descending = ascending.clone();
        descending.reverse();
        let expected = if row_index.rem_euclid(2) == 0 {
            &ascending
        } else {
            &descending
        };
        assert_eq!(xs, expected, "row {row_index} is not in boustrophedon order");
    }
}

/// S2: advanced mode, single 6 mm square, 5% target coverage.
#[test]
fn s2_advanced_single_square() {
    let config = PlannerConfig::default();
    let masks = vec![square(1, 0.0, 0.0, 6.0, None)];
    let plan = generate_plan_by_mode(&masks, 5.0, None, AlgorithmMode::Advanced, None, config);

    assert!(plan.plan_valid, "plan_valid should be true: {plan:?}");
    let step = config.angle_step_deg();
    for spot in &plan.spots {
        let k = (spot.theta_deg / step).round();
        assert_float_eq!(spot.theta_deg, k * step, abs <= 1e-6);
        assert!((0.0..180.0).contains(&spot.theta_deg));
    }
    let coverage = plan.achieved_coverage_pct.expect("non-zero mask area");
    assert!((2.0..=10.0).contains(&coverage), "achieved coverage {coverage} out of range");
}

/// S3: two masks with per-mask coverage overrides keyed by label.
#[test]
fn s3_coverage_per_mask_by_label() {
    let config = PlannerConfig::default();
    let masks = vec![
        square(1, -3.0, 0.0, 4.0, Some("white")),
        square(2, 3.0, 0.0, 4.0, Some("green")),
    ];
    let overrides: HashMap<String, f64> =
        [("white".to_owned(), 10.0), ("green".to_owned(), 5.0)].into_iter().collect();
    let plan = generate_plan_by_mode(
        &masks,
        5.0,
        Some(&overrides),
        AlgorithmMode::Advanced,
        None,
        config,
    );

    let white_count = plan.spots.iter().filter(|s| s.mask_id == Some(1)).count();
    let green_count = plan.spots.iter().filter(|s| s.mask_id == Some(2)).count();
    assert!(
        white_count >= green_count,
        "white ({white_count}) should get at least as many spots as green ({green_count})"
    );
}

/// S4: a small mask (below the 1%-of-total-area floor) is dropped entirely.
#[test]
fn s4_small_mask_is_rejected() {
    let config = PlannerConfig::default();
    let masks = vec![square(1, 0.0, 0.0, 8.0, None), square(2, 6.0, 6.0, 0.6, None)];
    let plan = generate_plan_by_mode(&masks, 6.0, None, AlgorithmMode::Advanced, None, config);

    assert!(
        plan.spots.iter().all(|s| s.mask_id != Some(2)),
        "mask 2 should have been filtered out but produced spots"
    );
}

/// S5: standalone simple grid generator at a fixed axis distance.
#[test]
fn s5_standalone_simple_grid() {
    let config = PlannerConfig::default();
    let result = generate_grid(
        ApertureType::Simple,
        0.3,
        Some(0.8),
        None,
        None,
        config,
    )
    .expect("valid simple grid request");

    assert!(!result.spots.is_empty());
    assert_float_eq!(result.axis_distance_mm, 0.8, abs <= 1e-12);
    for spot in &result.spots {
        assert!((0.15..=11.85).contains(&spot.x), "x {} outside [0.15, 11.85]", spot.x);
        assert!((0.15..=11.85).contains(&spot.y), "y {} outside [0.15, 11.85]", spot.y);
    }
}

/// S6: standalone advanced grid generator (25 mm disk).
#[test]
fn s6_standalone_advanced_grid() {
    let config = PlannerConfig::default();
    let result = generate_grid(
        ApertureType::Advanced,
        0.3,
        None,
        Some(5.0),
        Some(5.0),
        config,
    )
    .expect("valid advanced grid request");

    assert!(!result.spots.is_empty());
    let r2 = config.aperture_radius_mm() * config.aperture_radius_mm();
    let min_dist = 0.3 * 1.05;
    for (i, spot) in result.spots.iter().enumerate() {
        assert!(spot.x.mul_add(spot.x, spot.y * spot.y) <= r2 + 1e-9);
        let k = (spot.theta_deg / 5.0).round();
        assert_float_eq!(spot.theta_deg, k * 5.0, abs <= 1e-6);
        for other in &result.spots[i + 1..] {
            let d = spot.point().distance_to(other.point());
            assert!(d >= min_dist - 1e-6, "spots under min_dist: {d} < {min_dist}");
        }
    }
}
