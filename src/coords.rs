//! Bidirectional mapping between the two millimetre coordinate frames used
//! around the planner's boundary.
//!
//! - **TL-mm**: origin at the image top-left, `+x` right, `+y` down. Used by
//!   storage and the client UI.
//! - **C-mm**: origin at the image center, `+x` right, `+y` up. Used
//!   internally by the planner.
//!
//! The dispatcher itself always operates in C-mm; callers convert at the
//! boundary with the functions in this module.

use crate::geometry::Point2D;

/// Converts a point from top-left mm (+y down) to center mm (+y up).
#[must_use]
pub fn top_left_to_center(point: Point2D, width_mm: f64, height_mm: f64) -> Point2D {
    Point2D::new(point.x - width_mm / 2.0, height_mm / 2.0 - point.y)
}

/// Converts a point from center mm (+y up) to top-left mm (+y down).
#[must_use]
pub fn center_to_top_left(point: Point2D, width_mm: f64, height_mm: f64) -> Point2D {
    Point2D::new(point.x + width_mm / 2.0, height_mm / 2.0 - point.y)
}

/// Converts a slice of points from top-left mm to center mm.
#[must_use]
pub fn vertices_top_left_to_center(
    points: &[Point2D],
    width_mm: f64,
    height_mm: f64,
) -> Vec<Point2D> {
    points
        .iter()
        .map(|&p| top_left_to_center(p, width_mm, height_mm))
        .collect()
}

/// Converts a slice of points from center mm to top-left mm.
#[must_use]
pub fn vertices_center_to_top_left(
    points: &[Point2D],
    width_mm: f64,
    height_mm: f64,
) -> Vec<Point2D> {
    points
        .iter()
        .map(|&p| center_to_top_left(p, width_mm, height_mm))
        .collect()
}

#[cfg(test)]
#[path = "./coords_tests.rs"]
mod tests;
