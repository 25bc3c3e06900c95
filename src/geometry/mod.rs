//! The geometry kernel: shoelace area, ray-cast point-in-polygon, line–edge
//! intersection, and line–polygon clipping.
//!
//! Every other module in this crate builds candidate and accepted spots out
//! of these primitives; none of them re-implement a geometric test of their
//! own.

mod line;
mod point;
mod polygon;

pub use line::{clip_line_to_polygon, line_intersect_edge};
pub use point::Point2D;
pub use polygon::{centroid, circle_polygon, point_in_polygon, polygon_area};
