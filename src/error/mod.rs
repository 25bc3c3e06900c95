//! Error types surfaced by the public entry points.
//!
//! Degenerate-but-well-formed input (empty mask list, everything filtered
//! out, centroid out of bounds) is never an error: it produces a
//! structurally valid, low/zero-confidence [`crate::plan::PlanResult`] (see
//! the crate-level docs). Only genuinely misused call sites — mutually
//! exclusive or missing parameters — return [`InvalidArgument`].

mod invalid_argument;


pub use invalid_argument::InvalidArgument;
