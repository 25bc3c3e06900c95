//! `lesion-planner` computes geometrically uniform grids of laser lesion
//! spot positions inside a circular treatment aperture, and a deterministic
//! emission order for a two-axis (linear carriage + rotational stage)
//! machine.
//!
//! The crate is split into a geometry kernel ([`geometry`]), a bidirectional
//! coordinate mapping between the top-left and center millimetre frames
//! ([`coords`]), the mask-driven planner ([`plan`]), and a standalone grid
//! generator for two built-in apertures with no masks ([`grid_generator`]).
//! Every tunable quantity lives in [`config::PlannerConfig`] rather than a
//! free-standing constant, so the same kernel can be reparameterized for
//! different hardware without forking the crate.
//!
//! This is a pure, synchronous library: no I/O, no threads, no async
//! runtime. Callers performing HTTP routing, persistence, or file-format
//! encoding sit outside this crate and consume its plain (optionally
//! `serde`-serializable) data types.

// Lints {{{

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility,
    future_incompatible,
    rustdoc::all,
    rustdoc::missing_crate_level_docs,
    missing_docs,
    unsafe_code,
    unused,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    variant_size_differences,
    warnings,
    clippy::all,
    clippy::cargo,
    clippy::pedantic,
    clippy::allow_attributes_without_reason,
    clippy::as_underscore,
    clippy::branches_sharing_code,
    clippy::clone_on_ref_ptr,
    clippy::create_dir,
    clippy::dbg_macro,
    clippy::debug_assert_with_mut_call,
    clippy::decimal_literal_representation,
    clippy::empty_drop,
    clippy::empty_structs_with_brackets,
    clippy::equatable_if_let,
    clippy::exit,
    clippy::filetype_is_file,
    clippy::float_cmp_const,
    clippy::fn_to_numeric_cast_any,
    clippy::format_push_string,
    clippy::get_unwrap,
    clippy::if_then_some_else_none,
    clippy::imprecise_flops,
    clippy::lossy_float_literal,
    clippy::mem_forget,
    clippy::mixed_read_write_in_expression,
    clippy::needless_collect,
    clippy::option_if_let_else,
    clippy::panic,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::rc_buffer,
    clippy::rc_mutex,
    clippy::string_add,
    clippy::string_to_string,
    clippy::suboptimal_flops,
    clippy::todo,
    clippy::trivial_regex,
    clippy::try_err,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::use_debug,
    clippy::use_self,
    clippy::verbose_file_reads
)]
#![allow(
    // Aperture/mode enums deliberately stay closed; this crate owns both
    // sides of every match on them.
    clippy::exhaustive_enums,
    // "It requires the user to type the module name twice." Not true here:
    // the internal module names are hidden behind the re-exports below.
    clippy::module_name_repetitions,
)]

// }}}

pub mod config;
pub mod coords;
pub mod error;
pub mod geometry;
pub mod grid_generator;
pub mod plan;

pub use config::PlannerConfig;
pub use error::InvalidArgument;
pub use geometry::Point2D;
pub use grid_generator::{generate_grid, ApertureType, GridGeneratorResult};
pub use plan::{generate_plan_by_mode, AlgorithmMode, MaskPolygon, PlanResult, Spot};
