use std::{error::Error, fmt};

/// Invalid combination (or absence) of parameters passed to a public entry
/// point.
///
/// This is distinct from degenerate input: a request for a `simple` aperture
/// with no spacing and no coverage target is a programming mistake by the
/// caller, while an empty mask list is a perfectly valid (if useless)
/// request that simply yields an empty plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidArgument {
    /// The simple aperture needs either `target_coverage_pct` or
    /// `axis_distance_mm`, and got neither.
    MissingSpacingOrCoverage,
    /// The simple aperture got both `target_coverage_pct` and
    /// `axis_distance_mm`; only one may be given.
    ConflictingSpacingAndCoverage,
    /// The advanced aperture requires `angle_step_deg`, and none was given.
    MissingAngleStep,
    /// The angle step must divide evenly and densely enough into 180° to
    /// produce at least one diameter; outside `[3, 20]` degrees it is
    /// rejected outright.
    AngleStepOutOfRange,
    /// `aperture_type` did not match a known aperture.
    UnknownApertureType,
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::MissingSpacingOrCoverage => write!(
                f,
                "provide either target_coverage_pct or axis_distance_mm"
            ),
            Self::ConflictingSpacingAndCoverage => write!(
                f,
                "provide only one of target_coverage_pct or axis_distance_mm"
            ),
            Self::MissingAngleStep => {
                write!(f, "angle_step_deg is required for the advanced aperture")
            }
            Self::AngleStepOutOfRange => {
                write!(f, "angle_step_deg must be in the range [3, 20] degrees")
            }
            Self::UnknownApertureType => write!(f, "unknown aperture_type"),
        }
    }
}

impl Error for InvalidArgument {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}
