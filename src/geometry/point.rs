use std::fmt;

/// A point in the plane, in millimetres.
///
/// Carries no identity: two `Point2D`s with the same coordinates are equal
/// regardless of where they came from. Coordinate-frame (C-mm vs. TL-mm) is
/// tracked by convention at call sites, not by the type.
#[derive(Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2D {
    /// X coordinate, in millimetres.
    pub x: f64,
    /// Y coordinate, in millimetres.
    pub y: f64,
}

impl Point2D {
    /// Initializes a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`, in millimetres.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Cheaper than [`Self::distance_to`] when only relative ordering or a
    /// threshold comparison is needed (the selector uses this form).
    #[must_use]
    pub fn distance_squared_to(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.mul_add(dx, dy * dy)
    }

    /// Translates `self` by `(dx, dy)`.
    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Debug for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

#[cfg(feature = "geo")]
impl From<Point2D> for geo::Coord {
    fn from(value: Point2D) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

#[cfg(feature = "geo")]
impl From<geo::Coord> for Point2D {
    fn from(value: geo::Coord) -> Self {
        Self::new(value.x, value.y)
    }
}

#[cfg(test)]
#[path = "./point_tests.rs"]
mod tests;
