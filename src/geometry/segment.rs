use std::fmt;

use super::{Line, Linear};
use crate::math::Vector;

/// A line segment from `a` to `b`.
///
/// Also usable as the infinite line through its endpoints via [`Linear`];
/// the coefficients are derived once on construction as
/// `A = b.y - a.y`, `B = a.x - b.x`, `C = A*a.x + B*a.y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    a: Vector,
    b: Vector,
    line: Line,
}

impl Segment {
    /// Creates a segment between two points.
    #[must_use]
    pub fn new(a: Vector, b: Vector) -> Self {
        let la = b.y() - a.y();
        let lb = a.x() - b.x();
        let lc = la * a.x() + lb * a.y();
        Self {
            a,
            b,
            line: Line::new(la, lb, lc),
        }
    }

    /// Start point.
    #[must_use]
    pub fn a(&self) -> Vector {
        self.a
    }

    /// End point.
    #[must_use]
    pub fn b(&self) -> Vector {
        self.b
    }

    #[must_use]
    pub fn midpoint(&self) -> Vector {
        (self.a + self.b) * 0.5
    }

    /// The perpendicular through the midpoint.
    #[must_use]
    pub fn perpendicular_bisector(&self) -> Line {
        self.perpendicular(&self.midpoint())
    }

    /// Returns true if `point`, assumed to already lie on the line, falls
    /// strictly between the endpoints.
    ///
    /// The point counts as inside when it is strictly between the endpoints
    /// in x *or* in y, so an axis-aligned segment still contains its interior.
    /// Endpoints themselves are not contained.
    #[must_use]
    pub fn contains(&self, point: &Vector) -> bool {
        (point.x() - self.a.x()) * (point.x() - self.b.x()) < 0.0
            || (point.y() - self.a.y()) * (point.y() - self.b.y()) < 0.0
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.a.dist(&self.b)
    }
}

impl Linear for Segment {
    fn line(&self) -> &Line {
        &self.line
    }

    /// Unit vector from `a` towards `b`.
    ///
    /// Same line as the coefficient-based direction; computed from the
    /// endpoints so the orientation always follows `a -> b`.
    fn direction(&self) -> Vector {
        (self.b - self.a).normalize()
    }
}

impl From<Segment> for (Vector, Vector) {
    fn from(s: Segment) -> Self {
        (s.a, s.b)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]", self.a, self.b)
    }
}
