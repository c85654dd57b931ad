use std::ops::Neg;

use super::Vector;

/// Turn direction of three points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// `c` is left of the directed line `a -> b`.
    CounterClockwise,
    /// `c` is right of the directed line `a -> b`.
    Clockwise,
    /// The three points are exactly collinear.
    Collinear,
}

impl Orientation {
    /// `1`, `-1` or `0`.
    #[must_use]
    pub fn sign(self) -> i32 {
        match self {
            Self::CounterClockwise => 1,
            Self::Clockwise => -1,
            Self::Collinear => 0,
        }
    }
}

impl Neg for Orientation {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::CounterClockwise => Self::Clockwise,
            Self::Clockwise => Self::CounterClockwise,
            Self::Collinear => Self::Collinear,
        }
    }
}

/// Classifies `c` against the directed line `a -> b` by the sign of the
/// cross product `(b - a) x (c - a)`.
///
/// The zero test is exact. Points within [`EQUALITY_TOLERANCE`] of the line
/// are still reported as left or right, unlike [`Vector::approx_eq`].
///
/// [`EQUALITY_TOLERANCE`]: super::EQUALITY_TOLERANCE
#[must_use]
pub fn ccw(a: &Vector, b: &Vector, c: &Vector) -> Orientation {
    let cp = (*b - *a).crossp(&(*c - *a));
    if cp > 0.0 {
        Orientation::CounterClockwise
    } else if cp < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}
