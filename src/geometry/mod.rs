mod circle;
mod line;
mod segment;

pub use circle::{Circle, CommonTangents};
pub use line::Line;
pub use segment::Segment;

use crate::error::{GeometryError, Result};
use crate::math::Vector;

/// Queries shared by everything that carries general-form line coefficients.
///
/// Implementors only provide [`Linear::line`]; the rest is derived from its
/// `(A, B, C)` coefficients, which satisfy `A*x + B*y = C` for points on the
/// line.
pub trait Linear {
    /// The underlying infinite line.
    fn line(&self) -> &Line;

    /// The `(A, B, C)` coefficients.
    fn params(&self) -> (f64, f64, f64) {
        self.line().params()
    }

    /// Unit direction `(-B, A)`, normalized.
    ///
    /// Non-finite if `A` and `B` are both zero.
    fn direction(&self) -> Vector {
        let (a, b, _) = self.params();
        Vector::new(-b, a).normalize()
    }

    /// Point where the two lines cross.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParallelLines`] when the determinant is
    /// exactly zero, which includes two identical lines. Nearly parallel lines
    /// are not rejected and give very distant points.
    fn intersection<L: Linear + ?Sized>(&self, other: &L) -> Result<Vector> {
        let (a1, b1, c1) = self.params();
        let (a2, b2, c2) = other.params();
        let det = a1 * b2 - a2 * b1;
        if det == 0.0 {
            return Err(GeometryError::ParallelLines);
        }
        let x = (b2 * c1 - b1 * c2) / det;
        let y = (a1 * c2 - a2 * c1) / det;
        Ok(Vector::new(x, y))
    }

    /// The line through `point` perpendicular to this one.
    ///
    /// `point` does not have to lie on this line.
    fn perpendicular(&self, point: &Vector) -> Line {
        let (a, b, _) = self.params();
        let d = -b * point.x() + a * point.y();
        Line::new(-b, a, d)
    }

    /// Foot of the perpendicular dropped from `point` onto this line.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParallelLines`] only for a line whose `A`
    /// and `B` are both zero.
    fn drop_perpendicular(&self, point: &Vector) -> Result<Vector> {
        self.intersection(&self.perpendicular(point))
    }

    /// Mirror image of `point` across this line.
    ///
    /// # Errors
    ///
    /// See [`Linear::drop_perpendicular`].
    fn reflection(&self, point: &Vector) -> Result<Vector> {
        let foot = self.drop_perpendicular(point)?;
        Ok(foot * 2.0 - *point)
    }

    /// Perpendicular distance from `point` to this line.
    ///
    /// # Errors
    ///
    /// See [`Linear::drop_perpendicular`].
    fn dist(&self, point: &Vector) -> Result<f64> {
        let foot = self.drop_perpendicular(point)?;
        Ok(point.dist(&foot))
    }
}
