use tracing::debug;

use crate::geometry::{Circle, Linear, Segment};
use crate::math::Vector;

/// The circle passing through `a`, `b` and `c`.
///
/// Returns `None` when the points are collinear: the perpendicular
/// bisectors are then parallel and no such circle exists.
#[must_use]
pub fn circle_through_three_points(a: &Vector, b: &Vector, c: &Vector) -> Option<Circle> {
    let p1 = Segment::new(*a, *b).perpendicular_bisector();
    let p2 = Segment::new(*b, *c).perpendicular_bisector();
    match p1.intersection(&p2) {
        Ok(center) => Some(Circle::new(center, center.dist(a))),
        Err(e) => {
            debug!(%a, %b, %c, error = %e, "no circle through collinear points");
            None
        }
    }
}
