use std::fmt;

use tracing::{debug, warn};

use super::{Linear, Segment};
use crate::error::{GeometryError, Result};
use crate::math::{ccw, Orientation, Vector};

/// A circle in the plane.
///
/// A zero radius is allowed and behaves as a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Vector,
    radius: f64,
}

/// The pair of common tangents between two circles.
///
/// Each segment runs from the tangency point on the first circle to the
/// tangency point on the second. `first` touches the first circle on the
/// left of the directed line between the two centers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommonTangents {
    pub first: Segment,
    pub second: Segment,
    /// Where the two tangent lines cross; `None` when they are parallel.
    pub intersection: Option<Vector>,
}

impl Circle {
    /// Creates a circle from its center and a non-negative radius.
    #[must_use]
    pub fn new(center: Vector, radius: f64) -> Self {
        Self { center, radius }
    }

    #[must_use]
    pub fn center(&self) -> Vector {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The two tangents from `point` to this circle.
    ///
    /// Each segment starts at `point` and ends at its tangency point. The
    /// order is fixed by the construction and callers may rely on it.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::PointInsideCircle`] or
    /// [`GeometryError::PointOnCircle`] when no proper tangent exists.
    #[allow(clippy::float_cmp)]
    pub fn tangents(&self, point: &Vector) -> Result<(Segment, Segment)> {
        let d = self.center.dist(point);
        let r = self.radius;
        if d < r {
            return Err(GeometryError::PointInsideCircle);
        }
        if d == r {
            return Err(GeometryError::PointOnCircle);
        }

        let a = (d * d - r * r).sqrt();
        let b = a * a / d;
        // Foot of the chord joining both tangency points.
        let p = (self.center - *point) * (b / d) + *point;
        let k = Segment::new(self.center, *point).perpendicular(&p).direction();
        let s = k * (r * a / d);
        Ok((Segment::new(*point, p + s), Segment::new(*point, p - s)))
    }

    /// Common tangents shared with `other`.
    ///
    /// With `outer` the tangents keep both circles on the same side; otherwise
    /// they pass between them. Concentric circles are not supported.
    ///
    /// # Errors
    ///
    /// Inner tangents of overlapping circles fail with
    /// [`GeometryError::PointInsideCircle`] (or
    /// [`GeometryError::PointOnCircle`] when the circles touch).
    /// [`GeometryError::TangentConstructionFailed`] signals a broken
    /// construction and should not occur for distinct centers.
    pub fn common(&self, other: &Circle, outer: bool) -> Result<CommonTangents> {
        let cline = Segment::new(self.center, other.center);

        #[allow(clippy::float_cmp)]
        let parallel_tangents = outer && self.radius == other.radius;
        if parallel_tangents {
            let da = cline.perpendicular(&self.center).direction();
            let db = cline.perpendicular(&other.center).direction();
            let a1 = self.center + da * self.radius;
            let a2 = self.center - da * self.radius;
            let b1 = other.center + db * other.radius;
            let b2 = other.center - db * other.radius;
            let (first, second) = if ccw(&self.center, &other.center, &a1)
                == Orientation::CounterClockwise
            {
                (Segment::new(a1, b1), Segment::new(a2, b2))
            } else {
                (Segment::new(a2, b2), Segment::new(a1, b1))
            };
            return Ok(CommonTangents {
                first,
                second,
                intersection: None,
            });
        }

        // Each trial line joins points offset by the radii, so it crosses the
        // center line at the homothetic center of the two circles.
        let sign = if outer { 1.0 } else { -1.0 };
        let found = [(0.0, 1.0), (1.0, 0.0)].into_iter().find_map(|(sx, sy)| {
            let pa = self.center + Vector::new(self.radius * sx, self.radius * sy);
            let pb = other.center + Vector::new(other.radius * sx, other.radius * sy) * sign;
            match cline.intersection(&Segment::new(pa, pb)) {
                Ok(i) => Some(i),
                Err(e) => {
                    debug!(sx, sy, error = %e, "trial line rejected, trying next offset");
                    None
                }
            }
        });
        let Some(i) = found else {
            warn!(
                c1 = %self.center,
                c2 = %other.center,
                "no trial line crossed the center line"
            );
            return Err(GeometryError::TangentConstructionFailed);
        };

        let (t1a, t1b) = self.tangents(&i)?;
        let (t2a, t2b) = other.tangents(&i)?;
        let line1 = Segment::new(t1a.b(), t2a.b());
        let line2 = Segment::new(t1b.b(), t2b.b());

        let (first, second) =
            if ccw(&self.center, &other.center, &t1a.b()) == Orientation::CounterClockwise {
                (line1, line2)
            } else {
                (line2, line1)
            };
        Ok(CommonTangents {
            first,
            second,
            intersection: Some(i),
        })
    }

    /// Foot of the perpendicular from the center onto `line`, if the line
    /// meets the circle (tangency included).
    ///
    /// This is the midpoint of the two intersection points.
    #[must_use]
    pub fn intersects<L: Linear + ?Sized>(&self, line: &L) -> Option<Vector> {
        let p = line.drop_perpendicular(&self.center).ok()?;
        (self.center.dist(&p) <= self.radius).then_some(p)
    }

    /// The two points where `line` crosses the circle.
    ///
    /// The first point is offset from the foot along `line.direction()`, the
    /// second against it. A tangent line yields the same point twice.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NoIntersection`] if the line misses.
    pub fn intersections<L: Linear + ?Sized>(&self, line: &L) -> Result<(Vector, Vector)> {
        let p = self.intersects(line).ok_or(GeometryError::NoIntersection)?;
        let d = self.center.dist(&p);
        let h = (self.radius * self.radius - d * d).sqrt();
        let dir = line.direction();
        Ok((p + dir * h, p - dir * h))
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.center, self.radius)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::geometry::Line;

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle::new(Vector::new(x, y), r)
    }

    /// Checks that `t` touches both circles at its endpoints.
    fn assert_touches(t: &Segment, c1: &Circle, c2: &Circle) {
        assert_abs_diff_eq!(t.a().dist(&c1.center()), c1.radius(), epsilon = 1e-6);
        assert_abs_diff_eq!(t.b().dist(&c2.center()), c2.radius(), epsilon = 1e-6);
        assert_abs_diff_eq!(t.dist(&c1.center()).unwrap(), c1.radius(), epsilon = 1e-6);
        assert_abs_diff_eq!(t.dist(&c2.center()).unwrap(), c2.radius(), epsilon = 1e-6);
    }

    #[test]
    fn tangents_from_external_point() {
        let c = circle(3.0, 3.0, 3.0);
        let point = Vector::new(6.0, 0.0);
        let (t1, t2) = c.tangents(&point).unwrap();
        for t in [&t1, &t2] {
            assert_eq!(t.a(), point);
            assert_relative_eq!(t.length(), 3.0, epsilon = 1e-9);
            assert_abs_diff_eq!(t.b().dist(&c.center()), 3.0, epsilon = 1e-9);
        }
        assert!(t1.b().approx_eq(&Vector::new(6.0, 3.0)), "t1={t1}");
        assert!(t2.b().approx_eq(&Vector::new(3.0, 0.0)), "t2={t2}");
    }

    #[test]
    fn tangent_is_perpendicular_to_radius() {
        let c = circle(-1.0, 2.0, 1.5);
        let (t1, t2) = c.tangents(&Vector::new(4.0, -3.0)).unwrap();
        for t in [t1, t2] {
            let radius = t.b() - c.center();
            assert_abs_diff_eq!(radius.dotp(&(t.b() - t.a())), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn tangents_from_inside_fail() {
        let c = circle(0.0, 0.0, 2.0);
        assert_eq!(
            c.tangents(&Vector::new(1.0, 0.5)),
            Err(GeometryError::PointInsideCircle)
        );
    }

    #[test]
    fn tangents_from_point_on_circle_fail() {
        let c = circle(0.0, 0.0, 5.0);
        assert_eq!(
            c.tangents(&Vector::new(3.0, 4.0)),
            Err(GeometryError::PointOnCircle)
        );
    }

    #[test]
    fn tangents_to_point_circle_meet_the_center() {
        let c = circle(1.0, 1.0, 0.0);
        let (t1, t2) = c.tangents(&Vector::new(4.0, 5.0)).unwrap();
        assert!(t1.b().approx_eq(&c.center()));
        assert!(t2.b().approx_eq(&c.center()));
    }

    #[test]
    fn intersections_with_vertical_line() {
        let c = circle(3.0, 3.0, 3.0);
        // x = 4
        let line = Line::new(1.0, 0.0, 4.0);
        let foot = c.intersects(&line).unwrap();
        assert_eq!(foot, Vector::new(4.0, 3.0));

        let (p1, p2) = c.intersections(&line).unwrap();
        assert_abs_diff_eq!(p1.dist(&c.center()), 3.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p2.dist(&c.center()), 3.0, epsilon = 1e-6);
        assert!(((p1 + p2) * 0.5).approx_eq(&foot));
        // first point lies along the line direction
        assert!(p1.y() > p2.y());
    }

    #[test]
    fn intersections_follow_segment_direction() {
        let c = circle(0.0, 0.0, 1.0);
        let s = Segment::new(Vector::new(5.0, 0.0), Vector::new(-5.0, 0.0));
        let (p1, p2) = c.intersections(&s).unwrap();
        assert!(p1.approx_eq(&Vector::new(-1.0, 0.0)), "p1={p1}");
        assert!(p2.approx_eq(&Vector::new(1.0, 0.0)), "p2={p2}");
    }

    #[test]
    fn tangent_line_touches_once() {
        let c = circle(0.0, 0.0, 2.0);
        // y = 2
        let (p1, p2) = c.intersections(&Line::new(0.0, 1.0, 2.0)).unwrap();
        assert!(p1.approx_eq(&Vector::new(0.0, 2.0)));
        assert!(p1.approx_eq(&p2));
    }

    #[test]
    fn missing_line_has_no_intersection() {
        let c = circle(0.0, 0.0, 1.0);
        let line = Line::new(0.0, 1.0, 3.0);
        assert!(c.intersects(&line).is_none());
        assert_eq!(c.intersections(&line), Err(GeometryError::NoIntersection));
    }

    #[test]
    fn outer_tangents_equal_radii() {
        let c1 = circle(0.0, 0.0, 1.0);
        let c2 = circle(4.0, 0.0, 1.0);
        let common = c1.common(&c2, true).unwrap();
        assert!(common.intersection.is_none());
        assert!(common.first.a().approx_eq(&Vector::new(0.0, 1.0)));
        assert!(common.first.b().approx_eq(&Vector::new(4.0, 1.0)));
        assert!(common.second.a().approx_eq(&Vector::new(0.0, -1.0)));
        assert!(common.second.b().approx_eq(&Vector::new(4.0, -1.0)));
    }

    #[test]
    fn outer_tangents_equal_radii_reversed_centers() {
        let c1 = circle(4.0, 0.0, 1.0);
        let c2 = circle(0.0, 0.0, 1.0);
        let common = c1.common(&c2, true).unwrap();
        // left of the line from (4,0) to (0,0) is below the x-axis
        assert!(common.first.a().approx_eq(&Vector::new(4.0, -1.0)));
        assert!(common.first.b().approx_eq(&Vector::new(0.0, -1.0)));
    }

    #[test]
    fn outer_tangents_different_radii() {
        let c1 = circle(0.0, 0.0, 2.0);
        let c2 = circle(6.0, 0.0, 1.0);
        let common = c1.common(&c2, true).unwrap();
        let i = common.intersection.unwrap();
        assert!(i.approx_eq(&Vector::new(12.0, 0.0)), "i={i}");
        assert_touches(&common.first, &c1, &c2);
        assert_touches(&common.second, &c1, &c2);
        assert_eq!(
            ccw(&c1.center(), &c2.center(), &common.first.a()),
            Orientation::CounterClockwise
        );
        assert_eq!(
            ccw(&c1.center(), &c2.center(), &common.second.a()),
            Orientation::Clockwise
        );
    }

    #[test]
    fn inner_tangents() {
        let c1 = circle(0.0, 0.0, 1.0);
        let c2 = circle(6.0, 0.0, 2.0);
        let common = c1.common(&c2, false).unwrap();
        let i = common.intersection.unwrap();
        assert!(i.approx_eq(&Vector::new(2.0, 0.0)), "i={i}");
        assert_touches(&common.first, &c1, &c2);
        assert_touches(&common.second, &c1, &c2);
        assert!(common.first.a().y() > 0.0);
        // inner tangents cross between the circles
        assert!(common.first.b().y() < 0.0);
    }

    #[test]
    fn vertical_center_line_uses_second_offset() {
        crate::test_support::init_tracing();
        let c1 = circle(0.0, 0.0, 2.0);
        let c2 = circle(0.0, 6.0, 1.0);
        let common = c1.common(&c2, true).unwrap();
        let i = common.intersection.unwrap();
        assert!(i.approx_eq(&Vector::new(0.0, 12.0)), "i={i}");
        assert_touches(&common.first, &c1, &c2);
        assert!(common.first.a().x() < 0.0);
    }

    #[test]
    fn inner_tangents_of_overlapping_circles_fail() {
        crate::test_support::init_tracing();
        let c1 = circle(0.0, 0.0, 2.0);
        let c2 = circle(3.0, 0.0, 2.0);
        assert_eq!(
            c1.common(&c2, false),
            Err(GeometryError::PointInsideCircle)
        );
    }

    #[test]
    fn display() {
        assert_eq!(circle(1.0, 2.0, 3.5).to_string(), "{(1.000, 2.000) 3.5}");
    }
}
