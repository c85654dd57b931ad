use tracing::trace;

use crate::error::GeometryError;
use crate::geometry::{Circle, Segment};
use crate::math::Vector;

/// Returns true if the circle crosses the segment from `a` to `b` strictly
/// between its endpoints.
///
/// A line that misses the circle entirely is simply `false`.
#[must_use]
pub fn segment_meets_circle_within(circle: &Circle, a: &Vector, b: &Vector) -> bool {
    let segment = Segment::new(*a, *b);
    match circle.intersections(&segment) {
        Ok((p, q)) => segment.contains(&p) || segment.contains(&q),
        Err(e) => no_intersection(circle, &segment, e),
    }
}

/// Returns true if the circle meets the segment's line past its far end.
///
/// Looks at the first intersection point only: it must be farther from
/// `segment.a()` than the segment is long, and farther from `a` than from
/// `b`. Used to test whether a circle blocks a path extended beyond `b`.
#[must_use]
pub fn circle_blocks_beyond(circle: &Circle, segment: &Segment) -> bool {
    match circle.intersections(segment) {
        Ok((p, _)) => {
            let from_a = p.dist(&segment.a());
            from_a > segment.length() && from_a > p.dist(&segment.b())
        }
        Err(e) => no_intersection(circle, segment, e),
    }
}

fn no_intersection(circle: &Circle, segment: &Segment, e: GeometryError) -> bool {
    trace!(%circle, %segment, error = %e, "circle misses segment line");
    false
}
