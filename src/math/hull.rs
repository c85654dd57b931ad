use std::cmp::Ordering;

use super::{ccw, Orientation, Vector};

/// Sorts `points` counter-clockwise around `root`.
///
/// Collinear points (including `root` itself) are ordered nearest first.
/// `root` is expected to be an extreme point of the set, such as the one
/// picked by [`convex_hull`]; otherwise the angular order is not total.
pub fn sort_counter_clockwise(points: &mut [Vector], root: &Vector) {
    points.sort_by(|a, b| match ccw(root, a, b) {
        Orientation::CounterClockwise => Ordering::Less,
        Orientation::Clockwise => Ordering::Greater,
        Orientation::Collinear => (*a - *root)
            .size_squared()
            .total_cmp(&(*b - *root).size_squared()),
    });
}

/// Convex hull by Graham scan.
///
/// Starts at the leftmost point (bottom-most among ties) and walks
/// counter-clockwise. The hull is returned closed: its first point is
/// repeated at the end. Collinear points on the boundary are dropped.
/// Inputs with fewer than two points are returned unchanged.
#[must_use]
pub fn convex_hull(points: &[Vector]) -> Vec<Vector> {
    let Some(&pivot) = points
        .iter()
        .min_by(|a, b| a.x().total_cmp(&b.x()).then(a.y().total_cmp(&b.y())))
    else {
        return Vec::new();
    };
    if points.len() < 2 {
        return points.to_vec();
    }

    let mut sorted = points.to_vec();
    sort_counter_clockwise(&mut sorted, &pivot);
    sorted.push(sorted[0]);

    let mut hull: Vec<Vector> = Vec::with_capacity(sorted.len());
    for &pc in &sorted {
        while hull.len() >= 2 {
            let pa = hull[hull.len() - 2];
            let pb = hull[hull.len() - 1];
            if ccw(&pa, &pb, &pc) == Orientation::CounterClockwise {
                break;
            }
            hull.pop();
        }
        hull.push(pc);
    }
    hull
}

/// Perimeter of the convex hull of `points`.
#[must_use]
pub fn convex_hull_perimeter(points: &[Vector]) -> f64 {
    convex_hull(points)
        .windows(2)
        .map(|w| w[0].dist(&w[1]))
        .sum()
}
