use super::Vector;

/// Area of a triangle from its three side lengths (Heron's formula).
///
/// Side lengths that violate the triangle inequality give `NaN`.
#[must_use]
pub fn heron(a: f64, b: f64, c: f64) -> f64 {
    let s = (a + b + c) / 2.0;
    (s * (s - a) * (s - b) * (s - c)).sqrt()
}

/// Area of the triangle spanned by two edge vectors sharing a corner.
#[must_use]
pub fn triangle_area(v1: &Vector, v2: &Vector) -> f64 {
    v1.crossp(v2).abs() / 2.0
}

/// Euclidean distance between two points of any dimension.
///
/// Coordinates are paired up positionally; if one slice is longer its extra
/// coordinates are ignored.
#[must_use]
pub fn n_dim_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(p, q)| (p - q) * (p - q))
        .sum::<f64>()
        .sqrt()
}

/// Places three points of any dimension in the plane, keeping their
/// pairwise distances.
///
/// `a` goes to the origin and `b` onto the positive x-axis. `c` lands in the
/// upper half-plane; its x-coordinate is `+p` or `-p` (the distance from `a`
/// to the foot of the height), picked so that its distance to `b` matches.
#[must_use]
pub fn flatten_3d_to_2d(a: &[f64], b: &[f64], c: &[f64]) -> [Vector; 3] {
    let d1 = n_dim_distance(a, b);
    let d2 = n_dim_distance(a, c);
    let d3 = n_dim_distance(b, c);

    let h = heron(d1, d2, d3) / d1 * 2.0;
    let p = (d2 * d2 - h * h).sqrt();
    let q = (d3 * d3 - h * h).sqrt();

    // Foot between a and b, beyond b, or behind a.
    let s = if p + q <= d1 || p > q { p } else { -p };

    [Vector::zeros(), Vector::new(d1, 0.0), Vector::new(s, h)]
}
