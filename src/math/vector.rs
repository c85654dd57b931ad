use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::{Point2, Vector2, EQUALITY_TOLERANCE, HASH_DECIMALS};

/// A 2D point or displacement.
///
/// `==` compares coordinates exactly. Geometric code that wants "the same
/// point" should use [`Vector::approx_eq`] or wrap values in [`ApproxKey`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector(Vector2);

impl Vector {
    /// Creates a vector from its coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self(Vector2::new(x, y))
    }

    /// The zero vector.
    #[must_use]
    pub fn zeros() -> Self {
        Self(Vector2::zeros())
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Euclidean norm.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size_squared().sqrt()
    }

    /// Squared Euclidean norm.
    #[must_use]
    pub fn size_squared(&self) -> f64 {
        self.0.x * self.0.x + self.0.y * self.0.y
    }

    /// Distance between two points.
    #[must_use]
    pub fn dist(&self, other: &Self) -> f64 {
        (*self - *other).size()
    }

    /// Scales to unit length.
    ///
    /// The zero vector yields non-finite components; no error is raised.
    #[must_use]
    pub fn normalize(&self) -> Self {
        *self * (1.0 / self.size())
    }

    /// 2D cross product, `|a||b| sin(theta)`.
    #[must_use]
    pub fn crossp(&self, other: &Self) -> f64 {
        self.0.x * other.0.y - self.0.y * other.0.x
    }

    /// Dot product, `|a||b| cos(theta)`.
    #[must_use]
    pub fn dotp(&self, other: &Self) -> f64 {
        self.0.dot(&other.0)
    }

    /// Returns true if the two points are closer than [`EQUALITY_TOLERANCE`].
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.dist(other) < EQUALITY_TOLERANCE
    }

    /// Coordinates rounded to [`HASH_DECIMALS`] places, scaled to integers.
    ///
    /// Two vectors that are [`approx_eq`](Self::approx_eq) usually share a key,
    /// but a pair straddling a rounding boundary will not. Rounding can never
    /// agree exactly with a distance threshold, so this is accepted.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn hash_key(&self) -> (i64, i64) {
        let scale = 10f64.powi(HASH_DECIMALS);
        (
            (self.0.x * scale).round() as i64,
            (self.0.y * scale).round() as i64,
        )
    }

    /// Borrows the underlying nalgebra vector.
    #[must_use]
    pub fn as_nalgebra(&self) -> &Vector2 {
        &self.0
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for Vector {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.0.x, self.0.y)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector> for (f64, f64) {
    fn from(v: Vector) -> Self {
        (v.0.x, v.0.y)
    }
}

impl From<Vector2> for Vector {
    fn from(v: Vector2) -> Self {
        Self(v)
    }
}

impl From<Vector> for Vector2 {
    fn from(v: Vector) -> Self {
        v.0
    }
}

impl From<Point2> for Vector {
    fn from(p: Point2) -> Self {
        Self(p.coords)
    }
}

impl From<Vector> for Point2 {
    fn from(v: Vector) -> Self {
        Point2::from(v.0)
    }
}

/// A [`Vector`] compared by [`Vector::approx_eq`] and hashed by
/// [`Vector::hash_key`], for use as a set or map key.
///
/// Tolerance equality is not transitive, so a `HashSet<ApproxKey>` may keep
/// two points that are each within tolerance of a third.
#[derive(Debug, Clone, Copy)]
pub struct ApproxKey(pub Vector);

impl PartialEq for ApproxKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.approx_eq(&other.0)
    }
}

impl Eq for ApproxKey {}

impl Hash for ApproxKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash_key().hash(state);
    }
}

impl From<Vector> for ApproxKey {
    fn from(v: Vector) -> Self {
        Self(v)
    }
}
