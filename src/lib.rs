//! Planar geometry primitives.
//!
//! Vectors, infinite lines, segments and circles, with the constructions
//! built from them: intersections, tangents, common tangents, the circle
//! through three points, triangle areas and a distance-preserving flattening
//! of three points into the plane.
//!
//! Degenerate inputs surface as [`GeometryError`]. Points are compared with
//! [`math::Vector::approx_eq`] using [`math::EQUALITY_TOLERANCE`].

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{GeometryError, Result};
