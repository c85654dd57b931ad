pub mod hull;
pub mod measure;
pub mod orientation;
pub mod vector;

pub use hull::{convex_hull, convex_hull_perimeter, sort_counter_clockwise};
pub use measure::{flatten_3d_to_2d, heron, n_dim_distance, triangle_area};
pub use orientation::{ccw, Orientation};
pub use vector::{ApproxKey, Vector};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Two points closer than this are considered the same point.
pub const EQUALITY_TOLERANCE: f64 = 1e-6;

/// Decimal places kept when hashing point coordinates.
pub const HASH_DECIMALS: i32 = 6;
