//! Constructions and predicates composed from the basic shapes.

mod creation;
mod query;

pub use creation::circle_through_three_points;
pub use query::{circle_blocks_beyond, segment_meets_circle_within};
