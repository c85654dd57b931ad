use thiserror::Error;

/// Degenerate configurations reported by geometric constructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The two lines have a zero determinant (parallel or coincident).
    #[error("lines are parallel")]
    ParallelLines,

    /// A tangent was requested from a point strictly inside the circle.
    #[error("point lies inside the circle")]
    PointInsideCircle,

    /// A tangent was requested from a point exactly on the circle.
    #[error("point lies on the circle")]
    PointOnCircle,

    /// The line does not meet the circle.
    #[error("line does not intersect the circle")]
    NoIntersection,

    /// Neither trial line of the common-tangent search crossed the center line.
    ///
    /// Not expected for circles with distinct centers; seeing it means the
    /// search itself needs investigating.
    #[error("common tangent construction failed for non-concentric circles")]
    TangentConstructionFailed,
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
