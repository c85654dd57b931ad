use std::fmt;

use super::Linear;

/// An infinite line in general form.
///
/// Stores coefficients `(A, B, C)`; a point `(x, y)` is on the line when
/// `A*x + B*y = C`. `A` and `B` must not both be zero, which is not checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    a: f64,
    b: f64,
    c: f64,
}

impl Line {
    /// Creates a line from its coefficients.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// The `(A, B, C)` coefficients.
    #[must_use]
    pub fn params(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }
}

impl Linear for Line {
    fn line(&self) -> &Line {
        self
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}x + {:.3}y = {:.3}", self.a, self.b, self.c)
    }
}
