//! Value types for the plane: `Point`, `Line`, `Circle`.
//!
//! - `Point`: exact equality, lexicographic (x, y) ordering for deterministic sorts.
//! - `Line`: ordered endpoint pair; zero-length lines are rejected.
//! - `Circle`: center plus non-negative radius.
//!
//! Construction failures surface as `ShapeError` values; nothing here panics.

mod circle;
mod line;
mod point;

pub use circle::Circle;
pub use line::Line;
pub use point::Point;

use std::fmt;

/// Rejected geometric construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeError {
    /// `Line::new` with `start == end`.
    DegenerateLine { at: Point },
    /// `Circle::new` with a negative or non-finite radius.
    NegativeRadius { radius: f64 },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::DegenerateLine { at } => {
                write!(f, "start and end points cannot be the same ({at})")
            }
            ShapeError::NegativeRadius { radius } => {
                write!(f, "radius must be non-negative (got {radius})")
            }
        }
    }
}

impl std::error::Error for ShapeError {}
