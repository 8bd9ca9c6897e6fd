use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Point, ShapeError};
use crate::predicates::do_intersect;

/// Directed segment from `start` to `end`.
///
/// Invariants:
/// - `start != end` (enforced by `Line::new` and by deserialization).
/// - Equality compares endpoints in order; `a→b` and `b→a` are different lines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLine")]
pub struct Line {
    start: Point,
    end: Point,
}

#[derive(Deserialize)]
struct RawLine {
    start: Point,
    end: Point,
}

impl TryFrom<RawLine> for Line {
    type Error = ShapeError;
    fn try_from(raw: RawLine) -> Result<Self, Self::Error> {
        Line::new(raw.start, raw.end)
    }
}

impl Line {
    pub fn new(start: Point, end: Point) -> Result<Self, ShapeError> {
        if start == end {
            return Err(ShapeError::DegenerateLine { at: start });
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// Rise over run; `+inf` for vertical lines.
    pub fn slope(&self) -> f64 {
        let dx = self.end.x - self.start.x;
        if dx == 0.0 {
            return f64::INFINITY;
        }
        (self.end.y - self.start.y) / dx
    }

    /// Exact slope comparison (vertical lines are parallel to each other).
    pub fn is_parallel_to(&self, other: &Line) -> bool {
        self.slope() == other.slope()
    }

    /// Closed-segment intersection test, see `predicates::do_intersect`.
    pub fn intersects(&self, other: &Line) -> bool {
        do_intersect(self.start, self.end, other.start, other.end)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line(start={}, end={})", self.start, self.end)
    }
}
