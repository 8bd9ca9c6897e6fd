//! Geometric primitives shared by the hull and intersection engines.
//!
//! - `distance`: Euclidean distance.
//! - `orientation`: turn direction of an ordered triple.
//! - `on_segment`: bounding-box containment, valid for collinear triples only.
//! - `do_intersect`: closed-segment intersection from four orientations.
//!
//! All comparisons are exact on `f64`; no robust predicates are attempted.

use serde::Serialize;

use crate::shapes::Point;

/// Turn direction of an ordered triple `(p, q, r)`.
///
/// Numeric codes match the console/JSON surface: 0 collinear, 1 clockwise,
/// 2 counterclockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Orientation {
    Collinear = 0,
    Clockwise = 1,
    CounterClockwise = 2,
}

impl Orientation {
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Orientation of the reversed triple `(r, q, p)`.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Collinear => Orientation::Collinear,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }
}

/// Euclidean distance.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    p1.distance_to(p2)
}

/// Turn value of `(p, q, r)`: positive for a clockwise turn, negative for a
/// counterclockwise turn (y axis up), zero when collinear.
#[inline]
pub fn turn_value(p: Point, q: Point, r: Point) -> f64 {
    (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)
}

/// Classify the turn `p → q → r`.
#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let val = turn_value(p, q, r);
    if val > 0.0 {
        Orientation::Clockwise
    } else if val < 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Collinear
    }
}

/// `q` lies within the axis-aligned bounding box of segment `pr` (inclusive).
///
/// Pre: `p`, `q`, `r` are collinear.
#[inline]
pub fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q.x >= p.x.min(r.x) && q.x <= p.x.max(r.x) && q.y >= p.y.min(r.y) && q.y <= p.y.max(r.y)
}

/// Do the closed segments `p1q1` and `p2q2` share at least one point?
pub fn do_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }
    // Collinear special cases: an endpoint of one segment lies on the other.
    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}
