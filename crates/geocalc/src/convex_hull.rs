//! Graham scan convex hull.
//!
//! - Pivot: lowest y, then lowest x.
//! - Sort by `atan2` around the pivot; equal angles fall back to `Point::lex_cmp`.
//! - Pop while the last two hull points and the candidate do not turn
//!   counterclockwise, then push. Interior collinear boundary points are
//!   dropped by that rule.
//! - The returned polygon is closed: it starts and ends at the pivot.
//!
//! Equal-angle tie-break: lexicographic order visits points on a ray from the
//! pivot nearest-first when the ray points right (dx >= 0) and farthest-first
//! when it points left. On the last ray before closing, farthest-first keeps
//! the nearer collinear point as an extra vertex on the closing edge.

use std::fmt;

use crate::predicates::{orientation, Orientation};
use crate::shapes::Point;

/// Hull could not be formed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullError {
    /// Fewer than three input points.
    NotEnoughPoints { got: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::NotEnoughPoints { .. } => {
                write!(f, "Not possible for Convex Hull with less than 3 points.")
            }
        }
    }
}

impl std::error::Error for HullError {}

/// Lowest y, ties broken by lowest x. `None` on empty input.
pub fn pivot(points: &[Point]) -> Option<Point> {
    points.iter().copied().min_by(|a, b| {
        a.y.total_cmp(&b.y)
            .then_with(|| a.x.total_cmp(&b.x))
    })
}

/// Closed hull polygon `[pivot, …, pivot]` in counterclockwise order.
pub fn convex_hull(points: &[Point]) -> Result<Vec<Point>, HullError> {
    if points.len() < 3 {
        return Err(HullError::NotEnoughPoints { got: points.len() });
    }
    let pivot = pivot(points).ok_or(HullError::NotEnoughPoints { got: 0 })?;

    let mut by_angle: Vec<(f64, Point)> = points
        .iter()
        .map(|&p| ((p.y - pivot.y).atan2(p.x - pivot.x), p))
        .collect();
    by_angle.sort_by(|(aa, a), (ab, b)| aa.total_cmp(ab).then_with(|| a.lex_cmp(b)));

    let mut hull: Vec<Point> = Vec::with_capacity(points.len() + 1);
    hull.push(pivot);
    for (_, p) in by_angle {
        while hull.len() >= 2
            && orientation(hull[hull.len() - 2], hull[hull.len() - 1], p)
                != Orientation::CounterClockwise
        {
            hull.pop();
        }
        hull.push(p);
    }
    hull.push(pivot);
    Ok(hull)
}

/// Tuple-based adapter for callers holding raw coordinate pairs.
pub fn convex_hull_pairs(points: &[(f64, f64)]) -> Result<Vec<(f64, f64)>, HullError> {
    let pts: Vec<Point> = points.iter().copied().map(Point::from).collect();
    Ok(convex_hull(&pts)?.into_iter().map(<(f64, f64)>::from).collect())
}
