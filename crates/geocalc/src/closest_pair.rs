//! Closest pair of points by divide and conquer.
//!
//! Model
//! - Sort by x once; recursive calls work on x-sorted sub-slices.
//! - Base case `n <= 3` is brute force.
//! - Merge step scans the strip `|x - x_mid| < d`, sorted by y, and stops the
//!   inner loop as soon as the y gap reaches `d`.
//!
//! Ties keep whichever pair reached the smaller distance first (strict `<`).
//! Recursion depth is O(log n).

use serde::Serialize;

use crate::predicates::distance;
use crate::shapes::Point;

/// Minimum distance and its witnesses.
///
/// Fewer than two points yield `distance = +inf` and `pair = None`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClosestPair {
    pub distance: f64,
    pub pair: Option<(Point, Point)>,
}

impl ClosestPair {
    /// The `+inf` sentinel returned for inputs with fewer than two points.
    pub const NONE: ClosestPair = ClosestPair {
        distance: f64::INFINITY,
        pair: None,
    };

    #[inline]
    pub fn is_none(&self) -> bool {
        self.pair.is_none()
    }

    /// Is `p` one of the two witnesses?
    pub fn involves(&self, p: Point) -> bool {
        self.pair.is_some_and(|(a, b)| a == p || b == p)
    }
}

/// Closest pair over an arbitrary (unsorted) point list.
pub fn closest_pair(points: &[Point]) -> ClosestPair {
    let mut sorted = points.to_vec();
    // Stable sort by x only; equal-x points keep their input order.
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
    closest_sorted(&sorted)
}

/// All-pairs scan, O(n²).
pub fn brute_force(points: &[Point]) -> ClosestPair {
    let mut best = ClosestPair::NONE;
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            let d = distance(a, b);
            if d < best.distance {
                best = ClosestPair {
                    distance: d,
                    pair: Some((a, b)),
                };
            }
        }
    }
    best
}

/// Pre: `points` sorted by x.
fn closest_sorted(points: &[Point]) -> ClosestPair {
    let n = points.len();
    if n <= 3 {
        return brute_force(points);
    }
    let mid = n / 2;
    let mid_x = points[mid].x;
    let left = closest_sorted(&points[..mid]);
    let right = closest_sorted(&points[mid..]);
    let best = if left.distance < right.distance {
        left
    } else {
        right
    };

    let mut strip: Vec<Point> = points
        .iter()
        .copied()
        .filter(|p| (p.x - mid_x).abs() < best.distance)
        .collect();
    strip_closest(&mut strip, best)
}

/// Improve `best` with pairs straddling the split line.
fn strip_closest(strip: &mut [Point], mut best: ClosestPair) -> ClosestPair {
    strip.sort_by(|a, b| a.y.total_cmp(&b.y));
    for i in 0..strip.len() {
        for j in i + 1..strip.len() {
            if strip[j].y - strip[i].y >= best.distance {
                break;
            }
            let d = distance(strip[i], strip[j]);
            if d < best.distance {
                best = ClosestPair {
                    distance: d,
                    pair: Some((strip[i], strip[j])),
                };
            }
        }
    }
    best
}
