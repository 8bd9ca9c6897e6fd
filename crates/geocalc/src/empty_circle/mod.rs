//! Largest empty circle from the circumcircles of a Delaunay triangulation.
//!
//! Purpose
//! - Among the circumcircles of Delaunay triangles, find the largest one whose
//!   interior holds no input point.
//!
//! Model
//! - Triangulate with `delaunator` (collinear or < 3 distinct points give no
//!   triangles, hence no result).
//! - Circumcircle from 3×3 determinants (`circumcircle`).
//! - Emptiness ignores the triangle's own vertices (and duplicates of them):
//!   they sit on the boundary and must not reject their own circle.
//! - Keep the strictly largest radius; the first triangle wins ties.
//!
//! Code cross-refs: `crate::cfg` (tolerances), `crate::shapes::Circle`.

mod circumcircle;

pub use circumcircle::{circumcircle, circumcircle_eps};

use crate::cfg;
use crate::shapes::{Circle, Point};

/// Tolerances for the circumcircle search.
#[derive(Clone, Copy, Debug)]
pub struct CircleCfg {
    /// Triangles with `|det| <= eps_det` are skipped as degenerate.
    pub eps_det: f64,
    /// A point disqualifies a circle only if `dist < radius - eps_contain`.
    pub eps_contain: f64,
}

impl Default for CircleCfg {
    fn default() -> Self {
        Self {
            eps_det: cfg::DET_EPS,
            eps_contain: cfg::CONTAIN_EPS,
        }
    }
}

/// Triangle vertex indices into `points`, as produced by `delaunator`.
pub fn delaunay_triangles(points: &[Point]) -> Vec<[usize; 3]> {
    let input: Vec<delaunator::Point> = points
        .iter()
        .map(|p| delaunator::Point { x: p.x, y: p.y })
        .collect();
    let tri = delaunator::triangulate(&input);
    tri.triangles
        .chunks_exact(3)
        .map(|t| [t[0], t[1], t[2]])
        .collect()
}

/// Largest empty circumcircle with default tolerances.
pub fn largest_empty_circle(points: &[Point]) -> Option<Circle> {
    largest_empty_circle_with(points, CircleCfg::default())
}

/// Largest empty circumcircle; `None` if nothing can be triangulated.
pub fn largest_empty_circle_with(points: &[Point], cfg: CircleCfg) -> Option<Circle> {
    if points.len() < 3 || points.iter().any(|p| !p.is_finite()) {
        return None;
    }
    let mut best: Option<Circle> = None;
    let mut max_radius = 0.0;
    for [i, j, k] in delaunay_triangles(points) {
        let verts = [points[i], points[j], points[k]];
        let Some(circle) = circumcircle_eps(verts[0], verts[1], verts[2], cfg.eps_det) else {
            continue;
        };
        if circle.radius() <= max_radius {
            continue;
        }
        if is_empty_except(&circle, &verts, points, cfg.eps_contain) {
            max_radius = circle.radius();
            best = Some(circle);
        }
    }
    best
}

/// No point other than `own` lies strictly inside `circle`.
fn is_empty_except(circle: &Circle, own: &[Point; 3], points: &[Point], eps: f64) -> bool {
    let limit = circle.radius() - eps;
    points
        .iter()
        .filter(|p| !own.contains(p))
        .all(|p| circle.center().distance_to(*p) >= limit)
}
