use nalgebra::Matrix3;

use crate::cfg::DET_EPS;
use crate::shapes::{Circle, Point};

/// Circle through `a`, `b`, `c`; `None` for (near-)collinear triples.
pub fn circumcircle(a: Point, b: Point, c: Point) -> Option<Circle> {
    circumcircle_eps(a, b, c, DET_EPS)
}

/// Determinant form:
/// `A = det[x y 1]`, `cx = det[s y 1] / 2A`, `cy = det[x s 1] / 2A`
/// with `s = x² + y²` per row. Radius is the distance to `a`.
pub fn circumcircle_eps(a: Point, b: Point, c: Point, eps_det: f64) -> Option<Circle> {
    let sq = |p: Point| p.x * p.x + p.y * p.y;
    #[rustfmt::skip]
    let area = Matrix3::new(
        a.x, a.y, 1.0,
        b.x, b.y, 1.0,
        c.x, c.y, 1.0,
    )
    .determinant();
    if !area.is_finite() || area.abs() <= eps_det {
        return None;
    }
    #[rustfmt::skip]
    let dx = Matrix3::new(
        sq(a), a.y, 1.0,
        sq(b), b.y, 1.0,
        sq(c), c.y, 1.0,
    )
    .determinant();
    #[rustfmt::skip]
    let dy = Matrix3::new(
        a.x, sq(a), 1.0,
        b.x, sq(b), 1.0,
        c.x, sq(c), 1.0,
    )
    .determinant();
    let center = Point::new(dx / (2.0 * area), dy / (2.0 * area));
    Circle::new(center, center.distance_to(a)).ok()
}
