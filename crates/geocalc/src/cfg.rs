//! Tolerance defaults and input limits.
//!
//! Policy
//! - Orientation, closest pair, and hull comparisons are exact on `f64`; only
//!   the circumcircle construction needs tolerances.
//! - Defaults are fixed constants. Callers that need different values pass an
//!   explicit `CircleCfg` instead of touching these.

/// Below this absolute triangle determinant the three points are treated as
/// collinear and no circumcircle is built.
pub(crate) const DET_EPS: f64 = 1e-12;
/// Slack for "strictly inside": a point must be closer than `radius - CONTAIN_EPS`
/// to disqualify a circle, so co-circular points on the boundary do not.
pub(crate) const CONTAIN_EPS: f64 = 1e-9;

/// Upper bound on one `random_points` request (console and `cli random`).
pub const MAX_RANDOM_POINTS: usize = 100_000;
