//! Planar computational geometry: closest pair, convex hull, largest empty
//! circle, and segment intersection over in-memory point/line collections.
//!
//! Layout
//! - `shapes`: `Point`, `Line`, `Circle` value types.
//! - `predicates`: distance, orientation, and the segment intersection test.
//! - `closest_pair`, `convex_hull`, `empty_circle`: the algorithm engines.
//! - `session`: owned point/line collections with highlight flags and a
//!   small text command language used by the console.
//! - `rand`: reproducible random points and lines.
//!
//! API Policy
//! - Callers outside this workspace should go through `api` or `prelude`.
//!   Module paths below them may move.

pub mod api;
pub mod cfg;
pub mod closest_pair;
pub mod convex_hull;
pub mod empty_circle;
pub mod predicates;
pub mod rand;
pub mod session;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::closest_pair::{closest_pair, ClosestPair};
    pub use crate::convex_hull::{convex_hull, HullError};
    pub use crate::empty_circle::{largest_empty_circle, CircleCfg};
    pub use crate::predicates::{distance, do_intersect, orientation, Orientation};
    pub use crate::rand::{random_lines, random_points, PointBounds, ReplayToken};
    pub use crate::session::{Command, Level, Message, Session};
    pub use crate::shapes::{Circle, Line, Point, ShapeError};
}
