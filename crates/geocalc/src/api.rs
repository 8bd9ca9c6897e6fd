//! Curated entry points for callers (console, batch runner, bindings).
//!
//! Important
//! - These six functions are the surface the I/O layers call into; they take
//!   parsed coordinates and return values or sentinels, never panic.
//! - Prefer these re-exports over deep module paths.

pub use crate::closest_pair::{closest_pair, ClosestPair};
pub use crate::convex_hull::{convex_hull, convex_hull_pairs, HullError};
pub use crate::empty_circle::largest_empty_circle;
pub use crate::predicates::{distance, do_intersect, orientation, Orientation};
pub use crate::shapes::{Circle, Line, Point, ShapeError};
