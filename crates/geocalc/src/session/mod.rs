//! Session state: the point/line collections the algorithms run on.
//!
//! Purpose
//! - Own the mutable collections (points, lines, result circles) together
//!   with per-element highlight flags, and run the engines against them.
//! - Provide the text command surface used by the console (`command`,
//!   `execute`) and a JSON-ready view for UIs (`snapshot`).
//!
//! Invariants
//! - `point_highlights.len() == points.len()` and
//!   `line_highlights.len() == lines.len()` after every public call.
//! - Failed operations leave the collections untouched.
//!
//! A `Session` is an explicit context owned by its caller; there is no
//! process-wide state.

mod command;
mod execute;
mod snapshot;

pub use command::{Command, CommandError, HELP};
pub use execute::{Level, Message};
pub use snapshot::{CircleData, LineData, PointData, Snapshot};

use std::fmt;

use crate::cfg::MAX_RANDOM_POINTS;
use crate::closest_pair::{closest_pair, ClosestPair};
use crate::convex_hull::{convex_hull, HullError};
use crate::empty_circle::largest_empty_circle;
use crate::rand::{random_points, PointBounds, ReplayToken};
use crate::shapes::{Circle, Line, Point};

/// Default grid size shown by UIs.
pub const DEFAULT_GRID_SIZE: u32 = 10;

/// Why a session operation did nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionError {
    PointNotFound(Point),
    LineNotFound(Line),
    NotEnoughPoints { need: usize, got: usize },
    NotEnoughLines { need: usize, got: usize },
    Hull(HullError),
    /// Points could not be triangulated (collinear or too few distinct).
    NoEmptyCircle,
    InvalidGrid(u32),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::PointNotFound(p) => write!(f, "{p} does not exist"),
            SessionError::LineNotFound(l) => write!(f, "{l} does not exist"),
            SessionError::NotEnoughPoints { need, got } => {
                write!(f, "need at least {need} points, have {got}")
            }
            SessionError::NotEnoughLines { need, got } => {
                write!(f, "need at least {need} lines, have {got}")
            }
            SessionError::Hull(e) => write!(f, "{e}"),
            SessionError::NoEmptyCircle => {
                write!(f, "points cannot be triangulated (collinear or too few)")
            }
            SessionError::InvalidGrid(size) => {
                write!(f, "grid size must be positive (got {size})")
            }
        }
    }
}

impl std::error::Error for SessionError {}

impl From<HullError> for SessionError {
    fn from(e: HullError) -> Self {
        SessionError::Hull(e)
    }
}

/// Points, lines, result circles, and highlight flags for one user.
#[derive(Clone, Debug)]
pub struct Session {
    points: Vec<Point>,
    lines: Vec<Line>,
    circles: Vec<Circle>,
    point_highlights: Vec<bool>,
    line_highlights: Vec<bool>,
    grid_size: u32,
    bounds: PointBounds,
    rng_token: ReplayToken,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty session whose `random_points` stream starts at `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            points: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            point_highlights: Vec::new(),
            line_highlights: Vec::new(),
            grid_size: DEFAULT_GRID_SIZE,
            bounds: PointBounds::default(),
            rng_token: ReplayToken::new(seed, 0),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }
    pub fn point_highlights(&self) -> &[bool] {
        &self.point_highlights
    }
    pub fn line_highlights(&self) -> &[bool] {
        &self.line_highlights
    }
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn add_point(&mut self, p: Point) {
        self.points.push(p);
        self.point_highlights.push(false);
    }

    /// Remove the first point equal to `p`.
    pub fn remove_point(&mut self, p: Point) -> Result<(), SessionError> {
        let idx = self
            .points
            .iter()
            .position(|q| *q == p)
            .ok_or(SessionError::PointNotFound(p))?;
        self.points.remove(idx);
        self.point_highlights.remove(idx);
        Ok(())
    }

    pub fn clear_points(&mut self) {
        self.points.clear();
        self.point_highlights.clear();
    }

    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
        self.line_highlights.push(false);
    }

    /// Remove the first line equal to `line` (direction matters).
    pub fn remove_line(&mut self, line: Line) -> Result<(), SessionError> {
        let idx = self
            .lines
            .iter()
            .position(|l| *l == line)
            .ok_or(SessionError::LineNotFound(line))?;
        self.lines.remove(idx);
        self.line_highlights.remove(idx);
        Ok(())
    }

    pub fn clear_lines(&mut self) {
        self.lines.clear();
        self.line_highlights.clear();
    }

    pub fn set_grid(&mut self, size: u32) -> Result<(), SessionError> {
        if size == 0 {
            return Err(SessionError::InvalidGrid(size));
        }
        self.grid_size = size;
        Ok(())
    }

    /// Append `n` random grid points drawn from the session's seeded stream.
    /// `n` is clamped to `MAX_RANDOM_POINTS`.
    pub fn add_random_points(&mut self, n: usize) -> Vec<Point> {
        let drawn = random_points(n.min(MAX_RANDOM_POINTS), self.bounds, self.rng_token);
        self.rng_token = self.rng_token.next();
        for &p in &drawn {
            self.add_point(p);
        }
        drawn
    }

    /// Drop result circles and clear every highlight flag.
    pub fn reset_annotations(&mut self) {
        self.circles.clear();
        self.point_highlights.iter_mut().for_each(|h| *h = false);
        self.line_highlights.iter_mut().for_each(|h| *h = false);
    }

    /// Closest pair over all points; highlights every point equal to a witness.
    pub fn closest_pair(&mut self) -> Result<ClosestPair, SessionError> {
        if self.points.len() < 2 {
            return Err(SessionError::NotEnoughPoints {
                need: 2,
                got: self.points.len(),
            });
        }
        let res = closest_pair(&self.points);
        for (p, h) in self.points.iter().zip(self.point_highlights.iter_mut()) {
            if res.involves(*p) {
                *h = true;
            }
        }
        Ok(res)
    }

    /// Convex hull over all points; appends one line per hull edge.
    ///
    /// Zero-length edges (from duplicate points) are not added as lines.
    pub fn convex_hull(&mut self) -> Result<Vec<Point>, SessionError> {
        let hull = convex_hull(&self.points)?;
        for w in hull.windows(2) {
            if let Ok(edge) = Line::new(w[0], w[1]) {
                self.add_line(edge);
            }
        }
        Ok(hull)
    }

    /// Largest empty circle over all points; stored in `circles`.
    pub fn largest_empty_circle(&mut self) -> Result<Circle, SessionError> {
        if self.points.len() < 3 {
            return Err(SessionError::NotEnoughPoints {
                need: 3,
                got: self.points.len(),
            });
        }
        let circle = largest_empty_circle(&self.points).ok_or(SessionError::NoEmptyCircle)?;
        self.circles.push(circle);
        Ok(circle)
    }

    /// Test every unordered pair of lines; highlight lines in any
    /// intersecting pair. Returns the number of highlighted lines.
    pub fn line_segment(&mut self) -> Result<usize, SessionError> {
        if self.lines.len() < 2 {
            return Err(SessionError::NotEnoughLines {
                need: 2,
                got: self.lines.len(),
            });
        }
        for i in 0..self.lines.len() {
            for j in i + 1..self.lines.len() {
                if self.lines[i].intersects(&self.lines[j]) {
                    self.line_highlights[i] = true;
                    self.line_highlights[j] = true;
                }
            }
        }
        Ok(self.line_highlights.iter().filter(|h| **h).count())
    }
}

#[cfg(test)]
mod tests;
