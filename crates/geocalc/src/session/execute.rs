//! Command dispatch and user-facing messages.
//!
//! Every command starts from a clean slate of annotations: result circles are
//! dropped and highlight flags reset before the command runs.

use serde::Serialize;

use super::{Command, CommandError, Session, HELP};
use crate::shapes::{Line, Point};

/// Message severity; the console maps these to colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Success,
    Info,
    /// The input was malformed.
    UserError,
    /// The input parsed but the operation failed.
    Error,
}

/// Outcome of one command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Message {
    pub level: Level,
    pub lines: Vec<String>,
}

impl Message {
    pub fn new(level: Level, text: impl Into<String>) -> Self {
        Self {
            level,
            lines: vec![text.into()],
        }
    }
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Level::Success, text)
    }
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Level::Error, text)
    }
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl From<CommandError> for Message {
    fn from(e: CommandError) -> Self {
        Message::new(Level::UserError, e.to_string())
    }
}

impl Session {
    /// Parse and run one line of console input.
    pub fn run_line(&mut self, input: &str) -> Message {
        match Command::parse(input) {
            Ok(cmd) => self.execute(cmd),
            Err(e) => {
                self.reset_annotations();
                tracing::debug!(input, error = %e, "rejected command");
                e.into()
            }
        }
    }

    /// Run a parsed command against this session.
    pub fn execute(&mut self, cmd: Command) -> Message {
        self.reset_annotations();
        tracing::debug!(?cmd, points = self.points.len(), lines = self.lines.len(), "execute");
        match cmd {
            Command::AddPoint(p) => {
                self.add_point(p);
                Message::success(format!("{p} added."))
            }
            Command::RemovePoint(p) => match self.remove_point(p) {
                Ok(()) => Message::success(format!("{p} removed.")),
                Err(e) => Message::error(format!("Error removing point: {e}")),
            },
            Command::ClearPoints => {
                self.clear_points();
                Message::success("Cleared points.")
            }
            Command::AddLine(a, b) => match Line::new(a, b) {
                Ok(line) => {
                    self.add_line(line);
                    Message::success(format!("{line} added."))
                }
                Err(e) => Message::error(format!("Error adding line: {e}")),
            },
            Command::RemoveLine(a, b) => {
                let removed = Line::new(a, b)
                    .map_err(|e| e.to_string())
                    .and_then(|line| {
                        self.remove_line(line)
                            .map(|()| line)
                            .map_err(|e| e.to_string())
                    });
                match removed {
                    Ok(line) => Message::success(format!("{line} removed.")),
                    Err(e) => Message::error(format!("Error removing line: {e}")),
                }
            }
            Command::ClearLines => {
                self.clear_lines();
                Message::success("Cleared lines.")
            }
            Command::ClosestPair => match self.closest_pair() {
                Ok(res) => match res.pair {
                    Some((a, b)) => Message::success(format!(
                        "{} and {} are the closest pair of points with a distance of {:.3}.",
                        coords(a),
                        coords(b),
                        res.distance
                    )),
                    None => Message::error("Error finding closest pair of points: no pair"),
                },
                Err(e) => Message::error(format!("Error finding closest pair of points: {e}")),
            },
            Command::ConvexHull => match self.convex_hull() {
                Ok(hull) => Message::success(format!(
                    "Successfully created convex hull out of {} points.",
                    hull.len() - 1
                )),
                Err(e) => Message::error(format!("Error finding convex hull: {e}")),
            },
            Command::LargestEmptyCircle => match self.largest_empty_circle() {
                Ok(c) => Message::success(format!(
                    "Largest empty circle has a center of ({:.3}, {:.3}) and radius of {:.3}.",
                    c.center().x,
                    c.center().y,
                    c.radius()
                )),
                Err(e) => Message::error(format!("Error finding largest empty circle: {e}")),
            },
            Command::LineSegment => match self.line_segment() {
                Ok(n) => Message::success(format!("{n} lines intersect.")),
                Err(e) => Message::error(format!("Error finding line segment intersections: {e}")),
            },
            Command::SetGrid(size) => match self.set_grid(size) {
                Ok(()) => Message::success(format!("Successfully set new grid size to {size}.")),
                Err(e) => Message::error(format!("Error setting new grid size: {e}")),
            },
            Command::RandomPoints(n) => {
                let drawn = self.add_random_points(n);
                Message::success(format!("Added {} random points.", drawn.len()))
            }
            Command::Help => Message {
                level: Level::Info,
                lines: HELP.iter().map(|s| s.to_string()).collect(),
            },
        }
    }
}

fn coords(p: Point) -> String {
    format!("({}, {})", p.x, p.y)
}
