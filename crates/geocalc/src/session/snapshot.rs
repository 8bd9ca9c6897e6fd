//! Column-oriented view of a session for drawing.
//!
//! Layout matches what the canvas front end reads: parallel coordinate arrays
//! plus the highlight flags, one struct per shape kind.

use serde::Serialize;

use super::Session;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PointData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub is_highlighted: Vec<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LineData {
    pub start_x: Vec<f64>,
    pub start_y: Vec<f64>,
    pub end_x: Vec<f64>,
    pub end_y: Vec<f64>,
    pub is_highlighted: Vec<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CircleData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub radius: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub points: PointData,
    pub lines: LineData,
    pub circles: CircleData,
    pub grid_size: u32,
}

impl Session {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            points: PointData {
                x: self.points.iter().map(|p| p.x).collect(),
                y: self.points.iter().map(|p| p.y).collect(),
                is_highlighted: self.point_highlights.clone(),
            },
            lines: LineData {
                start_x: self.lines.iter().map(|l| l.start().x).collect(),
                start_y: self.lines.iter().map(|l| l.start().y).collect(),
                end_x: self.lines.iter().map(|l| l.end().x).collect(),
                end_y: self.lines.iter().map(|l| l.end().y).collect(),
                is_highlighted: self.line_highlights.clone(),
            },
            circles: CircleData {
                x: self.circles.iter().map(|c| c.center().x).collect(),
                y: self.circles.iter().map(|c| c.center().y).collect(),
                radius: self.circles.iter().map(|c| c.radius()).collect(),
            },
            grid_size: self.grid_size,
        }
    }
}
