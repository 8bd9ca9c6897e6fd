use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Point, ShapeError};

/// Circle with a finite, non-negative radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCircle")]
pub struct Circle {
    center: Point,
    radius: f64,
}

#[derive(Deserialize)]
struct RawCircle {
    center: Point,
    radius: f64,
}

impl TryFrom<RawCircle> for Circle {
    type Error = ShapeError;
    fn try_from(raw: RawCircle) -> Result<Self, Self::Error> {
        Circle::new(raw.center, raw.radius)
    }
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Result<Self, ShapeError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(ShapeError::NegativeRadius { radius });
        }
        Ok(Self { center, radius })
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Inside or on the boundary.
    pub fn contains_point(&self, p: Point) -> bool {
        self.center.distance_to(p) <= self.radius
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(center={}, radius={})", self.center, self.radius)
    }
}
