//! Points and segments in the drawing plane (y grows upward).

use std::fmt;

/// A point in the drawing plane
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One stitch mark: a straight line from `start` to `end`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Horizontal extent (`end.x - start.x`)
    pub fn dx(&self) -> f64 {
        self.end.x - self.start.x
    }

    /// Vertical extent (`end.y - start.y`)
    pub fn dy(&self) -> f64 {
        self.end.y - self.start.y
    }

    /// Coordinates as `(x1, y1, x2, y2)`
    pub fn coords(&self) -> (f64, f64, f64, f64) {
        (self.start.x, self.start.y, self.end.x, self.end.y)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}
