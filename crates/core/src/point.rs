//! A single gesture sample

use serde::{Deserialize, Serialize};

/// One sample of a gesture
///
/// `x` and `y` are surface coordinates; `t` is the offset in milliseconds
/// from the start of the owning trace (the trace id).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
    /// Milliseconds since the trace started
    pub t: i64,
}

impl Point {
    /// Create a point from its coordinates and time offset
    pub fn new(x: f32, y: f32, t: i64) -> Self {
        Point { x, y, t }
    }
}

impl From<(f32, f32, i64)> for Point {
    fn from((x, y, t): (f32, f32, i64)) -> Self {
        Point { x, y, t }
    }
}
