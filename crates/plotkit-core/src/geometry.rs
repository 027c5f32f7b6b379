//! Planar geometry for the plotter pipeline.
//!
//! The machine model is strictly 2D with a single lift axis, so points
//! carry only X and Y in millimeters. A [`Stroke`] is one continuous
//! pen-down polyline; drawing direction is significant.

use serde::{Deserialize, Serialize};

/// A 2D point in work-area coordinates (millimeters).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        debug_assert!(
            x.is_finite() && y.is_finite(),
            "Point coordinates must be finite: x={x}, y={y}"
        );
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Squared Euclidean distance, for ordering comparisons.
    pub fn distance_squared(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// An ordered polyline representing one continuous pen-down path.
///
/// A stroke with fewer than two points carries no drawing information
/// and is dropped by the bounds clipper.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The same stroke drawn in the opposite direction.
    pub fn reversed(&self) -> Stroke {
        let mut points = self.points.clone();
        points.reverse();
        Stroke::new(points)
    }

    /// Total polyline length over consecutive point pairs.
    ///
    /// Open strokes are not implicitly closed: a stroke of `n` points
    /// contributes exactly `n - 1` segments.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance_to(pair[1]))
            .sum()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl FromIterator<Point> for Stroke {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Stroke::new(iter.into_iter().collect())
    }
}

/// The rectangular drawable region `[0, width] x [0, height]` in
/// machine millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkArea {
    pub width: f64,
    pub height: f64,
}

impl WorkArea {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Inclusive bounds predicate used by the clipper.
    pub fn contains(&self, point: Point) -> bool {
        0.0 <= point.x && point.x <= self.width && 0.0 <= point.y && point.y <= self.height
    }
}
