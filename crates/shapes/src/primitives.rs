//! Points and segments.

use nalgebra::Vector2;

/// 2D point. Plain value; no identity beyond its coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance `sqrt(dx² + dy²)`. Symmetric bit-for-bit.
    ///
    /// Uses `hypot`, so the squares never overflow or underflow; the result is
    /// `inf` only when the distance itself exceeds `f64::MAX`.
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Halves before adding, so any two finite points have a finite midpoint.
    #[inline]
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new(self.x / 2.0 + other.x / 2.0, self.y / 2.0 + other.y / 2.0)
    }

    #[inline]
    pub fn to_vec(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Segment `start → end` with its length cached at construction.
///
/// Zero-length segments are allowed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub length: f64,
}

impl Line {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            length: start.distance_to(&end),
        }
    }

    /// `end - start`.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.end.to_vec() - self.start.to_vec()
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(&self.end)
    }
}
