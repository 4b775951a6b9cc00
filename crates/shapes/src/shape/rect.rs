//! Axis-aligned rectangle frame and its configuration modes.

use crate::error::ShapeError;
use crate::primitives::Point;

/// How a rectangle is specified. Each variant carries only its own fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RectSpec {
    ByCorner {
        bottom_left: Point,
        width: f64,
        height: f64,
    },
    ByCenter {
        center: Point,
        width: f64,
        height: f64,
    },
    /// Any two opposite corners, in either order.
    ByOppositeCorners { a: Point, b: Point },
}

/// Loosely-typed argument for `RectSpec::from_mode`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RectArg {
    Point(Point),
    Scalar(f64),
}

impl From<Point> for RectArg {
    fn from(p: Point) -> Self {
        RectArg::Point(p)
    }
}

impl From<f64> for RectArg {
    fn from(v: f64) -> Self {
        RectArg::Scalar(v)
    }
}

impl RectSpec {
    /// Resolve a numeric mode code and positional arguments.
    ///
    /// - `1`: `(bottom_left, width, height)`
    /// - `2`: `(center, width, height)`
    /// - `3`: `(corner, opposite_corner)`
    ///
    /// Any other code, or arguments not matching the mode, is `InvalidConfiguration`.
    pub fn from_mode(mode: u8, args: &[RectArg]) -> Result<Self, ShapeError> {
        use RectArg::{Point as P, Scalar as S};
        match (mode, args) {
            (1, [P(bottom_left), S(width), S(height)]) => Ok(Self::ByCorner {
                bottom_left: *bottom_left,
                width: *width,
                height: *height,
            }),
            (2, [P(center), S(width), S(height)]) => Ok(Self::ByCenter {
                center: *center,
                width: *width,
                height: *height,
            }),
            (3, [P(a), P(b)]) => Ok(Self::ByOppositeCorners { a: *a, b: *b }),
            (1..=3, _) => Err(ShapeError::invalid(format!(
                "mode {mode} does not accept arguments {args:?}"
            ))),
            _ => Err(ShapeError::invalid(format!("unknown mode {mode}"))),
        }
    }
}

/// Resolved rectangle: center plus non-negative width and height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    center: Point,
    width: f64,
    height: f64,
}

impl Rect {
    pub fn from_spec(spec: RectSpec) -> Result<Self, ShapeError> {
        let (center, width, height) = match spec {
            RectSpec::ByCorner {
                bottom_left,
                width,
                height,
            } => (
                Point::new(bottom_left.x + width / 2.0, bottom_left.y + height / 2.0),
                width,
                height,
            ),
            RectSpec::ByCenter {
                center,
                width,
                height,
            } => (center, width, height),
            RectSpec::ByOppositeCorners { a, b } => {
                (a.midpoint(&b), (b.x - a.x).abs(), (b.y - a.y).abs())
            }
        };
        if !center.is_finite() {
            return Err(ShapeError::invalid(format!(
                "non-finite center ({}, {})",
                center.x, center.y
            )));
        }
        if !(width.is_finite() && width >= 0.0) {
            return Err(ShapeError::invalid(format!("width must be >= 0, got {width}")));
        }
        if !(height.is_finite() && height >= 0.0) {
            return Err(ShapeError::invalid(format!("height must be >= 0, got {height}")));
        }
        Ok(Self {
            center,
            width,
            height,
        })
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
    #[inline]
    pub fn left(&self) -> f64 {
        self.center.x - self.width / 2.0
    }
    #[inline]
    pub fn right(&self) -> f64 {
        self.center.x + self.width / 2.0
    }
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.center.y - self.height / 2.0
    }
    #[inline]
    pub fn top(&self) -> f64 {
        self.center.y + self.height / 2.0
    }

    /// Bottom-left, bottom-right, top-right, top-left (counterclockwise).
    pub fn corners(&self) -> [Point; 4] {
        let (l, r, b, t) = (self.left(), self.right(), self.bottom(), self.top());
        [
            Point::new(l, b),
            Point::new(r, b),
            Point::new(r, t),
            Point::new(l, t),
        ]
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    #[inline]
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    /// Closed test: boundary points are inside.
    pub fn contains_point(&self, p: Point) -> bool {
        (self.left()..=self.right()).contains(&p.x) && (self.bottom()..=self.top()).contains(&p.y)
    }

    /// Endpoint test only: true iff `p1` or `p2` lies in the rectangle.
    ///
    /// Approximation: a segment that passes through the rectangle with both
    /// endpoints outside reports `false`.
    pub fn intersects_line(&self, p1: Point, p2: Point) -> bool {
        self.contains_point(p1) || self.contains_point(p2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_mode_dispatch() {
        let p = Point::new(1.0, 2.0);
        let spec =
            RectSpec::from_mode(1, &[p.into(), RectArg::Scalar(4.0), RectArg::Scalar(2.0)])
                .unwrap();
        assert_eq!(
            spec,
            RectSpec::ByCorner {
                bottom_left: p,
                width: 4.0,
                height: 2.0
            }
        );
        let spec =
            RectSpec::from_mode(2, &[p.into(), RectArg::Scalar(3.0), RectArg::Scalar(3.0)])
                .unwrap();
        assert!(matches!(spec, RectSpec::ByCenter { .. }));
        let q = Point::new(5.0, 6.0);
        let spec = RectSpec::from_mode(3, &[p.into(), q.into()]).unwrap();
        assert_eq!(spec, RectSpec::ByOppositeCorners { a: p, b: q });
    }

    #[test]
    fn from_mode_rejects_unknown_and_mismatched() {
        let p = Point::new(0.0, 0.0);
        for mode in [0u8, 4, 255] {
            assert!(matches!(
                RectSpec::from_mode(mode, &[p.into(), p.into()]),
                Err(ShapeError::InvalidConfiguration { .. })
            ));
        }
        // Right mode, wrong shape of arguments.
        assert!(matches!(
            RectSpec::from_mode(3, &[p.into(), RectArg::Scalar(1.0)]),
            Err(ShapeError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            RectSpec::from_mode(1, &[p.into(), RectArg::Scalar(1.0)]),
            Err(ShapeError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn rejects_bad_dimensions() {
        let c = Point::new(0.0, 0.0);
        for (w, h) in [(-1.0, 1.0), (1.0, f64::NAN), (f64::INFINITY, 1.0)] {
            let r = Rect::from_spec(RectSpec::ByCenter {
                center: c,
                width: w,
                height: h,
            });
            assert!(matches!(r, Err(ShapeError::InvalidConfiguration { .. })));
        }
        // Zero extent is allowed.
        assert!(Rect::from_spec(RectSpec::ByCenter {
            center: c,
            width: 0.0,
            height: 0.0
        })
        .is_ok());
    }

    #[test]
    fn opposite_corners_any_order() {
        let a = Point::new(4.0, 0.0);
        let b = Point::new(0.0, 2.0);
        let r = Rect::from_spec(RectSpec::ByOppositeCorners { a, b }).unwrap();
        assert_eq!(r.center(), Point::new(2.0, 1.0));
        assert_eq!((r.width(), r.height()), (4.0, 2.0));
        assert_eq!((r.left(), r.right(), r.bottom(), r.top()), (0.0, 4.0, 0.0, 2.0));
    }

    #[test]
    fn intersects_line_is_endpoint_only() {
        let r = Rect::from_spec(RectSpec::ByCorner {
            bottom_left: Point::new(0.0, 0.0),
            width: 2.0,
            height: 2.0,
        })
        .unwrap();
        assert!(r.intersects_line(Point::new(1.0, 1.0), Point::new(10.0, 10.0)));
        assert!(r.intersects_line(Point::new(-5.0, 0.0), Point::new(0.0, 2.0)));
        // Crosses the whole rectangle but neither endpoint is inside.
        assert!(!r.intersects_line(Point::new(-1.0, 1.0), Point::new(3.0, 1.0)));
    }
}
