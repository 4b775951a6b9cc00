//! Closed 2D shapes: points, segments, rectangles and triangles.
//!
//! Layout
//! - `primitives`: `Point` and `Line` (segment with a cached length).
//! - `shape`: a single `Shape` value (kind tag + vertices/edges/angles) with
//!   constructors for rectangles, squares and triangles.
//! - `classify`: pure predicates (`is_square`, `is_isosceles`, ...) over any shape.
//! - `cfg`: tolerances for construction and classification.
//!
//! All shapes are built fully by their constructor and never mutated after;
//! metric methods are pure reads.

pub mod cfg;
pub mod classify;
pub mod error;
pub mod primitives;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::ClassifyCfg;
pub use error::ShapeError;
pub use nalgebra::Vector2 as Vec2;
pub use primitives::{Line, Point};
pub use shape::{Rect, RectArg, RectSpec, Shape, ShapeKind};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::ClassifyCfg;
    pub use crate::classify::{
        classify, is_equilateral, is_isosceles, is_right, is_scalene, is_square, TriangleClass,
        TriangleClasses,
    };
    pub use crate::error::ShapeError;
    pub use crate::primitives::{Line, Point};
    pub use crate::shape::{Rect, RectArg, RectSpec, Shape, ShapeKind};
    pub use nalgebra::Vector2 as Vec2;
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise. Twice the signed
/// triangle area; used for the collinearity check.
#[inline]
pub fn parallelogram_area(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
