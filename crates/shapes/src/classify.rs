//! Independent classification predicates.
//!
//! Each predicate returns `None` when the shape is the wrong kind, so a
//! triangle can be both isosceles and right without any type conflict.
//!
//! Equality policy comes from `ClassifyCfg`: isosceles/scalene/square compare
//! lengths with `length_eps` (exact by default); equilateral and right compare
//! values rounded to `round_digits`.

use crate::cfg::{ClassifyCfg, RIGHT_ANGLE};
use crate::shape::{Shape, ShapeKind};

/// Triangle classifications usable with `Shape::classified`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriangleClass {
    Isosceles,
    Equilateral,
    Scalene,
    Right,
}

impl TriangleClass {
    pub const ALL: [TriangleClass; 4] = [
        TriangleClass::Isosceles,
        TriangleClass::Equilateral,
        TriangleClass::Scalene,
        TriangleClass::Right,
    ];

    /// Run the matching predicate.
    pub fn test(self, shape: &Shape, cfg: ClassifyCfg) -> Option<bool> {
        match self {
            TriangleClass::Isosceles => is_isosceles(shape, cfg),
            TriangleClass::Equilateral => is_equilateral(shape, cfg),
            TriangleClass::Scalene => is_scalene(shape, cfg),
            TriangleClass::Right => is_right(shape, cfg),
        }
    }
}

/// All four triangle predicates at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TriangleClasses {
    pub isosceles: bool,
    pub equilateral: bool,
    pub scalene: bool,
    pub right: bool,
}

fn triangle_lengths(shape: &Shape) -> Option<[f64; 3]> {
    if !shape.is_triangle() {
        return None;
    }
    let e = shape.edges();
    Some([e[0].length, e[1].length, e[2].length])
}

/// Rectangle with equal width and height (within `length_eps`).
pub fn is_square(shape: &Shape, cfg: ClassifyCfg) -> Option<bool> {
    match shape.kind() {
        ShapeKind::Rectangle(r) => Some(cfg.lengths_equal(r.width(), r.height())),
        ShapeKind::Triangle => None,
    }
}

/// At least two edge lengths equal.
pub fn is_isosceles(shape: &Shape, cfg: ClassifyCfg) -> Option<bool> {
    let [a, b, c] = triangle_lengths(shape)?;
    Some(cfg.lengths_equal(a, b) || cfg.lengths_equal(b, c) || cfg.lengths_equal(a, c))
}

/// All three edge lengths equal after rounding.
pub fn is_equilateral(shape: &Shape, cfg: ClassifyCfg) -> Option<bool> {
    let [a, b, c] = triangle_lengths(shape)?.map(|l| cfg.round(l));
    Some(a == b && b == c)
}

/// All three edge lengths pairwise distinct.
pub fn is_scalene(shape: &Shape, cfg: ClassifyCfg) -> Option<bool> {
    is_isosceles(shape, cfg).map(|iso| !iso)
}

/// Some inner angle, rounded, lies within `right_angle_eps` of 90°.
pub fn is_right(shape: &Shape, cfg: ClassifyCfg) -> Option<bool> {
    if !shape.is_triangle() {
        return None;
    }
    Some(
        shape
            .inner_angles()
            .iter()
            .any(|&a| (cfg.round(a) - RIGHT_ANGLE).abs() < cfg.right_angle_eps),
    )
}

pub fn classify(shape: &Shape, cfg: ClassifyCfg) -> Option<TriangleClasses> {
    Some(TriangleClasses {
        isosceles: is_isosceles(shape, cfg)?,
        equilateral: is_equilateral(shape, cfg)?,
        scalene: is_scalene(shape, cfg)?,
        right: is_right(shape, cfg)?,
    })
}
