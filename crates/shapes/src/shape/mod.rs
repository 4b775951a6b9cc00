//! Closed shapes as one value: a kind tag plus shared vertex/edge data.
//!
//! Purpose
//! - Replace a Shape → Rectangle → Square / Shape → Triangle → {...} hierarchy
//!   with a single `Shape` whose `kind` carries only what differs
//!   (the resolved rectangle frame, or nothing for triangles).
//! - Triangle "subtypes" are predicates in `crate::classify`, not types, so a
//!   triangle can be asked about every classification independently.
//!
//! Invariants
//! - `edges.len() == vertices.len()`, edge `k` runs `vertices[k] → vertices[k+1 mod n]`.
//! - Triangles: 3 vertices, angles sum to 180° up to rounding.
//! - Everything is computed in the constructor; no setters.

mod rect;
mod triangle;

pub use rect::{Rect, RectArg, RectSpec};

use crate::cfg::ClassifyCfg;
use crate::classify::TriangleClass;
use crate::error::ShapeError;
use crate::primitives::{Line, Point};

/// What a `Shape` is, with kind-specific data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind {
    Rectangle(Rect),
    Triangle,
}

/// A closed polygon from the fixed vocabulary (rectangle, square, triangle).
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    vertices: Vec<Point>,
    edges: Vec<Line>,
    angles: Vec<f64>,
    is_regular: bool,
}

/// Edges joining consecutive vertices, closing back to the first.
fn cyclic_edges(vertices: &[Point]) -> Vec<Line> {
    let n = vertices.len();
    (0..n)
        .map(|k| Line::new(vertices[k], vertices[(k + 1) % n]))
        .collect()
}

impl Shape {
    /// Axis-aligned rectangle from any of the `RectSpec` configurations.
    /// `is_regular` is false even when width equals height; see `Shape::square`.
    pub fn rectangle(spec: RectSpec) -> Result<Self, ShapeError> {
        let rect = Rect::from_spec(spec).inspect_err(|e| {
            tracing::debug!(error = %e, "rectangle rejected");
        })?;
        let vertices = rect.corners().to_vec();
        let edges = cyclic_edges(&vertices);
        tracing::trace!(
            cx = rect.center().x,
            cy = rect.center().y,
            width = rect.width(),
            height = rect.height(),
            "rectangle built"
        );
        Ok(Self {
            kind: ShapeKind::Rectangle(rect),
            vertices,
            edges,
            angles: vec![crate::cfg::RIGHT_ANGLE; 4],
            is_regular: false,
        })
    }

    /// Square centered at `center`; always regular.
    pub fn square(center: Point, side: f64) -> Result<Self, ShapeError> {
        let mut s = Self::rectangle(RectSpec::ByCenter {
            center,
            width: side,
            height: side,
        })?;
        s.is_regular = true;
        Ok(s)
    }

    /// Triangle `p1, p2, p3` with edges `p1→p2`, `p2→p3`, `p3→p1`.
    ///
    /// Fails with `DegenerateGeometry` for coincident or collinear points.
    pub fn triangle(p1: Point, p2: Point, p3: Point) -> Result<Self, ShapeError> {
        let vertices = vec![p1, p2, p3];
        let edges = cyclic_edges(&vertices);
        let angles = triangle::inner_angles(&edges).inspect_err(|e| {
            tracing::debug!(error = %e, ?p1, ?p2, ?p3, "triangle rejected");
        })?;
        tracing::trace!(
            a = edges[0].length,
            b = edges[1].length,
            c = edges[2].length,
            "triangle built"
        );
        Ok(Self {
            kind: ShapeKind::Triangle,
            vertices,
            edges,
            angles: angles.to_vec(),
            is_regular: false,
        })
    }

    /// Triangle whose `is_regular` flag records whether it satisfies `class`
    /// under `cfg`.
    pub fn classified(
        class: TriangleClass,
        points: [Point; 3],
        cfg: ClassifyCfg,
    ) -> Result<Self, ShapeError> {
        let [p1, p2, p3] = points;
        let mut t = Self::triangle(p1, p2, p3)?;
        t.is_regular = class.test(&t, cfg).unwrap_or(false);
        Ok(t)
    }

    pub fn isosceles(p1: Point, p2: Point, p3: Point) -> Result<Self, ShapeError> {
        Self::classified(TriangleClass::Isosceles, [p1, p2, p3], ClassifyCfg::default())
    }

    pub fn equilateral(p1: Point, p2: Point, p3: Point) -> Result<Self, ShapeError> {
        Self::classified(TriangleClass::Equilateral, [p1, p2, p3], ClassifyCfg::default())
    }

    pub fn scalene(p1: Point, p2: Point, p3: Point) -> Result<Self, ShapeError> {
        Self::classified(TriangleClass::Scalene, [p1, p2, p3], ClassifyCfg::default())
    }

    pub fn right_triangle(p1: Point, p2: Point, p3: Point) -> Result<Self, ShapeError> {
        Self::classified(TriangleClass::Right, [p1, p2, p3], ClassifyCfg::default())
    }

    #[inline]
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Line] {
        &self.edges
    }

    /// Kind-specific flag: square-ness for rectangles, the requested
    /// classification for triangles built via `classified`.
    #[inline]
    pub fn is_regular(&self) -> bool {
        self.is_regular
    }

    /// Rectangle frame, if this is a rectangle or square.
    #[inline]
    pub fn as_rect(&self) -> Option<&Rect> {
        match &self.kind {
            ShapeKind::Rectangle(r) => Some(r),
            ShapeKind::Triangle => None,
        }
    }

    #[inline]
    pub fn is_triangle(&self) -> bool {
        matches!(self.kind, ShapeKind::Triangle)
    }

    /// Inner angles in degrees, in vertex-construction order for rectangles
    /// and opposite-edge order (a, b, c) for triangles.
    #[inline]
    pub fn inner_angles(&self) -> &[f64] {
        &self.angles
    }

    pub fn area(&self) -> f64 {
        match &self.kind {
            ShapeKind::Rectangle(r) => r.area(),
            ShapeKind::Triangle => triangle::heron_area(&self.edges),
        }
    }

    /// Rectangles use `2(w+h)`; everything else sums edge lengths.
    pub fn perimeter(&self) -> f64 {
        match &self.kind {
            ShapeKind::Rectangle(r) => r.perimeter(),
            ShapeKind::Triangle => self.edge_length_sum(),
        }
    }

    /// Generic perimeter: sum of edge lengths.
    pub fn edge_length_sum(&self) -> f64 {
        self.edges.iter().map(|e| e.length).sum()
    }
}
