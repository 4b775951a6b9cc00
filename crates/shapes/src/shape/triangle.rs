//! Triangle metrics from the three edge lengths.
//!
//! - Angles by the law of cosines; the third angle is `180 - A - B`.
//! - Area by Heron's formula, clamped at zero.
//!
//! Edges are `a = p1→p2`, `b = p2→p3`, `c = p3→p1`; angle `k` is the one
//! opposite edge `k`.

use crate::cfg::MIN_ANGLE_SIN;
use crate::error::ShapeError;
use crate::parallelogram_area;
use crate::primitives::Line;

/// `acos(cos_arg)` in degrees, rejecting arguments outside `[-1, 1]`.
fn angle_from_cosine(num: f64, den: f64) -> Result<f64, ShapeError> {
    let arg = num / den;
    if !(-1.0..=1.0).contains(&arg) {
        return Err(ShapeError::degenerate(format!(
            "law-of-cosines argument {arg} outside [-1, 1]"
        )));
    }
    Ok(arg.acos().to_degrees())
}

/// Edge lengths divided by the longest one, plus that scale. Keeps the
/// squared terms below near 1 whatever the absolute size of the triangle.
fn normalized_lengths(edges: &[Line]) -> ([f64; 3], f64) {
    let (a, b, c) = (edges[0].length, edges[1].length, edges[2].length);
    let scale = a.max(b).max(c);
    ([a / scale, b / scale, c / scale], scale)
}

/// Inner angles in degrees, opposite edges a, b, c respectively.
pub(super) fn inner_angles(edges: &[Line]) -> Result<[f64; 3], ShapeError> {
    debug_assert_eq!(edges.len(), 3, "triangle needs exactly three edges");
    if edges.iter().any(|e| !e.length.is_finite()) {
        return Err(ShapeError::degenerate("non-finite edge length"));
    }
    if edges.iter().any(|e| e.length == 0.0) {
        return Err(ShapeError::degenerate("coincident vertices (zero-length edge)"));
    }
    let ([a, b, c], scale) = normalized_lengths(edges);
    // Sine of the smallest angle: twice the area over the two longest edges.
    let cross = parallelogram_area(edges[0].direction() / scale, edges[1].direction() / scale);
    let mut sorted = [a, b, c];
    sorted.sort_by(f64::total_cmp);
    let min_sin = cross.abs() / (sorted[1] * sorted[2]);
    if !(min_sin > MIN_ANGLE_SIN) {
        return Err(ShapeError::degenerate(format!(
            "collinear vertices (smallest angle sine {min_sin})"
        )));
    }
    let angle_a = angle_from_cosine(b * b + c * c - a * a, 2.0 * b * c)?;
    let angle_b = angle_from_cosine(a * a + c * c - b * b, 2.0 * a * c)?;
    let angle_c = 180.0 - angle_a - angle_b;
    if !(angle_c.is_finite() && angle_c > 0.0) {
        return Err(ShapeError::degenerate(format!("third angle {angle_c} not positive")));
    }
    Ok([angle_a, angle_b, angle_c])
}

/// Heron's formula; zero when rounding makes the radicand non-positive.
/// Evaluated on normalized lengths, then rescaled.
pub(super) fn heron_area(edges: &[Line]) -> f64 {
    let ([a, b, c], scale) = normalized_lengths(edges);
    if !(scale > 0.0) {
        return 0.0;
    }
    let s = (a + b + c) / 2.0;
    let radicand = s * (s - a) * (s - b) * (s - c);
    if radicand > 0.0 {
        radicand.sqrt() * scale * scale
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Point;

    fn edges(p: [(f64, f64); 3]) -> Vec<Line> {
        let v: Vec<Point> = p.iter().map(|&q| q.into()).collect();
        vec![Line::new(v[0], v[1]), Line::new(v[1], v[2]), Line::new(v[2], v[0])]
    }

    #[test]
    fn angles_follow_opposite_edges() {
        // a = |p1p2| = 4, b = |p2p3| = 5, c = |p3p1| = 3.
        let e = edges([(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
        let [aa, ab, ac] = inner_angles(&e).unwrap();
        // Largest edge b is opposite the right angle at p1.
        assert!((ab - 90.0).abs() < 1e-9);
        assert!((aa - 4.0f64.atan2(3.0).to_degrees()).abs() < 1e-9);
        assert!((aa + ab + ac - 180.0).abs() < 1e-9);
    }

    #[test]
    fn heron_clamps_flat_triangle() {
        let e = edges([(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert_eq!(heron_area(&e), 0.0);
        let e = edges([(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
        assert!((heron_area(&e) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_near_collinear_without_nan() {
        let e = edges([(0.0, 0.0), (1.0, 1.0), (1e6, 1e6 + 1e-9)]);
        assert!(matches!(
            inner_angles(&e),
            Err(ShapeError::DegenerateGeometry { .. })
        ));
        let e = edges([(1.0, 1.0), (1.0, 1.0), (3.0, 0.0)]);
        assert!(matches!(
            inner_angles(&e),
            Err(ShapeError::DegenerateGeometry { .. })
        ));
    }

    #[test]
    fn sliver_below_resolvable_angle_is_degenerate() {
        // Smallest angle ~2e-9 rad: cos rounds to 1, so it is rejected as
        // collinear rather than by the third-angle guard.
        let e = edges([(0.0, 0.0), (1.0, 0.0), (0.5, 1e-9)]);
        match inner_angles(&e) {
            Err(ShapeError::DegenerateGeometry { reason }) => {
                assert!(reason.contains("collinear"), "{reason}")
            }
            other => panic!("expected degenerate, got {other:?}"),
        }
        // A thin sliver above the threshold keeps positive angles.
        let e = edges([(0.0, 0.0), (1.0, 0.0), (0.5, 1e-6)]);
        let angles = inner_angles(&e).unwrap();
        assert!(angles.iter().all(|a| *a > 0.0));
        assert!((angles.iter().sum::<f64>() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn huge_and_minute_right_triangles() {
        for s in [1e200, 1e-170] {
            let e = edges([(0.0, 0.0), (s, 0.0), (0.0, s)]);
            let [aa, ab, ac] = inner_angles(&e).unwrap();
            // Right angle at p1, opposite the hypotenuse b.
            assert!((ab - 90.0).abs() < 1e-9);
            assert!((aa - 45.0).abs() < 1e-9);
            assert!((ac - 45.0).abs() < 1e-9);
        }
        let e = edges([(0.0, 0.0), (1e150, 0.0), (0.0, 1e150)]);
        assert!((heron_area(&e) / 5e299 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn tiny_but_valid_triangle_is_accepted() {
        let e = edges([(0.0, 0.0), (1e-6, 0.0), (0.0, 1e-6)]);
        let angles = inner_angles(&e).unwrap();
        assert!(angles.iter().all(|a| a.is_finite() && *a > 0.0));
    }
}
