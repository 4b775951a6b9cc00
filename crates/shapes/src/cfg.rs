//! Tolerances for shape construction and classification.
//!
//! Policy
//! - Construction uses fixed constants; callers never tune them.
//! - Classification takes a small `Copy` config so the equality policy is
//!   explicit at the call site. Defaults reproduce the historical behavior:
//!   exact length equality for isosceles/scalene, 5-digit rounding for
//!   equilateral and right-angle checks.

/// Smallest accepted sine of a triangle's smallest angle (about 5.7e-6°).
///
/// A triangle is degenerate when `|cross| <= MIN_ANGLE_SIN * l1 * l2`, with
/// `l1, l2` its two longest edges; that ratio is the sine of the angle between
/// them. The law of cosines cannot tell angles below ~1.5e-8 rad from zero in
/// f64 (`cos` rounds to 1), so the threshold sits well above that limit.
pub(crate) const MIN_ANGLE_SIN: f64 = 1e-7;

/// Inner angle of every rectangle corner, in degrees.
pub(crate) const RIGHT_ANGLE: f64 = 90.0;

/// Classification tolerances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifyCfg {
    /// Absolute tolerance for "equal length" (isosceles, scalene, square).
    /// `0.0` means exact floating-point equality.
    pub length_eps: f64,
    /// Decimal digits lengths and angles are rounded to before the
    /// equilateral and right-angle checks.
    pub round_digits: i32,
    /// Max distance in degrees from 90 for a right angle.
    pub right_angle_eps: f64,
}

impl Default for ClassifyCfg {
    fn default() -> Self {
        Self {
            length_eps: 0.0,
            round_digits: 5,
            right_angle_eps: 1e-3,
        }
    }
}

impl ClassifyCfg {
    /// Same as default but with a small length tolerance, so lengths that
    /// differ only by rounding noise compare equal.
    pub fn tolerant() -> Self {
        Self {
            length_eps: 1e-9,
            ..Self::default()
        }
    }

    #[inline]
    pub(crate) fn lengths_equal(&self, a: f64, b: f64) -> bool {
        if self.length_eps == 0.0 {
            a == b
        } else {
            (a - b).abs() <= self.length_eps
        }
    }

    /// Round half away from zero to `round_digits` decimals. Values too large
    /// to scale are returned unchanged; they carry no fractional digits anyway.
    #[inline]
    pub(crate) fn round(&self, v: f64) -> f64 {
        let scale = 10f64.powi(self.round_digits);
        let scaled = v * scale;
        if !scaled.is_finite() {
            return v;
        }
        scaled.round() / scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_exact() {
        let cfg = ClassifyCfg::default();
        assert!(cfg.lengths_equal(1.0, 1.0));
        assert!(!cfg.lengths_equal(1.0, 1.0 + f64::EPSILON));
        assert!(ClassifyCfg::tolerant().lengths_equal(1.0, 1.0 + f64::EPSILON));
    }

    #[test]
    fn rounding_to_five_digits() {
        let cfg = ClassifyCfg::default();
        assert_eq!(cfg.round(0.123456), 0.12346);
        assert_eq!(cfg.round(89.999_999_9), 90.0);
        assert_eq!(cfg.round(-1.000_004), -1.0);
    }

    #[test]
    fn rounding_leaves_huge_values_alone() {
        let cfg = ClassifyCfg::default();
        assert_eq!(cfg.round(1e305), 1e305);
        assert_eq!(cfg.round(-2.5e306), -2.5e306);
        assert_ne!(cfg.round(1e305), cfg.round(2e305));
    }
}
