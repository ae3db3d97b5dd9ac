//! Hardware SIMD backend over `wide::f32x4`.
//!
//! Arithmetic, comparisons, `abs`, `sqrt` and `select` map to single vector
//! instructions. Everything else uses the [`Float4`] defaults so the results
//! stay bit-identical to [`ScalarVec4`](crate::ScalarVec4).

use crate::{Float4, Mask4};
use std::ops::{Add, Div, Mul, Sub};
use wide::{CmpEq, CmpGe, CmpGt, CmpLe, CmpLt, f32x4};

/// Comparison mask: each lane is all-ones (true) or all-zeros (false).
#[derive(Debug, Clone, Copy)]
pub struct WideMask4(f32x4);

impl Mask4 for WideMask4 {
    #[inline]
    fn lane(self, i: usize) -> bool {
        self.0.to_array()[i].to_bits() != 0
    }
}

/// Four `f32` lanes in one SSE/NEON register.
#[derive(Debug, Clone, Copy)]
pub struct WideVec4(f32x4);

impl Default for WideVec4 {
    fn default() -> Self {
        Self(f32x4::splat(0.0))
    }
}

impl PartialEq for WideVec4 {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_array() == other.0.to_array()
    }
}

impl From<f32x4> for WideVec4 {
    #[inline]
    fn from(v: f32x4) -> Self {
        Self(v)
    }
}

impl From<WideVec4> for f32x4 {
    #[inline]
    fn from(v: WideVec4) -> Self {
        v.0
    }
}

impl Add for WideVec4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for WideVec4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for WideVec4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Div for WideVec4 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }
}

impl Float4 for WideVec4 {
    type Mask = WideMask4;

    #[inline]
    fn from_array(lanes: [f32; 4]) -> Self {
        Self(f32x4::from(lanes))
    }

    #[inline]
    fn to_array(self) -> [f32; 4] {
        self.0.to_array()
    }

    #[inline]
    fn splat(value: f32) -> Self {
        Self(f32x4::splat(value))
    }

    #[inline]
    fn cmp_gt(self, rhs: Self) -> WideMask4 {
        WideMask4(self.0.cmp_gt(rhs.0))
    }

    #[inline]
    fn cmp_lt(self, rhs: Self) -> WideMask4 {
        WideMask4(self.0.cmp_lt(rhs.0))
    }

    #[inline]
    fn cmp_ge(self, rhs: Self) -> WideMask4 {
        WideMask4(self.0.cmp_ge(rhs.0))
    }

    #[inline]
    fn cmp_le(self, rhs: Self) -> WideMask4 {
        WideMask4(self.0.cmp_le(rhs.0))
    }

    #[inline]
    fn cmp_eq(self, rhs: Self) -> WideMask4 {
        WideMask4(self.0.cmp_eq(rhs.0))
    }

    #[inline]
    fn select(mask: WideMask4, a: Self, b: Self) -> Self {
        Self(mask.0.blend(a.0, b.0))
    }

    #[inline]
    fn abs(self) -> Self {
        Self(self.0.abs())
    }

    #[inline]
    fn sqrt(self) -> Self {
        Self(self.0.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScalarVec4;

    /// Inputs covering zero, one, halves, sub-unit fractions, negatives,
    /// infinities and NaN.
    const GOLDEN: [[f32; 4]; 8] = [
        [0.0, 0.0, 0.0, 0.0],
        [1.0, 1.0, 1.0, 1.0],
        [0.5, 0.25, 0.75, 0.125],
        [0.1, 0.2, 0.3, 0.9],
        [0.999, 0.001, 0.02, 0.97],
        [-0.4, 1.6, -0.0, 2.0],
        [f32::INFINITY, f32::NEG_INFINITY, 3.0, 0.6],
        [f32::NAN, 0.5, f32::NAN, 0.0],
    ];

    fn same_bits(a: [f32; 4], b: [f32; 4]) -> bool {
        a.iter()
            .zip(&b)
            .all(|(x, y)| (x.is_nan() && y.is_nan()) || x.to_bits() == y.to_bits())
    }

    fn check_unary(
        name: &str,
        f: impl Fn(ScalarVec4) -> ScalarVec4,
        g: impl Fn(WideVec4) -> WideVec4,
    ) {
        for lanes in GOLDEN {
            let s = f(ScalarVec4::from_array(lanes)).to_array();
            let w = g(WideVec4::from_array(lanes)).to_array();
            assert!(same_bits(s, w), "{name}({lanes:?}): scalar {s:?} wide {w:?}");
        }
    }

    fn check_binary(
        name: &str,
        f: impl Fn(ScalarVec4, ScalarVec4) -> ScalarVec4,
        g: impl Fn(WideVec4, WideVec4) -> WideVec4,
    ) {
        for a in GOLDEN {
            for b in GOLDEN {
                let s = f(ScalarVec4::from_array(a), ScalarVec4::from_array(b)).to_array();
                let w = g(WideVec4::from_array(a), WideVec4::from_array(b)).to_array();
                assert!(same_bits(s, w), "{name}({a:?}, {b:?}): scalar {s:?} wide {w:?}");
            }
        }
    }

    #[test]
    fn test_arithmetic_matches_scalar() {
        check_binary("add", |a, b| a + b, |a, b| a + b);
        check_binary("sub", |a, b| a - b, |a, b| a - b);
        check_binary("mul", |a, b| a * b, |a, b| a * b);
        check_binary("div", |a, b| a / b, |a, b| a / b);
    }

    #[test]
    fn test_functions_match_scalar() {
        check_unary("abs", |v| v.abs(), |v| v.abs());
        check_unary("sqrt", |v| v.sqrt(), |v| v.sqrt());
        check_unary("reciprocal", |v| v.reciprocal(), |v| v.reciprocal());
        check_unary("mul_n", |v| v.mul_n(0.3), |v| v.mul_n(0.3));
        check_binary("min", |a, b| a.min(b), |a, b| a.min(b));
        check_binary("pow", |a, b| a.pow(b), |a, b| a.pow(b));
    }

    #[test]
    fn test_masks_match_scalar() {
        for a in GOLDEN {
            for b in GOLDEN {
                let (sa, sb) = (ScalarVec4::from_array(a), ScalarVec4::from_array(b));
                let (wa, wb) = (WideVec4::from_array(a), WideVec4::from_array(b));
                assert_eq!(sa.cmp_gt(sb).to_bits(), wa.cmp_gt(wb).to_bits());
                assert_eq!(sa.cmp_lt(sb).to_bits(), wa.cmp_lt(wb).to_bits());
                assert_eq!(sa.cmp_ge(sb).to_bits(), wa.cmp_ge(wb).to_bits());
                assert_eq!(sa.cmp_le(sb).to_bits(), wa.cmp_le(wb).to_bits());
                assert_eq!(sa.cmp_eq(sb).to_bits(), wa.cmp_eq(wb).to_bits());
            }
        }
    }

    #[test]
    fn test_select_matches_scalar() {
        check_binary(
            "select",
            |a, b| ScalarVec4::select(a.cmp_gt(b), a, b),
            |a, b| WideVec4::select(a.cmp_gt(b), a, b),
        );
    }

    #[test]
    fn test_horizontal_sum_matches_scalar() {
        for lanes in GOLDEN {
            let s = ScalarVec4::from_array(lanes).horizontal_sum();
            let w = WideVec4::from_array(lanes).horizontal_sum();
            assert!(s.to_bits() == w.to_bits() || (s.is_nan() && w.is_nan()));
        }
    }
}
