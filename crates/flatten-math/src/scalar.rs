//! Portable scalar emulation of [`Float4`].
//!
//! Every operation is a plain per-lane `f32` expression. This backend is
//! always compiled: it is the `Vec4` used when the `simd` feature is off, and
//! the reference the SIMD backend is tested against.

use crate::{Float4, Mask4};
use std::ops::{Add, Div, Mul, Sub};

/// Comparison mask with lanes encoded as `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScalarMask4(pub [u32; 4]);

impl Mask4 for ScalarMask4 {
    #[inline]
    fn lane(self, i: usize) -> bool {
        self.0[i] != 0
    }

    #[inline]
    fn to_bits(self) -> [u32; 4] {
        self.0.map(|v| u32::from(v != 0))
    }
}

/// Four `f32` lanes stored as a plain array.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScalarVec4(pub [f32; 4]);

impl ScalarVec4 {
    #[inline]
    fn map2(self, rhs: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2]), f(a[3], b[3])])
    }

    #[inline]
    fn compare(self, rhs: Self, f: impl Fn(f32, f32) -> bool) -> ScalarMask4 {
        let (a, b) = (self.0, rhs.0);
        ScalarMask4([
            u32::from(f(a[0], b[0])),
            u32::from(f(a[1], b[1])),
            u32::from(f(a[2], b[2])),
            u32::from(f(a[3], b[3])),
        ])
    }
}

impl Add for ScalarVec4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.map2(rhs, |a, b| a + b)
    }
}

impl Sub for ScalarVec4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.map2(rhs, |a, b| a - b)
    }
}

impl Mul for ScalarVec4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.map2(rhs, |a, b| a * b)
    }
}

impl Div for ScalarVec4 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.map2(rhs, |a, b| a / b)
    }
}

impl Float4 for ScalarVec4 {
    type Mask = ScalarMask4;

    #[inline]
    fn from_array(lanes: [f32; 4]) -> Self {
        Self(lanes)
    }

    #[inline]
    fn to_array(self) -> [f32; 4] {
        self.0
    }

    #[inline]
    fn splat(value: f32) -> Self {
        Self([value; 4])
    }

    #[inline]
    fn cmp_gt(self, rhs: Self) -> ScalarMask4 {
        self.compare(rhs, |a, b| a > b)
    }

    #[inline]
    fn cmp_lt(self, rhs: Self) -> ScalarMask4 {
        self.compare(rhs, |a, b| a < b)
    }

    #[inline]
    fn cmp_ge(self, rhs: Self) -> ScalarMask4 {
        self.compare(rhs, |a, b| a >= b)
    }

    #[inline]
    fn cmp_le(self, rhs: Self) -> ScalarMask4 {
        self.compare(rhs, |a, b| a <= b)
    }

    #[inline]
    fn cmp_eq(self, rhs: Self) -> ScalarMask4 {
        self.compare(rhs, |a, b| a == b)
    }

    #[inline]
    fn select(mask: ScalarMask4, a: Self, b: Self) -> Self {
        Self([0, 1, 2, 3].map(|i| if mask.0[i] != 0 { a.0[i] } else { b.0[i] }))
    }

    #[inline]
    fn abs(self) -> Self {
        Self(self.0.map(f32::abs))
    }

    #[inline]
    fn sqrt(self) -> Self {
        Self(self.0.map(f32::sqrt))
    }
}
