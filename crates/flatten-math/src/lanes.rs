//! The four-lane vector contract.
//!
//! [`Float4`] is the algebra every blend formula is written against: lane-wise
//! arithmetic, comparisons producing a [`Mask4`], mask selection, and a few
//! reductions. Two backends implement it:
//!
//! - [`ScalarVec4`](crate::ScalarVec4) - portable array emulation
//! - [`WideVec4`](crate::WideVec4) - hardware SIMD via `wide` (feature `simd`)
//!
//! Backends must agree bit-for-bit. Operations that hardware only offers as
//! approximations (`reciprocal`, `pow`) or with backend-specific NaN rules
//! (`min`) therefore have fixed definitions here, and `horizontal_sum` always
//! adds lanes left to right.
//!
//! Comparisons are plain IEEE comparisons. Tolerances belong to the caller.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

/// Lane-wise boolean result of a [`Float4`] comparison.
pub trait Mask4: Copy + Debug {
    /// Returns the truth value of lane `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    fn lane(self, i: usize) -> bool;

    /// Returns the mask as integers, `1` for true lanes and `0` for false.
    #[inline]
    fn to_bits(self) -> [u32; 4] {
        [0, 1, 2, 3].map(|i| u32::from(self.lane(i)))
    }

    /// `true` if any lane is set.
    #[inline]
    fn any(self) -> bool {
        (0..4).any(|i| self.lane(i))
    }

    /// `true` if every lane is set.
    #[inline]
    fn all(self) -> bool {
        (0..4).all(|i| self.lane(i))
    }
}

/// Four `f32` lanes, laid out as R, G, B, A when holding a pixel.
///
/// # Example
///
/// ```rust
/// use flatten_math::{Float4, Mask4, Vec4};
///
/// let a = Vec4::new(0.2, 0.8, 0.5, 1.0);
/// let b = Vec4::splat(0.5);
///
/// let mask = a.cmp_gt(b);
/// assert_eq!(mask.to_bits(), [0, 1, 0, 1]);
///
/// let picked = Vec4::select(mask, a, b);
/// assert_eq!(picked.to_array(), [0.5, 0.8, 0.5, 1.0]);
/// assert_eq!(Vec4::new(1.0, 2.0, 3.0, 4.0).horizontal_sum(), 10.0);
/// ```
pub trait Float4:
    Copy
    + Debug
    + PartialEq
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Comparison result type.
    type Mask: Mask4;

    /// Builds a vector from four lanes.
    fn from_array(lanes: [f32; 4]) -> Self;

    /// Returns the four lanes.
    fn to_array(self) -> [f32; 4];

    /// Broadcasts `value` to every lane.
    fn splat(value: f32) -> Self;

    /// `self > rhs` per lane.
    fn cmp_gt(self, rhs: Self) -> Self::Mask;

    /// `self < rhs` per lane.
    fn cmp_lt(self, rhs: Self) -> Self::Mask;

    /// `self >= rhs` per lane.
    fn cmp_ge(self, rhs: Self) -> Self::Mask;

    /// `self <= rhs` per lane.
    fn cmp_le(self, rhs: Self) -> Self::Mask;

    /// `self == rhs` per lane.
    fn cmp_eq(self, rhs: Self) -> Self::Mask;

    /// Picks `a` where `mask` is set and `b` elsewhere.
    fn select(mask: Self::Mask, a: Self, b: Self) -> Self;

    /// Clears the sign bit of every lane.
    fn abs(self) -> Self;

    /// IEEE square root per lane.
    fn sqrt(self) -> Self;

    /// Builds a vector from R, G, B, A.
    #[inline]
    fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_array([r, g, b, a])
    }

    /// Reads the first four floats of `src`.
    ///
    /// # Panics
    ///
    /// Panics if `src` holds fewer than four floats.
    #[inline]
    fn load(src: &[f32]) -> Self {
        Self::from_array([src[0], src[1], src[2], src[3]])
    }

    /// Writes the lanes into the first four floats of `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `dst` holds fewer than four floats.
    #[inline]
    fn store(self, dst: &mut [f32]) {
        dst[..4].copy_from_slice(&self.to_array());
    }

    /// Adds a broadcast scalar.
    #[inline]
    fn add_n(self, s: f32) -> Self {
        self + Self::splat(s)
    }

    /// Subtracts a broadcast scalar.
    #[inline]
    fn sub_n(self, s: f32) -> Self {
        self - Self::splat(s)
    }

    /// Multiplies by a broadcast scalar.
    #[inline]
    fn mul_n(self, s: f32) -> Self {
        self * Self::splat(s)
    }

    /// Lane-wise `self < rhs ? self : rhs`.
    ///
    /// When either lane is NaN the result is `rhs`.
    #[inline]
    fn min(self, rhs: Self) -> Self {
        Self::select(self.cmp_lt(rhs), self, rhs)
    }

    /// Exact `1.0 / x` per lane.
    #[inline]
    fn reciprocal(self) -> Self {
        Self::splat(1.0) / self
    }

    /// `powf` per lane.
    #[inline]
    fn pow(self, exp: Self) -> Self {
        let b = self.to_array();
        let e = exp.to_array();
        Self::from_array([
            b[0].powf(e[0]),
            b[1].powf(e[1]),
            b[2].powf(e[2]),
            b[3].powf(e[3]),
        ])
    }

    /// Sum of all lanes, added in lane order.
    #[inline]
    fn horizontal_sum(self) -> f32 {
        let [a, b, c, d] = self.to_array();
        a + b + c + d
    }

    /// Returns lane `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    #[inline]
    fn lane(self, i: usize) -> f32 {
        self.to_array()[i]
    }

    /// Returns a copy with lane `i` replaced by `value`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    #[inline]
    fn with_lane(self, i: usize, value: f32) -> Self {
        let mut lanes = self.to_array();
        lanes[i] = value;
        Self::from_array(lanes)
    }
}
