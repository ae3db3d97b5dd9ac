//! Source-over alpha compositing of a blended color.
//!
//! Given the base pixel `Cb` (alpha `ab`), the top pixel `Cs` (alpha `as`)
//! and the blended color `B(Cb, Cs)`, every lane becomes
//!
//! ```text
//! Co = as * [(1 - ab) * Cs + ab * B] + ab * (1 - as) * Cb
//! ```
//!
//! Image opacity scales each pixel's alpha once, before the formula runs.
//! Color channels are never scaled by opacity.
//!
//! # Example
//!
//! ```rust
//! use flatten_math::Vec4;
//! use flatten_ops::{blend_pixel, BlendMode};
//!
//! let red = [1.0, 0.0, 0.0, 1.0];
//! let blue = [0.0, 0.0, 1.0, 1.0];
//!
//! let out = blend_pixel::<Vec4>(BlendMode::Normal, red, 1.0, blue, 1.0);
//! assert_eq!(out, blue);
//! ```

use flatten_math::Float4;

use crate::formula;
use crate::mode::{AlphaPolicy, BlendMode};

/// Composites `blended` over `base` using the top pixel's coverage.
///
/// `base` and `top` must already carry opacity-scaled alpha.
#[inline]
pub fn source_over<V: Float4>(base: V, top: V, blended: V) -> V {
    let ab = base.lane(3);
    let at = top.lane(3);
    (top.mul_n(1.0 - ab) + blended.mul_n(ab)).mul_n(at) + base.mul_n((1.0 - at) * ab)
}

/// Blends one RGBA pixel.
///
/// `base_opacity` and `top_opacity` multiply the respective alpha channels.
/// The alpha of the result follows [`BlendMode::alpha_policy`].
pub fn blend_pixel<V: Float4>(
    mode: BlendMode,
    base: [f32; 4],
    base_opacity: f32,
    top: [f32; 4],
    top_opacity: f32,
) -> [f32; 4] {
    let cb = V::from_array(base).with_lane(3, base[3] * base_opacity);
    let cs = V::from_array(top).with_lane(3, top[3] * top_opacity);

    match mode.alpha_policy() {
        AlphaPolicy::Passthrough => formula::apply(mode, cb, cs).to_array(),
        AlphaPolicy::Composited => source_over(cb, cs, formula::apply(mode, cb, cs)).to_array(),
        AlphaPolicy::ForceOpaque => source_over(cb, cs, formula::apply(mode, cb, cs))
            .with_lane(3, 1.0)
            .to_array(),
    }
}

/// Blends a row of RGBA pixels in place.
///
/// `base` and `top` must hold the same number of floats, a multiple of four.
pub fn blend_row<V: Float4>(
    mode: BlendMode,
    base: &mut [f32],
    base_opacity: f32,
    top: &[f32],
    top_opacity: f32,
) {
    debug_assert_eq!(base.len(), top.len());
    for (b, t) in base.chunks_exact_mut(4).zip(top.chunks_exact(4)) {
        let out = blend_pixel::<V>(
            mode,
            [b[0], b[1], b[2], b[3]],
            base_opacity,
            [t[0], t[1], t[2], t[3]],
            top_opacity,
        );
        b.copy_from_slice(&out);
    }
}
