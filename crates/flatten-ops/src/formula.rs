//! Raw blend formulas `B(Cb, Cs)`.
//!
//! Each function receives the base color `cb` and the top color `cs` as full
//! RGBA vectors (alphas already scaled by image opacity) and returns the
//! blended color before compositing. Separable formulas act on all four
//! lanes; the non-separable ones carry the alpha of the vector they
//! transform.
//!
//! No formula fails. Divisions by zero produce IEEE infinities or NaN, which
//! later clip or quantize to a byte.

use flatten_color::{hsl_to_rgb, luminosity, rgb_to_hsl, saturation, set_lum, set_sat};
use flatten_math::Float4;

use crate::BlendMode;

/// Color dodge: base values below this count as black.
const DODGE_LO: [f32; 4] = [0.001, 0.001, 0.02, 0.001];
/// Color dodge: top values above this saturate to white.
const DODGE_HI: [f32; 4] = [0.99, 0.99, 0.97, 0.98];

#[inline]
fn clip_high<V: Float4>(v: V) -> V {
    let one = V::splat(1.0);
    V::select(v.cmp_gt(one), one, v)
}

/// `min(Cb + Cs, 1)`.
#[inline]
pub fn addition<V: Float4>(cb: V, cs: V) -> V {
    clip_high(cb + cs)
}

/// `Cb * Cs`.
#[inline]
pub fn multiply<V: Float4>(cb: V, cs: V) -> V {
    cb * cs
}

/// `Cb + Cs - Cb * Cs`, clipped at 1.
#[inline]
pub fn screen<V: Float4>(cb: V, cs: V) -> V {
    clip_high(cb + cs - cb * cs)
}

/// `|Cb - Cs|`, clipped at 1.
#[inline]
pub fn difference<V: Float4>(cb: V, cs: V) -> V {
    let hi = V::select(cb.cmp_gt(cs), cb, cs);
    let lo = V::select(cb.cmp_lt(cs), cb, cs);
    clip_high((hi - lo).abs())
}

/// Per-lane minimum.
#[inline]
pub fn darken<V: Float4>(cb: V, cs: V) -> V {
    V::select(cs.cmp_lt(cb), cs, cb)
}

/// Per-lane maximum.
#[inline]
pub fn lighten<V: Float4>(cb: V, cs: V) -> V {
    V::select(cs.cmp_gt(cb), cs, cb)
}

/// `Cb / Cs`, clipped at 1.
///
/// `0 / 0` lanes come out as 1, like any other division by black.
#[inline]
pub fn divide<V: Float4>(cb: V, cs: V) -> V {
    let one = V::splat(1.0);
    let q = cb * cs.reciprocal();
    V::select(q.cmp_le(one), q, one)
}

/// `min(1, Cb / (1 - Cs))` with per-lane dark and bright cutoffs.
pub fn color_dodge<V: Float4>(cb: V, cs: V) -> V {
    let one = V::splat(1.0);
    let lo = V::from_array(DODGE_LO);
    let hi = V::from_array(DODGE_HI);

    let dodged = one.min(cb * (one - cs).reciprocal());
    let out = V::select(cs.cmp_gt(hi), one, dodged);
    V::select(cb.cmp_lt(lo), V::splat(0.0), out)
}

/// `Cb ^ Cs`.
#[inline]
pub fn gamma_light<V: Float4>(cb: V, cs: V) -> V {
    cb.pow(cs)
}

/// `Cb ^ (1 / Cs)`, zero where `Cs` is zero.
#[inline]
pub fn gamma_dark<V: Float4>(cb: V, cs: V) -> V {
    let zero = V::splat(0.0);
    V::select(cs.cmp_eq(zero), zero, cb.pow(cs.reciprocal()))
}

/// Multiply below 0.5 of the top, screen above.
pub fn hard_light<V: Float4>(cb: V, cs: V) -> V {
    let cs2 = cs.mul_n(2.0);
    V::select(cs.cmp_lt(V::splat(0.5)), cb * cs2, screen(cb, cs2.sub_n(1.0)))
}

/// Hard light with base and top swapped.
pub fn overlay<V: Float4>(cb: V, cs: V) -> V {
    let cb2 = cb.mul_n(2.0);
    V::select(cb.cmp_lt(V::splat(0.5)), cs * cb2, screen(cs, cb2.sub_n(1.0)))
}

/// W3C soft light.
pub fn soft_light<V: Float4>(cb: V, cs: V) -> V {
    let one = V::splat(1.0);
    let half = V::splat(0.5);

    let d = (cb.mul_n(16.0).sub_n(12.0) * cb).add_n(4.0) * cb;
    let p = V::select(cb.cmp_le(V::splat(0.25)), d, cb.sqrt());

    let darker = cb - (one - cs.mul_n(2.0)) * cb * (one - cb);
    let lighter = cb + cs.mul_n(2.0).sub_n(1.0) * (p - cb);
    V::select(cs.cmp_le(half), darker, lighter)
}

/// Top hue and saturation, base luminosity.
#[inline]
pub fn color<V: Float4>(cb: V, cs: V) -> V {
    set_lum(cs, luminosity(cb))
}

/// Top hue, base saturation and luminosity.
#[inline]
pub fn hue<V: Float4>(cb: V, cs: V) -> V {
    set_lum(set_sat(cs, saturation(cb)), luminosity(cb))
}

/// Top saturation, base hue and luminosity.
#[inline]
pub fn saturation_mode<V: Float4>(cb: V, cs: V) -> V {
    set_lum(set_sat(cb, saturation(cs)), luminosity(cb))
}

/// Base hue and saturation with the HSL lightness of the top.
pub fn luminosity_mode<V: Float4>(cb: V, cs: V) -> V {
    let [h, s, _, a] = rgb_to_hsl(cb).to_array();
    let l = rgb_to_hsl(cs).lane(2);
    hsl_to_rgb(V::new(h, s, l, a))
}

/// Dispatches `mode` to its formula.
///
/// `Base` returns `cb` and `Top` returns `cs`; the driver never composites
/// those two.
pub fn apply<V: Float4>(mode: BlendMode, cb: V, cs: V) -> V {
    match mode {
        BlendMode::Base => cb,
        BlendMode::Top | BlendMode::Normal => cs,
        BlendMode::Addition => addition(cb, cs),
        BlendMode::Color => color(cb, cs),
        BlendMode::ColorDodge => color_dodge(cb, cs),
        BlendMode::Darken => darken(cb, cs),
        BlendMode::Difference => difference(cb, cs),
        BlendMode::Divide => divide(cb, cs),
        BlendMode::GammaLight => gamma_light(cb, cs),
        BlendMode::GammaDark => gamma_dark(cb, cs),
        BlendMode::Hue => hue(cb, cs),
        BlendMode::Lighten => lighten(cb, cs),
        BlendMode::Luminosity => luminosity_mode(cb, cs),
        BlendMode::Multiply => multiply(cb, cs),
        BlendMode::Overlay => overlay(cb, cs),
        BlendMode::Saturation => saturation_mode(cb, cs),
        BlendMode::Screen => screen(cb, cs),
        BlendMode::SoftLight => soft_light(cb, cs),
        BlendMode::HardLight => hard_light(cb, cs),
    }
}
