//! Luminosity and saturation primitives for non-separable blending.
//!
//! These follow the W3C compositing definitions of `Lum`, `Sat`, `ClipColor`,
//! `SetLum` and `SetSat`, with luminosity weights 0.3 / 0.59 / 0.11.
//!
//! # Example
//!
//! ```rust
//! use flatten_color::{saturation, set_sat};
//! use flatten_math::{Float4, Vec4};
//!
//! let rgb = Vec4::new(0.9, 0.5, 0.1, 1.0);
//! assert!((saturation(rgb) - 0.8).abs() < 1e-6);
//!
//! // Zero saturation collapses to black, keeping alpha
//! assert_eq!(set_sat(rgb, 0.0).to_array(), [0.0, 0.0, 0.0, 1.0]);
//! ```

use flatten_math::Float4;

/// Luminosity weights; the alpha weight is zero.
const LUMA_WEIGHTS: [f32; 4] = [0.3, 0.59, 0.11, 0.0];

#[inline]
fn max3(r: f32, g: f32, b: f32) -> f32 {
    let m = if r > g { r } else { g };
    if m > b { m } else { b }
}

#[inline]
fn min3(r: f32, g: f32, b: f32) -> f32 {
    let m = if r < g { r } else { g };
    if m < b { m } else { b }
}

/// `0.3 R + 0.59 G + 0.11 B`.
#[inline]
pub fn luminosity<V: Float4>(rgb: V) -> f32 {
    (rgb * V::from_array(LUMA_WEIGHTS)).horizontal_sum()
}

/// `max(R, G, B) - min(R, G, B)`.
#[inline]
pub fn saturation<V: Float4>(rgb: V) -> f32 {
    let [r, g, b, _] = rgb.to_array();
    max3(r, g, b) - min3(r, g, b)
}

/// Pulls an out-of-gamut color back into [0, 1] along the line towards its
/// own luminosity.
///
/// Both corrections use the extremes of the input color; the upper one is
/// applied to the output of the lower one.
pub fn clip_color<V: Float4>(rgb: V) -> V {
    let [r, g, b, a] = rgb.to_array();
    let l = luminosity(rgb);
    let n = min3(r, g, b);
    let x = max3(r, g, b);
    let lv = V::splat(l);

    let mut out = rgb;
    if n < 0.0 {
        out = lv + ((out - lv) * lv) / V::splat(l - n);
    }
    if x > 1.0 {
        out = lv + ((out - lv) * V::splat(1.0 - l)) / V::splat(x - l);
    }
    out.with_lane(3, a)
}

/// Shifts `rgb` so its luminosity becomes `l`, then clips into gamut.
pub fn set_lum<V: Float4>(rgb: V, l: f32) -> V {
    let a = rgb.lane(3);
    let d = l - luminosity(rgb);
    clip_color(rgb.add_n(d).with_lane(3, a))
}

/// Rescales `rgb` so its saturation becomes `s`, keeping the channel order.
///
/// Channels are ranked max / mid / min with ties resolved in R, G, B order,
/// so the three roles always land on distinct channels.
pub fn set_sat<V: Float4>(rgb: V, s: f32) -> V {
    let c = rgb.to_array();

    let (mut max, mut mid, mut min) = (0usize, 1usize, 2usize);
    if c[max] < c[mid] {
        (max, mid) = (mid, max);
    }
    if c[max] < c[min] {
        (max, min) = (min, max);
    }
    if c[mid] < c[min] {
        (mid, min) = (min, mid);
    }

    let mut out = [0.0, 0.0, 0.0, c[3]];
    if c[max] > c[min] {
        out[mid] = ((c[mid] - c[min]) * s) / (c[max] - c[min]);
        out[max] = s;
    }
    V::from_array(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use flatten_math::{ScalarVec4, Vec4};

    #[test]
    fn test_luminosity_weights() {
        assert_abs_diff_eq!(luminosity(Vec4::new(1.0, 0.0, 0.0, 1.0)), 0.3);
        assert_abs_diff_eq!(luminosity(Vec4::new(0.0, 1.0, 0.0, 1.0)), 0.59);
        assert_abs_diff_eq!(luminosity(Vec4::new(0.0, 0.0, 1.0, 1.0)), 0.11);
        // alpha does not contribute
        assert_abs_diff_eq!(luminosity(Vec4::new(1.0, 1.0, 1.0, 0.25)), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_saturation() {
        assert_abs_diff_eq!(saturation(Vec4::new(0.2, 0.7, 0.4, 1.0)), 0.5, epsilon = 1e-6);
        assert_eq!(saturation(Vec4::splat(0.3)), 0.0);
    }

    #[test]
    fn test_set_sat_zero_is_gray() {
        for rgb in [
            [0.9, 0.5, 0.1, 1.0],
            [0.1, 0.2, 0.3, 0.5],
            [0.6, 0.6, 0.2, 1.0],
            [0.4, 0.4, 0.4, 1.0],
        ] {
            let out = set_sat(Vec4::from_array(rgb), 0.0).to_array();
            assert_eq!(out[0], out[1]);
            assert_eq!(out[1], out[2]);
            assert_eq!(out[3], rgb[3]);
        }
    }

    #[test]
    fn test_set_sat_keeps_order() {
        let out = set_sat(Vec4::new(0.2, 0.8, 0.5, 1.0), 0.6).to_array();
        // green is max, red is min, blue sits halfway
        assert_abs_diff_eq!(out[1], 0.6);
        assert_abs_diff_eq!(out[0], 0.0);
        assert_abs_diff_eq!(out[2], 0.3, epsilon = 1e-6);
    }

    #[test]
    fn test_set_sat_ties_are_distinct() {
        // red and green tie for max; red ranks first
        let out = set_sat(Vec4::new(0.7, 0.7, 0.1, 1.0), 0.5).to_array();
        assert_abs_diff_eq!(out[0], 0.5);
        assert_abs_diff_eq!(out[1], 0.5);
        assert_abs_diff_eq!(out[2], 0.0);
    }

    #[test]
    fn test_set_lum_in_gamut() {
        let rgb = Vec4::new(0.2, 0.3, 0.4, 0.8);
        let out = set_lum(rgb, 0.5);
        assert_abs_diff_eq!(luminosity(out), 0.5, epsilon = 1e-5);
        assert_eq!(out.lane(3), 0.8);
    }

    #[test]
    fn test_clip_color_bounds() {
        let over = clip_color(Vec4::new(1.4, 0.6, 0.2, 1.0)).to_array();
        let under = clip_color(Vec4::new(-0.3, 0.4, 0.6, 1.0)).to_array();
        for c in over[..3].iter().chain(&under[..3]) {
            assert!((-1e-5..=1.0 + 1e-5).contains(c), "{c} out of gamut");
        }
        // luminosity survives clipping
        assert_abs_diff_eq!(
            luminosity(Vec4::from_array(over)),
            luminosity(Vec4::new(1.4, 0.6, 0.2, 1.0)),
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_clip_color_both_corrections() {
        // min < 0 and max > 1: the upper correction uses the max of the input
        let out = clip_color(Vec4::new(-0.5, 0.5, 1.8, 0.6)).to_array();
        assert_abs_diff_eq!(out[0], 0.188_332_19, epsilon = 1e-5);
        assert_abs_diff_eq!(out[1], 0.371_805_27, epsilon = 1e-5);
        assert_abs_diff_eq!(out[2], 0.610_320_28, epsilon = 1e-5);
        assert_eq!(out[3], 0.6);
        assert_abs_diff_eq!(luminosity(Vec4::from_array(out)), 0.343, epsilon = 1e-5);
    }

    #[test]
    fn test_backends_agree() {
        let a = [0.9, 0.2, 0.55, 0.7];
        let s = set_lum(set_sat(ScalarVec4::from_array(a), 0.3), 0.8).to_array();
        let v = set_lum(set_sat(Vec4::from_array(a), 0.3), 0.8).to_array();
        assert_eq!(s.map(f32::to_bits), v.map(f32::to_bits));
    }
}
