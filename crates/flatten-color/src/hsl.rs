//! RGB <-> HSL conversion.
//!
//! Hue, saturation and lightness are all normalized to [0, 1]. Colors whose
//! channel spread is below [`ACHROMATIC_THRESHOLD`] are treated as gray and
//! get hue and saturation 0.

use flatten_math::Float4;

/// Channel spread under which a color is considered achromatic.
pub const ACHROMATIC_THRESHOLD: f32 = 0.001;

/// Converts R, G, B, A into H, S, L, A.
///
/// # Example
///
/// ```rust
/// use flatten_color::rgb_to_hsl;
/// use flatten_math::{Float4, Vec4};
///
/// let [h, s, l, a] = rgb_to_hsl(Vec4::new(1.0, 0.0, 0.0, 0.5)).to_array();
/// assert_eq!((h, s, l, a), (0.0, 1.0, 0.5, 0.5));
/// ```
pub fn rgb_to_hsl<V: Float4>(rgb: V) -> V {
    let [r, g, b, a] = rgb.to_array();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;

    if d < ACHROMATIC_THRESHOLD {
        return V::new(0.0, 0.0, l, a);
    }

    let s = if l >= 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if r == max {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if g == max {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    V::new(h / 6.0, s, l, a)
}

/// One RGB channel of an HSL color at hue offset `t`.
///
/// `t` is wrapped once into [0, 1] before the piecewise ramp is evaluated.
pub fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Converts H, S, L, A back into R, G, B, A.
pub fn hsl_to_rgb<V: Float4>(hsl: V) -> V {
    let [h, s, l, a] = hsl.to_array();
    if s == 0.0 {
        return V::new(l, l, l, a);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    V::new(
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
        a,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use flatten_math::Vec4;

    #[test]
    fn test_primaries() {
        let green = rgb_to_hsl(Vec4::new(0.0, 1.0, 0.0, 1.0)).to_array();
        assert_abs_diff_eq!(green[0], 1.0 / 3.0, epsilon = 1e-6);
        assert_abs_diff_eq!(green[1], 1.0);
        assert_abs_diff_eq!(green[2], 0.5);

        let blue = rgb_to_hsl(Vec4::new(0.0, 0.0, 1.0, 1.0)).to_array();
        assert_abs_diff_eq!(blue[0], 2.0 / 3.0, epsilon = 1e-6);

        // magenta wraps through the red sector
        let magenta = rgb_to_hsl(Vec4::new(1.0, 0.0, 1.0, 1.0)).to_array();
        assert_abs_diff_eq!(magenta[0], 5.0 / 6.0, epsilon = 1e-6);
    }

    #[test]
    fn test_roundtrip_chromatic() {
        for rgb in [
            [0.8, 0.2, 0.1, 1.0],
            [0.1, 0.6, 0.3, 0.5],
            [0.25, 0.35, 0.9, 1.0],
            [0.7, 0.65, 0.1, 0.0],
            [0.95, 0.4, 0.85, 1.0],
        ] {
            let back = hsl_to_rgb(rgb_to_hsl(Vec4::from_array(rgb))).to_array();
            for i in 0..4 {
                assert_abs_diff_eq!(back[i], rgb[i], epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_near_gray_collapses() {
        let hsl = rgb_to_hsl(Vec4::new(0.5, 0.5004, 0.4998, 1.0)).to_array();
        assert_eq!(hsl[0], 0.0);
        assert_eq!(hsl[1], 0.0);

        let rgb = hsl_to_rgb(Vec4::from_array(hsl)).to_array();
        assert_eq!(rgb[0], hsl[2]);
        assert_eq!(rgb[1], hsl[2]);
        assert_eq!(rgb[2], hsl[2]);
    }

    #[test]
    fn test_hue_to_channel_wraps() {
        assert_eq!(hue_to_channel(0.2, 0.8, 1.3), hue_to_channel(0.2, 0.8, 0.3));
        assert_eq!(hue_to_channel(0.2, 0.8, -0.1 + 1.0), hue_to_channel(0.2, 0.8, -0.1));
        assert_eq!(hue_to_channel(0.2, 0.8, 0.9), 0.2);
    }
}
