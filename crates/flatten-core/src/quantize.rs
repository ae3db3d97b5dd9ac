//! Float to byte quantization policies.
//!
//! Several blend modes (Addition, Divide, Gamma Light) can leave channels
//! outside [0, 1]. [`Quantize`] decides what happens to those values when a
//! float grid is converted to bytes for encoding.

/// How float channels are mapped to bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quantize {
    /// Clamp to [0, 1], scale by 255 and round to nearest. NaN maps to 0.
    #[default]
    Clamp,
    /// Scale by 255, truncate toward zero and keep the low 8 bits.
    ///
    /// Out-of-range values wrap around (`1.2` becomes `50`, `-0.1` becomes
    /// `231`). Matches the output of older flatten tools.
    Wrap,
}

impl Quantize {
    /// Quantizes one channel value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flatten_core::Quantize;
    ///
    /// assert_eq!(Quantize::Clamp.apply(1.2), 255);
    /// assert_eq!(Quantize::Wrap.apply(1.2), 50);
    /// assert_eq!(Quantize::Clamp.apply(0.5), 128);
    /// assert_eq!(Quantize::Wrap.apply(0.5), 127);
    /// ```
    #[inline]
    pub fn apply(self, value: f32) -> u8 {
        match self {
            Self::Clamp => {
                if value.is_nan() {
                    0
                } else {
                    (value.clamp(0.0, 1.0) * 255.0).round() as u8
                }
            }
            // `as i64` saturates and maps NaN to 0
            Self::Wrap => ((value * 255.0) as i64 & 0xff) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_in_range() {
        assert_eq!(Quantize::Clamp.apply(0.0), 0);
        assert_eq!(Quantize::Clamp.apply(1.0), 255);
        assert_eq!(Quantize::Clamp.apply(128.0 / 255.0), 128);
    }

    #[test]
    fn test_clamp_out_of_range() {
        assert_eq!(Quantize::Clamp.apply(-3.0), 0);
        assert_eq!(Quantize::Clamp.apply(7.5), 255);
        assert_eq!(Quantize::Clamp.apply(f32::INFINITY), 255);
        assert_eq!(Quantize::Clamp.apply(f32::NAN), 0);
    }

    #[test]
    fn test_wrap_masks_low_bits() {
        // 1.2 * 255 = 306 -> 306 & 0xff = 50
        assert_eq!(Quantize::Wrap.apply(1.2), 50);
        // -0.1 * 255 = -25.5 -> -25 -> 231
        assert_eq!(Quantize::Wrap.apply(-0.1), 231);
        assert_eq!(Quantize::Wrap.apply(1.0), 255);
        assert_eq!(Quantize::Wrap.apply(f32::NAN), 0);
    }

    #[test]
    fn test_default_is_clamp() {
        assert_eq!(Quantize::default(), Quantize::Clamp);
    }
}
