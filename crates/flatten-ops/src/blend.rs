//! Whole-image blending.
//!
//! [`blend`] writes the result into the base image row by row. With the
//! `parallel` feature (default) rows are spread over the rayon global pool;
//! each worker owns a disjoint output row, so no locking is involved.
//!
//! # Example
//!
//! ```rust
//! use flatten_core::ImageF32;
//! use flatten_ops::{blend, BlendMode};
//!
//! let mut base = ImageF32::filled(4, 4, [1.0, 0.0, 0.0, 1.0]).unwrap();
//! let top = ImageF32::filled(4, 4, [0.0, 0.0, 1.0, 1.0]).unwrap();
//!
//! blend(&mut base, &top, BlendMode::Normal).unwrap();
//! assert_eq!(base.pixel(2, 3), [0.0, 0.0, 1.0, 1.0]);
//! ```

use flatten_core::ImageF32;
use flatten_math::Vec4;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::composite::blend_row;
use crate::{BlendMode, OpsError, OpsResult};

/// Blends `top` into `base` with `mode`.
///
/// Fails with [`OpsError::SizeMismatch`] before touching any pixel when the
/// two images differ in size. On success the base opacity is reset to 1.0,
/// since it has been folded into the pixels.
pub fn blend(base: &mut ImageF32, top: &ImageF32, mode: BlendMode) -> OpsResult<()> {
    if base.dimensions() != top.dimensions() {
        return Err(OpsError::size_mismatch(base.dimensions(), top.dimensions()));
    }

    let (width, height) = base.dimensions();
    let base_opacity = base.opacity();
    let top_opacity = top.opacity();
    trace!(width, height, mode = %mode, base_opacity, top_opacity, "blend");

    let row_len = base.row_len();

    #[cfg(feature = "parallel")]
    base.data_mut()
        .par_chunks_exact_mut(row_len)
        .zip(top.data().par_chunks_exact(row_len))
        .for_each(|(b, t)| blend_row::<Vec4>(mode, b, base_opacity, t, top_opacity));

    #[cfg(not(feature = "parallel"))]
    for (b, t) in base.data_mut().chunks_exact_mut(row_len).zip(top.rows()) {
        blend_row::<Vec4>(mode, b, base_opacity, t, top_opacity);
    }

    base.set_opacity(1.0);
    Ok(())
}

/// Multiplies every pixel's alpha by the image opacity, then resets the
/// opacity to 1.0.
///
/// Same result as blending the image with [`BlendMode::Base`], without
/// needing a top layer.
pub fn fold_opacity(image: &mut ImageF32) {
    let opacity = image.opacity();
    let (width, height) = image.dimensions();
    trace!(width, height, opacity, "fold opacity");

    #[cfg(feature = "parallel")]
    image
        .data_mut()
        .par_chunks_exact_mut(4)
        .for_each(|px| px[3] *= opacity);

    #[cfg(not(feature = "parallel"))]
    for px in image.data_mut().chunks_exact_mut(4) {
        px[3] *= opacity;
    }

    image.set_opacity(1.0);
}

/// Applies `layers` onto `base` left to right.
///
/// Stops at the first failing layer; earlier layers stay applied.
pub fn flatten<'a, I>(base: &mut ImageF32, layers: I) -> OpsResult<()>
where
    I: IntoIterator<Item = (BlendMode, &'a ImageF32)>,
{
    for (index, (mode, top)) in layers.into_iter().enumerate() {
        debug!(index, mode = %mode, opacity = top.opacity(), "flatten layer");
        blend(base, top, mode)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blend_pixel;
    use approx::assert_abs_diff_eq;

    fn gradient(width: u32, height: u32, opacity: f32) -> ImageF32 {
        let mut img = ImageF32::new(width, height).unwrap().with_opacity(opacity);
        for y in 0..height {
            for x in 0..width {
                let fx = x as f32 / width as f32;
                let fy = y as f32 / height as f32;
                img.set_pixel(x, y, [fx, fy, 1.0 - fx, 0.5 + fy * 0.5]);
            }
        }
        img
    }

    #[test]
    fn test_blend_normal() {
        let mut base = ImageF32::filled(3, 2, [1.0, 0.0, 0.0, 1.0]).unwrap();
        let top = ImageF32::filled(3, 2, [0.0, 0.0, 1.0, 1.0]).unwrap();
        blend(&mut base, &top, BlendMode::Normal).unwrap();
        for px in base.data().chunks_exact(4) {
            assert_eq!(px, &[0.0, 0.0, 1.0, 1.0]);
        }
    }

    #[test]
    fn test_size_mismatch_leaves_base() {
        let mut base = ImageF32::filled(2, 2, [0.3, 0.3, 0.3, 1.0])
            .unwrap()
            .with_opacity(0.5);
        let top = ImageF32::filled(3, 3, [1.0; 4]).unwrap();
        let before = base.clone();

        let err = blend(&mut base, &top, BlendMode::Multiply).unwrap_err();
        assert!(matches!(err, OpsError::SizeMismatch(_)));
        assert_eq!(base, before);
        assert_eq!(base.opacity(), 0.5);
    }

    #[test]
    fn test_opacity_reset() {
        let mut base = ImageF32::filled(2, 2, [0.5, 0.5, 0.5, 1.0])
            .unwrap()
            .with_opacity(0.5);
        let top = ImageF32::filled(2, 2, [0.5; 4]).unwrap();
        blend(&mut base, &top, BlendMode::Base).unwrap();
        assert_eq!(base.opacity(), 1.0);
        assert_abs_diff_eq!(base.pixel(1, 1)[3], 0.5);
    }

    #[test]
    fn test_matches_pixel_formula() {
        let mut base = gradient(7, 5, 0.8);
        let top = gradient(7, 5, 0.6);
        let orig = base.clone();
        blend(&mut base, &top, BlendMode::SoftLight).unwrap();

        for y in 0..5 {
            for x in 0..7 {
                let expect = blend_pixel::<Vec4>(
                    BlendMode::SoftLight,
                    orig.pixel(x, y),
                    0.8,
                    top.pixel(x, y),
                    0.6,
                );
                assert_eq!(base.pixel(x, y), expect);
            }
        }
    }

    #[test]
    fn test_fold_opacity_matches_base_mode() {
        let mut folded = gradient(5, 3, 0.3);
        let mut blended = folded.clone();
        let top = blended.clone();

        fold_opacity(&mut folded);
        blend(&mut blended, &top, BlendMode::Base).unwrap();
        assert_eq!(folded, blended);
        assert_eq!(folded.opacity(), 1.0);
    }

    #[test]
    fn test_flatten_chain() {
        let mut base = ImageF32::filled(2, 2, [1.0, 1.0, 1.0, 1.0]).unwrap();
        let black = ImageF32::filled(2, 2, [0.0, 0.0, 0.0, 1.0]).unwrap();
        let gray = ImageF32::filled(2, 2, [0.5, 0.5, 0.5, 1.0]).unwrap();

        flatten(&mut base, [(BlendMode::Multiply, &black), (BlendMode::Addition, &gray)]).unwrap();
        assert_eq!(base.pixel(0, 0), [0.5, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_flatten_stops_on_error() {
        let mut base = ImageF32::filled(2, 2, [1.0; 4]).unwrap();
        let black = ImageF32::filled(2, 2, [0.0, 0.0, 0.0, 1.0]).unwrap();
        let wrong = ImageF32::filled(1, 2, [0.5; 4]).unwrap();

        let result = flatten(
            &mut base,
            [
                (BlendMode::Multiply, &black),
                (BlendMode::Normal, &wrong),
                (BlendMode::Screen, &black),
            ],
        );
        assert!(result.is_err());
        assert_eq!(base.pixel(0, 0), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_divide_black_then_opaque_cover() {
        let mut base = ImageF32::filled(2, 2, [0.0, 0.5, 0.5, 1.0]).unwrap();
        let top = base.clone();
        let blue = ImageF32::filled(2, 2, [0.0, 0.0, 1.0, 1.0]).unwrap();

        blend(&mut base, &top, BlendMode::Divide).unwrap();
        assert!(base.data().iter().all(|v| v.is_finite()));
        assert_eq!(base.pixel(0, 0), [1.0, 1.0, 1.0, 1.0]);

        blend(&mut base, &blue, BlendMode::Normal).unwrap();
        assert_eq!(base.pixel(1, 1), [0.0, 0.0, 1.0, 1.0]);
    }
}
