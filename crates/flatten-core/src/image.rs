//! RGBA pixel grids.
//!
//! This module provides the two image containers the flattening pipeline
//! moves between:
//! - [`ImageF32`] - normalized float grid with an image-level opacity, the
//!   form every blend operates on
//! - [`ImageU8`] - 8-bit grid as produced by the decoder and consumed by the
//!   encoder
//!
//! # Memory Layout
//!
//! Both grids store pixels in **row-major** order, top-to-bottom, with four
//! interleaved channels:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A ...]  <- Row 1
//!         ...
//! ```
//!
//! Every row holds exactly `width * 4` elements and rows are contiguous, so
//! rows can be handed out as disjoint `chunks_exact` slices for parallel
//! processing.
//!
//! # Usage
//!
//! ```rust
//! use flatten_core::{ImageF32, Quantize};
//!
//! let img = ImageF32::filled(4, 4, [1.0, 0.0, 0.0, 1.0]).unwrap();
//! let bytes = img.to_u8(Quantize::Clamp).unwrap();
//! assert_eq!(bytes.pixel(0, 0), [255, 0, 0, 255]);
//! ```

use crate::{Error, Quantize, Result};
use rayon::prelude::*;

/// Number of interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Scale used to normalize bytes into [0, 1].
const INV_255: f32 = 1.0 / 255.0;

/// Validates dimensions and returns the element count `width * height * 4`.
fn element_count(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_dimensions(
            width,
            height,
            "width and height must be > 0",
        ));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(|| Error::invalid_dimensions(width, height, "image dimensions overflow"))
}

/// Allocates a buffer of `len` copies of `value`, reporting allocator failure.
fn alloc_filled<T: Copy>(len: usize, value: T) -> Result<Vec<T>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|e| Error::allocation_failed(len, e.to_string()))?;
    data.resize(len, value);
    Ok(data)
}

/// Normalized RGBA float image with an image-level opacity.
///
/// Channels are nominally in [0, 1] but are never clamped by the container;
/// blend formulas decide where to clip.
///
/// The `opacity` scalar multiplies pixel alpha when the image takes part in
/// a blend. The blend driver resets the base image's opacity to 1.0 once it
/// has been folded into the pixels.
///
/// # Example
///
/// ```rust
/// use flatten_core::ImageF32;
///
/// let mut img = ImageF32::new(2, 2).unwrap().with_opacity(0.5);
/// img.set_pixel(1, 1, [0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(img.pixel(1, 1), [0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(img.opacity(), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ImageF32 {
    width: u32,
    height: u32,
    opacity: f32,
    data: Vec<f32>,
}

impl ImageF32 {
    /// Creates a transparent black image with opacity 1.0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for zero or overflowing sizes and
    /// [`Error::AllocationFailed`] if the buffer cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = element_count(width, height)?;
        Ok(Self {
            width,
            height,
            opacity: 1.0,
            data: alloc_filled(len, 0.0)?,
        })
    }

    /// Creates an image with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: [f32; 4]) -> Result<Self> {
        let mut img = Self::new(width, height)?;
        img.fill(pixel);
        Ok(img)
    }

    /// Creates an image from existing row-major RGBA data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `data.len() != width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        let expected = element_count(width, height)?;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            opacity: 1.0,
            data,
        })
    }

    /// Returns the image with its opacity replaced.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the image-level opacity.
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Sets the image-level opacity.
    #[inline]
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    /// Number of floats in one row (`width * 4`).
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Returns the raw pixel data.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns the raw pixel data mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Iterates over rows.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, f32> {
        let row_len = self.row_len();
        self.data.chunks_exact(row_len)
    }

    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 4] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.pixel_offset(x, y);
        let mut px = [0.0; 4];
        px.copy_from_slice(&self.data[offset..offset + CHANNELS]);
        px
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: [f32; 4]) {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.pixel_offset(x, y);
        self.data[offset..offset + CHANNELS].copy_from_slice(&pixel);
    }

    /// Fills the entire image with a pixel value.
    pub fn fill(&mut self, pixel: [f32; 4]) {
        for chunk in self.data.chunks_exact_mut(CHANNELS) {
            chunk.copy_from_slice(&pixel);
        }
    }

    /// Quantizes the image to 8 bits per channel.
    ///
    /// Opacity is not part of the byte form; callers fold it in by blending
    /// first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flatten_core::{ImageF32, Quantize};
    ///
    /// let img = ImageF32::filled(1, 1, [1.5, 0.5, -0.25, 1.0]).unwrap();
    /// let clamped = img.to_u8(Quantize::Clamp).unwrap();
    /// assert_eq!(clamped.pixel(0, 0), [255, 128, 0, 255]);
    /// ```
    pub fn to_u8(&self, quantize: Quantize) -> Result<ImageU8> {
        let mut out = ImageU8::new(self.width, self.height)?;
        let row_len = self.row_len();
        out.data
            .par_chunks_exact_mut(row_len)
            .zip(self.data.par_chunks_exact(row_len))
            .for_each(|(dst, src)| {
                for (d, &s) in dst.iter_mut().zip(src) {
                    *d = quantize.apply(s);
                }
            });
        Ok(out)
    }
}

/// 8-bit RGBA image.
///
/// This is the codec-facing form: decoders produce it and encoders consume
/// it. It carries no opacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageU8 {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl ImageU8 {
    /// Creates a zeroed image.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = element_count(width, height)?;
        Ok(Self {
            width,
            height,
            data: alloc_filled(len, 0u8)?,
        })
    }

    /// Creates an image from existing row-major RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `data.len() != width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = element_count(width, height)?;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the raw RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.data[offset..offset + CHANNELS]);
        px
    }

    /// Normalizes every channel to [0, 1] by dividing by 255.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flatten_core::ImageU8;
    ///
    /// let img = ImageU8::from_raw(1, 1, vec![255, 0, 51, 255]).unwrap();
    /// let f = img.to_f32(0.5).unwrap();
    /// assert_eq!(f.pixel(0, 0)[0], 1.0);
    /// assert_eq!(f.opacity(), 0.5);
    /// ```
    pub fn to_f32(&self, opacity: f32) -> Result<ImageF32> {
        let mut out = ImageF32::new(self.width, self.height)?.with_opacity(opacity);
        let row_len = self.width as usize * CHANNELS;
        out.data
            .par_chunks_exact_mut(row_len)
            .zip(self.data.par_chunks_exact(row_len))
            .for_each(|(dst, src)| {
                for (d, &s) in dst.iter_mut().zip(src) {
                    *d = f32::from(s) * INV_255;
                }
            });
        Ok(out)
    }
}
