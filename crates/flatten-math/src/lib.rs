//! # flatten-math
//!
//! Four-lane float vectors for per-pixel compositing.
//!
//! Every blend formula is written once against the [`Float4`] trait and
//! instantiated with one of two backends:
//!
//! - [`ScalarVec4`] - plain `[f32; 4]`, always available
//! - [`WideVec4`] - `wide::f32x4`, enabled by the `simd` feature (default)
//!
//! [`Vec4`] names whichever backend the build selected.
//!
//! # Usage
//!
//! ```rust
//! use flatten_math::{Float4, Vec4};
//!
//! let base = Vec4::new(0.2, 0.4, 0.6, 1.0);
//! let top = Vec4::splat(0.5);
//! let multiplied = base * top;
//! assert_eq!(multiplied.to_array(), [0.1, 0.2, 0.3, 0.5]);
//! ```
//!
//! # Dependencies
//!
//! - `wide` - portable SIMD on stable Rust (optional)
//!
//! # Used By
//!
//! - `flatten-color` - luminosity, saturation and HSL helpers
//! - `flatten-ops` - blend formulas and compositing

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod lanes;
mod scalar;
#[cfg(feature = "simd")]
mod simd;

pub use lanes::{Float4, Mask4};
pub use scalar::{ScalarMask4, ScalarVec4};
#[cfg(feature = "simd")]
pub use simd::{WideMask4, WideVec4};

/// Vector type used by the compositing engine.
#[cfg(feature = "simd")]
pub type Vec4 = WideVec4;

/// Name of the backend behind [`Vec4`], for version banners.
#[cfg(feature = "simd")]
pub const BACKEND: &str = "wide simd";

/// Vector type used by the compositing engine.
#[cfg(not(feature = "simd"))]
pub type Vec4 = ScalarVec4;

/// Name of the backend behind [`Vec4`], for version banners.
#[cfg(not(feature = "simd"))]
pub const BACKEND: &str = "scalar";
