//! # flatten-color
//!
//! Color science helpers used by the non-separable blend modes
//! (Color, Hue, Saturation, Luminosity).
//!
//! Every function takes and returns a [`Float4`](flatten_math::Float4)
//! holding R, G, B, A. Alpha (lane 3) is carried through untouched.
//!
//! - [`luminosity`], [`saturation`] - scalar measures of an RGB triple
//! - [`clip_color`], [`set_lum`], [`set_sat`] - luminosity-preserving edits
//! - [`rgb_to_hsl`], [`hsl_to_rgb`] - cylindrical conversion
//!
//! # Usage
//!
//! ```rust
//! use flatten_color::{luminosity, set_lum};
//! use flatten_math::{Float4, Vec4};
//!
//! let base = Vec4::new(0.8, 0.2, 0.1, 1.0);
//! let top = Vec4::new(0.1, 0.4, 0.9, 1.0);
//!
//! // "Color" blend: hue and saturation of top, luminosity of base
//! let out = set_lum(top, luminosity(base));
//! assert!((luminosity(out) - luminosity(base)).abs() < 1e-5);
//! ```
//!
//! # Dependencies
//!
//! - `flatten-math` - the `Float4` vector contract
//!
//! # Used By
//!
//! - `flatten-ops` - blend formulas

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod hsl;
pub mod nonsep;

pub use hsl::{hsl_to_rgb, hue_to_channel, rgb_to_hsl};
pub use nonsep::{clip_color, luminosity, saturation, set_lum, set_sat};
