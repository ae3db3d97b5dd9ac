//! # flatten-core
//!
//! Core types for image flattening.
//!
//! This crate provides the pixel containers shared by every other
//! flatten-rs crate:
//!
//! - [`ImageF32`] - normalized RGBA float grid with image-level opacity
//! - [`ImageU8`] - 8-bit RGBA grid for codecs
//! - [`Quantize`] - float to byte conversion policy
//! - [`Error`] - grid construction and size errors
//!
//! ## Crate Structure
//!
//! ```text
//! flatten-core (this crate)
//!    ^
//!    |
//!    +-- flatten-ops (blend driver)
//!    +-- flatten-io (PNG codec, layer sources)
//!    +-- flatten-cli
//! ```
//!
//! Conversions between the two grids run row-parallel on the rayon global
//! pool.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod quantize;

pub use error::*;
pub use image::*;
pub use quantize::*;
