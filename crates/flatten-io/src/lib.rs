//! # flatten-io
//!
//! File-facing side of flatten-rs.
//!
//! - [`png`] - decode any PNG to 8-bit RGBA, encode 8-bit RGBA
//! - [`LayerSource`] - `path[:opacity]` command-line tokens
//!
//! # Example
//!
//! ```rust,ignore
//! use flatten_io::LayerSource;
//!
//! let base: LayerSource = "base.png".parse()?;
//! let image = base.load()?; // ImageF32 with opacity 1.0
//! ```
//!
//! # Dependencies
//!
//! - `png` - codec
//! - `flatten-core` - pixel grids

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod png;
mod source;

pub use error::{IoError, IoResult};
pub use source::LayerSource;
