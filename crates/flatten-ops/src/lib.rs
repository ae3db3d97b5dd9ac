//! # flatten-ops
//!
//! Blend modes and alpha compositing for flattening two RGBA layers.
//!
//! # Modules
//!
//! - [`mode`] - [`BlendMode`] and the operator-code table
//! - [`formula`] - raw `B(Cb, Cs)` formulas, generic over the vector backend
//! - [`composite`] - source-over compositing and [`blend_pixel`]
//! - [`blend`](mod@blend) - whole-image driver and layer chains
//!
//! # Example
//!
//! ```rust
//! use flatten_core::ImageF32;
//! use flatten_ops::{flatten, BlendMode};
//!
//! let mut base = ImageF32::filled(8, 8, [1.0, 1.0, 1.0, 1.0]).unwrap();
//! let black = ImageF32::filled(8, 8, [0.0, 0.0, 0.0, 1.0]).unwrap();
//! let half = ImageF32::filled(8, 8, [0.5, 0.5, 0.5, 1.0]).unwrap();
//!
//! flatten(&mut base, [(BlendMode::Multiply, &black), (BlendMode::Screen, &half)]).unwrap();
//! assert_eq!(base.pixel(0, 0), [0.5, 0.5, 0.5, 1.0]);
//! ```
//!
//! # Features
//!
//! - `parallel` (default) - row-parallel blending on the rayon global pool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod blend;
pub mod composite;
pub mod formula;
pub mod mode;

pub use blend::{blend, flatten, fold_opacity};
pub use composite::{blend_pixel, blend_row, source_over};
pub use error::{OpsError, OpsResult};
pub use mode::{AlphaPolicy, BlendMode};
