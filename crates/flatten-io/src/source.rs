//! Layer sources given as `path[:opacity]`.
//!
//! The opacity suffix is split at the last `:`. A suffix that does not parse
//! as a number is treated as part of the path, so names containing colons
//! still work.
//!
//! # Example
//!
//! ```rust
//! use flatten_io::LayerSource;
//!
//! let src: LayerSource = "shadow.png:0.4".parse().unwrap();
//! assert_eq!(src.path.to_str(), Some("shadow.png"));
//! assert_eq!(src.opacity, 0.4);
//!
//! let plain: LayerSource = "shots/12:30.png".parse().unwrap();
//! assert_eq!(plain.opacity, 1.0);
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use flatten_core::ImageF32;

use crate::{IoError, IoResult, png};

/// An image file plus the opacity it contributes with.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSource {
    /// PNG file to read.
    pub path: PathBuf,
    /// Image-level opacity in [0, 1].
    pub opacity: f32,
}

impl LayerSource {
    /// Creates a fully opaque source.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            opacity: 1.0,
        }
    }

    /// Reads the PNG and converts it to floats carrying this opacity.
    pub fn load(&self) -> IoResult<ImageF32> {
        let image = png::read(&self.path)?;
        Ok(image.to_f32(self.opacity)?)
    }
}

impl FromStr for LayerSource {
    type Err = IoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(IoError::Parse("empty layer path".into()));
        }

        let Some((path, opacity)) = s
            .rsplit_once(':')
            .and_then(|(p, o)| o.parse::<f32>().ok().map(|o| (p, o)))
        else {
            return Ok(Self::new(s));
        };

        if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
            return Err(IoError::Parse(format!(
                "opacity for '{path}' must be between 0 and 1, got {opacity}"
            )));
        }
        if path.is_empty() {
            return Err(IoError::Parse(format!("missing path before ':{opacity}'")));
        }

        Ok(Self {
            path: PathBuf::from(path),
            opacity,
        })
    }
}

impl fmt::Display for LayerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.opacity == 1.0 {
            write!(f, "{}", self.path.display())
        } else {
            write!(f, "{}:{}", self.path.display(), self.opacity)
        }
    }
}
