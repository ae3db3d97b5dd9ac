//! Blend modes and their single-character operator codes.
//!
//! # Operator Codes
//!
//! | Code | Mode | Code | Mode |
//! |------|------|------|------|
//! | `0` | Base | `g` | GammaLight |
//! | `1` | Top | `k` | GammaDark |
//! | ` ` | Normal | `h` | Hue |
//! | `+` | Addition | `L` | Lighten |
//! | `@` | Color | `u` | Luminosity |
//! | `\` | ColorDodge | `*` | Multiply |
//! | `D` | Darken | `_` | Overlay |
//! | `d` | Difference | `s` | Saturation |
//! | `/` | Divide | `c` | Screen |
//! | `S` | SoftLight | `H` | HardLight |
//!
//! # Example
//!
//! ```rust
//! use flatten_ops::BlendMode;
//!
//! let mode: BlendMode = "*".parse().unwrap();
//! assert_eq!(mode, BlendMode::Multiply);
//! assert_eq!(mode.code(), '*');
//! assert!("**".parse::<BlendMode>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::OpsError;

/// How the alpha lane of a blended pixel is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaPolicy {
    /// Alpha is overwritten with 1.0 after compositing.
    ForceOpaque,
    /// Alpha keeps the composited value.
    Composited,
    /// No compositing; one input pixel is copied through.
    Passthrough,
}

/// Per-pixel blend formula selected by an operator code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    /// Keeps the base pixel.
    Base,
    /// Replaces the base with the top pixel.
    Top,
    /// Source-over with the top color.
    #[default]
    Normal,
    /// Sum, clipped at 1.
    Addition,
    /// Top hue and saturation with base luminosity.
    Color,
    /// Brightens the base by the inverse of the top.
    ColorDodge,
    /// Per-channel minimum.
    Darken,
    /// Absolute difference.
    Difference,
    /// Base divided by top, clipped at 1.
    Divide,
    /// `base ^ top`.
    GammaLight,
    /// `base ^ (1 / top)`.
    GammaDark,
    /// Top hue with base saturation and luminosity.
    Hue,
    /// Per-channel maximum.
    Lighten,
    /// Top lightness with base hue and saturation.
    Luminosity,
    /// Product.
    Multiply,
    /// Multiply or screen, keyed on the base.
    Overlay,
    /// Top saturation with base hue and luminosity.
    Saturation,
    /// Inverse product of inverses.
    Screen,
    /// Soft contrast keyed on the top.
    SoftLight,
    /// Multiply or screen, keyed on the top.
    HardLight,
}

impl BlendMode {
    /// Every mode in operator-table order.
    pub const ALL: [BlendMode; 20] = [
        Self::Base,
        Self::Top,
        Self::Normal,
        Self::Addition,
        Self::Color,
        Self::ColorDodge,
        Self::Darken,
        Self::Difference,
        Self::Divide,
        Self::GammaLight,
        Self::GammaDark,
        Self::Hue,
        Self::Lighten,
        Self::Luminosity,
        Self::Multiply,
        Self::Overlay,
        Self::Saturation,
        Self::Screen,
        Self::SoftLight,
        Self::HardLight,
    ];

    /// Looks up the mode for an operator character.
    pub fn from_code(code: char) -> Option<Self> {
        Some(match code {
            '0' => Self::Base,
            '1' => Self::Top,
            ' ' => Self::Normal,
            '+' => Self::Addition,
            '@' => Self::Color,
            '\\' => Self::ColorDodge,
            'D' => Self::Darken,
            'd' => Self::Difference,
            '/' => Self::Divide,
            'g' => Self::GammaLight,
            'k' => Self::GammaDark,
            'h' => Self::Hue,
            'L' => Self::Lighten,
            'u' => Self::Luminosity,
            '*' => Self::Multiply,
            '_' => Self::Overlay,
            's' => Self::Saturation,
            'c' => Self::Screen,
            'S' => Self::SoftLight,
            'H' => Self::HardLight,
            _ => return None,
        })
    }

    /// Operator character for this mode.
    pub fn code(self) -> char {
        match self {
            Self::Base => '0',
            Self::Top => '1',
            Self::Normal => ' ',
            Self::Addition => '+',
            Self::Color => '@',
            Self::ColorDodge => '\\',
            Self::Darken => 'D',
            Self::Difference => 'd',
            Self::Divide => '/',
            Self::GammaLight => 'g',
            Self::GammaDark => 'k',
            Self::Hue => 'h',
            Self::Lighten => 'L',
            Self::Luminosity => 'u',
            Self::Multiply => '*',
            Self::Overlay => '_',
            Self::Saturation => 's',
            Self::Screen => 'c',
            Self::SoftLight => 'S',
            Self::HardLight => 'H',
        }
    }

    /// Display name used in usage text and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Top => "Top",
            Self::Normal => "Normal",
            Self::Addition => "Addition",
            Self::Color => "Color",
            Self::ColorDodge => "ColorDodge",
            Self::Darken => "Darken",
            Self::Difference => "Difference",
            Self::Divide => "Divide",
            Self::GammaLight => "GammaLight",
            Self::GammaDark => "GammaDark",
            Self::Hue => "Hue",
            Self::Lighten => "Lighten",
            Self::Luminosity => "Luminosity",
            Self::Multiply => "Multiply",
            Self::Overlay => "Overlay",
            Self::Saturation => "Saturation",
            Self::Screen => "Screen",
            Self::SoftLight => "SoftLight",
            Self::HardLight => "HardLight",
        }
    }

    /// Alpha resolution applied after the formula.
    pub fn alpha_policy(self) -> AlphaPolicy {
        match self {
            Self::Base | Self::Top => AlphaPolicy::Passthrough,
            Self::Addition | Self::Divide | Self::GammaLight | Self::Luminosity => {
                AlphaPolicy::Composited
            }
            _ => AlphaPolicy::ForceOpaque,
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = OpsError;

    /// Parses an operator token; it must be exactly one character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_code(c).ok_or_else(|| {
                OpsError::InvalidParameter(format!("unknown blend operator '{c}'"))
            }),
            _ => Err(OpsError::InvalidParameter(format!(
                "blend operator must be a single character, got '{s}'"
            ))),
        }
    }
}
