//! CLI command implementations

pub mod flatten;
pub mod license;

use std::fmt::Write as _;

use anyhow::{Context, Result};
use flatten_core::ImageF32;
use flatten_io::LayerSource;
use flatten_ops::BlendMode;

/// Load a layer as floats carrying its opacity
pub fn load_layer(source: &LayerSource) -> Result<ImageF32> {
    source
        .load()
        .with_context(|| format!("Failed to load: {}", source.path.display()))
}

/// Operator table shown in usage and `--help`
pub fn operator_table() -> String {
    let mut out = String::from("operator:\n");
    for mode in BlendMode::ALL {
        let _ = writeln!(out, "  '{}'         {}", mode.code(), mode.name());
    }
    out.push_str("<required> [optional]\n");
    out
}

/// Full usage text printed on malformed command lines
pub fn usage() -> String {
    format!(
        "fflatten {} ({} backend)\n\
         usage: fflatten [OPTIONS] base.png[:opacity] (<operator> top.png[:opacity])*\n\
         usage: fflatten license\n\
         {}",
        env!("CARGO_PKG_VERSION"),
        flatten_math::BACKEND,
        operator_table()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_table_lists_every_mode() {
        let table = operator_table();
        for mode in BlendMode::ALL {
            assert!(table.contains(&format!("'{}'", mode.code())));
            assert!(table.contains(mode.name()));
        }
    }

    #[test]
    fn test_usage_mentions_license() {
        assert!(usage().contains("usage: fflatten license"));
    }
}
