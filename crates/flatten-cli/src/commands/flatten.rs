//! Flatten command

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use flatten_core::Quantize;
use flatten_io::LayerSource;
use flatten_ops::{BlendMode, blend, fold_opacity};
use tracing::{debug, info};

use crate::FlattenArgs;

/// Parsed positional arguments.
#[derive(Debug, PartialEq)]
pub struct Chain {
    pub base: LayerSource,
    pub layers: Vec<(BlendMode, LayerSource)>,
}

/// Splits `base (op top)*` into a [`Chain`].
///
/// Returns the message to print above the usage text on malformed input.
pub fn parse_chain(inputs: &[String]) -> std::result::Result<Chain, String> {
    let Some((base, rest)) = inputs.split_first() else {
        return Err("missing base image".into());
    };
    if rest.len() % 2 != 0 {
        return Err(format!(
            "operator '{}' has no top image",
            rest[rest.len() - 1]
        ));
    }

    let base = base.parse::<LayerSource>().map_err(|e| e.to_string())?;
    let layers = rest
        .chunks_exact(2)
        .map(|pair| {
            let mode = pair[0].parse::<BlendMode>().map_err(|e| e.to_string())?;
            let top = pair[1].parse::<LayerSource>().map_err(|e| e.to_string())?;
            Ok((mode, top))
        })
        .collect::<std::result::Result<Vec<_>, String>>()?;

    Ok(Chain { base, layers })
}

pub fn run(args: FlattenArgs) -> Result<ExitCode> {
    let chain = match parse_chain(&args.inputs) {
        Ok(chain) => chain,
        Err(msg) => {
            eprintln!("{msg}");
            eprint!("{}", super::usage());
            return Ok(ExitCode::FAILURE);
        }
    };

    let quantize = if args.wrap { Quantize::Wrap } else { Quantize::Clamp };
    debug!(layers = chain.layers.len(), ?quantize, "flatten");

    let mut base = super::load_layer(&chain.base)?;
    if chain.layers.is_empty() {
        fold_opacity(&mut base);
    }

    for (mode, source) in &chain.layers {
        let top = super::load_layer(source)?;
        blend(&mut base, &top, *mode).with_context(|| {
            format!(
                "Failed to apply '{}' ({}) with {}",
                mode.code(),
                mode,
                source.path.display()
            )
        })?;
        info!("'{}' -> {}", mode.code(), source.path.display());
    }

    let out = base.to_u8(quantize).context("Failed to quantize result")?;

    match &args.output {
        Some(path) => {
            flatten_io::png::save(path, &out)
                .with_context(|| format!("Failed to save: {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            flatten_io::png::write(&mut writer, &out).context("Failed to write PNG to stdout")?;
            writer.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
