//! fflatten - flatten PNG layers with blend modes
//!
//! Reads a base PNG, applies `<operator> top.png` pairs left to right and
//! writes the result as PNG to stdout or `--output`.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "fflatten")]
#[command(author, version, about = "Flatten PNG layers with blend modes")]
#[command(args_conflicts_with_subcommands = true)]
#[command(after_help = commands::operator_table())]
#[command(long_about = "
Composites layers onto a base image, one operator/top pair at a time.
Every image is a PNG; append :opacity (0..1) to scale its alpha.

Examples:
  fflatten base.png '*' shade.png:0.5 > out.png
  fflatten base.png ' ' logo.png c glow.png -o out.png
  fflatten -j 4 --wrap a.png u b.png > out.png
")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    flatten: FlattenArgs,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print license information
    License,
}

#[derive(Args)]
struct FlattenArgs {
    /// base.png[:opacity] followed by <operator> top.png[:opacity] pairs
    #[arg(value_name = "LAYERS")]
    inputs: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Wrap out-of-range values modulo 256 instead of clamping
    #[arg(long)]
    wrap: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let _log_guard = logging::init(cli.verbose, cli.log.as_deref())?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Some(Commands::License) => commands::license::run(),
        None => commands::flatten::run(cli.flatten),
    }
}
