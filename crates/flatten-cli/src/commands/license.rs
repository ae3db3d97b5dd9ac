//! License command

use std::process::ExitCode;

use anyhow::Result;

const NOTICE: &str = "\
fflatten is dual-licensed under the MIT License and the Apache License,
Version 2.0, at your option.

This program is distributed in the hope that it will be useful, but
WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
or FITNESS FOR A PARTICULAR PURPOSE. See the license texts for details.
";

pub fn run() -> Result<ExitCode> {
    eprintln!(
        "fflatten {} ({})\n\n{NOTICE}",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_LICENSE")
    );
    Ok(ExitCode::SUCCESS)
}
