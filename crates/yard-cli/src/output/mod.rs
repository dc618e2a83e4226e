//! Stdout rendering for command results.
//!
//! `json` is pretty-printed for reading at a terminal. `raw` writes one JSON
//! document per line so `yard` results can be piped into `jq` or appended to
//! a log file.

use std::io::Write;

use anyhow::Context;
use serde::Serialize;

use crate::cli::OutputFormat;

pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value),
        OutputFormat::Raw => serde_json::to_string(value),
    }
}

/// Write one command result followed by a newline.
pub fn write_to<W: Write, T: Serialize>(
    mut out: W,
    value: &T,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let rendered = render(value, format).context("failed to serialize command result")?;
    writeln!(out, "{rendered}").context("failed to write command result")?;
    Ok(())
}

pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    write_to(std::io::stdout().lock(), value, format)
}
