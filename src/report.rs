//! Rendering of calculation results for the console

use std::fmt::Display;
use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The classic two-line summary
    #[default]
    Text,
    /// Inputs and results as pretty-printed JSON
    Json,
}

#[derive(Serialize)]
struct Report<'a, I, O> {
    inputs: &'a I,
    result: &'a O,
}

/// Write one calculation's result in the requested format
pub fn write_report<W, I, O>(
    out: &mut W,
    format: OutputFormat,
    inputs: &I,
    result: &O,
) -> anyhow::Result<()>
where
    W: Write,
    I: Serialize,
    O: Serialize + Display,
{
    match format {
        OutputFormat::Text => writeln!(out, "{}", result)?,
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&Report { inputs, result })?;
            writeln!(out, "{}", json)?;
        }
    }
    out.flush()?;
    Ok(())
}
