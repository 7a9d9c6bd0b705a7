//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{MisprintArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::Correction;

/// A corrected line of text.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectedLine {
    pub input: String,
    pub output: String,
}

/// Corrections for a list of words.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResults {
    pub corrections: Vec<Correction>,
}

/// Print a command result to stdout in the requested format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &MisprintArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, message, result, args)
}

/// Write a command result in the requested format.
pub fn write_result<W: Write, T: Serialize>(
    out: &mut W,
    message: &str,
    result: &T,
    args: &MisprintArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 && !message.is_empty() {
                writeln!(out, "{message}")?;
                writeln!(out)?;
            }
            let value = serde_json::to_value(result)?;
            write_generic_human(out, &value)
        }
        OutputFormat::Json => write_json(out, result, args.pretty),
    }
}

/// Write a corrected line; plain text in human mode, one object per line in
/// JSON mode.
pub fn write_line<W: Write>(out: &mut W, line: &CorrectedLine, args: &MisprintArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => writeln!(out, "{}", line.output)?,
        OutputFormat::Json => write_json(out, line, false)?,
    }
    Ok(())
}

/// Write lookup results; `word -> result` per line in human mode.
pub fn write_lookup<W: Write>(
    out: &mut W,
    results: &LookupResults,
    args: &MisprintArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for correction in &results.corrections {
                writeln!(out, "{} -> {}", correction.input(), correction)?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(out, &results.corrections, args.pretty),
    }
}

fn write_generic_human<W: Write>(out: &mut W, value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                writeln!(out, "{key}: {}", format_value(val))?;
            }
        }
        _ => writeln!(out, "{}", format_value(value))?,
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, result: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

/// Format a JSON value for human output.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
