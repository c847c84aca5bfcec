use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use tracing::debug;

use crate::models::Output;

/// Key of the array of tables holding several outputs in a TOML document.
const TOML_ARRAY_KEY: &str = "output";

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString, clap::ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    Json,
    Jsonl,
    Toml,
}

#[derive(Serialize, Deserialize)]
struct TomlOutputs {
    output: Vec<Output>,
}

pub fn encode_one(output: &Output, format: Format) -> Result<String> {
    let encoded = match format {
        Format::Json => serde_json::to_string_pretty(output)?,
        Format::Jsonl => serde_json::to_string(output)?,
        Format::Toml => toml::to_string(output).context("Failed to encode output as TOML")?,
    };
    Ok(encoded)
}

pub fn encode_many(outputs: &[Output], format: Format) -> Result<String> {
    let encoded = match format {
        Format::Json => serde_json::to_string_pretty(outputs)?,
        Format::Jsonl => {
            let mut lines = String::new();
            for output in outputs {
                lines.push_str(&serde_json::to_string(output)?);
                lines.push('\n');
            }
            lines
        }
        Format::Toml => {
            let doc = TomlOutputs {
                output: outputs.to_vec(),
            };
            toml::to_string(&doc).with_context(|| {
                format!("Failed to encode outputs as TOML [[{TOML_ARRAY_KEY}]] tables")
            })?
        }
    };
    Ok(encoded)
}

/// Decode every output in `input`.
///
/// JSON accepts an object or an array of objects, JSONL one object per
/// non-blank line, TOML a single table or an array of `[[output]]` tables.
pub fn decode(input: &str, format: Format) -> Result<Vec<Output>> {
    let outputs = match format {
        Format::Json => {
            // Decode straight from the text so serde keeps line and column
            if input.trim_start().starts_with('[') {
                serde_json::from_str::<Vec<Output>>(input)
                    .context("Failed to parse JSON outputs")?
            } else {
                let output: Output =
                    serde_json::from_str(input).context("Failed to parse JSON output")?;
                vec![output]
            }
        }
        Format::Jsonl => {
            let mut outputs = Vec::new();
            for (line_num, line) in input.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }

                let output: Output = serde_json::from_str(line)
                    .with_context(|| format!("Failed to parse output at line {}", line_num + 1))?;
                outputs.push(output);
            }
            outputs
        }
        Format::Toml => decode_toml(input)?,
    };

    debug!(count = outputs.len(), format = %format, "decoded outputs");
    Ok(outputs)
}

/// An empty document holds no outputs. A document with an `output` key is an
/// array of tables; any other array of tables means the key is misspelled.
fn decode_toml(input: &str) -> Result<Vec<Output>> {
    let table: toml::Table = toml::from_str(input).context("Failed to parse TOML outputs")?;

    if table.is_empty() {
        return Ok(Vec::new());
    }

    if table.contains_key(TOML_ARRAY_KEY) {
        let doc: TomlOutputs = toml::Value::Table(table)
            .try_into()
            .with_context(|| format!("Failed to parse TOML [[{TOML_ARRAY_KEY}]] tables"))?;
        return Ok(doc.output);
    }

    if let Some((key, _)) = table.iter().find(|(_, value)| is_array_of_tables(value)) {
        bail!("Unexpected TOML array of tables [[{key}]], expected [[{TOML_ARRAY_KEY}]]");
    }

    let output: Output = toml::Value::Table(table)
        .try_into()
        .context("Failed to parse TOML output")?;
    Ok(vec![output])
}

fn is_array_of_tables(value: &toml::Value) -> bool {
    match value {
        toml::Value::Array(items) => !items.is_empty() && items.iter().all(toml::Value::is_table),
        _ => false,
    }
}

/// Read a whole document from `path`, or from stdin when `path` is absent or `-`.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "reading outputs from file");
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        _ => {
            debug!("reading outputs from stdin");
            let mut buf = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
