use std::io::{self, Write};

use anyhow::Result;
use console::{style, Term};
use serde::Serialize;
use textwrap::{wrap, Options};

use crate::codec::{self, Format};
use crate::models::Output;

const DEFAULT_WIDTH: usize = 80;
const MIN_WRAP: usize = 20;

/// Trait for types that can render themselves as human-readable CLI output.
pub trait Render {
    fn render(&self, w: &mut dyn Write) -> Result<()>;
}

impl Render for Output {
    fn render(&self, w: &mut dyn Write) -> Result<()> {
        match self.name() {
            Some(name) => writeln!(w, "{}", style(name).cyan().bold())?,
            None => writeln!(w, "{}", style("(unnamed)").dim())?,
        }
        match self.value() {
            Some(value) => write_field(w, "  ", "Answer", value)?,
            None => writeln!(w, "  Answer: {}", style("(none)").dim())?,
        }
        Ok(())
    }
}

/// Serialize `value` as pretty JSON, or hand `w` to `human` for the terminal view.
fn json_or<T: Serialize + ?Sized>(
    w: &mut dyn Write,
    value: &T,
    json: bool,
    human: impl FnOnce(&mut dyn Write) -> Result<()>,
) -> Result<()> {
    if !json {
        return human(w);
    }
    serde_json::to_writer_pretty(&mut *w, value)?;
    writeln!(w)?;
    Ok(())
}

/// Write an encoded document, terminated by exactly one newline.
fn write_document(w: &mut dyn Write, document: &str) -> Result<()> {
    write!(w, "{document}")?;
    if !document.ends_with('\n') {
        writeln!(w)?;
    }
    Ok(())
}

/// Columns available for a field; piped output gets `DEFAULT_WIDTH`.
fn field_width() -> usize {
    Term::stdout()
        .size_checked()
        .map_or(DEFAULT_WIDTH, |(_, cols)| usize::from(cols))
}

/// Write `{prefix}{label}: {value}` on one line when it fits, otherwise put
/// the label on its own line and wrap each paragraph of `value` two columns
/// deeper than `prefix`.
pub fn write_field(w: &mut dyn Write, prefix: &str, label: &str, value: &str) -> Result<()> {
    write_field_within(w, prefix, label, value, field_width())
}

fn write_field_within(
    w: &mut dyn Write,
    prefix: &str,
    label: &str,
    value: &str,
    width: usize,
) -> Result<()> {
    let head = format!("{prefix}{label}:");

    if !value.contains('\n') && head.len() + 1 + value.len() <= width {
        writeln!(w, "{head} {value}")?;
        return Ok(());
    }

    writeln!(w, "{head}")?;
    let indent = format!("{prefix}  ");
    let options = Options::new(width.max(indent.len() + MIN_WRAP))
        .initial_indent(&indent)
        .subsequent_indent(&indent);
    for paragraph in value.split('\n') {
        if paragraph.is_empty() {
            writeln!(w)?;
            continue;
        }
        for line in wrap(paragraph, &options) {
            writeln!(w, "{line}")?;
        }
    }
    Ok(())
}

pub fn output_created(output: &Output, format: Format) -> Result<()> {
    let document = codec::encode_one(output, format)?;
    write_document(&mut io::stdout().lock(), &document)
}

pub fn converted(outputs: &[Output], format: Format) -> Result<()> {
    let document = codec::encode_many(outputs, format)?;
    write_document(&mut io::stdout().lock(), &document)
}

pub fn output_list(outputs: &[Output], json: bool) -> Result<()> {
    write_output_list(&mut io::stdout().lock(), outputs, json)
}

fn write_output_list(w: &mut dyn Write, outputs: &[Output], json: bool) -> Result<()> {
    json_or(w, outputs, json, |w| {
        if outputs.is_empty() {
            writeln!(w, "No outputs found.")?;
            return Ok(());
        }

        for output in outputs {
            output.render(w)?;
            writeln!(w)?;
        }
        Ok(())
    })
}

pub fn answer(output: &Output, json: bool) -> Result<()> {
    write_answer(&mut io::stdout().lock(), output, json)
}

/// An absent answer prints nothing, or `null` as JSON.
fn write_answer(w: &mut dyn Write, output: &Output, json: bool) -> Result<()> {
    json_or(w, &output.value(), json, |w| {
        if let Some(value) = output.value() {
            writeln!(w, "{value}")?;
        }
        Ok(())
    })
}
