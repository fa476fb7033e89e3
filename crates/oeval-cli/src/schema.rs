//! # Schema Subcommand
//!
//! Lists every field of the schema with the check applied to it.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use clap::Args;
use oeval_schema::{describe_fields, FieldSummary};
use serde_json::Value;

use crate::{resolve_schema, OutputFormat};

/// Arguments for the schema subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Run `oeval schema`.
pub fn run_schema(args: &SchemaArgs, schema_path: Option<&Path>, out: &mut impl Write) -> anyhow::Result<u8> {
    let schema = resolve_schema(schema_path)?;
    let rows = describe_fields(schema.fields());
    match args.format {
        OutputFormat::Text => render_rows(&rows, out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
        }
    }
    out.flush().context("writing schema listing")?;
    Ok(0)
}

fn render_rows(rows: &[FieldSummary], out: &mut impl Write) -> std::io::Result<()> {
    let width = rows.iter().map(|r| r.path.as_str().len()).max().unwrap_or(0);
    for row in rows {
        let desc = match &row.desc {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let marker = if row.non_empty { " (non-empty)" } else { "" };
        writeln!(
            out,
            "{:<width$}  {:<18}  {desc}{marker}",
            row.path.as_str(),
            row.kind,
        )?;
    }
    Ok(())
}
