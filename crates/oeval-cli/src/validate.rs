//! # Validate Subcommand
//!
//! Validates every record in a file and reports the violations. A file
//! holding an array (JSON, YAML sequence, JSON Lines) is a batch; any
//! other document is a single record.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use oeval_schema::{load_document, validate_with, ItemSchema};
use serde_json::Value;

use crate::report::{render_json, render_text, ItemReport};
use crate::{resolve_schema, OutputFormat};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// File of items: .json, .jsonl, .yaml or .yml.
    pub file: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Run `oeval validate`. Returns 0 when every item is valid, 1 otherwise.
pub fn run_validate(
    args: &ValidateArgs,
    schema_path: Option<&Path>,
    out: &mut impl Write,
) -> anyhow::Result<u8> {
    let schema = resolve_schema(schema_path)?;
    let document = load_document(&args.file)
        .with_context(|| format!("loading items from {}", args.file.display()))?;

    let reports = validate_document(&schema, &document);
    let invalid = reports.iter().filter(|r| !r.valid).count();
    tracing::info!(
        file = %args.file.display(),
        items = reports.len(),
        invalid,
        "validated items"
    );

    match args.format {
        OutputFormat::Text => render_text(&reports, out)?,
        OutputFormat::Json => render_json(&reports, out)?,
    }
    out.flush().context("writing report")?;

    Ok(if invalid == 0 { 0 } else { 1 })
}

/// Validate each record of `document` in order.
pub fn validate_document(schema: &ItemSchema, document: &Value) -> Vec<ItemReport> {
    match document {
        Value::Array(records) => records
            .iter()
            .enumerate()
            .map(|(i, record)| ItemReport::new(i, validate_with(schema, record)))
            .collect(),
        record => vec![ItemReport::new(0, validate_with(schema, record))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> ItemSchema {
        ItemSchema::from_value("t", &json!({"title": "title text", "n": "[int] n"})).unwrap()
    }

    #[test]
    fn array_documents_are_batches() {
        let reports = validate_document(
            &schema(),
            &json!([{"title": "a", "n": 1}, {"title": "b"}, 7]),
        );
        assert_eq!(reports.len(), 3);
        assert!(reports[0].valid);
        assert!(!reports[1].valid);
        assert_eq!(reports[1].violations[0].field.as_str(), "n");
        assert_eq!(reports[2].index, 2);
        assert!(reports[2].violations[0].field.is_root());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn failed_flush_is_an_error() {
        let mut items = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        items.write_all(b"[{}]").unwrap();
        let args = ValidateArgs {
            file: items.path().to_path_buf(),
            format: OutputFormat::Text,
        };
        let err = run_validate(&args, None, &mut BrokenPipe).unwrap_err();
        assert!(format!("{err:#}").contains("writing report"), "{err:#}");
    }

    #[test]
    fn object_document_is_a_single_record() {
        let reports = validate_document(&schema(), &json!({"title": "a", "n": 1}));
        assert_eq!(reports.len(), 1);
        assert!(reports[0].valid);
    }
}
