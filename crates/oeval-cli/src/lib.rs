//! # oeval-cli — Command-Line Front End
//!
//! The presentation layer around `oeval-schema`:
//!
//! - `oeval validate <FILE>`: validate a batch of items (JSON array,
//!   single JSON object, JSON Lines, or YAML) and print every violation.
//! - `oeval schema`: list every schema field with how it is checked, so
//!   contributors can see what is required without reading the schema.
//!
//! Both accept `--schema <PATH>` to use a schema file instead of the one
//! bundled into the binary.
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from rendering; handlers return an exit
//!   code and write to a caller-supplied writer.
//! - No validation logic here.

pub mod report;
pub mod schema;
pub mod validate;

use std::borrow::Cow;
use std::path::Path;

use anyhow::Context;
use oeval_schema::{item_schema, FileSchema, ItemSchema, SchemaProvider};

/// Output encodings for both subcommands.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// The schema to validate against: the file at `path` if given, else the
/// bundled item schema.
pub fn resolve_schema(path: Option<&Path>) -> anyhow::Result<Cow<'static, ItemSchema>> {
    match path {
        Some(path) => {
            let provider = FileSchema::new(path);
            let schema = provider
                .load()
                .with_context(|| format!("loading schema {}", provider.name()))?;
            Ok(Cow::Owned(schema))
        }
        None => {
            let schema = item_schema().context("loading bundled item schema")?;
            Ok(Cow::Borrowed(schema))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bundled_schema_is_borrowed_from_cache() {
        let schema = resolve_schema(None).unwrap();
        assert!(matches!(schema, Cow::Borrowed(_)));
        assert!(!schema.fields().is_empty());
    }

    #[test]
    fn file_schema_is_owned() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"title": "title text"}}"#).unwrap();
        let schema = resolve_schema(Some(file.path())).unwrap();
        assert!(matches!(schema, Cow::Owned(_)));
        assert_eq!(schema.fields().len(), 1);
    }

    #[test]
    fn missing_schema_file_has_context() {
        let err = resolve_schema(Some(Path::new("/nonexistent/schema.json"))).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("loading schema"), "{msg}");
        assert!(msg.contains("schema load error"), "{msg}");
    }
}
