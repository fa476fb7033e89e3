//! Reading JSON and YAML documents into `serde_json::Value` trees.
//!
//! Both schemas and record batches may be written in either format. The
//! format is chosen by file extension: `.yaml`/`.yml` is YAML, `.jsonl` is
//! JSON Lines, everything else is JSON.

use std::path::Path;

use oeval_core::OevalError;
use serde_json::Value;

/// Document encodings understood by [`parse_document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    JsonLines,
    Yaml,
}

impl DocumentFormat {
    /// Pick a format from a path's extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).unwrap_or("") {
            "yaml" | "yml" => Self::Yaml,
            "jsonl" | "ndjson" => Self::JsonLines,
            _ => Self::Json,
        }
    }
}

/// Read and parse the file at `path`.
pub fn load_document(path: &Path) -> Result<Value, OevalError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        OevalError::document_load(path.display().to_string(), format!("cannot read file: {e}"))
    })?;
    parse_document(&content, DocumentFormat::from_path(path))
        .map_err(|reason| OevalError::document_load(path.display().to_string(), reason))
}

/// Parse `content` in the given format. JSON Lines yields an array with
/// one element per non-blank line.
pub fn parse_document(content: &str, format: DocumentFormat) -> Result<Value, String> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str(content).map_err(|e| format!("invalid JSON: {e}"))
        }
        DocumentFormat::JsonLines => {
            let mut items = Vec::new();
            for (n, line) in content.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                let item = serde_json::from_str(line)
                    .map_err(|e| format!("invalid JSON on line {}: {e}", n + 1))?;
                items.push(item);
            }
            Ok(Value::Array(items))
        }
        // `preserve_order` keeps mapping order.
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(content).map_err(|e| format!("invalid YAML: {e}"))
        }
    }
}
