//! # Schema Provider & Entry Point
//!
//! The item schema is produced once per process and read-only afterwards.
//! [`item_schema`] caches the bundled schema in a `OnceLock`; concurrent
//! first callers may each parse it, but exactly one result is kept and
//! every caller observes the same `&'static ItemSchema`.
//!
//! [`validate_entry`] is the function the surrounding tooling calls. It
//! fails only when the schema itself cannot be produced. Everything wrong
//! with the record comes back as violations.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use oeval_core::{FieldPath, OevalError, Violation};
use serde_json::Value;
use tracing::{debug, info};

use crate::document::load_document;
use crate::node::ItemSchema;
use crate::validate::validate;

/// File name of the schema bundled into the binary.
pub const BUNDLED_SCHEMA_NAME: &str = "item_schema.json";

const BUNDLED_SCHEMA: &str = include_str!("../../../schemas/item_schema.json");

static ITEM_SCHEMA: OnceLock<ItemSchema> = OnceLock::new();

/// Something that can produce an [`ItemSchema`].
pub trait SchemaProvider {
    /// Name used in logs and errors.
    fn name(&self) -> String;

    /// Produce the schema tree.
    fn load(&self) -> Result<ItemSchema, OevalError>;
}

/// The schema compiled into this crate from `schemas/item_schema.json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSchema;

impl SchemaProvider for BundledSchema {
    fn name(&self) -> String {
        BUNDLED_SCHEMA_NAME.to_string()
    }

    fn load(&self) -> Result<ItemSchema, OevalError> {
        let value: Value = serde_json::from_str(BUNDLED_SCHEMA)
            .map_err(|e| OevalError::schema_load(BUNDLED_SCHEMA_NAME, format!("invalid JSON: {e}")))?;
        ItemSchema::from_value(BUNDLED_SCHEMA_NAME, &value)
    }
}

/// A schema read from disk. JSON by default, YAML for `.yaml`/`.yml`.
#[derive(Debug, Clone)]
pub struct FileSchema {
    path: PathBuf,
}

impl FileSchema {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SchemaProvider for FileSchema {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<ItemSchema, OevalError> {
        let value = load_document(&self.path).map_err(|e| match e {
            OevalError::DocumentLoad { path, reason } => OevalError::schema_load(path, reason),
            other => other,
        })?;
        let schema = ItemSchema::from_value(&self.name(), &value)?;
        info!(schema = %self.path.display(), fields = schema.fields().len(), "loaded schema");
        Ok(schema)
    }
}

/// The bundled schema, parsed on first use and cached for the process.
pub fn item_schema() -> Result<&'static ItemSchema, OevalError> {
    if let Some(schema) = ITEM_SCHEMA.get() {
        return Ok(schema);
    }
    let loaded = BundledSchema.load()?;
    debug!(fields = loaded.fields().len(), "cached bundled item schema");
    Ok(ITEM_SCHEMA.get_or_init(move || loaded))
}

/// Validate one record against the bundled item schema.
///
/// Returns `(is_valid, violations)`; `is_valid` is true exactly when
/// `violations` is empty. A record whose root is not an object yields a
/// single `TypeMismatch` rather than an error.
pub fn validate_entry(record: &Value) -> Result<(bool, Vec<Violation>), OevalError> {
    let schema = item_schema()?;
    Ok(validate_with(schema, record))
}

/// Validate one record against a caller-supplied schema.
pub fn validate_with(schema: &ItemSchema, record: &Value) -> (bool, Vec<Violation>) {
    let mut violations = Vec::new();
    validate(record, schema.fields(), &FieldPath::root(), &mut violations);
    (violations.is_empty(), violations)
}
