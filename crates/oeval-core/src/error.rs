//! # Error Types
//!
//! Fatal conditions only. Anything wrong with a record itself is a
//! [`Violation`](crate::Violation) and never reaches this module.

use thiserror::Error;

/// Top-level error type for the item validator.
#[derive(Error, Debug)]
pub enum OevalError {
    /// The schema could not be produced: unreadable, unparseable, or
    /// rooted at something other than a mapping.
    #[error("schema load error for '{schema_name}': {reason}")]
    SchemaLoad {
        /// Schema filename or identifier.
        schema_name: String,
        /// Reason the schema could not be loaded.
        reason: String,
    },

    /// A batch of records could not be read or parsed.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoad {
        /// Path to the document that failed to load.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },
}

impl OevalError {
    /// Shorthand for [`OevalError::SchemaLoad`].
    pub fn schema_load(schema_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SchemaLoad {
            schema_name: schema_name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for [`OevalError::DocumentLoad`].
    pub fn document_load(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DocumentLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_load_display_names_schema_and_reason() {
        let err = OevalError::schema_load("item_schema.json", "root is not an object");
        let msg = err.to_string();
        assert!(msg.contains("item_schema.json"));
        assert!(msg.contains("root is not an object"));
    }

    #[test]
    fn document_load_display_names_path() {
        let err = OevalError::document_load("items.json", "invalid JSON: EOF");
        assert_eq!(
            err.to_string(),
            "document load error for 'items.json': invalid JSON: EOF"
        );
    }
}
