//! # oeval-schema — Tag-Driven Item Schema
//!
//! Validates contributor-submitted OpenEval items against a declarative
//! schema in which every field is a descriptor string, a nested mapping,
//! or a one-element list template:
//!
//! ```json
//! {
//!   "item_id": "[auto] unique item identifier",
//!   "title": "title text",
//!   "max_score": "[int or float] maximum attainable score",
//!   "input_content": [{"role": "speaker role", "text": "message text"}]
//! }
//! ```
//!
//! ## Layers
//!
//! - [`tag`]: the descriptor tag grammar, parsed once at load time.
//! - [`node`]: the schema tree ([`SchemaNode`], [`ItemSchema`]).
//! - [`classify`]: maps each node to a [`ValidationKind`]. Total: unknown
//!   shapes are skipped, never rejected.
//! - [`validate`]: the recursive walk that collects every violation.
//! - [`provider`]: schema sources, the process-wide cache, and
//!   [`validate_entry`].
//! - [`document`]: JSON / JSON Lines / YAML loading.
//!
//! ## Crate Policy
//!
//! - Depends only on `oeval-core` internally.
//! - Problems with a record are [`Violation`](oeval_core::Violation)s.
//!   Only an unloadable schema is an error.

pub mod classify;
pub mod document;
pub mod node;
pub mod provider;
pub mod tag;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use classify::{classify, describe_fields, requires_non_empty, FieldSummary, ValidationKind};
pub use document::{load_document, parse_document, DocumentFormat};
pub use node::{FieldMap, ItemSchema, SchemaNode, TaggedString};
pub use provider::{
    item_schema, validate_entry, validate_with, BundledSchema, FileSchema, SchemaProvider,
    BUNDLED_SCHEMA_NAME,
};
pub use tag::{BaseType, Tag, TypeSet, ValueType};
pub use validate::{validate, EXPECTED_OBJECT};
