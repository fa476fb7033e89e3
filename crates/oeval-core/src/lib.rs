//! # oeval-core — Foundational Types for the Item Validator
//!
//! Shared vocabulary for every crate in the workspace. It depends on
//! nothing internal.
//!
//! ## Contents
//!
//! - [`FieldPath`]: dotted field paths with bracketed list indices,
//!   e.g. `item_metadata.contributors[2].email`.
//! - [`JsonKind`]: the runtime kind of a JSON value, used in
//!   diagnostics.
//! - [`Violation`] / [`ViolationKind`]: a single recorded discrepancy
//!   between a record and its schema. Violations are data, not errors.
//! - [`OevalError`]: fatal conditions (unloadable schema, unreadable
//!   input) that abort a validation run.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `oeval-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod kind;
pub mod path;
pub mod violation;

// Re-export primary types for ergonomic imports.
pub use error::OevalError;
pub use kind::JsonKind;
pub use path::FieldPath;
pub use violation::{Violation, ViolationKind};
