//! # Recursive Validator
//!
//! Walks a record in lock-step with a [`FieldMap`], classifying each
//! declared field and appending every discrepancy to a caller-owned
//! violation list. It never stops early: one pass reports everything.
//!
//! | Kind | absent | present, wrong shape | present, well-shaped |
//! |---|---|---|---|
//! | `Auto` / `Optional` | skip | skip | skip |
//! | `RequiredString` | MissingField | `null` → NullOrEmptyValue, else TypeMismatch | ok |
//! | `RequiredAny` | MissingField | n/a | ok |
//! | `RequiredNumeric` | MissingField | TypeMismatch | ok |
//! | `RequiredObject` | MissingField | TypeMismatch | recurse |
//! | `RequiredStringList` | MissingField | TypeMismatch | emptiness, then element types |
//! | `RequiredDictList` | MissingField | TypeMismatch | emptiness, then recurse per element |

use oeval_core::{FieldPath, Violation};
use serde_json::Value;
use tracing::{debug, trace};

use crate::classify::{classify, requires_non_empty, ValidationKind};
use crate::node::FieldMap;

/// Descriptor reported when a value that must be an object is not one.
pub const EXPECTED_OBJECT: &str = "expected a JSON object";

/// Validate `data` against `schema`, appending violations to `out`.
///
/// `path` is the location of `data` within the whole record; pass
/// [`FieldPath::root()`] for a top-level record. If `data` is not an
/// object, a single `TypeMismatch` is recorded at `path` and nothing
/// below it is inspected.
pub fn validate(data: &Value, schema: &FieldMap, path: &FieldPath, out: &mut Vec<Violation>) {
    let Some(object) = data.as_object() else {
        record(
            out,
            Violation::type_mismatch(path.clone(), Value::String(EXPECTED_OBJECT.to_string()), data),
        );
        return;
    };

    for (key, node) in schema.iter() {
        let field_path = path.child(key);
        let kind = classify(node);
        trace!(field = %field_path, kind = kind.name(), "checking field");

        if kind.is_skippable() {
            continue;
        }

        let Some(value) = object.get(key) else {
            record(out, Violation::missing(field_path, node.to_value()));
            continue;
        };

        match kind {
            ValidationKind::Auto | ValidationKind::Optional => {}

            ValidationKind::RequiredString => {
                if value.is_null() {
                    record(out, Violation::null_or_empty(field_path, node.to_value(), value));
                } else if !value.is_string() {
                    record(out, Violation::type_mismatch(field_path, node.to_value(), value));
                }
            }

            ValidationKind::RequiredAny => {}

            ValidationKind::RequiredNumeric(allowed) => {
                if !allowed.accepts(value) {
                    record(out, Violation::type_mismatch(field_path, node.to_value(), value));
                }
            }

            ValidationKind::RequiredObject(fields) => {
                if value.is_object() {
                    validate(value, fields, &field_path, out);
                } else {
                    record(out, Violation::type_mismatch(field_path, node.to_value(), value));
                }
            }

            ValidationKind::RequiredStringList(elements) => {
                let Some(items) = value.as_array() else {
                    record(out, Violation::type_mismatch(field_path, node.to_value(), value));
                    continue;
                };
                if items.is_empty() && requires_non_empty(key) {
                    record(out, Violation::null_or_empty(field_path.clone(), node.to_value(), value));
                }
                if let Some(allowed) = elements {
                    for (i, item) in items.iter().enumerate() {
                        if !allowed.accepts(item) {
                            record(
                                out,
                                Violation::type_mismatch(field_path.index(i), node.to_value(), item),
                            );
                        }
                    }
                }
            }

            ValidationKind::RequiredDictList(template) => {
                let Some(items) = value.as_array() else {
                    record(out, Violation::type_mismatch(field_path, node.to_value(), value));
                    continue;
                };
                if items.is_empty() && requires_non_empty(key) {
                    record(out, Violation::null_or_empty(field_path.clone(), node.to_value(), value));
                }
                for (i, item) in items.iter().enumerate() {
                    validate(item, template, &field_path.index(i), out);
                }
            }
        }
    }
}

fn record(out: &mut Vec<Violation>, violation: Violation) {
    debug!(
        field = %violation.field,
        violation = %violation.violation_type,
        "schema violation"
    );
    out.push(violation);
}
