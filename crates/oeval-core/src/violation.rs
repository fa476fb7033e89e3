//! # Violations
//!
//! A violation is an immutable fact about a record: which field, which
//! schema descriptor it broke, and how. Validation collects every
//! violation in one pass, in schema declaration order.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::kind::JsonKind;
use crate::path::FieldPath;

/// How a field failed its schema descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    /// A required field is absent.
    MissingField,
    /// A required field is `null`, or a must-be-non-empty list is empty.
    NullOrEmptyValue,
    /// A field (or list element) has the wrong runtime type.
    TypeMismatch,
}

impl ViolationKind {
    /// Short human label.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::MissingField => "missing required field",
            Self::NullOrEmptyValue => "null or empty value",
            Self::TypeMismatch => "type mismatch",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MissingField => "MissingField",
            Self::NullOrEmptyValue => "NullOrEmptyValue",
            Self::TypeMismatch => "TypeMismatch",
        };
        f.write_str(name)
    }
}

/// A single discrepancy between a record and its schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Dotted path to the offending field or list element.
    pub field: FieldPath,
    /// The schema descriptor at that field, exactly as written in the schema.
    pub field_desc: Value,
    /// What went wrong.
    pub violation_type: ViolationKind,
    /// Runtime kind of the offending value, when one was present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found: Option<JsonKind>,
}

impl Violation {
    /// A required field is absent.
    pub fn missing(field: FieldPath, field_desc: Value) -> Self {
        Self {
            field,
            field_desc,
            violation_type: ViolationKind::MissingField,
            found: None,
        }
    }

    /// A required value is `null` or an empty list.
    pub fn null_or_empty(field: FieldPath, field_desc: Value, found: &Value) -> Self {
        Self {
            field,
            field_desc,
            violation_type: ViolationKind::NullOrEmptyValue,
            found: Some(JsonKind::of(found)),
        }
    }

    /// A value has the wrong runtime type.
    pub fn type_mismatch(field: FieldPath, field_desc: Value, found: &Value) -> Self {
        Self {
            field,
            field_desc,
            violation_type: ViolationKind::TypeMismatch,
            found: Some(JsonKind::of(found)),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.field, self.violation_type.describe(), self.violation_type)?;
        if let Some(found) = self.found {
            write!(f, ", found {found}")?;
        }
        match &self.field_desc {
            Value::String(desc) => write!(f, "; expected {desc:?}"),
            other => write!(f, "; expected {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_presentation_keys() {
        let v = Violation::missing(FieldPath::from("meta.contact.email"), json!("contact email"));
        let out = serde_json::to_value(&v).unwrap();
        assert_eq!(
            out,
            json!({
                "field": "meta.contact.email",
                "field_desc": "contact email",
                "violation_type": "MissingField"
            })
        );
    }

    #[test]
    fn found_kind_is_serialized_when_present() {
        let v = Violation::type_mismatch(FieldPath::from("title"), json!("title text"), &json!(5));
        let out = serde_json::to_value(&v).unwrap();
        assert_eq!(out["violation_type"], "TypeMismatch");
        assert_eq!(out["found"], "integer");
    }

    #[test]
    fn null_value_reports_null_kind() {
        let v = Violation::null_or_empty(FieldPath::from("title"), json!("t"), &Value::Null);
        assert_eq!(v.violation_type, ViolationKind::NullOrEmptyValue);
        assert_eq!(v.found, Some(JsonKind::Null));
    }

    #[test]
    fn display_mentions_path_kind_and_descriptor() {
        let v = Violation::type_mismatch(
            FieldPath::from("scores[0]"),
            json!("[int or float] a score"),
            &json!("x"),
        );
        let s = v.to_string();
        assert!(s.starts_with("scores[0]: type mismatch (TypeMismatch)"));
        assert!(s.contains("found string"));
        assert!(s.contains("[int or float] a score"));
    }

    #[test]
    fn root_violation_displays_root_marker() {
        let v = Violation::type_mismatch(FieldPath::root(), json!("expected a JSON object"), &json!(1));
        assert!(v.to_string().starts_with("(root):"));
    }
}
