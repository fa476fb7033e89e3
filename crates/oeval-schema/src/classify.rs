//! # Tag Classifier
//!
//! Maps every [`SchemaNode`] to exactly one [`ValidationKind`]. The
//! function is pure and total: it looks only at the node, never at data,
//! and anything it cannot interpret falls back to [`ValidationKind::Auto`]
//! so the validator skips it instead of failing.
//!
//! Descriptor strings, in order:
//!
//! 1. an `auto` token → `Auto`
//! 2. an `optional` token → `Optional`
//! 3. first token `list[...]` → `RequiredStringList`
//! 4. first token `any` → `RequiredAny`
//! 5. first token made only of `int`/`float`/`bool` joined by `or` →
//!    `RequiredNumeric`
//! 6. anything else, or no tag at all → `RequiredString`
//!
//! Mappings are `RequiredObject`. List templates follow their first
//! element: a skippable descriptor makes the whole field `Optional`, any
//! other descriptor gives `RequiredStringList`, a mapping gives
//! `RequiredDictList`.

use oeval_core::FieldPath;
use serde::Serialize;
use serde_json::Value;

use crate::node::{FieldMap, SchemaNode};
use crate::tag::{BaseType, TypeSet};

/// Field names whose list value must not be empty.
const NON_EMPTY_SUFFIX: &str = "_content";
const NON_EMPTY_NAME: &str = "responses";

/// How the validator treats one schema node.
///
/// Variants carry what their validator branch needs, borrowed from the
/// schema tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind<'a> {
    /// System-generated, or not interpretable. Skipped.
    Auto,
    /// May be absent. Skipped.
    Optional,
    /// Must be present and a string; `null` is reported separately.
    RequiredString,
    /// Must be present, any value.
    RequiredAny,
    /// Must be present and accepted by the set.
    RequiredNumeric(&'a TypeSet),
    /// Must be present and an object, validated recursively.
    RequiredObject(&'a FieldMap),
    /// Must be present and a list. Elements are checked against the set
    /// when one is known.
    RequiredStringList(Option<&'a TypeSet>),
    /// Must be present and a list; each element validated against the
    /// template mapping.
    RequiredDictList(&'a FieldMap),
}

impl ValidationKind<'_> {
    /// Stable snake_case label.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Optional => "optional",
            Self::RequiredString => "required_str",
            Self::RequiredAny => "required_any",
            Self::RequiredNumeric(_) => "required_numeric",
            Self::RequiredObject(_) => "required_dict",
            Self::RequiredStringList(_) => "required_list_str",
            Self::RequiredDictList(_) => "required_list_dict",
        }
    }

    /// True for kinds the validator never inspects.
    pub fn is_skippable(&self) -> bool {
        matches!(self, Self::Auto | Self::Optional)
    }
}

/// Classify a schema node.
pub fn classify(node: &SchemaNode) -> ValidationKind<'_> {
    match node {
        SchemaNode::Tagged(s) => {
            let Some(tag) = s.tag() else {
                return ValidationKind::RequiredString;
            };
            if tag.is_auto() {
                ValidationKind::Auto
            } else if tag.is_optional() {
                ValidationKind::Optional
            } else {
                match tag.base() {
                    BaseType::List(elements) => ValidationKind::RequiredStringList(non_empty(elements)),
                    BaseType::Any => ValidationKind::RequiredAny,
                    BaseType::Numeric(set) => ValidationKind::RequiredNumeric(set),
                    BaseType::Text => ValidationKind::RequiredString,
                }
            }
        }
        SchemaNode::Mapping(fields) => ValidationKind::RequiredObject(fields),
        SchemaNode::ListTemplate(_) => match node.template() {
            Some(SchemaNode::Tagged(s)) if s.is_skippable() => ValidationKind::Optional,
            Some(SchemaNode::Tagged(s)) => {
                ValidationKind::RequiredStringList(s.tag().and_then(|t| non_empty(t.type_set())))
            }
            Some(SchemaNode::Mapping(fields)) => ValidationKind::RequiredDictList(fields),
            Some(SchemaNode::ListTemplate(_) | SchemaNode::Opaque(_)) | None => ValidationKind::Auto,
        },
        SchemaNode::Opaque(_) => ValidationKind::Auto,
    }
}

fn non_empty(set: &TypeSet) -> Option<&TypeSet> {
    (!set.is_empty()).then_some(set)
}

/// Whether a list field named `key` must contain at least one element.
/// Depends only on the name, never on the element type.
pub fn requires_non_empty(key: &str) -> bool {
    key.ends_with(NON_EMPTY_SUFFIX) || key == NON_EMPTY_NAME
}

/// One row of a flattened schema listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSummary {
    /// Dotted path; items of an object list appear as `field[]`.
    pub path: FieldPath,
    /// [`ValidationKind::name`] of the field.
    pub kind: &'static str,
    /// Whether an empty list is rejected for this field.
    pub non_empty: bool,
    /// The descriptor as written.
    pub desc: Value,
}

/// Flatten a schema into one row per field, recursing into required
/// objects and object-list templates. Skippable containers are listed but
/// not entered.
pub fn describe_fields(fields: &FieldMap) -> Vec<FieldSummary> {
    let mut rows = Vec::new();
    describe_into(fields, &FieldPath::root(), &mut rows);
    rows
}

fn describe_into(fields: &FieldMap, path: &FieldPath, rows: &mut Vec<FieldSummary>) {
    for (key, node) in fields.iter() {
        let field_path = path.child(key);
        let kind = classify(node);
        let is_list = matches!(
            kind,
            ValidationKind::RequiredStringList(_) | ValidationKind::RequiredDictList(_)
        );
        // Containers would repeat their children; show the shape only.
        let desc = match kind {
            ValidationKind::RequiredObject(_) => Value::String("{...}".to_string()),
            ValidationKind::RequiredDictList(_) => Value::String("[{...}]".to_string()),
            _ => node.to_value(),
        };
        rows.push(FieldSummary {
            path: field_path.clone(),
            kind: kind.name(),
            non_empty: is_list && requires_non_empty(key),
            desc,
        });
        match kind {
            ValidationKind::RequiredObject(inner) => describe_into(inner, &field_path, rows),
            ValidationKind::RequiredDictList(template) => {
                describe_into(template, &field_path.each(), rows)
            }
            _ => {}
        }
    }
}
