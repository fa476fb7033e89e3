//! # Schema Tree
//!
//! The raw schema document is parsed once into [`SchemaNode`]s:
//!
//! - a descriptor string, optionally tagged (`"[int] count"`),
//! - a mapping of field names to nested nodes (a required sub-object),
//! - a list template whose first element describes every list item.
//!
//! Any other JSON (numbers, booleans, null) is kept as [`SchemaNode::Opaque`]
//! and classifies as skippable. Parsing is total; only the root of an
//! [`ItemSchema`] is constrained to be a mapping.

use oeval_core::OevalError;
use serde_json::{Map, Value};

use crate::tag::Tag;

/// A descriptor string together with its parsed tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedString {
    text: String,
    tag: Option<Tag>,
}

impl TaggedString {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let tag = Tag::parse(&text);
        Self { text, tag }
    }

    /// The descriptor exactly as written.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The parsed tag, if the descriptor has one.
    pub fn tag(&self) -> Option<&Tag> {
        self.tag.as_ref()
    }

    /// True when the tag carries `auto` or `optional`.
    pub fn is_skippable(&self) -> bool {
        self.tag.as_ref().is_some_and(Tag::is_skippable)
    }
}

/// Field name → node, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    fields: Vec<(String, SchemaNode)>,
}

impl FieldMap {
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let fields = object
            .iter()
            .map(|(key, value)| (key.clone(), SchemaNode::from_value(value)))
            .collect();
        Self { fields }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, key: &str) -> Option<&SchemaNode> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_value(&self) -> Value {
        let object: Map<String, Value> = self
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), v.to_value()))
            .collect();
        Value::Object(object)
    }
}

/// One node of the schema tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaNode {
    Tagged(TaggedString),
    Mapping(FieldMap),
    /// Only the first element matters; it is the template for every item.
    ListTemplate(Vec<SchemaNode>),
    Opaque(Value),
}

impl SchemaNode {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::Tagged(TaggedString::new(s.as_str())),
            Value::Object(object) => Self::Mapping(FieldMap::from_object(object)),
            Value::Array(items) => Self::ListTemplate(items.iter().map(Self::from_value).collect()),
            other => Self::Opaque(other.clone()),
        }
    }

    /// The node as it appeared in the schema document. Reported as a
    /// violation's `field_desc`.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Tagged(s) => Value::String(s.text().to_string()),
            Self::Mapping(fields) => fields.to_value(),
            Self::ListTemplate(items) => Value::Array(items.iter().map(Self::to_value).collect()),
            Self::Opaque(v) => v.clone(),
        }
    }

    /// The template element of a list node.
    pub fn template(&self) -> Option<&SchemaNode> {
        match self {
            Self::ListTemplate(items) => items.first(),
            _ => None,
        }
    }
}

/// A complete item schema: a mapping at the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSchema {
    fields: FieldMap,
}

impl ItemSchema {
    /// Build from a parsed schema document. `schema_name` is only used in
    /// the error when the root is not a JSON object.
    pub fn from_value(schema_name: &str, value: &Value) -> Result<Self, OevalError> {
        match value {
            Value::Object(object) => Ok(Self {
                fields: FieldMap::from_object(object),
            }),
            other => Err(OevalError::schema_load(
                schema_name,
                format!(
                    "schema root must be a JSON object, found {}",
                    oeval_core::JsonKind::of(other)
                ),
            )),
        }
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    pub fn to_value(&self) -> Value {
        self.fields.to_value()
    }
}
